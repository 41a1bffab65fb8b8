//! Viewer settings.

use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

/// Tunables for the lightbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Multiplier applied by zoom in / divided by zoom out.
    pub zoom_step: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Zoom reached by double-clicking an unzoomed image.
    pub double_click_zoom: f64,
    /// Zoom reached by the single zoom toggle control.
    pub toggle_zoom: f64,
    /// Degrees added per rotate.
    pub rotation_step: u16,
    /// Thumbnails are shown only up to this many images.
    pub thumbnail_limit: usize,
    /// Substitute for a main image that fails to load.
    pub fallback_image: String,
    /// Substitute for a thumbnail that fails to load.
    pub fallback_thumbnail: String,
}

const FALLBACK_BASE: &str =
    "https://images.pexels.com/photos/271816/pexels-photo-271816.jpeg?auto=compress&cs=tinysrgb";

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_step: 1.5,
            min_zoom: 0.5,
            max_zoom: 5.0,
            double_click_zoom: 2.0,
            toggle_zoom: 1.5,
            rotation_step: 90,
            thumbnail_limit: 10,
            fallback_image: format!("{FALLBACK_BASE}&w=800"),
            fallback_thumbnail: format!("{FALLBACK_BASE}&w=100"),
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), ViewerError> {
        let invalid = |msg: String| Err(ViewerError::InvalidConfig(msg));

        if !(self.min_zoom > 0.0 && self.min_zoom.is_finite()) {
            return invalid(format!("min_zoom must be positive, got {}", self.min_zoom));
        }
        if !(self.max_zoom.is_finite() && self.min_zoom <= self.max_zoom) {
            return invalid(format!(
                "min_zoom {} exceeds max_zoom {}",
                self.min_zoom, self.max_zoom
            ));
        }
        if !(self.min_zoom <= 1.0 && 1.0 <= self.max_zoom) {
            return invalid("zoom range must include 1".to_string());
        }
        if !(self.zoom_step > 1.0 && self.zoom_step.is_finite()) {
            return invalid(format!("zoom_step must exceed 1, got {}", self.zoom_step));
        }
        for (name, z) in [
            ("double_click_zoom", self.double_click_zoom),
            ("toggle_zoom", self.toggle_zoom),
        ] {
            if !(z > 1.0 && z <= self.max_zoom) {
                return invalid(format!("{name} must be in (1, max_zoom], got {z}"));
            }
        }
        if self.rotation_step == 0 || self.rotation_step % 360 == 0 {
            return invalid("rotation_step must not be a multiple of 360".to_string());
        }
        Ok(())
    }

    pub(crate) fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ViewerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_ranges() {
        let bad = [
            ViewerConfig { min_zoom: 0.0, ..Default::default() },
            ViewerConfig { min_zoom: 6.0, ..Default::default() },
            ViewerConfig { zoom_step: 1.0, ..Default::default() },
            ViewerConfig { double_click_zoom: 9.0, ..Default::default() },
            ViewerConfig { rotation_step: 360, ..Default::default() },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{config:?}");
        }
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let config: ViewerConfig = serde_json::from_str(r#"{"max_zoom": 8.0}"#).unwrap();
        assert_eq!(config.max_zoom, 8.0);
        assert_eq!(config.zoom_step, 1.5);
    }
}
