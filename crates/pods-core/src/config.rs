//! Site configuration.
//!
//! Loaded from `pods.toml` (or `.pods.toml` / `pods.json`), searched from the
//! working directory upward. Every section is optional and falls back to the
//! shipped defaults:
//!
//! ```toml
//! [site]
//! name = "BIDUA Pods"
//!
//! [pricing]
//! base_per_set = 500000
//! tax_rate_bps = 1800
//!
//! [enquiry]
//! whatsapp_number = "919876543210"
//!
//! [viewer]
//! max_zoom = 5.0
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use pods_observability::{LogFormat, LogLevel, StructuredLogger};
use pods_quote::channel::ChannelConfig;
use pods_quote::pricing::PricingTable;
use pods_viewer::ViewerConfig;

use crate::error::SiteError;

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["pods.toml", ".pods.toml", "pods.json"];

/// Complete site configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub pricing: PricingTable,
    #[serde(default)]
    pub enquiry: ChannelConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
}

/// Site identity and logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Brand name.
    pub name: String,
    /// Default page title.
    pub title: String,
    /// Stylesheet path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
    pub log_level: LogLevel,
    pub log_format: LogFormat,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: "BIDUA Pods".to_string(),
            title: "BIDUA Pods - Capsule Beds & Sleeping Pods".to_string(),
            css: Some("/style/main.css".to_string()),
            log_level: LogLevel::Info,
            log_format: LogFormat::Json,
        }
    }
}

impl SiteConfig {
    /// Parse TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, SiteError> {
        toml::from_str(content).map_err(|e| SiteError::Parse {
            path: PathBuf::from("<inline>"),
            message: e.to_string(),
        })
    }

    /// Load a config file; `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SiteError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = if is_json(path) {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            toml::from_str(&content).map_err(|e| e.to_string())
        };
        parsed.map_err(|message| SiteError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Serialize in the format implied by `path`.
    pub fn render(&self, path: impl AsRef<Path>) -> Result<String, SiteError> {
        if is_json(path.as_ref()) {
            serde_json::to_string_pretty(self).map_err(|e| SiteError::Serialize(e.to_string()))
        } else {
            toml::to_string_pretty(self).map_err(|e| SiteError::Serialize(e.to_string()))
        }
    }

    /// Write to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SiteError> {
        let path = path.as_ref();
        let content = self.render(path)?;
        std::fs::write(path, content).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Find the nearest config file from `start` upward.
    pub fn find(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_FILE_NAMES {
                let candidate = current.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load the nearest config file, or defaults when there is none.
    ///
    /// Returns the path that was loaded, if any.
    pub fn discover(start: &Path) -> Result<(Self, Option<PathBuf>), SiteError> {
        match Self::find(start) {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Check every section.
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.site.name.trim().is_empty() {
            return Err(SiteError::Config("site.name must not be empty".to_string()));
        }
        if !self.enquiry.fallback_email.contains('@') {
            return Err(SiteError::Config(format!(
                "enquiry.fallback_email is not an address: {}",
                self.enquiry.fallback_email
            )));
        }
        self.pricing.validate()?;
        self.viewer.validate()?;
        Ok(())
    }

    /// Logger configured from the `[site]` section.
    pub fn logger(&self, component: &str) -> StructuredLogger {
        StructuredLogger::new(component)
            .with_min_level(self.site.log_level)
            .with_format(self.site.log_format)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Commented starter file written by `pods config init`.
pub fn default_config_template() -> String {
    r#"# BIDUA Pods site configuration

[site]
name = "BIDUA Pods"
title = "BIDUA Pods - Capsule Beds & Sleeping Pods"
log_level = "info"
log_format = "json"

[pricing]
# Whole rupees per set (two pods, upper + lower)
base_per_set = 500000
delivery_per_set = 15000
# Basis points: 1800 = 18%
tax_rate_bps = 1800
tax_label = "GST"

[pricing.add_ons]
panels = 25000
tv = 30000
bedding = 6000
safe = 8000
card = 5000
table = 4000

[enquiry]
# Replace with the sales WhatsApp number; the placeholder routes enquiries to email
whatsapp_number = "91XXXXXXXXXX"
fallback_email = "sales@biduapods.com"
subject = "Capsule Beds Enquiry"

[viewer]
zoom_step = 1.5
min_zoom = 0.5
max_zoom = 5.0
double_click_zoom = 2.0
thumbnail_limit = 10
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pods_quote::Money;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_template_matches_defaults() {
        let config = SiteConfig::from_toml_str(&default_config_template()).unwrap();
        assert_eq!(config.pricing, PricingTable::default());
        assert_eq!(config.enquiry, ChannelConfig::default());
        assert_eq!(config.viewer, ViewerConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections() {
        let config = SiteConfig::from_toml_str(
            r#"
            [pricing]
            base_per_set = 450000

            [pricing.add_ons]
            tv = 28000

            [enquiry]
            whatsapp_number = "919876543210"
            "#,
        )
        .unwrap();
        assert_eq!(config.pricing.base_per_set, Money::new(450_000));
        assert_eq!(config.pricing.delivery_per_set, Money::new(15_000));
        assert_eq!(config.pricing.add_ons.tv, Money::new(28_000));
        assert_eq!(config.pricing.add_ons.panels, Money::new(25_000));
        assert_eq!(config.enquiry.whatsapp(), Some("919876543210"));
        assert_eq!(config.enquiry.fallback_email, "sales@biduapods.com");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases = [
            "[pricing]\nbase_per_set = 0",
            "[pricing]\ntax_rate_bps = 12000",
            "[viewer]\nmin_zoom = 0.0",
            "[viewer]\nmin_zoom = 2.0\nmax_zoom = 1.5",
            "[viewer]\nzoom_step = 1.0",
            "[enquiry]\nfallback_email = \"nobody\"",
            "[site]\nname = \" \"",
        ];
        for case in cases {
            let config = SiteConfig::from_toml_str(case).unwrap();
            assert!(config.validate().is_err(), "{case}");
        }
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = SiteConfig::from_toml_str("[pricing\n").unwrap_err();
        assert!(matches!(err, SiteError::Parse { .. }));
    }

    #[test]
    fn test_toml_render_round_trips() {
        let mut config = SiteConfig::default();
        config.enquiry.whatsapp_number = None;
        let text = config.render("pods.toml").unwrap();
        let back = SiteConfig::from_toml_str(&text).unwrap();
        // A missing number falls back to the placeholder default.
        assert_eq!(back.enquiry.whatsapp(), None);
        assert_eq!(back.pricing, config.pricing);
    }
}
