//! Lightbox state machine.
//!
//! ```text
//! Closed --open--> Default --zoom in / double-click--> Zoomed
//! Zoomed --pointer down--> Panning --pointer up / leave--> Zoomed
//! any open --close / Escape / backdrop click--> Closed
//! any open --index change--> Default (transform reset)
//! ```

use serde::Serialize;

use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::image::FallbackSet;
use crate::input::{Action, ClickTarget};
use crate::transform::{Point, Transform};

/// Observable state of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Closed,
    Default,
    Zoomed,
    Panning,
}

/// Result of feeding an action or click to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing the caller needs to react to.
    None,
    /// The viewer closed; the caller should drop its scroll guard and
    /// stop rendering.
    Closed,
}

/// Full-screen image viewer over an ordered image sequence.
#[derive(Debug, Clone)]
pub struct Lightbox {
    config: ViewerConfig,
    images: Vec<String>,
    index: usize,
    open: bool,
    transform: Transform,
    /// Pointer position minus pan at drag start; `Some` while panning.
    drag_origin: Option<Point>,
    /// The current drag has moved the image.
    drag_moved: bool,
    /// Swallow the click the browser fires when a drag is released.
    release_click: bool,
    main_fallback: FallbackSet,
    thumb_fallback: FallbackSet,
}

impl Default for Lightbox {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl Lightbox {
    /// A closed viewer.
    pub fn new(config: ViewerConfig) -> Self {
        let main_fallback = FallbackSet::new(config.fallback_image.clone());
        let thumb_fallback = FallbackSet::new(config.fallback_thumbnail.clone());
        Self {
            config,
            images: Vec::new(),
            index: 0,
            open: false,
            transform: Transform::IDENTITY,
            drag_origin: None,
            drag_moved: false,
            release_click: false,
            main_fallback,
            thumb_fallback,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Open over `images` at `initial`, clamped into range.
    ///
    /// An empty sequence is refused and the viewer stays closed.
    pub fn open(&mut self, images: Vec<String>, initial: usize) -> Result<(), ViewerError> {
        if images.is_empty() {
            self.close();
            return Err(ViewerError::EmptySequence);
        }
        self.index = initial.min(images.len() - 1);
        self.images = images;
        self.open = true;
        self.main_fallback.clear();
        self.thumb_fallback.clear();
        self.reset_view();
        Ok(())
    }

    /// Close. Returns whether the viewer was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        self.drag_origin = None;
        self.drag_moved = false;
        self.release_click = false;
        self.transform = Transform::IDENTITY;
        was_open
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn phase(&self) -> Phase {
        if !self.open {
            Phase::Closed
        } else if self.drag_origin.is_some() {
            Phase::Panning
        } else if self.transform.is_zoomed() {
            Phase::Zoomed
        } else {
            Phase::Default
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn zoom(&self) -> f64 {
        self.transform.zoom
    }

    pub fn rotation(&self) -> u16 {
        self.transform.rotation
    }

    pub fn pan(&self) -> Point {
        self.transform.pan
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    // -- navigation --

    /// Move by `step` with wraparound. No-op with one image or fewer.
    pub fn advance(&mut self, step: isize) {
        let len = self.images.len();
        if !self.open || len <= 1 {
            return;
        }
        let len = len as isize;
        let next = (self.index as isize + step).rem_euclid(len) as usize;
        self.go_to(next);
    }

    pub fn next(&mut self) {
        self.advance(1);
    }

    pub fn previous(&mut self) {
        self.advance(-1);
    }

    /// Jump to `index`, clamped to the last image.
    pub fn set_index(&mut self, index: usize) {
        if !self.open || self.images.is_empty() {
            return;
        }
        self.go_to(index.min(self.images.len() - 1));
    }

    fn go_to(&mut self, index: usize) {
        if index != self.index {
            self.index = index;
            self.reset_view();
        }
    }

    fn reset_view(&mut self) {
        self.transform = Transform::IDENTITY;
        self.drag_origin = None;
    }

    // -- transform --

    pub fn zoom_in(&mut self) {
        if self.open {
            let z = self.config.clamp_zoom(self.transform.zoom * self.config.zoom_step);
            self.transform.set_zoom(z);
        }
    }

    pub fn zoom_out(&mut self) {
        if self.open {
            let z = self.config.clamp_zoom(self.transform.zoom / self.config.zoom_step);
            self.transform.set_zoom(z);
            if !self.transform.is_zoomed() {
                self.drag_origin = None;
            }
        }
    }

    /// Alternate between 1x and `target`; any other zoom returns to 1x.
    fn toggle_to(&mut self, target: f64) {
        if !self.open {
            return;
        }
        if self.transform.zoom == 1.0 {
            self.transform.set_zoom(target);
        } else {
            self.transform.set_zoom(1.0);
            self.drag_origin = None;
        }
    }

    /// Single zoom control of the compact viewer.
    pub fn toggle_zoom(&mut self) {
        self.toggle_to(self.config.toggle_zoom);
    }

    pub fn double_click(&mut self) {
        self.toggle_to(self.config.double_click_zoom);
    }

    pub fn rotate(&mut self) {
        if self.open {
            self.transform.rotate_by(self.config.rotation_step);
        }
    }

    // -- pointer --

    /// Start a drag. Ignored unless zoomed past 1x.
    pub fn pointer_down(&mut self, at: Point) {
        self.release_click = false;
        if self.open && self.transform.is_zoomed() {
            self.drag_origin = Some(at - self.transform.pan);
            self.drag_moved = false;
        }
    }

    pub fn pointer_move(&mut self, at: Point) {
        if let Some(origin) = self.drag_origin {
            if self.transform.is_zoomed() {
                let pan = at - origin;
                self.drag_moved |= pan != self.transform.pan;
                self.transform.pan = pan;
            }
        }
    }

    /// End a drag, keeping the pan offset. Also used for pointer leave.
    ///
    /// A drag that moved the image swallows the next click, so releasing
    /// over the backdrop does not close the viewer.
    pub fn pointer_up(&mut self) {
        if self.drag_origin.take().is_some() && self.drag_moved {
            self.release_click = true;
        }
        self.drag_moved = false;
    }

    // -- dispatch --

    pub fn dispatch(&mut self, action: Action) -> Effect {
        if !self.open {
            return Effect::None;
        }
        match action {
            Action::Close => {
                self.close();
                return Effect::Closed;
            }
            Action::Next => self.next(),
            Action::Previous => self.previous(),
            Action::ZoomIn => self.zoom_in(),
            Action::ZoomOut => self.zoom_out(),
            Action::Rotate => self.rotate(),
            Action::ToggleZoom => self.toggle_zoom(),
            Action::DoubleClick => self.double_click(),
            Action::GoTo(i) => self.set_index(i),
        }
        Effect::None
    }

    /// Handle a `keydown`. Unmapped keys do nothing.
    pub fn key(&mut self, key: &str) -> Effect {
        match Action::from_key(key) {
            Some(action) => self.dispatch(action),
            None => Effect::None,
        }
    }

    pub fn click(&mut self, target: ClickTarget) -> Effect {
        if std::mem::take(&mut self.release_click) {
            return Effect::None;
        }
        match target {
            ClickTarget::Backdrop => self.dispatch(Action::Close),
            ClickTarget::Image | ClickTarget::Control => Effect::None,
        }
    }

    // -- rendering --

    /// Source for the main image, after fallback substitution.
    pub fn current_src(&self) -> Option<&str> {
        let original = self.images.get(self.index)?;
        Some(self.main_fallback.source(self.index, original))
    }

    pub fn thumbnail_src(&self, index: usize) -> Option<&str> {
        let original = self.images.get(index)?;
        Some(self.thumb_fallback.source(index, original))
    }

    /// The main image failed to load.
    pub fn main_image_failed(&mut self) -> bool {
        self.main_fallback.mark_failed(self.index)
    }

    pub fn thumbnail_failed(&mut self, index: usize) -> bool {
        self.thumb_fallback.mark_failed(index)
    }

    /// CSS `transform` for the main image.
    pub fn css_transform(&self) -> String {
        self.transform.css()
    }

    /// CSS `transition`; disabled while dragging so the image tracks the pointer.
    pub fn css_transition(&self) -> &'static str {
        if self.is_dragging() {
            "none"
        } else {
            "transform 0.3s ease-out"
        }
    }

    /// CSS cursor for the main image.
    pub fn cursor(&self) -> &'static str {
        match self.phase() {
            Phase::Panning => "grabbing",
            Phase::Zoomed => "grab",
            _ => "zoom-in",
        }
    }

    /// Arrows and counter are shown only with more than one image.
    pub fn show_navigation(&self) -> bool {
        self.images.len() > 1
    }

    pub fn show_thumbnails(&self) -> bool {
        self.images.len() > 1 && self.images.len() <= self.config.thumbnail_limit
    }

    /// "3 / 7"
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.images.len())
    }

    /// Alt text for the main image.
    pub fn alt_text(&self) -> String {
        format!("Image {} of {}", self.index + 1, self.images.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("/img/{i}.jpg")).collect()
    }

    fn opened(n: usize, at: usize) -> Lightbox {
        let mut lb = Lightbox::default();
        lb.open(images(n), at).unwrap();
        lb
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_sequence_refused() {
        let mut lb = Lightbox::default();
        assert_eq!(lb.open(Vec::new(), 0), Err(ViewerError::EmptySequence));
        assert_eq!(lb.phase(), Phase::Closed);
        assert_eq!(lb.current_src(), None);
        assert_eq!(lb.key("ArrowRight"), Effect::None);
    }

    #[test]
    fn test_initial_index_clamped() {
        let lb = opened(3, 99);
        assert_eq!(lb.index(), 2);
    }

    #[test]
    fn test_wraparound() {
        let mut lb = opened(4, 0);
        lb.previous();
        assert_eq!(lb.index(), 3);
        lb.next();
        assert_eq!(lb.index(), 0);
        lb.advance(-9);
        assert_eq!(lb.index(), 3);
    }

    #[test]
    fn test_single_image_navigation_is_noop() {
        let mut lb = opened(1, 0);
        lb.zoom_in();
        lb.next();
        assert_eq!(lb.index(), 0);
        assert!(lb.zoom() > 1.0);
        assert!(!lb.show_navigation());
        assert!(!lb.show_thumbnails());
    }

    #[test]
    fn test_set_index_clamps_and_resets() {
        let mut lb = opened(5, 0);
        lb.rotate();
        lb.set_index(42);
        assert_eq!(lb.index(), 4);
        assert_eq!(lb.transform(), Transform::IDENTITY);
    }

    #[test]
    fn test_set_same_index_keeps_transform() {
        let mut lb = opened(5, 2);
        lb.rotate();
        lb.set_index(2);
        assert_eq!(lb.rotation(), 90);
    }

    #[test]
    fn test_zoom_clamps() {
        let mut lb = opened(2, 0);
        for _ in 0..10 {
            lb.zoom_in();
        }
        assert!(approx(lb.zoom(), 5.0));
        for _ in 0..10 {
            lb.zoom_out();
        }
        assert!(approx(lb.zoom(), 0.5));
        assert_eq!(lb.phase(), Phase::Default);
    }

    #[test]
    fn test_double_click_toggles_and_resets_pan() {
        let mut lb = opened(2, 0);
        lb.double_click();
        assert!(approx(lb.zoom(), 2.0));
        lb.pointer_down(Point::new(10.0, 10.0));
        lb.pointer_move(Point::new(30.0, 15.0));
        lb.pointer_up();
        assert_eq!(lb.pan(), Point::new(20.0, 5.0));

        lb.double_click();
        assert_eq!(lb.zoom(), 1.0);
        assert_eq!(lb.pan(), Point::ORIGIN);
    }

    #[test]
    fn test_toggle_zoom_uses_compact_factor() {
        let mut lb = opened(2, 0);
        lb.toggle_zoom();
        assert!(approx(lb.zoom(), 1.5));
        lb.toggle_zoom();
        assert_eq!(lb.zoom(), 1.0);
    }

    #[test]
    fn test_drag_is_relative() {
        let mut lb = opened(2, 0);
        lb.zoom_in();
        lb.pointer_down(Point::new(100.0, 100.0));
        assert_eq!(lb.phase(), Phase::Panning);
        lb.pointer_move(Point::new(110.0, 90.0));
        lb.pointer_up();
        assert_eq!(lb.phase(), Phase::Zoomed);

        // Second drag continues from the previous offset.
        lb.pointer_down(Point::new(0.0, 0.0));
        lb.pointer_move(Point::new(5.0, 5.0));
        assert_eq!(lb.pan(), Point::new(15.0, -5.0));
        assert_eq!(lb.css_transition(), "none");
    }

    #[test]
    fn test_drag_release_over_backdrop_keeps_viewer_open() {
        let mut lb = opened(3, 0);
        lb.zoom_in();
        lb.pointer_down(Point::new(200.0, 200.0));
        lb.pointer_move(Point::new(20.0, 240.0));
        lb.pointer_up();

        assert_eq!(lb.click(ClickTarget::Backdrop), Effect::None);
        assert!(lb.is_open());
        assert_eq!(lb.pan(), Point::new(-180.0, 40.0));

        // Only the release click is swallowed.
        assert_eq!(lb.click(ClickTarget::Backdrop), Effect::Closed);
    }

    #[test]
    fn test_press_without_move_still_closes_on_backdrop() {
        let mut lb = opened(3, 0);
        lb.zoom_in();
        lb.pointer_down(Point::new(50.0, 50.0));
        lb.pointer_move(Point::new(50.0, 50.0));
        lb.pointer_up();
        assert_eq!(lb.click(ClickTarget::Backdrop), Effect::Closed);
    }

    #[test]
    fn test_no_drag_when_unzoomed() {
        let mut lb = opened(2, 0);
        lb.pointer_down(Point::new(1.0, 1.0));
        lb.pointer_move(Point::new(50.0, 50.0));
        assert_eq!(lb.phase(), Phase::Default);
        assert_eq!(lb.pan(), Point::ORIGIN);
    }

    #[test]
    fn test_backdrop_closes_image_does_not() {
        let mut lb = opened(3, 1);
        assert_eq!(lb.click(ClickTarget::Image), Effect::None);
        assert_eq!(lb.click(ClickTarget::Control), Effect::None);
        assert!(lb.is_open());
        assert_eq!(lb.click(ClickTarget::Backdrop), Effect::Closed);
        assert_eq!(lb.phase(), Phase::Closed);
    }

    #[test]
    fn test_fallbacks_are_independent() {
        let mut lb = opened(3, 1);
        assert!(lb.main_image_failed());
        assert_eq!(lb.current_src(), Some(lb.config().fallback_image.as_str()));
        assert_eq!(lb.thumbnail_src(1), Some("/img/1.jpg"));

        assert!(lb.thumbnail_failed(2));
        assert_eq!(
            lb.thumbnail_src(2),
            Some(lb.config().fallback_thumbnail.as_str())
        );
    }

    #[test]
    fn test_thumbnail_limit() {
        assert!(opened(10, 0).show_thumbnails());
        assert!(!opened(11, 0).show_thumbnails());
        assert!(opened(11, 0).show_navigation());
    }

    #[test]
    fn test_labels() {
        let lb = opened(7, 2);
        assert_eq!(lb.counter_label(), "3 / 7");
        assert_eq!(lb.alt_text(), "Image 3 of 7");
        assert_eq!(lb.cursor(), "zoom-in");
    }
}
