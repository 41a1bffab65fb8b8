//! Mapping from browser input to lightbox actions.

/// Something the lightbox can be asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Close,
    Next,
    Previous,
    ZoomIn,
    ZoomOut,
    Rotate,
    ToggleZoom,
    DoubleClick,
    GoTo(usize),
}

impl Action {
    /// Keyboard shortcut for a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Action> {
        match key {
            "Escape" => Some(Action::Close),
            "ArrowLeft" => Some(Action::Previous),
            "ArrowRight" => Some(Action::Next),
            "+" | "=" => Some(Action::ZoomIn),
            "-" => Some(Action::ZoomOut),
            "r" | "R" => Some(Action::Rotate),
            _ => None,
        }
    }
}

/// Where a click landed inside the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the image. Closes the viewer.
    Backdrop,
    /// The image itself; reserved for zoom and drag.
    Image,
    /// A toolbar button, arrow, or thumbnail.
    Control,
}
