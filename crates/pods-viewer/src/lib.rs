//! Image lightbox for the storefront.
//!
//! The viewer is a plain state machine driven by input events; rendering
//! and event wiring live in the web front end. See [`lightbox::Lightbox`].

pub mod config;
pub mod error;
pub mod image;
pub mod input;
pub mod lightbox;
pub mod scroll;
pub mod transform;

pub use config::ViewerConfig;
pub use error::ViewerError;
pub use lightbox::{Effect, Lightbox, Phase};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::ViewerConfig;
    pub use crate::error::ViewerError;
    pub use crate::input::{Action, ClickTarget};
    pub use crate::lightbox::{Effect, Lightbox, Phase};
    pub use crate::scroll::{ScrollGuard, ScrollLock, ScrollTarget};
    pub use crate::transform::{Point, Transform};
}
