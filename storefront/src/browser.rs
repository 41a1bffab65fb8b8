//! Browser-side implementations of the library seams.

use leptos::prelude::{document, window};
use pods_observability::{LogLevel, LogSink};
use pods_quote::channel::{Handoff, HandoffSink};
use pods_viewer::scroll::ScrollTarget;

/// Writes log lines to the JS console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, level: LogLevel, line: &str) {
        match level {
            LogLevel::Error => leptos::logging::error!("{}", line),
            LogLevel::Warn => leptos::logging::warn!("{}", line),
            _ => leptos::logging::log!("{}", line),
        }
    }
}

/// Opens hand-off links: WhatsApp in a new tab, mail in the current one.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHandoff;

impl HandoffSink for WindowHandoff {
    fn open(&mut self, handoff: &Handoff) {
        let window = window();
        let opened = match handoff {
            Handoff::WhatsApp { url } => window
                .open_with_url_and_target(url, "_blank")
                .map(|_| ()),
            Handoff::Mail { url } => window.location().set_href(url),
        };
        if opened.is_err() {
            leptos::logging::warn!("could not open {} link", handoff.channel());
        }
    }
}

/// Suspends scrolling by setting `overflow: hidden` on `<body>`.
///
/// Looks the body up on every call so the target holds no JS handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyOverflow;

impl BodyOverflow {
    fn set(value: &str) {
        let Some(body) = document().body() else {
            return;
        };
        if body.style().set_property("overflow", value).is_err() {
            leptos::logging::warn!("could not set body overflow to {:?}", value);
        }
    }
}

impl ScrollTarget for BodyOverflow {
    fn lock(&mut self) {
        Self::set("hidden");
    }

    fn unlock(&mut self) {
        Self::set("");
    }
}

/// Blocking alert, used for validation messages.
pub fn alert(message: &str) {
    if window().alert_with_message(message).is_err() {
        leptos::logging::warn!("alert blocked: {}", message);
    }
}
