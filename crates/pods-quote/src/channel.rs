//! Outbound enquiry channels.
//!
//! An enquiry leaves the site as a link: a WhatsApp deep link when a number
//! is configured, otherwise a `mailto:` link. Opening the link is delegated
//! to a [`HandoffSink`] so the caller decides what "open" means (a new
//! browser tab, printing to a terminal, recording in a test).

use serde::{Deserialize, Serialize};

/// Marker in the shipped placeholder number.
const PLACEHOLDER_MARKER: &str = "XXXXXXXXXX";

/// Where enquiries are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// WhatsApp number in international format without `+`, e.g. "919876543210".
    #[serde(
        default = "default_whatsapp_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub whatsapp_number: Option<String>,
    #[serde(default = "default_fallback_email")]
    pub fallback_email: String,
    #[serde(default = "default_subject")]
    pub subject: String,
}

fn default_whatsapp_number() -> Option<String> {
    Some("91XXXXXXXXXX".to_string())
}

fn default_fallback_email() -> String {
    "sales@biduapods.com".to_string()
}

fn default_subject() -> String {
    crate::enquiry::ENQUIRY_HEADING.to_string()
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: default_whatsapp_number(),
            fallback_email: default_fallback_email(),
            subject: default_subject(),
        }
    }
}

impl ChannelConfig {
    /// The WhatsApp number, if one is configured and is not the placeholder.
    pub fn whatsapp(&self) -> Option<&str> {
        self.whatsapp_number
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty() && !n.contains(PLACEHOLDER_MARKER))
    }

    /// Pick the channel for `message`.
    pub fn handoff(&self, message: &str) -> Handoff {
        match self.whatsapp() {
            Some(number) => Handoff::whatsapp(number, message),
            None => Handoff::mail(&self.fallback_email, &self.subject, message),
        }
    }
}

/// A link that carries an enquiry out of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "channel", rename_all = "lowercase")]
pub enum Handoff {
    WhatsApp { url: String },
    Mail { url: String },
}

impl Handoff {
    /// `https://wa.me/<number>?text=<message>`
    pub fn whatsapp(number: &str, message: &str) -> Self {
        Handoff::WhatsApp {
            url: format!(
                "https://wa.me/{}?text={}",
                number,
                urlencoding::encode(message)
            ),
        }
    }

    /// `mailto:<to>?subject=<subject>&body=<message>`
    pub fn mail(to: &str, subject: &str, message: &str) -> Self {
        Handoff::Mail {
            url: format!(
                "mailto:{}?subject={}&body={}",
                to,
                urlencoding::encode(subject),
                urlencoding::encode(message)
            ),
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Handoff::WhatsApp { url } | Handoff::Mail { url } => url,
        }
    }

    /// Channel name for logs.
    pub fn channel(&self) -> &'static str {
        match self {
            Handoff::WhatsApp { .. } => "whatsapp",
            Handoff::Mail { .. } => "mail",
        }
    }
}

/// Something that can open a hand-off link.
pub trait HandoffSink {
    fn open(&mut self, handoff: &Handoff);
}

/// Sink that keeps every hand-off it was asked to open.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub opened: Vec<Handoff>,
}

impl HandoffSink for RecordingSink {
    fn open(&mut self, handoff: &Handoff) {
        self.opened.push(handoff.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_number_falls_back_to_mail() {
        let config = ChannelConfig::default();
        assert_eq!(config.whatsapp(), None);
        let handoff = config.handoff("Hi there");
        assert_eq!(
            handoff,
            Handoff::Mail {
                url: "mailto:sales@biduapods.com?subject=Capsule%20Beds%20Enquiry&body=Hi%20there"
                    .to_string()
            }
        );
    }

    #[test]
    fn test_configured_number_uses_whatsapp() {
        let config = ChannelConfig {
            whatsapp_number: Some("919876543210".to_string()),
            ..Default::default()
        };
        let handoff = config.handoff("Qty: 2\nTotal: \u{20b9}1");
        assert_eq!(handoff.channel(), "whatsapp");
        assert_eq!(
            handoff.url(),
            "https://wa.me/919876543210?text=Qty%3A%202%0ATotal%3A%20%E2%82%B91"
        );
    }

    #[test]
    fn test_missing_or_blank_number_falls_back() {
        for number in [None, Some(String::new()), Some("  ".to_string())] {
            let config = ChannelConfig {
                whatsapp_number: number,
                ..Default::default()
            };
            assert_eq!(config.handoff("x").channel(), "mail");
        }
    }

    #[test]
    fn test_recording_sink() {
        let mut sink = RecordingSink::default();
        sink.open(&Handoff::mail("a@b.c", "s", "m"));
        assert_eq!(sink.opened.len(), 1);
    }
}
