//! General contact form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::channel::Handoff;
use crate::enquiry::or_dash;
use crate::error::{QuoteError, RequiredField};

/// Reason for getting in touch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    #[default]
    General,
    Quote,
    Demo,
    Support,
    Partnership,
}

impl InquiryType {
    pub const ALL: [InquiryType; 5] = [
        InquiryType::General,
        InquiryType::Quote,
        InquiryType::Demo,
        InquiryType::Support,
        InquiryType::Partnership,
    ];

    /// Form value.
    pub fn key(&self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::Quote => "quote",
            InquiryType::Demo => "demo",
            InquiryType::Support => "support",
            InquiryType::Partnership => "partnership",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InquiryType::General => "General Information",
            InquiryType::Quote => "Request Quote",
            InquiryType::Demo => "Schedule Demo",
            InquiryType::Support => "Technical Support",
            InquiryType::Partnership => "Partnership",
        }
    }

    /// Parse a form value; unknown values mean a general enquiry.
    pub fn from_key(key: &str) -> Self {
        InquiryType::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(key.trim()))
            .unwrap_or_default()
    }
}

impl fmt::Display for InquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub inquiry: InquiryType,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), QuoteError> {
        let missing: Vec<RequiredField> = [
            (RequiredField::Name, &self.name),
            (RequiredField::Email, &self.email),
            (RequiredField::Message, &self.message),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(f, _)| f)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(QuoteError::MissingFields(missing))
        }
    }

    /// Subject line, e.g. "Request Quote: Asha Rao".
    pub fn subject(&self) -> String {
        format!("{}: {}", self.inquiry.label(), self.name.trim())
    }

    pub fn body(&self) -> String {
        format!(
            "{}\n\nName: {}\nEmail: {}\nCompany: {}\nPhone: {}\nInquiry: {}",
            self.message.trim(),
            self.name.trim(),
            self.email.trim(),
            or_dash(&self.company),
            or_dash(&self.phone),
            self.inquiry.label(),
        )
    }

    /// Validate and build the mail link to `to`.
    pub fn mail_link(&self, to: &str) -> Result<Handoff, QuoteError> {
        self.validate()?;
        Ok(Handoff::mail(to, &self.subject(), &self.body()))
    }
}
