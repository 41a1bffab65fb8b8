//! Newtype IDs for type-safe identifiers.
//!
//! Keeps product and series identifiers from being swapped, which matters
//! now that products point at their series through an explicit key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(SeriesId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("galaxy-single");
        assert_eq!(id.as_str(), "galaxy-single");
    }

    #[test]
    fn test_id_from_str() {
        let id: SeriesId = "cosmos".into();
        assert_eq!(id.as_str(), "cosmos");
    }

    #[test]
    fn test_id_display() {
        let id = SeriesId::new("wooden");
        assert_eq!(format!("{}", id), "wooden");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("esports-single");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"esports-single\"");
    }
}
