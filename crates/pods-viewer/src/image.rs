//! Broken-image substitution.

use std::collections::BTreeSet;

/// Tracks which images failed to load and what to show instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackSet {
    fallback: String,
    failed: BTreeSet<usize>,
}

impl FallbackSet {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
            failed: BTreeSet::new(),
        }
    }

    /// Source to render for image `index`. Empty sources go straight to
    /// the fallback.
    pub fn source<'a>(&'a self, index: usize, original: &'a str) -> &'a str {
        if original.trim().is_empty() || self.failed.contains(&index) {
            &self.fallback
        } else {
            original
        }
    }

    /// Record a load failure. Returns false if the image was already on the
    /// fallback, so a broken fallback cannot loop.
    pub fn mark_failed(&mut self, index: usize) -> bool {
        self.failed.insert(index)
    }

    pub fn has_failed(&self, index: usize) -> bool {
        self.failed.contains(&index)
    }

    pub fn clear(&mut self) {
        self.failed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_after_failure() {
        let mut set = FallbackSet::new("fallback.jpg");
        assert_eq!(set.source(0, "a.jpg"), "a.jpg");
        assert!(set.mark_failed(0));
        assert_eq!(set.source(0, "a.jpg"), "fallback.jpg");
        assert_eq!(set.source(1, "b.jpg"), "b.jpg");
    }

    #[test]
    fn test_second_failure_is_ignored() {
        let mut set = FallbackSet::new("fallback.jpg");
        assert!(set.mark_failed(3));
        assert!(!set.mark_failed(3));
    }

    #[test]
    fn test_empty_source_uses_fallback() {
        let set = FallbackSet::new("fallback.jpg");
        assert_eq!(set.source(0, ""), "fallback.jpg");
        assert!(!set.has_failed(0));
    }
}
