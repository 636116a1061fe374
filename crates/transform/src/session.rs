use std::collections::HashSet;

/// Bookkeeping for a single transform call.
///
/// A session is created per call and dropped with it, so nothing leaks
/// between stylesheets.
#[derive(Debug, Default)]
pub struct TransformSession {
    /// Families already handed to the resolver.
    processed: HashSet<String>,
    /// Families declared by the stylesheet's own `@font-face` rules.
    existing: HashSet<String>,
    /// Exact block texts already inserted.
    injected: HashSet<String>,
}

impl TransformSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_existing(&mut self, family: impl Into<String>) {
        self.existing.insert(family.into());
    }

    pub fn is_existing(&self, family: &str) -> bool {
        self.existing.contains(family)
    }

    /// Claims `family` for resolution. Returns `false` when it was already
    /// claimed or is declared by the stylesheet.
    pub fn claim(&mut self, family: &str) -> bool {
        if self.existing.contains(family) || self.processed.contains(family) {
            return false;
        }
        self.processed.insert(family.to_string());
        true
    }

    /// Records an inserted block. Returns `false` for a duplicate.
    pub fn record_injection(&mut self, block: &str) -> bool {
        if self.injected.contains(block) {
            return false;
        }
        self.injected.insert(block.to_string());
        true
    }

    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    pub fn injected_count(&self) -> usize {
        self.injected.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_once() {
        let mut session = TransformSession::new();
        assert!(session.claim("Inter"));
        assert!(!session.claim("Inter"));
        assert_eq!(session.processed_count(), 1);
    }

    #[test]
    fn test_existing_family_cannot_be_claimed() {
        let mut session = TransformSession::new();
        session.mark_existing("Inter");
        assert!(session.is_existing("Inter"));
        assert!(!session.claim("Inter"));
        assert_eq!(session.processed_count(), 0);
    }

    #[test]
    fn test_record_injection_dedupes_exact_text() {
        let mut session = TransformSession::new();
        assert!(session.record_injection("@font-face {}"));
        assert!(!session.record_injection("@font-face {}"));
        assert!(session.record_injection("@font-face { }"));
        assert_eq!(session.injected_count(), 2);
    }
}
