//! Public contract for boundary rules - minimal and performance-focused
//!
//! This module defines the value types reported by the matchers and the
//! trait a tokenization pipeline consumes. Matching is a bounded scan with
//! O(1) per-character classification.

use serde::{Deserialize, Serialize};

// ========= Value types reported by matchers =========

/// Where a rule applies within a span
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AffixPosition {
    /// Must match the first character of a span
    Prefix,
    /// Must match the last character of a span
    Suffix,
    /// May match anywhere inside a span
    Infix,
}

/// A matcher hit: half-open byte range into the queried span
///
/// With the default tables every hit covers exactly one code point, so
/// `end - start` is that character's UTF-8 length.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RuleMatch {
    /// Byte offset where the match begins
    pub start: usize,
    /// Byte offset one past the end of the match
    pub end: usize,
}

impl RuleMatch {
    /// Create a match over `[start, end)`
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Match length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for zero-width matches (never produced by the default tables)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Resolve the match against the span it was produced from
    pub fn as_str<'t>(&self, span: &'t str) -> &'t str {
        &span[self.start..self.end]
    }
}

// ========= Core trait for boundary rules =========

/// Boundary-detection contract consumed by the tokenization pipeline
///
/// This is the calling convention an affix-splitting tokenizer expects:
/// a start-anchored prefix search, an end-anchored suffix search, and an
/// iteration of every infix hit in span order. Implementations must be
/// shareable read-only across threads; the provided rule sets never mutate
/// after construction.
pub trait BoundaryRules: Send + Sync {
    /// Match against the first character of `span`
    fn find_prefix(&self, span: &str) -> Option<RuleMatch>;

    /// Match against the last character of `span`
    fn find_suffix(&self, span: &str) -> Option<RuleMatch>;

    /// Every infix hit in `span`, in ascending byte order
    fn find_infix(&self, span: &str) -> Vec<RuleMatch>;

    /// True when any of the three matchers fires on `span`
    fn has_break(&self, span: &str) -> bool {
        self.find_prefix(span).is_some()
            || self.find_suffix(span).is_some()
            || !self.find_infix(span).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_match_accessors() {
        let m = RuleMatch::new(3, 4);
        assert_eq!(m.len(), 1);
        assert!(!m.is_empty());
        assert_eq!(m.as_str("don't"), "'");
    }

    #[test]
    fn test_rule_match_multibyte_resolution() {
        // "naïve": ï spans bytes 2..4
        let m = RuleMatch::new(2, 4);
        assert_eq!(m.len(), 2);
        assert_eq!(m.as_str("naïve"), "ï");
    }
}
