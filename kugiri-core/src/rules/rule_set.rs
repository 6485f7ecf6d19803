//! Default rule set bundling the three positional matchers

use super::affix::BoundaryRule;
use super::interface::{AffixPosition, BoundaryRules, RuleMatch};

/// The three positional matchers as one value
///
/// Built once, immutable afterwards, and safe to share behind an `Arc`
/// across any number of concurrent tokenization calls.
#[derive(Debug, Clone)]
pub struct BoundaryRuleSet {
    prefix: BoundaryRule,
    suffix: BoundaryRule,
    infix: BoundaryRule,
}

impl BoundaryRuleSet {
    /// Rule set over the literal default tables
    pub fn new() -> Self {
        Self {
            prefix: BoundaryRule::prefix(),
            suffix: BoundaryRule::suffix(),
            infix: BoundaryRule::infix(),
        }
    }

    /// Rule set over caller-supplied tables
    pub fn with_tables(
        prefix_chars: impl IntoIterator<Item = char>,
        suffix_chars: impl IntoIterator<Item = char>,
        infix_chars: impl IntoIterator<Item = char>,
    ) -> Self {
        Self {
            prefix: BoundaryRule::with_chars(AffixPosition::Prefix, prefix_chars),
            suffix: BoundaryRule::with_chars(AffixPosition::Suffix, suffix_chars),
            infix: BoundaryRule::with_chars(AffixPosition::Infix, infix_chars),
        }
    }

    /// The prefix matcher
    pub fn prefix(&self) -> &BoundaryRule {
        &self.prefix
    }

    /// The suffix matcher
    pub fn suffix(&self) -> &BoundaryRule {
        &self.suffix
    }

    /// The infix matcher
    pub fn infix(&self) -> &BoundaryRule {
        &self.infix
    }
}

impl Default for BoundaryRuleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundaryRules for BoundaryRuleSet {
    #[inline]
    fn find_prefix(&self, span: &str) -> Option<RuleMatch> {
        self.prefix.find(span)
    }

    #[inline]
    fn find_suffix(&self, span: &str) -> Option<RuleMatch> {
        self.suffix.find(span)
    }

    fn find_infix(&self, span: &str) -> Vec<RuleMatch> {
        self.infix.find_iter(span).collect()
    }
}
