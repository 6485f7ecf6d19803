//! Positional break-character matchers
//!
//! A [`BoundaryRule`] is one compiled matcher: a character table tagged with
//! the position it applies to. The three default rules are built from the
//! literal tables in [`tables`](super::tables) and never change after
//! construction; building one is pure and cannot fail.

use super::char_table::CharTable;
use super::interface::{AffixPosition, RuleMatch};
use super::tables::{INFIX_CHARS, PREFIX_CHARS, SUFFIX_CHARS, UNICODE_CHARS};

/// A compiled positional matcher over a character table
#[derive(Debug, Clone)]
pub struct BoundaryRule {
    position: AffixPosition,
    table: CharTable,
}

impl BoundaryRule {
    /// Matcher for characters stripped from the start of a span
    pub fn prefix() -> Self {
        Self::with_chars(AffixPosition::Prefix, PREFIX_CHARS.iter().copied())
    }

    /// Matcher for characters stripped from the end of a span
    pub fn suffix() -> Self {
        Self::with_chars(AffixPosition::Suffix, SUFFIX_CHARS.iter().copied())
    }

    /// Matcher for characters that split the interior of a span
    ///
    /// Covers the ASCII infix punctuation plus the curated Unicode table.
    pub fn infix() -> Self {
        Self::with_chars(
            AffixPosition::Infix,
            INFIX_CHARS.iter().chain(UNICODE_CHARS).copied(),
        )
    }

    /// Matcher over a caller-supplied character set
    pub fn with_chars(position: AffixPosition, chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            position,
            table: CharTable::from_chars(chars),
        }
    }

    /// The position this rule applies to
    pub fn position(&self) -> AffixPosition {
        self.position
    }

    /// Number of distinct characters the rule matches
    pub fn char_count(&self) -> usize {
        self.table.len()
    }

    /// O(1) check whether `ch` is in this rule's table
    #[inline]
    pub fn is_break_char(&self, ch: char) -> bool {
        self.table.contains(ch)
    }

    /// First match in `span` under this rule's position semantics
    ///
    /// Prefix rules only ever match the first character, suffix rules the
    /// last. Infix rules report the leftmost hit.
    pub fn find(&self, span: &str) -> Option<RuleMatch> {
        match self.position {
            AffixPosition::Prefix => {
                let ch = span.chars().next().filter(|&c| self.table.contains(c))?;
                Some(RuleMatch::new(0, ch.len_utf8()))
            }
            AffixPosition::Suffix => {
                let ch = span.chars().next_back().filter(|&c| self.table.contains(c))?;
                Some(RuleMatch::new(span.len() - ch.len_utf8(), span.len()))
            }
            AffixPosition::Infix => self.find_iter(span).next(),
        }
    }

    /// Iterate every match in `span`, in ascending byte order
    ///
    /// Prefix and suffix rules yield at most one match.
    pub fn find_iter<'r, 't>(&'r self, span: &'t str) -> Matches<'r, 't> {
        Matches {
            rule: self,
            span,
            iter: span.char_indices(),
            done: false,
        }
    }
}

/// Lazy iterator over the matches of one rule in one span
#[derive(Debug, Clone)]
pub struct Matches<'r, 't> {
    rule: &'r BoundaryRule,
    span: &'t str,
    iter: std::str::CharIndices<'t>,
    done: bool,
}

impl Iterator for Matches<'_, '_> {
    type Item = RuleMatch;

    fn next(&mut self) -> Option<RuleMatch> {
        if self.done {
            return None;
        }
        match self.rule.position {
            AffixPosition::Prefix | AffixPosition::Suffix => {
                self.done = true;
                self.rule.find(self.span)
            }
            AffixPosition::Infix => {
                for (offset, ch) in self.iter.by_ref() {
                    if self.rule.is_break_char(ch) {
                        return Some(RuleMatch::new(offset, offset + ch.len_utf8()));
                    }
                }
                self.done = true;
                None
            }
        }
    }
}

impl std::iter::FusedIterator for Matches<'_, '_> {}
