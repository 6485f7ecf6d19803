//! Affix splitting pipeline
//!
//! Applies the boundary rules to whitespace-delimited spans the way an
//! affix-splitting tokenizer consumes them: strip prefix and suffix break
//! characters from the edges until the span stops shrinking, then split the
//! residual middle on infix hits. Token offsets always address the original
//! input text.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::rules::BoundaryRules;
use crate::types::{Token, TokenKind};

/// Splitting engine over a shared rule set
#[derive(Clone)]
pub struct AffixSplitter {
    rules: Arc<dyn BoundaryRules>,
}

impl AffixSplitter {
    /// Create a splitter over `rules`
    pub fn new(rules: Arc<dyn BoundaryRules>) -> Self {
        Self { rules }
    }

    /// The rule set driving this splitter
    pub fn rules(&self) -> &Arc<dyn BoundaryRules> {
        &self.rules
    }

    /// Tokenize a full text: split on whitespace, then split every span
    ///
    /// Whitespace is never emitted as a token.
    pub fn split_text(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        for (offset, span) in spans(text) {
            self.split_span(offset, span, &mut tokens);
        }
        tokens
    }

    /// Split one whitespace-free span, appending tokens to `out`
    ///
    /// `base` is the span's byte offset in the original text; emitted token
    /// offsets are absolute. The pass works in three steps:
    ///
    /// 1. Repeatedly strip a prefix match and a suffix match (searched on
    ///    the remainder after the prefix) while the span keeps shrinking.
    /// 2. Stripped prefixes are emitted immediately; suffixes are stacked
    ///    and re-emitted in source order after the middle.
    /// 3. The residual middle splits on infix hits, except that a hit at
    ///    its first character stays glued to the following text.
    pub fn split_span(&self, base: usize, span: &str, out: &mut Vec<Token>) {
        let mut start = 0usize;
        let mut end = span.len();
        let mut suffix_stack: SmallVec<[Token; 4]> = SmallVec::new();
        let mut last_size = usize::MAX;

        while start < end && end - start != last_size {
            last_size = end - start;
            let window = &span[start..end];

            let pre_len = self
                .rules
                .find_prefix(window)
                .map(|m| m.len())
                .unwrap_or(0);
            let suf_len = self
                .rules
                .find_suffix(&window[pre_len..])
                .map(|m| m.len())
                .unwrap_or(0);

            if pre_len != 0 && suf_len != 0 && pre_len + suf_len <= window.len() {
                out.push(Token::new(
                    base + start,
                    base + start + pre_len,
                    TokenKind::Prefix,
                ));
                suffix_stack.push(Token::new(base + end - suf_len, base + end, TokenKind::Suffix));
                start += pre_len;
                end -= suf_len;
            } else if pre_len != 0 {
                out.push(Token::new(
                    base + start,
                    base + start + pre_len,
                    TokenKind::Prefix,
                ));
                start += pre_len;
            } else if suf_len != 0 {
                suffix_stack.push(Token::new(base + end - suf_len, base + end, TokenKind::Suffix));
                end -= suf_len;
            }
        }

        if start < end {
            self.split_infixes(base, span, start, end, out);
        }

        out.extend(suffix_stack.into_iter().rev());
    }

    /// Split the residual middle `span[start..end]` on infix hits
    fn split_infixes(
        &self,
        base: usize,
        span: &str,
        start: usize,
        end: usize,
        out: &mut Vec<Token>,
    ) {
        let middle = &span[start..end];
        let hits = self.rules.find_infix(middle);
        if hits.is_empty() {
            out.push(Token::new(base + start, base + end, TokenKind::Word));
            return;
        }

        let mut cursor = 0usize;
        for hit in hits {
            // A hit on the first character never splits; the leading break
            // character stays glued to the text that follows it
            if hit.start == 0 {
                continue;
            }
            if hit.start != cursor {
                out.push(Token::new(
                    base + start + cursor,
                    base + start + hit.start,
                    TokenKind::Word,
                ));
            }
            out.push(Token::new(
                base + start + hit.start,
                base + start + hit.end,
                TokenKind::Infix,
            ));
            cursor = hit.end;
        }
        if cursor < middle.len() {
            out.push(Token::new(base + start + cursor, base + end, TokenKind::Word));
        }
    }
}

impl std::fmt::Debug for AffixSplitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AffixSplitter").finish_non_exhaustive()
    }
}

/// Iterate the whitespace-free spans of `text` with their byte offsets
pub fn spans(text: &str) -> Spans<'_> {
    Spans { text, pos: 0 }
}

/// Iterator over `(offset, span)` pairs, skipping Unicode whitespace
#[derive(Debug, Clone)]
pub struct Spans<'t> {
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for Spans<'t> {
    type Item = (usize, &'t str);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let mut start = None;
        for (i, ch) in rest.char_indices() {
            if ch.is_whitespace() {
                if let Some(s) = start {
                    let abs = self.pos + s;
                    let span = &self.text[abs..self.pos + i];
                    self.pos += i;
                    return Some((abs, span));
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }
        let item = start.map(|s| {
            let abs = self.pos + s;
            (abs, &self.text[abs..])
        });
        self.pos = self.text.len();
        item
    }
}

impl std::iter::FusedIterator for Spans<'_> {}
