//! Core types for token boundary detection

use core::fmt;
use serde::{Deserialize, Serialize};

/// How a token was produced by the splitting pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Residual text between break characters
    #[default]
    Word,
    /// Break character stripped from the start of a span
    Prefix,
    /// Break character stripped from the end of a span
    Suffix,
    /// Break character split out of the interior of a span
    Infix,
}

/// A token: half-open byte range into the original input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Byte offset where the token begins
    pub start: usize,
    /// Byte offset one past the end of the token
    pub end: usize,
    /// How the token was produced
    pub kind: TokenKind,
}

impl Token {
    /// Create a new token
    pub fn new(start: usize, end: usize, kind: TokenKind) -> Self {
        Self { start, end, kind }
    }

    /// Token length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for zero-width tokens (the pipeline never emits these)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True for tokens produced by a break-character match
    pub fn is_break(&self) -> bool {
        !matches!(self.kind, TokenKind::Word)
    }

    /// Resolve the token against the text it was produced from
    pub fn as_str<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word => write!(f, "word"),
            TokenKind::Prefix => write!(f, "prefix"),
            TokenKind::Suffix => write!(f, "suffix"),
            TokenKind::Infix => write!(f, "infix"),
        }
    }
}
