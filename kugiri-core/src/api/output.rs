//! Output types for the tokenizer API

use std::time::Duration;

use serde::Serialize;

use crate::types::Token;

/// Tokenization output with metadata
#[derive(Debug, Clone, Serialize)]
pub struct Output {
    /// Tokens in input order
    pub tokens: Vec<Token>,
    /// Tokenization metadata
    pub metadata: TokenizeMetadata,
}

/// Metadata about one tokenization call
#[derive(Debug, Clone, Serialize)]
pub struct TokenizeMetadata {
    /// Total tokenization duration
    pub duration: Duration,
    /// Number of whitespace-delimited spans processed
    pub spans_processed: usize,
    /// Additional statistics
    pub stats: TokenizeStats,
}

/// Additional tokenization statistics
#[derive(Debug, Clone, Serialize)]
pub struct TokenizeStats {
    /// Total bytes processed
    pub bytes_processed: usize,
    /// Total characters processed
    pub chars_processed: usize,
    /// Number of tokens produced
    pub token_count: usize,
    /// Tokens produced by a break-character match
    pub break_token_count: usize,
    /// Average token length in bytes
    pub avg_token_length: f32,
}

impl Output {
    /// Assemble output from a finished splitting pass
    pub(crate) fn from_tokens(
        tokens: Vec<Token>,
        text: &str,
        spans_processed: usize,
        duration: Duration,
    ) -> Self {
        let token_count = tokens.len();
        let break_token_count = tokens.iter().filter(|t| t.is_break()).count();
        let avg_token_length = if token_count > 0 {
            tokens.iter().map(|t| t.len()).sum::<usize>() as f32 / token_count as f32
        } else {
            0.0
        };

        Self {
            tokens,
            metadata: TokenizeMetadata {
                duration,
                spans_processed,
                stats: TokenizeStats {
                    bytes_processed: text.len(),
                    chars_processed: text.chars().count(),
                    token_count,
                    break_token_count,
                    avg_token_length,
                },
            },
        }
    }

    /// Number of tokens produced
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when no token was produced
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Resolve every token against the text it was produced from
    ///
    /// `text` must be the exact input that produced this output; offsets
    /// address its bytes.
    pub fn token_texts<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.tokens.iter().map(|t| t.as_str(text)).collect()
    }
}
