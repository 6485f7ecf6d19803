//! Affix-based token boundary detection with curated break tables
//!
//! This crate splits raw text into tokens by matching spans against three
//! positional character-class rules: strip break characters from the left
//! edge (prefix), strip them from the right edge (suffix), and split on
//! them inside the residual middle (infix). The infix rule folds in a
//! large curated table of Unicode code points so that mixed-language text
//! breaks apart where a default tokenizer would glue characters together.
//!
//! # Architecture
//!
//! The crate is layered from data to surface:
//! - **Rules layer**: literal character tables compiled into positional
//!   matchers with O(1) membership tests
//! - **Splitting layer**: the affix-stripping and infix-splitting pipeline
//!   over whitespace-delimited spans
//! - **API layer**: configuration, input handling, and offset-addressed
//!   token output
//!
//! # Example
//!
//! ```rust
//! use kugiri_core::Tokenizer;
//!
//! let tokenizer = Tokenizer::new();
//! let text = "(hello) don't";
//! let output = tokenizer.tokenize_text(text).unwrap();
//!
//! let tokens = output.token_texts(text);
//! assert_eq!(tokens, ["(", "hello", ")", "don", "'", "t"]);
//! ```

pub mod api;
pub mod rules;
pub mod splitter;
pub mod types;

pub use api::{
    Config, ConfigBuilder, Error, Input, Output, Result, TokenizeMetadata, TokenizeStats,
    Tokenizer,
};
pub use rules::{
    AffixPosition, BoundaryRule, BoundaryRuleSet, BoundaryRules, CharTable, RuleMatch,
};
pub use splitter::AffixSplitter;
pub use types::{Token, TokenKind};

/// Tokenize `text` with the default rule tables
///
/// Convenience wrapper that builds a [`Tokenizer`] per call; reuse a
/// tokenizer when processing many texts.
pub fn tokenize(text: &str) -> Result<Output> {
    Tokenizer::new().tokenize_text(text)
}
