//! Configuration API for tokenization

use crate::rules::{tables, BoundaryRuleSet};

/// Tokenization configuration
///
/// Defaults to the literal break tables. Overriding a table swaps the full
/// character set for that position; the single-code-point match semantics
/// stay the same.
///
/// Any character set is accepted. Whitespace entries are legal (the default
/// Unicode table carries three) but can never fire through [`Tokenizer`],
/// which pre-splits its input on whitespace; they still match when the
/// compiled rules are queried directly.
///
/// [`Tokenizer`]: crate::api::Tokenizer
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) prefix_chars: Vec<char>,
    pub(crate) suffix_chars: Vec<char>,
    pub(crate) infix_chars: Vec<char>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix_chars: tables::PREFIX_CHARS.to_vec(),
            suffix_chars: tables::SUFFIX_CHARS.to_vec(),
            infix_chars: tables::INFIX_CHARS
                .iter()
                .chain(tables::UNICODE_CHARS)
                .copied()
                .collect(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Characters stripped from span starts
    pub fn prefix_chars(&self) -> &[char] {
        &self.prefix_chars
    }

    /// Characters stripped from span ends
    pub fn suffix_chars(&self) -> &[char] {
        &self.suffix_chars
    }

    /// Characters splitting span interiors
    pub fn infix_chars(&self) -> &[char] {
        &self.infix_chars
    }

    /// Compile the configured tables into a rule set
    pub(crate) fn build_rules(&self) -> BoundaryRuleSet {
        BoundaryRuleSet::with_tables(
            self.prefix_chars.iter().copied(),
            self.suffix_chars.iter().copied(),
            self.infix_chars.iter().copied(),
        )
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    prefix_chars: Option<Vec<char>>,
    suffix_chars: Option<Vec<char>>,
    infix_chars: Option<Vec<char>>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the prefix table
    pub fn prefix_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.prefix_chars = Some(chars.into_iter().collect());
        self
    }

    /// Replace the suffix table
    pub fn suffix_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.suffix_chars = Some(chars.into_iter().collect());
        self
    }

    /// Replace the infix table
    pub fn infix_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.infix_chars = Some(chars.into_iter().collect());
        self
    }

    /// Build the configuration
    ///
    /// Construction is total: every character set compiles.
    pub fn build(self) -> Config {
        let mut config = Config::default();

        if let Some(chars) = self.prefix_chars {
            config.prefix_chars = chars;
        }
        if let Some(chars) = self.suffix_chars {
            config.suffix_chars = chars;
        }
        if let Some(chars) = self.infix_chars {
            config.infix_chars = chars;
        }

        config
    }
}
