//! Main tokenizer implementation

use std::io::Read;
use std::sync::Arc;
use std::time::Instant;

use crate::api::{Config, Error, Input, Output};
use crate::splitter::{spans, AffixSplitter};

/// Affix-splitting tokenizer with a clean API
///
/// Compiles the configured break tables into an immutable rule set once at
/// construction; every call after that is a pure scan. For direct control
/// over the rules (including handing in a custom [`BoundaryRules`]
/// implementation) use [`AffixSplitter`] instead.
///
/// [`BoundaryRules`]: crate::rules::BoundaryRules
#[derive(Debug, Clone)]
pub struct Tokenizer {
    splitter: AffixSplitter,
    config: Config,
}

impl Tokenizer {
    /// Create a tokenizer with the default rule tables
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a tokenizer with custom configuration
    ///
    /// Compiling a configuration is total and cannot fail.
    pub fn with_config(config: Config) -> Self {
        let rules = Arc::new(config.build_rules());
        Self {
            splitter: AffixSplitter::new(rules),
            config,
        }
    }

    /// Tokenize input and return tokens with metadata
    pub fn tokenize(&self, input: Input) -> Result<Output, Error> {
        let start = Instant::now();

        let text = input.into_text()?;

        let mut tokens = Vec::new();
        let mut spans_processed = 0;
        for (offset, span) in spans(&text) {
            spans_processed += 1;
            self.splitter.split_span(offset, span, &mut tokens);
        }

        let duration = start.elapsed();
        Ok(Output::from_tokens(tokens, &text, spans_processed, duration))
    }

    /// Tokenize a text slice
    pub fn tokenize_text(&self, text: &str) -> Result<Output, Error> {
        self.tokenize(Input::from_text(text))
    }

    /// Tokenize input from a reader stream
    pub fn tokenize_stream<R: Read + Send + Sync + 'static>(
        &self,
        reader: R,
    ) -> Result<Output, Error> {
        self.tokenize(Input::from_reader(reader))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The splitting engine backing this tokenizer
    pub fn splitter(&self) -> &AffixSplitter {
        &self.splitter
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
