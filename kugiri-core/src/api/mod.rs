//! Unified API for kugiri-core
//!
//! This module provides a clean, intuitive interface for affix-based
//! tokenization that hides the splitting machinery behind a configured
//! tokenizer value.

mod config;
mod error;
mod input;
mod output;
mod tokenizer;


pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use output::{Output, TokenizeMetadata, TokenizeStats};
pub use tokenizer::Tokenizer;
