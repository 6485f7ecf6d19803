//! Literal character tables behind the default rule set
//!
//! All tables are `const` data: fixed at compile time, shared by every rule
//! set built from the defaults.

pub mod punctuation;
pub mod unicode;

pub use punctuation::{INFIX_CHARS, PREFIX_CHARS, SUFFIX_CHARS};
pub use unicode::UNICODE_CHARS;
