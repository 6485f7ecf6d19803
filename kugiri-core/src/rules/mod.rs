//! Boundary rules: character tables compiled into positional matchers
//!
//! The default rule set reproduces a curated tokenizer configuration: a
//! small punctuation table per affix position, plus a large literal Unicode
//! table folded into the infix matcher. Rule construction is pure and
//! total; matching never allocates on the prefix/suffix paths.

pub mod affix;
pub mod char_table;
pub mod interface;
pub mod rule_set;
pub mod tables;

pub use affix::{BoundaryRule, Matches};
pub use char_table::CharTable;
pub use interface::{AffixPosition, BoundaryRules, RuleMatch};
pub use rule_set::BoundaryRuleSet;
