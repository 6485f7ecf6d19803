//! Literal punctuation tables for the three affix positions
//!
//! These sets are curated, not derived from Unicode categories. They are
//! intentionally narrow: a character missing here (for example `,` in the
//! prefix set) is a deliberate part of the splitting behavior.

/// Characters stripped from the start of a span.
pub const PREFIX_CHARS: &[char] = &['-', '"', '\'', '[', '('];

/// Characters stripped from the end of a span.
pub const SUFFIX_CHARS: &[char] = &['-', '"', '\'', ']', ')'];

/// ASCII-range characters that split the interior of a span.
///
/// The full infix table is this set plus [`UNICODE_CHARS`].
///
/// [`UNICODE_CHARS`]: super::unicode::UNICODE_CHARS
pub const INFIX_CHARS: &[char] = &[
    '-', '~', '.', ',', '\'', '?', ';', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', ':',
];
