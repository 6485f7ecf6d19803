//! Break character membership with O(1) lookup
//!
//! Optimized for hot-path performance with ASCII fast-path.

use std::collections::HashSet;

/// Fast break-character lookup table
#[derive(Debug, Clone)]
pub struct CharTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// HashSet for non-ASCII break characters
    non_ascii: HashSet<char>,
    len: usize,
}

impl CharTable {
    /// Create from an iterator of break characters
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();
        let mut len = 0;

        for ch in chars {
            let fresh = if ch.is_ascii() {
                !std::mem::replace(&mut ascii_table[ch as usize], true)
            } else {
                non_ascii.insert(ch)
            };
            if fresh {
                len += 1;
            }
        }

        Self {
            ascii_table,
            non_ascii,
            len,
        }
    }

    /// Check if character is a break character - hot path
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            // Fast path: direct array lookup
            self.ascii_table[ch as usize]
        } else {
            // Slow path: hash lookup
            self.non_ascii.contains(&ch)
        }
    }

    /// Number of distinct characters in the table
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the table matches nothing
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
