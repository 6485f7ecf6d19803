//! UTF-8 boundary safety tests
//!
//! Every reported offset must land on a character boundary of the input,
//! no matter how multi-byte characters and break characters interleave.

use kugiri_core::{tokenize, Token};

fn assert_boundaries(text: &str, tokens: &[Token]) {
    for token in tokens {
        assert!(
            text.is_char_boundary(token.start),
            "start {} of {:?} splits a UTF-8 sequence in {:?}",
            token.start,
            token,
            text
        );
        assert!(
            text.is_char_boundary(token.end),
            "end {} of {:?} splits a UTF-8 sequence in {:?}",
            token.end,
            token,
            text
        );
        assert!(!token.is_empty());
    }
}

#[test]
fn test_utf8_ascii_apostrophe_offsets() {
    let text = "don't";
    let output = tokenize(text).unwrap();
    let offsets: Vec<(usize, usize)> = output.tokens.iter().map(|t| (t.start, t.end)).collect();
    assert_eq!(offsets, [(0, 3), (3, 4), (4, 5)]);
}

#[test]
fn test_utf8_curly_apostrophe_offsets() {
    // U+2019 is three bytes; the tail token starts past all of them
    let text = "isn\u{2019}t";
    let output = tokenize(text).unwrap();
    let offsets: Vec<(usize, usize)> = output.tokens.iter().map(|t| (t.start, t.end)).collect();
    assert_eq!(offsets, [(0, 3), (3, 6), (6, 7)]);
    assert_boundaries(text, &output.tokens);
}

#[test]
fn test_utf8_two_byte_break_offsets() {
    let text = "naïve";
    let output = tokenize(text).unwrap();
    let offsets: Vec<(usize, usize)> = output.tokens.iter().map(|t| (t.start, t.end)).collect();
    assert_eq!(offsets, [(0, 2), (2, 4), (4, 6)]);
}

#[test]
fn test_utf8_three_byte_break_offsets() {
    let text = "東京";
    let output = tokenize(text).unwrap();
    let offsets: Vec<(usize, usize)> = output.tokens.iter().map(|t| (t.start, t.end)).collect();
    assert_eq!(offsets, [(0, 3), (3, 6)]);
}

#[test]
fn test_utf8_adjacent_multibyte_breaks() {
    // Both characters are in the table; the leading one stays glued and
    // becomes the word before the second hit
    let text = "é東";
    let output = tokenize(text).unwrap();
    assert_eq!(output.token_texts(text), ["é", "東"]);
    let offsets: Vec<(usize, usize)> = output.tokens.iter().map(|t| (t.start, t.end)).collect();
    assert_eq!(offsets, [(0, 2), (2, 5)]);
}

#[test]
fn test_utf8_astral_table_members_split_safely() {
    for (text, expected) in [
        ("a\u{1000a}b", vec!["a", "\u{1000a}", "b"]),
        ("x\u{2a6a5}y", vec!["x", "\u{2a6a5}", "y"]),
    ] {
        let output = tokenize(text).unwrap();
        assert_eq!(output.token_texts(text), expected, "text: {text:?}");
        assert_boundaries(text, &output.tokens);
        // Astral characters occupy four bytes
        assert_eq!(output.tokens[1].len(), 4);
    }
}

#[test]
fn test_utf8_astral_non_member_stays_whole() {
    let text = "a\u{1f600}b";
    let output = tokenize(text).unwrap();
    assert_eq!(output.token_texts(text), [text]);
}

#[test]
fn test_utf8_combining_mark_split_from_base() {
    // Decomposed and precomposed accents behave differently: U+0301 is a
    // table entry of its own, U+00E9 only fires mid-span
    let decomposed = "e\u{301}";
    let output = tokenize(decomposed).unwrap();
    assert_eq!(output.token_texts(decomposed), ["e", "\u{301}"]);
    assert_boundaries(decomposed, &output.tokens);

    let precomposed = "\u{e9}";
    let output = tokenize(precomposed).unwrap();
    assert_eq!(output.token_texts(precomposed), ["\u{e9}"]);
}

#[test]
fn test_utf8_boundaries_across_mixed_text() {
    let texts = [
        "(\u{e9}cole) l'\u{e9}t\u{e9}",
        "\"\u{6771}\u{4eac}\" [naïve] can\u{2019}t",
        "𐀊𒂵𪚥",
        "mix東abc\u{2019}def-гhi",
    ];
    for text in texts {
        let output = tokenize(text).unwrap();
        assert_boundaries(text, &output.tokens);

        let mut previous_end = 0;
        for token in &output.tokens {
            assert!(token.start >= previous_end, "tokens must not overlap in {text:?}");
            previous_end = token.end;
        }
    }
}
