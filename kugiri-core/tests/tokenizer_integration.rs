//! End-to-end tests for the tokenizer pipeline and the underlying matchers

use kugiri_core::{
    BoundaryRuleSet, BoundaryRules, Config, Input, RuleMatch, TokenKind, Tokenizer,
};

#[test]
fn test_enclosed_word_matches_both_edges() {
    let rules = BoundaryRuleSet::new();

    assert_eq!(rules.find_prefix("(hello)"), Some(RuleMatch::new(0, 1)));
    assert_eq!(rules.find_suffix("(hello)"), Some(RuleMatch::new(6, 7)));

    let tokenizer = Tokenizer::new();
    let output = tokenizer.tokenize_text("(hello)").unwrap();
    assert_eq!(output.token_texts("(hello)"), ["(", "hello", ")"]);
}

#[test]
fn test_contraction_splits_at_apostrophe() {
    let rules = BoundaryRuleSet::new();
    assert_eq!(rules.find_infix("don't"), vec![RuleMatch::new(3, 4)]);

    let output = Tokenizer::new().tokenize_text("don't").unwrap();
    assert_eq!(output.token_texts("don't"), ["don", "'", "t"]);
}

#[test]
fn test_diacritic_splits_at_char_position_two() {
    let text = "naïve";
    let rules = BoundaryRuleSet::new();
    let hits = rules.find_infix(text);
    assert_eq!(hits, vec![RuleMatch::new(2, 4)]);
    // Byte offset 2 is the third character
    assert_eq!(text[..hits[0].start].chars().count(), 2);
    assert_eq!(hits[0].as_str(text), "ï");
}

#[test]
fn test_cjk_ideographs_split_apart() {
    let text = "東京";
    let rules = BoundaryRuleSet::new();
    let hits = rules.find_infix(text);
    assert_eq!(hits.len(), 2, "both ideographs are in the table");

    let output = Tokenizer::new().tokenize_text(text).unwrap();
    assert_eq!(output.token_texts(text), ["東", "京"]);
}

#[test]
fn test_plain_span_passes_through_untouched() {
    let rules = BoundaryRuleSet::new();
    assert!(rules.find_prefix("plain").is_none());
    assert!(rules.find_suffix("plain").is_none());
    assert!(rules.find_infix("plain").is_empty());

    let output = Tokenizer::new().tokenize_text("plain").unwrap();
    assert_eq!(output.token_texts("plain"), ["plain"]);
    assert_eq!(output.tokens[0].kind, TokenKind::Word);
}

#[test]
fn test_rebuilt_rule_sets_behave_identically() {
    let a = BoundaryRuleSet::new();
    let b = BoundaryRuleSet::new();
    for span in ["(hello)", "don't", "naïve", "東京", "plain", "", "--", "'"] {
        assert_eq!(a.find_prefix(span), b.find_prefix(span));
        assert_eq!(a.find_suffix(span), b.find_suffix(span));
        assert_eq!(a.find_infix(span), b.find_infix(span));
    }
}

#[test]
fn test_full_sentence() {
    let text = "The (quick) brown-fox can't jump ~high.";
    let output = Tokenizer::new().tokenize_text(text).unwrap();
    assert_eq!(
        output.token_texts(text),
        [
            "The", "(", "quick", ")", "brown", "-", "fox", "can", "'", "t", "jump", "~high", "."
        ]
    );
    assert_eq!(output.metadata.spans_processed, 6);
}

#[test]
fn test_leading_infix_only_char_stays_glued() {
    // ~ splits interiors but is neither a prefix nor in a splittable
    // position at the span start
    let output = Tokenizer::new().tokenize_text("~high").unwrap();
    assert_eq!(output.token_texts("~high"), ["~high"]);
}

#[test]
fn test_stats_on_known_text() {
    let text = "(a) b";
    let output = Tokenizer::new().tokenize_text(text).unwrap();
    let stats = &output.metadata.stats;

    assert_eq!(stats.bytes_processed, 5);
    assert_eq!(stats.chars_processed, 5);
    assert_eq!(stats.token_count, 4);
    assert_eq!(stats.break_token_count, 2);
    assert_eq!(output.metadata.spans_processed, 2);
}

#[test]
fn test_tokenize_from_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "don't panic").unwrap();

    let output = Tokenizer::new()
        .tokenize(Input::from_file(file.path()))
        .unwrap();
    assert_eq!(output.token_texts("don't panic"), ["don", "'", "t", "panic"]);
}

#[test]
fn test_non_utf8_file_rejected() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0xff, 0xfe, 0x00]).unwrap();

    let err = Tokenizer::new()
        .tokenize(Input::from_file(file.path()))
        .unwrap_err();
    assert!(matches!(err, kugiri_core::Error::InvalidInput(_)));
}

#[test]
fn test_custom_rules_end_to_end() {
    let config = Config::builder()
        .prefix_chars(['{'])
        .suffix_chars(['}'])
        .infix_chars([':'])
        .build();
    let tokenizer = Tokenizer::with_config(config);

    let text = "{key:value}";
    let output = tokenizer.tokenize_text(text).unwrap();
    assert_eq!(output.token_texts(text), ["{", "key", ":", "value", "}"]);

    // Default punctuation no longer applies
    let text = "(plain)";
    let output = tokenizer.tokenize_text(text).unwrap();
    assert_eq!(output.token_texts(text), ["(plain)"]);
}

#[test]
fn test_whitespace_variants_separate_spans() {
    let text = "a\tb\nc\r\nd  e";
    let output = Tokenizer::new().tokenize_text(text).unwrap();
    assert_eq!(output.token_texts(text), ["a", "b", "c", "d", "e"]);
}

#[test]
fn test_tokens_cover_spans_losslessly() {
    let text = "\"It's (very) clean-up\" time.";
    let output = Tokenizer::new().tokenize_text(text).unwrap();

    // Tokens are ordered, non-overlapping, and skip exactly the whitespace
    let mut previous_end = 0;
    let mut covered = 0;
    for token in &output.tokens {
        assert!(token.start >= previous_end, "tokens must not overlap");
        assert!(
            text[previous_end..token.start]
                .chars()
                .all(char::is_whitespace),
            "gaps between tokens must be whitespace only"
        );
        covered += token.len();
        previous_end = token.end;
    }
    let non_ws: usize = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(char::len_utf8)
        .sum();
    assert_eq!(covered, non_ws);
}
