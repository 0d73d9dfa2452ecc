//! Shared word normalizer for the camel and dot renderers.
//!
//! Turns arbitrary text into an ordered sequence of lowercase words so the
//! delimiter and Unicode edge cases live in one place instead of being
//! duplicated per renderer.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Characters treated as word boundaries: space, underscore, hyphen.
fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '_' | '-')
}

/// Split text into an ordered sequence of non-empty lowercase words.
///
/// Steps, in order:
/// 1. Unicode canonical composition (NFC), so combining-mark sequences and
///    precomposed characters iterate consistently.
/// 2. Drop every character that is not a Unicode letter, a Unicode digit, or
///    a delimiter. Tabs and newlines are dropped here too; only the literal
///    space character counts as a delimiter.
/// 3. Collapse every maximal run of delimiters to a single space.
/// 4. Trim leading/trailing spaces and lowercase the result.
/// 5. Split on single spaces.
///
/// Every returned word is non-empty; the sequence is empty iff the cleaned
/// text was empty. Word order follows the source text.
pub fn normalize_words(input: &str) -> Vec<String> {
    static DELIMITER_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ _-]+").unwrap());

    let composed: String = input.nfc().collect();
    let kept: String = composed
        .chars()
        .filter(|c| c.is_alphanumeric() || is_delimiter(*c))
        .collect();

    let cleaned = DELIMITER_RUN.replace_all(&kept, " ").trim().to_lowercase();

    if cleaned.is_empty() {
        return Vec::new();
    }

    cleaned.split(' ').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_each_delimiter() {
        assert_eq!(normalize_words("hello world"), ["hello", "world"]);
        assert_eq!(normalize_words("hello_world"), ["hello", "world"]);
        assert_eq!(normalize_words("hello-world"), ["hello", "world"]);
    }

    #[test]
    fn test_collapses_mixed_delimiter_runs() {
        assert_eq!(
            normalize_words("  --foo__bar baz--  "),
            ["foo", "bar", "baz"]
        );
    }

    #[test]
    fn test_lowercases_everything() {
        assert_eq!(normalize_words("HeLLo-WORLD"), ["hello", "world"]);
    }

    #[test]
    fn test_strips_punctuation_but_keeps_unicode_letters() {
        assert_eq!(normalize_words("foo@bar!baz"), ["foobarbaz"]);
        assert_eq!(normalize_words("héllo wörld"), ["héllo", "wörld"]);
    }

    #[test]
    fn test_digits_are_words() {
        assert_eq!(normalize_words("123_abc DEF"), ["123", "abc", "def"]);
    }

    #[test]
    fn test_empty_and_delimiter_only_inputs() {
        assert!(normalize_words("").is_empty());
        assert!(normalize_words("  -- __ ").is_empty());
        assert!(normalize_words("!!!").is_empty());
    }

    #[test]
    fn test_tabs_and_newlines_are_not_delimiters() {
        // Only the literal space character is whitelisted; other whitespace
        // is stripped like punctuation, fusing the surrounding words.
        assert_eq!(normalize_words("foo\tbar\nbaz"), ["foobarbaz"]);
    }

    #[test]
    fn test_nfc_composes_combining_marks() {
        // "e" + U+0301 composes to the precomposed "é" and survives the
        // letter filter as a single character.
        assert_eq!(normalize_words("cafe\u{301} bar"), ["café", "bar"]);
    }

    #[test]
    fn test_no_word_is_empty() {
        for input in ["a  b", "- - -a- - -", "_x_", " 1 "] {
            assert!(normalize_words(input).iter().all(|w| !w.is_empty()));
        }
    }
}
