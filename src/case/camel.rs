//! camelCase renderer, layered on the shared normalizer.

use super::normalize::normalize_words;

/// Convert text to camelCase.
///
/// The first word is emitted unchanged (already lowercase from
/// normalization); each subsequent word has its first character upper-cased
/// and the remainder left as-is. Upper-casing a digit is a no-op, so words
/// like `123` pass through untouched. Returns an empty string when the input
/// contains no words.
///
/// Converting multi-word output a second time collapses it (`helloWorld` ->
/// `helloworld`): camelCase has no internal delimiter to re-split on. This
/// non-idempotence is inherent to the format, not a bug.
pub fn to_camel_case(input: &str) -> String {
    let words = normalize_words(input);
    let mut out = String::with_capacity(input.len());

    for (idx, word) in words.iter().enumerate() {
        if idx == 0 {
            out.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            // to_uppercase can expand to multiple chars (e.g. ß -> SS)
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}
