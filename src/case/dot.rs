//! dot.case renderer, layered on the shared normalizer.

use super::normalize::normalize_words;

/// Convert text to dot.case.
///
/// Words from the normalizer are joined with a literal `.`; no per-word
/// casing change happens beyond the normalizer's lowercasing. A `.` already
/// present in the input is treated as a word boundary, which makes the
/// conversion idempotent on its own output.
pub fn to_dot_case(input: &str) -> String {
    let resplit = input.replace('.', " ");
    normalize_words(&resplit).join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_delimiters() {
        assert_eq!(to_dot_case("hello world"), "hello.world");
        assert_eq!(to_dot_case("hello_world"), "hello.world");
        assert_eq!(to_dot_case("hello-world"), "hello.world");
        assert_eq!(to_dot_case("foo_bar-baz"), "foo.bar.baz");
    }

    #[test]
    fn test_uppercase_input_is_normalized_first() {
        assert_eq!(to_dot_case("HeLLo-WORLD"), "hello.world");
    }

    #[test]
    fn test_messy_delimiter_runs() {
        assert_eq!(to_dot_case("  --foo__bar baz--  "), "foo.bar.baz");
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(to_dot_case("héllo wörld"), "héllo.wörld");
    }

    #[test]
    fn test_digit_words() {
        assert_eq!(to_dot_case("123_abc DEF"), "123.abc.def");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_dot_case(""), "");
        assert_eq!(to_dot_case("  -- __ "), "");
    }

    #[test]
    fn test_idempotent_on_own_output() {
        for input in ["hello world", "HeLLo-WORLD", "  --foo__bar baz--  ", ""] {
            let once = to_dot_case(input);
            assert_eq!(to_dot_case(&once), once);
        }
    }
}
