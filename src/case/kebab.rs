//! kebab-case renderer.
//!
//! Deliberately independent from the shared normalizer: it splits on the
//! letter/digit boundaries present in mixed-case identifiers instead of
//! lowercasing first, and it keeps punctuation the normalizer would strip.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_OR_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_]+").unwrap());
static CAMEL_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());
static ACRONYM_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Convert text to kebab-case.
///
/// Runs of whitespace and underscores become single hyphens, camelCase
/// boundaries (`aB`) and acronym boundaries (`XMLHttp` -> `XML-Http`) are
/// split, then the result is lowercased, hyphen runs are collapsed, and
/// leading/trailing hyphens are stripped.
///
/// Unlike the camel and dot renderers, punctuation other than whitespace,
/// underscores, and hyphens passes through lower-cased rather than being
/// stripped.
pub fn to_kebab_case(input: &str) -> String {
    let hyphenated = WHITESPACE_OR_UNDERSCORE.replace_all(input.trim(), "-");
    let split = CAMEL_BOUNDARY.replace_all(&hyphenated, "${1}-${2}");
    let split = ACRONYM_BOUNDARY.replace_all(&split, "${1}-${2}");
    let lowered = split.to_lowercase();
    let collapsed = HYPHEN_RUN.replace_all(&lowered, "-");

    collapsed.trim_matches('-').to_string()
}
