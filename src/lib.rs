//! # Recase - String Case Conversion
//!
//! Recase is a small set of independent, pure string-transformation
//! utilities: case conversions (camelCase, dot.case, kebab-case) plus a
//! validated numeric adder. Every function is stateless, synchronous, and
//! free of I/O; each call is independent and safe to invoke concurrently.
//!
//! ## Overview
//!
//! The camel and dot renderers share a single word normalizer: input text is
//! NFC-normalized, stripped of characters that are neither letters, digits,
//! nor delimiters, collapsed on delimiter runs, lowercased, and split into
//! words. The kebab renderer is deliberately independent; it preserves
//! letter/digit boundaries in mixed-case identifiers (`XMLHttpRequest` ->
//! `xml-http-request`) through a regex pipeline of its own.
//!
//! Two API layers exist:
//!
//! - the typed core in [`case`] takes `&str` and cannot fail;
//! - the dynamic boundary in [`value`] takes [`serde_json::Value`] and
//!   reproduces runtime type validation as typed [`Error`]s.
//!
//! ## Modules
//!
//! - [`case`] - word normalizer and the three case renderers
//! - [`value`] - runtime-typed entry points and the numeric adder
//! - [`error`] - typed errors raised at the value boundary
//!
//! ## Example
//!
//! ```
//! use recase::{to_camel_case, to_dot_case, to_kebab_case};
//!
//! assert_eq!(to_camel_case("hello_world"), "helloWorld");
//! assert_eq!(to_dot_case("héllo wörld"), "héllo.wörld");
//! assert_eq!(to_kebab_case("XMLHttpRequest"), "xml-http-request");
//! ```

pub mod case;
pub mod error;
pub mod value;

pub use case::camel::to_camel_case;
pub use case::dot::to_dot_case;
pub use case::kebab::to_kebab_case;
pub use case::normalize::normalize_words;
pub use case::CaseStyle;
pub use error::{Error, ValueKind};
pub use value::{
    add_numbers, camel_case_value, case_value, dot_case_value, kebab_case_value, NonTextPolicy,
};
