//! Runtime-typed entry points.
//!
//! The original callers hand these operations dynamically typed values, so
//! this module accepts [`serde_json::Value`] and reproduces the runtime type
//! checks as explicit discriminated checks returning typed errors, instead
//! of coercing.

use serde_json::Value;

use crate::case::CaseStyle;
use crate::error::{Error, ValueKind};

/// What to do when a case conversion receives a non-string value.
///
/// Historically the kebab renderer swallowed type errors (empty output)
/// while the camel and dot renderers failed. The policy is an explicit
/// argument so callers opt into either behavior per call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonTextPolicy {
    /// Fail with [`Error::InvalidType`].
    #[default]
    Reject,
    /// Return an empty string instead of failing.
    EmptyOutput,
}

/// Render a runtime-typed value in the given case style.
///
/// String values are always converted. Non-string values either fail with
/// [`Error::InvalidType`] or yield an empty string, per `policy`.
pub fn case_value(value: &Value, style: CaseStyle, policy: NonTextPolicy) -> Result<String, Error> {
    match value {
        Value::String(s) => Ok(style.render(s)),
        other => match policy {
            NonTextPolicy::Reject => Err(Error::InvalidType {
                expected: "a string",
                found: ValueKind::of(other),
            }),
            NonTextPolicy::EmptyOutput => Ok(String::new()),
        },
    }
}

/// Convert a runtime-typed value to camelCase, failing on non-string input.
pub fn camel_case_value(value: &Value) -> Result<String, Error> {
    case_value(value, CaseStyle::Camel, NonTextPolicy::Reject)
}

/// Convert a runtime-typed value to dot.case, failing on non-string input.
pub fn dot_case_value(value: &Value) -> Result<String, Error> {
    case_value(value, CaseStyle::Dot, NonTextPolicy::Reject)
}

/// Convert a runtime-typed value to kebab-case.
///
/// Non-string input yields an empty string rather than an error, matching
/// this renderer's historically more permissive contract. Use [`case_value`]
/// with [`NonTextPolicy::Reject`] for the strict behavior.
pub fn kebab_case_value(value: &Value) -> String {
    case_value(value, CaseStyle::Kebab, NonTextPolicy::EmptyOutput).unwrap_or_default()
}

/// Add two runtime-typed numbers.
///
/// Fails with [`Error::MissingArgument`] if either operand is null, and with
/// [`Error::InvalidType`] if either operand is not a number representable as
/// a finite `f64`. Null-ness of both operands is checked before any type
/// validation, so a null operand always reports [`Error::MissingArgument`]
/// regardless of what the other operand holds.
pub fn add_numbers(a: &Value, b: &Value) -> Result<f64, Error> {
    for (value, position) in [(a, "first"), (b, "second")] {
        if value.is_null() {
            return Err(Error::MissingArgument { position });
        }
    }
    Ok(finite_number(a)? + finite_number(b)?)
}

fn finite_number(value: &Value) -> Result<f64, Error> {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.is_finite() => Ok(f),
            _ => Err(Error::InvalidType {
                expected: "a finite number",
                found: ValueKind::Number,
            }),
        },
        other => Err(Error::InvalidType {
            expected: "a finite number",
            found: ValueKind::of(other),
        }),
    }
}
