//! Typed errors raised at the dynamic value boundary.

use std::fmt;

use serde_json::Value;

/// The runtime kind of a JSON value, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Classify a value by its runtime kind.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        write!(f, "{}", name)
    }
}

/// Errors raised by the value-boundary operations.
///
/// All errors are raised synchronously at the point of detection, before any
/// transformation proceeds, and are never recovered internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required operand was absent or null (numeric adder only).
    MissingArgument { position: &'static str },
    /// A value was not of the required kind.
    InvalidType {
        expected: &'static str,
        found: ValueKind,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingArgument { .. } => {
                write!(f, "Both arguments must be provided and not null")
            }
            Error::InvalidType { expected, found } => {
                write!(f, "Input must be {}, got {}", expected, found)
            }
        }
    }
}

impl std::error::Error for Error {}
