//! Conversion error types.

use std::fmt;

use enumgate_core::ScalarKind;
use serde_json::Value;
use thiserror::Error;

use crate::closed_enum::InvalidMember;
use crate::type_key::TypeKey;

/// Result type for enum conversion.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// A raw value that could not be turned into a typed enum member.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}")]
pub struct ConversionError {
    /// Error kind.
    pub kind: ConversionErrorKind,
    /// Diagnostic message, including the permitted values and the value received.
    pub message: String,
    /// Name of the target enumeration (or type, for `UnsupportedType`).
    pub enum_name: &'static str,
    /// Every permitted raw value of the target, in declaration order.
    pub expected: Vec<Value>,
    /// The raw value as received.
    pub received: Value,
    /// Scalar kinds the target accepts.
    pub expected_kinds: Vec<ScalarKind>,
    /// Structural path of the field, when the caller supplied one.
    pub path: Option<String>,
    /// Whether `message` may be shown to the end user as is.
    pub use_message_for_user: bool,
    #[source]
    pub source: Option<InvalidMember>,
}

impl ConversionError {
    /// Creates an error for a value outside the permitted set.
    #[must_use]
    pub fn not_a_member(
        enum_name: &'static str,
        expected: Vec<Value>,
        received: &Value,
        path: Option<&str>,
    ) -> Self {
        let message = with_path(
            path,
            format!(
                "expected one of {} for {enum_name}, got {received} ({})",
                Value::Array(expected.clone()),
                ScalarKind::of(received),
            ),
        );

        Self {
            kind: ConversionErrorKind::NotNormalizable,
            message,
            enum_name,
            expected,
            received: received.clone(),
            expected_kinds: vec![ScalarKind::String],
            path: path.map(str::to_owned),
            use_message_for_user: true,
            source: None,
        }
    }

    /// Re-wraps a constructor failure for a value that had passed the
    /// membership test.
    #[must_use]
    pub fn construction_failed(
        enum_name: &'static str,
        expected: Vec<Value>,
        received: &Value,
        path: Option<&str>,
        source: InvalidMember,
    ) -> Self {
        let message = with_path(path, format!("{enum_name} rejected a permitted value: {source}"));

        Self {
            kind: ConversionErrorKind::UnexpectedValue,
            message,
            enum_name,
            expected,
            received: received.clone(),
            expected_kinds: vec![ScalarKind::String],
            path: path.map(str::to_owned),
            use_message_for_user: false,
            source: Some(source),
        }
    }

    /// Creates an error for a target with no registered enum descriptor.
    #[must_use]
    pub fn unsupported_type(target: &TypeKey, received: &Value, path: Option<&str>) -> Self {
        let message = with_path(
            path,
            format!("{target} is not a registered closed enumeration"),
        );

        Self {
            kind: ConversionErrorKind::UnsupportedType,
            message,
            enum_name: target.name(),
            expected: Vec::new(),
            received: received.clone(),
            expected_kinds: Vec::new(),
            path: path.map(str::to_owned),
            use_message_for_user: false,
            source: None,
        }
    }

    /// Kind of the value actually received.
    #[must_use]
    pub fn received_kind(&self) -> ScalarKind {
        ScalarKind::of(&self.received)
    }
}

fn with_path(path: Option<&str>, message: String) -> String {
    match path {
        Some(path) => format!("at {path}: {message}"),
        None => message,
    }
}

/// Conversion error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionErrorKind {
    /// The value is not a member of the permitted set.
    NotNormalizable,
    /// The descriptor rejected a value it reports as permitted.
    UnexpectedValue,
    /// No descriptor is registered for the target type.
    UnsupportedType,
}

impl fmt::Display for ConversionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNormalizable => write!(f, "not normalizable"),
            Self::UnexpectedValue => write!(f, "unexpected value"),
            Self::UnsupportedType => write!(f, "unsupported type"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::error::Error as _;

    fn status_values() -> Vec<Value> {
        vec![json!("active"), json!("inactive"), json!("pending")]
    }

    #[test]
    fn test_not_a_member_message() {
        let err = ConversionError::not_a_member("Status", status_values(), &json!("deleted"), None);

        assert_eq!(err.kind, ConversionErrorKind::NotNormalizable);
        assert_eq!(
            err.to_string(),
            concat!(
                r#"not normalizable: expected one of ["active","inactive","pending"] "#,
                r#"for Status, got "deleted" (string)"#,
            )
        );
        assert!(err.use_message_for_user);
        assert!(err.source().is_none());
    }

    #[test]
    fn test_not_a_member_with_path() {
        let err =
            ConversionError::not_a_member("Status", status_values(), &json!(42), Some("user.role"));

        assert_eq!(err.path.as_deref(), Some("user.role"));
        assert!(err.message.starts_with("at user.role: "));
        assert!(err.message.ends_with("got 42 (int)"));
        assert_eq!(err.received_kind(), ScalarKind::Int);
        assert_eq!(err.expected_kinds, vec![ScalarKind::String]);
    }

    #[test]
    fn test_construction_failed_keeps_source() {
        let source = InvalidMember::new("Status", &json!("pending"));
        let err = ConversionError::construction_failed(
            "Status",
            status_values(),
            &json!("pending"),
            None,
            source.clone(),
        );

        assert_eq!(err.kind, ConversionErrorKind::UnexpectedValue);
        assert_eq!(err.source, Some(source));
        assert!(err.source().is_some());
        assert!(!err.use_message_for_user);
        assert!(err.to_string().starts_with("unexpected value: Status rejected"));
    }

    #[test]
    fn test_unsupported_type() {
        let err = ConversionError::unsupported_type(&TypeKey::of::<String>(), &json!("x"), None);

        assert_eq!(err.kind, ConversionErrorKind::UnsupportedType);
        assert!(err.expected.is_empty());
        assert!(err.message.contains("String"));
    }
}
