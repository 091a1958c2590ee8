//! The closed-enumeration capability.

use serde_json::Value;
use thiserror::Error;

/// A type whose values are exactly one of a fixed, non-empty set of raw
/// wire values.
///
/// Implementors are usually tagged-variant enums. The permitted set must not
/// change for the lifetime of the program and every permitted value must map
/// to exactly one member.
///
/// ```ignore
/// impl ClosedEnum for Status {
///     const NAME: &'static str = "Status";
///
///     fn permitted_values() -> Vec<Value> {
///         vec!["active".into(), "inactive".into()]
///     }
///
///     fn from_raw_value(raw: &Value) -> Result<Self, InvalidMember> {
///         match raw.as_str() {
///             Some("active") => Ok(Self::Active),
///             Some("inactive") => Ok(Self::Inactive),
///             _ => Err(InvalidMember::new(Self::NAME, raw)),
///         }
///     }
/// }
/// ```
pub trait ClosedEnum: Sized + Send + Sync + 'static {
    /// Name shown in diagnostics.
    const NAME: &'static str;

    /// Every permitted raw value, in declaration order.
    fn permitted_values() -> Vec<Value>;

    /// Exact membership test against [`ClosedEnum::permitted_values`].
    ///
    /// No coercion is applied: `"1"`, `1` and `1.0` are three different
    /// values, and string comparison is case-sensitive.
    #[must_use]
    fn is_valid_member(raw: &Value) -> bool {
        Self::permitted_values().iter().any(|member| member == raw)
    }

    /// Constructs the member for a permitted raw value.
    ///
    /// ## Errors
    /// Returns [`InvalidMember`] if `raw` does not name a member.
    fn from_raw_value(raw: &Value) -> Result<Self, InvalidMember>;
}

/// Native failure of [`ClosedEnum::from_raw_value`].
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{value} is not a valid {enum_name} member")]
pub struct InvalidMember {
    pub enum_name: &'static str,
    pub value: Value,
}

impl InvalidMember {
    #[must_use]
    pub fn new(enum_name: &'static str, value: &Value) -> Self {
        Self {
            enum_name,
            value: value.clone(),
        }
    }
}
