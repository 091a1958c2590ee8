//! serde adapters for fields typed as a [`ClosedEnum`].
//!
//! ```ignore
//! #[derive(Deserialize)]
//! struct User {
//!     #[serde(deserialize_with = "enumgate_convert::de::deserialize")]
//!     status: Status,
//!     #[serde(default, deserialize_with = "enumgate_convert::de::option::deserialize")]
//!     previous_status: Option<Status>,
//! }
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::closed_enum::ClosedEnum;
use crate::converter::convert_member;

/// Deserializes any self-describing value and converts it into `T`.
///
/// ## Errors
/// Returns the deserializer's error carrying the conversion message when the
/// value is not one of `T`'s permitted values.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: ClosedEnum,
{
    let raw = Value::deserialize(deserializer)?;
    convert_member::<T>(&raw, None).map_err(D::Error::custom)
}

/// Adapters for `Option<T>` fields, where `null` means absent.
pub mod option {
    use super::{ClosedEnum, Deserialize, Deserializer, Value, convert_member};
    use serde::de::Error as _;

    /// ## Errors
    /// Returns the deserializer's error when a non-null value is not one of
    /// `T`'s permitted values.
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: ClosedEnum,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            raw => convert_member::<T>(&raw, None)
                .map(Some)
                .map_err(D::Error::custom),
        }
    }
}
