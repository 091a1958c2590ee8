//! Denormalization of untyped wire values into closed enumerations.
//!
//! ## Summary
//! A [`ClosedEnum`] is a type with a fixed, non-empty set of permitted raw
//! values. [`EnumConverter`] validates a raw [`serde_json::Value`] against that
//! set and either constructs the typed member or reports a
//! [`ConversionError`] listing every permitted value, the value received and,
//! when the caller supplied one, the structural path of the field.
//!
//! Hosting pipelines drive the converter through the [`Denormalizer`]
//! contract; code that knows its target type statically calls
//! [`EnumConverter::convert`] directly or uses [`de::deserialize`] from serde.

pub mod closed_enum;
pub mod context;
pub mod converter;
pub mod de;
pub mod denormalizer;
pub mod error;
pub mod type_key;

pub use closed_enum::{ClosedEnum, InvalidMember};
pub use context::DenormalizationContext;
pub use converter::{EnumConverter, EnumDescriptor};
pub use denormalizer::Denormalizer;
pub use error::{ConversionError, ConversionErrorKind, ConversionResult};
pub use type_key::TypeKey;
