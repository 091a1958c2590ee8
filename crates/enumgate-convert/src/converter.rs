//! Closed-enumeration converter and its type registry.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use enumgate_core::config::ConversionConfig;
use enumgate_core::constants::DESERIALIZATION_PATH_KEY;
use serde_json::Value;

use crate::closed_enum::{ClosedEnum, InvalidMember};
use crate::context::DenormalizationContext;
use crate::error::{ConversionError, ConversionResult};
use crate::type_key::TypeKey;

type Construct = fn(&Value) -> Result<Box<dyn Any + Send>, InvalidMember>;

/// Type-erased view of one [`ClosedEnum`] implementor.
#[derive(Clone, Copy)]
pub struct EnumDescriptor {
    key: TypeKey,
    name: &'static str,
    permitted_values: fn() -> Vec<Value>,
    is_valid_member: fn(&Value) -> bool,
    construct: Construct,
}

impl EnumDescriptor {
    #[must_use]
    pub fn of<T: ClosedEnum>() -> Self {
        Self {
            key: TypeKey::of::<T>(),
            name: T::NAME,
            permitted_values: T::permitted_values,
            is_valid_member: T::is_valid_member,
            construct: construct_boxed::<T>,
        }
    }

    #[must_use]
    pub const fn key(&self) -> TypeKey {
        self.key
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn permitted_values(&self) -> Vec<Value> {
        (self.permitted_values)()
    }

    #[must_use]
    pub fn is_valid_member(&self, raw: &Value) -> bool {
        (self.is_valid_member)(raw)
    }

    /// Validates `raw` and constructs the boxed member.
    ///
    /// ## Errors
    /// Returns `NotNormalizable` for a non-member, `UnexpectedValue` if the
    /// descriptor rejects a value it reported as a member.
    pub fn convert(
        &self,
        raw: &Value,
        path: Option<&str>,
    ) -> ConversionResult<Box<dyn Any + Send>> {
        if !self.is_valid_member(raw) {
            return Err(ConversionError::not_a_member(
                self.name,
                self.permitted_values(),
                raw,
                path,
            ));
        }

        (self.construct)(raw).map_err(|err| {
            ConversionError::construction_failed(self.name, self.permitted_values(), raw, path, err)
        })
    }
}

impl fmt::Debug for EnumDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumDescriptor")
            .field("key", &self.key)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn construct_boxed<T: ClosedEnum>(raw: &Value) -> Result<Box<dyn Any + Send>, InvalidMember> {
    T::from_raw_value(raw).map(|member| Box::new(member) as Box<dyn Any + Send>)
}

/// Validates a raw value against `T` and constructs the member.
///
/// ## Errors
/// Returns `NotNormalizable` if `raw` is not one of `T`'s permitted values,
/// `UnexpectedValue` if `T::from_raw_value` rejects a permitted value.
pub fn convert_member<T: ClosedEnum>(raw: &Value, path: Option<&str>) -> ConversionResult<T> {
    if !T::is_valid_member(raw) {
        return Err(ConversionError::not_a_member(
            T::NAME,
            T::permitted_values(),
            raw,
            path,
        ));
    }

    T::from_raw_value(raw).map_err(|err| {
        ConversionError::construction_failed(T::NAME, T::permitted_values(), raw, path, err)
    })
}

/// Denormalizes raw values into closed enumerations.
///
/// Statically typed callers use [`EnumConverter::convert`], which needs no
/// registration. Pipelines that only know the target as a [`TypeKey`] go
/// through the [`crate::Denormalizer`] implementation, which consults the
/// registry populated by [`EnumConverter::register`].
#[derive(Debug, Clone)]
pub struct EnumConverter {
    path_key: String,
    registry: HashMap<TypeId, EnumDescriptor>,
}

impl Default for EnumConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl EnumConverter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            path_key: DESERIALIZATION_PATH_KEY.to_string(),
            registry: HashMap::new(),
        }
    }

    /// Creates a converter that reads the structural path from the
    /// configured context key.
    #[must_use]
    pub fn with_settings(config: &ConversionConfig) -> Self {
        Self {
            path_key: config.path_key.clone(),
            registry: HashMap::new(),
        }
    }

    /// Registers `T` so it is reported by `supports` and accepted by
    /// `denormalize`. Registering a type twice has no further effect.
    pub fn register<T: ClosedEnum>(&mut self) -> &mut Self {
        let descriptor = EnumDescriptor::of::<T>();
        if self
            .registry
            .insert(descriptor.key().id(), descriptor)
            .is_none()
        {
            tracing::debug!(
                enum_type = descriptor.name(),
                rust_type = descriptor.key().name(),
                "Registered closed enumeration"
            );
        }
        self
    }

    /// Builder form of [`EnumConverter::register`].
    #[must_use]
    pub fn with<T: ClosedEnum>(mut self) -> Self {
        self.register::<T>();
        self
    }

    #[must_use]
    pub fn path_key(&self) -> &str {
        &self.path_key
    }

    #[must_use]
    pub fn descriptor(&self, target: &TypeKey) -> Option<&EnumDescriptor> {
        self.registry.get(&target.id())
    }

    /// Registered descriptors, ordered by enum name.
    #[must_use]
    pub fn descriptors(&self) -> Vec<&EnumDescriptor> {
        let mut descriptors: Vec<_> = self.registry.values().collect();
        descriptors.sort_by_key(|descriptor| descriptor.name());
        descriptors
    }

    /// Structural path carried by `context` under the configured key.
    #[must_use]
    pub fn path_of<'a>(&self, context: &'a DenormalizationContext) -> Option<&'a str> {
        context.path_at(&self.path_key)
    }

    /// ## Summary
    /// Converts `raw` into a member of `T`.
    ///
    /// Membership is an exact match against `T::permitted_values()`. The
    /// structural path, if `context` carries one, is attached to any error.
    ///
    /// ## Errors
    /// Returns `NotNormalizable` if `raw` is not a permitted value and
    /// `UnexpectedValue` if `T` fails to construct a permitted value.
    pub fn convert<T: ClosedEnum>(
        &self,
        raw: &Value,
        context: &DenormalizationContext,
    ) -> ConversionResult<T> {
        convert_member::<T>(raw, self.path_of(context))
    }

    /// ## Summary
    /// Converts `raw` into `T` through the registry.
    ///
    /// ## Errors
    /// Returns `UnsupportedType` if `T` has not been registered, otherwise the
    /// same errors as [`EnumConverter::convert`].
    pub fn convert_to<T: ClosedEnum>(
        &self,
        raw: &Value,
        context: &DenormalizationContext,
    ) -> ConversionResult<T> {
        let target = TypeKey::of::<T>();
        let member = crate::Denormalizer::denormalize(self, raw, &target, None, context)?;

        match member.downcast::<T>() {
            Ok(member) => Ok(*member),
            Err(_) => Err(ConversionError::unsupported_type(
                &target,
                raw,
                self.path_of(context),
            )),
        }
    }
}
