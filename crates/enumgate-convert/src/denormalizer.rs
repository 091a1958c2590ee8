//! Type-directed converter contract consumed by hosting pipelines.

use std::any::Any;

use serde_json::Value;

use crate::context::DenormalizationContext;
use crate::converter::{EnumConverter, EnumDescriptor};
use crate::error::{ConversionError, ConversionResult};
use crate::type_key::TypeKey;

/// A converter a pipeline can select per field by target type.
///
/// The pipeline calls [`Denormalizer::supports`] for every field it visits and
/// only calls [`Denormalizer::denormalize`] when it returned `true`. Whether a
/// failure aborts the whole document or is collected alongside other field
/// errors is the pipeline's decision.
pub trait Denormalizer: Send + Sync {
    /// Target types this denormalizer handles for `format`.
    fn supported_types(&self, format: Option<&str>) -> Vec<TypeKey>;

    /// Applicability check. Must be side-effect free and must not panic,
    /// including for an unresolved (`None`) target.
    fn supports(&self, target: Option<&TypeKey>, format: Option<&str>) -> bool;

    /// Converts `raw` into an instance of `target`.
    ///
    /// ## Errors
    /// Returns a [`ConversionError`] when `raw` cannot be converted.
    fn denormalize(
        &self,
        raw: &Value,
        target: &TypeKey,
        format: Option<&str>,
        context: &DenormalizationContext,
    ) -> ConversionResult<Box<dyn Any + Send>>;
}

// Format identifiers are accepted and ignored: membership does not depend on
// the wire format.
impl Denormalizer for EnumConverter {
    fn supported_types(&self, _format: Option<&str>) -> Vec<TypeKey> {
        self.descriptors()
            .into_iter()
            .map(EnumDescriptor::key)
            .collect()
    }

    fn supports(&self, target: Option<&TypeKey>, _format: Option<&str>) -> bool {
        target.is_some_and(|target| self.descriptor(target).is_some())
    }

    fn denormalize(
        &self,
        raw: &Value,
        target: &TypeKey,
        _format: Option<&str>,
        context: &DenormalizationContext,
    ) -> ConversionResult<Box<dyn Any + Send>> {
        let path = self.path_of(context);

        let Some(descriptor) = self.descriptor(target) else {
            tracing::warn!(
                target_type = target.name(),
                path,
                "Denormalize called for an unregistered type"
            );
            return Err(ConversionError::unsupported_type(target, raw, path));
        };

        descriptor.convert(raw, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closed_enum::{ClosedEnum, InvalidMember};
    use crate::error::ConversionErrorKind;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    enum Flag {
        On,
    }

    impl ClosedEnum for Flag {
        const NAME: &'static str = "Flag";

        fn permitted_values() -> Vec<Value> {
            vec![json!("on")]
        }

        fn from_raw_value(raw: &Value) -> Result<Self, InvalidMember> {
            match raw.as_str() {
                Some("on") => Ok(Self::On),
                _ => Err(InvalidMember::new(Self::NAME, raw)),
            }
        }
    }

    #[test]
    fn test_supports_ignores_format() {
        let converter = EnumConverter::new().with::<Flag>();
        let key = TypeKey::of::<Flag>();

        assert!(converter.supports(Some(&key), None));
        assert!(converter.supports(Some(&key), Some("json")));
        assert!(converter.supports(Some(&key), Some("xml")));
    }

    #[test]
    fn test_supports_none() {
        let converter = EnumConverter::new().with::<Flag>();

        assert!(!converter.supports(None, None));
    }

    #[test]
    fn test_supported_types() {
        let converter = EnumConverter::new().with::<Flag>();

        assert_eq!(converter.supported_types(None), vec![TypeKey::of::<Flag>()]);
        assert!(EnumConverter::new().supported_types(Some("json")).is_empty());
    }

    #[test_log::test]
    fn test_denormalize_unregistered_type() {
        let err = EnumConverter::new()
            .denormalize(
                &json!("on"),
                &TypeKey::of::<Flag>(),
                None,
                &DenormalizationContext::with_path("settings.flag"),
            )
            .unwrap_err();

        assert_eq!(err.kind, ConversionErrorKind::UnsupportedType);
        assert_eq!(err.path.as_deref(), Some("settings.flag"));
    }

    #[test]
    fn test_usable_as_trait_object() {
        let denormalizers: Vec<Box<dyn Denormalizer>> =
            vec![Box::new(EnumConverter::new().with::<Flag>())];
        let key = TypeKey::of::<Flag>();

        let chosen = denormalizers
            .iter()
            .find(|denormalizer| denormalizer.supports(Some(&key), None))
            .unwrap();
        let member = chosen
            .denormalize(&json!("on"), &key, None, &DenormalizationContext::new())
            .unwrap();

        assert_eq!(member.downcast_ref::<Flag>(), Some(&Flag::On));
    }
}
