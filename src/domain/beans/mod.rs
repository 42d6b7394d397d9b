//! # Bean Runtime
//!
//! Generic machinery for immutable domain value objects ("beans") composed
//! of named properties.
//!
//! A bean lives in exactly two phases: a short-lived mutable builder with one
//! optional slot per field, and a frozen value produced by a single validating
//! [`build`](BeanBuilder::build) call. No type is ever "sometimes mutable".
//! Each concrete bean registers its metadata statically (type name, declared
//! property-name list) and resolves incoming property names through a private
//! closed enumeration, so string dispatch exists only at the name-keyed
//! boundary itself.
//!
//! Name-keyed values are exchanged as [`serde_json::Value`], which keeps the
//! dynamic path aligned with the serde representation of every field type.
//!
//! # Examples
//!
//! ```
//! use cds_reference::domain::beans::{Bean, BeanBuilder};
//! use cds_reference::domain::reference::SingleNameReferenceInformation;
//! use serde_json::json;
//!
//! let mut builder = SingleNameReferenceInformation::builder();
//! builder.set("referenceEntityName", json!("Ford Mtr Co")).unwrap();
//! builder.set("referenceEntityId", json!("3H98A7")).unwrap();
//! builder.set("seniority", json!("SENIOR_UNSECURED_FOREIGN")).unwrap();
//! builder.set("currency", json!("USD")).unwrap();
//!
//! let info = builder.build().unwrap();
//! assert_eq!(info.property("currency").unwrap(), json!("USD"));
//! ```

use crate::domain::errors::{BeanError, BeanResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;

/// A frozen, immutable value object with named properties.
///
/// Implementors guarantee:
/// - every declared field is populated and valid (enforced at build time,
///   no partially-built instance is observable)
/// - no mutator exists; the only way to derive a changed value is
///   [`to_builder`](Bean::to_builder) followed by a fresh build
/// - structural equality and hash over all fields, and a canonical
///   `TypeName{field1=value1, ...}` [`Display`](fmt::Display) form in
///   declared field order
pub trait Bean: Clone + PartialEq + fmt::Debug + fmt::Display + Sized {
    /// The mutable staging type that produces this bean.
    type Builder: BeanBuilder<Bean = Self>;

    /// The canonical type name, as rendered in diagnostics and `Display`.
    fn type_name() -> &'static str;

    /// All valid property names for this type, in declared field order.
    ///
    /// Names use the serialization-boundary spelling (camelCase) and each
    /// name appears exactly once.
    fn property_names() -> &'static [&'static str];

    /// Returns the named property's value.
    ///
    /// # Errors
    ///
    /// [`BeanError::PropertyNotFound`] if `name` is outside
    /// [`property_names`](Bean::property_names).
    fn property(&self, name: &str) -> BeanResult<Value>;

    /// Returns a fresh builder with every slot unset.
    #[must_use]
    fn builder() -> Self::Builder {
        Self::Builder::default()
    }

    /// Returns a builder seeded with this instance's field values,
    /// enabling copy-with-modification without mutating the original.
    #[must_use]
    fn to_builder(&self) -> Self::Builder;

    /// Reflective write path on a frozen instance.
    ///
    /// Always fails: the instance is immutable. This exists so misuse of the
    /// generic name-keyed path surfaces as a typed error instead of silently
    /// doing nothing.
    ///
    /// # Errors
    ///
    /// [`BeanError::PropertyNotFound`] for unknown names,
    /// [`BeanError::UnsupportedMutation`] for known ones.
    fn set_property(&self, name: &str, _value: Value) -> BeanResult<()> {
        if Self::property_names().contains(&name) {
            Err(BeanError::UnsupportedMutation {
                type_name: Self::type_name(),
                property: name.to_string(),
            })
        } else {
            Err(BeanError::PropertyNotFound {
                type_name: Self::type_name(),
                property: name.to_string(),
            })
        }
    }
}

/// Mutable staging object that validates and freezes a [`Bean`].
///
/// A builder is exclusively owned by one caller during staging; it provides
/// no internal locking and is not meant for concurrent mutation. Building
/// borrows the builder, so one builder supports repeated set/build cycles.
pub trait BeanBuilder: Default {
    /// The frozen value type this builder produces.
    type Bean: Bean<Builder = Self>;

    /// Returns the currently staged value for `name`, or [`Value::Null`]
    /// when the slot is unset.
    ///
    /// # Errors
    ///
    /// [`BeanError::PropertyNotFound`] if `name` is unknown.
    fn get(&self, name: &str) -> BeanResult<Value>;

    /// Stages a value by property name.
    ///
    /// [`Value::Null`] clears the slot. A non-null value that does not
    /// deserialize into the field's declared type is rejected immediately;
    /// presence of mandatory fields is checked only at
    /// [`build`](BeanBuilder::build).
    ///
    /// # Errors
    ///
    /// [`BeanError::PropertyNotFound`] for unknown names,
    /// [`BeanError::InvalidValue`] for a wrong-typed value.
    fn set(&mut self, name: &str, value: Value) -> BeanResult<&mut Self>;

    /// Stages every entry of a name-to-value map.
    ///
    /// The first failing entry aborts; earlier entries stay staged.
    ///
    /// # Errors
    ///
    /// Same as [`set`](BeanBuilder::set), per entry.
    fn set_all(&mut self, values: &Map<String, Value>) -> BeanResult<&mut Self> {
        for (name, value) in values {
            self.set(name, value.clone())?;
        }
        tracing::debug!(
            bean = <Self::Bean as Bean>::type_name(),
            properties = values.len(),
            "applied property map"
        );
        Ok(self)
    }

    /// Validates every mandatory slot and freezes the value.
    ///
    /// Validation walks the declared field order and fails on the first
    /// missing slot. The builder is left untouched and may be reused for
    /// further set/build cycles.
    ///
    /// # Errors
    ///
    /// [`BeanError::MissingField`] naming the first unset mandatory field.
    fn build(&self) -> BeanResult<Self::Bean>;
}

/// Serializes a field value into its name-keyed [`Value`] form.
///
/// # Errors
///
/// [`BeanError::InvalidValue`] if the field's serde representation cannot
/// be expressed as JSON (not reachable for the types in this crate).
pub fn property_value<T: Serialize>(
    type_name: &'static str,
    property: &'static str,
    value: &T,
) -> BeanResult<Value> {
    serde_json::to_value(value).map_err(|err| BeanError::InvalidValue {
        type_name,
        property,
        reason: err.to_string(),
    })
}

/// Deserializes a name-keyed [`Value`] into a builder slot.
///
/// [`Value::Null`] maps to `None` (slot cleared); anything else must
/// deserialize into `T`.
///
/// # Errors
///
/// [`BeanError::InvalidValue`] carrying the deserialization failure.
pub fn staged_value<T: DeserializeOwned>(
    type_name: &'static str,
    property: &'static str,
    value: Value,
) -> BeanResult<Option<T>> {
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value)
        .map(Some)
        .map_err(|err| BeanError::InvalidValue {
            type_name,
            property,
            reason: err.to_string(),
        })
}

/// Extracts a mandatory slot at build time.
///
/// # Errors
///
/// [`BeanError::MissingField`] when the slot is unset.
pub fn require<T: Clone>(
    slot: &Option<T>,
    type_name: &'static str,
    property: &'static str,
) -> BeanResult<T> {
    slot.clone()
        .ok_or(BeanError::MissingField { type_name, property })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    mod helpers {
        use super::*;

        #[test]
        fn property_value_serializes() {
            let value = property_value("Bean", "field", &"hello").unwrap();
            assert_eq!(value, json!("hello"));
        }

        #[test]
        fn staged_value_null_clears() {
            let staged: Option<String> = staged_value("Bean", "field", Value::Null).unwrap();
            assert!(staged.is_none());
        }

        #[test]
        fn staged_value_rejects_wrong_type() {
            let err = staged_value::<u32>("Bean", "field", json!("not a number")).unwrap_err();
            assert_eq!(err.code(), 1002);
            assert_eq!(err.property(), "field");
        }

        #[test]
        fn require_reports_missing_slot() {
            let slot: Option<String> = None;
            let err = require(&slot, "Bean", "field").unwrap_err();
            assert_eq!(
                err,
                BeanError::MissingField {
                    type_name: "Bean",
                    property: "field",
                }
            );
        }

        #[test]
        fn require_clones_populated_slot() {
            let slot = Some("value".to_string());
            assert_eq!(require(&slot, "Bean", "field").unwrap(), "value");
            // slot stays populated for further build cycles
            assert!(slot.is_some());
        }
    }
}
