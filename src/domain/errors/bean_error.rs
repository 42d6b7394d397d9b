//! # Bean Errors
//!
//! Typed errors raised by the value-object runtime.
//!
//! This module provides the [`BeanError`] enum covering the three failure
//! modes of the bean runtime: build-time validation, named property access,
//! and reflective mutation attempts.
//!
//! # Error Code Ranges
//!
//! - **1000-1999**: Validation errors
//! - **2000-2999**: Property-access errors
//! - **3000-3999**: Mutation errors
//!
//! # Examples
//!
//! ```
//! use cds_reference::domain::errors::BeanError;
//!
//! let error = BeanError::PropertyNotFound {
//!     type_name: "SingleNameReferenceInformation",
//!     property: "doesNotExist".to_string(),
//! };
//! assert_eq!(error.code(), 2001);
//! assert_eq!(error.category(), "property");
//! ```

use thiserror::Error;

/// Error raised by bean construction, property access, or mutation attempts.
///
/// Every variant names the bean type and the property responsible, so that
/// callers (and any CLI/service wrapping this library) can surface a precise
/// "missing field X" / "unknown field X" diagnostic. All variants represent
/// local, synchronous programming errors: there is no partial success and
/// nothing to retry.
///
/// # Error Code Ranges
///
/// | Range | Category |
/// |-------|----------|
/// | 1000-1999 | Validation errors |
/// | 2000-2999 | Property-access errors |
/// | 3000-3999 | Mutation errors |
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BeanError {
    // ========================================================================
    // Validation Errors (1000-1999)
    // ========================================================================
    /// A mandatory field was never set, or was explicitly cleared, when
    /// `build()` ran. Construction is aborted; no instance is produced.
    #[error("missing required field: {type_name}.{property}")]
    MissingField {
        /// The bean type being built.
        type_name: &'static str,
        /// The first missing field, in declared order.
        property: &'static str,
    },

    /// A name-keyed `set` supplied a value that does not deserialize into
    /// the field's declared type.
    #[error("invalid value for {type_name}.{property}: {reason}")]
    InvalidValue {
        /// The bean type being built.
        type_name: &'static str,
        /// The field that rejected the value.
        property: &'static str,
        /// Deserialization failure detail.
        reason: String,
    },

    // ========================================================================
    // Property-Access Errors (2000-2999)
    // ========================================================================
    /// Named property access (get or set) used a name outside the type's
    /// declared field set. Caller error, not data error.
    #[error("unknown property '{property}' on {type_name}")]
    PropertyNotFound {
        /// The bean type accessed.
        type_name: &'static str,
        /// The unrecognized property name.
        property: String,
    },

    // ========================================================================
    // Mutation Errors (3000-3999)
    // ========================================================================
    /// A write was attempted through a frozen instance's reflective property
    /// interface. Immutability is structural; this signals misuse of the
    /// generic path rather than a reachable state change.
    #[error("property '{property}' on {type_name} cannot be written")]
    UnsupportedMutation {
        /// The bean type targeted.
        type_name: &'static str,
        /// The property the caller tried to write.
        property: String,
    },
}

impl BeanError {
    /// Returns the numeric error code.
    ///
    /// # Examples
    ///
    /// ```
    /// use cds_reference::domain::errors::BeanError;
    ///
    /// let error = BeanError::MissingField {
    ///     type_name: "SingleNameReferenceInformation",
    ///     property: "seniority",
    /// };
    /// assert_eq!(error.code(), 1001);
    /// ```
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            // Validation errors (1000-1999)
            Self::MissingField { .. } => 1001,
            Self::InvalidValue { .. } => 1002,

            // Property-access errors (2000-2999)
            Self::PropertyNotFound { .. } => 2001,

            // Mutation errors (3000-3999)
            Self::UnsupportedMutation { .. } => 3001,
        }
    }

    /// Returns the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.code() {
            1000..=1999 => "validation",
            2000..=2999 => "property",
            3000..=3999 => "mutation",
            _ => "unknown",
        }
    }

    /// Returns true if this is a build-time validation error.
    #[inline]
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self.code(), 1000..=1999)
    }

    /// Returns true if this is a property-access error.
    #[inline]
    #[must_use]
    pub const fn is_property_error(&self) -> bool {
        matches!(self.code(), 2000..=2999)
    }

    /// Returns true if this is a mutation error.
    #[inline]
    #[must_use]
    pub const fn is_mutation_error(&self) -> bool {
        matches!(self.code(), 3000..=3999)
    }

    /// Returns the property name this error refers to.
    #[must_use]
    pub fn property(&self) -> &str {
        match self {
            Self::MissingField { property, .. } => property,
            Self::InvalidValue { property, .. } => property,
            Self::PropertyNotFound { property, .. } => property,
            Self::UnsupportedMutation { property, .. } => property,
        }
    }
}

/// Result type for bean-runtime operations.
pub type BeanResult<T> = Result<T, BeanError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod error_codes {
        use super::*;

        #[test]
        fn validation_errors_in_range() {
            let errors = [
                BeanError::MissingField {
                    type_name: "SingleNameReferenceInformation",
                    property: "currency",
                },
                BeanError::InvalidValue {
                    type_name: "SingleNameReferenceInformation",
                    property: "seniority",
                    reason: "unknown variant".to_string(),
                },
            ];

            for error in errors {
                let code = error.code();
                assert!(
                    (1000..2000).contains(&code),
                    "Expected validation error code 1000-1999, got {}",
                    code
                );
                assert!(error.is_validation_error());
                assert_eq!(error.category(), "validation");
            }
        }

        #[test]
        fn property_errors_in_range() {
            let error = BeanError::PropertyNotFound {
                type_name: "SingleNameReferenceInformation",
                property: "doesNotExist".to_string(),
            };

            assert_eq!(error.code(), 2001);
            assert!(error.is_property_error());
            assert_eq!(error.category(), "property");
        }

        #[test]
        fn mutation_errors_in_range() {
            let error = BeanError::UnsupportedMutation {
                type_name: "SingleNameReferenceInformation",
                property: "currency".to_string(),
            };

            assert_eq!(error.code(), 3001);
            assert!(error.is_mutation_error());
            assert_eq!(error.category(), "mutation");
        }
    }

    mod display {
        use super::*;

        #[test]
        fn missing_field_names_the_field() {
            let error = BeanError::MissingField {
                type_name: "SingleNameReferenceInformation",
                property: "referenceEntityId",
            };
            assert_eq!(
                error.to_string(),
                "missing required field: SingleNameReferenceInformation.referenceEntityId"
            );
        }

        #[test]
        fn property_not_found_names_the_name() {
            let error = BeanError::PropertyNotFound {
                type_name: "IndexReferenceInformation",
                property: "tenor".to_string(),
            };
            assert_eq!(
                error.to_string(),
                "unknown property 'tenor' on IndexReferenceInformation"
            );
        }

        #[test]
        fn unsupported_mutation_names_the_property() {
            let error = BeanError::UnsupportedMutation {
                type_name: "SingleNameReferenceInformation",
                property: "currency".to_string(),
            };
            assert_eq!(
                error.to_string(),
                "property 'currency' on SingleNameReferenceInformation cannot be written"
            );
        }
    }

    mod accessors {
        use super::*;

        #[test]
        fn property_returns_offending_field() {
            let error = BeanError::MissingField {
                type_name: "SingleNameReferenceInformation",
                property: "seniority",
            };
            assert_eq!(error.property(), "seniority");

            let error = BeanError::PropertyNotFound {
                type_name: "SingleNameReferenceInformation",
                property: "doesNotExist".to_string(),
            };
            assert_eq!(error.property(), "doesNotExist");
        }
    }
}
