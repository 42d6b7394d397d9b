//! # Domain Errors
//!
//! Typed error types for domain operations.
//!
//! Error codes are organized by category:
//! - 1000-1999: Validation errors
//! - 2000-2999: Property-access errors
//! - 3000-3999: Mutation errors
//!
//! # Examples
//!
//! ```
//! use cds_reference::domain::errors::BeanError;
//!
//! let error = BeanError::MissingField {
//!     type_name: "SingleNameReferenceInformation",
//!     property: "currency",
//! };
//! assert_eq!(error.code(), 1001);
//! ```

pub mod bean_error;

pub use bean_error::{BeanError, BeanResult};
