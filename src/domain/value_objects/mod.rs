//! # Value Objects
//!
//! Immutable primitives with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`RedCode`]: Markit RED entity/pair identifier
//!
//! ## Classification Types
//!
//! - [`SeniorityLevel`]: seniority tier of a reference obligation
//!
//! ## Monetary Types
//!
//! - [`Currency`]: three-letter ISO 4217 currency code

pub mod currency;
pub mod red_code;
pub mod seniority;

pub use currency::{Currency, CurrencyError};
pub use red_code::{RedCode, RedCodeError};
pub use seniority::{ParseSeniorityError, SeniorityLevel};
