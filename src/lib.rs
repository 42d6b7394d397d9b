//! # CDS Reference Data
//!
//! Immutable, validated value objects describing the legal and economic
//! reference terms of a credit default swap: the reference entity and the
//! reference obligation(s), plus the generic value-object runtime those
//! types are built on.
//!
//! ## Architecture
//!
//! This crate is a pure domain library. It contains:
//!
//! - **Bean Runtime** (`domain::beans`): generic machinery for immutable
//!   value objects with named properties, builder-based construction, and
//!   build-time validation
//! - **Value Objects** (`domain::value_objects`): validated primitives
//!   (currency codes, RED identifiers, seniority tiers)
//! - **Reference Information** (`domain::reference`): the polymorphic
//!   reference-terms abstraction and its concrete variants
//! - **Errors** (`domain::errors`): typed error definitions with numeric codes
//!
//! ## Example
//!
//! ```
//! use cds_reference::domain::reference::SingleNameReferenceInformation;
//! use cds_reference::domain::value_objects::{Currency, RedCode, SeniorityLevel};
//!
//! let info = SingleNameReferenceInformation::of(
//!     "Agilent Tech Inc",
//!     RedCode::new("008CA0").unwrap(),
//!     SeniorityLevel::SeniorUnsecuredForeign,
//!     Currency::USD,
//! );
//!
//! // The derived key indexes curve/market-data repositories for pricing.
//! assert_eq!(info.market_data_key(), "Agilent Tech Inc 008CA0 SNRFOR USD");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod domain;
