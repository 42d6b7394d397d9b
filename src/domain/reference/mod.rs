//! # Reference Information
//!
//! The polymorphic description of what a credit default swap references.
//!
//! [`ReferenceInformation`] is a closed sum type over the known shapes:
//! a single-name obligor ([`SingleNameReferenceInformation`]) or a credit
//! index ([`IndexReferenceInformation`]). Downstream pricing code matches
//! exhaustively on the variant, or uses the capability set directly:
//! [`kind`](ReferenceInformation::kind) and
//! [`market_data_key`](ReferenceInformation::market_data_key).
//!
//! # Examples
//!
//! ```
//! use cds_reference::domain::reference::{
//!     ReferenceInformation, ReferenceInformationType, SingleNameReferenceInformation,
//! };
//! use cds_reference::domain::value_objects::{Currency, RedCode, SeniorityLevel};
//!
//! let info = SingleNameReferenceInformation::of(
//!     "Agilent Tech Inc",
//!     RedCode::new("008CA0").unwrap(),
//!     SeniorityLevel::SeniorUnsecuredForeign,
//!     Currency::USD,
//! );
//!
//! assert_eq!(info.kind(), ReferenceInformationType::SingleName);
//! assert_eq!(info.market_data_key(), "Agilent Tech Inc 008CA0 SNRFOR USD");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod index;
pub mod single_name;


pub use index::{IndexReferenceInformation, IndexReferenceInformationBuilder};
pub use single_name::{SingleNameReferenceInformation, SingleNameReferenceInformationBuilder};

/// Discriminator identifying which concrete reference shape is present.
///
/// Fixed per concrete variant; retained as the `type` tag in serialized
/// representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferenceInformationType {
    /// A single corporate or sovereign reference entity.
    SingleName,

    /// A credit index (basket of reference entities).
    Index,
}

impl fmt::Display for ReferenceInformationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleName => f.write_str("SINGLE_NAME"),
            Self::Index => f.write_str("INDEX"),
        }
    }
}

/// The reference terms of a credit default swap.
///
/// A closed polymorphic abstraction: every variant is an immutable value
/// built through its own validating builder, and every variant derives a
/// deterministic market-data key used to look up the associated curves
/// for pricing.
///
/// # Examples
///
/// ```
/// use cds_reference::domain::reference::{ReferenceInformation, IndexReferenceInformation};
/// use cds_reference::domain::value_objects::RedCode;
///
/// let info = IndexReferenceInformation::of(
///     "CDX.NA.IG",
///     RedCode::new("2I65BYCL6").unwrap(),
///     22,
///     1,
/// );
///
/// match info {
///     ReferenceInformation::SingleName(_) => unreachable!(),
///     ReferenceInformation::Index(index) => assert_eq!(index.series(), 22),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ReferenceInformation {
    /// Protection on a single obligor.
    #[serde(rename = "SINGLE_NAME")]
    SingleName(SingleNameReferenceInformation),

    /// Protection on a credit index.
    #[serde(rename = "INDEX")]
    Index(IndexReferenceInformation),
}

impl ReferenceInformation {
    /// Returns the discriminator for the concrete shape present.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ReferenceInformationType {
        match self {
            Self::SingleName(_) => ReferenceInformationType::SingleName,
            Self::Index(_) => ReferenceInformationType::Index,
        }
    }

    /// Derives the market-data key for curve lookup.
    ///
    /// Deterministic and side-effect-free: a pure function of the variant's
    /// own fields. Token order and single-space separation are part of the
    /// contract with downstream curve repositories.
    #[must_use]
    pub fn market_data_key(&self) -> String {
        match self {
            Self::SingleName(info) => info.market_data_key(),
            Self::Index(info) => info.market_data_key(),
        }
    }
}

impl fmt::Display for ReferenceInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleName(info) => info.fmt(f),
            Self::Index(info) => info.fmt(f),
        }
    }
}

impl From<SingleNameReferenceInformation> for ReferenceInformation {
    fn from(info: SingleNameReferenceInformation) -> Self {
        Self::SingleName(info)
    }
}

impl From<IndexReferenceInformation> for ReferenceInformation {
    fn from(info: IndexReferenceInformation) -> Self {
        Self::Index(info)
    }
}
