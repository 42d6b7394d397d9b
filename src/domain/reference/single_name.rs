//! # Single-Name Reference Information
//!
//! Reference terms for protection on a single obligor.
//!
//! Contains all the terms relevant to defining the reference entity and
//! reference obligation(s) of a single-name credit default swap. The
//! reference entity is the corporate or sovereign on which protection is
//! bought or sold; seniority and currency describe the reference
//! obligation (entities themselves are neither senior nor subordinated).
//!
//! # Examples
//!
//! ```
//! use cds_reference::domain::beans::{Bean, BeanBuilder};
//! use cds_reference::domain::reference::SingleNameReferenceInformation;
//! use cds_reference::domain::value_objects::{Currency, RedCode, SeniorityLevel};
//!
//! let mut builder = SingleNameReferenceInformation::builder();
//! builder
//!     .reference_entity_name("Agilent Tech Inc")
//!     .reference_entity_id(RedCode::new("008CA0").unwrap())
//!     .seniority(SeniorityLevel::SeniorUnsecuredForeign)
//!     .currency(Currency::USD);
//!
//! let info = builder.build().unwrap();
//! assert_eq!(info.market_data_key(), "Agilent Tech Inc 008CA0 SNRFOR USD");
//! ```

use crate::domain::beans::{self, Bean, BeanBuilder};
use crate::domain::errors::{BeanError, BeanResult};
use crate::domain::reference::{ReferenceInformation, ReferenceInformationType};
use crate::domain::value_objects::{Currency, RedCode, SeniorityLevel};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

const TYPE_NAME: &str = "SingleNameReferenceInformation";

/// Closed property-name set; string dispatch happens only here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Property {
    ReferenceEntityName,
    ReferenceEntityId,
    Seniority,
    Currency,
}

impl Property {
    const NAMES: [&'static str; 4] = [
        "referenceEntityName",
        "referenceEntityId",
        "seniority",
        "currency",
    ];

    fn resolve(name: &str) -> BeanResult<Self> {
        match name {
            "referenceEntityName" => Ok(Self::ReferenceEntityName),
            "referenceEntityId" => Ok(Self::ReferenceEntityId),
            "seniority" => Ok(Self::Seniority),
            "currency" => Ok(Self::Currency),
            _ => Err(BeanError::PropertyNotFound {
                type_name: TYPE_NAME,
                property: name.to_string(),
            }),
        }
    }
}

/// Immutable reference terms for a single-name credit default swap.
///
/// All four fields are mandatory, fixed at construction, and only settable
/// through [`SingleNameReferenceInformationBuilder`]. Once built the value
/// is freely shareable across threads.
///
/// # Examples
///
/// ```
/// use cds_reference::domain::reference::{
///     ReferenceInformationType, SingleNameReferenceInformation,
/// };
/// use cds_reference::domain::value_objects::{Currency, RedCode, SeniorityLevel};
///
/// let info = SingleNameReferenceInformation::of(
///     "Ford Mtr Co",
///     RedCode::new("3H98A7").unwrap(),
///     SeniorityLevel::SeniorUnsecuredForeign,
///     Currency::USD,
/// );
/// assert_eq!(info.kind(), ReferenceInformationType::SingleName);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleNameReferenceInformation {
    /// Full legal name of the reference entity (ISDA 2003 term:
    /// Reference Entity). Choosing a subsidiary instead of the parent is a
    /// data error this type cannot detect.
    reference_entity_name: String,
    /// Legal entity identifier (Markit RED entity code).
    reference_entity_id: RedCode,
    /// Seniority tier of the reference obligation; drives the recovery
    /// rate assumption during pricing.
    seniority: SeniorityLevel,
    /// Denomination currency of the reference obligation.
    currency: Currency,
}

impl SingleNameReferenceInformation {
    /// Creates the value and wraps it in the polymorphic abstraction.
    ///
    /// # Examples
    ///
    /// ```
    /// use cds_reference::domain::reference::SingleNameReferenceInformation;
    /// use cds_reference::domain::value_objects::{Currency, RedCode, SeniorityLevel};
    ///
    /// let info = SingleNameReferenceInformation::of(
    ///     "Agilent Tech Inc",
    ///     RedCode::new("008CA0").unwrap(),
    ///     SeniorityLevel::SeniorUnsecuredForeign,
    ///     Currency::USD,
    /// );
    /// ```
    #[must_use]
    pub fn of(
        reference_entity_name: impl Into<String>,
        reference_entity_id: RedCode,
        seniority: SeniorityLevel,
        currency: Currency,
    ) -> ReferenceInformation {
        ReferenceInformation::SingleName(Self {
            reference_entity_name: reference_entity_name.into(),
            reference_entity_id,
            seniority,
            currency,
        })
    }

    /// Returns the full legal name of the reference entity.
    #[inline]
    #[must_use]
    pub fn reference_entity_name(&self) -> &str {
        &self.reference_entity_name
    }

    /// Returns the RED entity code of the reference entity.
    #[inline]
    #[must_use]
    pub fn reference_entity_id(&self) -> &RedCode {
        &self.reference_entity_id
    }

    /// Returns the seniority tier of the reference obligation.
    #[inline]
    #[must_use]
    pub fn seniority(&self) -> SeniorityLevel {
        self.seniority
    }

    /// Returns the denomination currency of the reference obligation.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the discriminator, always
    /// [`ReferenceInformationType::SingleName`].
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ReferenceInformationType {
        ReferenceInformationType::SingleName
    }

    /// Derives the curve lookup key: entity name, RED code, RED tier code,
    /// currency, joined by single spaces in that order.
    ///
    /// The restructuring doc clause is combined with this key downstream to
    /// locate the correct curves for pricing. Token order and separator are
    /// a wire contract; entity names containing spaces are not escaped.
    ///
    /// # Examples
    ///
    /// ```
    /// use cds_reference::domain::reference::SingleNameReferenceInformation;
    /// use cds_reference::domain::value_objects::{Currency, RedCode, SeniorityLevel};
    ///
    /// let info = SingleNameReferenceInformation::of(
    ///     "Agilent Tech Inc",
    ///     RedCode::new("008CA0").unwrap(),
    ///     SeniorityLevel::SeniorUnsecuredForeign,
    ///     Currency::USD,
    /// );
    /// assert_eq!(info.market_data_key(), "Agilent Tech Inc 008CA0 SNRFOR USD");
    /// ```
    #[must_use]
    pub fn market_data_key(&self) -> String {
        format!(
            "{} {} {} {}",
            self.reference_entity_name,
            self.reference_entity_id,
            self.seniority.red_tier_code(),
            self.currency,
        )
    }
}

impl Bean for SingleNameReferenceInformation {
    type Builder = SingleNameReferenceInformationBuilder;

    fn type_name() -> &'static str {
        TYPE_NAME
    }

    fn property_names() -> &'static [&'static str] {
        &Property::NAMES
    }

    fn property(&self, name: &str) -> BeanResult<Value> {
        match Property::resolve(name)? {
            Property::ReferenceEntityName => {
                beans::property_value(TYPE_NAME, "referenceEntityName", &self.reference_entity_name)
            }
            Property::ReferenceEntityId => {
                beans::property_value(TYPE_NAME, "referenceEntityId", &self.reference_entity_id)
            }
            Property::Seniority => beans::property_value(TYPE_NAME, "seniority", &self.seniority),
            Property::Currency => beans::property_value(TYPE_NAME, "currency", &self.currency),
        }
    }

    fn to_builder(&self) -> Self::Builder {
        SingleNameReferenceInformationBuilder {
            reference_entity_name: Some(self.reference_entity_name.clone()),
            reference_entity_id: Some(self.reference_entity_id.clone()),
            seniority: Some(self.seniority),
            currency: Some(self.currency),
        }
    }
}

impl fmt::Display for SingleNameReferenceInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{TYPE_NAME}{{referenceEntityName={}, referenceEntityId={}, seniority={}, currency={}}}",
            self.reference_entity_name, self.reference_entity_id, self.seniority, self.currency,
        )
    }
}

/// Mutable staging object for [`SingleNameReferenceInformation`].
///
/// Every slot starts unset; [`build`](BeanBuilder::build) validates that all
/// four are populated. The builder borrows on build, so it can be reused for
/// further set/build cycles.
#[derive(Debug, Clone, Default)]
pub struct SingleNameReferenceInformationBuilder {
    reference_entity_name: Option<String>,
    reference_entity_id: Option<RedCode>,
    seniority: Option<SeniorityLevel>,
    currency: Option<Currency>,
}

impl SingleNameReferenceInformationBuilder {
    /// Sets the reference entity's full legal name.
    pub fn reference_entity_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.reference_entity_name = Some(name.into());
        self
    }

    /// Sets the reference entity's RED code.
    pub fn reference_entity_id(&mut self, id: RedCode) -> &mut Self {
        self.reference_entity_id = Some(id);
        self
    }

    /// Sets the seniority tier of the reference obligation.
    pub fn seniority(&mut self, seniority: SeniorityLevel) -> &mut Self {
        self.seniority = Some(seniority);
        self
    }

    /// Sets the denomination currency of the reference obligation.
    pub fn currency(&mut self, currency: Currency) -> &mut Self {
        self.currency = Some(currency);
        self
    }
}

impl BeanBuilder for SingleNameReferenceInformationBuilder {
    type Bean = SingleNameReferenceInformation;

    fn get(&self, name: &str) -> BeanResult<Value> {
        match Property::resolve(name)? {
            Property::ReferenceEntityName => {
                beans::property_value(TYPE_NAME, "referenceEntityName", &self.reference_entity_name)
            }
            Property::ReferenceEntityId => {
                beans::property_value(TYPE_NAME, "referenceEntityId", &self.reference_entity_id)
            }
            Property::Seniority => beans::property_value(TYPE_NAME, "seniority", &self.seniority),
            Property::Currency => beans::property_value(TYPE_NAME, "currency", &self.currency),
        }
    }

    fn set(&mut self, name: &str, value: Value) -> BeanResult<&mut Self> {
        match Property::resolve(name)? {
            Property::ReferenceEntityName => {
                self.reference_entity_name =
                    beans::staged_value(TYPE_NAME, "referenceEntityName", value)?;
            }
            Property::ReferenceEntityId => {
                self.reference_entity_id =
                    beans::staged_value(TYPE_NAME, "referenceEntityId", value)?;
            }
            Property::Seniority => {
                self.seniority = beans::staged_value(TYPE_NAME, "seniority", value)?;
            }
            Property::Currency => {
                self.currency = beans::staged_value(TYPE_NAME, "currency", value)?;
            }
        }
        Ok(self)
    }

    fn build(&self) -> BeanResult<Self::Bean> {
        Ok(SingleNameReferenceInformation {
            reference_entity_name: beans::require(
                &self.reference_entity_name,
                TYPE_NAME,
                "referenceEntityName",
            )?,
            reference_entity_id: beans::require(
                &self.reference_entity_id,
                TYPE_NAME,
                "referenceEntityId",
            )?,
            seniority: beans::require(&self.seniority, TYPE_NAME, "seniority")?,
            currency: beans::require(&self.currency, TYPE_NAME, "currency")?,
        })
    }
}
