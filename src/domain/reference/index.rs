//! # Index Reference Information
//!
//! Reference terms for protection on a credit index.
//!
//! An index contract references a published basket (e.g. CDX.NA.IG or
//! iTraxx Europe) identified by its RED pair code plus the series and
//! version of the annex in force.
//!
//! # Examples
//!
//! ```
//! use cds_reference::domain::reference::{IndexReferenceInformation, ReferenceInformationType};
//! use cds_reference::domain::value_objects::RedCode;
//!
//! let info = IndexReferenceInformation::of(
//!     "CDX.NA.IG",
//!     RedCode::new("2I65BYCL6").unwrap(),
//!     22,
//!     1,
//! );
//! assert_eq!(info.kind(), ReferenceInformationType::Index);
//! assert_eq!(info.market_data_key(), "CDX.NA.IG 2I65BYCL6 22 1");
//! ```

use crate::domain::beans::{self, Bean, BeanBuilder};
use crate::domain::errors::{BeanError, BeanResult};
use crate::domain::reference::{ReferenceInformation, ReferenceInformationType};
use crate::domain::value_objects::RedCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

const TYPE_NAME: &str = "IndexReferenceInformation";

/// Closed property-name set; string dispatch happens only here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Property {
    IndexName,
    IndexId,
    Series,
    Version,
}

impl Property {
    const NAMES: [&'static str; 4] = ["indexName", "indexId", "series", "version"];

    fn resolve(name: &str) -> BeanResult<Self> {
        match name {
            "indexName" => Ok(Self::IndexName),
            "indexId" => Ok(Self::IndexId),
            "series" => Ok(Self::Series),
            "version" => Ok(Self::Version),
            _ => Err(BeanError::PropertyNotFound {
                type_name: TYPE_NAME,
                property: name.to_string(),
            }),
        }
    }
}

/// Immutable reference terms for an index credit default swap.
///
/// All four fields are mandatory and fixed at construction, settable only
/// through [`IndexReferenceInformationBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexReferenceInformation {
    /// Published name of the index family.
    index_name: String,
    /// RED pair code identifying the index.
    index_id: RedCode,
    /// Series number of the index.
    series: u32,
    /// Version of the series annex.
    version: u32,
}

impl IndexReferenceInformation {
    /// Creates the value and wraps it in the polymorphic abstraction.
    #[must_use]
    pub fn of(
        index_name: impl Into<String>,
        index_id: RedCode,
        series: u32,
        version: u32,
    ) -> ReferenceInformation {
        ReferenceInformation::Index(Self {
            index_name: index_name.into(),
            index_id,
            series,
            version,
        })
    }

    /// Returns the published index name.
    #[inline]
    #[must_use]
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Returns the RED pair code of the index.
    #[inline]
    #[must_use]
    pub fn index_id(&self) -> &RedCode {
        &self.index_id
    }

    /// Returns the series number.
    #[inline]
    #[must_use]
    pub fn series(&self) -> u32 {
        self.series
    }

    /// Returns the annex version.
    #[inline]
    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Returns the discriminator, always [`ReferenceInformationType::Index`].
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ReferenceInformationType {
        ReferenceInformationType::Index
    }

    /// Derives the curve lookup key: index name, RED pair code, series,
    /// version, joined by single spaces in that order.
    ///
    /// Same contract shape as the single-name key: declared field order,
    /// single-space separation, no escaping.
    #[must_use]
    pub fn market_data_key(&self) -> String {
        format!(
            "{} {} {} {}",
            self.index_name, self.index_id, self.series, self.version,
        )
    }
}

impl Bean for IndexReferenceInformation {
    type Builder = IndexReferenceInformationBuilder;

    fn type_name() -> &'static str {
        TYPE_NAME
    }

    fn property_names() -> &'static [&'static str] {
        &Property::NAMES
    }

    fn property(&self, name: &str) -> BeanResult<Value> {
        match Property::resolve(name)? {
            Property::IndexName => beans::property_value(TYPE_NAME, "indexName", &self.index_name),
            Property::IndexId => beans::property_value(TYPE_NAME, "indexId", &self.index_id),
            Property::Series => beans::property_value(TYPE_NAME, "series", &self.series),
            Property::Version => beans::property_value(TYPE_NAME, "version", &self.version),
        }
    }

    fn to_builder(&self) -> Self::Builder {
        IndexReferenceInformationBuilder {
            index_name: Some(self.index_name.clone()),
            index_id: Some(self.index_id.clone()),
            series: Some(self.series),
            version: Some(self.version),
        }
    }
}

impl fmt::Display for IndexReferenceInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{TYPE_NAME}{{indexName={}, indexId={}, series={}, version={}}}",
            self.index_name, self.index_id, self.series, self.version,
        )
    }
}

/// Mutable staging object for [`IndexReferenceInformation`].
#[derive(Debug, Clone, Default)]
pub struct IndexReferenceInformationBuilder {
    index_name: Option<String>,
    index_id: Option<RedCode>,
    series: Option<u32>,
    version: Option<u32>,
}

impl IndexReferenceInformationBuilder {
    /// Sets the published index name.
    pub fn index_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.index_name = Some(name.into());
        self
    }

    /// Sets the RED pair code of the index.
    pub fn index_id(&mut self, id: RedCode) -> &mut Self {
        self.index_id = Some(id);
        self
    }

    /// Sets the series number.
    pub fn series(&mut self, series: u32) -> &mut Self {
        self.series = Some(series);
        self
    }

    /// Sets the annex version.
    pub fn version(&mut self, version: u32) -> &mut Self {
        self.version = Some(version);
        self
    }
}

impl BeanBuilder for IndexReferenceInformationBuilder {
    type Bean = IndexReferenceInformation;

    fn get(&self, name: &str) -> BeanResult<Value> {
        match Property::resolve(name)? {
            Property::IndexName => beans::property_value(TYPE_NAME, "indexName", &self.index_name),
            Property::IndexId => beans::property_value(TYPE_NAME, "indexId", &self.index_id),
            Property::Series => beans::property_value(TYPE_NAME, "series", &self.series),
            Property::Version => beans::property_value(TYPE_NAME, "version", &self.version),
        }
    }

    fn set(&mut self, name: &str, value: Value) -> BeanResult<&mut Self> {
        match Property::resolve(name)? {
            Property::IndexName => {
                self.index_name = beans::staged_value(TYPE_NAME, "indexName", value)?;
            }
            Property::IndexId => {
                self.index_id = beans::staged_value(TYPE_NAME, "indexId", value)?;
            }
            Property::Series => {
                self.series = beans::staged_value(TYPE_NAME, "series", value)?;
            }
            Property::Version => {
                self.version = beans::staged_value(TYPE_NAME, "version", value)?;
            }
        }
        Ok(self)
    }

    fn build(&self) -> BeanResult<Self::Bean> {
        Ok(IndexReferenceInformation {
            index_name: beans::require(&self.index_name, TYPE_NAME, "indexName")?,
            index_id: beans::require(&self.index_id, TYPE_NAME, "indexId")?,
            series: beans::require(&self.series, TYPE_NAME, "series")?,
            version: beans::require(&self.version, TYPE_NAME, "version")?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cdx_ig_22() -> IndexReferenceInformation {
        let mut builder = IndexReferenceInformation::builder();
        builder
            .index_name("CDX.NA.IG")
            .index_id(RedCode::new("2I65BYCL6").unwrap())
            .series(22)
            .version(1);
        builder.build().unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn builder_with_all_fields() {
            let info = cdx_ig_22();

            assert_eq!(info.index_name(), "CDX.NA.IG");
            assert_eq!(info.index_id().as_str(), "2I65BYCL6");
            assert_eq!(info.series(), 22);
            assert_eq!(info.version(), 1);
        }

        #[test]
        fn each_missing_field_fails_by_name() {
            let complete = cdx_ig_22();

            for &missing in IndexReferenceInformation::property_names() {
                let mut builder = complete.to_builder();
                builder.set(missing, Value::Null).unwrap();

                let err = builder.build().unwrap_err();
                assert_eq!(
                    err,
                    BeanError::MissingField {
                        type_name: "IndexReferenceInformation",
                        property: missing,
                    }
                );
            }
        }

        #[test]
        fn to_builder_round_trips() {
            let info = cdx_ig_22();
            assert_eq!(info.to_builder().build().unwrap(), info);
        }

        #[test]
        fn of_returns_polymorphic_value() {
            let info =
                IndexReferenceInformation::of("CDX.NA.IG", RedCode::new("2I65BYCL6").unwrap(), 22, 1);
            assert_eq!(info.kind(), ReferenceInformationType::Index);
        }
    }

    mod named_properties {
        use super::*;

        #[test]
        fn property_names_are_exact() {
            assert_eq!(
                IndexReferenceInformation::property_names(),
                &["indexName", "indexId", "series", "version"]
            );
        }

        #[test]
        fn property_returns_each_field() {
            let info = cdx_ig_22();

            assert_eq!(info.property("indexName").unwrap(), json!("CDX.NA.IG"));
            assert_eq!(info.property("indexId").unwrap(), json!("2I65BYCL6"));
            assert_eq!(info.property("series").unwrap(), json!(22));
            assert_eq!(info.property("version").unwrap(), json!(1));
        }

        #[test]
        fn unknown_property_fails() {
            let err = cdx_ig_22().property("seniority").unwrap_err();
            assert_eq!(
                err,
                BeanError::PropertyNotFound {
                    type_name: "IndexReferenceInformation",
                    property: "seniority".to_string(),
                }
            );
        }

        #[test]
        fn reflective_write_on_frozen_instance_fails() {
            let err = cdx_ig_22().set_property("series", json!(23)).unwrap_err();
            assert!(err.is_mutation_error());
        }

        #[test]
        fn wrong_typed_series_fails_immediately() {
            let err = IndexReferenceInformation::builder()
                .set("series", json!("twenty-two"))
                .unwrap_err();
            assert!(matches!(
                err,
                BeanError::InvalidValue { property: "series", .. }
            ));
        }
    }

    mod market_data_key {
        use super::*;

        #[test]
        fn key_joins_fields_in_declared_order() {
            assert_eq!(cdx_ig_22().market_data_key(), "CDX.NA.IG 2I65BYCL6 22 1");
        }

        #[test]
        fn key_is_deterministic() {
            let info = cdx_ig_22();
            assert_eq!(info.market_data_key(), info.market_data_key());
        }
    }

    mod display {
        use super::*;

        #[test]
        fn canonical_form_lists_fields_in_declared_order() {
            assert_eq!(
                cdx_ig_22().to_string(),
                "IndexReferenceInformation{indexName=CDX.NA.IG, indexId=2I65BYCL6, \
                 series=22, version=1}"
            );
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn serde_roundtrip() {
            let info = cdx_ig_22();
            let json = serde_json::to_string(&info).unwrap();
            let back: IndexReferenceInformation = serde_json::from_str(&json).unwrap();
            assert_eq!(back, info);
        }
    }
}
