//! # Seniority Level
//!
//! Seniority tier classification of a reference obligation.
//!
//! Senior obligations receive a higher recovery rate during pricing than
//! subordinate securities, so the tier is part of the curve lookup key.
//! Each level carries two distinct projections: a symbolic name (the serde
//! and [`Display`](std::fmt::Display) form) and the Markit RED tier code
//! used inside market-data keys.
//!
//! # Examples
//!
//! ```
//! use cds_reference::domain::value_objects::seniority::SeniorityLevel;
//!
//! let level = SeniorityLevel::SeniorUnsecuredForeign;
//! assert_eq!(level.to_string(), "SENIOR_UNSECURED_FOREIGN");
//! assert_eq!(level.red_tier_code(), "SNRFOR");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for parsing a seniority level from its symbolic name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown seniority level: '{0}'")]
pub struct ParseSeniorityError(
    /// The unrecognized input.
    pub String,
);

/// Seniority tier of a reference obligation.
///
/// The tier is a property of the obligation, not of the reference entity:
/// entities themselves are neither senior nor subordinated.
///
/// # Examples
///
/// ```
/// use cds_reference::domain::value_objects::seniority::SeniorityLevel;
///
/// let level: SeniorityLevel = "SUBORDINATE_LOWER_TIER_2".parse().unwrap();
/// assert_eq!(level.red_tier_code(), "SUBLT2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeniorityLevel {
    /// Senior domestic (RED tier SECDOM).
    SeniorSecuredDomestic,

    /// Senior foreign (RED tier SNRFOR).
    SeniorUnsecuredForeign,

    /// Subordinate, Lower Tier 2 (RED tier SUBLT2).
    #[serde(rename = "SUBORDINATE_LOWER_TIER_2")]
    SubordinateLowerTier2,

    /// Subordinate Tier 1 (RED tier PREFT1).
    #[serde(rename = "SUBORDINATE_TIER_1")]
    SubordinateTier1,

    /// Subordinate, Upper Tier 2 (RED tier JRSUBUT2).
    #[serde(rename = "SUBORDINATE_UPPER_TIER_2")]
    SubordinateUpperTier2,
}

impl SeniorityLevel {
    /// All seniority levels, in tier order.
    pub const ALL: [SeniorityLevel; 5] = [
        Self::SeniorSecuredDomestic,
        Self::SeniorUnsecuredForeign,
        Self::SubordinateLowerTier2,
        Self::SubordinateTier1,
        Self::SubordinateUpperTier2,
    ];

    /// Returns the Markit RED tier code for this level.
    ///
    /// This is the short projection embedded in market-data keys, distinct
    /// from the symbolic name.
    ///
    /// # Examples
    ///
    /// ```
    /// use cds_reference::domain::value_objects::seniority::SeniorityLevel;
    ///
    /// assert_eq!(SeniorityLevel::SeniorUnsecuredForeign.red_tier_code(), "SNRFOR");
    /// assert_eq!(SeniorityLevel::SubordinateTier1.red_tier_code(), "PREFT1");
    /// ```
    #[must_use]
    pub const fn red_tier_code(&self) -> &'static str {
        match self {
            Self::SeniorSecuredDomestic => "SECDOM",
            Self::SeniorUnsecuredForeign => "SNRFOR",
            Self::SubordinateLowerTier2 => "SUBLT2",
            Self::SubordinateTier1 => "PREFT1",
            Self::SubordinateUpperTier2 => "JRSUBUT2",
        }
    }

    /// Looks up a level by its RED tier code.
    ///
    /// # Examples
    ///
    /// ```
    /// use cds_reference::domain::value_objects::seniority::SeniorityLevel;
    ///
    /// assert_eq!(
    ///     SeniorityLevel::from_red_tier_code("SNRFOR"),
    ///     Some(SeniorityLevel::SeniorUnsecuredForeign)
    /// );
    /// assert_eq!(SeniorityLevel::from_red_tier_code("NOPE"), None);
    /// ```
    #[must_use]
    pub fn from_red_tier_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.red_tier_code() == code)
    }

    /// Returns the symbolic name of this level.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SeniorSecuredDomestic => "SENIOR_SECURED_DOMESTIC",
            Self::SeniorUnsecuredForeign => "SENIOR_UNSECURED_FOREIGN",
            Self::SubordinateLowerTier2 => "SUBORDINATE_LOWER_TIER_2",
            Self::SubordinateTier1 => "SUBORDINATE_TIER_1",
            Self::SubordinateUpperTier2 => "SUBORDINATE_UPPER_TIER_2",
        }
    }

    /// Returns true for the senior tiers.
    #[inline]
    #[must_use]
    pub const fn is_senior(&self) -> bool {
        matches!(
            self,
            Self::SeniorSecuredDomestic | Self::SeniorUnsecuredForeign
        )
    }
}

impl fmt::Display for SeniorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeniorityLevel {
    type Err = ParseSeniorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.name() == s)
            .ok_or_else(|| ParseSeniorityError(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod tier_codes {
        use super::*;

        #[test]
        fn every_level_has_a_distinct_tier_code() {
            for (i, a) in SeniorityLevel::ALL.iter().enumerate() {
                for b in &SeniorityLevel::ALL[i + 1..] {
                    assert_ne!(a.red_tier_code(), b.red_tier_code());
                }
            }
        }

        #[test]
        fn tier_code_round_trips() {
            for level in SeniorityLevel::ALL {
                assert_eq!(
                    SeniorityLevel::from_red_tier_code(level.red_tier_code()),
                    Some(level)
                );
            }
        }

        #[test]
        fn tier_code_differs_from_symbolic_name() {
            for level in SeniorityLevel::ALL {
                assert_ne!(level.red_tier_code(), level.name());
            }
        }

        #[test]
        fn unknown_tier_code_is_none() {
            assert_eq!(SeniorityLevel::from_red_tier_code("SENIOR"), None);
        }
    }

    mod parsing {
        use super::*;

        #[test]
        fn parses_symbolic_names() {
            for level in SeniorityLevel::ALL {
                let parsed: SeniorityLevel = level.name().parse().unwrap();
                assert_eq!(parsed, level);
            }
        }

        #[test]
        fn rejects_unknown_name() {
            let err = "VERY_SENIOR".parse::<SeniorityLevel>().unwrap_err();
            assert_eq!(err, ParseSeniorityError("VERY_SENIOR".to_string()));
        }
    }

    mod classification {
        use super::*;

        #[test]
        fn senior_tiers() {
            assert!(SeniorityLevel::SeniorSecuredDomestic.is_senior());
            assert!(SeniorityLevel::SeniorUnsecuredForeign.is_senior());
            assert!(!SeniorityLevel::SubordinateLowerTier2.is_senior());
            assert!(!SeniorityLevel::SubordinateTier1.is_senior());
            assert!(!SeniorityLevel::SubordinateUpperTier2.is_senior());
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn serializes_as_symbolic_name() {
            let json = serde_json::to_string(&SeniorityLevel::SeniorUnsecuredForeign).unwrap();
            assert_eq!(json, "\"SENIOR_UNSECURED_FOREIGN\"");
        }

        #[test]
        fn round_trips_every_level() {
            for level in SeniorityLevel::ALL {
                let json = serde_json::to_string(&level).unwrap();
                let back: SeniorityLevel = serde_json::from_str(&json).unwrap();
                assert_eq!(back, level);
            }
        }
    }
}
