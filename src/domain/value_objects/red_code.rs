//! # RED Code Value Object
//!
//! Markit RED (Reference Entity Database) identifier.
//!
//! This module provides the [`RedCode`] type for identifying reference
//! entities (6-character codes) and entity/seniority pairs or indices
//! (9-character codes).
//!
//! # Examples
//!
//! ```
//! use cds_reference::domain::value_objects::red_code::RedCode;
//!
//! let code = RedCode::new("008CA0").unwrap();
//! assert_eq!(code.to_string(), "008CA0");
//! assert!(code.is_entity_code());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for RED code parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedCodeError {
    /// Code string is empty.
    #[error("RED code cannot be empty")]
    Empty,

    /// Code is neither 6 nor 9 characters long.
    #[error("invalid RED code length: expected 6 or 9 characters, got {0}")]
    InvalidLength(usize),

    /// Code contains non-alphanumeric characters.
    #[error("RED code contains invalid characters: '{0}'")]
    InvalidCharacters(String),
}

/// A validated Markit RED identifier.
///
/// Six characters identify a reference entity (e.g. `008CA0`); nine
/// characters identify an entity/seniority pair or an index series.
/// The code is normalized to uppercase.
///
/// # Invariants
///
/// - Exactly 6 or 9 characters
/// - ASCII alphanumeric only, stored uppercase
///
/// # Examples
///
/// ```
/// use cds_reference::domain::value_objects::red_code::RedCode;
///
/// // Entity code, case normalized
/// let code = RedCode::new("008ca0").unwrap();
/// assert_eq!(code.as_str(), "008CA0");
///
/// // Pair/index code
/// let pair: RedCode = "2I65BYCL6".parse().unwrap();
/// assert!(!pair.is_entity_code());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RedCode(String);

impl RedCode {
    /// Length of an entity-level RED code.
    pub const ENTITY_LEN: usize = 6;

    /// Length of a pair- or index-level RED code.
    pub const PAIR_LEN: usize = 9;

    /// Creates a RED code from a string.
    ///
    /// The input is trimmed and normalized to uppercase.
    ///
    /// # Errors
    ///
    /// Returns `RedCodeError` if the code is empty, not 6 or 9 characters,
    /// or contains non-alphanumeric characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use cds_reference::domain::value_objects::red_code::RedCode;
    ///
    /// assert!(RedCode::new("008CA0").is_ok());
    /// assert!(RedCode::new("008CA").is_err());
    /// assert!(RedCode::new("008-A0").is_err());
    /// ```
    pub fn new(code: impl AsRef<str>) -> Result<Self, RedCodeError> {
        let code = code.as_ref().trim();

        if code.is_empty() {
            return Err(RedCodeError::Empty);
        }
        if code.len() != Self::ENTITY_LEN && code.len() != Self::PAIR_LEN {
            return Err(RedCodeError::InvalidLength(code.len()));
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(RedCodeError::InvalidCharacters(code.to_string()));
        }

        Ok(Self(code.to_uppercase()))
    }

    /// Returns the code string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is an entity-level (6-character) code.
    #[inline]
    #[must_use]
    pub fn is_entity_code(&self) -> bool {
        self.0.len() == Self::ENTITY_LEN
    }
}

impl fmt::Display for RedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RedCode {
    type Err = RedCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RedCode {
    type Error = RedCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RedCode> for String {
    fn from(code: RedCode) -> Self {
        code.0
    }
}
