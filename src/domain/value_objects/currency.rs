//! # Currency Value Object
//!
//! ISO 4217 currency code representation.
//!
//! This module provides the [`Currency`] type for representing the
//! denomination currency of an obligation as a validated three-letter code.
//!
//! # Examples
//!
//! ```
//! use cds_reference::domain::value_objects::currency::Currency;
//!
//! let currency = Currency::new("usd").unwrap();
//! assert_eq!(currency, Currency::USD);
//! assert_eq!(currency.to_string(), "USD");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for currency code parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// Currency code is empty.
    #[error("currency code cannot be empty")]
    Empty,

    /// Currency code is not exactly three letters.
    #[error("invalid currency code length: expected 3 letters, got '{0}'")]
    InvalidLength(String),

    /// Currency code contains non-alphabetic characters.
    #[error("currency code contains invalid characters: '{0}'")]
    InvalidCharacters(String),
}

/// A validated ISO 4217 currency code.
///
/// Stored inline as three uppercase ASCII letters, so the type is `Copy`
/// and usable in `const` context.
///
/// # Invariants
///
/// - Exactly three characters
/// - ASCII alphabetic only, normalized to uppercase
///
/// # Examples
///
/// ```
/// use cds_reference::domain::value_objects::currency::Currency;
///
/// // Create from string (case is normalized)
/// let currency = Currency::new("eur").unwrap();
/// assert_eq!(currency.as_str(), "EUR");
///
/// // Parse from string
/// let currency: Currency = "USD".parse().unwrap();
/// assert_eq!(currency, Currency::USD);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency([u8; 3]);

impl Currency {
    /// US Dollar.
    pub const USD: Currency = Currency(*b"USD");
    /// Euro.
    pub const EUR: Currency = Currency(*b"EUR");
    /// British Pound Sterling.
    pub const GBP: Currency = Currency(*b"GBP");
    /// Japanese Yen.
    pub const JPY: Currency = Currency(*b"JPY");
    /// Swiss Franc.
    pub const CHF: Currency = Currency(*b"CHF");

    /// Creates a currency from a three-letter code.
    ///
    /// The input is trimmed and normalized to uppercase.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError` if the code is empty, not exactly three
    /// characters, or contains non-alphabetic characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use cds_reference::domain::value_objects::currency::Currency;
    ///
    /// assert!(Currency::new("USD").is_ok());
    /// assert!(Currency::new("US").is_err());
    /// assert!(Currency::new("U5D").is_err());
    /// ```
    pub fn new(code: impl AsRef<str>) -> Result<Self, CurrencyError> {
        let code = code.as_ref().trim();

        if code.is_empty() {
            return Err(CurrencyError::Empty);
        }
        if code.len() != 3 {
            return Err(CurrencyError::InvalidLength(code.to_string()));
        }
        if !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyError::InvalidCharacters(code.to_string()));
        }

        let mut bytes = [0u8; 3];
        for (slot, byte) in bytes.iter_mut().zip(code.bytes()) {
            *slot = byte.to_ascii_uppercase();
        }
        Ok(Self(bytes))
    }

    /// Returns the three-letter code.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // construction guarantees ASCII
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = CurrencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.as_str().to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod construction {
        use super::*;

        #[test]
        fn new_accepts_valid_code() {
            let currency = Currency::new("USD").unwrap();
            assert_eq!(currency.as_str(), "USD");
        }

        #[test]
        fn new_normalizes_case() {
            assert_eq!(Currency::new("usd").unwrap(), Currency::USD);
            assert_eq!(Currency::new("Eur").unwrap(), Currency::EUR);
        }

        #[test]
        fn new_trims_whitespace() {
            assert_eq!(Currency::new(" JPY ").unwrap(), Currency::JPY);
        }

        #[test]
        fn new_rejects_empty() {
            assert_eq!(Currency::new(""), Err(CurrencyError::Empty));
            assert_eq!(Currency::new("   "), Err(CurrencyError::Empty));
        }

        #[test]
        fn new_rejects_wrong_length() {
            assert_eq!(
                Currency::new("US"),
                Err(CurrencyError::InvalidLength("US".to_string()))
            );
            assert_eq!(
                Currency::new("USDX"),
                Err(CurrencyError::InvalidLength("USDX".to_string()))
            );
        }

        #[test]
        fn new_rejects_non_alphabetic() {
            assert_eq!(
                Currency::new("U5D"),
                Err(CurrencyError::InvalidCharacters("U5D".to_string()))
            );
        }

        #[test]
        fn constants_match_parsed_values() {
            assert_eq!(Currency::new("USD").unwrap(), Currency::USD);
            assert_eq!(Currency::new("GBP").unwrap(), Currency::GBP);
            assert_eq!(Currency::new("CHF").unwrap(), Currency::CHF);
        }
    }

    mod display {
        use super::*;

        #[test]
        fn display_is_bare_code() {
            assert_eq!(Currency::USD.to_string(), "USD");
            assert_eq!(Currency::EUR.to_string(), "EUR");
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn serializes_as_string() {
            let json = serde_json::to_string(&Currency::USD).unwrap();
            assert_eq!(json, "\"USD\"");
        }

        #[test]
        fn deserializes_with_normalization() {
            let currency: Currency = serde_json::from_str("\"gbp\"").unwrap();
            assert_eq!(currency, Currency::GBP);
        }

        #[test]
        fn rejects_invalid_code() {
            let result: Result<Currency, _> = serde_json::from_str("\"DOLLARS\"");
            assert!(result.is_err());
        }
    }
}
