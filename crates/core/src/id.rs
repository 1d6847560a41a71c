//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Stable identifier of a product within a catalog (e.g. `"P001"`).
///
/// Opaque: kept exactly as given, so `" P001"` and `"P001"` are distinct.
/// Never blank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductReference(String);

impl ProductReference {
    /// Build a reference, rejecting empty or blank values.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_id("ProductReference: empty value"));
        }
        Ok(Self(value))
    }

    /// Build a reference from a literal known to be valid (seed data).
    pub fn from_static(value: &'static str) -> Self {
        debug_assert!(!value.trim().is_empty(), "static product reference must not be blank");
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductReference {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductReference {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProductReference {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductReference> for String {
    fn from(value: ProductReference) -> Self {
        value.0
    }
}

impl AsRef<str> for ProductReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
