//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only raised while a catalog is being built from raw records. Once a
/// `Catalog` exists, every reporting operation over it is infallible.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A value failed validation (e.g. duplicate reference under strict loading).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. empty product reference).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested product was not found in the catalog.
    #[error("not found")]
    NotFound,

    /// A monthly sales series did not have exactly twelve entries.
    #[error("malformed product {reference}: expected 12 monthly sales entries, found {len}")]
    MalformedProduct { reference: String, len: usize },

    /// A unit price was negative or not a finite number.
    #[error("invalid price for product {reference}: {price}")]
    InvalidPrice { reference: String, price: f64 },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn malformed_product(reference: impl Into<String>, len: usize) -> Self {
        Self::MalformedProduct {
            reference: reference.into(),
            len,
        }
    }

    pub fn invalid_price(reference: impl Into<String>, price: f64) -> Self {
        Self::InvalidPrice {
            reference: reference.into(),
            price,
        }
    }
}
