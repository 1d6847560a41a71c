use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use salesdash_core::{DomainError, DomainResult, ProductReference};

use crate::product::{Product, ProductRecord, ValidationPolicy};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Accepted top-level shapes of a catalog document.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Records(Vec<ProductRecord>),
    Slice { data: Vec<ProductRecord> },
}

impl CatalogDocument {
    fn into_records(self) -> Vec<ProductRecord> {
        match self {
            CatalogDocument::Records(records) => records,
            CatalogDocument::Slice { data } => data,
        }
    }
}

/// Ordered, immutable collection of products.
///
/// Order matters for display only; aggregation ignores it. A catalog is never
/// edited in place, only replaced by a new one.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    pub(crate) products: Vec<Product>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from already-constructed products.
    pub fn from_products(products: Vec<Product>, policy: ValidationPolicy) -> DomainResult<Self> {
        check_references(&products, policy)?;
        Ok(Self { products })
    }

    /// Build a catalog from raw records, converting each under `policy`.
    pub fn from_records(records: Vec<ProductRecord>, policy: ValidationPolicy) -> DomainResult<Self> {
        let products = records
            .into_iter()
            .map(|record| Product::try_from_record(record, policy))
            .collect::<DomainResult<Vec<_>>>()?;
        Self::from_products(products, policy)
    }

    /// Parse a JSON document: either an array of records or `{ "data": [...] }`.
    pub fn from_json_str(json: &str, policy: ValidationPolicy) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        let catalog = Self::from_records(document.into_records(), policy)?;
        debug!(products = catalog.len(), ?policy, "catalog parsed");
        Ok(catalog)
    }

    pub fn from_json_file(path: &Path, policy: ValidationPolicy) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json, policy)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// First product carrying `reference`.
    pub fn get(&self, reference: &ProductReference) -> DomainResult<&Product> {
        self.products
            .iter()
            .find(|p| p.reference() == reference)
            .ok_or_else(DomainError::not_found)
    }
}

impl AsRef<[Product]> for Catalog {
    fn as_ref(&self) -> &[Product] {
        &self.products
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

fn check_references(products: &[Product], policy: ValidationPolicy) -> DomainResult<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if seen.insert(product.reference()) {
            continue;
        }
        match policy {
            ValidationPolicy::Strict => {
                return Err(DomainError::validation(format!(
                    "duplicate product reference {}",
                    product.reference()
                )));
            }
            ValidationPolicy::Permissive => {
                warn!(reference = %product.reference(), "duplicate product reference");
            }
        }
    }
    Ok(())
}
