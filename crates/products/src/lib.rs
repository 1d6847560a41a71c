//! Product catalog module.
//!
//! Holds the immutable product records the reporting engine reads, the
//! twelve-month sales series they carry, and the rules for turning raw
//! (JSON) records into a validated `Catalog`. No aggregation happens here.

pub mod catalog;
pub mod month;
pub mod product;
pub mod seed;

pub use catalog::{Catalog, CatalogError};
pub use month::{MONTHS_PER_YEAR, Month};
pub use product::{MonthlySales, Product, ProductRecord, ValidationPolicy};
pub use seed::SEED_CURRENCY;
