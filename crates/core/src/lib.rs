//! `salesdash-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog, the
//! reporting engine and the dashboard store (no IO, no presentation).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductReference;
pub use value_object::ValueObject;
