//! Common types for promstatic: monitoring resources, selectors, YAML loading
//!
//! Input manifests arrive as loosely-typed YAML documents. This crate converts
//! them once, at the boundary, into typed resources held in a [`ResourceSet`]
//! that records discovery order explicitly. Everything downstream works on
//! the typed model.

#![deny(missing_docs)]

pub mod crd;
pub mod document;
pub mod error;
pub mod yaml;

pub use document::{Discovered, ResourceKind, ResourceSet};
pub use error::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;
