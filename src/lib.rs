//! Catalog registry for integration-flow building blocks.
//!
//! The crate keeps one name → definition catalog per kind (components,
//! languages, data formats, load balancers, kamelets, patterns) and resolves
//! identifiers such as `timer` or `kamelet:chuck-norris-source` to the kind
//! and definition they name. Consumers hold a `CatalogRegistry` value; there
//! is no process-global state.
//!
//! `catalog-lookup` (see `src/bin/catalog_lookup.rs`) exposes the same
//! operations on the command line.

pub mod catalog;
pub mod config;

pub use catalog::{
    Catalog, CatalogKind, CatalogLoader, CatalogLookup, CatalogRegistry, Definition, Identifier,
    SchemeTable, load_catalog_dir, load_catalog_from_path,
};
pub use config::{CATALOG_DIR_ENV, RegistryConfig};
