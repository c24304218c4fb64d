//! Catalog registry wiring.
//!
//! `CatalogRegistry` owns one name → definition catalog per `CatalogKind` and
//! resolves identifiers through a `SchemeTable`. `CatalogLoader` is the data
//! collaborator that reads bundled catalog files and feeds the registry.

pub mod identifier;
pub mod kind;
pub mod loader;
pub mod model;
pub mod registry;

pub use identifier::{Identifier, SchemeTable};
pub use kind::CatalogKind;
pub use loader::{CatalogLoader, load_catalog_dir, load_catalog_from_path};
pub use model::{Catalog, CatalogLookup, Definition};
pub use registry::CatalogRegistry;
