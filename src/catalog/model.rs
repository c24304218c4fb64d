//! Value types stored in and returned by the registry.
//!
//! Definitions are opaque JSON: each kind ships structurally different
//! records, and nothing in this crate reads inside them. A catalog is the plain
//! name → definition mapping for one kind.

use crate::catalog::kind::CatalogKind;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Opaque, kind-specific metadata record for one building block.
pub type Definition = Value;

/// Name → definition mapping for one catalog kind.
pub type Catalog = BTreeMap<String, Definition>;

/// Successful identifier resolution: the kind that matched and its entry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogLookup<'a> {
    pub catalog_kind: CatalogKind,
    pub definition: &'a Definition,
}
