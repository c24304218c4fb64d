//! Holds one catalog per kind and resolves identifiers against them.
//!
//! The registry is a plain owned value: callers create it, hand it to the
//! consumers that need it, and reset it with `clear_all` between scenarios.
//! It performs no locking and no validation; absence is always reported as
//! `None` or an empty map, never as an error.

use crate::catalog::identifier::{Identifier, SchemeTable};
use crate::catalog::kind::CatalogKind;
use crate::catalog::model::{Catalog, CatalogLookup, Definition};
use std::collections::BTreeMap;

static EMPTY_CATALOG: Catalog = Catalog::new();

#[derive(Clone, Debug, Default)]
/// In-memory store for definition catalogs keyed by `CatalogKind`.
pub struct CatalogRegistry {
    catalogs: BTreeMap<CatalogKind, Catalog>,
    schemes: SchemeTable,
}

impl CatalogRegistry {
    /// Empty registry using the default scheme table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty registry resolving prefixes through `schemes`.
    pub fn with_schemes(schemes: SchemeTable) -> Self {
        Self {
            catalogs: BTreeMap::new(),
            schemes,
        }
    }

    pub fn schemes(&self) -> &SchemeTable {
        &self.schemes
    }

    pub fn schemes_mut(&mut self) -> &mut SchemeTable {
        &mut self.schemes
    }

    /// Store `catalog` for `kind`, replacing whatever was there.
    pub fn set_catalog(&mut self, kind: CatalogKind, catalog: Catalog) {
        tracing::debug!(kind = %kind, entries = catalog.len(), "catalog set");
        self.catalogs.insert(kind, catalog);
    }

    /// The catalog stored for `kind`, if it was ever set.
    pub fn catalog(&self, kind: CatalogKind) -> Option<&Catalog> {
        self.catalogs.get(&kind)
    }

    /// Mutable access to a stored catalog; no copy is made.
    pub fn catalog_mut(&mut self, kind: CatalogKind) -> Option<&mut Catalog> {
        self.catalogs.get_mut(&kind)
    }

    pub fn is_set(&self, kind: CatalogKind) -> bool {
        self.catalogs.contains_key(&kind)
    }

    /// Kinds that currently hold a catalog, in declaration order.
    pub fn kinds(&self) -> impl Iterator<Item = CatalogKind> + '_ {
        self.catalogs.keys().copied()
    }

    /// Drop every catalog. The scheme table is configuration and survives.
    pub fn clear_all(&mut self) {
        if !self.catalogs.is_empty() {
            tracing::debug!(kinds = self.catalogs.len(), "clearing all catalogs");
        }
        self.catalogs.clear();
    }

    /// Look up `name` inside the catalog for `kind`.
    ///
    /// A missing or empty name means "nothing selected" and short-circuits to
    /// `None` without touching the catalog.
    pub fn definition(&self, kind: CatalogKind, name: Option<&str>) -> Option<&Definition> {
        let name = name.filter(|name| !name.is_empty())?;
        self.catalog(kind)?.get(name)
    }

    /// The whole catalog for `kind`, or an empty map when it was never set.
    pub fn kind_map(&self, kind: CatalogKind) -> &Catalog {
        self.catalog(kind).unwrap_or(&EMPTY_CATALOG)
    }

    pub fn language_map(&self) -> &Catalog {
        self.kind_map(CatalogKind::Language)
    }

    pub fn dataformat_map(&self) -> &Catalog {
        self.kind_map(CatalogKind::Dataformat)
    }

    pub fn loadbalancer_map(&self) -> &Catalog {
        self.kind_map(CatalogKind::Loadbalancer)
    }

    /// Resolve a possibly scheme-prefixed identifier to its kind and entry.
    ///
    /// A recognized scheme restricts the search to that kind; there is no
    /// fallback to components when the name is missing there. Identifiers
    /// without a recognized scheme are looked up whole among components.
    pub fn resolve(&self, identifier: &str) -> Option<CatalogLookup<'_>> {
        if identifier.is_empty() {
            return None;
        }

        let parsed = Identifier::parse(identifier);
        let (kind, name) = self.schemes.target(&parsed);
        let found = self.catalog(kind).and_then(|catalog| catalog.get(name));
        tracing::trace!(identifier, kind = %kind, name, found = found.is_some(), "resolve");

        found.map(|definition| CatalogLookup {
            catalog_kind: kind,
            definition,
        })
    }
}
