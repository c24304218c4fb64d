//! Identifier parsing and the scheme → kind table.
//!
//! Most identifiers are bare component names (`timer`). A few kinds are
//! referenced with an explicit scheme (`kamelet:chuck-norris-source`). The
//! table of recognized schemes is data, not code: it starts with the kamelet
//! entry and grows only through configuration.

use crate::catalog::kind::CatalogKind;
use anyhow::{Result, bail};
use std::collections::BTreeMap;

const SCHEME_DELIMITER: char = ':';

/// An identifier split at its first `:`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Identifier<'a> {
    raw: &'a str,
    scheme: Option<(&'a str, &'a str)>,
}

impl<'a> Identifier<'a> {
    /// Split `raw` at the first colon; later colons stay in the remainder.
    pub fn parse(raw: &'a str) -> Self {
        Self {
            raw,
            scheme: raw.split_once(SCHEME_DELIMITER),
        }
    }

    /// The identifier exactly as supplied.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Text before the first colon, if the identifier has one.
    pub fn scheme(&self) -> Option<&'a str> {
        self.scheme.map(|(scheme, _)| scheme)
    }

    /// Text after the first colon, if the identifier has one.
    pub fn rest(&self) -> Option<&'a str> {
        self.scheme.map(|(_, rest)| rest)
    }
}

/// Explicit mapping from scheme prefix to the kind it selects.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SchemeTable {
    entries: BTreeMap<String, CatalogKind>,
}

impl Default for SchemeTable {
    fn default() -> Self {
        Self {
            entries: BTreeMap::from([("kamelet".to_string(), CatalogKind::Kamelet)]),
        }
    }
}

impl SchemeTable {
    /// A table recognizing no schemes; every identifier resolves as a component.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Map `scheme` to `kind`, replacing an earlier mapping for the same scheme.
    ///
    /// Identifiers split at their first colon, so a scheme must be non-empty
    /// and colon-free to ever match; anything else is rejected.
    pub fn register(&mut self, scheme: impl Into<String>, kind: CatalogKind) -> Result<()> {
        let scheme = scheme.into();
        if scheme.is_empty() {
            bail!("scheme names must not be empty");
        }
        if scheme.contains(SCHEME_DELIMITER) {
            bail!("scheme '{scheme}' must not contain '{SCHEME_DELIMITER}'");
        }
        self.entries.insert(scheme, kind);
        Ok(())
    }

    pub fn kind_for(&self, scheme: &str) -> Option<CatalogKind> {
        self.entries.get(scheme).copied()
    }

    /// Recognized schemes in stable order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, CatalogKind)> {
        self.entries
            .iter()
            .map(|(scheme, kind)| (scheme.as_str(), *kind))
    }

    /// Where an identifier should be looked up: the kind to search and the
    /// name to search for.
    ///
    /// A recognized scheme selects its kind and strips the prefix. Anything
    /// else, including an unrecognized prefix, is a bare component name and
    /// is searched whole.
    pub fn target<'a>(&self, identifier: &Identifier<'a>) -> (CatalogKind, &'a str) {
        if let (Some(scheme), Some(rest)) = (identifier.scheme(), identifier.rest()) {
            if let Some(kind) = self.kind_for(scheme) {
                return (kind, rest);
            }
        }
        (CatalogKind::Component, identifier.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_at_first_colon_only() {
        let id = Identifier::parse("kamelet:aws:s3-source");
        assert_eq!(id.scheme(), Some("kamelet"));
        assert_eq!(id.rest(), Some("aws:s3-source"));
        assert_eq!(id.raw(), "kamelet:aws:s3-source");
    }

    #[test]
    fn bare_identifier_has_no_scheme() {
        let id = Identifier::parse("timer");
        assert_eq!(id.scheme(), None);
        assert_eq!(id.rest(), None);
    }

    #[test]
    fn default_table_knows_only_kamelets() {
        let table = SchemeTable::default();
        let schemes: Vec<_> = table.iter().collect();
        assert_eq!(schemes, vec![("kamelet", CatalogKind::Kamelet)]);
        assert_eq!(table.kind_for("component"), None);
    }

    #[test]
    fn target_strips_recognized_scheme() {
        let table = SchemeTable::default();
        let id = Identifier::parse("kamelet:chuck-norris-source");
        assert_eq!(
            table.target(&id),
            (CatalogKind::Kamelet, "chuck-norris-source")
        );
    }

    #[test]
    fn target_keeps_unrecognized_scheme_as_component_name() {
        let table = SchemeTable::default();
        let id = Identifier::parse("timer:tick");
        assert_eq!(table.target(&id), (CatalogKind::Component, "timer:tick"));

        let bare = Identifier::parse("log");
        assert_eq!(table.target(&bare), (CatalogKind::Component, "log"));
    }

    #[test]
    fn registered_scheme_overrides_previous_kind() {
        let mut table = SchemeTable::empty();
        table.register("eip", CatalogKind::Pattern).unwrap();
        table.register("eip", CatalogKind::Language).unwrap();
        assert_eq!(table.kind_for("eip"), Some(CatalogKind::Language));

        let id = Identifier::parse("kamelet:foo");
        assert_eq!(table.target(&id), (CatalogKind::Component, "kamelet:foo"));
    }

    #[test]
    fn register_rejects_schemes_that_cannot_match() {
        let mut table = SchemeTable::default();
        assert!(table.register("", CatalogKind::Pattern).is_err());
        assert!(table.register("eip:v2", CatalogKind::Pattern).is_err());
        assert_eq!(table, SchemeTable::default());

        let id = Identifier::parse(":choice");
        assert_eq!(table.target(&id), (CatalogKind::Component, ":choice"));
    }
}
