use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

/// Category a building-block definition belongs to.
///
/// The set is closed: every kind the designer knows about is listed here, and
/// parsing an unknown kind string fails instead of inventing a variant.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum CatalogKind {
    Component,
    Language,
    Dataformat,
    Loadbalancer,
    Kamelet,
    Pattern,
}

impl CatalogKind {
    /// Every kind, in declaration order.
    pub const ALL: [CatalogKind; 6] = [
        CatalogKind::Component,
        CatalogKind::Language,
        CatalogKind::Dataformat,
        CatalogKind::Loadbalancer,
        CatalogKind::Kamelet,
        CatalogKind::Pattern,
    ];

    /// Canonical names of every kind, in declaration order.
    pub const NAMES: &'static [&'static str] = &[
        "component",
        "language",
        "dataformat",
        "loadbalancer",
        "kamelet",
        "pattern",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Component => "component",
            CatalogKind::Language => "language",
            CatalogKind::Dataformat => "dataformat",
            CatalogKind::Loadbalancer => "loadbalancer",
            CatalogKind::Kamelet => "kamelet",
            CatalogKind::Pattern => "pattern",
        }
    }

    /// Parse the canonical lowercase name of a kind.
    pub fn from_name(value: &str) -> Option<Self> {
        match value {
            "component" => Some(CatalogKind::Component),
            "language" => Some(CatalogKind::Language),
            "dataformat" => Some(CatalogKind::Dataformat),
            "loadbalancer" => Some(CatalogKind::Loadbalancer),
            "kamelet" => Some(CatalogKind::Kamelet),
            "pattern" => Some(CatalogKind::Pattern),
            _ => None,
        }
    }

    /// Stem of the bundled data file holding this kind's catalog
    /// (`<stem>.json` inside a catalog directory).
    pub fn file_stem(&self) -> &'static str {
        match self {
            CatalogKind::Component => "components",
            CatalogKind::Language => "languages",
            CatalogKind::Dataformat => "dataformats",
            CatalogKind::Loadbalancer => "loadbalancers",
            CatalogKind::Kamelet => "kamelets",
            CatalogKind::Pattern => "patterns",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CatalogKind {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_name(value).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown catalog kind '{value}' (expected one of: {})",
                CatalogKind::NAMES.join(", ")
            )
        })
    }
}

impl Serialize for CatalogKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CatalogKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::from_name(&value)
            .ok_or_else(|| de::Error::unknown_variant(&value, CatalogKind::NAMES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip() {
        for kind in CatalogKind::ALL {
            assert_eq!(CatalogKind::from_name(kind.as_str()), Some(kind));
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json.trim_matches('"'), kind.as_str());
            let back: CatalogKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn names_follow_declaration_order() {
        let names: Vec<&str> = CatalogKind::ALL.iter().map(CatalogKind::as_str).collect();
        assert_eq!(names, CatalogKind::NAMES);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert_eq!(CatalogKind::from_name("Component"), None);
        assert!("widget".parse::<CatalogKind>().is_err());
        let parsed: Result<CatalogKind, _> = serde_json::from_str("\"widget\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn file_stems_are_plural_names() {
        assert_eq!(CatalogKind::Component.file_stem(), "components");
        assert_eq!(CatalogKind::Kamelet.file_stem(), "kamelets");
        assert_eq!(CatalogKind::Loadbalancer.file_stem(), "loadbalancers");
        for kind in CatalogKind::ALL {
            assert_eq!(kind.file_stem(), format!("{}s", kind.as_str()));
        }
    }
}
