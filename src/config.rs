//! Registry configuration: where bundled catalogs live and which extra scheme
//! prefixes resolve to which kinds.
//!
//! ```json
//! { "catalog_dir": "catalogs", "catalog_schema": "schema/catalog.schema.json",
//!   "schemes": { "kamelet": "kamelet" } }
//! ```
//!
//! Every field is optional. Relative paths are resolved against the directory
//! holding the config file. `FLOW_CATALOG_DIR` overrides `catalog_dir`.

use crate::catalog::{CatalogKind, CatalogLoader, CatalogRegistry, SchemeTable};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured catalog directory.
pub const CATALOG_DIR_ENV: &str = "FLOW_CATALOG_DIR";

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    #[serde(default)]
    pub catalog_dir: Option<PathBuf>,
    /// Replacement for the built-in catalog file schema.
    #[serde(default)]
    pub catalog_schema: Option<PathBuf>,
    /// Extra scheme prefixes, layered over the default `kamelet` entry.
    #[serde(default)]
    pub schemes: BTreeMap<String, CatalogKind>,
}

impl RegistryConfig {
    /// Read a JSON config file, anchoring relative paths at its directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading registry config {}", path.display()))?;
        let mut config: RegistryConfig = serde_json::from_str(&data)
            .with_context(|| format!("parsing registry config {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.catalog_dir = config.catalog_dir.map(|dir| base.join(dir));
        config.catalog_schema = config.catalog_schema.map(|schema| base.join(schema));
        config
            .scheme_table()
            .with_context(|| format!("registry config {}", path.display()))?;
        Ok(config)
    }

    /// Apply the `FLOW_CATALOG_DIR` override from the process environment.
    pub fn with_env_override(self) -> Self {
        self.with_catalog_dir_override(env::var_os(CATALOG_DIR_ENV))
    }

    /// Replace `catalog_dir` with `value` unless it is missing or blank.
    pub fn with_catalog_dir_override(mut self, value: Option<OsString>) -> Self {
        if let Some(dir) = value.filter(|v| !v.to_string_lossy().trim().is_empty()) {
            self.catalog_dir = Some(PathBuf::from(dir));
        }
        self
    }

    /// Default table plus the configured entries.
    pub fn scheme_table(&self) -> Result<SchemeTable> {
        let mut table = SchemeTable::default();
        for (scheme, kind) in &self.schemes {
            table.register(scheme.clone(), *kind)?;
        }
        Ok(table)
    }

    /// Empty registry wired with the configured scheme table.
    pub fn build_registry(&self) -> Result<CatalogRegistry> {
        Ok(CatalogRegistry::with_schemes(self.scheme_table()?))
    }

    pub fn loader(&self) -> Result<CatalogLoader> {
        match &self.catalog_schema {
            Some(path) => CatalogLoader::with_schema_path(path),
            None => CatalogLoader::new(),
        }
    }

    /// Registry populated from `catalog_dir`; empty when no directory is set.
    pub fn load_registry(&self) -> Result<CatalogRegistry> {
        let mut registry = self.build_registry()?;
        if let Some(dir) = &self.catalog_dir {
            self.loader()?.load_dir(dir, &mut registry)?;
        }
        Ok(registry)
    }
}
