//! Reads bundled catalog files and hands them to a registry.
//!
//! The registry itself never validates what it stores. Loading is where a
//! malformed payload gets caught: every file must be a JSON object mapping
//! non-empty names to object definitions, checked against a JSON Schema
//! before anything reaches `set_catalog`. The inside of each definition is
//! left alone.

use crate::catalog::kind::CatalogKind;
use crate::catalog::model::Catalog;
use crate::catalog::registry::CatalogRegistry;
use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Shape every catalog file must have: `{ "<name>": { ... }, ... }`.
const CATALOG_FILE_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "catalog file",
  "type": "object",
  "propertyNames": { "minLength": 1 },
  "additionalProperties": { "type": "object" }
}"#;

/// Validating reader for catalog files.
pub struct CatalogLoader {
    schema: JSONSchema,
}

impl CatalogLoader {
    /// Loader using the built-in catalog file schema.
    pub fn new() -> Result<Self> {
        let schema: Value = serde_json::from_str(CATALOG_FILE_SCHEMA)
            .context("parsing built-in catalog schema")?;
        Self::from_schema(&schema, "built-in catalog schema")
    }

    /// Loader validating against the schema stored at `path`.
    pub fn with_schema_path(path: &Path) -> Result<Self> {
        let schema = read_json(path)
            .with_context(|| format!("loading schema {}", path.display()))?;
        Self::from_schema(&schema, &path.display().to_string())
    }

    fn from_schema(schema: &Value, origin: &str) -> Result<Self> {
        let compiled = JSONSchema::compile(schema)
            .map_err(|err| anyhow!("compiling schema {origin}: {err}"))?;
        Ok(Self { schema: compiled })
    }

    /// Read and validate one catalog file.
    pub fn load_file(&self, path: &Path) -> Result<Catalog> {
        let value = read_json(path)?;

        if let Err(errors) = self.schema.validate(&value) {
            let details = errors
                .map(|err| err.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            bail!(
                "catalog {} failed schema validation:\n{}",
                path.display(),
                details
            );
        }

        serde_json::from_value(value)
            .with_context(|| format!("decoding catalog {}", path.display()))
    }

    /// Load every `<stem>.json` present in `dir` into `registry`.
    ///
    /// Kinds without a file stay unset. All files are read and validated
    /// before the registry is touched, so a bad file leaves it unchanged.
    /// Returns the kinds that were loaded.
    pub fn load_dir(
        &self,
        dir: &Path,
        registry: &mut CatalogRegistry,
    ) -> Result<Vec<CatalogKind>> {
        if !dir.is_dir() {
            bail!("catalog directory {} does not exist", dir.display());
        }

        let mut loaded = Vec::new();
        for kind in CatalogKind::ALL {
            let path = dir.join(format!("{}.json", kind.file_stem()));
            if !path.is_file() {
                tracing::debug!(kind = %kind, path = %path.display(), "no catalog file");
                continue;
            }
            let catalog = self
                .load_file(&path)
                .with_context(|| format!("loading {kind} catalog"))?;
            loaded.push((kind, catalog));
        }

        let kinds: Vec<CatalogKind> = loaded.iter().map(|(kind, _)| *kind).collect();
        for (kind, catalog) in loaded {
            registry.set_catalog(kind, catalog);
        }
        tracing::debug!(dir = %dir.display(), kinds = ?kinds, "catalog directory loaded");
        Ok(kinds)
    }
}

/// Read and validate one catalog file with the built-in schema.
pub fn load_catalog_from_path(path: &Path) -> Result<Catalog> {
    CatalogLoader::new()?.load_file(path)
}

/// Load a bundled catalog directory into `registry` with the built-in schema.
pub fn load_catalog_dir(dir: &Path, registry: &mut CatalogRegistry) -> Result<Vec<CatalogKind>> {
    CatalogLoader::new()?.load_dir(dir, registry)
}

fn read_json(path: &Path) -> Result<Value> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))
}
