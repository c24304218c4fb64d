#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use flow_catalog::{CATALOG_DIR_ENV, CatalogRegistry, load_catalog_dir};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::Once;

static INIT: Once = Once::new();

/// Route library tracing into the test harness output (`RUST_LOG` filters).
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/catalog")
}

pub fn fixture_registry() -> CatalogRegistry {
    init_test_logging();
    let mut registry = CatalogRegistry::new();
    load_catalog_dir(&fixture_dir(), &mut registry).expect("fixture catalogs load");
    registry
}

pub fn read_fixture(name: &str) -> serde_json::Value {
    let path = fixture_dir().join(name);
    let data = std::fs::read_to_string(&path).expect("fixture readable");
    serde_json::from_str(&data).expect("fixture is JSON")
}

/// `catalog-lookup` with `FLOW_CATALOG_DIR` and `RUST_LOG` cleared and no
/// catalog source chosen yet.
pub fn bare_lookup_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_catalog-lookup"));
    cmd.env_remove(CATALOG_DIR_ENV).env_remove("RUST_LOG");
    cmd
}

/// `catalog-lookup` reading catalogs from `catalog_dir` via the flag.
pub fn lookup_command(catalog_dir: &Path) -> Command {
    let mut cmd = bare_lookup_command();
    cmd.arg("--catalog-dir").arg(catalog_dir);
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}
