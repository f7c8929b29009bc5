//! Converter configuration and alias table files.
//!
//! Both files are YAML:
//!
//! ```yaml
//! # --config
//! exclude: ["debug-*"]
//! scrapeInterval: 30s
//! fqdnTargets: false
//! ```
//!
//! ```yaml
//! # --aliases: original Service name -> runtime service name
//! metrics-svc: demo-metrics
//! ```
//!
//! An empty file is the same as an absent one.

use std::collections::BTreeMap;
use std::path::Path;

use promstatic_common::yaml::parse_document;
use promstatic_compiler::ResolverConfig;
use serde_json::Value;
use tracing::debug;

use crate::{Error, Result};

/// Environment variable for `--config`
pub const CONFIG_ENV: &str = "PROMSTATIC_CONFIG";

/// Environment variable for `--output-dir`
pub const OUTPUT_DIR_ENV: &str = "PROMSTATIC_OUTPUT_DIR";

/// Load resolver settings, falling back to defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<ResolverConfig> {
    let Some(path) = path else {
        debug!("no config file, using defaults");
        return Ok(ResolverConfig::default());
    };

    match read_yaml(path)? {
        Value::Null => Ok(ResolverConfig::default()),
        value => serde_json::from_value(value).map_err(|e| Error::input(path, e)),
    }
}

/// Load the Service alias table.
pub fn load_aliases(path: &Path) -> Result<BTreeMap<String, String>> {
    let aliases: BTreeMap<String, String> = match read_yaml(path)? {
        Value::Null => BTreeMap::new(),
        value => serde_json::from_value(value).map_err(|e| Error::input(path, e))?,
    };
    debug!(count = aliases.len(), path = %path.display(), "loaded alias table");
    Ok(aliases)
}

fn read_yaml(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::input(path, e))?;
    parse_document(&text).map_err(|e| Error::input(path, e))
}
