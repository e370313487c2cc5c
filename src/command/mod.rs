use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::{json, Map, Value};

use config::{Config, REGISTRY_TOML};
use registry::ModuleRow;

use crate::{Error, Result};

pub mod listing;
pub mod stats;
pub mod window;

static NO_DESCRIPTION: &str = "No description";

/// Use the given config file, otherwise `registry.toml` in the
/// working directory, otherwise the defaults.
pub fn load_config(file: Option<&PathBuf>) -> Result<Config> {
    if let Some(file) = file {
        return Ok(Config::load_config(file)?);
    }

    let local = PathBuf::from(REGISTRY_TOML);
    if local.is_file() {
        return Ok(Config::load_config(&local)?);
    }

    debug!("no {} found, using defaults", REGISTRY_TOML);
    Ok(Default::default())
}

fn read_input(file: &Path) -> Result<String> {
    if !file.is_file() {
        return Err(Error::NotFile(file.to_path_buf()));
    }
    Ok(fs::read_to_string(file)?)
}

/// JSON output carries the page language and text direction
/// alongside the named body.
fn page_document(config: &Config, name: &str, body: Value) -> Value {
    let mut doc = Map::new();
    doc.insert("lang".to_string(), json!(config.lang));
    doc.insert("dir".to_string(), json!(config.direction()));
    doc.insert(name.to_string(), body);
    Value::Object(doc)
}

fn row_line(row: &ModuleRow) -> String {
    let mut line = format!("{}  {}", row.name, row.description_or(NO_DESCRIPTION));
    if let Some(ref age) = row.age {
        line.push_str(&format!("  ({})", age));
    }
    if let Some(stars) = row.star_count {
        line.push_str(&format!("  ★ {}", stars));
    }
    line
}
