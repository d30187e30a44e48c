//! Localization dataset I/O
//!
//! Datasets are flat JSON objects mapping message keys to strings. Key
//! order is significant and preserved end to end (serde_json with
//! `preserve_order`).

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::Path;

/// An ordered localization dataset.
pub type Dataset = Vec<(String, String)>;

/// Read a dataset file, keeping entry order.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset: {}", path.display()))?;
    parse_dataset(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse dataset JSON, keeping entry order.
pub fn parse_dataset(content: &str) -> Result<Dataset> {
    let map: Map<String, Value> = serde_json::from_str(content)?;
    let mut entries = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::String(text) => entries.push((key, text)),
            other => {
                return Err(crate::CliError::InvalidDataset(format!(
                    "value for '{key}' is not a string (found {other})"
                ))
                .into())
            }
        }
    }
    Ok(entries)
}

/// Serialize a dataset to pretty-printed JSON, keys in the given order.
pub fn write_dataset<W: Write>(mut writer: W, entries: &Dataset) -> Result<()> {
    let map: Map<String, Value> = entries
        .iter()
        .map(|(key, value)| (key.clone(), Value::String(value.clone())))
        .collect();
    serde_json::to_writer_pretty(&mut writer, &map)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
