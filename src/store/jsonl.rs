//! Append-only JSON Lines files

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Append one record as a single line
pub fn append_line<T: Serialize>(path: &Path, record: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut line = serde_json::to_string(record).with_context(|| "Failed to serialize record")?;
    line.push('\n');

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    file.write_all(line.as_bytes())
        .with_context(|| format!("Failed to append to {}", path.display()))?;

    Ok(())
}

/// Read every record in file order.
///
/// A missing or unreadable file is empty. Lines that do not parse are
/// skipped with a warning so one bad line does not hide the rest.
pub fn read_lines<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    if !path.exists() {
        return Vec::new();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}; treating as empty", path.display(), e);
            return Vec::new();
        }
    };

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(idx, line)| match serde_json::from_str(line) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(
                    "Skipping corrupt line {} in {}: {}",
                    idx + 1,
                    path.display(),
                    e
                );
                None
            }
        })
        .collect()
}
