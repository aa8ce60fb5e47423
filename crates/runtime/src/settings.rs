use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Synthetic location assigned to the root folder's direct children.
pub const DEFAULT_ROOT_LABEL: &str = "Carpeta Principal";

/// Rows per append request when writing sheets.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Run parameters for one audit, loaded from a JSON settings file.
///
/// These are explicit inputs to the orchestrator; nothing in the core
/// reads process-wide constants or the environment for them.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditSettings {
    /// Drive folder the walk starts from.
    pub root_folder_id: String,

    /// Display label used as the root location in the inventory.
    #[serde(default = "default_root_label")]
    pub root_label: String,

    /// Spreadsheet holding the snapshot and change-log sheets.
    pub spreadsheet_id: String,

    /// Rows per append request when rewriting sheets.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_root_label() -> String {
    DEFAULT_ROOT_LABEL.to_owned()
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

impl AuditSettings {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;

        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
