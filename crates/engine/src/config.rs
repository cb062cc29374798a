//! Ledger configuration via `ledger.toml`
//!
//! Every field has a default, so a missing file, an empty file and a file
//! naming only some fields are all valid. To change settings, edit the file
//! and start a new session.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use ledger_storage::{MemoryStorage, SessionStorage, DEFAULT_QUOTA_BYTES, DEFAULT_STORAGE_KEY};

use crate::error::{LedgerError, LedgerResult};

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "ledger.toml";

/// Ledger configuration loaded from `ledger.toml`.
///
/// # Example
///
/// ```toml
/// storage_key = "newBook"
/// quota_bytes = 5242880
/// editable_rows = true
/// strict_pages = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Name of the storage slot holding the serialized ledger.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Session storage quota in bytes; `0` disables the quota.
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: usize,
    /// Whether rendered rows accept edits that are written back.
    #[serde(default = "default_editable_rows")]
    pub editable_rows: bool,
    /// Reject page counts that do not coerce to a number.
    #[serde(default)]
    pub strict_pages: bool,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_quota_bytes() -> usize {
    DEFAULT_QUOTA_BYTES
}

fn default_editable_rows() -> bool {
    true
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            quota_bytes: default_quota_bytes(),
            editable_rows: default_editable_rows(),
            strict_pages: false,
        }
    }
}

impl LedgerConfig {
    /// Check field values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns an error if `storage_key` is empty.
    pub fn validate(&self) -> LedgerResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(LedgerError::Config(
                "storage_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Build fresh session storage honoring `quota_bytes`.
    pub fn open_storage(&self) -> Arc<dyn SessionStorage> {
        if self.quota_bytes == 0 {
            Arc::new(MemoryStorage::unbounded())
        } else {
            Arc::new(MemoryStorage::with_quota(self.quota_bytes))
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Library ledger configuration

# Storage slot holding the serialized ledger (default: "newBook")
storage_key = "newBook"

# Session storage quota in bytes; 0 disables the quota (default: 5 MiB)
quota_bytes = 5242880

# Rows accept edits that are written back to the ledger (default: true)
# Set to false for display-only rows.
editable_rows = true

# Reject page counts that are not numbers instead of storing NaN (default: false)
strict_pages = false
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> LedgerResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LedgerError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: LedgerConfig = toml::from_str(&content).map_err(|e| {
            LedgerError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> LedgerResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                LedgerError::Config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> LedgerResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            LedgerError::Config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
