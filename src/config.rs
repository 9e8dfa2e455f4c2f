//! Configuration for jsonstate
//!
//! Centralized store configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, StoreError};

/// Main configuration for a state store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    // -------------------------------------------------------------------------
    // Namespace Configuration
    // -------------------------------------------------------------------------
    /// Prefix shared by every state file of one kind
    /// File layout:
    ///   {state_dir}/
    ///     ├── {type_name}-{id}.json
    ///     └── ...
    pub type_name: String,

    /// Directory holding the state files. The default (empty path) yields
    /// bare relative file names, resolved against the working directory.
    pub state_dir: PathBuf,

    // -------------------------------------------------------------------------
    // File Configuration
    // -------------------------------------------------------------------------
    /// Permission bits for newly created state files (unix only)
    pub file_mode: u32,

    // -------------------------------------------------------------------------
    // Identifier Configuration
    // -------------------------------------------------------------------------
    /// How many identifiers `create` draws before giving up on collisions
    pub max_id_attempts: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            type_name: "json".to_string(),
            state_dir: PathBuf::new(),
            file_mode: 0o644,
            max_id_attempts: 16,
        }
    }
}

impl StoreConfig {
    /// Create a new config builder
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }

    /// Check that the config can back a driver
    pub fn validate(&self) -> Result<()> {
        if self.type_name.is_empty() {
            return Err(StoreError::Config("type name must not be empty".to_string()));
        }
        if self.type_name.contains(['/', '\\']) {
            return Err(StoreError::Config(format!(
                "type name {:?} must not contain path separators",
                self.type_name
            )));
        }
        if self.max_id_attempts == 0 {
            return Err(StoreError::Config(
                "max_id_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for StoreConfig
#[derive(Default)]
pub struct StoreConfigBuilder {
    config: StoreConfig,
}

impl StoreConfigBuilder {
    /// Set the type name used as file prefix
    pub fn type_name(mut self, name: impl Into<String>) -> Self {
        self.config.type_name = name.into();
        self
    }

    /// Set the directory holding state files
    pub fn state_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.state_dir = path.into();
        self
    }

    /// Set the permission bits for new files
    pub fn file_mode(mut self, mode: u32) -> Self {
        self.config.file_mode = mode;
        self
    }

    /// Set the identifier attempt limit
    pub fn max_id_attempts(mut self, attempts: usize) -> Self {
        self.config.max_id_attempts = attempts;
        self
    }

    pub fn build(self) -> StoreConfig {
        self.config
    }
}
