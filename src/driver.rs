//! Driver Module
//!
//! File-backed CRUD over JSON state files.
//!
//! ## Responsibilities
//! - Allocate identifiers for new records
//! - Derive `{type_name}-{id}.json` paths
//! - Create / read / update / delete state files
//! - Classify absence as [`StoreError::NotFound`]
//!
//! ## Absence Detection
//! `read`, `update` and `delete` decide absence from the result of the
//! filesystem call itself, not from a separate stat beforehand. A file
//! removed between two calls therefore always surfaces as `NotFound`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::id::{IdAllocator, RandomIdAllocator};

/// The state file driver
///
/// ## Concurrency Model: none
///
/// Every call performs blocking filesystem I/O and returns when it
/// completes. Two processes racing on the same identifier get an
/// unspecified outcome (last writer wins).
pub struct Driver<A = RandomIdAllocator> {
    /// Store configuration
    config: StoreConfig,

    /// Identifier source for `create`
    allocator: A,
}

impl Driver<RandomIdAllocator> {
    /// Open a driver with a time-seeded random allocator
    pub fn open(config: StoreConfig) -> Result<Self> {
        Self::with_allocator(config, RandomIdAllocator::new())
    }

    /// Open with the default config under a type name
    ///
    /// Files land in the working directory as `{type_name}-{id}.json`.
    pub fn for_type(type_name: &str) -> Result<Self> {
        Self::open(StoreConfig::builder().type_name(type_name).build())
    }
}

impl<A: IdAllocator> Driver<A> {
    /// Open a driver with an explicit identifier allocator
    pub fn with_allocator(config: StoreConfig, allocator: A) -> Result<Self> {
        config.validate()?;
        debug!(
            type_name = %config.type_name,
            state_dir = %config.state_dir.display(),
            "opened state driver"
        );
        Ok(Self { config, allocator })
    }

    /// Persist a new record and return its identifier
    ///
    /// Draws identifiers until one names a file that does not exist yet,
    /// giving up after `max_id_attempts` draws.
    pub fn create<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<String> {
        let data = encode(value)?;

        for _ in 0..self.config.max_id_attempts {
            let id = self.allocator.next_id();
            let path = self.state_path(&id);

            let file = match self.new_file_options().open(&path) {
                Ok(file) => file,
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    warn!(id = %id, path = %path.display(), "identifier collision, drawing again");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            write_all(file, &data)?;
            debug!(id = %id, path = %path.display(), bytes = data.len(), "created state file");
            return Ok(id);
        }

        Err(StoreError::IdExhausted {
            attempts: self.config.max_id_attempts,
        })
    }
}

impl<A> Driver<A> {
    /// Return the raw bytes of a stored record
    ///
    /// The bytes are not parsed; see [`crate::Record::from_slice`].
    pub fn read(&self, id: &str) -> Result<Vec<u8>> {
        let path = self.state_path(id);
        let data = fs::read(&path).map_err(|e| classify(e, id, &path))?;
        debug!(id = %id, path = %path.display(), bytes = data.len(), "read state file");
        Ok(data)
    }

    /// Replace a stored record in full
    ///
    /// Absence is reported before the value is encoded. The file is only
    /// truncated once encoding succeeded, so a bad value keeps prior state.
    pub fn update<T: Serialize + ?Sized>(&self, id: &str, value: &T) -> Result<()> {
        let path = self.state_path(id);

        let file = OpenOptions::new()
            .write(true)
            .open(&path)
            .map_err(|e| classify(e, id, &path))?;

        let data = encode(value)?;
        file.set_len(0)?;
        write_all(file, &data)?;
        debug!(id = %id, path = %path.display(), bytes = data.len(), "updated state file");
        Ok(())
    }

    /// Remove a stored record
    pub fn delete(&self, id: &str) -> Result<()> {
        let path = self.state_path(id);
        fs::remove_file(&path).map_err(|e| classify(e, id, &path))?;
        debug!(id = %id, path = %path.display(), "deleted state file");
        Ok(())
    }

    /// Whether a state file is present for `id`
    ///
    /// Only a definite "does not exist" answers `false`; any other stat
    /// failure (e.g. permission denied on the directory) answers `true`.
    pub fn exists(&self, id: &str) -> bool {
        match fs::metadata(self.state_path(id)) {
            Ok(_) => true,
            Err(e) => e.kind() != io::ErrorKind::NotFound,
        }
    }

    /// Path of the state file for `id`
    pub fn state_path(&self, id: &str) -> PathBuf {
        self.config
            .state_dir
            .join(format!("{}-{}.json", self.config.type_name, id))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the type name used as file prefix
    pub fn type_name(&self) -> &str {
        &self.config.type_name
    }

    /// Get the state directory
    pub fn state_dir(&self) -> &Path {
        &self.config.state_dir
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn new_file_options(&self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(self.config.file_mode);
        }

        options
    }
}

/// Encode a value as two-space indented JSON
fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(value)?)
}

fn write_all(mut file: File, data: &[u8]) -> Result<()> {
    file.write_all(data)?;
    file.flush()?;
    Ok(())
}

/// Map a filesystem error on `path`, turning absence into `NotFound`
fn classify(err: io::Error, id: &str, path: &Path) -> StoreError {
    if err.kind() == io::ErrorKind::NotFound {
        StoreError::not_found(id, path)
    } else {
        StoreError::Io(err)
    }
}
