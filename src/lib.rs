//! # jsonstate
//!
//! A minimal file-backed state driver with:
//! - One JSON file per record, named `{type_name}-{id}.json`
//! - Random decimal identifiers from an injectable allocator
//! - Create / read / update / delete with classified "not found" errors
//! - A lifecycle adapter for resource managers
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Resource Manager / CLI                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  JsonResource                                │
//! │      (clears id on absent records, refreshes on write)       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Driver                                   │
//! │          create / read / update / delete / exists            │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐              ┌─────────────────────┐
//!   │   IdAllocator   │              │  {type}-{id}.json   │
//!   │    (StdRng)     │              │   (state files)     │
//!   └─────────────────┘              └─────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use jsonstate::{is_state_not_found, Driver, Record};
//!
//! let mut driver = Driver::for_type("json")?;
//! let id = driver.create(&Record::new(10))?;
//!
//! let record = Record::from_slice(&driver.read(&id)?)?;
//! assert_eq!(record.score, 10);
//!
//! driver.delete(&id)?;
//! let err = driver.read(&id).unwrap_err();
//! assert!(is_state_not_found(Some(&err)));
//! # Ok::<(), jsonstate::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod id;
pub mod record;
pub mod driver;
pub mod resource;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{is_state_not_found, ErrorKind, Result, StoreError};
pub use config::StoreConfig;
pub use driver::Driver;
pub use id::{IdAllocator, RandomIdAllocator};
pub use record::Record;
pub use resource::{JsonResource, ResourceData};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of jsonstate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
