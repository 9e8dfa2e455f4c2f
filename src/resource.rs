//! Resource Lifecycle Adapter
//!
//! Maps create/read/update/delete lifecycle calls from a resource manager
//! onto the [`Driver`].
//!
//! ## Responsibilities
//! - Hold the resource's identifier slot and `score` attribute
//! - Treat a record found absent as "deleted externally": clear the slot
//!   and report success
//! - Refresh the attribute from disk after every create and update

use tracing::{debug, info};

use crate::driver::Driver;
use crate::error::Result;
use crate::id::IdAllocator;
use crate::record::Record;

/// Resource state as seen by the resource manager
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceData {
    /// Identifier of the backing record, `None` when absent
    id: Option<String>,

    /// Desired or last-read score
    score: i64,

    /// Set when `score` was changed by the caller since the last refresh
    score_changed: bool,
}

impl ResourceData {
    /// A planned resource that has not been created yet
    pub fn new(score: i64) -> Self {
        Self {
            id: None,
            score,
            score_changed: false,
        }
    }

    /// A resource already tracked under `id`
    pub fn with_id(id: impl Into<String>, score: i64) -> Self {
        Self {
            id: Some(id.into()),
            score,
            score_changed: false,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Set a new desired score, marking the attribute as changed
    pub fn set_score(&mut self, score: i64) {
        if score != self.score {
            self.score = score;
            self.score_changed = true;
        }
    }

    /// Whether `score` changed since the last refresh
    pub fn has_change(&self) -> bool {
        self.score_changed
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn clear_id(&mut self) {
        self.id = None;
    }

    fn refresh(&mut self, record: Record) {
        self.score = record.score;
        self.score_changed = false;
    }
}

/// Lifecycle adapter over a borrowed driver
pub struct JsonResource<'a, A> {
    driver: &'a mut Driver<A>,
}

impl<'a, A: IdAllocator> JsonResource<'a, A> {
    pub fn new(driver: &'a mut Driver<A>) -> Self {
        Self { driver }
    }

    /// Create the backing record, then refresh from disk
    pub fn create(&mut self, d: &mut ResourceData) -> Result<()> {
        let id = self.driver.create(&Record::new(d.score))?;
        info!(id = %id, score = d.score, "created resource");
        d.set_id(id);
        self.read(d)
    }

    /// Refresh `d` from disk
    ///
    /// An absent record clears the identifier slot and is not an error.
    pub fn read(&mut self, d: &mut ResourceData) -> Result<()> {
        match self.load(d)? {
            Some((_, record)) => d.refresh(record),
            None => d.clear_id(),
        }
        Ok(())
    }

    /// Write the changed attribute back, then refresh from disk
    ///
    /// The stored record is read first and only changed attributes are
    /// replaced before the full record is written.
    pub fn update(&mut self, d: &mut ResourceData) -> Result<()> {
        let Some((id, mut record)) = self.load(d)? else {
            d.clear_id();
            return Ok(());
        };

        if d.has_change() {
            record.score = d.score;
        }

        self.driver.update(&id, &record)?;
        info!(id = %id, score = record.score, "updated resource");
        self.read(d)
    }

    /// Remove the backing record; an already absent record is fine
    pub fn delete(&mut self, d: &mut ResourceData) -> Result<()> {
        if let Some(id) = d.id() {
            match self.driver.delete(id) {
                Ok(()) => info!(id = %id, "deleted resource"),
                Err(e) if e.is_not_found() => {
                    debug!(id = %id, "resource already absent");
                }
                Err(e) => return Err(e),
            }
        }
        d.clear_id();
        Ok(())
    }

    /// Read and decode the stored record with its id, `None` if absent
    fn load(&self, d: &ResourceData) -> Result<Option<(String, Record)>> {
        let Some(id) = d.id() else {
            return Ok(None);
        };
        match self.driver.read(id) {
            Ok(data) => Ok(Some((id.to_string(), Record::from_slice(&data)?))),
            Err(e) if e.is_not_found() => {
                debug!(id = %id, "resource gone, clearing id");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
