mod record;
mod state;

use std::path::Path;

use state::StateFile;

pub use record::StatusRecord;

use crate::core::catalog::Catalog;
use crate::core::error::StoreError;

/// Persistence for the visit record.
pub trait StatusRepository {
    /// Read the stored record as-is, or create, persist and return a fresh
    /// one covering `catalog` when nothing is stored yet.
    fn load(&self, catalog: &Catalog) -> Result<StatusRecord, StoreError>;

    /// Replace the stored record with `record`.
    fn persist(&self, record: &StatusRecord) -> Result<(), StoreError>;
}

/// File-backed [`StatusRepository`] writing one flat JSON object.
#[derive(Debug, Clone)]
pub struct StatusStore {
    state: StateFile,
}

impl StatusStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            state: StateFile::new(path.as_ref().to_path_buf()),
        }
    }

    pub fn path(&self) -> &Path {
        self.state.path()
    }
}

impl StatusRepository for StatusStore {
    fn load(&self, catalog: &Catalog) -> Result<StatusRecord, StoreError> {
        if self.state.exists() {
            let record = self.state.read()?;
            log::info!(
                "Loaded {} statuses from {:?}",
                record.len(),
                self.state.path()
            );
            return Ok(record);
        }

        let record = StatusRecord::fresh(catalog);
        self.state.write(&record)?;
        log::info!(
            "Created {:?} with {} countries marked not visited",
            self.state.path(),
            record.len()
        );
        Ok(record)
    }

    fn persist(&self, record: &StatusRecord) -> Result<(), StoreError> {
        self.state.write(record)?;
        log::debug!("Persisted {} statuses to {:?}", record.len(), self.state.path());
        Ok(())
    }
}
