use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::catalog::Catalog;
use crate::core::error::{ActionError, StoreError};
use crate::core::geo::GeoDataset;
use crate::core::projector::{self, RenderSpec};
use crate::core::session::Session;
use crate::core::store::{StatusRecord, StatusRepository, StatusStore};
use crate::models::{Progress, VisitStatus};

/// Applies user actions to the session and the persisted record.
#[derive(Debug, Clone)]
pub struct Tracker<S: StatusRepository = StatusStore> {
    catalog: Catalog,
    store: S,
    record: StatusRecord,
}

impl<S: StatusRepository> Tracker<S> {
    /// Load (or initialize) the record for `catalog`.
    pub fn open(catalog: Catalog, store: S) -> Result<Self, StoreError> {
        let record = store.load(&catalog)?;
        Ok(Self {
            catalog,
            store,
            record,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn record(&self) -> &StatusRecord {
        &self.record
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn status_of(&self, name: &str) -> VisitStatus {
        self.record.get(name)
    }

    pub fn progress(&self) -> Progress {
        self.record.progress(&self.catalog)
    }

    /// Catalog names currently marked visited.
    pub fn visited(&self) -> impl Iterator<Item = &str> {
        self.catalog
            .iter()
            .filter(|name| self.record.get(name).is_visited())
    }

    pub fn enter(&self, session: &mut Session) {
        session.entered = true;
    }

    /// Back to the landing screen. The selection is kept.
    pub fn return_to_start(&self, session: &mut Session) {
        session.entered = false;
    }

    /// Select a country uniformly at random; repeats are allowed.
    pub fn pick_random<'a, R: Rng + ?Sized>(
        &'a self,
        session: &mut Session,
        rng: &mut R,
    ) -> Option<&'a str> {
        let picked = self.catalog.names().choose(rng)?;
        log::info!("Picked {}", picked);
        session.selected = Some(picked.clone());
        Some(picked.as_str())
    }

    pub fn mark_visited(&mut self, session: &Session) -> Result<(), ActionError> {
        self.mark(session, VisitStatus::Visited)
    }

    pub fn mark_not_visited(&mut self, session: &Session) -> Result<(), ActionError> {
        self.mark(session, VisitStatus::NotVisited)
    }

    /// Set the selected country's status and persist. If persisting fails the
    /// in-memory record is restored before the error is returned.
    pub fn mark(&mut self, session: &Session, status: VisitStatus) -> Result<(), ActionError> {
        let name = session.selected().ok_or(ActionError::NoSelection)?;
        self.set_status(name, status)
    }

    /// Set any country's status and persist, regardless of selection.
    pub fn set_status(&mut self, name: &str, status: VisitStatus) -> Result<(), ActionError> {
        let had_entry = self.record.contains(name);
        let previous = self.record.set(name, status);
        if let Err(e) = self.store.persist(&self.record) {
            if had_entry {
                self.record.set(name, previous);
            } else {
                self.record.remove(name);
            }
            log::warn!("Failed to mark {} as {}: {}", name, status, e);
            return Err(e.into());
        }
        log::info!("Marked {} as {}", name, status);
        Ok(())
    }

    pub fn render(&self, dataset: &GeoDataset, session: &Session) -> RenderSpec {
        projector::project(dataset, |name| self.record.get(name), session.selected())
    }
}
