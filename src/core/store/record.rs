use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::catalog::Catalog;
use crate::models::{Progress, VisitStatus};

/// Country name to status, as persisted.
///
/// Names outside the catalog are kept untouched; names missing from the
/// record read as [`VisitStatus::NotVisited`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusRecord {
    entries: BTreeMap<String, VisitStatus>,
}

impl StatusRecord {
    /// Every catalog name marked not visited.
    pub fn fresh(catalog: &Catalog) -> Self {
        Self {
            entries: catalog
                .iter()
                .map(|name| (name.to_string(), VisitStatus::NotVisited))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> VisitStatus {
        self.entries.get(name).copied().unwrap_or_default()
    }

    /// Returns the status the name had before.
    pub fn set(&mut self, name: impl Into<String>, status: VisitStatus) -> VisitStatus {
        self.entries
            .insert(name.into(), status)
            .unwrap_or_default()
    }

    pub fn remove(&mut self, name: &str) -> Option<VisitStatus> {
        self.entries.remove(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Only catalog names count, so stale entries never push the
    /// total past the catalog size.
    pub fn progress(&self, catalog: &Catalog) -> Progress {
        let visited = catalog
            .iter()
            .filter(|name| self.get(name).is_visited())
            .count();
        Progress {
            visited,
            total: catalog.len(),
        }
    }
}

impl FromIterator<(String, VisitStatus)> for StatusRecord {
    fn from_iter<T: IntoIterator<Item = (String, VisitStatus)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_entries_do_not_count_towards_progress() {
        let catalog = Catalog::from_names(["France", "Japan"]);
        let mut record = StatusRecord::fresh(&catalog);
        record.set("Japan", VisitStatus::Visited);
        record.set("Yugoslavia", VisitStatus::Visited);

        let progress = record.progress(&catalog);
        assert_eq!(progress.visited, 1);
        assert_eq!(progress.total, 2);
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn set_reports_previous_status() {
        let mut record = StatusRecord::default();
        assert_eq!(record.set("Peru", VisitStatus::Visited), VisitStatus::NotVisited);
        assert_eq!(record.set("Peru", VisitStatus::Visited), VisitStatus::Visited);
    }

    #[test]
    fn serializes_as_flat_object() {
        let record: StatusRecord = [
            ("Germany".to_string(), VisitStatus::NotVisited),
            ("France".to_string(), VisitStatus::Visited),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"France":"visited","Germany":"not visited"}"#
        );
    }
}
