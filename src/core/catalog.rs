use std::collections::BTreeSet;

use crate::core::error::DataError;
use crate::core::geo::GeoDataset;

/// Sorted, de-duplicated country names of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    names: Vec<String>,
}

impl Catalog {
    pub fn build(dataset: &GeoDataset) -> Result<Self, DataError> {
        if dataset.is_empty() {
            return Err(DataError::Empty);
        }
        let catalog =
            Self::from_names(dataset.regions().iter().map(|region| region.name.as_str()));
        log::debug!(
            "Catalog built: {} countries from {} features",
            catalog.len(),
            dataset.len()
        );
        Ok(catalog)
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        Self {
            names: names.into_iter().collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names
            .binary_search_by(|probe| probe.as_str().cmp(name))
            .is_ok()
    }
}
