mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from visitmap for tests
pub use visitmap::core::{
    ActionError, Catalog, DataError, GeoDataset, Region, RenderSpec, Session, StatusRecord,
    StatusRepository, StatusStore, StoreError, Tracker,
};
pub use visitmap::models::{Progress, VisitStatus};
