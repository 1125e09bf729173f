pub mod core;
pub mod models;
pub mod shell;

pub use models::{Bounds, Progress, VisitStatus};
pub use crate::core::{
    Catalog, DatasetLoader, DatasetSource, GeoDataset, RenderSpec, Session, StatusRecord,
    StatusRepository, StatusStore, Tracker,
};

#[cfg(feature = "gui")]
pub mod gui;
