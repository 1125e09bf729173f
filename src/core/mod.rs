pub mod catalog;
pub mod error;
pub mod geo;
pub mod projector;
pub mod session;
pub mod store;
pub mod tracker;

pub use catalog::Catalog;
pub use error::{ActionError, DataError, StoreError};
pub use geo::{DatasetLoader, DatasetSource, GeoDataset, Region};
pub use projector::{FocusBox, RenderSpec, StyledRegion, project};
pub use session::Session;
pub use store::{StatusRecord, StatusRepository, StatusStore};
pub use tracker::Tracker;
