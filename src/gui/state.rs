use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::{GeoDataset, Session, Tracker};

/// Everything the screens read and mutate.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: Arc<GeoDataset>,
    pub tracker: Tracker,
    pub session: Session,
    pub rng: StdRng,
    /// Last failed action, shown in the sidebar until the next success.
    pub last_error: Option<String>,
}

impl AppState {
    pub fn new(dataset: GeoDataset, tracker: Tracker) -> Self {
        Self {
            dataset: Arc::new(dataset),
            tracker,
            session: Session::new(),
            rng: StdRng::from_entropy(),
            last_error: None,
        }
    }
}
