mod app;
mod message;
mod screens;
mod state;
mod widgets;

pub use app::VisitMapApp;
pub use message::Message;
pub use state::AppState;

use crate::core::{GeoDataset, Tracker};

/// Open the map window; returns when it is closed.
pub fn run(dataset: GeoDataset, tracker: Tracker) -> anyhow::Result<()> {
    let state = AppState::new(dataset, tracker);
    iced::application(move || VisitMapApp::new(state.clone()), VisitMapApp::update, VisitMapApp::view)
        .title(VisitMapApp::title)
        .window_size((1400.0, 860.0))
        .run()
        .map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}
