use serde::{Deserialize, Serialize};

/// Per-session UI state. Lives for one process and is never persisted by
/// the tracker itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Whether the user has left the landing screen.
    pub entered: bool,
    /// Country currently in focus.
    pub selected: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}
