//! Root application state.

use std::sync::Arc;

use caredesk_data::{Directory, SampleData};

use super::view_state::ViewState;

/// Everything the application owns.
pub struct AppState {
    /// In-memory datasets behind the repository seam.
    pub data: SampleData,
    /// Async directory collaborator, shared with background tasks.
    pub directory: Arc<Directory>,
    /// Current view plus its UI state.
    pub view: ViewState,
    /// Dark appearance mode.
    pub dark_mode: bool,
    /// Sequence for ids of lab requests created this session.
    pub request_seq: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            data: SampleData::load(),
            directory: Arc::new(Directory::new()),
            view: ViewState::default(),
            dark_mode: false,
            request_seq: 0,
        }
    }

    /// Allocate the next session-local lab request id.
    pub fn next_request_id(&mut self) -> String {
        self.request_seq += 1;
        format!("XN-9{:03}", self.request_seq)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
