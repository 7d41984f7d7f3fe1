/// Shared application state
use std::sync::Arc;
use tokio::sync::Mutex;
use tonearm_session::SessionController;

/// Application state shared across all handlers
///
/// The mutex serializes voice turns and renderer events, so a session never
/// sees two requests at once.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<SessionController>>,
    pub application_ids: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(session: SessionController, application_ids: Vec<String>) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            application_ids: Arc::new(application_ids),
        }
    }

    /// An empty allow-list accepts every application
    pub fn accepts(&self, application_id: &str) -> bool {
        self.application_ids.is_empty() || self.application_ids.iter().any(|id| id == application_id)
    }
}
