use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use triage_wizard::session::Session;
use triage_wizard::wizard::Wizard;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub wizard: Arc<Wizard>,
    sessions: Arc<Mutex<HashMap<String, Arc<Mutex<Session>>>>>,
}

impl AppState {
    pub fn new(wizard: Wizard) -> Self {
        Self {
            wizard: Arc::new(wizard),
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// The per-session wizard state for `key`, created on first use.
    ///
    /// Each session serializes its own interactions behind its mutex — one
    /// request at a time per session — without blocking other sessions.
    pub async fn session(&self, key: &str) -> Arc<Mutex<Session>> {
        let mut sessions = self.sessions.lock().await;
        sessions
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(Session::new())))
            .clone()
    }
}
