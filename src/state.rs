use crate::config::Config;
use crate::recorder::Recorder;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub recorder: Recorder,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            recorder: Recorder::new(),
            config: Arc::new(config),
        }
    }
}
