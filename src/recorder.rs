use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::routes::{Action, PathParams};

/// A single request the dummy backend has accepted
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub action: Action,
    pub params: PathParams,
    pub body: Option<JsonValue>,
    pub received_at: DateTime<Utc>,
}

/// Shareable in-memory log of every request the dummy backend has accepted.
///
/// This is the only storage the server has. Test suites drive the firmware
/// against this process and then inspect the log to assert on what the
/// "backend" saw. Entries are append-only and kept in arrival order.
#[derive(Clone, Default)]
pub struct Recorder {
    inner: Arc<Mutex<Vec<ReceivedRequest>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an accepted request to the log.
    pub fn record(&self, action: Action, params: PathParams, body: Option<JsonValue>) {
        let entry = ReceivedRequest {
            action,
            params,
            body,
            received_at: Utc::now(),
        };
        tracing::debug!("Recording {:?} request", action);
        self.lock().push(entry);
    }

    /// Snapshot of everything received so far, in arrival order.
    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.lock().clone()
    }

    /// Snapshot of the requests that resolved to `action`, in arrival order.
    pub fn received_for(&self, action: Action) -> Vec<ReceivedRequest> {
        self.lock()
            .iter()
            .filter(|entry| entry.action == action)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ReceivedRequest>> {
        // A panic while holding the lock leaves the log intact; keep serving it
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
