//! Shared server state

use std::sync::Arc;
use std::time::Instant;

use crate::eval::{RetrainingPolicy, TriggerStore};

/// State shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub policy: Arc<RetrainingPolicy>,
    pub triggers: Arc<TriggerStore>,
    started_at: Instant,
}

impl AppState {
    pub fn new(policy: Arc<RetrainingPolicy>, triggers: Arc<TriggerStore>) -> Self {
        Self { policy, triggers, started_at: Instant::now() }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
