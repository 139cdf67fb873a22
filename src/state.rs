use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::AppConfig;
use crate::events::EventHub;
use crate::sizing::ReferenceTables;

/// Shared application state passed to all API handlers via axum's State extractor.
///
/// Holds nothing that an estimate depends on besides the immutable tables
/// and configured defaults, so requests never observe each other.
pub struct AppState {
    pub config: AppConfig,
    pub tables: ReferenceTables,
    pub event_hub: EventHub,
    estimates_served: AtomicU64,
    estimates_rejected: AtomicU64,
}

impl AppState {
    pub fn new(config: AppConfig, tables: ReferenceTables, event_hub: EventHub) -> Self {
        Self {
            config,
            tables,
            event_hub,
            estimates_served: AtomicU64::new(0),
            estimates_rejected: AtomicU64::new(0),
        }
    }

    pub(crate) fn record_served(&self) {
        self.estimates_served.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_rejected(&self) {
        self.estimates_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn estimates_served(&self) -> u64 {
        self.estimates_served.load(Ordering::Relaxed)
    }

    pub fn estimates_rejected(&self) -> u64 {
        self.estimates_rejected.load(Ordering::Relaxed)
    }
}
