use std::sync::{
    Mutex,
    atomic::{AtomicU64, Ordering},
};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Counters shared between the dispatcher and the health endpoint.
#[derive(Debug, Default)]
pub struct DispatchStats {
    received: AtomicU64,
    routed: AtomicU64,
    unhandled: AtomicU64,
    last_event_at: Mutex<Option<DateTime<Utc>>>,
}

impl DispatchStats {
    pub fn record_received(&self) {
        self.received.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut last) = self.last_event_at.lock() {
            *last = Some(Utc::now());
        }
    }

    pub fn record_routed(&self) {
        self.routed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unhandled(&self) {
        self.unhandled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn events_received(&self) -> u64 {
        self.received.load(Ordering::Relaxed)
    }

    pub fn events_routed(&self) -> u64 {
        self.routed.load(Ordering::Relaxed)
    }

    pub fn events_unhandled(&self) -> u64 {
        self.unhandled.load(Ordering::Relaxed)
    }

    pub fn report(&self, started_at: DateTime<Utc>) -> HealthReport {
        let last_event_at = self
            .last_event_at
            .lock()
            .map(|last| *last)
            .unwrap_or_default();

        HealthReport {
            status: "healthy",
            uptime_seconds: (Utc::now() - started_at).num_seconds(),
            events_received: self.events_received(),
            events_routed: self.events_routed(),
            events_unhandled: self.events_unhandled(),
            last_event_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub uptime_seconds: i64,
    pub events_received: u64,
    pub events_routed: u64,
    pub events_unhandled: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_event_at: Option<DateTime<Utc>>,
}
