use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    events_generated: AtomicU64,
    events_inserted: AtomicU64,
    insert_errors: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub events_generated: u64,
    pub events_inserted: u64,
    pub insert_errors: u64,
}

impl Metrics {
    pub fn record_generated(&self) {
        self.events_generated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_inserted(&self) {
        self.events_inserted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_insert_error(&self) {
        self.insert_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            events_generated: self.events_generated.load(Ordering::Relaxed),
            events_inserted: self.events_inserted.load(Ordering::Relaxed),
            insert_errors: self.insert_errors.load(Ordering::Relaxed),
        }
    }
}
