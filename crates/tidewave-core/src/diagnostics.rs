//! Once-per-key observability events.
//!
//! Invalid configuration and missing renderer capabilities are never fatal;
//! they are clamped or degraded and reported here exactly once per key until
//! the owner calls [`Diagnostics::reset`] (views do so on every mount).

use std::collections::HashSet;
use tracing::warn;

/// A recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    pub key: String,
    pub message: String,
}

/// Collects diagnostics and emits each key once.
#[derive(Debug, Default)]
pub struct Diagnostics {
    seen: HashSet<String>,
    events: Vec<DiagnosticEvent>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `message` under `key`. Returns `true` if this was the first
    /// report for the key since the last reset.
    pub fn report(&mut self, key: impl Into<String>, message: impl Into<String>) -> bool {
        let key = key.into();
        if self.seen.contains(&key) {
            return false;
        }
        let message = message.into();
        warn!(key = %key, "{}", message);
        self.seen.insert(key.clone());
        self.events.push(DiagnosticEvent { key, message });
        true
    }

    /// Whether `key` has been reported since the last reset.
    pub fn has_reported(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    /// Events recorded since the last reset, in order.
    pub fn events(&self) -> &[DiagnosticEvent] {
        &self.events
    }

    /// Forget everything; the next report of any key is emitted again.
    pub fn reset(&mut self) {
        self.seen.clear();
        self.events.clear();
    }
}
