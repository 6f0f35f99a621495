//! Outcome statistics.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::info;
use strum::IntoEnumIterator;

use crate::results::translate_status;
use crate::submit::SendStatus;

/// Thread-safe count of outcomes per [`SendStatus`].
///
/// All statuses start at zero, so lookups never miss.
pub struct OutcomeStats {
    counts: HashMap<SendStatus, AtomicUsize>,
}

impl Default for OutcomeStats {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeStats {
    pub fn new() -> Self {
        let counts = SendStatus::iter()
            .map(|status| (status, AtomicUsize::new(0)))
            .collect();
        OutcomeStats { counts }
    }

    pub fn record(&self, status: SendStatus) {
        if let Some(counter) = self.counts.get(&status) {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn get_count(&self, status: SendStatus) -> usize {
        self.counts
            .get(&status)
            .map_or(0, |counter| counter.load(Ordering::SeqCst))
    }

    pub fn total(&self) -> usize {
        SendStatus::iter().map(|status| self.get_count(status)).sum()
    }
}

/// Logs a per-status breakdown, skipping statuses that never occurred.
pub fn print_outcome_statistics(stats: &OutcomeStats) {
    info!("Outcome statistics ({} leads):", stats.total());
    for status in SendStatus::iter() {
        let count = stats.get_count(status);
        if count > 0 {
            info!(
                "   {} ({}): {}",
                translate_status(status.as_str()),
                status.as_str(),
                count
            );
        }
    }
}
