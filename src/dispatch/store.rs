//! Shared map of finished leads.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::input::InputRecord;
use crate::lead::Lead;
use crate::submit::Reply;

/// Terminal result of one work unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub record: InputRecord,
    pub lead: Lead,
    pub reply: Reply,
}

/// Concurrent, insert-only map from unit id to [`Outcome`].
///
/// Workers write disjoint keys; iteration order is unspecified.
#[derive(Debug, Default)]
pub struct ResultStore {
    outcomes: DashMap<Uuid, Outcome>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the outcome for `id`. An existing entry is never replaced;
    /// returns `false` in that case.
    pub fn insert(&self, id: Uuid, outcome: Outcome) -> bool {
        match self.outcomes.entry(id) {
            Entry::Occupied(_) => {
                log::warn!("Outcome for work unit {} already stored; keeping the first", id);
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(outcome);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Consumes the store, yielding outcomes in arbitrary order.
    pub fn into_outcomes(self) -> impl Iterator<Item = (Uuid, Outcome)> {
        self.outcomes.into_iter()
    }
}
