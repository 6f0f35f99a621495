use uuid::Uuid;

use crate::input::InputRecord;
use crate::lead::{prepare_lead, Lead};

/// A lead plus the id its outcome is stored under.
///
/// The id is random and says nothing about the content; two identical rows
/// still get distinct units.
#[derive(Debug, Clone)]
pub struct WorkUnit {
    pub id: Uuid,
    pub record: InputRecord,
    pub lead: Lead,
}

impl WorkUnit {
    pub fn new(record: InputRecord) -> Self {
        let lead = prepare_lead(&record);
        Self {
            id: Uuid::new_v4(),
            record,
            lead,
        }
    }
}

/// Normalizes every record into a unit.
pub fn build_work_units(records: Vec<InputRecord>) -> Vec<WorkUnit> {
    records.into_iter().map(WorkUnit::new).collect()
}
