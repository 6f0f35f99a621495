//! Outcome to output row rendering.

use crate::app::statistics::OutcomeStats;
use crate::config::{INPUT_COLUMNS, RESULT_HEADER};
use crate::dispatch::{Outcome, ResultStore};
use crate::submit::SendStatus;

use super::translate::{translate_lead_status, translate_reject_reason, translate_status};

/// One line of the result file: the echoed input columns followed by the
/// derived ones.
pub type OutputRow = Vec<String>;

/// Renders the lead id, or an empty string when absent or not positive.
pub fn render_lead_id(lead_id: Option<i64>) -> String {
    match lead_id {
        Some(id) if id > 0 => id.to_string(),
        _ => String::new(),
    }
}

/// Builds the output row for one outcome.
pub fn render_row(outcome: &Outcome) -> OutputRow {
    let reply = &outcome.reply;
    let mut row = Vec::with_capacity(INPUT_COLUMNS + RESULT_HEADER.len());
    row.extend(outcome.record.iter().cloned());
    row.push(translate_status(&reply.status).to_string());
    row.push(translate_lead_status(&reply.lead_status).to_string());
    row.push(translate_reject_reason(&reply.reject_reason).to_string());
    row.push(render_lead_id(reply.lead_id));
    row.push(reply.message.clone());
    row
}

/// JSON of the submitted payload for outcomes that were not accepted.
fn failed_payload(outcome: &Outcome) -> Option<String> {
    if outcome.reply.kind() == SendStatus::Success {
        return None;
    }
    serde_json::to_string(&outcome.lead).ok()
}

/// Drains the store into output rows, counting each outcome's status.
///
/// Rows come out in the store's iteration order, not input order.
pub fn aggregate(store: ResultStore, stats: &OutcomeStats) -> Vec<OutputRow> {
    store
        .into_outcomes()
        .map(|(id, outcome)| {
            stats.record(outcome.reply.kind());
            if let Some(payload) = failed_payload(&outcome) {
                log::debug!("Lead {} ({:?}) payload: {}", id, outcome.reply.status, payload);
            }
            render_row(&outcome)
        })
        .collect()
}
