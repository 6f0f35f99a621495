//! Human-readable labels for API codes.
//!
//! Codes missing from a table are shown as received.

const STATUS_LABELS: &[(&str, &str)] = &[
    ("success", "Успех"),
    ("fail", "Ошибка данных"),
    ("error", "Ошибка сервера"),
];

const LEAD_STATUS_LABELS: &[(&str, &str)] = &[("inProgress", "Принят"), ("rejected", "Не принят")];

const REJECT_REASON_LABELS: &[(&str, &str)] = &[("isDouble", "Дубль")];

fn translate<'a>(table: &[(&str, &'static str)], code: &'a str) -> &'a str {
    table
        .iter()
        .find(|(known, _)| *known == code)
        .map_or(code, |(_, label)| *label)
}

/// Label for a response `status`.
pub fn translate_status(code: &str) -> &str {
    translate(STATUS_LABELS, code)
}

/// Label for `data.leadStatus`.
pub fn translate_lead_status(code: &str) -> &str {
    translate(LEAD_STATUS_LABELS, code)
}

/// Label for `data.rejectReason`.
pub fn translate_reject_reason(code: &str) -> &str {
    translate(REJECT_REASON_LABELS, code)
}
