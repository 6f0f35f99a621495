//! Input row to lead mapping.

use crate::config::PRODUCT_TYPE_ID;

use super::date::normalize_date;
use super::model::Lead;

/// Positions of the input columns.
mod column {
    pub const LAST_NAME: usize = 0;
    pub const FIRST_NAME: usize = 1;
    pub const PATRONYMIC: usize = 2;
    pub const BIRTH_DATE: usize = 3;
    pub const AGE: usize = 4;
    pub const PHONE: usize = 5;
    pub const EMAIL: usize = 6;
    pub const AMOUNT: usize = 7;
    pub const TERM: usize = 8;
    pub const REGION: usize = 9;
    pub const CITY: usize = 10;
    pub const PASSPORT_SERIES: usize = 11;
    pub const PASSPORT_NUMBER: usize = 12;
    pub const PASSPORT_ISSUE_DATE: usize = 13;
}

/// Builds the API payload for one input row.
///
/// Text fields are copied as is. `age` and `amount` that do not parse as
/// integers become 0 (and are then left out of the JSON). Non-empty dates go
/// through [`normalize_date`]; empty ones stay empty. Missing trailing columns
/// read as empty.
pub fn prepare_lead(record: &[String]) -> Lead {
    let field = |index: usize| record.get(index).map(String::as_str).unwrap_or_default();

    let mut lead = Lead::default();

    lead.client.last_name = field(column::LAST_NAME).to_string();
    lead.client.first_name = field(column::FIRST_NAME).to_string();
    lead.client.patronymic = field(column::PATRONYMIC).to_string();
    lead.client.birth_date = date_field(field(column::BIRTH_DATE));
    lead.client.age = lenient_int(field(column::AGE));
    lead.client.phone = field(column::PHONE).to_string();
    lead.client.email = field(column::EMAIL).to_string();

    lead.product.type_id = PRODUCT_TYPE_ID.to_string();
    lead.product.amount = lenient_int(field(column::AMOUNT));
    lead.product.term = field(column::TERM).to_string();

    lead.location.name.region = field(column::REGION).to_string();
    lead.location.name.city = field(column::CITY).to_string();

    lead.passport.series = field(column::PASSPORT_SERIES).to_string();
    lead.passport.number = field(column::PASSPORT_NUMBER).to_string();
    lead.passport.issue_date = date_field(field(column::PASSPORT_ISSUE_DATE));

    lead
}

fn date_field(raw: &str) -> String {
    if raw.is_empty() {
        String::new()
    } else {
        normalize_date(raw)
    }
}

fn lenient_int(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}
