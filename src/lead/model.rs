//! Wire model of a credit lead.
//!
//! Empty strings and zero numbers are left out of the JSON body, and so are
//! whole groups that end up with no fields.

use serde::Serialize;

/// A credit-application lead as sent to the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(skip_serializing_if = "Product::is_empty")]
    pub product: Product,
    #[serde(skip_serializing_if = "Location::is_empty")]
    pub location: Location,
    #[serde(skip_serializing_if = "Passport::is_empty")]
    pub passport: Passport,
    #[serde(skip_serializing_if = "Client::is_empty")]
    pub client: Client,
}

/// Requested credit product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub type_id: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub amount: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub term: String,
}

impl Product {
    fn is_empty(&self) -> bool {
        self.type_id.is_empty() && self.amount == 0 && self.term.is_empty()
    }
}

/// Client location; the API nests the names under `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(skip_serializing_if = "LocationName::is_empty")]
    pub name: LocationName,
}

impl Location {
    fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationName {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub region: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub city: String,
}

impl LocationName {
    fn is_empty(&self) -> bool {
        self.region.is_empty() && self.city.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Passport {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub series: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub issue_date: String,
}

impl Passport {
    fn is_empty(&self) -> bool {
        self.series.is_empty() && self.number.is_empty() && self.issue_date.is_empty()
    }
}

/// The applicant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub patronymic: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub birth_date: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub age: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
}

impl Client {
    fn is_empty(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.patronymic.is_empty()
            && self.birth_date.is_empty()
            && self.age == 0
            && self.phone.is_empty()
            && self.email.is_empty()
    }
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}
