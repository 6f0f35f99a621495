//! Lead payload model and input-row normalization.

mod date;
mod model;
mod normalize;

pub use date::normalize_date;
pub use model::{Client, Lead, Location, LocationName, Passport, Product};
pub use normalize::prepare_lead;
