//! Lead submission to the Exbico API.
//!
//! One POST per lead. The reply is reduced to a [`Reply`] that the worker
//! pool stores against the lead.

mod client;
mod reply;
mod response;

pub use client::LeadClient;
pub use reply::{Reply, SendStatus};
