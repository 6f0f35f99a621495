//! Concurrent lead submission.
//!
//! Leads are wrapped in [`WorkUnit`]s, split into one chunk per worker, and
//! each chunk is sent sequentially by its own Tokio task. Results land in a
//! shared [`ResultStore`] keyed by the unit id.

mod distribute;
mod pool;
mod progress;
mod store;
mod unit;

pub use distribute::distribute;
pub use pool::{run_workers, TransportPolicy};
pub use progress::Progress;
pub use store::{Outcome, ResultStore};
pub use unit::build_work_units;
