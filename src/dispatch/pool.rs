//! Worker pool: one Tokio task per chunk.

use std::sync::Arc;

use tokio::task::JoinSet;

use super::progress::Progress;
use super::store::{Outcome, ResultStore};
use super::unit::WorkUnit;
use crate::error_handling::{DispatchError, TransportError};
use crate::submit::{LeadClient, Reply};

/// What a worker does when a lead cannot be sent at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportPolicy {
    /// Record an `error` outcome for the lead and keep going.
    RecordAndContinue,
    /// Stop every worker and fail the run.
    Abort,
}

impl TransportPolicy {
    pub fn from_fail_fast(fail_fast: bool) -> Self {
        if fail_fast {
            TransportPolicy::Abort
        } else {
            TransportPolicy::RecordAndContinue
        }
    }
}

/// Runs every chunk on its own task and waits for all of them.
///
/// Within a chunk, leads are sent strictly one after another. There is no
/// work stealing, so the slowest chunk bounds the run time. Each sent lead
/// advances `progress` by one.
///
/// # Errors
///
/// Returns `DispatchError::Transport` (after aborting the other workers) when
/// `policy` is [`TransportPolicy::Abort`] and a lead hits a transport error,
/// and `DispatchError::WorkerFailed` if a task panics.
pub async fn run_workers(
    chunks: Vec<Vec<WorkUnit>>,
    client: Arc<LeadClient>,
    progress: &Progress,
    policy: TransportPolicy,
) -> Result<ResultStore, DispatchError> {
    let store = Arc::new(ResultStore::new());
    let mut workers = JoinSet::new();

    for (worker_id, chunk) in chunks.into_iter().enumerate() {
        workers.spawn(process_chunk(
            worker_id,
            chunk,
            Arc::clone(&client),
            Arc::clone(&store),
            progress.clone(),
            policy,
        ));
    }
    log::debug!("Started {} workers", workers.len());

    while let Some(joined) = workers.join_next().await {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                workers.abort_all();
                return Err(DispatchError::Transport(e));
            }
            Err(e) => {
                workers.abort_all();
                return Err(DispatchError::WorkerFailed(e));
            }
        }
    }

    Arc::try_unwrap(store).map_err(|_| DispatchError::StoreStillShared)
}

async fn process_chunk(
    worker_id: usize,
    chunk: Vec<WorkUnit>,
    client: Arc<LeadClient>,
    store: Arc<ResultStore>,
    progress: Progress,
    policy: TransportPolicy,
) -> Result<(), TransportError> {
    log::debug!("Worker {} processing {} leads", worker_id, chunk.len());

    for WorkUnit { id, record, lead } in chunk {
        let reply = match client.send(&lead).await {
            Ok(reply) => reply,
            Err(e) if policy == TransportPolicy::Abort => {
                log::error!("Worker {} aborting on lead {}: {}", worker_id, id, e);
                return Err(e);
            }
            Err(e) => {
                log::warn!("Failed to send lead {}: {}", id, e);
                Reply::transport_error(&e)
            }
        };
        store.insert(id, Outcome { record, lead, reply });
        progress.advance();
    }

    log::debug!("Worker {} finished", worker_id);
    Ok(())
}
