use crate::config::check_threads;
use crate::error_handling::ConfigError;

/// Splits `units` into at most `workers` contiguous chunks.
///
/// Each chunk gets `len / workers` units and the last one also takes the
/// remainder. When there are fewer units than workers, everything goes into a
/// single chunk. An empty input gives no chunks.
///
/// # Errors
///
/// Returns a `ConfigError` if `workers` is outside `1..=MAX_THREADS`; nothing
/// is split in that case.
pub fn distribute<T>(units: Vec<T>, workers: usize) -> Result<Vec<Vec<T>>, ConfigError> {
    check_threads(workers)?;
    if units.is_empty() {
        return Ok(Vec::new());
    }

    let chunk_size = units.len() / workers;
    if chunk_size == 0 {
        return Ok(vec![units]);
    }

    let mut chunks = Vec::with_capacity(workers);
    let mut rest = units;
    for _ in 1..workers {
        let tail = rest.split_off(chunk_size);
        chunks.push(rest);
        rest = tail;
    }
    chunks.push(rest);
    Ok(chunks)
}
