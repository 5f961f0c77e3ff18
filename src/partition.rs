//! Splits the catalog's row range into contiguous per-worker slices.

use crate::error::Error;

/// A worker's share of the pair sweep.
///
/// The worker owns the outer-loop rows `[row_start, row_end)` and scans the
/// full inner index range for each of them. Assignments are derived
/// deterministically from `(n_rows, n_workers)` and are immutable once
/// computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkAssignment {
    pub worker_id: usize,
    pub row_start: usize,
    pub row_end: usize,
}

/// Divide `[0, n_rows)` into `n_workers` contiguous, non-overlapping slices.
///
/// The nominal slice length is `n_rows / n_workers`; the last worker's slice
/// is extended to `n_rows` so the remainder from integer division is never
/// silently dropped.
///
/// A worker count of zero, or one that exceeds `n_rows` (which would leave
/// some worker with zero rows), is rejected with an invalid-configuration
/// error.
pub fn partition_rows(n_rows: usize, n_workers: usize) -> Result<Vec<WorkAssignment>, Error> {
    if n_workers == 0 || n_workers > n_rows {
        return Err(Error::invalid_configuration(n_workers, n_rows));
    }

    let nominal_len = n_rows / n_workers;
    // we could be smarter about how we divide the extra work
    // -> right now, we stick it all with the last worker
    let assignments = (0..n_workers)
        .map(|worker_id| {
            let row_start = nominal_len * worker_id;
            let row_end = if (worker_id + 1) == n_workers {
                n_rows
            } else {
                row_start + nominal_len
            };
            WorkAssignment {
                worker_id,
                row_start,
                row_end,
            }
        })
        .collect();
    Ok(assignments)
}
