//! Orchestrates the pair sweep across a fixed pool of worker threads.

use std::thread;

use crate::aggregate::{AggregateState, Aggregator};
use crate::catalog::{Catalog, CelestialObject};
use crate::distance::angular_separation_deg;
use crate::error::Error;
use crate::partition::{WorkAssignment, partition_rows};
use crate::tracker::PairTracker;

/// Drives the full pairwise reduction for one catalog.
///
/// The run proceeds through: partition the rows, spawn one worker per
/// assignment, sweep, join, hand back the [`AggregateState`]. Once started
/// the sweep runs every pair to completion or fails as a whole; there is no
/// cancellation and never a partial result.
pub struct Engine<'a> {
    objects: &'a [CelestialObject],
    n_workers: usize,
}

impl<'a> Engine<'a> {
    /// create an engine over `catalog` using `n_workers` threads
    ///
    /// The worker count is validated against the catalog size in
    /// [`Engine::run`] (not here) so a degenerate catalog can still produce
    /// its well-defined empty result.
    pub fn new(catalog: &'a Catalog, n_workers: usize) -> Self {
        Engine {
            objects: catalog.objects(),
            n_workers,
        }
    }

    /// Run the sweep to completion and return the final statistics.
    ///
    /// With fewer than 2 catalog rows there are no pairs: the empty state is
    /// returned immediately, for any worker count. Otherwise a worker count
    /// of zero or one exceeding the row count yields an
    /// invalid-configuration error before any thread is spawned, and a
    /// worker that dies mid-sweep turns into an engine-failure error after
    /// the join (the partially-filled statistics are discarded).
    ///
    /// NaN or infinite coordinates are not screened: they poison
    /// `mean`/`min`/`max` in the usual IEEE fashion.
    pub fn run(&self) -> Result<AggregateState, Error> {
        let n = self.objects.len();
        if n <= 1 {
            return Ok(AggregateState::new());
        }
        let assignments = partition_rows(n, self.n_workers)?;

        let tracker = PairTracker::new(n);
        let aggregator = Aggregator::new();

        let first_failure: Option<usize> = thread::scope(|scope| {
            let handles: Vec<_> = assignments
                .iter()
                .map(|assignment| {
                    let assignment = *assignment;
                    let objects = self.objects;
                    let tracker = &tracker;
                    let aggregator = &aggregator;
                    scope.spawn(move || sweep_rows(&assignment, objects, tracker, aggregator))
                })
                .collect();
            // join every handle (so the scope never re-raises a worker
            // panic on exit) and report the lowest-numbered casualty
            let mut first_failure = None;
            for (worker_id, handle) in handles.into_iter().enumerate() {
                if handle.join().is_err() && first_failure.is_none() {
                    first_failure = Some(worker_id);
                }
            }
            first_failure
        });

        if let Some(worker_id) = first_failure {
            return Err(Error::engine_failure(worker_id));
        }
        Ok(aggregator.into_state())
    }
}

/// One worker's sweep: every row in its assignment against the full inner
/// index range, claiming each unordered pair before computing it.
fn sweep_rows(
    assignment: &WorkAssignment,
    objects: &[CelestialObject],
    tracker: &PairTracker,
    aggregator: &Aggregator,
) {
    let n = objects.len();
    for i in assignment.row_start..assignment.row_end {
        for j in 0..n {
            if i == j {
                continue;
            }
            if tracker.try_claim(i, j) {
                let a = &objects[i];
                let b = &objects[j];
                let distance = angular_separation_deg(
                    a.right_ascension,
                    a.declination,
                    b.right_ascension,
                    b.declination,
                );
                aggregator.commit(distance);
            }
        }
    }
}
