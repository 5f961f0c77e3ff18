//! Running statistics over committed pair distances.
//!
//! The original formulation of this problem kept mean/min/max in ambient
//! globals guarded inline by a lock. Here the whole state is an owned value
//! with a single mutating entry point, so tests can run independent engines
//! concurrently.

use std::sync::Mutex;

/// The reduced statistics of a pair sweep.
///
/// # Invariants
/// - `count` equals the number of pairs committed so far
/// - `mean` is the arithmetic mean of all committed distances, maintained
///   as an online (streaming) update so the accumulated rounding error is
///   bounded independent of the pair count
/// - until `count >= 1`, `min`/`max` sit at their sentinels (`+inf`/`-inf`);
///   afterwards `min <= d <= max` for every committed distance `d`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateState {
    pub count: u64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl AggregateState {
    /// the empty state (nothing committed yet)
    ///
    /// `min` starts at `+inf` and `max` at `-inf` so that the first
    /// committed distance seeds both. (Seeding `max` with the smallest
    /// positive float, as one source variant did, under-reports the true
    /// maximum whenever every distance is smaller than 1.)
    pub fn new() -> Self {
        AggregateState {
            count: 0,
            mean: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// fold one distance into the state
    ///
    /// All four fields are updated together: a reader of the returned state
    /// can never observe `count` incremented without `mean`/`min`/`max`
    /// reflecting the same pair.
    pub fn update(&mut self, distance: f64) {
        self.count += 1;
        // Welford-style running mean
        self.mean += (distance - self.mean) / (self.count as f64);
        if distance < self.min {
            self.min = distance;
        }
        if distance > self.max {
            self.max = distance;
        }
    }
}

impl Default for AggregateState {
    fn default() -> Self {
        AggregateState::new()
    }
}

/// The shared statistics object — the only point of contention between
/// workers.
///
/// [`Aggregator::commit`] takes the lock once per pair; the lock is never
/// held across distance computation or loop iteration. There is
/// deliberately no read API while a sweep is running: the final state is
/// read with [`Aggregator::into_state`] after every worker has been joined
/// (the join establishes the happens-after edge, so no further
/// synchronization is needed at that point).
pub struct Aggregator {
    state: Mutex<AggregateState>,
}

impl Aggregator {
    pub fn new() -> Self {
        Aggregator {
            state: Mutex::new(AggregateState::new()),
        }
    }

    /// fold one distance into the shared state, under a single critical
    /// section
    pub fn commit(&self, distance: f64) {
        let mut state = match self.state.lock() {
            Ok(guard) => guard,
            // update never unwinds mid-write; a poisoned state is intact
            Err(poisoned) => poisoned.into_inner(),
        };
        state.update(distance);
    }

    /// recover the final statistics (call after all workers have joined)
    pub fn into_state(self) -> AggregateState {
        match self.state.into_inner() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Aggregator::new()
    }
}
