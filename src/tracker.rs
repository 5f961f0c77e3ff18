//! Tracks which unordered pairs have already been claimed by a worker.
//!
//! Each worker's outer loop covers a disjoint row slice, but its inner loop
//! scans the *entire* index range, so the unordered pair `{i, j}` is
//! reachable twice: as `(i, j)` from the worker that owns row `i` and as
//! `(j, i)` from the worker that owns row `j`. The tracker turns that
//! double-reachability into an exactly-once guarantee.

use ndarray::Array2;
use std::sync::Mutex;

/// A symmetric N×N boolean claim matrix.
///
/// There is some benefit to wrapping `Array2` here even though the type is
/// small: it helps contain all references to the ndarray package to a
/// single file.
///
/// # Memory
/// The matrix is dense: N² bytes (~900MB at N ≈ 30,000). Restricting each
/// worker's inner loop to `j > i` within its own slice would eliminate the
/// tracker entirely, but the dense table keeps the claim protocol trivially
/// correct for *any* partitioning and is what the coverage tests inspect;
/// we accept the trade-off.
pub struct PairTracker {
    claimed: Mutex<Array2<bool>>,
}

impl PairTracker {
    /// allocate an all-false claim matrix for `n_objects` catalog rows
    pub fn new(n_objects: usize) -> Self {
        PairTracker {
            claimed: Mutex::new(Array2::from_elem((n_objects, n_objects), false)),
        }
    }

    /// Atomically check-and-mark the unordered pair `{i, j}`.
    ///
    /// Returns `true` if the pair was unclaimed: both orientations are now
    /// marked and the caller is responsible for computing and committing
    /// this pair's distance. Returns `false` if another caller already
    /// claimed it. Two workers racing on the same pair can never both
    /// receive `true`: the check and the mark happen under one lock
    /// acquisition.
    ///
    /// The lock is held per claim, never across a worker's whole row range.
    pub fn try_claim(&self, i: usize, j: usize) -> bool {
        debug_assert_ne!(i, j, "the diagonal is not a pair");
        let mut claimed = match self.claimed.lock() {
            Ok(guard) => guard,
            // a poisoned matrix only ever holds fully-applied marks (both
            // orientations are written before the guard drops)
            Err(poisoned) => poisoned.into_inner(),
        };
        if claimed[(i, j)] {
            false
        } else {
            claimed[(i, j)] = true;
            claimed[(j, i)] = true;
            true
        }
    }

    /// whether `{i, j}` has been claimed
    ///
    /// # Notes
    /// This is primarily used for testing (the claim protocol itself only
    /// needs [`PairTracker::try_claim`]).
    pub fn is_claimed(&self, i: usize, j: usize) -> bool {
        match self.claimed.lock() {
            Ok(guard) => guard[(i, j)],
            Err(poisoned) => poisoned.into_inner()[(i, j)],
        }
    }

    /// `true` when every off-diagonal entry is marked and every diagonal
    /// entry is not
    ///
    /// # Notes
    /// This is primarily used for testing: after a full sweep it asserts
    /// that no pair was skipped and no object was paired with itself.
    pub fn fully_swept(&self) -> bool {
        let claimed = match self.claimed.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        claimed
            .indexed_iter()
            .all(|((i, j), &flag)| flag == (i != j))
    }

    /// the number of catalog rows the matrix was sized for
    pub fn n_objects(&self) -> usize {
        match self.claimed.lock() {
            Ok(guard) => guard.nrows(),
            Err(poisoned) => poisoned.into_inner().nrows(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn claim_is_exactly_once() {
        let tracker = PairTracker::new(4);
        assert!(tracker.try_claim(1, 2));
        // neither orientation can be claimed again
        assert!(!tracker.try_claim(1, 2));
        assert!(!tracker.try_claim(2, 1));
        // unrelated pairs are unaffected
        assert!(tracker.try_claim(0, 3));
    }

    #[test]
    fn claim_marks_both_orientations() {
        let tracker = PairTracker::new(3);
        tracker.try_claim(0, 2);
        assert!(tracker.is_claimed(0, 2));
        assert!(tracker.is_claimed(2, 0));
        assert!(!tracker.is_claimed(0, 1));
    }

    #[test]
    fn fully_swept_detects_gaps() {
        let tracker = PairTracker::new(3);
        tracker.try_claim(0, 1);
        tracker.try_claim(0, 2);
        assert!(!tracker.fully_swept());
        tracker.try_claim(2, 1);
        assert!(tracker.fully_swept());
    }

    #[test]
    fn racing_claims_grant_one_winner() {
        let tracker = PairTracker::new(2);
        let n_racers = 8;
        let n_wins: usize = thread::scope(|scope| {
            let handles: Vec<_> = (0..n_racers)
                .map(|k| {
                    let tracker = &tracker;
                    // race both orientations
                    scope.spawn(move || tracker.try_claim(k % 2, 1 - (k % 2)))
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap() as usize)
                .sum()
        });
        assert_eq!(n_wins, 1);
    }
}
