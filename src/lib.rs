/*!
Computes running statistics (count, mean, minimum, maximum) over the angular
separation of every unordered pair of objects in a star catalog, with the
O(N²) pair sweep divided among a configurable number of worker threads.

# High-Level: the pair sweep

Given a catalog of N objects, there are `N*(N-1)/2` unordered pairs. Each
worker owns a contiguous slice of "outer" row indices but scans the full
inner index range, so the same unordered pair is reachable from two
different workers. A shared claim matrix (the [`PairTracker`]) converts that
double-reachability into an exactly-once guarantee: whichever worker claims
a pair first computes its great-circle separation and commits it to the
shared [`Aggregator`].

The final [`AggregateState`] is invariant to the worker count (up to
floating-point rounding of the running mean): threads change how fast the
sweep runs, never which pairs contribute.

# Example

```
use angsep::{Catalog, CelestialObject, Engine};

let catalog = Catalog::new(vec![
    CelestialObject { id: 0, right_ascension: 0.0, declination: 0.0 },
    CelestialObject { id: 1, right_ascension: 0.0, declination: 90.0 },
    CelestialObject { id: 2, right_ascension: 180.0, declination: 0.0 },
]);
let stats = Engine::new(&catalog, 1).run().unwrap();
assert_eq!(stats.count, 3);
assert!((stats.mean - 120.0).abs() < 1e-9);
```
*/

#![deny(rustdoc::broken_intra_doc_links)]

// inform build-system of the modules in this package
mod aggregate;
mod catalog;
mod distance;
mod engine;
mod error;
mod partition;
mod tracker;

// pull in the symbols that are visible outside of the package
pub use aggregate::{AggregateState, Aggregator};
pub use catalog::{Catalog, CelestialObject};
pub use distance::angular_separation_deg;
pub use engine::Engine;
pub use error::Error;
pub use partition::{WorkAssignment, partition_rows};
pub use tracker::PairTracker;
