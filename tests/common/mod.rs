// the reason this is named mod.rs has to do with some complexities of how
// testing is handled
//
// we are following the advice of the rust book
// https://doc.rust-lang.org/book/ch11-03-test-organization.html#submodules-in-integration-tests

use angsep::{Catalog, CelestialObject};

use rand::distr::{Distribution, Uniform};
use rand_xoshiro::Xoshiro256PlusPlus;
use rand_xoshiro::rand_core::SeedableRng;

// based on numpy!
// https://numpy.org/doc/stable/reference/generated/numpy.isclose.html
pub fn isclose(actual: f64, ref_val: f64, rtol: f64, atol: f64) -> bool {
    let actual_nan = actual.is_nan();
    let ref_nan = ref_val.is_nan();
    if actual_nan || ref_nan {
        actual_nan && ref_nan
    } else {
        (actual - ref_val).abs() <= (atol + rtol * ref_val.abs())
    }
}

/// build a reproducible catalog of `n` objects scattered over the sphere
#[allow(dead_code)] // not every test file uses this
pub fn random_catalog(seed: u64, n: usize) -> Catalog {
    let mut my_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let ra_dist = Uniform::try_from(0.0..360.0).unwrap();
    let dec_dist = Uniform::try_from(-90.0..=90.0).unwrap();

    let objects = (0..n)
        .map(|k| CelestialObject {
            id: k as u32,
            right_ascension: ra_dist.sample(&mut my_rng),
            declination: dec_dist.sample(&mut my_rng),
        })
        .collect();
    Catalog::new(objects)
}
