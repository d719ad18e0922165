//! Shared helpers for swapcost benchmark suites.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use swapcost_kernel::layout::Layout;

/// The sorted sequence `1..=n` as a layout.
///
/// # Panics
///
/// Panics if `n` does not fit in `i64` (unreachable for bench sizes).
#[must_use]
pub fn sorted_layout(n: usize) -> Layout {
    Layout::from_values((1..=i64::try_from(n).expect("bench size fits i64")).collect())
}

/// A seeded shuffle of `1..=n` as a layout. Same seed, same fixture.
///
/// # Panics
///
/// Panics if `n` does not fit in `i64` (unreachable for bench sizes).
#[must_use]
pub fn scrambled_layout(n: usize, seed: u64) -> Layout {
    let mut values: Vec<i64> = (1..=i64::try_from(n).expect("bench size fits i64")).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    values.shuffle(&mut rng);
    Layout::from_values(values)
}
