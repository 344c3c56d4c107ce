//! Random selection of documents.
//!
//! The random source is always passed in. The CLI seeds a [`StdRng`] from
//! `--seed` or from the OS; tests use a fixed seed to get exact permutations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::WeekmenuError;

/// Pick `count` distinct items uniformly at random.
///
/// Runs a Fisher-Yates shuffle over a copy of `items`, stopping after the
/// first `count` positions: position `i` is swapped with a uniformly chosen
/// position in `i..len`. Every ordered selection of `count` items is equally
/// likely and no item is picked twice.
///
/// # Errors
///
/// [`WeekmenuError::NotEnoughDocuments`] when `count > items.len()`.
pub fn select_random<T, R>(items: &[T], count: usize, rng: &mut R) -> Result<Vec<T>, WeekmenuError>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if count > items.len() {
        return Err(WeekmenuError::NotEnoughDocuments {
            requested: count,
            available: items.len(),
        });
    }

    let mut pool = items.to_vec();
    for i in 0..count {
        let j = rng.random_range(i..pool.len());
        pool.swap(i, j);
    }

    pool.truncate(count);
    Ok(pool)
}

/// Build the random source for a selection: seeded when `seed` is given,
/// otherwise from OS entropy.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
