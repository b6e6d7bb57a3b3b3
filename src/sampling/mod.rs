//! Module for the constrained sampler: `count` uniform draws from a record
//! collection, with or without replacement.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::FixtureRecord;
use crate::error::Error;
use crate::fixtures::{self, Fixture};


/// Whether one element may be drawn more than once within a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    Allowed,
    Forbidden,
}

/// Draws `count` elements uniformly from `pool`.
///
/// With [`DuplicatePolicy::Allowed`] every draw is independent and the same
/// element may appear repeatedly. With [`DuplicatePolicy::Forbidden`] each
/// element is drawn at most once; requesting more elements than the pool holds
/// fails with [`Error::InsufficientPopulation`].
///
/// The caller's slice is never mutated: unique draws happen over a private
/// index pool. `count == 0` yields an empty result under either policy.
pub fn sample<T: Clone>(
    pool: &[T],
    count: usize,
    policy: DuplicatePolicy,
    rng: &mut impl Rng,
) -> Result<Vec<T>, Error> {
    if count == 0 {
        return Ok(Vec::new());
    }
    match policy {
        DuplicatePolicy::Allowed => {
            // A draw from an empty pool cannot produce an element, replacement or not.
            if pool.is_empty() {
                return Err(Error::InsufficientPopulation {
                    requested: count,
                    available: 0,
                });
            }
            Ok((0..count)
                .map(|_| pool[rng.gen_range(0..pool.len())].clone())
                .collect())
        }
        DuplicatePolicy::Forbidden => {
            if count > pool.len() {
                return Err(Error::InsufficientPopulation {
                    requested: count,
                    available: pool.len(),
                });
            }
            let mut remaining: Vec<usize> = (0..pool.len()).collect();
            let mut drawn = Vec::with_capacity(count);
            for _ in 0..count {
                let slot = rng.gen_range(0..remaining.len());
                let index = remaining.swap_remove(slot);
                drawn.push(pool[index].clone());
            }
            Ok(drawn)
        }
    }
}

/// Draws a single element uniformly from `pool`.
pub fn sample_one<T: Clone>(pool: &[T], rng: &mut impl Rng) -> Result<T, Error> {
    pool.choose(rng)
        .cloned()
        .ok_or(Error::InsufficientPopulation {
            requested: 1,
            available: 0,
        })
}

/// Convenience entry point: loads the fixture's collection, then delegates to
/// [`sample`]. Load failures propagate unchanged.
pub fn sample_fixture(
    fixture: &Fixture,
    count: usize,
    policy: DuplicatePolicy,
    rng: &mut impl Rng,
) -> Result<Vec<FixtureRecord>, Error> {
    let records = fixtures::load(fixture)?;
    sample(&records, count, policy, rng)
}

/// Loads the fixture and draws a single record from it.
pub fn sample_fixture_one(
    fixture: &Fixture,
    rng: &mut impl Rng,
) -> Result<FixtureRecord, Error> {
    let records = fixtures::load(fixture)?;
    sample_one(&records, rng)
}
