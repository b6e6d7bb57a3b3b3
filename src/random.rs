//! Module for scalar randomness helpers used by the payload assemblers.

use rand::Rng;
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;

/// Uniform member of a definition-time constant table.
pub fn pick<T: Copy>(values: &[T], rng: &mut impl Rng) -> T {
    *values.choose(rng).expect("category tables are non-empty")
}

pub fn bool_value(rng: &mut impl Rng) -> bool {
    rng.gen_bool(0.5)
}

/// Uniform integer in `min..=max`.
pub fn int_in_range(min: i64, max: i64, rng: &mut impl Rng) -> i64 {
    rng.gen_range(min..=max)
}

/// Uniform float in `min..max`.
pub fn float_in_range(min: f64, max: f64, rng: &mut impl Rng) -> f64 {
    rng.gen_range(min..max)
}

pub fn alphanumeric_string(length: usize, rng: &mut impl Rng) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
