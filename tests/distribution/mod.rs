//! Statistical checks of the random fallback: a dimension is picked uniformly
//! first, then a value uniformly within it.

use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use shipping_fixtures::{UsState, catalog};

const TRIALS: usize = 18_000;

#[test]
fn random_fallback_covers_every_category_near_uniformly() {
    let mut rng = StdRng::seed_from_u64(1234);

    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    for _ in 0..TRIALS {
        let fixture = catalog::resolve(None, None, &mut rng);
        *counts.entry(fixture.name()).or_default() += 1;
    }

    // Two dimensions of nine values each: every fixture should land near 1/18.
    assert_eq!(counts.len(), 18);
    let expected = TRIALS / 18;
    for (name, count) in counts {
        assert!(
            count > expected * 7 / 10 && count < expected * 13 / 10,
            "{name} drawn {count} times, expected about {expected}"
        );
    }
}

#[test]
fn dimensions_are_equally_likely_before_values() {
    let mut rng = StdRng::seed_from_u64(5678);

    let mut state_draws = 0usize;
    for _ in 0..TRIALS {
        let fixture = catalog::resolve(None, None, &mut rng);
        if UsState::ALL
            .iter()
            .any(|state| catalog::state_addresses(*state) == fixture)
        {
            state_draws += 1;
        }
    }

    let half = TRIALS / 2;
    assert!(
        state_draws > half * 9 / 10 && state_draws < half * 11 / 10,
        "state dimension drawn {state_draws} times, expected about {half}"
    );
}
