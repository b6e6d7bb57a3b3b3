//! Property tests for the constrained sampler.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use shipping_fixtures::sampling::{DuplicatePolicy, sample};

proptest! {
    #[test]
    fn unique_samples_are_distinct_members(
        pool in prop::collection::hash_set(any::<u32>(), 0..40),
        seed in any::<u64>(),
        count_fraction in 0.0f64..=1.0,
    ) {
        let pool: Vec<u32> = pool.into_iter().collect();
        let count = (pool.len() as f64 * count_fraction) as usize;
        let mut rng = StdRng::seed_from_u64(seed);

        let drawn = sample(&pool, count, DuplicatePolicy::Forbidden, &mut rng).unwrap();

        prop_assert_eq!(drawn.len(), count);
        let mut deduped = drawn.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), count);
        prop_assert!(drawn.iter().all(|item| pool.contains(item)));
    }

    #[test]
    fn oversized_unique_requests_fail(
        pool in prop::collection::vec(any::<u32>(), 0..20),
        seed in any::<u64>(),
        extra in 1usize..10,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = sample(&pool, pool.len() + extra, DuplicatePolicy::Forbidden, &mut rng);
        prop_assert!(result.is_err());
    }

    #[test]
    fn replacement_samples_are_members_and_leave_the_pool_alone(
        pool in prop::collection::vec(any::<u32>(), 1..20),
        seed in any::<u64>(),
        count in 0usize..60,
    ) {
        let before = pool.clone();
        let mut rng = StdRng::seed_from_u64(seed);

        let drawn = sample(&pool, count, DuplicatePolicy::Allowed, &mut rng).unwrap();

        prop_assert_eq!(drawn.len(), count);
        prop_assert!(drawn.iter().all(|item| pool.contains(item)));
        prop_assert_eq!(pool, before);
    }
}
