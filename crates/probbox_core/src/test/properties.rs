#[cfg(test)]
mod test_properties {
    use proptest::prelude::*;

    use crate::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        Modify(Vec<(u8, Weight)>),
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            8 => prop::collection::vec((0u8..6, -40i32..40), 0..8).prop_map(Op::Modify),
            1 => Just(Op::Clear),
        ]
    }

    fn policies() -> impl Strategy<Value = UpdatePolicy> {
        prop_oneof![Just(UpdatePolicy::Absolute), Just(UpdatePolicy::Relative)]
    }

    fn assert_consistent(pool: &WeightedPool<u8>) -> Result<(), TestCaseError> {
        let sum: Weight = pool.iter().map(|entry| entry.weight).sum();
        prop_assert_eq!(pool.total_weight(), sum);
        prop_assert!(pool.total_weight() <= pool.capacity());
        prop_assert!(pool.iter().all(|entry| entry.weight > 0));
        for (index, entry) in pool.iter().enumerate() {
            prop_assert!(pool.iter().skip(index + 1).all(|other| other.content != entry.content));
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn total_matches_entries(
            policy in policies(),
            capacity in 0i32..200,
            ops in prop::collection::vec(op(), 1..30),
        ) {
            let settings = PoolSettings::new(policy).with_capacity(capacity);
            let mut pool = WeightedPool::<u8>::with_settings(settings);
            for op in ops {
                match op {
                    Op::Modify(changes) => {
                        let report = pool.modify(changes.iter().copied());
                        prop_assert_eq!(report.processed(), changes.len());
                    }
                    Op::Clear => pool.clear(),
                }
                assert_consistent(&pool)?;
            }
        }

        #[test]
        fn relative_batch_is_sequential(changes in prop::collection::vec((0u8..4, -20i32..20), 0..12)) {
            let mut batched = WeightedPool::<u8>::new();
            batched.modify(changes.iter().copied());

            let mut one_by_one = WeightedPool::<u8>::new();
            for change in changes.iter() {
                one_by_one.modify([*change]);
            }
            prop_assert_eq!(batched, one_by_one);
        }

        #[test]
        fn every_key_is_covered(weights in prop::collection::vec(1i32..10, 1..8)) {
            let mut pool = WeightedPool::<usize>::new();
            pool.modify(weights.iter().copied().enumerate());

            let mut hits = vec![0; weights.len()];
            for key in 0..pool.total_weight() {
                let item = pool.draw(Some(i64::from(key))).unwrap();
                hits[*item] += 1;
            }
            prop_assert_eq!(hits, weights);
        }

        #[test]
        fn rejected_pairs_change_nothing(weight in 1i32..100, extra in 1i32..100) {
            let settings = PoolSettings::default().with_capacity(weight);
            let mut pool = WeightedPool::<u8>::with_settings(settings);
            pool.modify([(0u8, weight)]);
            let before = pool.clone();

            let report = pool.modify([(1u8, extra), (0u8, -(weight + extra))]);
            prop_assert_eq!(report.rejected, 2);
            prop_assert_eq!(pool, before);
        }
    }
}
