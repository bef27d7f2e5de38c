// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Algebraic laws of the query operators, checked over generated inputs.

use proptest::prelude::*;
use sequery::prelude::*;

proptest! {
    #[test]
    fn select_preserves_length_and_positions(
        values in proptest::collection::vec(any::<i32>(), 0..64),
    ) {
        let mapped = values.clone().into_query().select(|n| i64::from(n) * 3).to_vec();

        prop_assert_eq!(mapped.len(), values.len());
        for (index, value) in values.iter().enumerate() {
            prop_assert_eq!(mapped[index], i64::from(*value) * 3);
        }
    }

    #[test]
    fn take_then_take_equals_take_min(
        values in proptest::collection::vec(any::<i32>(), 0..64),
        n in 0usize..80,
        m in 0usize..80,
    ) {
        let chained = values.clone().into_query().take(n).take(m).to_vec();
        let direct = values.into_query().take(n.min(m)).to_vec();

        prop_assert_eq!(chained, direct);
    }

    #[test]
    fn skip_then_skip_equals_skip_sum(
        values in proptest::collection::vec(any::<i32>(), 0..64),
        n in 0usize..40,
        m in 0usize..40,
    ) {
        let chained = values.clone().into_query().skip(n).skip(m).to_vec();
        let direct = values.into_query().skip(n + m).to_vec();

        prop_assert_eq!(chained, direct);
    }

    #[test]
    fn distinct_is_idempotent(
        values in proptest::collection::vec(0i32..8, 0..64),
    ) {
        let once = values.clone().into_query().distinct().to_vec();
        let twice = values.into_query().distinct().distinct().to_vec();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn order_by_matches_stable_std_sort(
        values in proptest::collection::vec(0i32..8, 0..64),
    ) {
        let ordered = values.clone().into_query().order_by(|n| *n).to_vec();

        let mut expected = values;
        expected.sort();
        prop_assert_eq!(ordered, expected);
    }

    #[test]
    fn batch_round_trips_through_flatten(
        values in proptest::collection::vec(any::<i32>(), 0..64),
        size in 1usize..10,
    ) {
        let chunks = values.clone().into_query().batch(size).unwrap().to_vec();

        for chunk in chunks.iter().rev().skip(1) {
            prop_assert_eq!(chunk.len(), size);
        }
        let flattened: Vec<i32> = chunks.into_iter().flatten().collect();
        prop_assert_eq!(flattened, values);
    }
}
