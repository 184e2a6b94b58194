//! Property-based tests using proptest
//!
//! Random operation sequences checked against a plain `Vec` model: whatever
//! the structure does internally, extraction order, length accounting, and
//! the meld/adjust/delete contracts must match the model.

use pairing_heap::{HeapError, PairingHeap, Policy};
use proptest::prelude::*;

fn sorted(mut values: Vec<i32>) -> Vec<i32> {
    values.sort_unstable();
    values
}

proptest! {
    #[test]
    fn prop_extract_all_is_sorted(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut heap: PairingHeap<i32> = values.iter().copied().collect();
        prop_assert_eq!(heap.len(), values.len());
        prop_assert_eq!(heap.extract_all(), sorted(values));
        prop_assert!(heap.is_empty());
    }

    #[test]
    fn prop_reversed_extracts_descending(values in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut heap = PairingHeap::with_policy(Policy::natural().reversed());
        heap.extend(values.iter().copied());

        let mut expected = sorted(values);
        expected.reverse();
        prop_assert_eq!(heap.extract_all(), expected);
    }

    #[test]
    fn prop_push_pop_tracks_model(ops in prop::collection::vec((any::<bool>(), any::<i32>()), 1..200)) {
        let mut heap = PairingHeap::new();
        let mut model: Vec<i32> = Vec::new();

        for (should_pop, value) in ops {
            if should_pop && !model.is_empty() {
                let popped = heap.extract().unwrap();
                prop_assert_eq!(popped, *model.iter().min().unwrap());
                let pos = model.iter().position(|&v| v == popped).unwrap();
                model.remove(pos);
            } else {
                heap.insert(value);
                model.push(value);
            }

            prop_assert_eq!(heap.len(), model.len());
            prop_assert_eq!(heap.is_empty(), model.is_empty());
            if let Some(min) = model.iter().min() {
                prop_assert_eq!(*heap.peek().unwrap(), *min);
            } else {
                prop_assert_eq!(heap.peek().map(|r| *r), Err(HeapError::Underflow));
            }
        }
    }

    #[test]
    fn prop_meld_is_sorted_union(
        left in prop::collection::vec(any::<i32>(), 0..100),
        right in prop::collection::vec(any::<i32>(), 0..100),
    ) {
        let mut a: PairingHeap<i32> = left.iter().copied().collect();
        let mut b: PairingHeap<i32> = right.iter().copied().collect();

        a.meld(&mut b).unwrap();

        prop_assert!(b.is_empty());
        prop_assert_eq!(b.len(), 0);

        let mut expected = left;
        expected.extend(right);
        prop_assert_eq!(a.extract_all(), sorted(expected));
    }

    #[test]
    fn prop_adjust_key_improving_preserves_order(
        values in prop::collection::vec(any::<i32>(), 1..100),
        adjustments in prop::collection::vec((any::<prop::sample::Index>(), any::<i32>()), 0..50),
    ) {
        let mut heap = PairingHeap::new();
        let mut model = values.clone();
        let handles: Vec<_> = values.iter().map(|&v| heap.insert(v)).collect();

        for (index, new_value) in adjustments {
            let i = index.index(model.len());
            if new_value <= model[i] {
                heap.adjust_key(&handles[i], new_value).unwrap();
                model[i] = new_value;
            } else {
                prop_assert_eq!(
                    heap.adjust_key(&handles[i], new_value),
                    Err(HeapError::WrongAdjustKeyDirection)
                );
            }
            prop_assert_eq!(*heap.peek().unwrap(), *model.iter().min().unwrap());
        }

        prop_assert_eq!(heap.extract_all(), sorted(model));
    }

    #[test]
    fn prop_delete_removes_exactly_one(
        values in prop::collection::vec(any::<i32>(), 1..100),
        victim in any::<prop::sample::Index>(),
    ) {
        let mut heap = PairingHeap::new();
        let handles: Vec<_> = values.iter().map(|&v| heap.insert(v)).collect();

        let i = victim.index(values.len());
        prop_assert_eq!(heap.delete(&handles[i]), Ok(values[i]));
        prop_assert_eq!(heap.len(), values.len() - 1);

        // A second delete through the same handle must fail cleanly.
        prop_assert_eq!(heap.delete(&handles[i]), Err(HeapError::WrongHeap));

        let mut expected = values;
        expected.remove(i);
        prop_assert_eq!(heap.extract_all(), sorted(expected));
    }

    #[test]
    fn prop_extract_n_is_sorted_prefix(
        values in prop::collection::vec(any::<i32>(), 0..100),
        n in 0usize..120,
    ) {
        let mut heap: PairingHeap<i32> = values.iter().copied().collect();
        let expected = sorted(values);

        if n > expected.len() {
            prop_assert_eq!(heap.extract_n(n), Err(HeapError::Underflow));
            prop_assert_eq!(heap.len(), expected.len());
            prop_assert_eq!(heap.extract_all(), expected);
        } else {
            prop_assert_eq!(heap.extract_n(n), Ok(expected[..n].to_vec()));
            prop_assert_eq!(heap.extract_all(), expected[n..].to_vec());
        }
    }

    #[test]
    fn prop_values_is_full_snapshot(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let heap: PairingHeap<i32> = values.iter().copied().collect();
        prop_assert_eq!(sorted(heap.values()), sorted(values));
    }
}
