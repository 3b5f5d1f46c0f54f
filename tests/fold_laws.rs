//! Property-based tests for the folds and derived operations.
//!
//! These tests verify the relationships between the right fold, the left
//! fold and the operations built from them.

use listfold::compose::{compose, flip};
use listfold::fold::{
    append, drop, drop_while, filter, fold_left, fold_right, fold_right_stack_safe,
    fold_right_trampolined, length, map, product, reverse, set_head, sum, tail,
};
use listfold::persistent::PersistentList;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Generates a `PersistentList<i64>` whose sums and products cannot overflow.
fn bounded_list() -> impl Strategy<Value = PersistentList<i64>> {
    prop::collection::vec(-1_000_i64..1_000, 0..12).prop_map(|vector| vector.into_iter().collect())
}

/// Generates a `PersistentList<i64>` of small factors whose product fits in `i64`.
fn small_factor_list() -> impl Strategy<Value = PersistentList<i64>> {
    prop::collection::vec(-9_i64..10, 0..12).prop_map(|vector| vector.into_iter().collect())
}

/// Generates a `PersistentList<i32>` with up to 50 arbitrary elements.
fn any_list() -> impl Strategy<Value = PersistentList<i32>> {
    prop::collection::vec(any::<i32>(), 0..50).prop_map(|vector| vector.into_iter().collect())
}

proptest! {
    // =========================================================================
    // Right fold / left fold duality
    // =========================================================================

    #[test]
    fn prop_fold_right_is_fold_left_of_reverse_for_sum(list in bounded_list()) {
        let add = |element: &i64, accumulator: i64| element + accumulator;
        prop_assert_eq!(
            fold_right(&list, 0, add),
            fold_left(&reverse(&list), 0, flip(add))
        );
    }

    #[test]
    fn prop_fold_right_is_fold_left_of_reverse_for_product(list in small_factor_list()) {
        let multiply = |element: &i64, accumulator: i64| element * accumulator;
        prop_assert_eq!(
            fold_right(&list, 1, multiply),
            fold_left(&reverse(&list), 1, flip(multiply))
        );
    }

    #[test]
    fn prop_fold_right_is_fold_left_of_reverse_for_subtraction(list in bounded_list()) {
        let subtract = |element: &i64, accumulator: i64| element - accumulator;
        prop_assert_eq!(
            fold_right(&list, 0, subtract),
            fold_left(&reverse(&list), 0, flip(subtract))
        );
    }

    #[test]
    fn prop_right_fold_variants_agree(list in any_list()) {
        let render = |element: &i32, accumulator: String| format!("{element}:{accumulator}");
        let expected = fold_right(&list, String::new(), render);
        prop_assert_eq!(&fold_right_stack_safe(&list, String::new(), render), &expected);
        prop_assert_eq!(&fold_right_trampolined(&list, String::new(), render), &expected);
    }

    // =========================================================================
    // Derived operations
    // =========================================================================

    #[test]
    fn prop_length_matches_len(list in any_list()) {
        prop_assert_eq!(length(&list), list.len());
    }

    #[test]
    fn prop_sum_matches_iterator(list in bounded_list()) {
        prop_assert_eq!(sum(&list), list.iter().sum::<i64>());
    }

    #[test]
    fn prop_product_matches_iterator(list in small_factor_list()) {
        prop_assert_eq!(product(&list), list.iter().product::<i64>());
    }

    #[test]
    fn prop_map_composition(list in any_list()) {
        let first = |value: i32| i64::from(value) + 1;
        let second = |value: i64| value * 2;
        prop_assert_eq!(map(&map(&list, first), second), map(&list, compose(first, second)));
    }

    #[test]
    fn prop_map_preserves_length(list in any_list()) {
        prop_assert_eq!(map(&list, |value: i32| value.to_string()).len(), list.len());
    }

    #[test]
    fn prop_filter_always_true_is_identity(list in any_list()) {
        prop_assert_eq!(filter(&list, |_| true), list);
    }

    #[test]
    fn prop_filter_always_false_is_empty(list in any_list()) {
        prop_assert!(filter(&list, |_| false).is_empty());
    }

    #[test]
    fn prop_filter_keeps_relative_order(list in any_list()) {
        let expected: PersistentList<i32> = list.iter().copied().filter(|value| value % 3 == 0).collect();
        prop_assert_eq!(filter(&list, |value| value % 3 == 0), expected);
    }

    #[test]
    fn prop_append_adds_last_element(list in any_list(), element: i32) {
        let appended = append(&list, element);
        prop_assert_eq!(appended.len(), list.len() + 1);
        prop_assert_eq!(appended.iter().last(), Some(&element));
        prop_assert_eq!(reverse(&appended), reverse(&list).cons(element));
    }

    #[test]
    fn prop_drop_while_leaves_failing_head(list in any_list(), threshold: i32) {
        let remaining = drop_while(&list, |value| *value < threshold);
        if let Some(head) = remaining.head() {
            prop_assert!(*head >= threshold);
        }
        let dropped = list.len() - remaining.len();
        prop_assert!(list.iter().take(dropped).all(|value| *value < threshold));
    }

    #[test]
    fn prop_drop_matches_skip(list in any_list(), count in 0_usize..60) {
        let expected: PersistentList<i32> = list.iter().copied().skip(count).collect();
        prop_assert_eq!(drop(count, &list), expected);
    }

    #[test]
    fn prop_set_head_then_tail_is_tail(list in any_list(), element: i32) {
        prop_assert_eq!(tail(&set_head(element, &list)), tail(&list));
        let replaced = set_head(element, &list);
        prop_assert_eq!(replaced.head(), Some(&element));
    }

    #[test]
    fn prop_reverse_is_involution(list in any_list()) {
        prop_assert_eq!(reverse(&reverse(&list)), list);
    }
}
