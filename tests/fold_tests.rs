//! Example-based tests for the fold primitives and derived operations.
//!
//! Each test pins one documented input/output pair.

use listfold::fold::{
    append, drop, drop_while, filter, fold_left, fold_right, fold_right_stack_safe,
    fold_right_trampolined, increment_each, length, map, product, render_each, reverse, set_head,
    sum, tail,
};
use listfold::persistent::PersistentList;
use rstest::rstest;

fn strings(items: &[&str]) -> PersistentList<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

// =============================================================================
// length, sum, product
// =============================================================================

#[rstest]
fn test_length_of_four_elements() {
    assert_eq!(length(&PersistentList::from_slice(&[1, 2, 3, 4])), 4);
}

#[rstest]
fn test_sum_of_one_two_three() {
    assert_eq!(sum(&PersistentList::from_slice(&[1, 2, 3])), 6);
}

#[rstest]
fn test_product_with_large_factor() {
    assert_eq!(product(&PersistentList::from_slice(&[2, 3, 1000, 3])), 18_000);
}

#[rstest]
fn test_empty_defaults() {
    let empty: PersistentList<i64> = PersistentList::new();
    assert_eq!(length(&empty), 0);
    assert_eq!(sum(&empty), 0);
    assert_eq!(product(&empty), 1);
}

#[rstest]
fn test_sum_and_product_of_doubles() {
    let list = PersistentList::from_slice(&[1.5, 2.0, 4.0]);
    assert!((sum(&list) - 7.5_f64).abs() < f64::EPSILON);
    assert!((product(&list) - 12.0_f64).abs() < f64::EPSILON);
}

#[rstest]
fn test_length_works_on_slices_and_vectors() {
    assert_eq!(length(&[1, 2, 3][..]), 3);
    assert_eq!(length(&vec!['a', 'b']), 2);
}

// =============================================================================
// append, map, filter
// =============================================================================

#[rstest]
fn test_append_puts_element_last() {
    let list = strings(&["a", "s", "p"]);
    assert_eq!(
        append(&list, "j".to_string()),
        strings(&["a", "s", "p", "j"])
    );
    assert_eq!(list, strings(&["a", "s", "p"]));
}

#[rstest]
fn test_append_to_empty_is_singleton() {
    assert_eq!(append(&PersistentList::new(), 7), PersistentList::singleton(7));
}

#[rstest]
fn test_filter_keeps_even_numbers() {
    let digits: PersistentList<i32> = (1..=9).collect();
    assert_eq!(
        filter(&digits, |value| value % 2 == 0),
        PersistentList::from_slice(&[2, 4, 6, 8])
    );
}

#[rstest]
fn test_map_changes_element_type() {
    let list = PersistentList::from_slice(&[1, 22, 333]);
    assert_eq!(
        map(&list, |value: i32| value.to_string().len()),
        PersistentList::from_slice(&[1, 2, 3])
    );
}

#[rstest]
fn test_increment_each() {
    assert_eq!(
        increment_each(&PersistentList::from_slice(&[0, -1, 41])),
        PersistentList::from_slice(&[1, 0, 42])
    );
}

#[rstest]
fn test_render_each_keeps_decimal_point() {
    assert_eq!(
        render_each(&PersistentList::from_slice(&[1.0, 0.25])),
        strings(&["1.0", "0.25"])
    );
}

// =============================================================================
// drop_while, tail, drop, set_head
// =============================================================================

#[rstest]
fn test_drop_while_less_than_four() {
    let list: PersistentList<i32> = (1..=8).collect();
    assert_eq!(
        drop_while(&list, |value| *value < 4),
        PersistentList::from_slice(&[4, 5, 6, 7, 8])
    );
}

#[rstest]
fn test_drop_while_stops_at_first_failure() {
    let list = PersistentList::from_slice(&[1, 5, 2, 1]);
    assert_eq!(
        drop_while(&list, |value| *value < 4),
        PersistentList::from_slice(&[5, 2, 1])
    );
}

#[rstest]
fn test_tail_of_empty_is_empty() {
    let empty: PersistentList<i32> = PersistentList::new();
    assert!(tail(&empty).is_empty());
}

#[rstest]
fn test_set_head_on_empty_is_singleton() {
    assert_eq!(set_head(30, &PersistentList::new()), PersistentList::singleton(30));
}

#[rstest]
fn test_set_head_replaces_first_element() {
    let list = PersistentList::from_slice(&[1, 2, 3]);
    assert_eq!(set_head(9, &list), PersistentList::from_slice(&[9, 2, 3]));
}

#[rstest]
#[case(0, &["Alpha", "Beta", "Charlie", "Delta"])]
#[case(2, &["Charlie", "Delta"])]
#[case(3, &["Delta"])]
#[case(4, &[])]
#[case(10, &[])]
fn test_drop_removes_leading_elements(#[case] count: usize, #[case] expected: &[&str]) {
    let names = strings(&["Alpha", "Beta", "Charlie", "Delta"]);
    assert_eq!(drop(count, &names), strings(expected));
}

// =============================================================================
// Primitive folds
// =============================================================================

#[rstest]
fn test_fold_right_rebuilds_list() {
    let list = PersistentList::from_slice(&[1, 2, 3]);
    let rebuilt = fold_right(
        &list,
        PersistentList::new(),
        |element, accumulator: PersistentList<i32>| accumulator.cons(*element),
    );
    assert_eq!(rebuilt, list);
}

#[rstest]
fn test_fold_left_reverses_list() {
    let list = PersistentList::from_slice(&[1, 2, 3]);
    let reversed = fold_left(
        &list,
        PersistentList::new(),
        |accumulator: PersistentList<i32>, element| accumulator.cons(*element),
    );
    assert_eq!(reversed, reverse(&list));
    assert_eq!(reversed, PersistentList::from_slice(&[3, 2, 1]));
}

#[rstest]
fn test_right_folds_agree_on_non_commutative_combine() {
    let list: PersistentList<String> = strings(&["x", "y", "z"]);
    let render = |element: &String, accumulator: String| format!("({element} {accumulator})");

    let expected = "(x (y (z nil)))".to_string();
    assert_eq!(fold_right(&list, "nil".to_string(), render), expected);
    assert_eq!(fold_right_stack_safe(&list, "nil".to_string(), render), expected);
    assert_eq!(fold_right_trampolined(&list, "nil".to_string(), render), expected);
}
