//! Tests for the composition helpers used with the folds.

use listfold::compose::{compose, curry, flip, identity, partial1};
use listfold::fold::{filter, fold_left, fold_right, map};
use listfold::persistent::PersistentList;
use rstest::rstest;

fn person(name: String, age: u32) -> (String, u32) {
    (name, age)
}

#[rstest]
fn test_partial1_and_curry_build_the_same_value() {
    let partially = partial1(String::from("MyName"), person)(10);
    let curried = curry(person)(String::from("MyName"))(10);
    assert_eq!(partially, curried);
}

#[rstest]
fn test_compose_describes_an_integer() {
    let describe = compose(
        |value: i32| value.to_string(),
        |text: String| format!("The integer passed as parameter was {text}"),
    );
    assert_eq!(describe(5), "The integer passed as parameter was 5");
}

#[rstest]
fn test_map_with_identity_is_unchanged() {
    let list = PersistentList::from_slice(&[3, 1, 2]);
    assert_eq!(map(&list, identity), list);
}

#[rstest]
fn test_flip_turns_right_combiner_into_left_combiner() {
    let list = PersistentList::from_slice(&["a", "b", "c"]);
    let prepend = |element: &&str, accumulator: String| format!("{element}{accumulator}");

    assert_eq!(fold_right(&list, String::new(), prepend), "abc");
    assert_eq!(fold_left(&list, String::new(), flip(prepend)), "cba");
}

#[rstest]
fn test_curried_predicate_in_filter() {
    let greater_than = curry(|threshold: i32, value: i32| value > threshold);
    let above_two = greater_than(2);
    let list: PersistentList<i32> = (1..=5).collect();
    assert_eq!(
        filter(&list, |value| above_two(*value)),
        PersistentList::from_slice(&[3, 4, 5])
    );
}
