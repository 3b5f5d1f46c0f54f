//! The demonstrations, each rendered as a titled section of output lines.
//!
//! Every demonstration compares its result with the documented expectation
//! and fails with [`WalkthroughError::Mismatch`] when they differ.

use std::fmt::Debug;

use listfold::compose::{compose, flip};
use listfold::fold::{
    append, drop, drop_while, filter, fold_left, fold_right, fold_right_stack_safe,
    fold_right_trampolined, increment_each, length, map, product, render_each, reverse, set_head,
    sum, tail,
};
use listfold::functions::{abs, factorial, format_result, is_sorted};
use listfold::persistent::PersistentList;

use crate::config::WalkthroughConfig;
use crate::error::WalkthroughError;

/// A titled block of rendered results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    /// Heading printed above the lines.
    pub title: &'static str,
    /// One rendered result per line.
    pub lines: Vec<String>,
}

impl Section {
    const fn new(title: &'static str) -> Self {
        Self {
            title,
            lines: Vec::new(),
        }
    }

    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }
}

/// Compares a computed value with its expectation.
///
/// # Errors
///
/// Returns `WalkthroughError::Mismatch` if `actual != expected`.
pub fn check<T>(scenario: &str, expected: &T, actual: T) -> Result<T, WalkthroughError>
where
    T: PartialEq + Debug,
{
    if &actual == expected {
        tracing::debug!(scenario, result = ?actual, "scenario matched");
        Ok(actual)
    } else {
        Err(WalkthroughError::Mismatch {
            scenario: scenario.to_string(),
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        })
    }
}

fn strings(items: &[&str]) -> PersistentList<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

fn basics() -> Result<Section, WalkthroughError> {
    let mut section = Section::new("Length, sum and product");

    let numbers = PersistentList::from_slice(&[1, 2, 3, 4]);
    let counted = check("length", &4, length(&numbers))?;
    section.line(format!("length({numbers}) = {counted}"));

    let small = PersistentList::from_slice(&[1, 2, 3]);
    let total: i32 = check("sum", &6, sum(&small))?;
    section.line(format!("sum({small}) = {total}"));

    let factors = PersistentList::from_slice(&[2, 3, 1000, 3]);
    let multiplied: i32 = check("product", &18_000, product(&factors))?;
    section.line(format!("product({factors}) = {multiplied}"));

    let empty: PersistentList<i32> = PersistentList::new();
    check("length of empty", &0, length(&empty))?;
    check("sum of empty", &0, sum(&empty))?;
    check("product of empty", &1, product(&empty))?;
    section.line("length([]) = 0, sum([]) = 0, product([]) = 1");

    Ok(section)
}

fn transformations() -> Result<Section, WalkthroughError> {
    let mut section = Section::new("Append, map and filter");

    let letters = strings(&["a", "s", "p"]);
    let appended = check(
        "append",
        &strings(&["a", "s", "p", "j"]),
        append(&letters, "j".to_string()),
    )?;
    section.line(format!("append({letters}, j) = {appended}"));

    let numbers = PersistentList::from_slice(&[1, 2, 3]);
    let incremented = check(
        "increment_each",
        &PersistentList::from_slice(&[2, 3, 4]),
        increment_each(&numbers),
    )?;
    section.line(format!("increment_each({numbers}) = {incremented}"));

    let doubles = PersistentList::from_slice(&[1.0, 2.5, -3.0]);
    let rendered = check(
        "render_each",
        &strings(&["1.0", "2.5", "-3.0"]),
        render_each(&doubles),
    )?;
    section.line(format!("render_each({doubles:?}) = {rendered:?}"));

    let add_one = |value: i32| value + 1;
    let triple = |value: i32| value * 3;
    let composed = check(
        "map composition",
        &map(&map(&numbers, add_one), triple),
        map(&numbers, compose(add_one, triple)),
    )?;
    section.line(format!("map(map({numbers}, +1), *3) = {composed}"));

    let digits: PersistentList<i32> = (1..=9).collect();
    let evens = check(
        "filter",
        &PersistentList::from_slice(&[2, 4, 6, 8]),
        filter(&digits, |value| value % 2 == 0),
    )?;
    section.line(format!("filter({digits}, even) = {evens}"));

    Ok(section)
}

fn prefixes() -> Result<Section, WalkthroughError> {
    let mut section = Section::new("Drop while, tail, drop and set head");

    let numbers: PersistentList<i32> = (1..=8).collect();
    let remaining = check(
        "drop_while",
        &PersistentList::from_slice(&[4, 5, 6, 7, 8]),
        drop_while(&numbers, |value| *value < 4),
    )?;
    section.line(format!("drop_while({numbers}, < 4) = {remaining}"));

    let empty: PersistentList<i32> = PersistentList::new();
    let tail_of_empty = check("tail of empty", &PersistentList::new(), tail(&empty))?;
    section.line(format!("tail([]) = {tail_of_empty}"));

    let headed = check(
        "set_head on empty",
        &PersistentList::singleton(30),
        set_head(30, &empty),
    )?;
    section.line(format!("set_head(30, []) = {headed}"));

    let names = strings(&["Alpha", "Beta", "Charlie", "Delta"]);
    let after_three = check("drop 3", &strings(&["Delta"]), drop(3, &names))?;
    section.line(format!("drop(3, {names}) = {after_three}"));
    let after_two = check("drop 2", &strings(&["Charlie", "Delta"]), drop(2, &names))?;
    section.line(format!("drop(2, {names}) = {after_two}"));

    Ok(section)
}

fn duality() -> Result<Section, WalkthroughError> {
    let mut section = Section::new("Right fold and left fold");

    let numbers: PersistentList<i64> = (1..=6).collect();
    let subtract = |element: &i64, accumulator: i64| element - accumulator;

    let right = fold_right(&numbers, 0, subtract);
    let mirrored = check(
        "fold duality",
        &right,
        fold_left(&reverse(&numbers), 0, flip(subtract)),
    )?;
    section.line(format!(
        "fold_right({numbers}, 0, -) = {right} = fold_left(reverse, 0, flip(-)) = {mirrored}"
    ));

    let left = fold_left(&numbers, 0, |accumulator, element| accumulator - element);
    section.line(format!("fold_left({numbers}, 0, -) = {left}"));

    Ok(section)
}

fn stack_safety(config: &WalkthroughConfig) -> Result<Section, WalkthroughError> {
    let mut section = Section::new("Stack safety");

    let count = config.long_list_length;
    let long: PersistentList<u64> = (1_u64..).take(count).collect();
    let expected = long.iter().copied().sum::<u64>();
    tracing::debug!(count, "folding long list");

    let left = check(
        "long fold_left",
        &expected,
        fold_left(&long, 0, |accumulator, element| accumulator + element),
    )?;
    let stack_safe = check(
        "long fold_right_stack_safe",
        &expected,
        fold_right_stack_safe(&long, 0, |element, accumulator| element + accumulator),
    )?;
    let trampolined = check(
        "long fold_right_trampolined",
        &expected,
        fold_right_trampolined(&long, 0, |element, accumulator| element + accumulator),
    )?;
    check("long length", &count, length(&long))?;

    section.line(format!("fold_left over {count} elements = {left}"));
    section.line(format!("fold_right_stack_safe over {count} elements = {stack_safe}"));
    section.line(format!("fold_right_trampolined over {count} elements = {trampolined}"));

    Ok(section)
}

fn helpers(config: &WalkthroughConfig) -> Result<Section, WalkthroughError> {
    let mut section = Section::new("Helpers");

    let rendered = check(
        "format_result",
        &"The Abs of -5 is 5".to_string(),
        format_result("Abs", -5, abs),
    )?;
    section.line(rendered);

    let input = config.factorial_input;
    let computed = factorial(input);
    match (1..=input).try_fold(1_u64, u64::checked_mul) {
        Some(expected) => {
            check("factorial", &expected, computed)?;
        }
        None => tracing::debug!(input, "factorial overflows u64, skipping comparison"),
    }
    section.line(format!("factorial({input}) = {computed}"));

    let sequence = [1, 2, 3, 4, 6, 7];
    let sorted = check(
        "is_sorted",
        &true,
        is_sorted(&sequence, |left, right| left <= right),
    )?;
    section.line(format!("is_sorted({sequence:?}, <=) = {sorted}"));

    Ok(section)
}

/// Runs every demonstration in order.
///
/// # Errors
///
/// Returns the first `WalkthroughError::Mismatch` encountered.
pub fn run_all(config: &WalkthroughConfig) -> Result<Vec<Section>, WalkthroughError> {
    Ok(vec![
        basics()?,
        transformations()?,
        prefixes()?,
        duality()?,
        stack_safety(config)?,
        helpers(config)?,
    ])
}
