//! Small numeric and predicate helpers used alongside the folds.
//!
//! - [`abs`]: absolute value
//! - [`factorial`]: accumulator recursion run on a [`Trampoline`]
//! - [`format_result`]: renders `"The {name} of {n} is {f(n)}"`
//! - [`is_sorted`]: checks every adjacent pair against an ordering predicate
//!
//! # Examples
//!
//! ```rust
//! use listfold::functions::{abs, factorial, format_result, is_sorted};
//!
//! assert_eq!(format_result("Abs", -42, abs), "The Abs of -42 is 42");
//! assert_eq!(factorial(5), 120);
//! assert!(is_sorted(&[1, 2, 3, 4, 6, 7], |left, right| left <= right));
//! ```

use crate::control::Trampoline;

/// Returns the absolute value of `value`.
///
/// Uses wrapping semantics at the boundary: `abs(i64::MIN) == i64::MIN`.
#[inline]
#[must_use]
pub const fn abs(value: i64) -> i64 {
    value.wrapping_abs()
}

/// Computes `n!`.
///
/// The accumulator loop is written as a tail call that suspends on every
/// step, so the stack does not grow with `n`. Overflow wraps.
///
/// # Examples
///
/// ```rust
/// use listfold::functions::factorial;
///
/// assert_eq!(factorial(0), 1);
/// assert_eq!(factorial(7), 5040);
/// ```
#[must_use]
pub fn factorial(n: u64) -> u64 {
    fn go(remaining: u64, accumulator: u64) -> Trampoline<u64> {
        if remaining <= 1 {
            Trampoline::done(accumulator)
        } else {
            Trampoline::suspend(move || go(remaining - 1, accumulator.wrapping_mul(remaining)))
        }
    }

    go(n, 1).run()
}

/// Formats the result of applying `function` to `n`.
///
/// # Examples
///
/// ```rust
/// use listfold::functions::{factorial, format_result};
///
/// let rendered = format_result("factorial", 5, |n| factorial(n.unsigned_abs()));
/// assert_eq!(rendered, "The factorial of 5 is 120");
/// ```
#[must_use]
pub fn format_result<R, F>(name: &str, n: i64, function: F) -> String
where
    R: std::fmt::Display,
    F: FnOnce(i64) -> R,
{
    format!("The {name} of {n} is {}", function(n))
}

/// Returns `true` when every adjacent pair `(a, b)` satisfies `ordered(a, b)`.
///
/// Empty and single-element slices are sorted.
///
/// # Examples
///
/// ```rust
/// use listfold::functions::is_sorted;
///
/// assert!(is_sorted(&["a", "b", "c"], |left, right| left <= right));
/// assert!(!is_sorted(&[3, 1, 2], |left, right| left <= right));
/// assert!(is_sorted::<i32, _>(&[], |left, right| left < right));
/// ```
#[must_use]
pub fn is_sorted<T, F>(slice: &[T], mut ordered: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    slice.windows(2).all(|pair| ordered(&pair[0], &pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-5, 5)]
    #[case(0, 0)]
    #[case(17, 17)]
    #[case(i64::MIN, i64::MIN)]
    fn abs_cases(#[case] input: i64, #[case] expected: i64) {
        assert_eq!(abs(input), expected);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(5, 120)]
    #[case(10, 3_628_800)]
    #[case(20, 2_432_902_008_176_640_000)]
    fn factorial_cases(#[case] input: u64, #[case] expected: u64) {
        assert_eq!(factorial(input), expected);
    }

    #[rstest]
    fn factorial_of_large_input_does_not_overflow_the_stack() {
        let _ = factorial(1_000_000);
    }

    #[rstest]
    fn format_result_with_abs() {
        assert_eq!(format_result("Abs", -5, abs), "The Abs of -5 is 5");
    }

    #[rstest]
    #[case(&[1, 2, 3, 4, 6, 7], true)]
    #[case(&[1, 2, 3, 4, 6, 7, 5], false)]
    #[case(&[2, 1], false)]
    #[case(&[4, 4, 4], true)]
    #[case(&[42], true)]
    #[case(&[], true)]
    fn is_sorted_ascending(#[case] input: &[i32], #[case] expected: bool) {
        assert_eq!(is_sorted(input, |left, right| left <= right), expected);
    }

    #[rstest]
    fn is_sorted_checks_the_last_pair() {
        assert!(!is_sorted(&[1, 2, 3, 0], |left, right| left <= right));
    }

    #[rstest]
    fn is_sorted_with_strict_descending_predicate() {
        assert!(is_sorted(&[9, 5, 1], |left, right| left > right));
        assert!(!is_sorted(&[9, 9, 1], |left, right| left > right));
    }
}
