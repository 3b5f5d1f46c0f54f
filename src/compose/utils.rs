//! Helper combinators.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)

/// Returns the value unchanged.
///
/// The identity function is the unit of composition:
/// `compose(identity, f)` and `compose(f, identity)` both behave like `f`.
///
/// # Examples
///
/// ```
/// use listfold::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
#[must_use]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(b, a) == f(a, b)`. This is how a right-fold combiner
/// `(element, accumulator)` becomes a left-fold combiner
/// `(accumulator, element)`.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
///
/// # Examples
///
/// ```
/// use listfold::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// let flipped = flip(subtract);
/// assert_eq!(flipped(3, 10), 7);
/// assert_eq!(flip(flipped)(10, 3), subtract(10, 3));
/// ```
#[inline]
#[must_use]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_flip_with_asymmetric_function() {
        fn power(base: i32, exponent: u32) -> i32 {
            base.pow(exponent)
        }

        let flipped_power = flip(power);
        assert_eq!(power(2, 3), 8);
        assert_eq!(flipped_power(3, 2), 8);
    }
}
