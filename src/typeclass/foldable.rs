//! Foldable type class - folding over data structures.
//!
//! This module provides the `Foldable` trait, which represents ordered
//! structures whose elements can be reduced (folded) into a single value.
//!
//! Folding borrows the structure: the combining function receives references
//! to the elements, and the structure is left exactly as it was.
//!
//! # Laws
//!
//! ## Consistency between `fold_left` and `fold_right`
//!
//! For associative and commutative operations both directions agree:
//!
//! ```text
//! fa.fold_right(init, f) == fa.fold_left(init, flip(f))
//! ```
//!
//! ## Consistency of the stack-safe right fold
//!
//! ```text
//! fa.fold_right(init, f) == fa.fold_right_stack_safe(init, f)
//! ```
//!
//! # Stack depth
//!
//! `fold_left` is a forward iteration and uses constant stack. `fold_right`
//! is the textbook recursive definition: it needs one stack frame per element
//! and will overflow the stack on very long sequences. Use
//! [`Foldable::fold_right_stack_safe`] when the input can be long.
//!
//! # Examples
//!
//! ```rust
//! use listfold::typeclass::Foldable;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! let sum = numbers.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//!
//! let digits = numbers.fold_right(String::new(), |element, accumulator| {
//!     format!("{element}{accumulator}")
//! });
//! assert_eq!(digits, "12345");
//! ```

use super::monoid::Monoid;

/// A type class for ordered structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold, constant stack
/// - `fold_right`: Right-associative fold, recursive
///
/// # Provided Methods
///
/// - `fold_right_stack_safe`: Right-associative fold with constant stack
/// - `fold_map`: Map each element to a `Monoid` and combine results
/// - `find`: Find the first element matching a predicate
/// - `exists`: Check if any element matches a predicate
/// - `for_all`: Check if all elements match a predicate
///
/// # Examples
///
/// ```rust
/// use listfold::typeclass::{Foldable, Sum};
///
/// let values = vec![1, 2, 3, 4, 5];
///
/// let sum = values.fold_left(0, |accumulator, element| accumulator + element);
/// assert_eq!(sum, 15);
///
/// let sum: Sum<i32> = values.fold_map(|element| Sum(*element));
/// assert_eq!(sum.0, 15);
/// ```
pub trait Foldable {
    /// The element type.
    type Item;

    /// Folds the structure from left to right with an accumulator.
    ///
    /// Evaluates `f(f(f(init, a1), a2), ... an)`. An empty structure returns
    /// `init` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listfold::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// let sum = values.fold_left(0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 6);
    /// ```
    fn fold_left<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(B, &'a Self::Item) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// Evaluates `f(a1, f(a2, ... f(an, init)))` by recursing to the end of
    /// the structure and combining on the way back.
    ///
    /// # Stack usage
    ///
    /// Consumes one stack frame per element. Sequences with hundreds of
    /// thousands of elements can overflow the stack; use
    /// [`Foldable::fold_right_stack_safe`] for those.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listfold::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// let result = values.fold_right(String::new(), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(result, "123");
    /// ```
    fn fold_right<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(&'a Self::Item, B) -> B;

    /// Folds the structure from right to left without recursion.
    ///
    /// Produces the same result as [`Foldable::fold_right`]. The default
    /// collects references front to back with `fold_left` and then walks them
    /// backwards, trading O(n) heap for constant stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listfold::typeclass::Foldable;
    ///
    /// let values: Vec<u64> = (1..=200_000).collect();
    /// let total = values.fold_right_stack_safe(0, |element, accumulator| element + accumulator);
    /// assert_eq!(total, 20_000_100_000);
    /// ```
    fn fold_right_stack_safe<'a, B, F>(&'a self, init: B, mut function: F) -> B
    where
        F: FnMut(&'a Self::Item, B) -> B,
    {
        let elements: Vec<&'a Self::Item> =
            self.fold_left(Vec::new(), |mut accumulator, element| {
                accumulator.push(element);
                accumulator
            });
        elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    /// Maps each element to a `Monoid` and combines all results left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listfold::typeclass::{Foldable, Product, Sum};
    ///
    /// let values = vec![1, 2, 3, 4];
    ///
    /// let sum: Sum<i32> = values.fold_map(|element| Sum(*element));
    /// assert_eq!(sum.0, 10);
    ///
    /// let product: Product<i32> = values.fold_map(|element| Product(*element));
    /// assert_eq!(product.0, 24);
    /// ```
    fn fold_map<M, F>(&self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(&Self::Item) -> M,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Finds the first element satisfying a predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listfold::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3, 4, 5];
    /// assert_eq!(values.find(|element| **element > 3), Some(&4));
    /// assert_eq!(values.find(|element| **element > 10), None);
    /// ```
    fn find<'a, P>(&'a self, mut predicate: P) -> Option<&'a Self::Item>
    where
        P: FnMut(&&'a Self::Item) -> bool,
    {
        self.fold_left(None, |found, element| {
            found.or_else(|| Some(element).filter(|candidate| predicate(candidate)))
        })
    }

    /// Checks if any element satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listfold::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3, 4, 5];
    /// assert!(values.exists(|element| *element > 3));
    /// assert!(!values.exists(|element| *element > 10));
    /// ```
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.fold_left(false, |matched, element| matched || predicate(element))
    }

    /// Checks if all elements satisfy the predicate.
    ///
    /// An empty structure satisfies every predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listfold::typeclass::Foldable;
    ///
    /// let values = vec![2, 4, 6, 8];
    /// assert!(values.for_all(|element| *element % 2 == 0));
    /// assert!(!values.for_all(|element| *element > 5));
    ///
    /// let empty: Vec<i32> = vec![];
    /// assert!(empty.for_all(|element| *element > 100));
    /// ```
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Slice Implementation
// =============================================================================

impl<T> Foldable for [T] {
    type Item = T;

    fn fold_left<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(B, &'a T) -> B,
    {
        self.iter().fold(init, function)
    }

    fn fold_right<'a, B, F>(&'a self, init: B, mut function: F) -> B
    where
        F: FnMut(&'a T, B) -> B,
    {
        fn go<'a, T, B, F>(elements: &'a [T], init: B, function: &mut F) -> B
        where
            F: FnMut(&'a T, B) -> B,
        {
            match elements.split_first() {
                None => init,
                Some((head, rest)) => {
                    let folded = go(rest, init, function);
                    function(head, folded)
                }
            }
        }

        go(self, init, &mut function)
    }

    fn fold_right_stack_safe<'a, B, F>(&'a self, init: B, mut function: F) -> B
    where
        F: FnMut(&'a T, B) -> B,
    {
        self.iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T> Foldable for Vec<T> {
    type Item = T;

    fn fold_left<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(B, &'a T) -> B,
    {
        self.as_slice().fold_left(init, function)
    }

    fn fold_right<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(&'a T, B) -> B,
    {
        self.as_slice().fold_right(init, function)
    }

    fn fold_right_stack_safe<'a, B, F>(&'a self, init: B, function: F) -> B
    where
        F: FnMut(&'a T, B) -> B,
    {
        self.as_slice().fold_right_stack_safe(init, function)
    }
}
