//! Newtype wrappers selecting a monoid for numeric types.
//!
//! A number can be combined by addition or by multiplication, so the choice is
//! made by the wrapper:
//!
//! - [`Sum`]: addition, identity `0`
//! - [`Product`]: multiplication, identity `1`
//!
//! # Examples
//!
//! ```rust
//! use listfold::typeclass::{Product, Semigroup, Sum};
//!
//! assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
//! assert_eq!(Product(3).combine(Product(5)), Product(15));
//! ```

// =============================================================================
// Sum Wrapper
// =============================================================================

/// A newtype wrapper that represents the additive semigroup/monoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listfold::typeclass::Sum;
    ///
    /// let sum = Sum::new(42);
    /// assert_eq!(sum.into_inner(), 42);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Sum` and returns the inner value.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Product Wrapper
// =============================================================================

/// A newtype wrapper that represents the multiplicative semigroup/monoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Creates a new `Product` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listfold::typeclass::Product;
    ///
    /// let product = Product::new(42);
    /// assert_eq!(product.into_inner(), 42);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Product` and returns the inner value.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
