//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```
//!
//! The identity element is exactly the `zero` a fold starts from: `0` for
//! [`Sum`], `1` for [`Product`].
//!
//! # Examples
//!
//! ```rust
//! use listfold::typeclass::{Monoid, Product, Sum};
//!
//! assert_eq!(Sum::<i32>::empty(), Sum(0));
//! assert_eq!(Product::<i32>::empty(), Product(1));
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Product, Sum};

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;
}

/// `Sum` is a monoid with `0` (the `Default` of numeric types) as identity.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_monoid {
    ($($numeric:ty => $one:expr),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

product_monoid!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sum_identity_laws() {
        assert_eq!(Sum::empty().combine(Sum(9)), Sum(9));
        assert_eq!(Sum(9).combine(Sum::empty()), Sum(9));
    }

    #[rstest]
    fn product_identity_laws() {
        assert_eq!(Product::empty().combine(Product(9_u64)), Product(9));
        assert_eq!(Product(9_u64).combine(Product::empty()), Product(9));
    }

    #[rstest]
    fn float_product_identity_is_one() {
        assert!((Product::<f64>::empty().0 - 1.0).abs() < f64::EPSILON);
    }
}
