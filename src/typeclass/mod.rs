//! Type class traits used by the folds.
//!
//! - [`Foldable`]: Folding over ordered structures to produce summary values
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//! - [`Sum`], [`Product`]: Numeric wrappers selecting addition or multiplication
//!
//! A fold needs a starting value and a way to combine; a monoid packages both.
//! `sum` and `product` in [`crate::fold`] are folds over the [`Sum`] and
//! [`Product`] monoids.
//!
//! # Examples
//!
//! ```rust
//! use listfold::typeclass::{Foldable, Monoid, Semigroup, Sum};
//!
//! assert_eq!(Sum::empty().combine(Sum::new(6)), Sum::new(6));
//!
//! let total: Sum<i32> = vec![1, 2, 3].fold_map(|element| Sum(*element));
//! assert_eq!(total, Sum(6));
//! ```

mod foldable;
mod monoid;
mod semigroup;
mod wrappers;

pub use foldable::Foldable;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};
