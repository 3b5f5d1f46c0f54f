//! # listfold
//!
//! Generalized folding over immutable lists, and the list operations that
//! fall out of it.
//!
//! ## Overview
//!
//! Most recursive list functions share one shape: a result for the empty
//! list, and a way to combine an element with the result for the rest.
//! This crate makes that shape a function, then builds the usual list
//! operations on top of it:
//!
//! - **Persistent list**: an immutable, structurally shared cons list
//! - **Type classes**: `Foldable`, `Semigroup`, `Monoid`, with `Sum`/`Product`
//! - **Folds**: `fold_right`, `fold_left`, and two stack-safe right folds
//! - **Derived operations**: `length`, `sum`, `product`, `append`, `map`,
//!   `filter`, `drop_while`, `tail`, `drop`, `set_head`, `reverse`
//! - **Function composition**: `compose`, `curry`, `partial1`, `flip`
//! - **Control**: `Trampoline` for recursion that does not grow the stack
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (`Foldable`, `Monoid`, ...)
//! - `control`: `Trampoline`
//! - `persistent`: `PersistentList`
//! - `fold`: Fold primitives and derived operations
//! - `compose`: Function composition utilities
//! - `functions`: `abs`, `factorial`, `format_result`, `is_sorted`
//! - `serde`: Serialization for `PersistentList`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use listfold::fold::{drop_while, fold_left, fold_right, sum};
//! use listfold::prelude::*;
//!
//! let list: PersistentList<i32> = (1..=8).collect();
//!
//! assert_eq!(fold_right(&list, 0, |element, accumulator| element + accumulator), 36);
//! assert_eq!(fold_left(&list, 0, |accumulator, element| accumulator + element), 36);
//! assert_eq!(sum(&list), 36);
//!
//! let rest = drop_while(&list, |element| *element < 4);
//! assert_eq!(rest.to_string(), "[4, 5, 6, 7, 8]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::module_name_repetitions)]

/// Prelude module for convenient imports.
///
/// Re-exports the data types, traits and combinators. The fold operations
/// stay under [`fold`](crate::fold) because names such as `drop`, `map` and
/// `filter` would otherwise collide with the standard library.
///
/// # Usage
///
/// ```rust
/// use listfold::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "fold")]
pub mod fold;

#[cfg(feature = "functions")]
pub mod functions;
