//! Generalized list folding and the operations derived from it.
//!
//! Recursion over a list almost always has the same shape: a value for the
//! empty list, and a way to combine the head with the result for the rest.
//! `sum` is `0` and `+`; `product` is `1` and `*`. Pulling those two pieces
//! out into arguments gives the fold.
//!
//! # Primitives
//!
//! - [`fold_right`]: `combine(a1, combine(a2, ... combine(an, zero)))`,
//!   recursive, stack depth proportional to the length
//! - [`fold_left`]: `combine(... combine(combine(zero, a1), a2) ..., an)`,
//!   iterative, constant stack
//! - [`fold_right_stack_safe`]: right fold by iterating from the right
//! - [`fold_right_trampolined`]: right fold as a [`Trampoline`](crate::control::Trampoline)
//!
//! # Derived operations
//!
//! | Operation        | Built from            | Empty input   |
//! |------------------|-----------------------|---------------|
//! | [`length`]       | right fold            | `0`           |
//! | [`sum`]          | right fold, `Sum`     | `0`           |
//! | [`product`]      | right fold, `Product` | `1`           |
//! | [`append`]       | right fold            | `[element]`   |
//! | [`map`]          | right fold            | `[]`          |
//! | [`filter`]       | right fold            | `[]`          |
//! | [`reverse`]      | left fold             | `[]`          |
//! | [`drop_while`]   | prefix walk           | `[]`          |
//! | [`tail`]         | prefix walk           | `[]`          |
//! | [`drop`]         | prefix walk           | `[]`          |
//! | [`set_head`]     | prefix walk           | `[head]`      |
//!
//! No operation signals an error: empty input always has a defined result.
//!
//! # Examples
//!
//! ```rust
//! use listfold::fold::{filter, fold_right, length, map, product, sum};
//! use listfold::persistent::PersistentList;
//!
//! let list: PersistentList<i32> = (1..=4).collect();
//!
//! assert_eq!(fold_right(&list, 0, |element, accumulator| element + accumulator), 10);
//! assert_eq!(length(&list), 4);
//! assert_eq!(sum(&list), 10);
//! assert_eq!(product(&list), 24);
//!
//! let evens = filter(&map(&list, |element| element * 3), |element| element % 2 == 0);
//! assert_eq!(evens, PersistentList::from_slice(&[6, 12]));
//! ```

mod derived;
mod primitives;

pub use derived::{
    append, drop, drop_while, filter, increment_each, length, map, product, render_each, reverse,
    set_head, sum, tail,
};
pub use primitives::{fold_left, fold_right, fold_right_stack_safe, fold_right_trampolined};
