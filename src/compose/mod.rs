//! Function composition utilities.
//!
//! Higher-order functions that build new functions out of existing ones:
//!
//! - [`compose`]: Apply one function, then another (`g(f(x))`)
//! - [`curry`]: Turn `f(a, b)` into `f(a)(b)`
//! - [`partial1`]: Fix the first argument of a binary function
//! - [`flip`]: Swap the arguments of a binary function
//! - [`identity`]: Return the argument unchanged
//!
//! # Examples
//!
//! ```
//! use listfold::compose::{compose, curry, partial1};
//!
//! #[derive(Debug, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! fn person(name: String, age: u32) -> Person {
//!     Person { name, age }
//! }
//!
//! let me = partial1(String::from("MyName"), person)(10);
//! assert_eq!(me.age, 10);
//!
//! let me_too = curry(person)(String::from("MyOtherName"))(15);
//! assert_eq!(me_too.name, "MyOtherName");
//!
//! let render = compose(|value: i32| value.to_string(), |text: String| text.len());
//! assert_eq!(render(1234), 4);
//! ```

mod combinators;
mod utils;

pub use combinators::{compose, curry, partial1};
pub use utils::{flip, identity};
