//! Composition, currying and partial application as plain functions.

use std::rc::Rc;

/// Composes two functions, applying `first` and then `second`.
///
/// `compose(f, g)(x) == g(f(x))`. The argument order follows the data flow,
/// so `map(map(s, f), g) == map(s, compose(f, g))`.
///
/// # Laws
///
/// - **Associativity**: `compose(compose(f, g), h) == compose(f, compose(g, h))`
/// - **Identity**: `compose(identity, f) == f == compose(f, identity)`
///
/// # Examples
///
/// ```
/// use listfold::compose::compose;
///
/// fn to_text(value: i32) -> String {
///     value.to_string()
/// }
///
/// fn describe(text: String) -> String {
///     format!("The integer passed as parameter was {text}")
/// }
///
/// let output = compose(to_text, describe);
/// assert_eq!(output(5), "The integer passed as parameter was 5");
/// ```
#[must_use]
pub fn compose<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |argument| second(first(argument))
}

/// Converts a two-argument function into a chain of one-argument functions.
///
/// `curry(f)(a)(b) == f(a, b)`. The first argument is shared by every call of
/// the returned inner function, so it must be `Clone`.
///
/// # Examples
///
/// ```
/// use listfold::compose::curry;
///
/// fn add(first: i32, second: i32) -> i32 {
///     first + second
/// }
///
/// let curried = curry(add);
/// let add_five = curried(5);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
#[must_use]
pub fn curry<A, B, C, F>(function: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
where
    A: Clone + 'static,
    B: 'static,
    C: 'static,
    F: Fn(A, B) -> C + 'static,
{
    let function = Rc::new(function);
    move |first_argument: A| -> Box<dyn Fn(B) -> C> {
        let function = Rc::clone(&function);
        Box::new(move |second_argument: B| function(first_argument.clone(), second_argument))
    }
}

/// Fixes the first argument of a two-argument function.
///
/// `partial1(a, f)(b) == f(a, b)`.
///
/// # Examples
///
/// ```
/// use listfold::compose::partial1;
///
/// fn greet(greeting: &str, name: &str) -> String {
///     format!("{greeting}, {name}!")
/// }
///
/// let hello = partial1("Hello", greet);
/// assert_eq!(hello("World"), "Hello, World!");
/// ```
#[must_use]
pub fn partial1<A, B, C, F>(first_argument: A, function: F) -> impl Fn(B) -> C
where
    A: Clone,
    F: Fn(A, B) -> C,
{
    move |second_argument| function(first_argument.clone(), second_argument)
}
