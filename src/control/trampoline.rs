//! Stack-safe recursion via trampolining.
//!
//! This module provides the `Trampoline<A>` type for expressing recursive
//! computations in a stack-safe manner. Instead of using the call stack,
//! recursive steps are represented as data that is interpreted in a loop.
//!
//! # Motivation
//!
//! Rust does not guarantee tail call optimization (TCO). A function that is
//! tail recursive on paper still consumes a stack frame per call. Returning
//! `Trampoline::suspend` from each step instead hands the next call back to
//! [`Trampoline::run`], which executes it from a loop.
//!
//! Work that has to happen after a recursive call is carried forward as a
//! boxed continuation that itself returns a `Trampoline`, so the unwinding
//! side is driven by the same loop.
//!
//! # Examples
//!
//! ```rust
//! use listfold::control::Trampoline;
//!
//! fn count_down(n: u64) -> Trampoline<u64> {
//!     if n == 0 {
//!         Trampoline::done(0)
//!     } else {
//!         Trampoline::suspend(move || count_down(n - 1))
//!     }
//! }
//!
//! assert_eq!(count_down(1_000_000).run(), 0);
//! ```

/// A data structure for stack-safe recursion.
///
/// `Trampoline<A>` represents a potentially recursive computation that
/// produces a value of type `A`.
///
/// # States
///
/// 1. `Done(A)` - The computation has finished with value `A`
/// 2. `Suspend(...)` - The computation needs to continue with another step
///
/// # Examples
///
/// ```rust
/// use listfold::control::Trampoline;
///
/// let result = Trampoline::suspend(|| Trampoline::done(42)).run();
/// assert_eq!(result, 42);
/// ```
pub enum Trampoline<A> {
    /// The computation has completed with value `A`.
    Done(A),
    /// The computation is suspended; the boxed function returns the next state.
    Suspend(Box<dyn FnOnce() -> Trampoline<A> + 'static>),
}

impl<A> Trampoline<A> {
    /// Creates a completed trampoline with the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listfold::control::Trampoline;
    ///
    /// assert_eq!(Trampoline::done(42).run(), 42);
    /// ```
    #[inline]
    #[must_use]
    pub const fn done(value: A) -> Self {
        Self::Done(value)
    }

    /// Creates a suspended trampoline that will continue with the given thunk.
    ///
    /// The thunk is not evaluated until `run()` reaches it.
    #[inline]
    #[must_use]
    pub fn suspend<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self::Suspend(Box::new(thunk))
    }

    /// Runs the trampoline to completion and returns the final value.
    ///
    /// Each `Suspend` step is executed from this loop, so a chain of
    /// suspensions of any length uses constant stack.
    #[must_use]
    pub fn run(self) -> A {
        let mut current = self;

        loop {
            match current {
                Self::Done(value) => return value,
                Self::Suspend(thunk) => current = thunk(),
            }
        }
    }
}

impl<A: std::fmt::Debug> std::fmt::Debug for Trampoline<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Done(value) => formatter.debug_tuple("Done").field(value).finish(),
            Self::Suspend(_) => formatter.debug_tuple("Suspend").field(&"<thunk>").finish(),
        }
    }
}
