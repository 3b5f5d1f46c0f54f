//! Operations derived from the fold primitives.
//!
//! The reductions (`length`, `sum`, `product`) and the sequence builders
//! (`append`, `map`, `filter`) are right folds; `reverse` is a left fold.
//! All right folds here go through [`Foldable::fold_right_stack_safe`], which
//! has the right-associative meaning of `fold_right` and constant stack.
//!
//! `drop_while`, `tail`, `drop` and `set_head` only touch a prefix of the list
//! and share the remaining nodes, so they work on the structure directly
//! instead of rebuilding it through a fold.

use crate::persistent::PersistentList;
use crate::typeclass::{Foldable, Monoid, Product, Semigroup, Sum};

/// Counts the elements: `fold_right(sequence, 0, (_, count) -> count + 1)`.
///
/// # Examples
///
/// ```rust
/// use listfold::fold::length;
/// use listfold::persistent::PersistentList;
///
/// let list: PersistentList<i32> = (1..=4).collect();
/// assert_eq!(length(&list), 4);
/// assert_eq!(length(&PersistentList::<i32>::new()), 0);
/// ```
#[must_use]
pub fn length<S>(sequence: &S) -> usize
where
    S: Foldable + ?Sized,
{
    sequence.fold_right_stack_safe(0, |_, count| count + 1)
}

/// Adds the elements: `fold_right(sequence, 0, +)`. Empty sums to `0`.
///
/// # Examples
///
/// ```rust
/// use listfold::fold::sum;
/// use listfold::persistent::PersistentList;
///
/// let list: PersistentList<i32> = (1..=3).collect();
/// assert_eq!(sum(&list), 6);
/// ```
#[must_use]
pub fn sum<S, T>(sequence: &S) -> T
where
    S: Foldable<Item = T> + ?Sized,
    T: Clone,
    Sum<T>: Monoid,
{
    sequence
        .fold_right_stack_safe(Sum::empty(), |element, accumulator| {
            Sum(element.clone()).combine(accumulator)
        })
        .into_inner()
}

/// Multiplies the elements: `fold_right(sequence, 1, *)`. Empty multiplies to `1`.
///
/// There is no short-circuit on `0`; every element is visited.
///
/// # Examples
///
/// ```rust
/// use listfold::fold::product;
///
/// assert_eq!(product(&vec![2, 3, 1000, 3]), 18_000);
/// assert_eq!(product::<[i32], i32>(&[]), 1);
/// ```
#[must_use]
pub fn product<S, T>(sequence: &S) -> T
where
    S: Foldable<Item = T> + ?Sized,
    T: Clone,
    Product<T>: Monoid,
{
    sequence
        .fold_right_stack_safe(Product::empty(), |element, accumulator| {
            Product(element.clone()).combine(accumulator)
        })
        .into_inner()
}

/// Adds `element` at the end of `list`.
///
/// A right fold that starts from `[element]` and conses every original
/// element back on top of it. An empty list yields the singleton.
///
/// # Examples
///
/// ```rust
/// use listfold::fold::append;
/// use listfold::persistent::PersistentList;
///
/// let letters = PersistentList::from_slice(&["a", "s", "p"]);
/// let appended = append(&letters, "j");
/// assert_eq!(appended, PersistentList::from_slice(&["a", "s", "p", "j"]));
/// ```
#[must_use]
pub fn append<T: Clone>(list: &PersistentList<T>, element: T) -> PersistentList<T> {
    list.fold_right_stack_safe(PersistentList::singleton(element), |head, accumulator| {
        accumulator.cons(head.clone())
    })
}

/// Applies `function` to every element, keeping the order.
///
/// A right fold that conses `function(head)` onto the mapped rest. Because
/// the fold runs from the right, `function` is called on the last element
/// first; the output order always matches the input order.
///
/// # Examples
///
/// ```rust
/// use listfold::fold::map;
/// use listfold::persistent::PersistentList;
///
/// let list: PersistentList<i32> = (1..=3).collect();
/// let doubled = map(&list, |element| element * 2);
/// assert_eq!(doubled, PersistentList::from_slice(&[2, 4, 6]));
/// ```
#[must_use]
pub fn map<A, B, F>(list: &PersistentList<A>, mut function: F) -> PersistentList<B>
where
    A: Clone,
    F: FnMut(A) -> B,
{
    list.fold_right_stack_safe(PersistentList::new(), |element, accumulator| {
        accumulator.cons(function(element.clone()))
    })
}

/// Keeps the elements satisfying `predicate`, in their original order.
///
/// # Examples
///
/// ```rust
/// use listfold::fold::filter;
/// use listfold::persistent::PersistentList;
///
/// let list: PersistentList<i32> = (1..=9).collect();
/// let evens = filter(&list, |element| element % 2 == 0);
/// assert_eq!(evens, PersistentList::from_slice(&[2, 4, 6, 8]));
/// ```
#[must_use]
pub fn filter<A, P>(list: &PersistentList<A>, mut predicate: P) -> PersistentList<A>
where
    A: Clone,
    P: FnMut(&A) -> bool,
{
    list.fold_right_stack_safe(PersistentList::new(), |element, accumulator| {
        if predicate(element) {
            accumulator.cons(element.clone())
        } else {
            accumulator
        }
    })
}

/// Removes the longest prefix whose elements all satisfy `predicate`.
///
/// Stops at the first element that fails; later elements are kept even if
/// they satisfy the predicate. Costs one predicate call per dropped element
/// and shares the remaining suffix.
///
/// # Examples
///
/// ```rust
/// use listfold::fold::drop_while;
/// use listfold::persistent::PersistentList;
///
/// let list: PersistentList<i32> = (1..=8).collect();
/// let rest = drop_while(&list, |element| *element < 4);
/// assert_eq!(rest, PersistentList::from_slice(&[4, 5, 6, 7, 8]));
/// ```
#[must_use]
pub fn drop_while<A, P>(list: &PersistentList<A>, predicate: P) -> PersistentList<A>
where
    P: FnMut(&A) -> bool,
{
    list.skip_while(predicate)
}

/// Removes the first element. The tail of an empty list is empty.
///
/// # Examples
///
/// ```rust
/// use listfold::fold::tail;
/// use listfold::persistent::PersistentList;
///
/// let empty: PersistentList<i32> = PersistentList::new();
/// assert!(tail(&empty).is_empty());
/// ```
#[must_use]
pub fn tail<T>(list: &PersistentList<T>) -> PersistentList<T> {
    list.tail()
}

/// Removes the first `count` elements; `count >= length` yields an empty list.
///
/// # Examples
///
/// ```rust
/// use listfold::fold::drop;
/// use listfold::persistent::PersistentList;
///
/// let names = PersistentList::from_slice(&["Alpha", "Beta", "Charlie", "Delta"]);
/// assert_eq!(drop(2, &names), PersistentList::from_slice(&["Charlie", "Delta"]));
/// assert!(drop(4, &names).is_empty());
/// ```
#[must_use]
pub fn drop<T>(count: usize, list: &PersistentList<T>) -> PersistentList<T> {
    list.drop_first(count)
}

/// Replaces the first element with `head`. An empty list becomes `[head]`.
///
/// # Examples
///
/// ```rust
/// use listfold::fold::set_head;
/// use listfold::persistent::PersistentList;
///
/// let list: PersistentList<i32> = (1..=5).collect();
/// assert_eq!(set_head(30, &list), PersistentList::from_slice(&[30, 2, 3, 4, 5]));
/// assert_eq!(set_head(30, &PersistentList::new()), PersistentList::singleton(30));
/// ```
#[must_use]
pub fn set_head<T>(head: T, list: &PersistentList<T>) -> PersistentList<T> {
    list.tail().cons(head)
}

/// Reverses the list: a left fold consing each element onto the accumulator.
///
/// # Examples
///
/// ```rust
/// use listfold::fold::reverse;
/// use listfold::persistent::PersistentList;
///
/// let list: PersistentList<i32> = (1..=3).collect();
/// assert_eq!(reverse(&list), PersistentList::from_slice(&[3, 2, 1]));
/// ```
#[must_use]
pub fn reverse<T: Clone>(list: &PersistentList<T>) -> PersistentList<T> {
    list.fold_left(PersistentList::new(), |accumulator, element| {
        accumulator.cons(element.clone())
    })
}

/// Adds one to every element.
///
/// # Examples
///
/// ```rust
/// use listfold::fold::increment_each;
/// use listfold::persistent::PersistentList;
///
/// let list: PersistentList<i32> = (1..=5).collect();
/// assert_eq!(increment_each(&list), (2..=6).collect::<PersistentList<i32>>());
/// ```
#[must_use]
pub fn increment_each(list: &PersistentList<i32>) -> PersistentList<i32> {
    map(list, |element| element + 1)
}

/// Turns every `f64` into its string form, always keeping a fractional part.
///
/// # Examples
///
/// ```rust
/// use listfold::fold::render_each;
/// use listfold::persistent::PersistentList;
///
/// let list = PersistentList::from_slice(&[1.0, 2.5]);
/// let rendered = render_each(&list);
/// assert_eq!(rendered, PersistentList::from_slice(&["1.0".to_string(), "2.5".to_string()]));
/// ```
#[must_use]
pub fn render_each(list: &PersistentList<f64>) -> PersistentList<String> {
    map(list, |element| format!("{element:?}"))
}
