//! The two primitive reductions and their stack-safe right-fold variants.

use std::cell::RefCell;
use std::rc::Rc;

use crate::control::Trampoline;
use crate::persistent::PersistentList;
use crate::typeclass::Foldable;

/// Reduces `sequence` from left to right.
///
/// Evaluates `combine(combine(... combine(zero, a1), a2) ..., an)` with a
/// forward iteration, so the stack depth is constant regardless of length.
/// An empty sequence returns `zero` unchanged.
///
/// # Examples
///
/// ```rust
/// use listfold::fold::fold_left;
/// use listfold::persistent::PersistentList;
///
/// let list: PersistentList<i32> = (1..=5).collect();
/// assert_eq!(fold_left(&list, 1, |accumulator, element| accumulator + (element + 5)), 41);
/// ```
#[must_use]
pub fn fold_left<'a, S, B, F>(sequence: &'a S, zero: B, combine: F) -> B
where
    S: Foldable + ?Sized,
    F: FnMut(B, &'a S::Item) -> B,
{
    sequence.fold_left(zero, combine)
}

/// Reduces `sequence` from right to left by recursion.
///
/// Evaluates `combine(a1, combine(a2, ... combine(an, zero)))`: the head is
/// combined with the already-folded rest of the sequence.
///
/// # Stack usage
///
/// This is the direct recursive definition and consumes one stack frame per
/// element. It is **not safe for very large sequences**; a list of a few
/// hundred thousand elements can overflow a default thread stack. Use
/// [`fold_right_stack_safe`] or [`fold_right_trampolined`] when the input can
/// be long. Both produce the same result.
///
/// # Examples
///
/// ```rust
/// use listfold::fold::fold_right;
/// use listfold::persistent::PersistentList;
///
/// let list: PersistentList<i32> = (1..=3).collect();
/// let rendered = fold_right(&list, String::from("nil"), |element, accumulator| {
///     format!("{element} :: {accumulator}")
/// });
/// assert_eq!(rendered, "1 :: 2 :: 3 :: nil");
/// ```
#[must_use]
pub fn fold_right<'a, S, B, F>(sequence: &'a S, zero: B, combine: F) -> B
where
    S: Foldable + ?Sized,
    F: FnMut(&'a S::Item, B) -> B,
{
    sequence.fold_right(zero, combine)
}

/// Reduces `sequence` from right to left with explicit iteration.
///
/// Same result as [`fold_right`], constant stack depth. Elements are visited
/// from the last to the first.
///
/// # Examples
///
/// ```rust
/// use listfold::fold::fold_right_stack_safe;
/// use listfold::persistent::PersistentList;
///
/// let list: PersistentList<u64> = (1..=1_000_000).collect();
/// let total = fold_right_stack_safe(&list, 0, |element, accumulator| element + accumulator);
/// assert_eq!(total, 500_000_500_000);
/// ```
#[must_use]
pub fn fold_right_stack_safe<'a, S, B, F>(sequence: &'a S, zero: B, combine: F) -> B
where
    S: Foldable + ?Sized,
    F: FnMut(&'a S::Item, B) -> B,
{
    sequence.fold_right_stack_safe(zero, combine)
}

type Continuation<B> = Box<dyn FnOnce(B) -> Trampoline<B>>;

type Combiner<A, B> = Rc<RefCell<dyn FnMut(&A, B) -> B>>;

/// Reduces `list` from right to left as a trampolined recursion.
///
/// This keeps the shape of the recursive definition (descend to the end, then
/// combine on the way back) but every step is a `Trampoline::suspend`, and the
/// "way back" is a chain of heap-allocated continuations. Native stack depth
/// is constant; memory is O(n) continuations.
///
/// Elements and the accumulator must be `'static` because each step is a
/// boxed closure that owns a share of the list. `combine` may carry state; it
/// is called once per element, last element first.
///
/// # Examples
///
/// ```rust
/// use listfold::fold::fold_right_trampolined;
/// use listfold::persistent::PersistentList;
///
/// let list: PersistentList<i32> = (1..=3).collect();
/// let rendered = fold_right_trampolined(&list, String::from("nil"), |element, accumulator| {
///     format!("{element} :: {accumulator}")
/// });
/// assert_eq!(rendered, "1 :: 2 :: 3 :: nil");
/// ```
#[must_use]
pub fn fold_right_trampolined<A, B, F>(list: &PersistentList<A>, zero: B, combine: F) -> B
where
    A: 'static,
    B: 'static,
    F: FnMut(&A, B) -> B + 'static,
{
    let combine: Combiner<A, B> = Rc::new(RefCell::new(combine));
    let finish: Continuation<B> = Box::new(Trampoline::done);
    descend(list.clone(), zero, combine, finish).run()
}

fn descend<A: 'static, B: 'static>(
    list: PersistentList<A>,
    zero: B,
    combine: Combiner<A, B>,
    continuation: Continuation<B>,
) -> Trampoline<B> {
    if list.is_empty() {
        return continuation(zero);
    }

    Trampoline::suspend(move || {
        let rest = list.tail();
        let combine_rest = Rc::clone(&combine);
        let combine_head: Continuation<B> = Box::new(move |accumulator| {
            let folded = match list.head() {
                Some(head) => (&mut *combine.borrow_mut())(head, accumulator),
                None => accumulator,
            };
            // Suspend before resuming the outer continuation so that unwinding
            // n frames costs n loop iterations, not n nested calls.
            Trampoline::suspend(move || continuation(folded))
        });
        descend(rest, zero, combine_rest, combine_head)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn render(element: &i32, accumulator: String) -> String {
        format!("({element} {accumulator})")
    }

    #[rstest]
    fn right_fold_variants_agree() {
        let list: PersistentList<i32> = (1..=5).collect();
        let expected = "(1 (2 (3 (4 (5 z)))))";
        assert_eq!(fold_right(&list, String::from("z"), render), expected);
        assert_eq!(fold_right_stack_safe(&list, String::from("z"), render), expected);
        assert_eq!(fold_right_trampolined(&list, String::from("z"), render), expected);
    }

    #[rstest]
    fn right_fold_variants_on_empty_return_zero() {
        let list: PersistentList<i32> = PersistentList::new();
        assert_eq!(fold_right(&list, String::from("z"), render), "z");
        assert_eq!(fold_right_stack_safe(&list, String::from("z"), render), "z");
        assert_eq!(fold_right_trampolined(&list, String::from("z"), render), "z");
    }

    #[rstest]
    fn fold_left_on_empty_returns_zero() {
        let list: PersistentList<i32> = PersistentList::new();
        assert_eq!(fold_left(&list, 11, |accumulator, element| accumulator * element), 11);
    }

    #[rstest]
    fn primitives_accept_slices() {
        let values = [1, 2, 3];
        assert_eq!(fold_left(&values[..], 0, |accumulator, element| accumulator + element), 6);
        assert_eq!(fold_right(&values[..], 0, |element, accumulator| element + accumulator), 6);
    }

    #[rstest]
    fn trampolined_fold_accepts_stateful_combiner() {
        let list: PersistentList<i32> = (1..=4).collect();
        let visited = Rc::new(RefCell::new(Vec::new()));
        let recorder = Rc::clone(&visited);
        let mut position = 0_usize;
        let total = fold_right_trampolined(&list, 0, move |element, accumulator| {
            position += 1;
            recorder.borrow_mut().push((position, *element));
            element + accumulator
        });
        assert_eq!(total, 10);
        assert_eq!(*visited.borrow(), vec![(1, 4), (2, 3), (3, 2), (4, 1)]);
    }

    #[rstest]
    fn trampolined_fold_leaves_input_untouched() {
        let list: PersistentList<i32> = (1..=3).collect();
        let _ = fold_right_trampolined(&list, 0, |element, accumulator| element + accumulator);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
