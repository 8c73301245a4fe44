//! The finite ordered sequence container, using `Vec` directly.
use crate::kind::{Hkt, PartiallyApplied};
use crate::typeclass::{Applicative, Functor, KindOf, Traversable};

impl Hkt for Vec<PartiallyApplied> {
    type Applied<R, E, A> = Vec<A>;
}

/// Map each element, preserving order and length.
pub fn map<A, B>(f: impl FnMut(A) -> B, fa: Vec<A>) -> Vec<B> {
    fa.into_iter().map(f).collect()
}

pub fn map_<A, B>(f: impl FnMut(A) -> B) -> impl FnOnce(Vec<A>) -> Vec<B> {
    move |fa| map(f, fa)
}

pub fn of<A>(a: A) -> Vec<A> {
    vec![a]
}

/// Map each element to a sequence and concatenate the results in order.
pub fn flat_map<A, B>(f: impl FnMut(A) -> Vec<B>, fa: Vec<A>) -> Vec<B> {
    fa.into_iter().flat_map(f).collect()
}

pub fn flat_map_<A, B>(f: impl FnMut(A) -> Vec<B>) -> impl FnOnce(Vec<A>) -> Vec<B> {
    move |fa| flat_map(f, fa)
}

/// Cartesian application: every function in `fab` applied to every value in `fa`.
///
/// Functions are the outer loop and values the inner one, so the result has
/// `fab.len() * fa.len()` elements grouped by function, each group in `fa`'s order.
pub fn ap<A, B, F>(fa: Vec<A>, fab: Vec<F>) -> Vec<B>
where
    A: Clone,
    F: FnMut(A) -> B,
{
    let mut out = Vec::with_capacity(fab.len() * fa.len());
    for mut f in fab {
        out.extend(fa.iter().cloned().map(&mut f));
    }
    out
}

#[doc(alias = "_ap")]
pub fn ap_<A, B, F>(fa: Vec<A>) -> impl FnOnce(Vec<F>) -> Vec<B>
where
    A: Clone,
    F: FnMut(A) -> B,
{
    move |fab| ap(fa, fab)
}

/// Call `f` on every element in index order and gather the effects left to right.
///
/// The accumulated prefix is always the function operand of `app.ap`, so for an
/// applicative that short-circuits (eg `Either`) the first failing element by index
/// decides the result. `f` is still called on every element.
///
/// ```rust
/// use kinded::{either, option, seq};
///
/// let halves = seq::traverse(
///     &either::applicative::<String>(),
///     |n: i32| {
///         if n % 2 == 0 {
///             either::right(n / 2)
///         } else {
///             either::left(format!("{n} is odd"))
///         }
///     },
///     vec![2, 3, 4, 5],
/// );
/// assert_eq!(halves, either::left("3 is odd".to_string()));
///
/// assert_eq!(seq::sequence(&option::applicative(), vec![Some(1), Some(2)]), Some(vec![1, 2]));
/// ```
pub fn traverse<D, A, B, F>(app: &D, f: F, ta: Vec<A>) -> KindOf<D, Vec<B>>
where
    D: Applicative,
    F: FnMut(A) -> KindOf<D, B>,
{
    SeqInstance.traverse::<D, A, B, F>(app, f, ta)
}

pub fn sequence<D, A>(app: &D, tfa: Vec<KindOf<D, A>>) -> KindOf<D, Vec<A>>
where
    D: Applicative,
{
    SeqInstance.sequence::<D, A>(app, tfa)
}

/// Dictionary for `Vec`: Functor and Traversable.
///
/// [`Apply::ap`](crate::Apply::ap) hands each function out once (`FnOnce`), while a
/// cartesian `ap` reuses every function across all values. `Vec` therefore has no
/// Apply/Applicative impl; use the free [`ap`] and [`of`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeqInstance;

/// The canonical dictionary for `Vec`.
pub const fn traversable() -> SeqInstance {
    SeqInstance
}

impl Functor for SeqInstance {
    type Witness = Vec<PartiallyApplied>;
    type Env = ();
    type Err = ();

    fn map<A, B, F>(&self, f: F, fa: Vec<A>) -> Vec<B>
    where
        F: FnMut(A) -> B,
    {
        map(f, fa)
    }
}

impl Traversable for SeqInstance {
    fn traverse<D, A, B, F>(&self, app: &D, mut f: F, ta: Vec<A>) -> KindOf<D, Vec<B>>
    where
        D: Applicative,
        F: FnMut(A) -> KindOf<D, B>,
    {
        tracing::trace!(len = ta.len(), "traversing sequence");

        let init = app.of::<Vec<B>>(Vec::with_capacity(ta.len()));
        ta.into_iter().fold(init, |acc, a| {
            let fb = f(a);
            let push = app.map::<Vec<B>, _, _>(
                |mut bs: Vec<B>| {
                    move |b: B| {
                        bs.push(b);
                        bs
                    }
                },
                acc,
            );
            app.ap::<B, Vec<B>, _>(fb, push)
        })
    }
}
