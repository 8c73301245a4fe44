//! The optional value container, using `std::option::Option` directly.
use crate::kind::{Hkt, PartiallyApplied};
use crate::typeclass::{Applicative, Apply, Functor, KindOf, Traversable};

impl Hkt for Option<PartiallyApplied> {
    type Applied<R, E, A> = Option<A>;
}

pub fn some<A>(a: A) -> Option<A> {
    Some(a)
}

pub fn none<A>() -> Option<A> {
    None
}

pub fn of<A>(a: A) -> Option<A> {
    Some(a)
}

pub fn is_some<A>(fa: &Option<A>) -> bool {
    fa.is_some()
}

pub fn is_none<A>(fa: &Option<A>) -> bool {
    fa.is_none()
}

pub fn map<A, B>(f: impl FnOnce(A) -> B, fa: Option<A>) -> Option<B> {
    fa.map(f)
}

pub fn map_<A, B>(f: impl FnOnce(A) -> B) -> impl FnOnce(Option<A>) -> Option<B> {
    move |fa| fa.map(f)
}

pub fn flat_map<A, B>(f: impl FnOnce(A) -> Option<B>, fa: Option<A>) -> Option<B> {
    fa.and_then(f)
}

pub fn flat_map_<A, B>(f: impl FnOnce(A) -> Option<B>) -> impl FnOnce(Option<A>) -> Option<B> {
    move |fa| fa.and_then(f)
}

/// Absent if either operand is absent. `fab` is resolved first.
pub fn ap<A, B, F>(fa: Option<A>, fab: Option<F>) -> Option<B>
where
    F: FnOnce(A) -> B,
{
    fab.and_then(|ab| fa.map(ab))
}

#[doc(alias = "_ap")]
pub fn ap_<A, B, F>(fa: Option<A>) -> impl FnOnce(Option<F>) -> Option<B>
where
    F: FnOnce(A) -> B,
{
    move |fab| ap(fa, fab)
}

pub fn fold<A, B>(f: impl FnOnce(B, A) -> B, init: B, fa: Option<A>) -> B {
    match fa {
        Some(a) => f(init, a),
        None => init,
    }
}

pub fn match_with<A, B>(on_none: impl FnOnce() -> B, on_some: impl FnOnce(A) -> B, fa: Option<A>) -> B {
    match fa {
        Some(a) => on_some(a),
        None => on_none(),
    }
}

pub fn match_with_<A, B>(
    on_none: impl FnOnce() -> B,
    on_some: impl FnOnce(A) -> B,
) -> impl FnOnce(Option<A>) -> B {
    move |fa| match_with(on_none, on_some, fa)
}

pub fn get_or_else<A>(default: impl FnOnce() -> A, fa: Option<A>) -> A {
    fa.unwrap_or_else(default)
}

pub fn traverse<D, A, B, F>(app: &D, f: F, ta: Option<A>) -> KindOf<D, Option<B>>
where
    D: Applicative,
    F: FnMut(A) -> KindOf<D, B>,
{
    OptionInstance.traverse::<D, A, B, F>(app, f, ta)
}

pub fn sequence<D, A>(app: &D, tfa: Option<KindOf<D, A>>) -> KindOf<D, Option<A>>
where
    D: Applicative,
{
    OptionInstance.sequence::<D, A>(app, tfa)
}

/// Dictionary for `Option`: Functor, Apply, Applicative and Traversable.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionInstance;

/// The canonical dictionary for `Option`.
pub const fn applicative() -> OptionInstance {
    OptionInstance
}

impl Functor for OptionInstance {
    type Witness = Option<PartiallyApplied>;
    type Env = ();
    type Err = ();

    fn map<A, B, F>(&self, f: F, fa: Option<A>) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        fa.map(f)
    }
}

impl Apply for OptionInstance {
    fn ap<A, B, F>(&self, fa: Option<A>, fab: Option<F>) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        ap(fa, fab)
    }
}

impl Applicative for OptionInstance {
    fn of<A>(&self, a: A) -> Option<A> {
        Some(a)
    }
}

impl Traversable for OptionInstance {
    fn traverse<D, A, B, F>(&self, app: &D, mut f: F, ta: Option<A>) -> KindOf<D, Option<B>>
    where
        D: Applicative,
        F: FnMut(A) -> KindOf<D, B>,
    {
        match ta {
            None => app.of::<Option<B>>(None),
            Some(a) => app.map::<B, Option<B>, _>(Some, f(a)),
        }
    }
}
