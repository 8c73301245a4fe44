//! The disjoint result container: `Left` carries an error, `Right` carries a success.
//!
//! Errors are plain data here. Once a `Left` appears, `flat_map`, `ap` and `traverse` thread
//! it through unchanged; only `map_left` and `bimap` may transform it.
//!
//! Rust has no anonymous union types, so widening the error channel to the union of two
//! error types means converting into a named type that both convert into via `From`,
//! the same mechanism `?` uses. [`Either::left_widen`] is the explicit widening step and
//! `flat_map` accepts any continuation whose error converts into the current one.
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::kind::{Hkt, PartiallyApplied};
use crate::typeclass::{Applicative, Apply, Functor, KindOf, Traversable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Either<E, A> {
    Left(E),
    Right(A),
}

impl Hkt for Either<PartiallyApplied, PartiallyApplied> {
    type Applied<R, E, A> = Either<E, A>;
}

impl<E, A> Either<E, A> {
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Narrow to the error payload, if this is a `Left`.
    pub fn as_left(&self) -> Option<&E> {
        match self {
            Either::Left(e) => Some(e),
            Either::Right(_) => None,
        }
    }

    /// Narrow to the success payload, if this is a `Right`.
    pub fn as_right(&self) -> Option<&A> {
        match self {
            Either::Left(_) => None,
            Either::Right(a) => Some(a),
        }
    }

    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Either<E, B> {
        match self {
            Either::Left(e) => Either::Left(e),
            Either::Right(a) => Either::Right(f(a)),
        }
    }

    pub fn map_left<E2>(self, f: impl FnOnce(E) -> E2) -> Either<E2, A> {
        match self {
            Either::Left(e) => Either::Left(f(e)),
            Either::Right(a) => Either::Right(a),
        }
    }

    pub fn bimap<E2, B>(
        self,
        on_left: impl FnOnce(E) -> E2,
        on_right: impl FnOnce(A) -> B,
    ) -> Either<E2, B> {
        match self {
            Either::Left(e) => Either::Left(on_left(e)),
            Either::Right(a) => Either::Right(on_right(a)),
        }
    }

    /// Continue with `f` if this is a `Right`; a `Left` is returned untouched and `f` is
    /// never called. The continuation's error is widened into `E`.
    pub fn flat_map<E2, B>(self, f: impl FnOnce(A) -> Either<E2, B>) -> Either<E, B>
    where
        E2: Into<E>,
    {
        match self {
            Either::Left(e) => Either::Left(e),
            Either::Right(a) => f(a).left_widen(),
        }
    }

    /// Like [`flat_map`](Self::flat_map), but both error channels widen into a common `E3`,
    /// so two results with unrelated narrow errors chain without a `left_widen` first.
    pub fn flat_map_widen<E2, E3, B>(self, f: impl FnOnce(A) -> Either<E2, B>) -> Either<E3, B>
    where
        E: Into<E3>,
        E2: Into<E3>,
    {
        match self {
            Either::Left(e) => Either::Left(e.into()),
            Either::Right(a) => f(a).left_widen(),
        }
    }

    /// Fold the (at most one) success value into `init`.
    pub fn fold<B>(self, init: B, f: impl FnOnce(B, A) -> B) -> B {
        match self {
            Either::Left(_) => init,
            Either::Right(a) => f(init, a),
        }
    }

    /// Eliminate by supplying one handler per variant.
    pub fn match_with<B>(self, on_left: impl FnOnce(E) -> B, on_right: impl FnOnce(A) -> B) -> B {
        match self {
            Either::Left(e) => on_left(e),
            Either::Right(a) => on_right(a),
        }
    }

    /// Widen the error channel into a type that `E` converts into.
    pub fn left_widen<E2>(self) -> Either<E2, A>
    where
        E: Into<E2>,
    {
        self.map_left(Into::into)
    }

    /// Widen the success channel into a type that `A` converts into.
    pub fn right_widen<B>(self) -> Either<E, B>
    where
        A: Into<B>,
    {
        self.map(Into::into)
    }

    pub fn get_or_else(self, f: impl FnOnce(E) -> A) -> A {
        match self {
            Either::Left(e) => f(e),
            Either::Right(a) => a,
        }
    }

    pub fn swap(self) -> Either<A, E> {
        match self {
            Either::Left(e) => Either::Right(e),
            Either::Right(a) => Either::Left(a),
        }
    }
}

impl<E, A> From<Result<A, E>> for Either<E, A> {
    fn from(r: Result<A, E>) -> Self {
        match r {
            Ok(a) => Either::Right(a),
            Err(e) => Either::Left(e),
        }
    }
}

impl<E, A> From<Either<E, A>> for Result<A, E> {
    fn from(x: Either<E, A>) -> Self {
        match x {
            Either::Left(e) => Err(e),
            Either::Right(a) => Ok(a),
        }
    }
}

pub fn left<E, A>(e: E) -> Either<E, A> {
    Either::Left(e)
}

pub fn right<E, A>(a: A) -> Either<E, A> {
    Either::Right(a)
}

pub fn of<E, A>(a: A) -> Either<E, A> {
    Either::Right(a)
}

pub fn is_left<E, A>(fa: &Either<E, A>) -> bool {
    fa.is_left()
}

pub fn is_right<E, A>(fa: &Either<E, A>) -> bool {
    fa.is_right()
}

pub fn left_widen<E, E2, A>(fa: Either<E, A>) -> Either<E2, A>
where
    E: Into<E2>,
{
    fa.left_widen()
}

pub fn right_widen<E, A, B>(fa: Either<E, A>) -> Either<E, B>
where
    A: Into<B>,
{
    fa.right_widen()
}

pub fn map<E, A, B>(f: impl FnOnce(A) -> B, fa: Either<E, A>) -> Either<E, B> {
    fa.map(f)
}

pub fn map_<E, A, B>(f: impl FnOnce(A) -> B) -> impl FnOnce(Either<E, A>) -> Either<E, B> {
    move |fa| fa.map(f)
}

pub fn map_left<E, E2, A>(f: impl FnOnce(E) -> E2, fa: Either<E, A>) -> Either<E2, A> {
    fa.map_left(f)
}

pub fn map_left_<E, E2, A>(f: impl FnOnce(E) -> E2) -> impl FnOnce(Either<E, A>) -> Either<E2, A> {
    move |fa| fa.map_left(f)
}

pub fn bimap<E, E2, A, B>(
    on_left: impl FnOnce(E) -> E2,
    on_right: impl FnOnce(A) -> B,
    fa: Either<E, A>,
) -> Either<E2, B> {
    fa.bimap(on_left, on_right)
}

pub fn bimap_<E, E2, A, B>(
    on_left: impl FnOnce(E) -> E2,
    on_right: impl FnOnce(A) -> B,
) -> impl FnOnce(Either<E, A>) -> Either<E2, B> {
    move |fa| fa.bimap(on_left, on_right)
}

pub fn flat_map<E, E2, A, B>(f: impl FnOnce(A) -> Either<E2, B>, fa: Either<E, A>) -> Either<E, B>
where
    E2: Into<E>,
{
    fa.flat_map(f)
}

pub fn flat_map_<E, E2, A, B>(
    f: impl FnOnce(A) -> Either<E2, B>,
) -> impl FnOnce(Either<E, A>) -> Either<E, B>
where
    E2: Into<E>,
{
    move |fa| fa.flat_map(f)
}

pub fn flat_map_widen<E, E2, E3, A, B>(
    f: impl FnOnce(A) -> Either<E2, B>,
    fa: Either<E, A>,
) -> Either<E3, B>
where
    E: Into<E3>,
    E2: Into<E3>,
{
    fa.flat_map_widen(f)
}

pub fn flat_map_widen_<E, E2, E3, A, B>(
    f: impl FnOnce(A) -> Either<E2, B>,
) -> impl FnOnce(Either<E, A>) -> Either<E3, B>
where
    E: Into<E3>,
    E2: Into<E3>,
{
    move |fa| fa.flat_map_widen(f)
}

/// Apply an effectful function to an effectful value.
///
/// `fab` is resolved first: if it is a `Left` that error is the result and `fa` is never
/// inspected, so when both operands are `Left` the function operand's error wins.
pub fn ap<E, E2, A, B, F>(fa: Either<E, A>, fab: Either<E2, F>) -> Either<E2, B>
where
    F: FnOnce(A) -> B,
    E: Into<E2>,
{
    fab.flat_map(|ab| fa.map(ab).left_widen::<E2>())
}

/// [`ap`] taking the value operand first, for pipelining the function operand into it.
#[doc(alias = "_ap")]
pub fn ap_<E, E2, A, B, F>(fa: Either<E, A>) -> impl FnOnce(Either<E2, F>) -> Either<E2, B>
where
    F: FnOnce(A) -> B,
    E: Into<E2>,
{
    move |fab| ap(fa, fab)
}

pub fn fold<E, A, B>(f: impl FnOnce(B, A) -> B, init: B, fa: Either<E, A>) -> B {
    fa.fold(init, f)
}

pub fn match_with<E, A, B>(
    on_left: impl FnOnce(E) -> B,
    on_right: impl FnOnce(A) -> B,
    fa: Either<E, A>,
) -> B {
    fa.match_with(on_left, on_right)
}

pub fn match_with_<E, A, B>(
    on_left: impl FnOnce(E) -> B,
    on_right: impl FnOnce(A) -> B,
) -> impl FnOnce(Either<E, A>) -> B {
    move |fa| fa.match_with(on_left, on_right)
}

/// Traverse an `Either` with the applicative `app`. A `Left` is lifted with `app.of`
/// without ever calling `f`; a `Right` calls `f` exactly once.
pub fn traverse<D, E, A, B, F>(app: &D, f: F, ta: Either<E, A>) -> KindOf<D, Either<E, B>>
where
    D: Applicative,
    F: FnMut(A) -> KindOf<D, B>,
{
    applicative::<E>().traverse::<D, A, B, F>(app, f, ta)
}

pub fn sequence<D, E, A>(app: &D, tfa: Either<E, KindOf<D, A>>) -> KindOf<D, Either<E, A>>
where
    D: Applicative,
{
    applicative::<E>().sequence::<D, A>(app, tfa)
}

/// Dictionary for `Either<E, _>`: Functor, Apply, Applicative and Traversable.
pub struct EitherInstance<E>(PhantomData<fn() -> E>);

/// The canonical dictionary for `Either<E, _>`.
pub const fn applicative<E>() -> EitherInstance<E> {
    EitherInstance(PhantomData)
}

impl<E> Clone for EitherInstance<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EitherInstance<E> {}

impl<E> std::fmt::Debug for EitherInstance<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EitherInstance<{}>", std::any::type_name::<E>())
    }
}

impl<E> Functor for EitherInstance<E> {
    type Witness = Either<PartiallyApplied, PartiallyApplied>;
    type Env = ();
    type Err = E;

    fn map<A, B, F>(&self, f: F, fa: Either<E, A>) -> Either<E, B>
    where
        F: FnMut(A) -> B,
    {
        fa.map(f)
    }
}

impl<E> Apply for EitherInstance<E> {
    fn ap<A, B, F>(&self, fa: Either<E, A>, fab: Either<E, F>) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        ap::<E, E, A, B, F>(fa, fab)
    }
}

impl<E> Applicative for EitherInstance<E> {
    fn of<A>(&self, a: A) -> Either<E, A> {
        Either::Right(a)
    }
}

impl<E> Traversable for EitherInstance<E> {
    fn traverse<D, A, B, F>(&self, app: &D, mut f: F, ta: Either<E, A>) -> KindOf<D, Either<E, B>>
    where
        D: Applicative,
        F: FnMut(A) -> KindOf<D, B>,
    {
        match ta {
            Either::Left(e) => app.of::<Either<E, B>>(Either::Left(e)),
            Either::Right(a) => app.map::<B, Either<E, B>, _>(Either::Right, f(a)),
        }
    }
}
