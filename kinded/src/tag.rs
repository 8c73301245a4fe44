//! The phantom applicative over the fallback encoding.
//!
//! Every operation returns a fresh [`Tag`] without running any function: the result only
//! exists at the type level. Useful for checking that generic code lines up with the
//! fallback encoding, at zero runtime cost.
use std::marker::PhantomData;

use crate::kind::{Tag, Tagged};
use crate::typeclass::{Applicative, Apply, Functor, KindOf, Traversable};

pub struct TagInstance<F, R = (), E = ()>(PhantomData<fn() -> (F, R, E)>);

pub const fn applicative<F, R, E>() -> TagInstance<F, R, E> {
    TagInstance(PhantomData)
}

impl<F, R, E> Clone for TagInstance<F, R, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F, R, E> Copy for TagInstance<F, R, E> {}

impl<F, R, E> Functor for TagInstance<F, R, E> {
    type Witness = Tagged<F>;
    type Env = R;
    type Err = E;

    fn map<A, B, M>(&self, _f: M, _fa: Tag<F, R, E, A>) -> Tag<F, R, E, B>
    where
        M: FnMut(A) -> B,
    {
        Tag::new()
    }
}

impl<F, R, E> Apply for TagInstance<F, R, E> {
    fn ap<A, B, M>(&self, _fa: Tag<F, R, E, A>, _fab: Tag<F, R, E, M>) -> Tag<F, R, E, B>
    where
        M: FnOnce(A) -> B,
    {
        Tag::new()
    }
}

impl<F, R, E> Applicative for TagInstance<F, R, E> {
    fn of<A>(&self, _a: A) -> Tag<F, R, E, A> {
        Tag::new()
    }
}

impl<F, R, E> Traversable for TagInstance<F, R, E> {
    fn traverse<D, A, B, M>(&self, app: &D, _f: M, _ta: Tag<F, R, E, A>) -> KindOf<D, Tag<F, R, E, B>>
    where
        D: Applicative,
        M: FnMut(A) -> KindOf<D, B>,
    {
        app.of::<Tag<F, R, E, B>>(Tag::new())
    }
}
