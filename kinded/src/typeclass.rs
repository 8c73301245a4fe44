//! Typeclass dictionaries: value-level records of `map`, `ap` and `of` for one witness.
//!
//! Dictionaries are ordinary (usually zero-sized) values passed by reference into every
//! generic function. A computation that mixes two dictionaries for the same witness
//! cannot arise by accident: the dictionary is an explicit argument, never looked up.
use crate::function::identity;
use crate::kind::{Hkt, Kind};

/// The container type a dictionary `D` works over, applied to `A`.
pub type KindOf<D, A> = Kind<<D as Functor>::Witness, <D as Functor>::Env, <D as Functor>::Err, A>;

/// Map over the value channel of some container.
///
/// Laws: `map(identity, fa) == fa` and `map(|x| g(f(x)), fa) == map(g, map(f, fa))`.
pub trait Functor {
    /// witness for the container this dictionary maps over
    type Witness: Hkt;
    /// the `R` slot this dictionary is fixed at
    type Env;
    /// the `E` slot this dictionary is fixed at
    type Err;

    fn map<A, B, F>(&self, f: F, fa: KindOf<Self, A>) -> KindOf<Self, B>
    where
        F: FnMut(A) -> B;
}

/// Apply an effectful function to an effectful value.
///
/// Implementations decide how the two effects combine, and must document which
/// operand wins when both carry a failure.
pub trait Apply: Functor {
    fn ap<A, B, F>(&self, fa: KindOf<Self, A>, fab: KindOf<Self, F>) -> KindOf<Self, B>
    where
        F: FnOnce(A) -> B;
}

/// Lift a pure value into a container with no effect.
///
/// Laws: `ap(v, of(identity)) == v` and `ap(of(x), of(f)) == of(f(x))`.
pub trait Applicative: Apply {
    fn of<A>(&self, a: A) -> KindOf<Self, A>;
}

/// Turn a container of effects inside out into an effect of a container.
pub trait Traversable: Functor {
    /// Apply `f` to each element and gather the resulting effects, in element order,
    /// using `app`'s `ap`.
    fn traverse<D, A, B, F>(&self, app: &D, f: F, ta: KindOf<Self, A>) -> KindOf<D, KindOf<Self, B>>
    where
        D: Applicative,
        F: FnMut(A) -> KindOf<D, B>;

    fn sequence<D, A>(&self, app: &D, tfa: KindOf<Self, KindOf<D, A>>) -> KindOf<D, KindOf<Self, A>>
    where
        D: Applicative,
    {
        self.traverse::<D, KindOf<D, A>, A, _>(app, identity, tfa)
    }
}

/// Combine two effects with a binary function. `fa`'s effect is combined first.
pub fn lift2<D, A, B, C, F>(d: &D, f: F, fa: KindOf<D, A>, fb: KindOf<D, B>) -> KindOf<D, C>
where
    D: Apply,
    F: Fn(A, B) -> C,
{
    let f = &f;
    let partial = d.map::<A, _, _>(move |a: A| move |b: B| f(a, b), fa);
    d.ap::<B, C, _>(fb, partial)
}

/// Gather a pair of effects into an effect of a pair.
pub fn sequence_t2<D, A, B>(d: &D, fa: KindOf<D, A>, fb: KindOf<D, B>) -> KindOf<D, (A, B)>
where
    D: Apply,
{
    let partial = d.map::<A, _, _>(|a: A| move |b: B| (a, b), fa);
    d.ap::<B, (A, B), _>(fb, partial)
}

/// Gather three effects into an effect of a triple, combining left to right.
pub fn sequence_t3<D, A, B, C>(
    d: &D,
    fa: KindOf<D, A>,
    fb: KindOf<D, B>,
    fc: KindOf<D, C>,
) -> KindOf<D, (A, B, C)>
where
    D: Apply,
{
    let partial = d.map::<A, _, _>(|a: A| move |b: B| move |c: C| (a, b, c), fa);
    let partial = d.ap::<B, _, _>(fb, partial);
    d.ap::<C, (A, B, C), _>(fc, partial)
}
