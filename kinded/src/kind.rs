use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A witness for some container type that has not yet been applied to its parameters.
///
/// # Motivation
///
/// Rust does not allow a generic parameter to itself be generic: we can write code over
/// `Option<usize>`, but not over just `Option`. A witness stands in for the unapplied
/// container and `Applied` is the template that, given `R` (environment), `E` (error
/// channel) and `A` (value channel), yields the fully-applied type.
///
/// # Implementing this trait
///
/// Rust does not allow implementing a trait for a partially applied type, so the
/// convention is to implement it for the container applied to the uninhabited
/// [`PartiallyApplied`] marker. Slots the container has no use for are simply ignored:
///
/// ```rust
/// # use kinded::{Hkt, Kind, PartiallyApplied};
/// #[derive(Debug, PartialEq, Eq)]
/// enum MyOption<A> {
///     Some(A),
///     None,
/// }
///
/// impl Hkt for MyOption<PartiallyApplied> {
///     type Applied<R, E, A> = MyOption<A>;
/// }
///
/// let applied: Kind<MyOption<PartiallyApplied>, (), (), u32> = MyOption::Some(1);
/// assert_eq!(applied, MyOption::Some(1));
/// # let _: Kind<MyOption<PartiallyApplied>, (), (), u32> = MyOption::None;
/// ```
pub trait Hkt {
    /// the container type produced by applying this witness
    type Applied<R, E, A>;
}

/// Apply the witness `F` to `R`, `E` and `A`. Resolves entirely at compile time.
pub type Kind<F, R, E, A> = <F as Hkt>::Applied<R, E, A>;

/// An uninhabited type used to define [`Hkt`] witnesses for partially-applied types.
///
/// For example: the witness for `Vec<A>` cannot be written as the partially-applied type
/// `Vec`, so instead we write it as `Vec<PartiallyApplied>`
#[derive(Clone, Debug)]
pub enum PartiallyApplied {}

/// A witness with its `R` and `E` slots already filled in.
///
/// Applying a `Pinned<W, R, E>` to any slots yields `Kind<W, R, E, A>`; only the
/// value slot is still open. Used to compose witnesses that each carry their own slots.
pub struct Pinned<W, R, E>(PhantomData<W>, PhantomData<fn(R)>, PhantomData<fn() -> E>);

impl<W: Hkt, R, E> Hkt for Pinned<W, R, E> {
    type Applied<R2, E2, A> = Kind<W, R, E, A>;
}

/// Witness-level composition: `F` applied to `G` applied to `A`, threading the same slots
/// through both layers.
///
/// ```rust
/// # use kinded::{Compose, Kind, PartiallyApplied};
/// let nested: Kind<Compose<Option<PartiallyApplied>, Vec<PartiallyApplied>>, (), (), u8> =
///     Some(vec![1, 2]);
/// assert_eq!(nested, Some(vec![1, 2]));
/// ```
pub struct Compose<F, G>(PhantomData<F>, PhantomData<G>);

impl<F: Hkt, G: Hkt> Hkt for Compose<F, G> {
    type Applied<R, E, A> = Kind<F, R, E, Kind<G, R, E, A>>;
}

/// Fallback encoding: a witness for any marker `F` that declares no application of its own.
///
/// Applying `Tagged<F>` yields a [`Tag`], a structural stand-in that only records its
/// parameters at the type level.
pub struct Tagged<F>(PhantomData<F>);

impl<F> Hkt for Tagged<F> {
    type Applied<R, E, A> = Tag<F, R, E, A>;
}

/// Zero-sized tag carrying phantom functions of its parameters.
///
/// `R` sits in argument position and `E`/`A` in return position, which is enough for the
/// type checker to keep track of each parameter through generic code.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct Tag<F, R, E, A> {
    _f: PhantomData<F>,
    _r: PhantomData<fn(R)>,
    _e: PhantomData<fn() -> E>,
    _a: PhantomData<fn() -> A>,
}

impl<F, R, E, A> Tag<F, R, E, A> {
    pub const fn new() -> Self {
        Tag {
            _f: PhantomData,
            _r: PhantomData,
            _e: PhantomData,
            _a: PhantomData,
        }
    }
}

// manual impls: derives would bound every parameter

impl<F, R, E, A> Default for Tag<F, R, E, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, R, E, A> Clone for Tag<F, R, E, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F, R, E, A> Copy for Tag<F, R, E, A> {}

impl<F, R, E, A> PartialEq for Tag<F, R, E, A> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<F, R, E, A> Eq for Tag<F, R, E, A> {}

impl<F, R, E, A> Hash for Tag<F, R, E, A> {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

impl<F, R, E, A> fmt::Debug for Tag<F, R, E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag<{}>", std::any::type_name::<A>())
    }
}
