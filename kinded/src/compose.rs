//! Composition of two applicatives into one whose container is `F<G<A>>`.
use crate::kind::{Compose, Pinned};
use crate::typeclass::{Applicative, Apply, Functor, KindOf, Traversable};

/// Dictionary for the composite of `outer` and `inner`. Borrows both and holds nothing else.
///
/// Each side keeps its own `R`/`E` slots, so eg an `Option` outside an `Either<String, _>`
/// composes to `Option<Either<String, A>>`.
pub struct ComposeInstance<'a, F, G> {
    outer: &'a F,
    inner: &'a G,
}

/// Build the composite dictionary. Effects combine outer first: `outer`'s `ap` decides
/// before `inner`'s is consulted. The composite is as capable as its weaker side, so two
/// traversables compose into a traversable as well.
///
/// ```rust
/// use kinded::{either, get_compose, option, Applicative};
///
/// let o = option::applicative();
/// let e = either::applicative::<&str>();
/// let composed = get_compose(&o, &e);
/// assert_eq!(composed.of(1), Some(either::right(1)));
/// ```
pub fn get_compose<'a, F, G>(outer: &'a F, inner: &'a G) -> ComposeInstance<'a, F, G>
where
    F: Functor,
    G: Functor,
{
    tracing::trace!(
        outer = std::any::type_name::<F>(),
        inner = std::any::type_name::<G>(),
        "composing applicatives"
    );
    ComposeInstance { outer, inner }
}

impl<'a, F, G> Clone for ComposeInstance<'a, F, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, F, G> Copy for ComposeInstance<'a, F, G> {}

impl<'a, F: Functor, G: Functor> Functor for ComposeInstance<'a, F, G> {
    type Witness =
        Compose<Pinned<F::Witness, F::Env, F::Err>, Pinned<G::Witness, G::Env, G::Err>>;
    type Env = ();
    type Err = ();

    fn map<A, B, M>(&self, mut f: M, fga: KindOf<Self, A>) -> KindOf<Self, B>
    where
        M: FnMut(A) -> B,
    {
        let inner = self.inner;
        self.outer
            .map::<KindOf<G, A>, KindOf<G, B>, _>(move |ga| inner.map::<A, B, _>(&mut f, ga), fga)
    }
}

impl<'a, F: Apply, G: Apply> Apply for ComposeInstance<'a, F, G> {
    fn ap<A, B, H>(&self, fga: KindOf<Self, A>, fgab: KindOf<Self, H>) -> KindOf<Self, B>
    where
        H: FnOnce(A) -> B,
    {
        let inner = self.inner;
        let lifted = self.outer.map::<KindOf<G, H>, _, _>(
            move |gab: KindOf<G, H>| move |ga: KindOf<G, A>| inner.ap::<A, B, H>(ga, gab),
            fgab,
        );
        self.outer.ap::<KindOf<G, A>, KindOf<G, B>, _>(fga, lifted)
    }
}

impl<'a, F: Applicative, G: Applicative> Applicative for ComposeInstance<'a, F, G> {
    fn of<A>(&self, a: A) -> KindOf<Self, A> {
        self.outer.of::<KindOf<G, A>>(self.inner.of::<A>(a))
    }
}

impl<'a, F: Traversable, G: Traversable> Traversable for ComposeInstance<'a, F, G> {
    fn traverse<D, A, B, M>(&self, app: &D, mut f: M, ta: KindOf<Self, A>) -> KindOf<D, KindOf<Self, B>>
    where
        D: Applicative,
        M: FnMut(A) -> KindOf<D, B>,
    {
        let inner = self.inner;
        self.outer.traverse::<D, KindOf<G, A>, KindOf<G, B>, _>(
            app,
            |ga| inner.traverse::<D, A, B, _>(app, &mut f, ga),
            ta,
        )
    }
}
