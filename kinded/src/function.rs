//! Small helpers for writing pipelines with the argument-flipped `*_` combinators.

/// Returns its argument unchanged.
#[inline(always)]
pub fn identity<A>(a: A) -> A {
    a
}

/// Left-to-right function composition: `flow2(f, g)(a) == g(f(a))`.
pub fn flow2<A, B, C>(f: impl FnOnce(A) -> B, g: impl FnOnce(B) -> C) -> impl FnOnce(A) -> C {
    move |a| g(f(a))
}

/// Feed a value into a function, so that `*_` combinators read left to right:
///
/// ```rust
/// use kinded::{either, Pipe};
///
/// let out = either::right::<String, i32>(20)
///     .pipe(either::map_(|n: i32| n + 1))
///     .pipe(either::map_left_(|e: String| e.len()));
/// assert_eq!(out, either::right(21));
/// ```
pub trait Pipe: Sized {
    fn pipe<B>(self, f: impl FnOnce(Self) -> B) -> B {
        f(self)
    }
}

impl<T> Pipe for T {}
