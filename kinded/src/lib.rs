//! Higher-kinded containers, typeclass dictionaries and generic traversal.
//!
//! Containers are named at the type level by witnesses implementing [`Hkt`]. Operations
//! that work over any container take a dictionary value ([`Functor`], [`Apply`],
//! [`Applicative`], [`Traversable`]) as an explicit argument:
//!
//! ```rust
//! use kinded::{either, option, seq};
//!
//! let all = seq::traverse(&option::applicative(), |n: u32| n.checked_sub(1), vec![3, 2, 1]);
//! assert_eq!(all, Some(vec![2, 1, 0]));
//!
//! let first_err = seq::sequence(
//!     &either::applicative::<&str>(),
//!     vec![either::right(1), either::left("a"), either::left("b")],
//! );
//! assert_eq!(first_err, either::left("a"));
//! ```
mod compose;
mod function;
mod kind;
mod typeclass;

pub mod either;
pub mod option;
pub mod seq;
pub mod tag;

pub use compose::{get_compose, ComposeInstance};
pub use either::{Either, EitherInstance};
pub use function::{flow2, identity, Pipe};
pub use kind::{Compose, Hkt, Kind, PartiallyApplied, Pinned, Tag, Tagged};
pub use option::OptionInstance;
pub use seq::SeqInstance;
pub use tag::TagInstance;
pub use typeclass::{
    lift2, sequence_t2, sequence_t3, Applicative, Apply, Functor, KindOf, Traversable,
};
