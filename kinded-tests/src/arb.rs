//! proptest strategies for the containers under test
use kinded::Either;
use proptest::prelude::*;

pub fn arb_option() -> impl Strategy<Value = Option<i32>> {
    proptest::option::of(any::<i32>())
}

pub fn arb_either() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(Either::Left),
        any::<i32>().prop_map(Either::Right),
    ]
}

pub fn arb_seq() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(any::<i32>(), 0..32)
}

pub fn arb_seq_of_options() -> impl Strategy<Value = Vec<Option<i32>>> {
    proptest::collection::vec(arb_option(), 0..32)
}

pub fn arb_seq_of_eithers() -> impl Strategy<Value = Vec<Either<String, i32>>> {
    proptest::collection::vec(arb_either(), 0..32)
}

// options are mostly present so that the inner layer gets exercised
pub fn arb_seq_of_nested() -> impl Strategy<Value = Vec<Option<Either<String, i32>>>> {
    let nested = prop_oneof![
        1 => Just(None),
        8 => arb_either().prop_map(Some),
    ];
    proptest::collection::vec(nested, 0..16)
}

/// `Left` with a short message, or `Right` drawn from `right`
pub fn arb_either_of<S: Strategy>(right: S) -> impl Strategy<Value = Either<String, S::Value>> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(Either::Left),
        right.prop_map(Either::Right),
    ]
}

pub fn arb_option_of_seq() -> impl Strategy<Value = Option<Vec<i32>>> {
    proptest::option::of(arb_seq())
}

pub fn arb_option_of_seq_of_options() -> impl Strategy<Value = Option<Vec<Option<i32>>>> {
    proptest::option::of(arb_seq_of_options())
}

pub fn arb_option_of_nested() -> impl Strategy<Value = Option<Option<Either<String, i32>>>> {
    proptest::option::of(proptest::option::of(arb_either()))
}
