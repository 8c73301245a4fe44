use crate::errors::{parse, parse_percent, InputError, ParseError, RangeError};
use kinded::{
    either, get_compose, option, seq, tag, Applicative, Either, Pipe, Tag, Traversable,
};

#[test]
fn traverse_identity_on_present_values() {
    let od = option::applicative();
    let xs = vec![Some(1), Some(2), Some(3)];
    assert_eq!(seq::traverse(&od, |x| od.of(x), xs.clone()), od.of(xs));
}

#[test]
fn traverse_naturality_on_present_values() {
    let t = |opt: Option<i32>| match opt {
        Some(v) => either::right::<&str, i32>(v),
        None => either::left("oops"),
    };
    let xs = vec![Some(5), Some(7), Some(9)];

    let lhs = seq::sequence(&option::applicative(), xs.clone())
        .map(Either::Right)
        .unwrap_or(Either::Left("oops"));
    let rhs = seq::traverse(&either::applicative::<&str>(), t, xs);
    assert_eq!(lhs, Either::Right(vec![5, 7, 9]));
    assert_eq!(lhs, rhs);
}

#[test]
fn traverse_composition_on_present_values() {
    let od = option::applicative();
    let ed = either::applicative::<&str>();
    let xs = vec![
        Some(either::right(1)),
        Some(either::right(2)),
        Some(either::right(3)),
    ];

    let lhs = option::map(|v| seq::sequence(&ed, v), seq::sequence(&od, xs.clone()));
    let rhs = seq::sequence(&get_compose(&od, &ed), xs);
    assert_eq!(lhs, Some(Either::Right(vec![1, 2, 3])));
    assert_eq!(lhs, rhs);
}

#[test]
fn left_short_circuits_under_every_applicative() {
    let bad = either::left::<&str, i32>("bad");
    let ed = either::applicative::<&str>();
    let od = option::applicative();
    let mut calls = 0;

    let out = ed.traverse(
        &od,
        |x: i32| {
            calls += 1;
            Some(x)
        },
        bad,
    );
    assert_eq!(out, od.of(either::left("bad")));

    let inner = either::applicative::<String>();
    let out = ed.traverse(
        &inner,
        |x: i32| {
            calls += 1;
            either::right::<String, i32>(x)
        },
        bad,
    );
    assert_eq!(out, inner.of(either::left("bad")));

    let composed = get_compose(&od, &inner);
    let out = ed.traverse(
        &composed,
        |x: i32| {
            calls += 1;
            Some(either::right::<String, i32>(x))
        },
        bad,
    );
    assert_eq!(out, composed.of(either::left("bad")));

    enum Phantom {}
    let td = tag::applicative::<Phantom, (), ()>();
    let out = ed.traverse(
        &td,
        |_: i32| {
            calls += 1;
            Tag::new()
        },
        bad,
    );
    assert_eq!(out, td.of(either::left::<&str, i32>("bad")));

    assert_eq!(calls, 0);
}

#[test]
fn widening_keeps_both_errors() {
    assert_eq!(parse_percent("42"), Either::Right(42));
    assert_eq!(
        parse_percent("forty"),
        Either::Left(InputError::Parse(ParseError::NotANumber("forty".into())))
    );
    assert_eq!(
        parse_percent("400"),
        Either::Left(InputError::Range(RangeError::OutOfRange(400)))
    );
}

#[test]
fn map_left_transforms_only_the_widened_error() {
    let render = either::map_left_(|e: InputError| e.to_string());

    assert_eq!(parse_percent("7").pipe(render), Either::Right(7));
    assert_eq!(
        parse_percent("-3").pipe(either::map_left_(|e: InputError| e.to_string())),
        Either::Left("-3 is out of range".to_string())
    );
    assert_eq!(
        parse_percent("x").pipe(either::map_left_(|e: InputError| e.to_string())),
        Either::Left("not a number: \"x\"".to_string())
    );
}

#[test]
fn ap_prefers_the_function_operands_error() {
    let fab = either::left::<InputError, fn(i64) -> i64>(RangeError::OutOfRange(0).into());
    let out = either::ap(parse("nope"), fab);
    assert_eq!(out, Either::Left(InputError::Range(RangeError::OutOfRange(0))));

    let double: fn(i64) -> i64 = |n| n * 2;
    let out: Either<InputError, i64> = either::ap(parse("nope"), either::right(double));
    assert_eq!(
        out,
        Either::Left(InputError::Parse(ParseError::NotANumber("nope".into())))
    );
}

#[test]
fn serde_round_trip() -> Result<(), serde_json::Error> {
    let values = vec![either::left::<String, u32>("bad".into()), either::right(3)];
    let json = serde_json::to_string(&values)?;
    assert_eq!(json, r#"[{"Left":"bad"},{"Right":3}]"#);
    let back: Vec<Either<String, u32>> = serde_json::from_str(&json)?;
    assert_eq!(back, values);

    enum Marker {}
    let t = Tag::<Marker, (), (), u32>::new();
    let back: Tag<Marker, (), (), u32> = serde_json::from_str(&serde_json::to_string(&t)?)?;
    assert_eq!(back, t);
    Ok(())
}
