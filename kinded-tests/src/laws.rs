use crate::arb::*;
use kinded::{
    either, get_compose, identity, option, seq, sequence_t3, Applicative, Apply, Either, Functor,
    Traversable,
};
use proptest::prelude::*;

fn inc(n: i32) -> i32 {
    n.wrapping_add(1)
}

fn triple(n: i32) -> i32 {
    n.wrapping_mul(3)
}

// natural transformation from Option to Either used by the naturality law
fn present_or_oops<A>(opt: Option<A>) -> Either<&'static str, A> {
    match opt {
        Some(a) => Either::Right(a),
        None => Either::Left("oops"),
    }
}

proptest! {
    #[test]
    fn functor_identity(o in arb_option(), e in arb_either(), xs in arb_seq()) {
        let od = option::applicative();
        let ed = either::applicative::<String>();
        let sd = seq::traversable();

        prop_assert_eq!(od.map(identity, o), o);
        prop_assert_eq!(ed.map(identity, e.clone()), e);
        prop_assert_eq!(sd.map(identity, xs.clone()), xs);
    }

    #[test]
    fn functor_composition(o in arb_option(), e in arb_either(), xs in arb_seq()) {
        let od = option::applicative();
        let ed = either::applicative::<String>();
        let sd = seq::traversable();

        prop_assert_eq!(od.map(|x| triple(inc(x)), o), od.map(triple, od.map(inc, o)));
        prop_assert_eq!(
            ed.map(|x| triple(inc(x)), e.clone()),
            ed.map(triple, ed.map(inc, e))
        );
        prop_assert_eq!(
            sd.map(|x| triple(inc(x)), xs.clone()),
            sd.map(triple, sd.map(inc, xs))
        );
    }

    #[test]
    fn applicative_identity(o in arb_option(), e in arb_either(), nested in arb_seq_of_nested()) {
        let od = option::applicative();
        let ed = either::applicative::<String>();
        prop_assert_eq!(od.ap(o, od.of(identity)), o);
        prop_assert_eq!(ed.ap(e.clone(), ed.of(identity)), e);

        let cd = get_compose(&od, &ed);
        for v in nested {
            prop_assert_eq!(cd.ap(v.clone(), cd.of(identity)), v);
        }
    }

    #[test]
    fn applicative_homomorphism(x in any::<i32>()) {
        let od = option::applicative();
        let ed = either::applicative::<String>();
        let cd = get_compose(&od, &ed);

        prop_assert_eq!(od.ap(od.of(x), od.of(inc)), od.of(inc(x)));
        prop_assert_eq!(ed.ap(ed.of(x), ed.of(inc)), ed.of(inc(x)));
        prop_assert_eq!(cd.ap(cd.of(x), cd.of(inc)), cd.of(inc(x)));
    }

    #[test]
    fn traverse_identity(xs in arb_seq_of_options()) {
        let od = option::applicative();
        prop_assert_eq!(seq::traverse(&od, |x| od.of(x), xs.clone()), od.of(xs));
    }

    #[test]
    fn traverse_naturality(xs in arb_seq_of_options()) {
        let ed = either::applicative::<&'static str>();
        prop_assert_eq!(
            present_or_oops(seq::sequence(&option::applicative(), xs.clone())),
            seq::traverse(&ed, present_or_oops, xs)
        );
    }

    #[test]
    fn traverse_composition(xs in arb_seq_of_nested()) {
        let od = option::applicative();
        let ed = either::applicative::<String>();
        prop_assert_eq!(
            option::map(|v| seq::sequence(&ed, v), seq::sequence(&od, xs.clone())),
            seq::sequence(&get_compose(&od, &ed), xs)
        );
    }

    #[test]
    fn first_left_by_index_wins(xs in arb_seq_of_eithers()) {
        let expected: Either<String, Vec<i32>> = match xs.iter().find_map(|x| x.as_left().cloned()) {
            Some(err) => Either::Left(err),
            None => Either::Right(xs.iter().filter_map(|x| x.as_right().copied()).collect()),
        };
        prop_assert_eq!(seq::sequence(&either::applicative::<String>(), xs), expected);
    }

    #[test]
    fn traverse_calls_f_once_per_element(xs in arb_seq()) {
        let mut visited = Vec::new();
        let out = seq::traverse(
            &either::applicative::<i32>(),
            |x: i32| {
                visited.push(x);
                if x % 2 == 0 { either::right(x) } else { either::left(x) }
            },
            xs.clone(),
        );
        prop_assert_eq!(out.is_right(), xs.iter().all(|x| x % 2 == 0));
        prop_assert_eq!(visited, xs);
    }

    #[test]
    fn sequence_t3_all_present(a in arb_option(), b in arb_option(), c in arb_option()) {
        let expected = match (a, b, c) {
            (Some(a), Some(b), Some(c)) => Some((a, b, c)),
            _ => None,
        };
        prop_assert_eq!(sequence_t3(&option::applicative(), a, b, c), expected);
    }
}

// the traverse laws again, with each of the other traversables as the source
proptest! {
    #[test]
    fn traverse_identity_per_source(
        o in arb_option(),
        e in arb_either_of(arb_option()),
        c in arb_option_of_seq(),
    ) {
        let od = option::applicative();
        let ed = either::applicative::<String>();
        let sd = seq::traversable();
        let composite = get_compose(&od, &sd);

        prop_assert_eq!(od.traverse(&ed, |x| ed.of(x), o), ed.of(o));
        prop_assert_eq!(ed.traverse(&od, |x| od.of(x), e.clone()), od.of(e));
        prop_assert_eq!(composite.traverse(&od, |x| od.of(x), c.clone()), od.of(c));
    }

    #[test]
    fn traverse_naturality_per_source(
        o in proptest::option::of(arb_option()),
        e in arb_either_of(arb_option()),
        c in arb_option_of_seq_of_options(),
    ) {
        let od = option::applicative();
        let ed = either::applicative::<String>();
        let oops = either::applicative::<&'static str>();
        let sd = seq::traversable();
        let composite = get_compose(&od, &sd);

        prop_assert_eq!(
            present_or_oops(od.sequence(&od, o)),
            od.traverse(&oops, present_or_oops, o)
        );
        prop_assert_eq!(
            present_or_oops(ed.sequence(&od, e.clone())),
            ed.traverse(&oops, present_or_oops, e)
        );
        prop_assert_eq!(
            present_or_oops(composite.sequence(&od, c.clone())),
            composite.traverse(&oops, present_or_oops, c)
        );
    }

    #[test]
    fn traverse_composition_per_source(
        o in arb_option_of_nested(),
        e in arb_either_of(proptest::option::of(arb_either())),
    ) {
        let od = option::applicative();
        let ed = either::applicative::<String>();
        let inner = get_compose(&od, &ed);

        prop_assert_eq!(
            option::map(|v| od.sequence(&ed, v), od.sequence(&od, o.clone())),
            od.sequence(&inner, o)
        );
        prop_assert_eq!(
            option::map(|v| ed.sequence(&ed, v), ed.sequence(&od, e.clone())),
            ed.sequence(&inner, e)
        );
    }
}
