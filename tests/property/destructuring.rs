// Property tests for destructuring binds.
//
// Sequential patterns bind element i to the i-th symbol, nil past the end,
// and a rest symbol gets the remaining elements.

use super::strategies::small_int;
use crate::common::eval_source;
use kiln::Value;
use proptest::prelude::*;

fn numbers(xs: &[i64]) -> String {
    xs.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(" ")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn sequential_binds_by_position(
        xs in prop::collection::vec(small_int(), 0..6),
        width in 1usize..8,
    ) {
        let names: Vec<String> = (0..width).map(|i| format!("v{}", i)).collect();
        let source = format!(
            "(def [{}] [{}]) [{}]",
            names.join(" "),
            numbers(&xs),
            names.join(" ")
        );
        let expected: Vec<Value> = (0..width)
            .map(|i| xs.get(i).map_or(Value::Nil, |n| Value::Number(*n as f64)))
            .collect();
        prop_assert_eq!(eval_source(&source).unwrap(), Value::tuple(expected));
    }

    #[test]
    fn rest_gets_the_tail(xs in prop::collection::vec(small_int(), 0..8), fixed in 0usize..4) {
        let names: Vec<String> = (0..fixed).map(|i| format!("v{}", i)).collect();
        let source = format!("(def [{} & more] @[{}]) more", names.join(" "), numbers(&xs));
        let tail: Vec<Value> = xs.iter().skip(fixed).map(|n| Value::Number(*n as f64)).collect();
        prop_assert_eq!(eval_source(&source).unwrap(), Value::tuple(tail));
    }

    #[test]
    fn fn_params_match_def_patterns(a in small_int(), b in small_int()) {
        let via_def = eval_source(&format!("(def [x {{:k y}}] [{} {{:k {}}}]) [x y]", a, b)).unwrap();
        let via_fn = eval_source(&format!("((fn [[x {{:k y}}]] [x y]) [{} {{:k {}}}])", a, b)).unwrap();
        prop_assert_eq!(via_def, via_fn);
    }
}
