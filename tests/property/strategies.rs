// Shared proptest strategies producing surface source text
use proptest::prelude::*;

/// Integers that print the same way as the number values they read as.
pub fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000
}

/// Atoms that quote to themselves or to a symbol/keyword.
pub fn atom() -> impl Strategy<Value = String> {
    prop_oneof![
        small_int().prop_map(|n| n.to_string()),
        "[a-z][a-z0-9]{0,5}".prop_filter("reserved words", |s| {
            !matches!(s.as_str(), "nil" | "true" | "false")
        }),
        "[a-z]{1,4}".prop_map(|s| format!(":{}", s)),
        "[a-z ]{0,6}".prop_map(|s| format!("\"{}\"", s)),
        Just("nil".to_string()),
        Just("true".to_string()),
    ]
}

/// Nested sequential data without unquotes: lists, tuples and arrays.
pub fn datum() -> impl Strategy<Value = String> {
    atom().prop_recursive(3, 24, 4, |inner| {
        (prop::collection::vec(inner, 0..4), 0..3usize).prop_map(|(items, shape)| {
            let body = items.join(" ");
            match shape {
                0 => format!("({})", body),
                1 => format!("[{}]", body),
                _ => format!("@[{}]", body),
            }
        })
    })
}
