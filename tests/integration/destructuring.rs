// Integration tests for destructuring patterns in def, var and fn
use crate::common::{error_kind, eval_source, show};
use kiln::{ErrorKind, Value};

// === sequential patterns ===

#[test]
fn test_def_tuple_basic() {
    assert_eq!(show("(def [a b] [1 2]) (+ a b)"), "3");
}

#[test]
fn test_list_and_array_patterns() {
    assert_eq!(show("(def (a b) [1 2]) [b a]"), "(2 1)");
    assert_eq!(show("(def @[a b] @[1 2]) [b a]"), "(2 1)");
}

#[test]
fn test_short_source_binds_nil() {
    assert_eq!(show("(def [a b c] [1]) [a b c]"), "(1 nil nil)");
}

#[test]
fn test_non_composite_source_binds_nil() {
    assert_eq!(show("(def [a] 5) a"), "nil");
    assert_eq!(show("(def {:k v} [1 2]) v"), "nil");
}

#[test]
fn test_rest_pattern() {
    assert_eq!(show("(def [h & t] [1 2 3]) [h t]"), "(1 (2 3))");
    assert_eq!(show("(def [h & t] [1]) t"), "()");
}

#[test]
fn test_nested_patterns() {
    assert_eq!(
        show("(def [a [b c] {:d d}] [1 [2 3] {:d 4}]) [a b c d]"),
        "(1 2 3 4)"
    );
}

// === associative patterns ===

#[test]
fn test_struct_pattern() {
    assert_eq!(show("(def {:x x :y y} {:x 1 :y 2}) [x y]"), "(1 2)");
}

#[test]
fn test_table_pattern_and_missing_key() {
    assert_eq!(show("(def @{:x x :z z} @{:x 1}) [x z]"), "(1 nil)");
}

#[test]
fn test_literal_keys() {
    assert_eq!(show("(def {'s v 1 w \"k\" u} {'s 4 1 5 \"k\" 6}) [v w u]"), "(4 5 6)");
}

// === evaluation ===

#[test]
fn test_value_is_evaluated_once() {
    assert_eq!(
        show("(var n 0) (def [a b] (do (set n (+ n 1)) [1 2])) n"),
        "1"
    );
}

#[test]
fn test_destructuring_def_returns_whole_value() {
    assert_eq!(show("(def [a] [1 2])"), "(1 2)");
}

#[test]
fn test_var_pattern_bindings_are_mutable() {
    assert_eq!(show("(var [a b] [1 2]) (set a 10) [a b]"), "(10 2)");
}

#[test]
fn test_def_pattern_bindings_are_constant() {
    assert_eq!(error_kind("(def [a] [1]) (set a 2)"), ErrorKind::ImmutableBinding);
}

#[test]
fn test_local_destructuring() {
    assert_eq!(
        show("(def f (fn [p] (def [x y] p) (+ x y))) (f [3 4])"),
        "7"
    );
}

#[test]
fn test_fn_parameter_patterns() {
    assert_eq!(
        show("((fn [[a b] {:k k}] [a b k]) [1 2] {:k 3})"),
        "(1 2 3)"
    );
    assert_eq!(show("((fn [x & [y z]] [x y z]) 1 2 3)"), "(1 2 3)");
}

// === malformed ===

#[test]
fn test_malformed_patterns() {
    assert_eq!(error_kind("(def 1 2)"), ErrorKind::MalformedPattern);
    assert_eq!(error_kind("(def [a 1] [1 2])"), ErrorKind::MalformedPattern);
    assert_eq!(error_kind("(def \"s\" 2)"), ErrorKind::MalformedPattern);
    assert_eq!(error_kind("(def {k v} {})"), ErrorKind::MalformedPattern);
    assert_eq!(error_kind("(def [a &] [])"), ErrorKind::MalformedPattern);
    assert_eq!(error_kind("((fn [[1]] 1) [1])"), ErrorKind::MalformedPattern);
}

#[test]
fn test_destructure_nil_value() {
    assert_eq!(eval_source("(def [a] nil) a").unwrap(), Value::Nil);
}
