// set: variables and (container key) places
use crate::common::{error_kind, eval_source, show};
use kiln::{Error, ErrorKind, RuntimeError};

#[test]
fn test_set_var_returns_value() {
    assert_eq!(show("(var x 1) (set x 5)"), "5");
    assert_eq!(show("(var x 1) (set x 5) x"), "5");
}

#[test]
fn test_set_undeclared_fails() {
    assert_eq!(error_kind("(set y 1)"), ErrorKind::InvalidLValue);
}

#[test]
fn test_set_constant_fails() {
    assert_eq!(error_kind("(def x 1) (set x 2)"), ErrorKind::ImmutableBinding);
    assert_eq!(
        error_kind("(fn [p] (set p 2))"),
        ErrorKind::ImmutableBinding
    );
}

#[test]
fn test_set_non_place_fails() {
    assert_eq!(error_kind("(set 1 2)"), ErrorKind::InvalidLValue);
    assert_eq!(error_kind("(set (a b c) 2)"), ErrorKind::InvalidLValue);
    assert_eq!(error_kind("(set [x] 2)"), ErrorKind::InvalidLValue);
    assert_eq!(error_kind("(set (quote x) 1)"), ErrorKind::InvalidLValue);
    assert_eq!(error_kind("(var x 1) (set 'x 2)"), ErrorKind::InvalidLValue);
}

#[test]
fn test_set_local_var() {
    assert_eq!(show("(def f (fn [] (var n 1) (set n (+ n 1)) n)) (f)"), "2");
}

#[test]
fn test_set_array_index() {
    assert_eq!(show("(def a @[1 2]) (set (a 0) 9) a"), "@[9 2]");
    assert_eq!(show("(def a @[1 2]) (set (a 2) 3) a"), "@[1 2 3]");
}

#[test]
fn test_set_array_past_end_fails() {
    assert_eq!(
        eval_source("(def a @[]) (set (a 5) 1)").unwrap_err(),
        Error::Runtime(RuntimeError::index_out_of_bounds(5, 0))
    );
}

#[test]
fn test_set_table_key() {
    assert_eq!(show("(def t @{}) (set (t :k) 1) t"), "@{:k 1}");
    assert_eq!(show("(def t @{:k 1}) (set (t :k) nil) t"), "@{}");
}

#[test]
fn test_set_on_immutable_container_fails() {
    assert_eq!(
        eval_source("(def t [1 2]) (set (t 0) 3)").unwrap_err(),
        Error::Runtime(RuntimeError::immutable_container("tuple"))
    );
    assert_eq!(
        eval_source("(def s {:a 1}) (set (s :a) 3)").unwrap_err(),
        Error::Runtime(RuntimeError::immutable_container("struct"))
    );
}

#[test]
fn test_set_evaluates_value_once() {
    assert_eq!(
        show("(var n 0) (def a @[0]) (set (a 0) (do (set n (+ n 1)) n)) [n a]"),
        "(1 @[1])"
    );
}
