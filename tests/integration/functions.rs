// fn: parameters, closures, recursion and arity laxity
use crate::common::{eval_source, show};
use kiln::{RuntimeError, Value};

#[test]
fn test_named_fn_recursion() {
    assert_eq!(
        show("(def fact (fn fact [n] (if (<= n 1) 1 (* n (fact (- n 1)))))) (fact 5)"),
        "120"
    );
}

#[test]
fn test_missing_arguments_bind_nil() {
    assert_eq!(show("((fn [a b] [a b]) 1)"), "(1 nil)");
}

#[test]
fn test_extra_arguments_are_ignored() {
    assert_eq!(show("((fn [a] a) 1 2 3)"), "1");
}

#[test]
fn test_rest_parameter_collects_tuple() {
    assert_eq!(show("((fn [a & r] r) 1 2 3)"), "(2 3)");
    assert_eq!(show("((fn [a & r] r) 1)"), "()");
}

#[test]
fn test_opt_marker_binds_nil_when_missing() {
    assert_eq!(show("((fn [a &opt b] [a b]) 1)"), "(1 nil)");
}

#[test]
fn test_closures_capture_locals() {
    let result = show(
        "(def make-adder (fn [n] (fn [x] (+ x n))))
         (def add5 (make-adder 5))
         (add5 10)",
    );
    assert_eq!(result, "15");
}

#[test]
fn test_closure_counter_keeps_state() {
    let result = show(
        "(def counter (do (var n 0) (fn [] (set n (+ n 1)))))
         (counter)
         (counter)
         (counter)",
    );
    assert_eq!(result, "3");
}

#[test]
fn test_empty_body_returns_nil() {
    assert_eq!(eval_source("((fn []))").unwrap(), Value::Nil);
}

#[test]
fn test_fn_display() {
    assert_eq!(show("(fn named [] 1)"), "<function named>");
    assert_eq!(show("(fn [] 1)"), "<function>");
    assert_eq!(show("+"), "<cfunction +>");
}

#[test]
fn test_calling_non_callable_is_runtime_error() {
    let err = eval_source("(1 2)").unwrap_err();
    assert_eq!(
        err,
        kiln::Error::Runtime(RuntimeError::not_callable("number"))
    );
}

#[test]
fn test_primitive_arity_is_enforced() {
    let err = eval_source("(not)").unwrap_err();
    assert!(matches!(
        err,
        kiln::Error::Runtime(RuntimeError::ArityMismatch { .. })
    ));
}
