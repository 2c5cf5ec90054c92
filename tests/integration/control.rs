// if, do, while and break
use crate::common::{error_kind, eval_source, show};
use kiln::{ErrorKind, Value};

#[test]
fn test_if_truthiness() {
    // Only nil and false are false-like
    for (cond, expected) in [
        ("nil", 2.0),
        ("false", 2.0),
        ("true", 1.0),
        ("0", 1.0),
        ("\"\"", 1.0),
        ("[]", 1.0),
        ("@{}", 1.0),
        (":k", 1.0),
    ] {
        let source = format!("(if {} 1 2)", cond);
        assert_eq!(
            eval_source(&source).unwrap(),
            Value::Number(expected),
            "{}",
            source
        );
    }
}

#[test]
fn test_if_without_else_is_nil() {
    assert_eq!(eval_source("(if false 1)").unwrap(), Value::Nil);
}

#[test]
fn test_if_only_evaluates_chosen_branch() {
    assert_eq!(show("(var n 0) (if true 1 (set n 9)) n"), "0");
    assert_eq!(show("(var n 0) (if nil (set n 9) 2) n"), "0");
}

#[test]
fn test_do_returns_last_value() {
    assert_eq!(show("(do 1 2 3)"), "3");
    assert_eq!(show("(do)"), "nil");
}

#[test]
fn test_while_runs_n_iterations() {
    let result = show(
        "(var i 0)
         (var n 0)
         (while (< i 5)
           (set i (+ i 1))
           (set n (+ n 2)))
         n",
    );
    assert_eq!(result, "10");
}

#[test]
fn test_while_evaluates_to_nil() {
    assert_eq!(show("(var i 0) (while (< i 3) (set i (+ i 1)))"), "nil");
    assert_eq!(show("(while false 1)"), "nil");
}

#[test]
fn test_break_value_is_ignored_by_while() {
    assert_eq!(show("(while true (break 7))"), "nil");
}

#[test]
fn test_break_in_condition_ends_loop() {
    assert_eq!(show("(var n 0) (while (break) (set n 1)) n"), "0");
}

#[test]
fn test_break_stops_loop_early() {
    let result = show(
        "(var i 0)
         (while true
           (if (= i 4) (break))
           (set i (+ i 1)))
         i",
    );
    assert_eq!(result, "4");
}

#[test]
fn test_break_in_fn_returns_from_fn() {
    assert_eq!(show("(def f (fn [] (break 3) 4)) (f)"), "3");
    assert_eq!(show("((fn [] (break) 4))"), "nil");
}

#[test]
fn test_break_in_fn_inside_while_leaves_only_fn() {
    let result = show(
        "(var hits 0)
         (while (< hits 3)
           (set hits (+ hits 1))
           ((fn [] (break 99))))
         hits",
    );
    assert_eq!(result, "3");
}

#[test]
fn test_break_in_nested_while_leaves_inner_loop() {
    let result = show(
        "(var outer 0)
         (var inner 0)
         (while (< outer 3)
           (set outer (+ outer 1))
           (while true
             (set inner (+ inner 1))
             (break)))
         [outer inner]",
    );
    assert_eq!(result, "(3 3)");
}

#[test]
fn test_break_without_target_is_compile_error() {
    assert_eq!(error_kind("(break 1)"), ErrorKind::NoEnclosingTarget);
    assert_eq!(error_kind("(do (break))"), ErrorKind::NoEnclosingTarget);
}

#[test]
fn test_loop_body_gets_fresh_frame_each_iteration() {
    let result = show(
        "(var i 0)
         (def fs @[])
         (while (< i 3)
           (def j i)
           (put fs i (fn [] j))
           (set i (+ i 1)))
         [((get fs 0)) ((get fs 1)) ((get fs 2))]",
    );
    assert_eq!(result, "(0 1 2)");
}
