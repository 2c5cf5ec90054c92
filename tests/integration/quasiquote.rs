// Quasiquote templates: holes, nesting depth and splicing
use crate::common::{error_kind, eval_source, show};
use kiln::{Error, ErrorKind, RuntimeError};

#[test]
fn test_quote_returns_data() {
    assert_eq!(show("'(a b 1)"), "(a b 1)");
    assert_eq!(show("'x"), "x");
    assert_eq!(show("'[a @[b]]"), "[a @[b]]");
    assert_eq!(show("'(a [b] {:c [d]})"), "(a [b] {:c [d]})");
}

#[test]
fn test_unquote_substitutes_value() {
    assert_eq!(show("~(a ,(+ 1 2))"), "(a 3)");
}

#[test]
fn test_symbols_are_literal() {
    assert_eq!(show("~x"), "x");
    assert_eq!(show("~(def x 1)"), "(def x 1)");
}

#[test]
fn test_atoms_pass_through() {
    assert_eq!(show("~(1 \"s\" :k true nil)"), "(1 \"s\" :k true nil)");
}

#[test]
fn test_nested_quasiquote_needs_two_unquotes() {
    assert_eq!(
        show("~(a ~(b ,(+ 1 2)))"),
        "(a (quasiquote (b (unquote (+ 1 2)))))"
    );
    assert_eq!(
        show("(def x 5) ~(a ~(b ,,x))"),
        "(a (quasiquote (b (unquote 5))))"
    );
}

#[test]
fn test_unquote_splice() {
    assert_eq!(show("(def xs [2 3]) ~(1 ,;xs 4)"), "(1 2 3 4)");
    assert_eq!(show("~(1 ,;@[] 2)"), "(1 2)");
}

#[test]
fn test_splice_without_unquote_is_literal() {
    assert_eq!(show("~(1 ;xs)"), "(1 (splice xs))");
}

#[test]
fn test_splice_of_non_sequence_fails() {
    assert_eq!(
        eval_source("~(1 ,;5)").unwrap_err(),
        Error::Runtime(RuntimeError::splice_non_sequential("number"))
    );
}

#[test]
fn test_holes_see_lexical_scope() {
    assert_eq!(show("(def f (fn [x] ~(x ,x))) (f 7)"), "(x 7)");
}

#[test]
fn test_composite_shapes_are_kept() {
    assert_eq!(show("~[a ,(+ 1 1)]"), "[a 2]");
    assert_eq!(show("~@[1 ,(+ 1 1)]"), "@[1 2]");
    assert_eq!(show("~{:a ,(+ 1 1)}"), "{:a 2}");
    assert_eq!(show("~@{:a ,(+ 1 1)}"), "@{:a 2}");
}

#[test]
fn test_bracket_templates_keep_their_brackets() {
    assert_eq!(show("~(fn [x] ,(+ 1 1))"), "(fn [x] 2)");
    assert_eq!(show("(def xs [1 2]) ~[,;xs 3]"), "[1 2 3]");
    assert_eq!(show("~~[a ,[b]]"), "(quasiquote [a (unquote [b])])");
    // Delimiters only matter for printing
    assert_eq!(show("(= ~[a b] '(a b))"), "true");
}

#[test]
fn test_array_templates_are_fresh_each_time() {
    assert_eq!(
        show("(def f (fn [] ~@[1])) (def a (f)) (put a 0 9) (f)"),
        "@[1]"
    );
}

#[test]
fn test_unquote_outside_quasiquote() {
    assert_eq!(error_kind(",x"), ErrorKind::UnquoteOutsideQuasiquote);
    assert_eq!(error_kind("(unquote 1)"), ErrorKind::UnquoteOutsideQuasiquote);
}

#[test]
fn test_hole_with_unbound_symbol_fails_at_compile_time() {
    assert_eq!(error_kind("~(a ,nope)"), ErrorKind::UnboundSymbol);
}

#[test]
fn test_odd_struct_template_fails() {
    assert_eq!(error_kind("~{:a}"), ErrorKind::InvalidForm);
}

#[test]
fn test_template_builds_code_that_evaluates() {
    // Quoted code is data; the primitives see tuples, not forms
    assert_eq!(show("(length ~(+ 1 ,(+ 1 1)))"), "3");
}
