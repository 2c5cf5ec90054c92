// Structured compile errors: kinds, forms and positions
use crate::common::{compile_error, error_kind, eval_in, read_all};
use kiln::{ErrorKind, Session, Value};

#[test]
fn test_error_carries_form_and_position() {
    let err = compile_error("(def x 1)\n  (set x 2)");
    assert_eq!(err.kind, ErrorKind::ImmutableBinding);
    assert_eq!(err.form, "(set x 2)");
    assert_eq!((err.span.line, err.span.col), (2, 3));
    assert_eq!(
        err.to_string(),
        "2:3: immutable binding: cannot set constant `x` in (set x 2)"
    );
}

#[test]
fn test_invalid_special_forms() {
    for source in [
        "(if)",
        "(if 1 2 3 4)",
        "(quote a b)",
        "(fn)",
        "(fn name)",
        "(def x)",
        "(while)",
        "(break 1 2)",
        "(splice)",
        "(quasiquote)",
        "(fn [& a b] 1)",
    ] {
        assert_eq!(error_kind(source), ErrorKind::InvalidForm, "{}", source);
    }
}

#[test]
fn test_unbound_symbol() {
    let err = compile_error("(+ 1 nope)");
    assert_eq!(err.kind, ErrorKind::UnboundSymbol);
    assert_eq!(err.form, "nope");
}

#[test]
fn test_error_aborts_only_that_form() {
    let mut session = Session::new();
    eval_in(&mut session, "(def ok 1)").unwrap();
    assert!(eval_in(&mut session, "(def [bad 1] [2 3])").is_err());
    assert_eq!(session.lookup_global("ok"), Some(Value::Number(1.0)));
    assert!(session.global_binding("bad").is_none());
    assert_eq!(eval_in(&mut session, "(+ ok 1)").unwrap(), Value::Number(2.0));
}

#[test]
fn test_eval_all_stops_at_first_failure() {
    let mut session = Session::new();
    let forms = read_all("(var n 1) (set n 2) (set m 3) (set n 4)").unwrap();
    assert!(session.eval_all(&forms).is_err());
    assert_eq!(session.lookup_global("n"), Some(Value::Number(2.0)));
}

#[test]
fn test_special_form_names_cannot_be_rebound_as_calls() {
    // Even after (def if ...), (if ...) is the special form
    let mut session = Session::new();
    eval_in(&mut session, "(def if 5)").unwrap();
    assert_eq!(eval_in(&mut session, "(if false 1 2)").unwrap(), Value::Number(2.0));
    assert_eq!(eval_in(&mut session, "if").unwrap(), Value::Number(5.0));
}
