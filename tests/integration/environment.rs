// Global and lexical bindings: def, var, redefinition and metadata
use crate::common::{eval_in, eval_source, show, show_in};
use kiln::value::TableKey;
use kiln::{ErrorKind, FrameId, Mutability, NoticeKind, Session, Value};

#[test]
fn test_def_then_lookup() {
    assert_eq!(eval_source("(def x 42) x").unwrap(), Value::Number(42.0));
}

#[test]
fn test_def_evaluates_to_value() {
    assert_eq!(eval_source("(def x 7)").unwrap(), Value::Number(7.0));
}

#[test]
fn test_def_is_constant_var_is_mutable() {
    let mut session = Session::new();
    eval_in(&mut session, "(def c 1) (var v 2)").unwrap();
    assert_eq!(
        session.global_binding("c").unwrap().mutability(),
        Mutability::Constant
    );
    assert_eq!(
        session.global_binding("v").unwrap().mutability(),
        Mutability::Mutable
    );
}

#[test]
fn test_environment_assign_to_constant_fails() {
    let mut session = Session::new();
    eval_in(&mut session, "(def c 1)").unwrap();
    let err = session
        .global_binding("c")
        .unwrap()
        .assign(Value::Number(2.0))
        .unwrap_err();
    assert!(matches!(err, kiln::RuntimeError::ImmutableBinding { .. }));
}

#[test]
fn test_redefinition_keeps_old_value_for_captures() {
    let result = show(
        "(def x 1)
         (def f (fn [] x))
         (def x 2)
         [(f) x]",
    );
    assert_eq!(result, "(1 2)");
}

#[test]
fn test_redefinition_records_notice() {
    let mut session = Session::new();
    eval_in(&mut session, "(def x 1) (def x 2) (def y 3)").unwrap();
    let notices = session.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::RedefinitionShadow);
    assert_eq!(notices[0].name, "x");
}

#[test]
fn test_var_changes_are_seen_by_closures() {
    assert_eq!(
        show("(var y 1) (def g (fn [] y)) (set y 5) (g)"),
        "5"
    );
}

#[test]
fn test_do_scope_does_not_leak() {
    assert_eq!(show("(def a 1) (do (def a 2) a)"), "2");
    assert_eq!(show("(def a 1) (do (def a 2)) a"), "1");
}

#[test]
fn test_local_shadowing_inside_function() {
    assert_eq!(
        show("(def f (fn [x] (def x (+ x 1)) (def x (* x 10)) x)) (f 1)"),
        "20"
    );
}

#[test]
fn test_def_value_sees_previous_binding() {
    assert_eq!(show("(def x 1) (def x (+ x 1)) x"), "2");
}

#[test]
fn test_global_metadata() {
    let mut session = Session::new();
    eval_in(&mut session, "(def x :private \"the x\" {:since 2} 5)").unwrap();
    let meta = session.global_binding("x").unwrap().metadata().clone();
    let key = |session: &mut Session, name: &str| TableKey::Keyword(session.intern(name));

    assert_eq!(meta.get(&key(&mut session, "private")), Some(&Value::TRUE));
    assert_eq!(
        meta.get(&key(&mut session, "doc")),
        Some(&Value::string("the x"))
    );
    assert_eq!(
        meta.get(&key(&mut session, "since")),
        Some(&Value::Number(2.0))
    );
    assert_eq!(session.lookup_global("x"), Some(Value::Number(5.0)));
}

#[test]
fn test_malformed_metadata() {
    let err = eval_source("(def x [1] 5)").unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::MalformedMetadata));
}

#[test]
fn test_session_env_exposes_global_frame() {
    let mut session = Session::new();
    eval_in(&mut session, "(def only-here 1)").unwrap();
    let sym = session.symbols().get("only-here").unwrap();
    assert!(session.env().lookup(FrameId::GLOBAL, sym).is_some());
    assert_eq!(session.env().depth(), 1);
}

#[test]
fn test_primitives_are_constant_but_shadowable() {
    let mut session = Session::new();
    assert_eq!(
        eval_in(&mut session, "(set + 1)").unwrap_err().kind(),
        Some(ErrorKind::ImmutableBinding)
    );
    assert_eq!(
        show_in(&mut session, "(def + (fn [a b] (- a b))) (+ 5 3)"),
        "2"
    );
}
