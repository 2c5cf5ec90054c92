// Call depth and deep nesting
use crate::common::{eval_in, eval_source, show};
use kiln::{Error, RuntimeError, Session, SessionConfig, Span, Syntax, SyntaxKind, Value};

const COUNTDOWN: &str = "(def f (fn f [n] (if (= n 0) 0 (+ 1 (f (- n 1))))))";

#[test]
fn test_recursion_within_default_limit() {
    assert_eq!(show(&format!("{} (f 500)", COUNTDOWN)), "500");
}

#[test]
fn test_runaway_recursion_hits_default_limit() {
    assert_eq!(
        eval_source(&format!("{} (f 2000)", COUNTDOWN)).unwrap_err(),
        Error::Runtime(RuntimeError::call_depth_exceeded(1024))
    );
}

#[test]
fn test_configured_call_depth() {
    let mut session = Session::with_config(SessionConfig::default().max_call_depth(16));
    eval_in(&mut session, "(def f (fn f [] (f)))").unwrap();
    assert_eq!(
        eval_in(&mut session, "(f)").unwrap_err(),
        Error::Runtime(RuntimeError::call_depth_exceeded(16))
    );
    // the session stays usable
    assert_eq!(
        eval_in(&mut session, "(+ 1 2)").unwrap(),
        Value::Number(3.0)
    );
}

#[test]
fn test_configured_limit_counts_nested_calls() {
    let mut session = Session::with_config(SessionConfig::default().max_call_depth(16));
    eval_in(&mut session, COUNTDOWN).unwrap();
    assert_eq!(eval_in(&mut session, "(f 10)").unwrap(), Value::Number(10.0));
    assert_eq!(
        eval_in(&mut session, "(f 100)").unwrap_err(),
        Error::Runtime(RuntimeError::call_depth_exceeded(16))
    );
}

fn syn(kind: SyntaxKind) -> Syntax {
    Syntax::new(kind, Span::synthetic())
}

fn nest(head: &str, depth: usize, leaf: Syntax) -> Syntax {
    (0..depth).fold(leaf, |inner, _| {
        syn(SyntaxKind::List(vec![
            syn(SyntaxKind::Symbol(head.into())),
            inner,
        ]))
    })
}

#[test]
fn test_deeply_nested_forms_evaluate() {
    let form = nest("do", 2000, syn(SyntaxKind::Number(7.0)));
    assert_eq!(Session::new().eval(&form).unwrap(), Value::Number(7.0));
}

#[test]
fn test_deeply_nested_quote_prints() {
    // (quote (a (a (a ... nil))))
    let datum = nest("a", 2000, syn(SyntaxKind::Nil));
    let form = syn(SyntaxKind::List(vec![
        syn(SyntaxKind::Symbol("quote".into())),
        datum,
    ]));
    let mut session = Session::new();
    let value = session.eval(&form).unwrap();
    let text = session.display(&value);
    assert!(text.starts_with("(a (a "));
    assert_eq!(text.matches('(').count(), 2000);
}
