//! Builder methods for constructing errors

use super::types::{CompileError, ErrorKind, RuntimeError};
use crate::symbol::SymbolId;
use crate::syntax::Syntax;
use crate::value::Arity;

impl CompileError {
    pub fn new(kind: ErrorKind, form: &Syntax, message: impl Into<String>) -> Self {
        CompileError {
            kind,
            message: message.into(),
            form: form.to_string(),
            span: form.span.clone(),
        }
    }

    pub fn immutable_binding(form: &Syntax, name: &str) -> Self {
        Self::new(
            ErrorKind::ImmutableBinding,
            form,
            format!("cannot set constant `{}`", name),
        )
    }

    pub fn invalid_lvalue(form: &Syntax, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidLValue, form, reason)
    }

    pub fn no_enclosing_target(form: &Syntax) -> Self {
        Self::new(
            ErrorKind::NoEnclosingTarget,
            form,
            "break must appear inside a while loop or function",
        )
    }

    pub fn unquote_outside_quasiquote(form: &Syntax) -> Self {
        Self::new(
            ErrorKind::UnquoteOutsideQuasiquote,
            form,
            "unquote is only valid inside quasiquote",
        )
    }

    pub fn malformed_pattern(form: &Syntax) -> Self {
        Self::new(
            ErrorKind::MalformedPattern,
            form,
            format!("cannot bind to a {}", form.kind_label()),
        )
    }

    pub fn malformed_metadata(form: &Syntax) -> Self {
        Self::new(
            ErrorKind::MalformedMetadata,
            form,
            format!(
                "expected keyword, string or struct as metadata, got {}",
                form.kind_label()
            ),
        )
    }

    pub fn invalid_form(form: &Syntax, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidForm, form, message)
    }

    pub fn unbound_symbol(form: &Syntax, name: &str) -> Self {
        Self::new(
            ErrorKind::UnboundSymbol,
            form,
            format!("unknown symbol `{}`", name),
        )
    }
}

impl RuntimeError {
    pub fn type_mismatch(
        function: impl Into<String>,
        expected: impl Into<String>,
        got: impl Into<String>,
    ) -> Self {
        RuntimeError::TypeMismatch {
            function: function.into(),
            expected: expected.into(),
            got: got.into(),
        }
    }

    pub fn arity_mismatch(function: impl Into<String>, expected: Arity, got: usize) -> Self {
        RuntimeError::ArityMismatch {
            function: function.into(),
            expected,
            got,
        }
    }

    pub fn not_callable(type_name: &'static str) -> Self {
        RuntimeError::NotCallable { type_name }
    }

    pub fn splice_non_sequential(type_name: &'static str) -> Self {
        RuntimeError::SpliceNonSequential { type_name }
    }

    pub fn immutable_container(type_name: &'static str) -> Self {
        RuntimeError::ImmutableContainer { type_name }
    }

    pub fn immutable_binding(symbol: SymbolId) -> Self {
        RuntimeError::ImmutableBinding { symbol }
    }

    pub fn invalid_key(type_name: &'static str) -> Self {
        RuntimeError::InvalidKey { type_name }
    }

    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        RuntimeError::IndexOutOfBounds { index, length }
    }

    pub fn call_depth_exceeded(limit: usize) -> Self {
        RuntimeError::CallDepthExceeded { limit }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        RuntimeError::Internal {
            message: message.into(),
        }
    }
}
