//! Error type definitions for kiln

use crate::symbol::SymbolId;
use crate::syntax::Span;
use crate::value::Arity;
use std::fmt;
use thiserror::Error;

/// Category of a compile error.
///
/// Every kind is detected while lowering a single top-level form and aborts
/// only that form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// `set` on a constant binding
    ImmutableBinding,
    /// `set` on something that is neither a declared variable nor `(container key)`
    InvalidLValue,
    /// `break` with no enclosing `while` or `fn`
    NoEnclosingTarget,
    /// `unquote` outside of any `quasiquote`
    UnquoteOutsideQuasiquote,
    /// A binding pattern that is not a symbol, sequential or associative literal
    MalformedPattern,
    /// Metadata before a global `def`/`var` value that is not a keyword, string or struct
    MalformedMetadata,
    /// A special form with the wrong number or shape of operands
    InvalidForm,
    /// Reference to a symbol with no binding in scope
    UnboundSymbol,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::ImmutableBinding => "immutable binding",
            ErrorKind::InvalidLValue => "invalid l-value",
            ErrorKind::NoEnclosingTarget => "no enclosing target",
            ErrorKind::UnquoteOutsideQuasiquote => "unquote outside quasiquote",
            ErrorKind::MalformedPattern => "malformed pattern",
            ErrorKind::MalformedMetadata => "malformed metadata",
            ErrorKind::InvalidForm => "invalid form",
            ErrorKind::UnboundSymbol => "unbound symbol",
        };
        write!(f, "{}", label)
    }
}

/// A structured compile error: what went wrong, on which form, and where.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{span}: {kind}: {message} in {form}")]
pub struct CompileError {
    pub kind: ErrorKind,
    pub message: String,
    /// The offending form, printed back in surface syntax.
    pub form: String,
    pub span: Span,
}

/// Errors raised while evaluating lowered code.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("cannot call a {type_name}")]
    NotCallable { type_name: &'static str },

    #[error("cannot splice a {type_name}: expected tuple or array")]
    SpliceNonSequential { type_name: &'static str },

    #[error("cannot update a {type_name}: only arrays and tables are mutable")]
    ImmutableContainer { type_name: &'static str },

    #[error("cannot assign to constant binding {symbol}")]
    ImmutableBinding { symbol: SymbolId },

    #[error("{function}: expected {expected}, got {got}")]
    TypeMismatch {
        function: String,
        expected: String,
        got: String,
    },

    #[error("{function}: expected {expected} arguments, got {got}")]
    ArityMismatch {
        function: String,
        expected: Arity,
        got: usize,
    },

    #[error("a {type_name} cannot be used as a key")]
    InvalidKey { type_name: &'static str },

    #[error("index {index} out of bounds for length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    #[error("call depth exceeded {limit}")]
    CallDepthExceeded { limit: usize },

    #[error("internal error: {message}")]
    Internal { message: String },
}

/// Either kind of failure a top-level form can end in.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Compile error kind, if this is a compile error.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Compile(err) => Some(err.kind),
            Error::Runtime(_) => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Informational diagnostics. These never abort a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// A definition replaced an earlier binding of the same name in the same frame
    RedefinitionShadow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub name: String,
    pub span: Span,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NoticeKind::RedefinitionShadow => write!(
                f,
                "{}: redefinition of `{}` shadows the earlier binding",
                self.span, self.name
            ),
        }
    }
}
