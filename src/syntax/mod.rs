//! Syntax tree representation for source forms
//!
//! `Syntax` is the pre-analysis tree handed to the compiler by a reader.
//! Unlike `Value`, which is the runtime representation, `Syntax` keeps the
//! source span of every node so compile errors can point at the offending
//! form, and it keeps names as strings so interning is deferred until
//! analysis.
//!
//! Surface shapes follow the Janet conventions:
//! ```text
//! (a b)   List     code form / call
//! [a b]   Tuple    immutable sequential literal
//! @[a b]  Array    mutable sequential literal
//! {k v}   Struct   immutable associative literal
//! @{k v}  Table    mutable associative literal
//! ```
//! Reader sugar such as `'x` or `~x` is expected to arrive already expanded
//! into `(quote x)` and `(quasiquote x)`.

mod convert;
mod display;
mod span;

pub use span::Span;

/// Pre-analysis syntax tree node.
#[derive(Debug, Clone, PartialEq)]
pub struct Syntax {
    pub kind: SyntaxKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxKind {
    // Atoms
    Nil,
    Bool(bool),
    Number(f64),
    Symbol(String),
    Keyword(String),
    String(String),

    // Compounds
    List(Vec<Syntax>),
    Tuple(Vec<Syntax>),
    Array(Vec<Syntax>),
    Struct(Vec<Syntax>),
    Table(Vec<Syntax>),
}

impl Syntax {
    pub fn new(kind: SyntaxKind, span: Span) -> Self {
        Syntax { kind, span }
    }

    /// Check if this is a symbol with the given name
    pub fn is_symbol(&self, name: &str) -> bool {
        matches!(&self.kind, SyntaxKind::Symbol(s) if s == name)
    }

    /// Get symbol name if this is a symbol
    pub fn as_symbol(&self) -> Option<&str> {
        match &self.kind {
            SyntaxKind::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Get list contents if this is a list
    pub fn as_list(&self) -> Option<&[Syntax]> {
        match &self.kind {
            SyntaxKind::List(items) => Some(items),
            _ => None,
        }
    }

    /// Elements of any sequential shape: list, tuple or array.
    pub fn as_sequence(&self) -> Option<&[Syntax]> {
        match &self.kind {
            SyntaxKind::List(items) | SyntaxKind::Tuple(items) | SyntaxKind::Array(items) => {
                Some(items)
            }
            _ => None,
        }
    }

    /// If this is `(head x)` for the given head symbol, return `x`.
    ///
    /// Used to recognise `(unquote x)`, `(splice x)` and friends without
    /// caring whether the form is well formed beyond that.
    pub fn as_wrapped(&self, head: &str) -> Option<&Syntax> {
        match self.as_list() {
            Some([first, inner]) if first.is_symbol(head) => Some(inner),
            _ => None,
        }
    }

    /// Human-readable label for the node's shape, used in error messages.
    pub fn kind_label(&self) -> &'static str {
        match &self.kind {
            SyntaxKind::Nil => "nil",
            SyntaxKind::Bool(_) => "boolean",
            SyntaxKind::Number(_) => "number",
            SyntaxKind::Symbol(_) => "symbol",
            SyntaxKind::Keyword(_) => "keyword",
            SyntaxKind::String(_) => "string",
            SyntaxKind::List(_) => "list",
            SyntaxKind::Tuple(_) => "tuple",
            SyntaxKind::Array(_) => "array",
            SyntaxKind::Struct(_) => "struct",
            SyntaxKind::Table(_) => "table",
        }
    }
}
