//! # Kiln - special-form compiler for a Janet-style Lisp
//!
//! Kiln takes source-level forms (already read into [`Syntax`] trees) and
//! lowers them into a resolved expression tree ([`hir::Hir`]) that a backend
//! can run. The crate ships a reference tree-walking backend ([`vm::Vm`]) so
//! lowered code can be executed and tested end to end.
//!
//! ## Quick Start
//!
//! ```
//! use kiln::{Session, Span, Syntax, SyntaxKind, Value};
//!
//! let span = Span::synthetic();
//! let sym = |s: &str| Syntax::new(SyntaxKind::Symbol(s.to_string()), span.clone());
//! let num = |n: f64| Syntax::new(SyntaxKind::Number(n), span.clone());
//!
//! let mut session = Session::new();
//! // (+ 1 2)
//! let form = Syntax::new(SyntaxKind::List(vec![sym("+"), num(1.0), num(2.0)]), span.clone());
//! assert_eq!(session.eval(&form).unwrap(), Value::Number(3.0));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Syntax → Analyze (special forms, destructuring, quasiquote) → HIR → Vm
//! ```
//!
//! 1. **Binding** - compile-time scope frames and bindings
//! 2. **HIR** - the analyzer lowers the 12 special forms
//! 3. **VM** - evaluates HIR with `Normal | Break` control flow
//! 4. **Pipeline** - owns the global environment across top-level forms

pub mod binding;
pub mod error;
pub mod hir;
pub mod pipeline;
pub mod primitives;
pub mod stack;
pub mod symbol;
pub mod syntax;
pub mod value;
pub mod vm;

pub use binding::{Binding, Environment, FrameId, FrameKind, Mutability};
pub use error::{CompileError, Error, ErrorKind, Notice, NoticeKind, RuntimeError};
pub use pipeline::{Session, SessionConfig};
pub use primitives::register_primitives;
pub use symbol::{SymbolId, SymbolTable};
pub use syntax::{Span, Syntax, SyntaxKind};
pub use value::{Delimiter, Value};
pub use vm::{Evaluate, Vm};
