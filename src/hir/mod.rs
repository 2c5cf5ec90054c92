//! High-level Intermediate Representation (HIR)
//!
//! HIR is the fully-analyzed form produced from Syntax. Every special form
//! has been lowered, every variable reference resolved to a binding, and
//! every quasiquote template rewritten into constants and construction
//! nodes. This is the input to an evaluator.
//!
//! Pipeline:
//! ```text
//! Syntax → Analyze → HIR → Evaluate
//! ```

mod analyze;
mod expr;
mod pattern;

pub use analyze::{Analyzer, SpecialForm};
pub use expr::{Element, Hir, HirKind, Lambda, Shape, TargetId, VarRef};
pub use pattern::HirPattern;
