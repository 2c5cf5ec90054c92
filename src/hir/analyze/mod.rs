//! Syntax to HIR analysis
//!
//! This module converts Syntax trees into HIR by:
//! 1. Recognising the special forms and lowering each one
//! 2. Resolving all variable references to Bindings
//! 3. Compiling destructuring patterns into bound pattern trees
//! 4. Rewriting quasiquote templates into constants and constructors
//! 5. Resolving every `break` to its enclosing loop or function
//!
//! The analyzer borrows the session's environment. Bindings it creates in
//! the global frame persist after the form; everything else is popped when
//! the form that pushed it is lowered.

mod binding;
mod call;
mod destructure;
mod forms;
mod lambda;
mod quasiquote;
mod special;

pub use special::SpecialForm;

use super::expr::{Hir, HirKind, TargetId, VarRef};
use crate::binding::{Binding, Environment, FrameKind, Mutability};
use crate::error::{CompileError, Notice, NoticeKind};
use crate::symbol::SymbolTable;
use crate::syntax::Syntax;
use crate::value::Entries;
use tracing::debug;

type AnalyzeResult<T> = Result<T, CompileError>;

/// Analyzer that converts Syntax to HIR
pub struct Analyzer<'a> {
    symbols: &'a mut SymbolTable,
    env: &'a mut Environment,
    /// Enclosing `break` targets, innermost last
    targets: Vec<TargetId>,
    next_target: u32,
    notices: Vec<Notice>,
}

impl<'a> Analyzer<'a> {
    pub fn new(symbols: &'a mut SymbolTable, env: &'a mut Environment) -> Self {
        Analyzer {
            symbols,
            env,
            targets: Vec::new(),
            next_target: 0,
            notices: Vec::new(),
        }
    }

    /// Lower one top-level form.
    pub fn analyze(&mut self, syntax: &Syntax) -> AnalyzeResult<Hir> {
        self.analyze_expr(syntax)
    }

    /// Informational diagnostics collected so far.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // === Scope Management ===

    /// Run `f` inside a new frame of `kind`. Returns the result together
    /// with the number of runtime slots the frame needs. The frame is popped
    /// whether or not `f` succeeds.
    fn in_frame<T>(
        &mut self,
        kind: FrameKind,
        f: impl FnOnce(&mut Self) -> AnalyzeResult<T>,
    ) -> AnalyzeResult<(T, usize)> {
        let frame = self.env.push_frame(kind);
        let result = f(self);
        let slot_count = self.env.slot_count(frame);
        self.env.pop_frame();
        result.map(|value| (value, slot_count))
    }

    /// Run `f` with a fresh `break` target innermost.
    fn with_target<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> AnalyzeResult<T>,
    ) -> AnalyzeResult<(T, TargetId)> {
        let target = TargetId(self.next_target);
        self.next_target += 1;
        self.targets.push(target);
        let result = f(self);
        self.targets.pop();
        result.map(|value| (value, target))
    }

    fn lookup(&mut self, name: &str) -> Option<Binding> {
        let sym = self.symbols.intern(name);
        self.env.lookup(self.env.current(), sym).cloned()
    }

    /// Reference to `binding` from the current frame.
    fn var_ref(&self, binding: &Binding) -> VarRef {
        VarRef::resolve(binding, self.env.current().index())
    }

    fn var(&self, binding: &Binding, syntax: &Syntax) -> Hir {
        Hir::new(HirKind::Var(self.var_ref(binding)), syntax.span.clone())
    }

    /// Define `name` in the current frame, noting when it shadows a binding
    /// of the same frame.
    fn bind(
        &mut self,
        name_syntax: &Syntax,
        name: &str,
        mutability: Mutability,
        metadata: Entries,
    ) -> Binding {
        let sym = self.symbols.intern(name);
        let frame = self.env.current();
        if self.env.lookup_in(frame, sym).is_some() {
            debug!(name, span = %name_syntax.span, "redefinition shadows earlier binding");
            self.notices.push(Notice {
                kind: NoticeKind::RedefinitionShadow,
                name: name.to_string(),
                span: name_syntax.span.clone(),
            });
        }
        self.env.define(frame, sym, mutability, metadata)
    }
}
