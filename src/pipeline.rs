//! Compilation pipeline: Syntax → HIR → evaluation
//!
//! A [`Session`] owns the state that outlives a single top-level form: the
//! symbol table, the global frame and the evaluator. Forms are lowered and
//! run one at a time. A form that fails to compile leaves the global frame
//! exactly as it was before the form.

use crate::binding::{Binding, Environment, FrameId};
use crate::error::{CompileError, Notice, Result};
use crate::hir::{Analyzer, Hir};
use crate::primitives::register_primitives;
use crate::symbol::{SymbolId, SymbolTable};
use crate::syntax::Syntax;
use crate::value::Value;
use crate::vm::{Evaluate, Vm, DEFAULT_MAX_CALL_DEPTH};
use tracing::debug;

/// Session settings.
///
/// ```
/// use kiln::SessionConfig;
/// let config = SessionConfig::default().max_call_depth(64).register_primitives(false);
/// assert_eq!(config.max_call_depth, 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Limit on nested calls in the reference evaluator
    pub max_call_depth: usize,
    /// Whether the global frame starts with the built-in callables
    pub register_primitives: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            register_primitives: true,
        }
    }
}

impl SessionConfig {
    pub fn max_call_depth(mut self, limit: usize) -> Self {
        self.max_call_depth = limit;
        self
    }

    pub fn register_primitives(mut self, enabled: bool) -> Self {
        self.register_primitives = enabled;
        self
    }
}

/// Compiles and runs top-level forms against a persistent global frame.
pub struct Session<E: Evaluate = Vm> {
    symbols: SymbolTable,
    env: Environment,
    evaluator: E,
    notices: Vec<Notice>,
}

impl Session<Vm> {
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        let vm = Vm::with_max_call_depth(config.max_call_depth);
        Session::with_evaluator(&config, vm)
    }
}

impl Default for Session<Vm> {
    fn default() -> Self {
        Session::new()
    }
}

impl<E: Evaluate> Session<E> {
    /// A session running lowered forms on a custom backend.
    pub fn with_evaluator(config: &SessionConfig, evaluator: E) -> Self {
        let mut symbols = SymbolTable::new();
        let mut env = Environment::new();
        if config.register_primitives {
            register_primitives(&mut env, &mut symbols);
        }
        Session {
            symbols,
            env,
            evaluator,
            notices: Vec::new(),
        }
    }

    /// Lower one top-level form. On error every global binding the form
    /// created is discarded.
    pub fn compile(&mut self, form: &Syntax) -> std::result::Result<Hir, CompileError> {
        let checkpoint = self.env.checkpoint();
        let mut analyzer = Analyzer::new(&mut self.symbols, &mut self.env);
        let result = analyzer.analyze(form);
        let notices = analyzer.take_notices();

        match result {
            Ok(hir) => {
                self.notices.extend(notices);
                Ok(hir)
            }
            Err(err) => {
                debug!(kind = %err.kind, span = %err.span, "compile failed, rolling back");
                self.env.rollback(checkpoint);
                Err(err)
            }
        }
    }

    /// Compile and evaluate one top-level form.
    pub fn eval(&mut self, form: &Syntax) -> Result<Value> {
        // Phase 1: Analyze to HIR
        let hir = self.compile(form)?;
        debug!(span = %form.span, "evaluate top-level form");

        // Phase 2: Evaluate
        Ok(self.evaluator.evaluate(&hir)?)
    }

    /// Evaluate forms in order, stopping at the first failure. Returns the
    /// value of the last form (nil for none).
    pub fn eval_all(&mut self, forms: &[Syntax]) -> Result<Value> {
        let mut last = Value::Nil;
        for form in forms {
            last = self.eval(form)?;
        }
        Ok(last)
    }

    pub fn intern(&mut self, name: &str) -> SymbolId {
        self.symbols.intern(name)
    }

    /// Render a value in surface syntax.
    pub fn display(&self, value: &Value) -> String {
        value.display(&self.symbols).to_string()
    }

    /// The visible global binding for `name`.
    pub fn global_binding(&self, name: &str) -> Option<&Binding> {
        let sym = self.symbols.get(name)?;
        self.env.lookup(FrameId::GLOBAL, sym)
    }

    /// Current value of the visible global binding for `name`.
    pub fn lookup_global(&self, name: &str) -> Option<Value> {
        self.global_binding(name).map(Binding::value)
    }

    /// Notices collected from successfully compiled forms.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }
}
