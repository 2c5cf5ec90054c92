//! HIR expression types

use super::pattern::HirPattern;
use crate::binding::{Binding, Location};
use crate::symbol::SymbolId;
use crate::syntax::Span;
use crate::value::Value;
use std::rc::Rc;

/// HIR expression with source location
#[derive(Debug, Clone)]
pub struct Hir {
    pub kind: HirKind,
    pub span: Span,
}

impl Hir {
    pub fn new(kind: HirKind, span: Span) -> Self {
        Hir { kind, span }
    }

    pub fn nil(span: Span) -> Self {
        Hir::new(HirKind::Const(Value::Nil), span)
    }

    /// The constant this node evaluates to, if it is one.
    pub fn as_const(&self) -> Option<&Value> {
        match &self.kind {
            HirKind::Const(value) => Some(value),
            _ => None,
        }
    }
}

/// Identifies a construct `break` can leave: a `while` loop or a function body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(pub u32);

/// A resolved variable reference
///
/// Locals are addressed by `depth` (how many runtime frames to walk up from
/// the frame active at the reference) and `slot`.
#[derive(Debug, Clone, PartialEq)]
pub enum VarRef {
    Global(Binding),
    Local {
        binding: Binding,
        depth: usize,
        slot: usize,
    },
}

impl VarRef {
    /// Reference to `binding` from code running in a frame `current_depth`
    /// levels below the global frame.
    pub fn resolve(binding: &Binding, current_depth: usize) -> Self {
        match binding.location() {
            Location::Global => VarRef::Global(binding.clone()),
            Location::Local { slot } => VarRef::Local {
                binding: binding.clone(),
                depth: current_depth.saturating_sub(binding.frame().index()),
                slot,
            },
        }
    }

    pub fn binding(&self) -> &Binding {
        match self {
            VarRef::Global(binding) | VarRef::Local { binding, .. } => binding,
        }
    }
}

/// An element of a call or constructor, which may be spliced (spread).
#[derive(Debug, Clone)]
pub struct Element {
    pub expr: Hir,
    pub spliced: bool,
}

impl Element {
    pub fn plain(expr: Hir) -> Self {
        Element {
            expr,
            spliced: false,
        }
    }

    pub fn spliced(expr: Hir) -> Self {
        Element {
            expr,
            spliced: true,
        }
    }
}

/// Which composite a constructor builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Tuple,
    /// A tuple that keeps its square brackets (quasiquoted `[...]`)
    BracketTuple,
    Array,
    Struct,
    Table,
}

impl Shape {
    pub fn is_associative(self) -> bool {
        matches!(self, Shape::Struct | Shape::Table)
    }

    pub fn is_mutable(self) -> bool {
        matches!(self, Shape::Array | Shape::Table)
    }

    pub fn label(self) -> &'static str {
        match self {
            Shape::Tuple | Shape::BracketTuple => "tuple",
            Shape::Array => "array",
            Shape::Struct => "struct",
            Shape::Table => "table",
        }
    }
}

/// A lowered `fn` form.
#[derive(Debug)]
pub struct Lambda {
    pub name: Option<SymbolId>,
    /// Slot holding the function itself when it is named
    pub self_slot: Option<usize>,
    /// Slots receiving the fixed arguments, in order
    pub params: Vec<usize>,
    /// Slot receiving the tuple of remaining arguments (`&` tail)
    pub rest: Option<usize>,
    /// Total slots of the function frame
    pub slot_count: usize,
    pub target: TargetId,
    pub body: Hir,
}

/// HIR expression kinds - fully analyzed forms
#[derive(Debug, Clone)]
pub enum HirKind {
    /// A literal or quoted value
    Const(Value),

    /// Reference to a binding (fully resolved)
    Var(VarRef),

    /// Initialise a single binding; evaluates to the value.
    Define { target: VarRef, value: Box<Hir> },

    /// Unconditional destructuring: extract values from a composite and bind
    /// them. Missing values → nil, no type checks. Evaluates to the value.
    Destructure {
        pattern: HirPattern,
        value: Box<Hir>,
    },

    Lambda(Rc<Lambda>),

    /// Sequence with its own frame (`do`).
    Do { body: Vec<Hir>, slot_count: usize },

    /// Sequence in the current frame (function bodies).
    Begin(Vec<Hir>),

    If {
        cond: Box<Hir>,
        then_branch: Box<Hir>,
        else_branch: Box<Hir>,
    },

    /// The body runs in a fresh frame on every iteration.
    While {
        target: TargetId,
        cond: Box<Hir>,
        body: Vec<Hir>,
        slot_count: usize,
    },

    /// Early exit to an enclosing loop or function, carrying a value.
    Break { target: TargetId, value: Box<Hir> },

    Set { target: VarRef, value: Box<Hir> },

    /// `(set (container key) value)`
    SetIndex {
        container: Box<Hir>,
        key: Box<Hir>,
        value: Box<Hir>,
    },

    Call { func: Box<Hir>, args: Vec<Element> },

    /// Literal constructor or quasiquote template. Associative shapes take
    /// alternating keys and values after splicing.
    Build { shape: Shape, elements: Vec<Element> },
}
