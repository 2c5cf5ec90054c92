//! Scope frames and bindings
//!
//! Tracks variable bindings during analysis so every reference is resolved
//! at compile time. Frames live in an arena indexed by `FrameId` and follow
//! the nesting of the forms being lowered: `fn`, `do` and each `while` body
//! push a frame, and finishing that form pops it.
//!
//! Bindings are shared handles. The lowered tree holds on to the bindings it
//! references, so a binding stays meaningful after its frame is popped (or,
//! for globals, after a later definition shadows it).

use crate::error::RuntimeError;
use crate::symbol::SymbolId;
use crate::value::{Entries, Value};
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

/// Handle to a frame in the environment arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId(pub u32);

impl FrameId {
    pub const GLOBAL: FrameId = FrameId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What pushed a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Global,
    Function,
    Block,
    Loop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    /// `def`, parameters: write-once
    Constant,
    /// `var`: may be overwritten by `set`
    Mutable,
}

/// Where the value of a binding lives at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// In the binding's own cell
    Global,
    /// In a slot of the runtime frame that mirrors the binding's frame
    Local { slot: usize },
}

struct BindingInner {
    name: SymbolId,
    mutability: Mutability,
    metadata: Entries,
    frame: FrameId,
    location: Location,
    cell: RefCell<Value>,
}

/// Information about a bound variable
///
/// Equality is identity: two definitions of the same name are two different
/// bindings.
#[derive(Clone)]
pub struct Binding(Rc<BindingInner>);

impl Binding {
    pub fn name(&self) -> SymbolId {
        self.0.name
    }

    pub fn mutability(&self) -> Mutability {
        self.0.mutability
    }

    pub fn is_constant(&self) -> bool {
        self.0.mutability == Mutability::Constant
    }

    pub fn frame(&self) -> FrameId {
        self.0.frame
    }

    pub fn location(&self) -> Location {
        self.0.location
    }

    pub fn is_global(&self) -> bool {
        self.0.location == Location::Global
    }

    pub fn slot(&self) -> Option<usize> {
        match self.0.location {
            Location::Local { slot } => Some(slot),
            Location::Global => None,
        }
    }

    /// Metadata attached by a global `def`/`var`; always empty for locals.
    pub fn metadata(&self) -> &Entries {
        &self.0.metadata
    }

    /// Current value of a global binding. Locals answer nil here; their
    /// values live in runtime frames.
    pub fn value(&self) -> Value {
        self.0.cell.borrow().clone()
    }

    /// First write of a global binding, performed by the definition itself.
    pub fn initialize(&self, value: Value) {
        *self.0.cell.borrow_mut() = value;
    }

    /// Overwrite a global binding.
    ///
    /// Fails for constants. Local bindings are written through their runtime
    /// frame, never through the binding.
    pub fn assign(&self, value: Value) -> Result<(), RuntimeError> {
        if self.is_constant() {
            return Err(RuntimeError::immutable_binding(self.0.name));
        }
        match self.0.location {
            Location::Global => {
                *self.0.cell.borrow_mut() = value;
                Ok(())
            }
            Location::Local { .. } => Err(RuntimeError::internal(
                "local bindings are assigned through their frame",
            )),
        }
    }
}

impl PartialEq for Binding {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Binding {}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("name", &self.0.name)
            .field("mutability", &self.0.mutability)
            .field("frame", &self.0.frame)
            .field("location", &self.0.location)
            .finish()
    }
}

/// A single lexical scope level
struct Frame {
    kind: FrameKind,
    parent: Option<FrameId>,
    /// Every binding in definition order, shadowed ones included
    bindings: Vec<Binding>,
    /// Latest binding per name
    visible: FxHashMap<SymbolId, Binding>,
    slot_count: usize,
}

impl Frame {
    fn new(kind: FrameKind, parent: Option<FrameId>) -> Self {
        Frame {
            kind,
            parent,
            bindings: Vec::new(),
            visible: FxHashMap::default(),
            slot_count: 0,
        }
    }
}

/// Restore point for the global frame, see [`Environment::rollback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    globals: usize,
}

/// The compile-time lexical environment.
///
/// Frame 0 is the global frame and is never popped; it is the only state
/// that persists from one top-level form to the next.
pub struct Environment {
    frames: Vec<Frame>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            frames: vec![Frame::new(FrameKind::Global, None)],
        }
    }

    /// The innermost open frame.
    pub fn current(&self) -> FrameId {
        FrameId((self.frames.len() - 1) as u32)
    }

    /// Number of open frames, the global frame included.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Open a frame nested in the current one.
    pub fn push_frame(&mut self, kind: FrameKind) -> FrameId {
        let parent = self.current();
        self.frames.push(Frame::new(kind, Some(parent)));
        let id = self.current();
        trace!(frame = id.0, ?kind, "push frame");
        id
    }

    /// Close the innermost frame. The global frame stays open.
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            let frame = self.current();
            self.frames.pop();
            trace!(frame = frame.0, "pop frame");
        }
    }

    pub fn kind(&self, frame: FrameId) -> Option<FrameKind> {
        self.frames.get(frame.index()).map(|f| f.kind)
    }

    pub fn parent(&self, frame: FrameId) -> Option<FrameId> {
        self.frames.get(frame.index()).and_then(|f| f.parent)
    }

    /// Runtime slots the frame needs so far.
    pub fn slot_count(&self, frame: FrameId) -> usize {
        self.frames.get(frame.index()).map_or(0, |f| f.slot_count)
    }

    /// Create a binding in `frame`.
    ///
    /// Redefinition is always allowed: the new binding shadows the old one
    /// for later lookups and gets its own storage, so code compiled against
    /// the old binding keeps seeing the old value. Metadata is only kept for
    /// the global frame.
    pub fn define(
        &mut self,
        frame: FrameId,
        name: SymbolId,
        mutability: Mutability,
        metadata: Entries,
    ) -> Binding {
        let Some(data) = self.frames.get_mut(frame.index()) else {
            // Callers only pass handles of open frames
            return self.define(FrameId::GLOBAL, name, mutability, metadata);
        };
        let (location, metadata) = if data.kind == FrameKind::Global {
            (Location::Global, metadata)
        } else {
            let slot = data.slot_count;
            data.slot_count += 1;
            (Location::Local { slot }, Entries::new())
        };
        let binding = Binding(Rc::new(BindingInner {
            name,
            mutability,
            metadata,
            frame,
            location,
            cell: RefCell::new(Value::Nil),
        }));
        data.bindings.push(binding.clone());
        data.visible.insert(name, binding.clone());
        binding
    }

    /// Convenience for embedding: a global binding with an initial value.
    pub fn define_global(
        &mut self,
        name: SymbolId,
        mutability: Mutability,
        value: Value,
    ) -> Binding {
        let binding = self.define(FrameId::GLOBAL, name, mutability, Entries::new());
        binding.initialize(value);
        binding
    }

    /// A binding that takes a slot in `frame` but is never found by
    /// `lookup`. Holds compiler temporaries such as a destructured argument.
    pub fn define_hidden(&mut self, frame: FrameId, name: SymbolId) -> Option<Binding> {
        let data = self.frames.get_mut(frame.index())?;
        if data.kind == FrameKind::Global {
            return None;
        }
        let slot = data.slot_count;
        data.slot_count += 1;
        let binding = Binding(Rc::new(BindingInner {
            name,
            mutability: Mutability::Constant,
            metadata: Entries::new(),
            frame,
            location: Location::Local { slot },
            cell: RefCell::new(Value::Nil),
        }));
        data.bindings.push(binding.clone());
        Some(binding)
    }

    /// Look a symbol up in `frame` only.
    pub fn lookup_in(&self, frame: FrameId, name: SymbolId) -> Option<&Binding> {
        self.frames.get(frame.index())?.visible.get(&name)
    }

    /// Look a symbol up starting at `frame`, walking outward. First match wins.
    pub fn lookup(&self, frame: FrameId, name: SymbolId) -> Option<&Binding> {
        let mut cursor = Some(frame);
        while let Some(id) = cursor {
            let data = self.frames.get(id.index())?;
            if let Some(binding) = data.visible.get(&name) {
                return Some(binding);
            }
            cursor = data.parent;
        }
        None
    }

    /// Bindings of the global frame in definition order, shadowed ones included.
    pub fn globals(&self) -> &[Binding] {
        &self.frames[0].bindings
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            globals: self.frames[0].bindings.len(),
        }
    }

    /// Forget every global defined after `checkpoint` and close all nested
    /// frames. Used to abort a top-level form without touching earlier ones.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.frames.truncate(1);
        let global = &mut self.frames[0];
        if global.bindings.len() <= checkpoint.globals {
            return;
        }
        global.bindings.truncate(checkpoint.globals);
        global.visible.clear();
        for binding in &global.bindings {
            global.visible.insert(binding.name(), binding.clone());
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("depth", &self.frames.len())
            .field("globals", &self.frames[0].bindings.len())
            .finish()
    }
}
