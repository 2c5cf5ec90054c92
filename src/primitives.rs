//! Built-in callables
//!
//! The compiler treats these as opaque values bound in the global frame.
//! Each module exports a `const PRIMITIVES: &[PrimitiveDef]` table;
//! `register_primitives` walks every table.

pub mod arithmetic;
pub mod comparison;
pub mod data;

use crate::binding::{Environment, FrameId, Mutability};
use crate::symbol::SymbolTable;
use crate::value::{Arity, Entries, Native, NativeFn, TableKey, Value};
use std::rc::Rc;
use tracing::debug;

/// Declarative definition of a primitive function.
pub struct PrimitiveDef {
    pub name: &'static str,
    pub func: NativeFn,
    pub arity: Arity,
    /// One-line description, stored as the binding's `:doc` metadata.
    pub doc: &'static str,
}

pub(crate) const ALL_TABLES: &[&[PrimitiveDef]] = &[
    arithmetic::PRIMITIVES,
    comparison::PRIMITIVES,
    data::PRIMITIVES,
];

/// Bind every primitive as a constant in the global frame.
pub fn register_primitives(env: &mut Environment, symbols: &mut SymbolTable) {
    let doc_key = TableKey::Keyword(symbols.intern("doc"));
    let mut count = 0;
    for table in ALL_TABLES {
        for def in *table {
            let mut metadata = Entries::new();
            if !def.doc.is_empty() {
                metadata.insert(doc_key.clone(), Value::string(def.doc));
            }
            let name = symbols.intern(def.name);
            let binding = env.define(FrameId::GLOBAL, name, Mutability::Constant, metadata);
            binding.initialize(Value::Native(Rc::new(Native {
                name: def.name,
                func: def.func,
                arity: def.arity,
            })));
            count += 1;
        }
    }
    debug!(count, "registered primitives");
}
