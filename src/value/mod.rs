//! Runtime value representation
//!
//! Values are a plain tagged enum. Immutable composites (tuples, structs,
//! strings) are shared through `Rc`; mutable composites (arrays, tables) add a
//! `RefCell` so `set` and `put` can update them in place.
//!
//! Truthiness follows one rule everywhere: only `nil` and `false` are
//! false-like. `0`, the empty string and empty composites are all true-like.

mod closure;
mod display;
mod key;

pub use closure::{Arity, Closure, Native, NativeFn};
pub use display::ValueDisplay;
pub use key::TableKey;

use crate::symbol::SymbolId;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Entries of a struct or table, ordered by key.
pub type Entries = BTreeMap<TableKey, Value>;

/// How a tuple was written: `(a b)` or `[a b]`. Only printing looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Parens,
    Brackets,
}

#[derive(Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    Symbol(SymbolId),
    Keyword(SymbolId),
    String(Rc<str>),
    /// Immutable sequential composite; also the runtime shape of quoted code.
    Tuple(Rc<[Value]>, Delimiter),
    Array(Rc<RefCell<Vec<Value>>>),
    Struct(Rc<Entries>),
    Table(Rc<RefCell<Entries>>),
    Closure(Rc<Closure>),
    Native(Rc<Native>),
}

impl Value {
    pub const NIL: Value = Value::Nil;
    pub const TRUE: Value = Value::Bool(true);
    pub const FALSE: Value = Value::Bool(false);

    pub fn string(s: impl AsRef<str>) -> Value {
        Value::String(Rc::from(s.as_ref()))
    }

    pub fn tuple(items: Vec<Value>) -> Value {
        Value::Tuple(Rc::from(items), Delimiter::Parens)
    }

    /// A tuple that prints with square brackets, as quoted `[...]` data does.
    pub fn bracket_tuple(items: Vec<Value>) -> Value {
        Value::Tuple(Rc::from(items), Delimiter::Brackets)
    }

    pub fn empty_tuple() -> Value {
        Value::tuple(Vec::new())
    }

    pub fn array(items: Vec<Value>) -> Value {
        Value::Array(Rc::new(RefCell::new(items)))
    }

    pub fn structure(entries: Entries) -> Value {
        Value::Struct(Rc::new(entries))
    }

    pub fn table(entries: Entries) -> Value {
        Value::Table(Rc::new(RefCell::new(entries)))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Only literal `nil` and literal `false` are false-like.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Closure(_) | Value::Native(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<SymbolId> {
        match self {
            Value::Symbol(id) => Some(*id),
            _ => None,
        }
    }

    /// Convert a number into a non-negative integer index, if it is one.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Value::Number(n) if n.fract() == 0.0 && *n >= 0.0 && *n <= usize::MAX as f64 => {
                Some(*n as usize)
            }
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Symbol(_) => "symbol",
            Value::Keyword(_) => "keyword",
            Value::String(_) => "string",
            Value::Tuple(..) => "tuple",
            Value::Array(_) => "array",
            Value::Struct(_) => "struct",
            Value::Table(_) => "table",
            Value::Closure(_) => "function",
            Value::Native(_) => "cfunction",
        }
    }

    /// Snapshot of the elements of a tuple or array.
    pub fn sequence_items(&self) -> Option<Vec<Value>> {
        match self {
            Value::Tuple(items, _) => Some(items.to_vec()),
            Value::Array(items) => Some(items.borrow().clone()),
            _ => None,
        }
    }

    /// Element at position `index` of a sequential value.
    ///
    /// Out-of-range positions and non-sequential values yield nil; this is
    /// the access destructuring uses, so short sources bind nil.
    pub fn element_at(&self, index: usize) -> Value {
        match self {
            Value::Tuple(items, _) => items.get(index).cloned().unwrap_or(Value::Nil),
            Value::Array(items) => items.borrow().get(index).cloned().unwrap_or(Value::Nil),
            _ => Value::Nil,
        }
    }

    /// Elements from `start` onwards, as a fresh tuple.
    ///
    /// Sequential values always produce a tuple (possibly empty); anything
    /// else yields nil.
    pub fn elements_from(&self, start: usize) -> Value {
        match self.sequence_items() {
            Some(items) => Value::tuple(items.into_iter().skip(start).collect()),
            None => Value::Nil,
        }
    }

    /// Value stored under `key` in a struct or table; nil when missing.
    pub fn lookup(&self, key: &TableKey) -> Value {
        match self {
            Value::Struct(entries) => entries.get(key).cloned().unwrap_or(Value::Nil),
            Value::Table(entries) => entries.borrow().get(key).cloned().unwrap_or(Value::Nil),
            _ => Value::Nil,
        }
    }

    /// Number of elements/entries/bytes, for values that have a length.
    pub fn length(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.len()),
            Value::Tuple(items, _) => Some(items.len()),
            Value::Array(items) => Some(items.borrow().len()),
            Value::Struct(entries) => Some(entries.len()),
            Value::Table(entries) => Some(entries.borrow().len()),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    /// Structural equality for immutable data; identity for arrays, tables
    /// and callables.
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Keyword(a), Value::Keyword(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Tuple(a, _), Value::Tuple(b, _)) => a == b,
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Struct(a), Value::Struct(b)) => a == b,
            (Value::Table(a), Value::Table(b)) => Rc::ptr_eq(a, b),
            (Value::Closure(a), Value::Closure(b)) => Rc::ptr_eq(a, b),
            (Value::Native(a), Value::Native(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}
