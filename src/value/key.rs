//! Keys for structs and tables

use crate::symbol::SymbolId;
use crate::value::Value;
use std::cmp::Ordering;

/// Wrapper for table/struct keys - allows specific Value types to be keys.
///
/// Mutable composites and callables are not keys. Nil and NaN are rejected
/// so that a lookup of a missing key can always answer nil unambiguously.
#[derive(Debug, Clone)]
pub enum TableKey {
    Bool(bool),
    Number(f64),
    Symbol(SymbolId),
    Keyword(SymbolId),
    String(String),
    Tuple(Vec<TableKey>),
}

impl TableKey {
    /// Convert a Value to a TableKey if possible.
    ///
    /// Returns `None` if the value cannot be used as a key.
    /// Callers produce their own error messages from the `None` case.
    pub fn from_value(val: &Value) -> Option<TableKey> {
        match val {
            Value::Bool(b) => Some(TableKey::Bool(*b)),
            Value::Number(n) if n.is_nan() => None,
            // -0.0 and 0.0 must land on the same entry
            Value::Number(n) => Some(TableKey::Number(if *n == 0.0 { 0.0 } else { *n })),
            Value::Symbol(id) => Some(TableKey::Symbol(*id)),
            Value::Keyword(id) => Some(TableKey::Keyword(*id)),
            Value::String(s) => Some(TableKey::String(s.to_string())),
            Value::Tuple(items, _) => items
                .iter()
                .map(TableKey::from_value)
                .collect::<Option<Vec<_>>>()
                .map(TableKey::Tuple),
            _ => None,
        }
    }

    /// Convert a TableKey back to a Value.
    ///
    /// This is the inverse of `from_value()`.
    pub fn to_value(&self) -> Value {
        match self {
            TableKey::Bool(b) => Value::Bool(*b),
            TableKey::Number(n) => Value::Number(*n),
            TableKey::Symbol(id) => Value::Symbol(*id),
            TableKey::Keyword(id) => Value::Keyword(*id),
            TableKey::String(s) => Value::string(s),
            TableKey::Tuple(items) => Value::tuple(items.iter().map(TableKey::to_value).collect()),
        }
    }

    fn discriminant_index(&self) -> u8 {
        match self {
            TableKey::Bool(_) => 0,
            TableKey::Number(_) => 1,
            TableKey::Symbol(_) => 2,
            TableKey::Keyword(_) => 3,
            TableKey::String(_) => 4,
            TableKey::Tuple(_) => 5,
        }
    }
}

impl PartialEq for TableKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TableKey {}

impl PartialOrd for TableKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TableKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (TableKey::Bool(a), TableKey::Bool(b)) => a.cmp(b),
            // NaN never reaches a key, so total_cmp agrees with numeric order
            (TableKey::Number(a), TableKey::Number(b)) => a.total_cmp(b),
            (TableKey::Symbol(a), TableKey::Symbol(b)) => a.cmp(b),
            (TableKey::Keyword(a), TableKey::Keyword(b)) => a.cmp(b),
            (TableKey::String(a), TableKey::String(b)) => a.cmp(b),
            (TableKey::Tuple(a), TableKey::Tuple(b)) => a.cmp(b),
            _ => self.discriminant_index().cmp(&other.discriminant_index()),
        }
    }
}
