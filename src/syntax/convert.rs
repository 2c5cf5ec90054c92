//! Conversion from Syntax to Value
//!
//! Quoting turns a syntax tree into the data it denotes: symbols become
//! symbol values and code lists become tuples. Bracketed literals keep their
//! shape.

use super::{Syntax, SyntaxKind};
use crate::error::CompileError;
use crate::stack::ensure_sufficient_stack;
use crate::symbol::SymbolTable;
use crate::value::{Entries, TableKey, Value};

impl Syntax {
    /// Convert Syntax to the runtime Value it denotes when quoted.
    pub fn to_value(&self, symbols: &mut SymbolTable) -> Result<Value, CompileError> {
        ensure_sufficient_stack(|| self.datum(symbols))
    }

    fn datum(&self, symbols: &mut SymbolTable) -> Result<Value, CompileError> {
        let value = match &self.kind {
            SyntaxKind::Nil => Value::Nil,
            SyntaxKind::Bool(b) => Value::Bool(*b),
            SyntaxKind::Number(n) => Value::Number(*n),
            SyntaxKind::Symbol(s) => Value::Symbol(symbols.intern(s)),
            SyntaxKind::Keyword(s) => Value::Keyword(symbols.intern(s)),
            SyntaxKind::String(s) => Value::string(s),
            SyntaxKind::List(items) => Value::tuple(Self::values_of(items, symbols)?),
            SyntaxKind::Tuple(items) => Value::bracket_tuple(Self::values_of(items, symbols)?),
            SyntaxKind::Array(items) => Value::array(Self::values_of(items, symbols)?),
            SyntaxKind::Struct(items) => Value::structure(self.entries_of(items, symbols)?),
            SyntaxKind::Table(items) => Value::table(self.entries_of(items, symbols)?),
        };
        Ok(value)
    }

    fn values_of(items: &[Syntax], symbols: &mut SymbolTable) -> Result<Vec<Value>, CompileError> {
        items.iter().map(|item| item.to_value(symbols)).collect()
    }

    /// Pairs of a struct/table literal as entries. Nil values are dropped,
    /// matching what the runtime constructors do.
    fn entries_of(
        &self,
        items: &[Syntax],
        symbols: &mut SymbolTable,
    ) -> Result<Entries, CompileError> {
        if items.len() % 2 != 0 {
            return Err(CompileError::invalid_form(
                self,
                format!("{} literal needs an even number of forms", self.kind_label()),
            ));
        }
        let mut entries = Entries::new();
        for pair in items.chunks(2) {
            let key = pair[0].to_value(symbols)?;
            let key = TableKey::from_value(&key).ok_or_else(|| {
                CompileError::invalid_form(
                    &pair[0],
                    format!("a {} cannot be used as a key", key.type_name()),
                )
            })?;
            let value = pair[1].to_value(symbols)?;
            if !value.is_nil() {
                entries.insert(key, value);
            }
        }
        Ok(entries)
    }
}
