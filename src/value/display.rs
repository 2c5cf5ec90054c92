//! Display and Debug implementations for values
//!
//! Symbols and keywords are interned, so printing them by name needs the
//! symbol table: `value.display(&symbols)` gives a `Display` adapter. The
//! `Debug` impl prints raw symbol IDs and works without a table.
//!
//! Arrays and tables can contain themselves. A container met again while it
//! is still being printed is written as `<cycle>`.

use crate::stack::ensure_sufficient_stack;
use crate::symbol::{SymbolId, SymbolTable};
use crate::value::{Delimiter, Entries, Value};
use std::fmt;
use std::rc::Rc;

/// `Display` adapter that resolves symbol names through a table.
pub struct ValueDisplay<'a> {
    value: &'a Value,
    symbols: Option<&'a SymbolTable>,
    /// Addresses of the mutable containers enclosing `value`
    open: Vec<usize>,
}

impl Value {
    pub fn display<'a>(&'a self, symbols: &'a SymbolTable) -> ValueDisplay<'a> {
        ValueDisplay {
            value: self,
            symbols: Some(symbols),
            open: Vec::new(),
        }
    }
}

fn address<T>(rc: &Rc<T>) -> usize {
    Rc::as_ptr(rc) as *const () as usize
}

impl<'a> ValueDisplay<'a> {
    fn nested<'b>(&self, value: &'b Value) -> ValueDisplay<'b>
    where
        Self: 'b,
    {
        ValueDisplay {
            value,
            symbols: self.symbols,
            open: self.open.clone(),
        }
    }

    /// This adapter with the container at `addr` marked open, or `None`
    /// when it already is.
    fn enter(&self, addr: usize) -> Option<ValueDisplay<'a>> {
        if self.open.contains(&addr) {
            return None;
        }
        let mut open = self.open.clone();
        open.push(addr);
        Some(ValueDisplay {
            value: self.value,
            symbols: self.symbols,
            open,
        })
    }

    fn write_name(&self, f: &mut fmt::Formatter<'_>, id: SymbolId) -> fmt::Result {
        match self.symbols.and_then(|s| s.name(id)) {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "#<sym:{}>", id.0),
        }
    }

    fn write_seq(
        &self,
        f: &mut fmt::Formatter<'_>,
        open: &str,
        items: &[Value],
        close: &str,
    ) -> fmt::Result {
        write!(f, "{}", open)?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", self.nested(item))?;
        }
        write!(f, "{}", close)
    }

    fn write_entries(
        &self,
        f: &mut fmt::Formatter<'_>,
        open: &str,
        entries: &Entries,
    ) -> fmt::Result {
        write!(f, "{}", open)?;
        for (i, (key, value)) in entries.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let key = key.to_value();
            write!(f, "{} {}", self.nested(&key), self.nested(value))?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.write_value(f))
    }
}

impl ValueDisplay<'_> {
    fn write_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Symbol(id) => self.write_name(f, *id),
            Value::Keyword(id) => {
                write!(f, ":")?;
                self.write_name(f, *id)
            }
            Value::String(s) => write!(f, "\"{}\"", s.escape_default()),
            Value::Tuple(items, Delimiter::Parens) => self.write_seq(f, "(", items, ")"),
            Value::Tuple(items, Delimiter::Brackets) => self.write_seq(f, "[", items, "]"),
            Value::Array(items) => match self.enter(address(items)) {
                Some(inner) => inner.write_seq(f, "@[", &items.borrow(), "]"),
                None => write!(f, "<cycle>"),
            },
            Value::Struct(entries) => self.write_entries(f, "{", entries),
            Value::Table(entries) => match self.enter(address(entries)) {
                Some(inner) => inner.write_entries(f, "@{", &entries.borrow()),
                None => write!(f, "<cycle>"),
            },
            Value::Closure(closure) => match (closure.lambda.name, self.symbols) {
                (Some(id), Some(symbols)) => {
                    write!(f, "<function {}>", symbols.name(id).unwrap_or("?"))
                }
                _ => write!(f, "<function>"),
            },
            Value::Native(native) => write!(f, "<cfunction {}>", native.name),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display = ValueDisplay {
            value: self,
            symbols: None,
            open: Vec::new(),
        };
        write!(f, "{}", display)
    }
}
