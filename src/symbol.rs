use rustc_hash::FxHashMap;
use std::fmt;
use std::rc::Rc;

/// Symbol ID for interned symbols.
///
/// Symbols and keywords are interned for fast comparison (O(1) via ID
/// comparison instead of O(n) string comparison). Two IDs are equal exactly
/// when their names are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(pub u32);

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Symbol interning table
///
/// Uses `Rc<str>` for symbol names to avoid duplication:
/// - Single allocation via `Rc::from(name)`
/// - Shared reference counting between map and names vector
#[derive(Debug, Default)]
pub struct SymbolTable {
    map: FxHashMap<Rc<str>, SymbolId>,
    names: Vec<Rc<str>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            map: FxHashMap::default(),
            names: Vec::new(),
        }
    }

    /// Intern a symbol, returning its ID
    pub fn intern(&mut self, name: &str) -> SymbolId {
        if let Some(&id) = self.map.get(name) {
            return id;
        }

        let id = SymbolId(self.names.len() as u32);
        let shared_name: Rc<str> = Rc::from(name);
        self.names.push(shared_name.clone());
        self.map.insert(shared_name, id);
        id
    }

    /// Get the name of a symbol by ID
    pub fn name(&self, id: SymbolId) -> Option<&str> {
        self.names.get(id.0 as usize).map(|s| s.as_ref())
    }

    /// Check if a symbol exists
    pub fn get(&self, name: &str) -> Option<SymbolId> {
        self.map.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
