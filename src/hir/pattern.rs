//! Destructuring patterns in HIR

use super::expr::VarRef;
use crate::binding::Binding;
use crate::value::TableKey;

/// A binding pattern with every leaf already bound.
#[derive(Debug, Clone)]
pub enum HirPattern {
    /// Bind the whole value
    Var(VarRef),

    /// Position-addressed: element i goes to pattern i, `&` tail gets the
    /// remaining elements as a tuple
    Sequential {
        elements: Vec<HirPattern>,
        rest: Option<Box<HirPattern>>,
    },

    /// Key-addressed: each key is looked up in the value
    Associative { entries: Vec<(TableKey, HirPattern)> },
}

impl HirPattern {
    /// Bindings introduced by this pattern, in declaration order.
    pub fn bindings(&self) -> Vec<Binding> {
        let mut out = Vec::new();
        self.collect_bindings(&mut out);
        out
    }

    fn collect_bindings(&self, out: &mut Vec<Binding>) {
        match self {
            HirPattern::Var(var) => out.push(var.binding().clone()),
            HirPattern::Sequential { elements, rest } => {
                for p in elements {
                    p.collect_bindings(out);
                }
                if let Some(rest) = rest {
                    rest.collect_bindings(out);
                }
            }
            HirPattern::Associative { entries } => {
                for (_, p) in entries {
                    p.collect_bindings(out);
                }
            }
        }
    }
}
