//! Quasiquote expansion
//!
//! A template is rewritten into a construction tree while it is analyzed.
//! `depth` counts the enclosing quasiquotes that have not been cancelled by
//! an unquote: at depth 1 an `(unquote x)` is a hole and `x` is lowered as
//! ordinary code in the surrounding scope. Deeper markers are data and are
//! rebuilt around their expanded argument.
//!
//! Every subtree without holes comes back as `HirKind::Const`, so a template
//! with no holes at all lowers to a single constant. Arrays and tables are
//! the exception: they are mutable, and each evaluation must yield a fresh
//! one.

use super::*;
use crate::hir::expr::{Element, Shape};
use crate::stack::ensure_sufficient_stack;
use crate::syntax::SyntaxKind;
use crate::value::{TableKey, Value};

impl<'a> Analyzer<'a> {
    pub(crate) fn expand_quasiquote(&mut self, form: &Syntax, depth: usize) -> AnalyzeResult<Hir> {
        ensure_sufficient_stack(|| self.expand_template(form, depth))
    }

    fn expand_template(&mut self, form: &Syntax, depth: usize) -> AnalyzeResult<Hir> {
        if let Some(inner) = form.as_wrapped("quasiquote") {
            let expanded = self.expand_quasiquote(inner, depth + 1)?;
            return Ok(self.rewrap("quasiquote", expanded, form));
        }
        if let Some(inner) = form.as_wrapped("unquote") {
            if depth == 1 {
                return self.analyze_expr(inner);
            }
            let expanded = self.expand_quasiquote(inner, depth - 1)?;
            return Ok(self.rewrap("unquote", expanded, form));
        }

        let (shape, items) = match &form.kind {
            SyntaxKind::List(items) => (Shape::Tuple, items),
            SyntaxKind::Tuple(items) => (Shape::BracketTuple, items),
            SyntaxKind::Array(items) => (Shape::Array, items),
            SyntaxKind::Struct(items) => (Shape::Struct, items),
            SyntaxKind::Table(items) => (Shape::Table, items),
            _ => {
                let value = form.to_value(self.symbols)?;
                return Ok(Hir::new(HirKind::Const(value), form.span.clone()));
            }
        };

        let mut elements = Vec::with_capacity(items.len());
        for item in items {
            let spliced = match item.as_wrapped("unquote") {
                Some(arg) if depth == 1 => arg.as_wrapped("splice"),
                _ => None,
            };
            let element = match spliced {
                Some(seq) => Element::spliced(self.analyze_expr(seq)?),
                None => Element::plain(self.expand_quasiquote(item, depth)?),
            };
            elements.push(element);
        }
        self.assemble(shape, elements, form)
    }

    /// `(head inner)` as data.
    fn rewrap(&mut self, head: &str, inner: Hir, form: &Syntax) -> Hir {
        let marker = Value::Symbol(self.symbols.intern(head));
        let span = form.span.clone();
        let kind = match inner.as_const() {
            Some(value) => HirKind::Const(Value::tuple(vec![marker, value.clone()])),
            None => HirKind::Build {
                shape: Shape::Tuple,
                elements: vec![
                    Element::plain(Hir::new(HirKind::Const(marker), span.clone())),
                    Element::plain(inner),
                ],
            },
        };
        Hir::new(kind, span)
    }

    /// Rebuild one composite of a template, folding it into a constant when
    /// it is immutable and every element is.
    fn assemble(&mut self, shape: Shape, elements: Vec<Element>, form: &Syntax) -> AnalyzeResult<Hir> {
        let has_splice = elements.iter().any(|e| e.spliced);
        if shape.is_associative() && !has_splice && elements.len() % 2 != 0 {
            return Err(CompileError::invalid_form(
                form,
                format!("{} template needs an even number of forms", shape.label()),
            ));
        }

        let span = form.span.clone();
        if shape.is_mutable() || has_splice {
            return Ok(Hir::new(HirKind::Build { shape, elements }, span));
        }
        let Some(values) = elements
            .iter()
            .map(|e| e.expr.as_const().cloned())
            .collect::<Option<Vec<Value>>>()
        else {
            return Ok(Hir::new(HirKind::Build { shape, elements }, span));
        };

        let value = match shape {
            Shape::Struct => {
                let mut entries = Entries::new();
                for pair in values.chunks(2) {
                    let key = TableKey::from_value(&pair[0]).ok_or_else(|| {
                        CompileError::invalid_form(
                            form,
                            format!("a {} cannot be used as a key", pair[0].type_name()),
                        )
                    })?;
                    if !pair[1].is_nil() {
                        entries.insert(key, pair[1].clone());
                    }
                }
                Value::structure(entries)
            }
            Shape::BracketTuple => Value::bracket_tuple(values),
            _ => Value::tuple(values),
        };
        Ok(Hir::new(HirKind::Const(value), span))
    }
}
