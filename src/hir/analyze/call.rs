//! Calls and literal constructors

use super::*;
use crate::hir::expr::{Element, Shape};

impl<'a> Analyzer<'a> {
    pub(crate) fn analyze_call(
        &mut self,
        syntax: &Syntax,
        items: &[Syntax],
    ) -> AnalyzeResult<Hir> {
        let func = self.analyze_expr(&items[0])?;
        let args = self.analyze_elements(&items[1..])?;

        Ok(Hir::new(
            HirKind::Call {
                func: Box::new(func),
                args,
            },
            syntax.span.clone(),
        ))
    }

    /// `[...]`, `@[...]`, `{...}` and `@{...}` in code position.
    pub(crate) fn analyze_constructor(
        &mut self,
        shape: Shape,
        syntax: &Syntax,
        items: &[Syntax],
    ) -> AnalyzeResult<Hir> {
        let elements = self.analyze_elements(items)?;
        // With splices the count is only known at runtime
        if shape.is_associative()
            && elements.len() % 2 != 0
            && !elements.iter().any(|e| e.spliced)
        {
            return Err(CompileError::invalid_form(
                syntax,
                format!("{} literal needs an even number of forms", shape.label()),
            ));
        }

        Ok(Hir::new(
            HirKind::Build { shape, elements },
            syntax.span.clone(),
        ))
    }

    /// Argument or element positions, where `(splice x)` inlines the
    /// elements of `x`.
    fn analyze_elements(&mut self, items: &[Syntax]) -> AnalyzeResult<Vec<Element>> {
        let mut elements = Vec::with_capacity(items.len());
        for item in items {
            let element = match item.as_wrapped("splice") {
                Some(inner) => Element::spliced(self.analyze_expr(inner)?),
                None => Element::plain(self.analyze_expr(item)?),
            };
            elements.push(element);
        }
        Ok(elements)
    }
}
