//! Core form analysis: analyze_expr and control flow forms

use super::special::Form;
use super::*;
use crate::hir::expr::Shape;
use crate::stack::ensure_sufficient_stack;
use crate::syntax::SyntaxKind;
use crate::value::Value;
use tracing::trace;

impl<'a> Analyzer<'a> {
    pub(crate) fn analyze_expr(&mut self, syntax: &Syntax) -> AnalyzeResult<Hir> {
        ensure_sufficient_stack(|| self.analyze_node(syntax))
    }

    fn analyze_node(&mut self, syntax: &Syntax) -> AnalyzeResult<Hir> {
        let span = syntax.span.clone();

        match &syntax.kind {
            // Literals
            SyntaxKind::Nil
            | SyntaxKind::Bool(_)
            | SyntaxKind::Number(_)
            | SyntaxKind::String(_)
            | SyntaxKind::Keyword(_) => {
                let value = syntax.to_value(self.symbols)?;
                Ok(Hir::new(HirKind::Const(value), span))
            }

            // Variable reference
            SyntaxKind::Symbol(name) => match self.lookup(name) {
                Some(binding) => Ok(self.var(&binding, syntax)),
                None => Err(CompileError::unbound_symbol(syntax, name)),
            },

            // Literal constructors evaluate their elements
            SyntaxKind::Tuple(items) => self.analyze_constructor(Shape::Tuple, syntax, items),
            SyntaxKind::Array(items) => self.analyze_constructor(Shape::Array, syntax, items),
            SyntaxKind::Struct(items) => self.analyze_constructor(Shape::Struct, syntax, items),
            SyntaxKind::Table(items) => self.analyze_constructor(Shape::Table, syntax, items),

            // List - special form or function call
            SyntaxKind::List(items) => {
                let Some(head) = items.first() else {
                    return Ok(Hir::new(HirKind::Const(Value::empty_tuple()), span));
                };
                match head.as_symbol().and_then(SpecialForm::from_name) {
                    Some(special) => self.analyze_special(special, syntax, &items[1..]),
                    None => self.analyze_call(syntax, items),
                }
            }
        }
    }

    fn analyze_special(
        &mut self,
        special: SpecialForm,
        syntax: &Syntax,
        operands: &[Syntax],
    ) -> AnalyzeResult<Hir> {
        trace!(form = special.name(), span = %syntax.span, "lower special form");

        match Form::parse(special, syntax, operands)? {
            Form::Def {
                mutability,
                pattern,
                metadata,
                value,
            } => self.analyze_def(syntax, mutability, pattern, metadata, value),
            Form::Fn { name, params, body } => self.analyze_fn(syntax, name, params, body),
            Form::Do(body) => self.analyze_do(syntax, body),
            Form::Quote(datum) => {
                let value = datum.to_value(self.symbols)?;
                Ok(Hir::new(HirKind::Const(value), syntax.span.clone()))
            }
            Form::If {
                cond,
                then_branch,
                else_branch,
            } => self.analyze_if(syntax, cond, then_branch, else_branch),
            // Outside a call or constructor, splice is the identity
            Form::Splice(inner) => self.analyze_expr(inner),
            Form::While { cond, body } => self.analyze_while(syntax, cond, body),
            Form::Break(value) => self.analyze_break(syntax, value),
            Form::Set { target, value } => self.analyze_set(syntax, target, value),
            Form::Quasiquote(template) => self.expand_quasiquote(template, 1),
            Form::Unquote => Err(CompileError::unquote_outside_quasiquote(syntax)),
        }
    }

    /// Analyze a sequence of body forms in the current frame.
    pub(crate) fn analyze_body(&mut self, items: &[Syntax]) -> AnalyzeResult<Vec<Hir>> {
        items.iter().map(|item| self.analyze_expr(item)).collect()
    }

    fn analyze_if(
        &mut self,
        syntax: &Syntax,
        cond: &Syntax,
        then_branch: &Syntax,
        else_branch: Option<&Syntax>,
    ) -> AnalyzeResult<Hir> {
        let cond = self.analyze_expr(cond)?;
        let then_branch = self.analyze_expr(then_branch)?;
        let else_branch = match else_branch {
            Some(e) => self.analyze_expr(e)?,
            None => Hir::nil(syntax.span.clone()),
        };

        Ok(Hir::new(
            HirKind::If {
                cond: Box::new(cond),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            },
            syntax.span.clone(),
        ))
    }

    fn analyze_do(&mut self, syntax: &Syntax, items: &[Syntax]) -> AnalyzeResult<Hir> {
        let (body, slot_count) = self.in_frame(FrameKind::Block, |a| a.analyze_body(items))?;
        Ok(Hir::new(
            HirKind::Do { body, slot_count },
            syntax.span.clone(),
        ))
    }

    /// The condition runs in the enclosing frame; the body gets a fresh frame
    /// per iteration. Both can `break` out of the loop.
    fn analyze_while(
        &mut self,
        syntax: &Syntax,
        cond: &Syntax,
        body: &[Syntax],
    ) -> AnalyzeResult<Hir> {
        let ((cond, (body, slot_count)), target) = self.with_target(|a| {
            let cond = a.analyze_expr(cond)?;
            let body = a.in_frame(FrameKind::Loop, |a| a.analyze_body(body))?;
            Ok((cond, body))
        })?;

        Ok(Hir::new(
            HirKind::While {
                target,
                cond: Box::new(cond),
                body,
                slot_count,
            },
            syntax.span.clone(),
        ))
    }

    fn analyze_break(&mut self, syntax: &Syntax, value: Option<&Syntax>) -> AnalyzeResult<Hir> {
        let Some(&target) = self.targets.last() else {
            return Err(CompileError::no_enclosing_target(syntax));
        };
        let value = match value {
            Some(v) => self.analyze_expr(v)?,
            None => Hir::nil(syntax.span.clone()),
        };

        Ok(Hir::new(
            HirKind::Break {
                target,
                value: Box::new(value),
            },
            syntax.span.clone(),
        ))
    }
}
