//! Lambda analysis: (fn name? [params...] body...)

use super::*;
use crate::hir::expr::Lambda;
use std::rc::Rc;

impl<'a> Analyzer<'a> {
    pub(crate) fn analyze_fn(
        &mut self,
        syntax: &Syntax,
        name: Option<(&Syntax, &str)>,
        params: &[Syntax],
        body: &[Syntax],
    ) -> AnalyzeResult<Hir> {
        let (fixed, rest) = Self::split_params(syntax, params)?;
        let name_sym = name.map(|(_, n)| self.symbols.intern(n));

        // The target is innermost while the body is analyzed, so a `break`
        // in the body leaves this function and nothing outside it.
        let (((self_slot, param_slots, rest_slot, body), slot_count), target) =
            self.with_target(|a| {
                a.in_frame(FrameKind::Function, |a| {
                    // The name is visible inside the body only
                    let self_slot = match name {
                        Some((name_syntax, n)) => {
                            let binding = a.bind(name_syntax, n, Mutability::Constant, Entries::new());
                            Some(Self::param_slot(&binding, name_syntax)?)
                        }
                        None => None,
                    };

                    let mut prelude = Vec::new();
                    let mut param_slots = Vec::with_capacity(fixed.len());
                    for param in &fixed {
                        param_slots.push(a.bind_param(param, &mut prelude)?);
                    }
                    let rest_slot = match rest {
                        Some(r) => Some(a.bind_param(r, &mut prelude)?),
                        None => None,
                    };

                    prelude.extend(a.analyze_body(body)?);
                    Ok((self_slot, param_slots, rest_slot, prelude))
                })
            })?;

        let lambda = Lambda {
            name: name_sym,
            self_slot,
            params: param_slots,
            rest: rest_slot,
            slot_count,
            target,
            body: Hir::new(HirKind::Begin(body), syntax.span.clone()),
        };
        Ok(Hir::new(HirKind::Lambda(Rc::new(lambda)), syntax.span.clone()))
    }

    /// Split parameters at `&` into (fixed, rest). `&opt` markers are
    /// dropped: missing arguments bind nil whether or not they are marked.
    fn split_params<'s>(
        syntax: &Syntax,
        params: &'s [Syntax],
    ) -> AnalyzeResult<(Vec<&'s Syntax>, Option<&'s Syntax>)> {
        let params: Vec<&Syntax> = params.iter().filter(|p| !p.is_symbol("&opt")).collect();
        match params.iter().position(|p| p.is_symbol("&")) {
            None => Ok((params, None)),
            Some(pos) => match params[pos + 1..] {
                [rest] if !rest.is_symbol("&") => Ok((params[..pos].to_vec(), Some(rest))),
                _ => Err(CompileError::invalid_form(
                    syntax,
                    "& must be followed by exactly one parameter",
                )),
            },
        }
    }

    /// Bind one parameter and return the slot the argument lands in.
    ///
    /// A destructuring parameter receives its argument in a hidden slot and
    /// unpacks it at the start of the body.
    fn bind_param(&mut self, param: &Syntax, prelude: &mut Vec<Hir>) -> AnalyzeResult<usize> {
        if let Some(name) = param.as_symbol() {
            let binding = self.bind(param, name, Mutability::Constant, Entries::new());
            return Self::param_slot(&binding, param);
        }

        let frame = self.env.current();
        let tmp_name = self.symbols.intern("__destructure_param");
        let Some(tmp) = self.env.define_hidden(frame, tmp_name) else {
            return Err(CompileError::malformed_pattern(param));
        };
        let pattern = self.bind_pattern(param, Mutability::Constant, &Entries::new())?;
        prelude.push(Hir::new(
            HirKind::Destructure {
                pattern,
                value: Box::new(self.var(&tmp, param)),
            },
            param.span.clone(),
        ));
        Self::param_slot(&tmp, param)
    }

    fn param_slot(binding: &Binding, param: &Syntax) -> AnalyzeResult<usize> {
        binding
            .slot()
            .ok_or_else(|| CompileError::invalid_form(param, "parameter outside a function frame"))
    }
}
