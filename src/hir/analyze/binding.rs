//! Binding forms: def, var, set

use super::*;
use crate::binding::FrameId;
use crate::hir::pattern::HirPattern;
use crate::syntax::SyntaxKind;
use crate::value::{TableKey, Value};

impl<'a> Analyzer<'a> {
    /// `(def pattern metadata... value)` and `(var ...)`.
    ///
    /// The value is analyzed before any binding is created, so it sees the
    /// previous meaning of every name the pattern rebinds.
    pub(crate) fn analyze_def(
        &mut self,
        syntax: &Syntax,
        mutability: Mutability,
        pattern: &Syntax,
        metadata: &[Syntax],
        value: &Syntax,
    ) -> AnalyzeResult<Hir> {
        let value = self.analyze_expr(value)?;
        let metadata = if self.env.current() == FrameId::GLOBAL {
            self.analyze_metadata(metadata)?
        } else {
            Entries::new()
        };

        let kind = match self.bind_pattern(pattern, mutability, &metadata)? {
            HirPattern::Var(target) => HirKind::Define {
                target,
                value: Box::new(value),
            },
            pattern => HirKind::Destructure {
                pattern,
                value: Box::new(value),
            },
        };
        Ok(Hir::new(kind, syntax.span.clone()))
    }

    /// Metadata between the binding and the value of a global definition:
    /// `:flag` sets the flag to true, a string becomes `:doc`, and struct
    /// literals are merged in.
    fn analyze_metadata(&mut self, items: &[Syntax]) -> AnalyzeResult<Entries> {
        let mut entries = Entries::new();
        for item in items {
            match &item.kind {
                SyntaxKind::Keyword(name) => {
                    let key = TableKey::Keyword(self.symbols.intern(name));
                    entries.insert(key, Value::TRUE);
                }
                SyntaxKind::String(doc) => {
                    let key = TableKey::Keyword(self.symbols.intern("doc"));
                    entries.insert(key, Value::string(doc));
                }
                SyntaxKind::Struct(_) => match item.to_value(self.symbols) {
                    Ok(Value::Struct(fields)) => {
                        entries.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));
                    }
                    _ => return Err(CompileError::malformed_metadata(item)),
                },
                _ => return Err(CompileError::malformed_metadata(item)),
            }
        }
        Ok(entries)
    }

    /// `(set name value)` or `(set (container key) value)`.
    pub(crate) fn analyze_set(
        &mut self,
        syntax: &Syntax,
        target: &Syntax,
        value: &Syntax,
    ) -> AnalyzeResult<Hir> {
        let kind = match &target.kind {
            SyntaxKind::Symbol(name) => {
                let Some(binding) = self.lookup(name) else {
                    return Err(CompileError::invalid_lvalue(
                        syntax,
                        format!("`{}` is not declared", name),
                    ));
                };
                if binding.is_constant() {
                    return Err(CompileError::immutable_binding(syntax, name));
                }
                HirKind::Set {
                    target: self.var_ref(&binding),
                    value: Box::new(self.analyze_expr(value)?),
                }
            }
            SyntaxKind::List(items) if items.len() == 2 => {
                if let Some(special) = items[0].as_symbol().and_then(SpecialForm::from_name) {
                    return Err(CompileError::invalid_lvalue(
                        syntax,
                        format!("cannot set a {} form", special.name()),
                    ));
                }
                HirKind::SetIndex {
                    container: Box::new(self.analyze_expr(&items[0])?),
                    key: Box::new(self.analyze_expr(&items[1])?),
                    value: Box::new(self.analyze_expr(value)?),
                }
            }
            _ => {
                return Err(CompileError::invalid_lvalue(
                    syntax,
                    format!("cannot set a {}", target.kind_label()),
                ))
            }
        };
        Ok(Hir::new(kind, syntax.span.clone()))
    }
}
