//! Destructuring: pattern analysis for binding forms

use super::*;
use crate::hir::pattern::HirPattern;
use crate::stack::ensure_sufficient_stack;
use crate::syntax::SyntaxKind;
use crate::value::TableKey;

impl<'a> Analyzer<'a> {
    /// Convert a syntax pattern into an HirPattern, creating a binding in the
    /// current frame for each leaf symbol in declaration order.
    ///
    /// Sequential patterns (`(...)`, `[...]`, `@[...]`) address elements by
    /// position and accept one `& rest` tail. Associative patterns (`{...}`,
    /// `@{...}`) address values by literal key.
    pub(crate) fn bind_pattern(
        &mut self,
        pattern: &Syntax,
        mutability: Mutability,
        metadata: &Entries,
    ) -> AnalyzeResult<HirPattern> {
        ensure_sufficient_stack(|| self.bind_node(pattern, mutability, metadata))
    }

    fn bind_node(
        &mut self,
        pattern: &Syntax,
        mutability: Mutability,
        metadata: &Entries,
    ) -> AnalyzeResult<HirPattern> {
        match &pattern.kind {
            SyntaxKind::Symbol(name) if name != "&" => {
                let binding = self.bind(pattern, name, mutability, metadata.clone());
                Ok(HirPattern::Var(self.var_ref(&binding)))
            }
            SyntaxKind::List(items) | SyntaxKind::Tuple(items) | SyntaxKind::Array(items) => {
                let (fixed, rest) = Self::split_rest_pattern(pattern, items)?;
                let mut elements = Vec::with_capacity(fixed.len());
                for item in fixed {
                    elements.push(self.bind_pattern(item, mutability, metadata)?);
                }
                let rest = match rest {
                    Some(r) => Some(Box::new(self.bind_pattern(r, mutability, metadata)?)),
                    None => None,
                };
                Ok(HirPattern::Sequential { elements, rest })
            }
            SyntaxKind::Struct(items) | SyntaxKind::Table(items) => {
                if items.len() % 2 != 0 {
                    return Err(CompileError::malformed_pattern(pattern));
                }
                let mut entries = Vec::with_capacity(items.len() / 2);
                for pair in items.chunks(2) {
                    let key = self.pattern_key(&pair[0])?;
                    let value = self.bind_pattern(&pair[1], mutability, metadata)?;
                    entries.push((key, value));
                }
                Ok(HirPattern::Associative { entries })
            }
            _ => Err(CompileError::malformed_pattern(pattern)),
        }
    }

    /// Keys of associative patterns are literals: keywords, strings,
    /// numbers, booleans, or quoted data.
    fn pattern_key(&mut self, key: &Syntax) -> AnalyzeResult<TableKey> {
        let datum = match &key.kind {
            SyntaxKind::Keyword(_)
            | SyntaxKind::String(_)
            | SyntaxKind::Number(_)
            | SyntaxKind::Bool(_) => key,
            _ => match key.as_wrapped("quote") {
                Some(quoted) => quoted,
                None => return Err(CompileError::malformed_pattern(key)),
            },
        };
        let value = datum.to_value(self.symbols)?;
        TableKey::from_value(&value).ok_or_else(|| CompileError::malformed_pattern(key))
    }

    /// Split a pattern's items at `&` into (fixed_elements, optional_rest).
    /// Exactly one pattern must follow the `&`.
    fn split_rest_pattern<'s>(
        pattern: &Syntax,
        items: &'s [Syntax],
    ) -> AnalyzeResult<(&'s [Syntax], Option<&'s Syntax>)> {
        match items.iter().position(|s| s.is_symbol("&")) {
            None => Ok((items, None)),
            Some(pos) => match &items[pos + 1..] {
                [rest] if !rest.is_symbol("&") => Ok((&items[..pos], Some(rest))),
                _ => Err(CompileError::malformed_pattern(pattern)),
            },
        }
    }
}
