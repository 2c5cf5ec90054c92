//! The special forms and their operand shapes

use super::AnalyzeResult;
use crate::binding::Mutability;
use crate::error::CompileError;
use crate::syntax::Syntax;

/// The closed set of forms the compiler lowers itself.
///
/// Anything else in head position is a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialForm {
    Def,
    Var,
    Fn,
    Do,
    Quote,
    If,
    Splice,
    While,
    Break,
    Set,
    Quasiquote,
    Unquote,
}

impl SpecialForm {
    pub const ALL: [SpecialForm; 12] = [
        SpecialForm::Def,
        SpecialForm::Var,
        SpecialForm::Fn,
        SpecialForm::Do,
        SpecialForm::Quote,
        SpecialForm::If,
        SpecialForm::Splice,
        SpecialForm::While,
        SpecialForm::Break,
        SpecialForm::Set,
        SpecialForm::Quasiquote,
        SpecialForm::Unquote,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "def" => Some(SpecialForm::Def),
            "var" => Some(SpecialForm::Var),
            "fn" => Some(SpecialForm::Fn),
            "do" => Some(SpecialForm::Do),
            "quote" => Some(SpecialForm::Quote),
            "if" => Some(SpecialForm::If),
            "splice" => Some(SpecialForm::Splice),
            "while" => Some(SpecialForm::While),
            "break" => Some(SpecialForm::Break),
            "set" => Some(SpecialForm::Set),
            "quasiquote" => Some(SpecialForm::Quasiquote),
            "unquote" => Some(SpecialForm::Unquote),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpecialForm::Def => "def",
            SpecialForm::Var => "var",
            SpecialForm::Fn => "fn",
            SpecialForm::Do => "do",
            SpecialForm::Quote => "quote",
            SpecialForm::If => "if",
            SpecialForm::Splice => "splice",
            SpecialForm::While => "while",
            SpecialForm::Break => "break",
            SpecialForm::Set => "set",
            SpecialForm::Quasiquote => "quasiquote",
            SpecialForm::Unquote => "unquote",
        }
    }
}

/// A special form with its operands checked for count and shape.
pub(super) enum Form<'s> {
    Def {
        mutability: Mutability,
        pattern: &'s Syntax,
        metadata: &'s [Syntax],
        value: &'s Syntax,
    },
    Fn {
        name: Option<(&'s Syntax, &'s str)>,
        params: &'s [Syntax],
        body: &'s [Syntax],
    },
    Do(&'s [Syntax]),
    Quote(&'s Syntax),
    If {
        cond: &'s Syntax,
        then_branch: &'s Syntax,
        else_branch: Option<&'s Syntax>,
    },
    Splice(&'s Syntax),
    While {
        cond: &'s Syntax,
        body: &'s [Syntax],
    },
    Break(Option<&'s Syntax>),
    Set {
        target: &'s Syntax,
        value: &'s Syntax,
    },
    Quasiquote(&'s Syntax),
    Unquote,
}

impl<'s> Form<'s> {
    pub(super) fn parse(
        special: SpecialForm,
        form: &'s Syntax,
        operands: &'s [Syntax],
    ) -> AnalyzeResult<Self> {
        let expects = |what: &str| {
            CompileError::invalid_form(form, format!("{} expects {}", special.name(), what))
        };

        let parsed = match special {
            SpecialForm::Def | SpecialForm::Var => match operands {
                [pattern, metadata @ .., value] => Form::Def {
                    mutability: if special == SpecialForm::Def {
                        Mutability::Constant
                    } else {
                        Mutability::Mutable
                    },
                    pattern,
                    metadata,
                    value,
                },
                _ => return Err(expects("a binding and a value")),
            },
            SpecialForm::Fn => {
                let (name, rest) = match operands {
                    [first, rest @ ..] => match first.as_symbol() {
                        Some(name) => (Some((first, name)), rest),
                        None => (None, operands),
                    },
                    [] => (None, operands),
                };
                match rest {
                    [params, body @ ..] => match params.as_sequence() {
                        Some(params) => Form::Fn { name, params, body },
                        None => return Err(expects("a parameter tuple")),
                    },
                    [] => return Err(expects("a parameter tuple")),
                }
            }
            SpecialForm::Do => Form::Do(operands),
            SpecialForm::If => match operands {
                [cond, then_branch] => Form::If {
                    cond,
                    then_branch,
                    else_branch: None,
                },
                [cond, then_branch, else_branch] => Form::If {
                    cond,
                    then_branch,
                    else_branch: Some(else_branch),
                },
                _ => return Err(expects("2 or 3 operands")),
            },
            SpecialForm::While => match operands {
                [cond, body @ ..] => Form::While { cond, body },
                [] => return Err(expects("a condition")),
            },
            SpecialForm::Break => match operands {
                [] => Form::Break(None),
                [value] => Form::Break(Some(value)),
                _ => return Err(expects("at most 1 operand")),
            },
            SpecialForm::Set => match operands {
                [target, value] => Form::Set { target, value },
                _ => return Err(expects("a target and a value")),
            },
            SpecialForm::Quote
            | SpecialForm::Splice
            | SpecialForm::Quasiquote
            | SpecialForm::Unquote => {
                let [operand] = operands else {
                    return Err(expects("exactly 1 operand"));
                };
                match special {
                    SpecialForm::Quote => Form::Quote(operand),
                    SpecialForm::Splice => Form::Splice(operand),
                    SpecialForm::Quasiquote => Form::Quasiquote(operand),
                    _ => Form::Unquote,
                }
            }
        };
        Ok(parsed)
    }
}
