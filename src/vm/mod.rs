//! Reference evaluator for lowered code
//!
//! A tree-walking interpreter over [`Hir`]. Control flow is ordinary result
//! propagation: every evaluation step returns [`Flow::Normal`] or a
//! [`Flow::Break`] that travels outward until the `while` or function body
//! it names catches it.

mod call;
mod data;
mod frame;

pub use data::{build, set_index};
pub use frame::Frame;

use crate::error::RuntimeError;
use crate::hir::{Element, Hir, HirKind, HirPattern, VarRef};
use crate::stack::ensure_sufficient_stack;
use crate::value::{Closure, Value};
use frame::ancestor;
use std::rc::Rc;

/// Default limit on nested calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

/// Outcome of evaluating one node.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow<T = Value> {
    Normal(T),
    /// Leaving the construct identified by the target, with a value
    Break(crate::hir::TargetId, Value),
}

/// Unwrap a normal flow, returning early with a pending break.
macro_rules! normal {
    ($flow:expr) => {
        match $flow? {
            Flow::Normal(value) => value,
            Flow::Break(target, value) => return Ok(Flow::Break(target, value)),
        }
    };
}

/// The evaluation capability the pipeline runs lowered forms with.
pub trait Evaluate {
    fn evaluate(&mut self, hir: &Hir) -> Result<Value, RuntimeError>;
}

pub struct Vm {
    max_call_depth: usize,
    call_depth: usize,
}

impl Default for Vm {
    fn default() -> Self {
        Vm::new()
    }
}

impl Vm {
    pub fn new() -> Self {
        Vm::with_max_call_depth(DEFAULT_MAX_CALL_DEPTH)
    }

    pub fn with_max_call_depth(max_call_depth: usize) -> Self {
        Vm {
            max_call_depth,
            call_depth: 0,
        }
    }

    pub fn eval(&mut self, hir: &Hir, env: &Option<Rc<Frame>>) -> Result<Flow, RuntimeError> {
        ensure_sufficient_stack(|| self.eval_node(hir, env))
    }

    fn eval_node(&mut self, hir: &Hir, env: &Option<Rc<Frame>>) -> Result<Flow, RuntimeError> {
        let value = match &hir.kind {
            HirKind::Const(value) => value.clone(),

            HirKind::Var(VarRef::Global(binding)) => binding.value(),
            HirKind::Var(VarRef::Local { depth, slot, .. }) => ancestor(env, *depth)?.get(*slot)?,

            HirKind::Define { target, value } => {
                let value = normal!(self.eval(value, env));
                store(target, value.clone(), env)?;
                value
            }

            HirKind::Destructure { pattern, value } => {
                let value = normal!(self.eval(value, env));
                destructure(pattern, &value, env)?;
                value
            }

            HirKind::Lambda(lambda) => Value::Closure(Rc::new(Closure {
                lambda: lambda.clone(),
                env: env.clone(),
            })),

            HirKind::Do { body, slot_count } => {
                let frame = Some(Frame::new(*slot_count, env.clone()));
                return self.eval_body(body, &frame);
            }

            HirKind::Begin(body) => return self.eval_body(body, env),

            HirKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if normal!(self.eval(cond, env)).is_truthy() {
                    return self.eval(then_branch, env);
                }
                return self.eval(else_branch, env);
            }

            HirKind::While {
                target,
                cond,
                body,
                slot_count,
            } => {
                loop {
                    let flow = match self.eval(cond, env)? {
                        Flow::Normal(test) if !test.is_truthy() => break,
                        Flow::Normal(_) => {
                            let frame = Some(Frame::new(*slot_count, env.clone()));
                            self.eval_body(body, &frame)?
                        }
                        brk => brk,
                    };
                    match flow {
                        Flow::Normal(_) => {}
                        Flow::Break(t, _) if t == *target => break,
                        brk => return Ok(brk),
                    }
                }
                Value::Nil
            }

            HirKind::Break { target, value } => {
                let value = normal!(self.eval(value, env));
                return Ok(Flow::Break(*target, value));
            }

            HirKind::Set { target, value } => {
                let value = normal!(self.eval(value, env));
                match target {
                    VarRef::Global(binding) => binding.assign(value.clone())?,
                    local => store(local, value.clone(), env)?,
                }
                value
            }

            HirKind::SetIndex {
                container,
                key,
                value,
            } => {
                let container = normal!(self.eval(container, env));
                let key = normal!(self.eval(key, env));
                let value = normal!(self.eval(value, env));
                data::set_index(&container, &key, value.clone())?;
                value
            }

            HirKind::Call { func, args } => {
                let func = normal!(self.eval(func, env));
                let args = normal!(self.eval_elements(args, env));
                self.call(&func, args)?
            }

            HirKind::Build { shape, elements } => {
                let items = normal!(self.eval_elements(elements, env));
                data::build(*shape, items)?
            }
        };
        Ok(Flow::Normal(value))
    }

    fn eval_body(&mut self, body: &[Hir], env: &Option<Rc<Frame>>) -> Result<Flow, RuntimeError> {
        let mut last = Value::Nil;
        for hir in body {
            last = normal!(self.eval(hir, env));
        }
        Ok(Flow::Normal(last))
    }

    /// Evaluate left to right, inlining spliced sequences.
    fn eval_elements(
        &mut self,
        elements: &[Element],
        env: &Option<Rc<Frame>>,
    ) -> Result<Flow<Vec<Value>>, RuntimeError> {
        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            let value = normal!(self.eval(&element.expr, env));
            if element.spliced {
                let items = value
                    .sequence_items()
                    .ok_or(RuntimeError::splice_non_sequential(value.type_name()))?;
                values.extend(items);
            } else {
                values.push(value);
            }
        }
        Ok(Flow::Normal(values))
    }
}

impl Evaluate for Vm {
    fn evaluate(&mut self, hir: &Hir) -> Result<Value, RuntimeError> {
        match self.eval(hir, &None)? {
            Flow::Normal(value) => Ok(value),
            Flow::Break(target, _) => Err(RuntimeError::internal(format!(
                "break to {:?} escaped its target",
                target
            ))),
        }
    }
}

/// Initialise the binding a reference names.
fn store(target: &VarRef, value: Value, env: &Option<Rc<Frame>>) -> Result<(), RuntimeError> {
    match target {
        VarRef::Global(binding) => {
            binding.initialize(value);
            Ok(())
        }
        VarRef::Local { depth, slot, .. } => ancestor(env, *depth)?.set(*slot, value),
    }
}

/// Bind every variable of `pattern` from `value`. Missing elements and keys
/// bind nil; there are no shape checks.
fn destructure(
    pattern: &HirPattern,
    value: &Value,
    env: &Option<Rc<Frame>>,
) -> Result<(), RuntimeError> {
    ensure_sufficient_stack(|| match pattern {
        HirPattern::Var(target) => store(target, value.clone(), env),
        HirPattern::Sequential { elements, rest } => {
            for (i, element) in elements.iter().enumerate() {
                destructure(element, &value.element_at(i), env)?;
            }
            if let Some(rest) = rest {
                destructure(rest, &value.elements_from(elements.len()), env)?;
            }
            Ok(())
        }
        HirPattern::Associative { entries } => {
            for (key, element) in entries {
                destructure(element, &value.lookup(key), env)?;
            }
            Ok(())
        }
    })
}
