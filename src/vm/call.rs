use super::frame::Frame;
use super::{Flow, Vm};
use crate::error::RuntimeError;
use crate::stack::ensure_sufficient_stack;
use crate::value::{Closure, Native, Value};
use std::rc::Rc;
use tracing::trace;

impl Vm {
    /// Call any callable value with already evaluated arguments.
    pub fn call(&mut self, func: &Value, args: Vec<Value>) -> Result<Value, RuntimeError> {
        if self.call_depth >= self.max_call_depth {
            return Err(RuntimeError::call_depth_exceeded(self.max_call_depth));
        }
        self.call_depth += 1;
        let result = match func {
            Value::Closure(closure) => self.call_closure(closure, args),
            Value::Native(native) => call_native(native, &args),
            other => Err(RuntimeError::not_callable(other.type_name())),
        };
        self.call_depth -= 1;
        result
    }

    /// Arguments are bound leniently: missing ones are nil and extra ones
    /// are dropped unless the lambda has a rest parameter.
    fn call_closure(&mut self, closure: &Rc<Closure>, args: Vec<Value>) -> Result<Value, RuntimeError> {
        ensure_sufficient_stack(|| self.enter_closure(closure, args))
    }

    fn enter_closure(&mut self, closure: &Rc<Closure>, args: Vec<Value>) -> Result<Value, RuntimeError> {
        let lambda = &closure.lambda;
        trace!(name = ?lambda.name, args = args.len(), "call closure");

        let frame = Frame::new(lambda.slot_count, closure.env.clone());
        if let Some(slot) = lambda.self_slot {
            frame.set(slot, Value::Closure(closure.clone()))?;
        }
        for (i, &slot) in lambda.params.iter().enumerate() {
            frame.set(slot, args.get(i).cloned().unwrap_or(Value::Nil))?;
        }
        if let Some(slot) = lambda.rest {
            let rest = args.get(lambda.params.len()..).unwrap_or(&[]).to_vec();
            frame.set(slot, Value::tuple(rest))?;
        }

        // A break that reaches the call boundary returns from this function
        match self.eval(&lambda.body, &Some(frame))? {
            Flow::Normal(value) | Flow::Break(_, value) => Ok(value),
        }
    }
}

fn call_native(native: &Native, args: &[Value]) -> Result<Value, RuntimeError> {
    if !native.arity.matches(args.len()) {
        return Err(RuntimeError::arity_mismatch(
            native.name,
            native.arity,
            args.len(),
        ));
    }
    (native.func)(args)
}
