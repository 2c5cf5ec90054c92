use super::PrimitiveDef;
use crate::error::RuntimeError;
use crate::value::{Arity, Value};

/// True when every adjacent pair satisfies `ordered`.
fn chain(
    name: &str,
    args: &[Value],
    ordered: fn(f64, f64) -> bool,
) -> Result<Value, RuntimeError> {
    let mut nums = Vec::with_capacity(args.len());
    for arg in args {
        match arg.as_number() {
            Some(n) => nums.push(n),
            None => return Err(RuntimeError::type_mismatch(name, "number", arg.type_name())),
        }
    }
    Ok(Value::Bool(nums.windows(2).all(|w| ordered(w[0], w[1]))))
}

pub fn prim_lt(args: &[Value]) -> Result<Value, RuntimeError> {
    chain("<", args, |a, b| a < b)
}

pub fn prim_gt(args: &[Value]) -> Result<Value, RuntimeError> {
    chain(">", args, |a, b| a > b)
}

pub fn prim_le(args: &[Value]) -> Result<Value, RuntimeError> {
    chain("<=", args, |a, b| a <= b)
}

pub fn prim_ge(args: &[Value]) -> Result<Value, RuntimeError> {
    chain(">=", args, |a, b| a >= b)
}

/// Structural equality of all arguments
pub fn prim_eq(args: &[Value]) -> Result<Value, RuntimeError> {
    Ok(Value::Bool(args.windows(2).all(|w| w[0] == w[1])))
}

/// Logical negation under the nil/false truthiness rule
pub fn prim_not(args: &[Value]) -> Result<Value, RuntimeError> {
    Ok(Value::Bool(!args[0].is_truthy()))
}

pub const PRIMITIVES: &[PrimitiveDef] = &[
    PrimitiveDef {
        name: "<",
        func: prim_lt,
        arity: Arity::AtLeast(1),
        doc: "Check if the arguments are strictly increasing.",
    },
    PrimitiveDef {
        name: ">",
        func: prim_gt,
        arity: Arity::AtLeast(1),
        doc: "Check if the arguments are strictly decreasing.",
    },
    PrimitiveDef {
        name: "<=",
        func: prim_le,
        arity: Arity::AtLeast(1),
        doc: "Check if the arguments are non-decreasing.",
    },
    PrimitiveDef {
        name: ">=",
        func: prim_ge,
        arity: Arity::AtLeast(1),
        doc: "Check if the arguments are non-increasing.",
    },
    PrimitiveDef {
        name: "=",
        func: prim_eq,
        arity: Arity::AtLeast(1),
        doc: "Check if all arguments are equal.",
    },
    PrimitiveDef {
        name: "not",
        func: prim_not,
        arity: Arity::Exact(1),
        doc: "True for nil and false, false for everything else.",
    },
];
