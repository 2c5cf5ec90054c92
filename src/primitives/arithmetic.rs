use super::PrimitiveDef;
use crate::error::RuntimeError;
use crate::value::{Arity, Value};

fn numbers(name: &str, args: &[Value]) -> Result<Vec<f64>, RuntimeError> {
    args.iter()
        .map(|arg| {
            arg.as_number()
                .ok_or_else(|| RuntimeError::type_mismatch(name, "number", arg.type_name()))
        })
        .collect()
}

/// Variadic addition: (+ 1 2 3) -> 6, (+) -> 0
pub fn prim_add(args: &[Value]) -> Result<Value, RuntimeError> {
    Ok(Value::Number(numbers("+", args)?.into_iter().sum()))
}

/// (- 10 3 2) -> 5, (- 5) -> -5
pub fn prim_sub(args: &[Value]) -> Result<Value, RuntimeError> {
    let nums = numbers("-", args)?;
    match nums.split_first() {
        Some((first, [])) => Ok(Value::Number(-first)),
        Some((first, rest)) => Ok(Value::Number(rest.iter().fold(*first, |acc, n| acc - n))),
        None => Ok(Value::Number(0.0)),
    }
}

/// Variadic multiplication: (* 2 3) -> 6, (*) -> 1
pub fn prim_mul(args: &[Value]) -> Result<Value, RuntimeError> {
    Ok(Value::Number(numbers("*", args)?.into_iter().product()))
}

/// (/ 12 2 3) -> 2, (/ 4) -> 0.25
pub fn prim_div(args: &[Value]) -> Result<Value, RuntimeError> {
    let nums = numbers("/", args)?;
    match nums.split_first() {
        Some((first, [])) => Ok(Value::Number(1.0 / first)),
        Some((first, rest)) => Ok(Value::Number(rest.iter().fold(*first, |acc, n| acc / n))),
        None => Ok(Value::Number(1.0)),
    }
}

pub const PRIMITIVES: &[PrimitiveDef] = &[
    PrimitiveDef {
        name: "+",
        func: prim_add,
        arity: Arity::AtLeast(0),
        doc: "Sum of the arguments.",
    },
    PrimitiveDef {
        name: "-",
        func: prim_sub,
        arity: Arity::AtLeast(1),
        doc: "Subtract the rest from the first argument, or negate a single one.",
    },
    PrimitiveDef {
        name: "*",
        func: prim_mul,
        arity: Arity::AtLeast(0),
        doc: "Product of the arguments.",
    },
    PrimitiveDef {
        name: "/",
        func: prim_div,
        arity: Arity::AtLeast(1),
        doc: "Divide the first argument by the rest, or invert a single one.",
    },
];
