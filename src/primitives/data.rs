//! Composite access: length, get, put, and the tuple/array constructors

use super::PrimitiveDef;
use crate::error::RuntimeError;
use crate::value::{Arity, TableKey, Value};

pub fn prim_length(args: &[Value]) -> Result<Value, RuntimeError> {
    match args[0].length() {
        Some(n) => Ok(Value::Number(n as f64)),
        None => Err(RuntimeError::type_mismatch(
            "length",
            "string or composite",
            args[0].type_name(),
        )),
    }
}

/// (get ds key &opt default)
///
/// Sequences are indexed by position, structs and tables by key. Missing
/// entries and non-indexable values give the default (nil).
pub fn prim_get(args: &[Value]) -> Result<Value, RuntimeError> {
    let default = args.get(2).cloned().unwrap_or(Value::Nil);
    let found = match &args[0] {
        Value::Tuple(..) | Value::Array(_) => match args[1].as_index() {
            Some(index) if index < args[0].length().unwrap_or(0) => args[0].element_at(index),
            _ => Value::Nil,
        },
        Value::Struct(_) | Value::Table(_) => match TableKey::from_value(&args[1]) {
            Some(key) => args[0].lookup(&key),
            None => Value::Nil,
        },
        _ => Value::Nil,
    };
    Ok(if found.is_nil() { default } else { found })
}

/// (put ds key value): update an array or table in place, returning it
pub fn prim_put(args: &[Value]) -> Result<Value, RuntimeError> {
    crate::vm::set_index(&args[0], &args[1], args[2].clone())?;
    Ok(args[0].clone())
}

pub fn prim_tuple(args: &[Value]) -> Result<Value, RuntimeError> {
    Ok(Value::tuple(args.to_vec()))
}

pub fn prim_array(args: &[Value]) -> Result<Value, RuntimeError> {
    Ok(Value::array(args.to_vec()))
}

pub const PRIMITIVES: &[PrimitiveDef] = &[
    PrimitiveDef {
        name: "length",
        func: prim_length,
        arity: Arity::Exact(1),
        doc: "Number of elements, entries or bytes.",
    },
    PrimitiveDef {
        name: "get",
        func: prim_get,
        arity: Arity::Range(2, 3),
        doc: "Value at a key or index, or the default when missing.",
    },
    PrimitiveDef {
        name: "put",
        func: prim_put,
        arity: Arity::Exact(3),
        doc: "Set a key or index of an array or table in place.",
    },
    PrimitiveDef {
        name: "tuple",
        func: prim_tuple,
        arity: Arity::AtLeast(0),
        doc: "Make a tuple of the arguments.",
    },
    PrimitiveDef {
        name: "array",
        func: prim_array,
        arity: Arity::AtLeast(0),
        doc: "Make a new array of the arguments.",
    },
];
