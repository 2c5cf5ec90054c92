use crate::error::RuntimeError;
use crate::hir::Shape;
use crate::value::{Entries, TableKey, Value};

/// Build a composite from its evaluated (and already spliced) elements.
/// Struct and table entries with a nil value are dropped.
pub fn build(shape: Shape, items: Vec<Value>) -> Result<Value, RuntimeError> {
    match shape {
        Shape::Tuple => Ok(Value::tuple(items)),
        Shape::BracketTuple => Ok(Value::bracket_tuple(items)),
        Shape::Array => Ok(Value::array(items)),
        Shape::Struct => Ok(Value::structure(entries(shape, items)?)),
        Shape::Table => Ok(Value::table(entries(shape, items)?)),
    }
}

fn entries(shape: Shape, items: Vec<Value>) -> Result<Entries, RuntimeError> {
    if items.len() % 2 != 0 {
        return Err(RuntimeError::type_mismatch(
            shape.label(),
            "an even number of forms",
            format!("{} forms", items.len()),
        ));
    }
    let mut entries = Entries::new();
    let mut iter = items.into_iter();
    while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
        let key = TableKey::from_value(&key).ok_or(RuntimeError::invalid_key(key.type_name()))?;
        if !value.is_nil() {
            entries.insert(key, value);
        }
    }
    Ok(entries)
}

/// In-place update for `(set (container key) value)`.
///
/// Arrays take an integer index up to and including their length (the
/// length appends). Tables take any valid key; a nil value removes the key.
pub fn set_index(container: &Value, key: &Value, value: Value) -> Result<(), RuntimeError> {
    match container {
        Value::Array(items) => {
            let Some(index) = key.as_index() else {
                return Err(RuntimeError::type_mismatch(
                    "set",
                    "integer index",
                    key.type_name(),
                ));
            };
            let mut items = items.borrow_mut();
            let length = items.len();
            if index < length {
                items[index] = value;
            } else if index == length {
                items.push(value);
            } else {
                return Err(RuntimeError::index_out_of_bounds(index, length));
            }
            Ok(())
        }
        Value::Table(entries) => {
            let key = TableKey::from_value(key).ok_or(RuntimeError::invalid_key(key.type_name()))?;
            let mut entries = entries.borrow_mut();
            if value.is_nil() {
                entries.remove(&key);
            } else {
                entries.insert(key, value);
            }
            Ok(())
        }
        other => Err(RuntimeError::immutable_container(other.type_name())),
    }
}
