//! Runtime frames
//!
//! Every non-global compile-time frame becomes one runtime frame: a fixed
//! row of slots plus a link to the frame it is nested in. Top-level code has
//! no frame at all; its bindings are global cells.

use crate::error::RuntimeError;
use crate::value::Value;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

pub struct Frame {
    slots: RefCell<SmallVec<[Value; 8]>>,
    parent: Option<Rc<Frame>>,
}

impl Frame {
    pub fn new(slot_count: usize, parent: Option<Rc<Frame>>) -> Rc<Frame> {
        let mut slots = SmallVec::with_capacity(slot_count);
        slots.resize(slot_count, Value::Nil);
        Rc::new(Frame {
            slots: RefCell::new(slots),
            parent,
        })
    }

    pub fn parent(&self) -> Option<&Rc<Frame>> {
        self.parent.as_ref()
    }

    pub fn get(&self, slot: usize) -> Result<Value, RuntimeError> {
        self.slots
            .borrow()
            .get(slot)
            .cloned()
            .ok_or_else(|| RuntimeError::internal(format!("slot {} out of range", slot)))
    }

    pub fn set(&self, slot: usize, value: Value) -> Result<(), RuntimeError> {
        match self.slots.borrow_mut().get_mut(slot) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(RuntimeError::internal(format!("slot {} out of range", slot))),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The frame `depth` links above `env`.
pub fn ancestor(env: &Option<Rc<Frame>>, depth: usize) -> Result<&Rc<Frame>, RuntimeError> {
    let mut frame = env.as_ref();
    for _ in 0..depth {
        frame = frame.and_then(|f| f.parent());
    }
    frame.ok_or_else(|| RuntimeError::internal(format!("no frame {} levels up", depth)))
}
