//! Compile-time lexical environment
//!
//! The analyzer resolves every symbol against an `Environment` while
//! lowering, so the lowered tree refers to `Binding`s rather than names.
//!
//! # Usage
//!
//! 1. Push a frame when entering `fn`, `do` or a `while` body
//! 2. `define` bindings as `def`, `var` and parameters are lowered
//! 3. `lookup` references, innermost frame first
//! 4. Pop the frame when the form is lowered
//!
//! Global bindings own a value cell. Local bindings own a slot index into
//! the runtime frame that mirrors their compile-time frame.

mod scope;

pub use scope::{Binding, Checkpoint, Environment, FrameId, FrameKind, Location, Mutability};
