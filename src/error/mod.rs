//! Error types for compilation and evaluation
//!
//! Compile errors are structured values carrying the error kind, the
//! offending form and its source position. Runtime errors come from the
//! reference evaluator. `Error` unifies both at the pipeline boundary.

mod builders;
mod types;

pub use types::{CompileError, Error, ErrorKind, Notice, NoticeKind, Result, RuntimeError};
