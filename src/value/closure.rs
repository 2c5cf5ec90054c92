//! Callable values: closures over lowered lambdas, and native functions

use crate::error::RuntimeError;
use crate::hir::Lambda;
use crate::value::Value;
use crate::vm::Frame;
use std::fmt;
use std::rc::Rc;

/// Closure with captured environment
///
/// `env` is the runtime frame that was active when the `fn` form was
/// evaluated. Holding the `Rc` keeps every captured frame (and therefore
/// every captured variable) alive for as long as the closure is reachable,
/// even after the form that created the frame has finished.
#[derive(Clone)]
pub struct Closure {
    pub lambda: Rc<Lambda>,
    pub env: Option<Rc<Frame>>,
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function")?;
        if let Some(name) = self.lambda.name {
            write!(f, " {}", name)?;
        }
        write!(f, ">")
    }
}

/// Function arity specification for native functions.
///
/// Closures never check arity: extra arguments are ignored and missing ones
/// bind nil. Natives are the standard library and validate their inputs.
///
/// # Examples
///
/// ```
/// use kiln::value::Arity;
/// assert!(Arity::Exact(2).matches(2));
/// assert!(!Arity::Exact(2).matches(1));
/// assert!(Arity::AtLeast(1).matches(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exact number of arguments required
    Exact(usize),
    /// At least this many arguments
    AtLeast(usize),
    /// Between min and max arguments (inclusive)
    Range(usize, usize),
}

impl Arity {
    pub fn matches(&self, n: usize) -> bool {
        match self {
            Arity::Exact(expected) => n == *expected,
            Arity::AtLeast(min) => n >= *min,
            Arity::Range(min, max) => n >= *min && n <= *max,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
            Arity::Range(min, max) => write!(f, "{}-{}", min, max),
        }
    }
}

/// Native function type
pub type NativeFn = fn(&[Value]) -> Result<Value, RuntimeError>;

/// A primitive implemented in Rust, opaque to the compiler.
pub struct Native {
    pub name: &'static str,
    pub func: NativeFn,
    pub arity: Arity,
}

impl fmt::Debug for Native {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<cfunction {}>", self.name)
    }
}
