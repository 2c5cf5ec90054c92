// Property-based tests harness
mod strategies;
mod quasiquote {
    include!("quasiquote.rs");
}
mod destructuring {
    include!("destructuring.rs");
}
mod control {
    include!("control.rs");
}
