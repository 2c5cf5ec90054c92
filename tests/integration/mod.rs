// Integration tests harness
mod environment {
    include!("environment.rs");
}
mod control {
    include!("control.rs");
}
mod functions {
    include!("functions.rs");
}
mod destructuring {
    include!("destructuring.rs");
}
mod quasiquote {
    include!("quasiquote.rs");
}
mod set {
    include!("set.rs");
}
mod splice {
    include!("splice.rs");
}
mod errors {
    include!("errors.rs");
}
mod identity {
    include!("identity.rs");
}
mod limits {
    include!("limits.rs");
}
