//! Top-level facade crate for tlwire.
//!
//! Re-exports the codec and the session boundary so users can depend on a single crate.

pub mod core {
    pub use tlwire_core::*;
}

pub mod session {
    pub use tlwire_session::*;
}
