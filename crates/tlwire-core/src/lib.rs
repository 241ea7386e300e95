//! tlwire core: the binary codec of the Type Language wire format.
//!
//! This crate turns typed values into canonical wire bytes and back, and
//! resolves which concrete type a buffer holds from the 4-byte constructor tag
//! at its head. It carries no transport or runtime dependencies so it can be
//! reused by any client, proxy or test tool.
//!
//! # Untrusted input
//! Every byte this crate reads may come from a peer. Clippy's `panic`,
//! `unwrap_used` and `expect_used` lints are denied; a truncated or lying
//! buffer surfaces as a [`TlError`] with a stable [`ErrorKind`].

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod bigint;
pub mod error;
pub mod framing;
pub mod inspect;
pub mod object;
pub mod primitive;
pub mod registry;
pub mod schema;
pub mod secret;
pub mod value;

pub use error::{ErrorKind, Result, TlError};
pub use framing::{GzipPacked, Message, MsgContainer};
pub use object::{Object, TlObject};
pub use registry::Registry;
pub use value::{Element, Value};
