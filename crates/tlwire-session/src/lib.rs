//! tlwire session library entry.
//!
//! This crate is the boundary between a byte stream and the codec: strict
//! config loading, length-prefixed packet I/O, and flattening of decoded
//! containers into inbound frames. It is consumed by the `tlwire-dump`
//! binary and by integration tests.

pub mod cli;
pub mod config;
pub mod state;
pub mod transport;
