//! Transport boundary.
//!
//! Packets are read whole from the byte stream before the codec sees them,
//! then decoded once and flattened into [`codec::Inbound`] frames.

pub mod codec;
pub mod packet;

pub use codec::{decode, unpack, Inbound};
pub use packet::{PacketReader, PacketWriter, HEADER_LEN};
