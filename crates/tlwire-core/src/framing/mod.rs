//! Composite framing types built on the primitive codecs:
//! - `gzip_packed`: one object's bytes under gzip.
//! - `message`: one transport frame (id, seqno, length-bounded body).
//! - `msg_container`: an ordered batch of frames.

pub mod container;
pub mod gzip;
pub mod message;

pub use container::MsgContainer;
pub use gzip::GzipPacked;
pub use message::Message;
