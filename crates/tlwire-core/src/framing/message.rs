//! `message msg_id:long seqno:int bytes:int body:Object = Message`
//!
//! Frames are bare inside a container: the header has a fixed layout and no
//! constructor tag, so they are never dispatched through the registry.

use bytes::{Buf, Bytes};

use crate::error::{Result, TlError};
use crate::object::{Object, TlObject};
use crate::primitive::{read_i32, read_i64, write_i32, write_i64};
use crate::registry::Registry;

/// Fixed header: msg_id (8) + seq_no (4) + length (4).
pub const HEADER_SIZE: usize = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub msg_id: i64,
    pub seq_no: i32,
    /// Serialized size of `body` in bytes.
    pub length: i32,
    pub body: Box<Object>,
}

impl Message {
    /// Build a frame, computing `length` from the body's encoding.
    pub fn new(body: Object, msg_id: i64, seq_no: i32) -> Result<Self> {
        let size = body.encode()?.len();
        let length = i32::try_from(size)
            .map_err(|_| TlError::range("message.length", format!("{size} byte body")))?;
        Ok(Self {
            msg_id,
            seq_no,
            length,
            body: Box::new(body),
        })
    }
}

impl TlObject for Message {
    const CONSTRUCTOR_ID: u32 = 0x5bb8_e511;
    const SUBCLASS_OF_ID: u32 = 0;
    const TYPE_NAME: &'static str = "Message";
    const SLOTS: &'static [&'static str] = &["body", "msg_id", "seq_no", "length"];

    fn encode(&self) -> Result<Vec<u8>> {
        let body = self.body.encode()?;
        if usize::try_from(self.length).ok() != Some(body.len()) {
            return Err(TlError::malformed(
                "message.length",
                format!("declares {} bytes, body encodes to {}", self.length, body.len()),
            ));
        }

        let mut out = Vec::with_capacity(HEADER_SIZE + body.len());
        out.extend_from_slice(&write_i64(self.msg_id));
        out.extend_from_slice(&write_i32(self.seq_no));
        out.extend_from_slice(&write_i32(self.length));
        out.extend_from_slice(&body);
        Ok(out)
    }

    /// The declared length bounds the body: the nested object is decoded from
    /// exactly that many bytes and can never read past them.
    fn decode(buf: &mut Bytes, registry: &Registry) -> Result<Self> {
        let msg_id = read_i64(buf)?;
        let seq_no = read_i32(buf)?;
        let length = read_i32(buf)?;

        let size = usize::try_from(length).map_err(|_| {
            TlError::malformed("message.length", format!("negative length {length}"))
        })?;
        if buf.remaining() < size {
            return Err(TlError::malformed(
                "message.length",
                format!("declares {size} bytes, {} remaining", buf.remaining()),
            ));
        }

        let mut body = buf.split_to(size);
        let object = registry.decode(&mut body)?;
        if body.has_remaining() {
            tracing::debug!(msg_id, unread = body.remaining(), "frame body not fully consumed");
        }
        tracing::debug!(msg_id, seq_no, length, body = object.type_name(), "frame decoded");

        Ok(Self {
            msg_id,
            seq_no,
            length,
            body: Box::new(object),
        })
    }
}
