//! `msg_container#73f1f8dc messages:vector<message> = MessageContainer`

use bytes::{Buf, Bytes};

use super::message::{Message, HEADER_SIZE};
use crate::error::{Result, TlError};
use crate::object::TlObject;
use crate::primitive::{read_i32, write_i32, write_u32};
use crate::registry::Registry;

/// Ordered batch of frames; order is transmission order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MsgContainer {
    pub messages: Vec<Message>,
}

impl MsgContainer {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

impl TlObject for MsgContainer {
    const CONSTRUCTOR_ID: u32 = 0x73f1_f8dc;
    const SUBCLASS_OF_ID: u32 = 0x758a_94b4;
    const TYPE_NAME: &'static str = "MsgContainer";
    const SLOTS: &'static [&'static str] = &["messages"];

    fn encode(&self) -> Result<Vec<u8>> {
        let count = i32::try_from(self.messages.len()).map_err(|_| {
            TlError::range("msg_container", format!("{} messages", self.messages.len()))
        })?;

        let mut out = Vec::new();
        out.extend_from_slice(&write_u32(Self::CONSTRUCTOR_ID));
        out.extend_from_slice(&write_i32(count));
        for message in &self.messages {
            out.extend_from_slice(&message.encode()?);
        }
        Ok(out)
    }

    fn decode(buf: &mut Bytes, registry: &Registry) -> Result<Self> {
        let count = read_i32(buf)?;
        let count = usize::try_from(count)
            .map_err(|_| TlError::malformed("msg_container", format!("negative count {count}")))?;
        if count > buf.remaining() / HEADER_SIZE {
            return Err(TlError::malformed(
                "msg_container",
                format!("{count} frames, {} bytes remaining", buf.remaining()),
            ));
        }

        let mut messages = Vec::with_capacity(count);
        for _ in 0..count {
            messages.push(Message::decode(buf, registry)?);
        }
        Ok(Self { messages })
    }
}
