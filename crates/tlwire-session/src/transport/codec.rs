//! Decode-once codec for the session boundary.
//!
//! - One packet => one object, decoded through the shared registry
//! - Containers => their frames, in transmission order
//! - Gzip envelopes => the packed object, keeping the enclosing frame's ids

use bytes::Bytes;
use tlwire_core::{Object, Registry, Result, TlError};

use crate::config::SessionLimits;

#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    /// A frame taken out of a container.
    Framed {
        msg_id: i64,
        seq_no: i32,
        body: Object,
    },
    /// An object that arrived outside any container.
    Bare(Object),
}

impl Inbound {
    pub fn body(&self) -> &Object {
        match self {
            Inbound::Framed { body, .. } | Inbound::Bare(body) => body,
        }
    }

    pub fn msg_id(&self) -> Option<i64> {
        match self {
            Inbound::Framed { msg_id, .. } => Some(*msg_id),
            Inbound::Bare(_) => None,
        }
    }
}

/// Decode one packet and flatten it.
pub fn decode(packet: Bytes, registry: &Registry, limits: &SessionLimits) -> Result<Vec<Inbound>> {
    let bytes_len = packet.len();
    let object = registry.decode_bytes(packet)?;
    let inbound = unpack(object, limits)?;
    tracing::debug!(bytes_len, frames = inbound.len(), "packet decoded");
    Ok(inbound)
}

/// Flatten containers and gzip envelopes into inbound frames.
pub fn unpack(object: Object, limits: &SessionLimits) -> Result<Vec<Inbound>> {
    let mut out = Vec::new();
    flatten(object, None, limits, &mut out)?;
    Ok(out)
}

fn flatten(
    object: Object,
    frame: Option<(i64, i32)>,
    limits: &SessionLimits,
    out: &mut Vec<Inbound>,
) -> Result<()> {
    match object {
        Object::GzipPacked(packed) => flatten(packed.unpack(), frame, limits, out),
        Object::MsgContainer(container) => {
            let count = container.messages.len();
            if count > limits.max_container_messages {
                return Err(TlError::range(
                    "msg_container",
                    format!(
                        "{count} messages exceeds limit {}",
                        limits.max_container_messages
                    ),
                ));
            }
            for message in container.messages {
                let ids = (message.msg_id, message.seq_no);
                flatten(*message.body, Some(ids), limits, out)?;
            }
            Ok(())
        }
        body => {
            out.push(match frame {
                Some((msg_id, seq_no)) => Inbound::Framed {
                    msg_id,
                    seq_no,
                    body,
                },
                None => Inbound::Bare(body),
            });
            Ok(())
        }
    }
}
