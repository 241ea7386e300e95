//! Shared session state.
//!
//! Holds the validated config and the registry every decode goes through.
//! Cheap to clone; clones share the same registry.

use std::sync::Arc;

use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncWrite};

use tlwire_core::{Registry, Result};

use crate::config::SessionConfig;
use crate::transport::{decode, Inbound, PacketReader, PacketWriter};

#[derive(Clone)]
pub struct SessionState {
    inner: Arc<SessionStateInner>,
}

struct SessionStateInner {
    cfg: SessionConfig,
    registry: Registry,
}

impl SessionState {
    /// Validate `cfg` and build the standard registry.
    pub fn new(cfg: SessionConfig) -> Result<Self> {
        cfg.validate()?;
        let registry =
            Registry::standard()?.with_max_unpacked_bytes(cfg.limits.max_unpacked_bytes);
        tracing::info!(
            constructors = registry.len(),
            max_packet_bytes = cfg.limits.max_packet_bytes,
            "session state ready"
        );
        Ok(Self {
            inner: Arc::new(SessionStateInner { cfg, registry }),
        })
    }

    pub fn cfg(&self) -> &SessionConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    pub fn reader<R: AsyncRead + Unpin>(&self, inner: R) -> PacketReader<R> {
        PacketReader::new(inner, &self.inner.cfg.limits)
    }

    pub fn writer<W: AsyncWrite + Unpin>(&self, inner: W) -> PacketWriter<W> {
        PacketWriter::new(inner, &self.inner.cfg.limits)
    }

    /// Decode one packet payload into inbound frames.
    pub fn decode(&self, packet: Bytes) -> Result<Vec<Inbound>> {
        decode(packet, &self.inner.registry, &self.inner.cfg.limits)
    }

    /// Read and decode the next packet; `None` at end of stream.
    pub async fn next_inbound<R: AsyncRead + Unpin>(
        &self,
        reader: &mut PacketReader<R>,
    ) -> Result<Option<Vec<Inbound>>> {
        match reader.read_packet().await? {
            Some(packet) => self.decode(packet).map(Some),
            None => Ok(None),
        }
    }
}
