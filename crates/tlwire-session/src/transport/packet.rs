//! Length-prefixed packets over an async byte stream.
//!
//! Each packet is a 4-byte little-endian length followed by that many bytes.
//! The length is checked against the configured limit before anything is
//! allocated.

use std::io;

use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use tlwire_core::{Object, Result, TlError};

use crate::config::SessionLimits;

pub const HEADER_LEN: usize = 4;

pub struct PacketReader<R> {
    inner: R,
    max_packet_bytes: usize,
}

impl<R: AsyncRead + Unpin> PacketReader<R> {
    pub fn new(inner: R, limits: &SessionLimits) -> Self {
        Self {
            inner,
            max_packet_bytes: limits.max_packet_bytes,
        }
    }

    /// Next packet payload, or `None` when the stream ends on a packet
    /// boundary. A stream that ends mid-packet is an I/O error.
    pub async fn read_packet(&mut self) -> Result<Option<Bytes>> {
        let mut header = [0u8; HEADER_LEN];
        let mut filled = 0;
        while filled < HEADER_LEN {
            let n = self.inner.read(&mut header[filled..]).await?;
            if n == 0 {
                if filled == 0 {
                    return Ok(None);
                }
                return Err(TlError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "stream closed inside packet header",
                )));
            }
            filled += n;
        }

        let len = u32::from_le_bytes(header) as usize;
        if len > self.max_packet_bytes {
            return Err(TlError::range(
                "packet",
                format!("{len} bytes exceeds limit {}", self.max_packet_bytes),
            ));
        }
        if len < HEADER_LEN {
            return Err(TlError::malformed(
                "packet",
                format!("{len} bytes cannot hold a constructor"),
            ));
        }

        let mut payload = vec![0u8; len];
        self.inner.read_exact(&mut payload).await?;
        tracing::debug!(len, "packet read");
        Ok(Some(Bytes::from(payload)))
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

pub struct PacketWriter<W> {
    inner: W,
    max_packet_bytes: usize,
}

impl<W: AsyncWrite + Unpin> PacketWriter<W> {
    pub fn new(inner: W, limits: &SessionLimits) -> Self {
        Self {
            inner,
            max_packet_bytes: limits.max_packet_bytes,
        }
    }

    pub async fn write_packet(&mut self, payload: &[u8]) -> Result<()> {
        if payload.len() > self.max_packet_bytes {
            return Err(TlError::range(
                "packet",
                format!(
                    "{} bytes exceeds limit {}",
                    payload.len(),
                    self.max_packet_bytes
                ),
            ));
        }

        let len = u32::try_from(payload.len())
            .map_err(|_| TlError::range("packet", "length does not fit the prefix"))?;
        self.inner.write_all(&len.to_le_bytes()).await?;
        self.inner.write_all(payload).await?;
        self.inner.flush().await?;
        tracing::debug!(len, "packet written");
        Ok(())
    }

    /// Encode `object` and send it as one packet.
    pub async fn write_object(&mut self, object: &Object) -> Result<()> {
        let payload = object.encode()?;
        self.write_packet(&payload).await
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
