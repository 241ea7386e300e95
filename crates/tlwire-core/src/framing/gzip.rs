//! `gzip_packed#3072cfa1 packed_data:bytes = Object`

use std::io::{Read, Write};

use bytes::Bytes;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{Result, TlError};
use crate::object::{Object, TlObject};
use crate::primitive::{read_bytes, write_bytes, write_u32};
use crate::registry::Registry;

/// Envelope holding one object under gzip compression.
#[derive(Debug, Clone, PartialEq)]
pub struct GzipPacked {
    pub packed_data: Box<Object>,
}

impl GzipPacked {
    pub fn new(packed_data: Object) -> Self {
        Self {
            packed_data: Box::new(packed_data),
        }
    }

    /// The wrapped object.
    pub fn unpack(self) -> Object {
        *self.packed_data
    }
}

impl TlObject for GzipPacked {
    const CONSTRUCTOR_ID: u32 = 0x3072_cfa1;
    const SUBCLASS_OF_ID: u32 = 0xaf01_aeda;
    const TYPE_NAME: &'static str = "GzipPacked";
    const SLOTS: &'static [&'static str] = &["packed_data"];

    fn encode(&self) -> Result<Vec<u8>> {
        let raw = self.packed_data.encode()?;
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&raw)?;
        let packed = encoder.finish()?;

        let mut out = Vec::with_capacity(8 + packed.len());
        out.extend_from_slice(&write_u32(Self::CONSTRUCTOR_ID));
        out.extend_from_slice(&write_bytes(&packed)?);
        Ok(out)
    }

    fn decode(buf: &mut Bytes, registry: &Registry) -> Result<Self> {
        let packed = read_bytes(buf)?;
        let limit = registry.max_unpacked_bytes();
        let mut raw = Vec::new();
        GzDecoder::new(&packed[..])
            .take(limit as u64 + 1)
            .read_to_end(&mut raw)
            .map_err(TlError::Decompression)?;
        if raw.len() > limit {
            return Err(TlError::range(
                "gzip_packed",
                format!("inflates past {limit} bytes"),
            ));
        }
        tracing::debug!(packed = packed.len(), unpacked = raw.len(), "gzip unpacked");

        let inner = registry.decode_bytes(raw)?;
        Ok(Self::new(inner))
    }
}
