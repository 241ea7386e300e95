//! Length-prefixed byte strings, the format behind `bytes`, `string` and
//! every opaque blob on the wire.
//!
//! Layout:
//! - `len <= 253`: `[len][data][pad]`, where prefix + data is padded to 4.
//! - otherwise: `[254][len: u24 le][data][pad]`, where only data is padded.

use bytes::{Buf, Bytes};

use super::ensure;
use crate::error::{Result, TlError};

/// Longest payload that fits the one-byte prefix.
pub const SHORT_MAX: usize = 253;
/// First byte of the extended (3-byte length) prefix.
pub const LONG_MARKER: u8 = 254;
/// Longest payload the 3-byte length can describe.
pub const LONG_MAX: usize = 0x00ff_ffff;

/// Zero bytes needed to bring `n` to the next multiple of 4.
pub fn padding(n: usize) -> usize {
    (-(n as i64)).rem_euclid(4) as usize
}

pub fn write_bytes(value: &[u8]) -> Result<Vec<u8>> {
    let len = value.len();
    if len <= SHORT_MAX {
        let pad = padding(len + 1);
        let mut out = Vec::with_capacity(1 + len + pad);
        out.push(len as u8);
        out.extend_from_slice(value);
        out.resize(out.len() + pad, 0);
        return Ok(out);
    }

    if len > LONG_MAX {
        return Err(TlError::range(
            "bytes",
            format!("{len} bytes exceed the 24-bit length prefix"),
        ));
    }
    let pad = padding(len);
    let mut out = Vec::with_capacity(4 + len + pad);
    out.push(LONG_MARKER);
    out.extend_from_slice(&(len as u32).to_le_bytes()[..3]);
    out.extend_from_slice(value);
    out.resize(out.len() + pad, 0);
    Ok(out)
}

/// Read a byte string; the returned `Bytes` shares the input buffer.
pub fn read_bytes(buf: &mut Bytes) -> Result<Bytes> {
    ensure(buf, 1, "bytes")?;
    let first = buf.get_u8();

    let (len, pad) = match first {
        0..=253 => {
            let len = usize::from(first);
            (len, padding(len + 1))
        }
        LONG_MARKER => {
            ensure(buf, 3, "bytes.length")?;
            let mut raw = [0u8; 4];
            buf.copy_to_slice(&mut raw[..3]);
            let len = u32::from_le_bytes(raw) as usize;
            (len, padding(len))
        }
        other => {
            return Err(TlError::malformed(
                "bytes",
                format!("invalid length prefix {other}"),
            ))
        }
    };

    if buf.remaining() < len {
        return Err(TlError::malformed(
            "bytes",
            format!("declares {len} bytes, {} remaining", buf.remaining()),
        ));
    }
    let data = buf.copy_to_bytes(len);
    ensure(buf, pad, "bytes.padding")?;
    buf.advance(pad);
    Ok(data)
}
