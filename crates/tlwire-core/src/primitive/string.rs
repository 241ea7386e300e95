//! UTF-8 text over the byte-string codec.

use bytes::Bytes;

use super::byte_string::{read_bytes, write_bytes};
use crate::error::Result;

pub fn write_string(value: &str) -> Result<Vec<u8>> {
    write_bytes(value.as_bytes())
}

/// Invalid sequences are replaced with U+FFFD rather than failing the
/// enclosing object.
pub fn read_string(buf: &mut Bytes) -> Result<String> {
    let raw = read_bytes(buf)?;
    Ok(String::from_utf8_lossy(&raw).into_owned())
}
