//! `Vector t`: marker, signed 32-bit count, then the elements.
//!
//! Decoding is either typed (the caller names the element codec) or bare.
//! Bare decoding infers a uniform element width from the bytes left in the
//! stream, so it is only meaningful when the vector is the last field of a
//! bounded buffer and holds 4- or 8-byte integers; any other width falls back
//! to decoding each element as a tagged object.

use bytes::{Buf, Bytes};

use super::int::{read_i32, read_i64, read_u32, write_i32, write_u32, INT_SIZE};
use crate::error::{Result, TlError};
use crate::registry::Registry;
use crate::value::Value;

/// Constructor of every boxed vector.
pub const VECTOR_ID: u32 = 0x1cb5_c415;

pub fn write_vector<T, F>(items: &[T], mut write: F) -> Result<Vec<u8>>
where
    F: FnMut(&T) -> Result<Vec<u8>>,
{
    let count = i32::try_from(items.len())
        .map_err(|_| TlError::range("vector", format!("{} elements", items.len())))?;

    let mut out = Vec::with_capacity(8 + items.len() * INT_SIZE);
    out.extend_from_slice(&write_u32(VECTOR_ID));
    out.extend_from_slice(&write_i32(count));
    for item in items {
        out.extend_from_slice(&write(item)?);
    }
    Ok(out)
}

/// Read and sanity-check the element count. Every element occupies at least
/// four bytes, so a count the stream cannot hold is rejected up front.
fn read_count(buf: &mut Bytes) -> Result<usize> {
    let count = read_i32(buf)?;
    let count = usize::try_from(count)
        .map_err(|_| TlError::malformed("vector", format!("negative count {count}")))?;
    if count > buf.remaining() / INT_SIZE {
        return Err(TlError::malformed(
            "vector",
            format!("{count} elements, {} bytes remaining", buf.remaining()),
        ));
    }
    Ok(count)
}

/// Typed decode of a vector whose marker was already consumed.
pub fn read_vector<T, F>(buf: &mut Bytes, mut read: F) -> Result<Vec<T>>
where
    F: FnMut(&mut Bytes) -> Result<T>,
{
    let count = read_count(buf)?;
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        items.push(read(buf)?);
    }
    Ok(items)
}

/// Typed decode of a vector starting at its marker.
pub fn read_boxed_vector<T, F>(buf: &mut Bytes, read: F) -> Result<Vec<T>>
where
    F: FnMut(&mut Bytes) -> Result<T>,
{
    let marker = read_u32(buf)?;
    if marker != VECTOR_ID {
        return Err(TlError::UnexpectedTag {
            expected: "Vector",
            found: marker,
        });
    }
    read_vector(buf, read)
}

/// Bare decode of a vector whose marker was already consumed.
pub fn read_bare_vector(buf: &mut Bytes, registry: &Registry) -> Result<Vec<Value>> {
    let count = read_count(buf)?;
    if count == 0 {
        return Ok(Vec::new());
    }

    // Peeking `remaining()` leaves the position untouched, nothing to rewind.
    let left = buf.remaining();
    let width = if left % count == 0 { left / count } else { 0 };

    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        let item = match width {
            4 => Value::Int(read_i32(buf)?),
            8 => Value::Long(read_i64(buf)?),
            _ => Value::Object(registry.decode(buf)?),
        };
        items.push(item);
    }
    Ok(items)
}
