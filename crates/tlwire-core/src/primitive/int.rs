//! Fixed-width integers: `int` (4), `long` (8), `int128` (16), `int256` (32).
//!
//! Each width is its own pair of functions; the two widest share the
//! arbitrary-precision helpers in [`crate::bigint`].

use bytes::{Buf, Bytes};
use num_bigint::BigInt;

use super::{ensure, Endian, IntFormat};
use crate::bigint;
use crate::error::{Result, TlError};

pub const INT_SIZE: usize = 4;
pub const LONG_SIZE: usize = 8;
pub const INT128_SIZE: usize = 16;
pub const INT256_SIZE: usize = 32;

/// Write a 4-byte integer. `value` must fit the requested signedness.
pub fn write_int(value: i64, fmt: IntFormat) -> Result<[u8; INT_SIZE]> {
    let raw = if fmt.signed {
        let v = i32::try_from(value)
            .map_err(|_| TlError::range("int", format!("{value} does not fit i32")))?;
        v as u32
    } else {
        u32::try_from(value).map_err(|_| TlError::range("int", format!("{value} does not fit u32")))?
    };
    Ok(match fmt.endian {
        Endian::Little => raw.to_le_bytes(),
        Endian::Big => raw.to_be_bytes(),
    })
}

pub fn read_int(buf: &mut Bytes, fmt: IntFormat) -> Result<i64> {
    ensure(buf, INT_SIZE, "int")?;
    let raw = match fmt.endian {
        Endian::Little => buf.get_u32_le(),
        Endian::Big => buf.get_u32(),
    };
    Ok(if fmt.signed {
        i64::from(raw as i32)
    } else {
        i64::from(raw)
    })
}

/// Write an 8-byte integer. `value` must fit the requested signedness.
pub fn write_long(value: i128, fmt: IntFormat) -> Result<[u8; LONG_SIZE]> {
    let raw = if fmt.signed {
        let v = i64::try_from(value)
            .map_err(|_| TlError::range("long", format!("{value} does not fit i64")))?;
        v as u64
    } else {
        u64::try_from(value)
            .map_err(|_| TlError::range("long", format!("{value} does not fit u64")))?
    };
    Ok(match fmt.endian {
        Endian::Little => raw.to_le_bytes(),
        Endian::Big => raw.to_be_bytes(),
    })
}

pub fn read_long(buf: &mut Bytes, fmt: IntFormat) -> Result<i128> {
    ensure(buf, LONG_SIZE, "long")?;
    let raw = match fmt.endian {
        Endian::Little => buf.get_u64_le(),
        Endian::Big => buf.get_u64(),
    };
    Ok(if fmt.signed {
        i128::from(raw as i64)
    } else {
        i128::from(raw)
    })
}

pub fn write_int128(value: &BigInt, fmt: IntFormat) -> Result<[u8; INT128_SIZE]> {
    bigint::to_fixed_bytes::<INT128_SIZE>(value, fmt.signed, fmt.endian, "int128")
}

pub fn read_int128(buf: &mut Bytes, fmt: IntFormat) -> Result<BigInt> {
    read_wide::<INT128_SIZE>(buf, fmt, "int128")
}

pub fn write_int256(value: &BigInt, fmt: IntFormat) -> Result<[u8; INT256_SIZE]> {
    bigint::to_fixed_bytes::<INT256_SIZE>(value, fmt.signed, fmt.endian, "int256")
}

pub fn read_int256(buf: &mut Bytes, fmt: IntFormat) -> Result<BigInt> {
    read_wide::<INT256_SIZE>(buf, fmt, "int256")
}

fn read_wide<const N: usize>(buf: &mut Bytes, fmt: IntFormat, field: &'static str) -> Result<BigInt> {
    ensure(buf, N, field)?;
    let mut raw = [0u8; N];
    buf.copy_to_slice(&mut raw);
    Ok(bigint::from_fixed_bytes(&raw, fmt.signed, fmt.endian))
}

// Typed shortcuts for schema fields, which are always little-endian.

pub fn write_i32(value: i32) -> [u8; INT_SIZE] {
    value.to_le_bytes()
}

pub fn write_u32(value: u32) -> [u8; INT_SIZE] {
    value.to_le_bytes()
}

pub fn write_i64(value: i64) -> [u8; LONG_SIZE] {
    value.to_le_bytes()
}

pub fn read_i32(buf: &mut Bytes) -> Result<i32> {
    ensure(buf, INT_SIZE, "int")?;
    Ok(buf.get_i32_le())
}

pub fn read_u32(buf: &mut Bytes) -> Result<u32> {
    ensure(buf, INT_SIZE, "int")?;
    Ok(buf.get_u32_le())
}

pub fn read_i64(buf: &mut Bytes) -> Result<i64> {
    ensure(buf, LONG_SIZE, "long")?;
    Ok(buf.get_i64_le())
}
