//! IEEE 754 single and double precision.

use bytes::{Buf, Bytes};

use super::{ensure, Endian};
use crate::error::Result;

pub fn write_float(value: f32, endian: Endian) -> [u8; 4] {
    match endian {
        Endian::Little => value.to_le_bytes(),
        Endian::Big => value.to_be_bytes(),
    }
}

pub fn read_float(buf: &mut Bytes, endian: Endian) -> Result<f32> {
    ensure(buf, 4, "float")?;
    Ok(match endian {
        Endian::Little => buf.get_f32_le(),
        Endian::Big => buf.get_f32(),
    })
}

pub fn write_double(value: f64, endian: Endian) -> [u8; 8] {
    match endian {
        Endian::Little => value.to_le_bytes(),
        Endian::Big => value.to_be_bytes(),
    }
}

pub fn read_double(buf: &mut Bytes, endian: Endian) -> Result<f64> {
    ensure(buf, 8, "double")?;
    Ok(match endian {
        Endian::Little => buf.get_f64_le(),
        Endian::Big => buf.get_f64(),
    })
}
