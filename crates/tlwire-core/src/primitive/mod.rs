//! Primitive wire codecs (panic-free).
//!
//! Parsing rules:
//! - Never index (`buf[0]`); read through `Buf` after a `remaining()` check.
//! - Never `unwrap()` / `expect()` / `panic!()` in production paths.
//! - Writers that can be handed an out-of-range value return `Result`
//!   instead of truncating.

pub mod boolean;
pub mod byte_string;
pub mod float;
pub mod int;
pub mod string;
pub mod vector;

use bytes::{Buf, Bytes};

use crate::error::{Result, TlError};

pub use boolean::{read_bool, write_bool, BoolFalse, BoolTrue};
pub use byte_string::{padding, read_bytes, write_bytes};
pub use float::{read_double, read_float, write_double, write_float};
pub use int::{
    read_i32, read_i64, read_int, read_int128, read_int256, read_long, read_u32, write_i32,
    write_i64, write_int, write_int128, write_int256, write_long, write_u32,
};
pub use string::{read_string, write_string};
pub use vector::{read_bare_vector, read_boxed_vector, read_vector, write_vector, VECTOR_ID};

/// Byte order of a fixed-width field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    /// Protocol default.
    #[default]
    Little,
    Big,
}

/// Signedness and byte order of an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntFormat {
    pub signed: bool,
    pub endian: Endian,
}

impl IntFormat {
    /// Signed little-endian, the layout of every `int`/`long` field.
    pub const SIGNED: IntFormat = IntFormat::new(true, Endian::Little);
    /// Unsigned little-endian, the layout of constructor tags.
    pub const UNSIGNED: IntFormat = IntFormat::new(false, Endian::Little);

    pub const fn new(signed: bool, endian: Endian) -> Self {
        Self { signed, endian }
    }
}

impl Default for IntFormat {
    fn default() -> Self {
        Self::SIGNED
    }
}

/// Fail with a short read unless `needed` bytes are available.
pub(crate) fn ensure(buf: &Bytes, needed: usize, field: &'static str) -> Result<()> {
    if buf.remaining() < needed {
        return Err(TlError::ShortRead {
            field,
            needed,
            remaining: buf.remaining(),
        });
    }
    Ok(())
}

/// Read the constructor tag at the current position without consuming it.
pub fn peek_tag(buf: &Bytes) -> Result<u32> {
    ensure(buf, 4, "constructor")?;
    let mut head = buf.slice(0..4);
    Ok(head.get_u32_le())
}
