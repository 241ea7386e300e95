//! Booleans are two payload-less constructors, not a bit.

use bytes::Bytes;

use super::int::{read_u32, write_u32, INT_SIZE};
use crate::error::Result;
use crate::object::TlObject;
use crate::registry::Registry;

/// Union group shared by `boolTrue` and `boolFalse`.
pub const BOOL_GROUP_ID: u32 = 0xf5b3_99ac;

/// `boolTrue = Bool`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolTrue;

/// `boolFalse = Bool`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolFalse;

impl TlObject for BoolTrue {
    const CONSTRUCTOR_ID: u32 = 0x9972_75b5;
    const SUBCLASS_OF_ID: u32 = BOOL_GROUP_ID;
    const TYPE_NAME: &'static str = "BoolTrue";
    const SLOTS: &'static [&'static str] = &[];

    fn encode(&self) -> Result<Vec<u8>> {
        Ok(write_u32(Self::CONSTRUCTOR_ID).to_vec())
    }

    fn decode(_buf: &mut Bytes, _registry: &Registry) -> Result<Self> {
        Ok(BoolTrue)
    }
}

impl TlObject for BoolFalse {
    const CONSTRUCTOR_ID: u32 = 0xbc79_9737;
    const SUBCLASS_OF_ID: u32 = BOOL_GROUP_ID;
    const TYPE_NAME: &'static str = "BoolFalse";
    const SLOTS: &'static [&'static str] = &[];

    fn encode(&self) -> Result<Vec<u8>> {
        Ok(write_u32(Self::CONSTRUCTOR_ID).to_vec())
    }

    fn decode(_buf: &mut Bytes, _registry: &Registry) -> Result<Self> {
        Ok(BoolFalse)
    }
}

pub fn write_bool(value: bool) -> [u8; INT_SIZE] {
    if value {
        write_u32(BoolTrue::CONSTRUCTOR_ID)
    } else {
        write_u32(BoolFalse::CONSTRUCTOR_ID)
    }
}

/// Anything other than the `boolTrue` tag reads as `false`.
pub fn read_bool(buf: &mut Bytes) -> Result<bool> {
    Ok(read_u32(buf)? == BoolTrue::CONSTRUCTOR_ID)
}
