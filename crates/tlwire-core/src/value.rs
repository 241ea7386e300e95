//! Dynamically typed field values and the element codecs that read them.

use bytes::Bytes;
use num_bigint::BigInt;

use crate::error::Result;
use crate::object::Object;
use crate::primitive::{
    read_bool, read_boxed_vector, read_bytes, read_double, read_float, read_i32, read_i64,
    read_int128, read_int256, read_string, write_bool, write_bytes, write_double, write_float,
    write_i32, write_i64, write_int128, write_int256, write_string, write_vector, Endian,
    IntFormat,
};
use crate::registry::Registry;

/// Any value that can appear in a field or a vector.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i32),
    Long(i64),
    Int128(BigInt),
    Int256(BigInt),
    Float(f32),
    Double(f64),
    Bool(bool),
    Bytes(Bytes),
    String(String),
    Vector(Vec<Value>),
    Object(Object),
}

impl Value {
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(match self {
            Value::Int(v) => write_i32(*v).to_vec(),
            Value::Long(v) => write_i64(*v).to_vec(),
            Value::Int128(v) => write_int128(v, IntFormat::SIGNED)?.to_vec(),
            Value::Int256(v) => write_int256(v, IntFormat::SIGNED)?.to_vec(),
            Value::Float(v) => write_float(*v, Endian::Little).to_vec(),
            Value::Double(v) => write_double(*v, Endian::Little).to_vec(),
            Value::Bool(v) => write_bool(*v).to_vec(),
            Value::Bytes(v) => write_bytes(v)?,
            Value::String(v) => write_string(v)?,
            Value::Vector(items) => write_vector(items, Value::encode)?,
            Value::Object(o) => o.encode()?,
        })
    }
}

/// Caller-supplied element codec for typed vector decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Int,
    Long,
    Int128,
    Int256,
    Float,
    Double,
    Bool,
    Bytes,
    String,
    /// A tagged object, resolved through the registry.
    Object,
    /// A nested boxed vector.
    Vector(Box<Element>),
}

impl Element {
    pub fn read(&self, buf: &mut Bytes, registry: &Registry) -> Result<Value> {
        Ok(match self {
            Element::Int => Value::Int(read_i32(buf)?),
            Element::Long => Value::Long(read_i64(buf)?),
            Element::Int128 => Value::Int128(read_int128(buf, IntFormat::SIGNED)?),
            Element::Int256 => Value::Int256(read_int256(buf, IntFormat::SIGNED)?),
            Element::Float => Value::Float(read_float(buf, Endian::Little)?),
            Element::Double => Value::Double(read_double(buf, Endian::Little)?),
            Element::Bool => Value::Bool(read_bool(buf)?),
            Element::Bytes => Value::Bytes(read_bytes(buf)?),
            Element::String => Value::String(read_string(buf)?),
            Element::Object => Value::Object(registry.decode(buf)?),
            Element::Vector(inner) => {
                Value::Vector(read_boxed_vector(buf, |b| inner.read(b, registry))?)
            }
        })
    }
}
