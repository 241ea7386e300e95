//! Tag → decoder registry and dynamic dispatch.
//!
//! Built once from static tables, read-only afterwards; share it by reference
//! or clone it (clones share the tables) across concurrent decodes.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use bytes::{Buf, Bytes};

use crate::error::{Result, TlError};
use crate::framing::{GzipPacked, MsgContainer};
use crate::object::{decode_as, Object, TlObject};
use crate::primitive::vector::{read_bare_vector, read_vector};
use crate::primitive::{peek_tag, BoolFalse, BoolTrue, VECTOR_ID};
use crate::schema;
use crate::value::Element;

/// Decoder for the fields after a constructor tag. The element hint is the
/// caller-supplied argument forwarded through dispatch (used by vectors).
pub type DecodeFn = fn(&mut Bytes, &Registry, Option<&Element>) -> Result<Object>;

/// One row of a registry table.
#[derive(Clone, Copy)]
pub struct Entry {
    pub id: u32,
    /// Qualified name, `ns.Type` or `ns.Group.Type`.
    pub name: &'static str,
    pub decode: DecodeFn,
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("id", &format_args!("{:#010x}", self.id))
            .field("name", &self.name)
            .finish()
    }
}

/// A parsed qualified type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifiedName<'a> {
    pub namespace: &'a str,
    pub group: Option<&'a str>,
    pub name: &'a str,
}

impl<'a> QualifiedName<'a> {
    /// Accepts `ns.Type` and `ns.Group.Type`; anything else is an error.
    pub fn parse(s: &'a str) -> Result<Self> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(TlError::Registry(format!("empty segment in name: {s:?}")));
        }
        match parts.as_slice() {
            [namespace, name] => Ok(Self {
                namespace: *namespace,
                group: None,
                name: *name,
            }),
            [namespace, group, name] => Ok(Self {
                namespace: *namespace,
                group: Some(*group),
                name: *name,
            }),
            _ => Err(TlError::Registry(format!(
                "name must have two or three segments: {s:?}"
            ))),
        }
    }
}

impl fmt::Display for QualifiedName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.group {
            Some(group) => write!(f, "{}.{}.{}", self.namespace, group, self.name),
            None => write!(f, "{}.{}", self.namespace, self.name),
        }
    }
}

fn decode_bool_true(buf: &mut Bytes, reg: &Registry, _: Option<&Element>) -> Result<Object> {
    BoolTrue::decode(buf, reg).map(|_| Object::Bool(true))
}

fn decode_bool_false(buf: &mut Bytes, reg: &Registry, _: Option<&Element>) -> Result<Object> {
    BoolFalse::decode(buf, reg).map(|_| Object::Bool(false))
}

fn decode_vector(buf: &mut Bytes, reg: &Registry, element: Option<&Element>) -> Result<Object> {
    let items = match element {
        Some(element) => read_vector(buf, |b| element.read(b, reg))?,
        None => read_bare_vector(buf, reg)?,
    };
    Ok(Object::Vector(items))
}

/// Constructors owned by the codec itself.
pub static CORE_ENTRIES: &[Entry] = &[
    Entry {
        id: BoolTrue::CONSTRUCTOR_ID,
        name: "primitive.BoolTrue",
        decode: decode_bool_true,
    },
    Entry {
        id: BoolFalse::CONSTRUCTOR_ID,
        name: "primitive.BoolFalse",
        decode: decode_bool_false,
    },
    Entry {
        id: VECTOR_ID,
        name: "primitive.Vector",
        decode: decode_vector,
    },
    Entry {
        id: GzipPacked::CONSTRUCTOR_ID,
        name: "core.GzipPacked",
        decode: decode_as::<GzipPacked>,
    },
    Entry {
        id: MsgContainer::CONSTRUCTOR_ID,
        name: "core.MsgContainer",
        decode: decode_as::<MsgContainer>,
    },
];

/// Nesting limit for polymorphic fields within one decode.
pub const DEFAULT_MAX_DEPTH: usize = 64;
/// Ceiling on the inflated size of one gzip envelope.
pub const DEFAULT_MAX_UNPACKED_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug)]
struct Tables {
    by_id: HashMap<u32, Entry>,
    by_name: HashMap<&'static str, u32>,
}

/// Immutable tag → decoder table.
///
/// Clones share the same tables. Each nested dispatch hands its decoder a
/// view one level deeper, so a chain of polymorphic fields stops at
/// `max_depth` with an error instead of exhausting the stack.
#[derive(Debug, Clone)]
pub struct Registry {
    tables: Arc<Tables>,
    depth: usize,
    max_depth: usize,
    max_unpacked_bytes: usize,
}

impl Registry {
    /// Build from one or more tables. A tag or name appearing twice is an
    /// error: each tag maps to exactly one type for the registry's lifetime.
    pub fn new(tables: &[&[Entry]]) -> Result<Self> {
        let mut by_id = HashMap::new();
        let mut by_name = HashMap::new();

        for entry in tables.iter().flat_map(|t| t.iter()) {
            QualifiedName::parse(entry.name)?;
            if let Some(prev) = by_id.insert(entry.id, *entry) {
                return Err(TlError::Registry(format!(
                    "tag {:#010x} registered for both {} and {}",
                    entry.id, prev.name, entry.name
                )));
            }
            if by_name.insert(entry.name, entry.id).is_some() {
                return Err(TlError::Registry(format!(
                    "name {} registered twice",
                    entry.name
                )));
            }
        }

        tracing::debug!(entries = by_id.len(), "registry built");
        Ok(Self {
            tables: Arc::new(Tables { by_id, by_name }),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            max_unpacked_bytes: DEFAULT_MAX_UNPACKED_BYTES,
        })
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_unpacked_bytes(mut self, max_unpacked_bytes: usize) -> Self {
        self.max_unpacked_bytes = max_unpacked_bytes;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn max_unpacked_bytes(&self) -> usize {
        self.max_unpacked_bytes
    }

    /// Core constructors plus the generated schema table.
    pub fn standard() -> Result<Self> {
        Self::new(&[CORE_ENTRIES, schema::ENTRIES])
    }

    pub fn len(&self) -> usize {
        self.tables.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.by_id.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.tables.by_id.contains_key(&id)
    }

    pub fn name(&self, id: u32) -> Option<&'static str> {
        self.tables.by_id.get(&id).map(|e| e.name)
    }

    pub fn qualified_name(&self, id: u32) -> Option<QualifiedName<'static>> {
        self.name(id).and_then(|n| QualifiedName::parse(n).ok())
    }

    pub fn lookup(&self, name: &str) -> Option<u32> {
        self.tables.by_name.get(name).copied()
    }

    /// Decode the object at the current position.
    pub fn decode(&self, buf: &mut Bytes) -> Result<Object> {
        self.decode_with(buf, None)
    }

    /// Decode the object at the current position, forwarding `element` to
    /// its decoder. On error `buf` is left where it was.
    pub fn decode_with(&self, buf: &mut Bytes, element: Option<&Element>) -> Result<Object> {
        let id = peek_tag(buf)?;
        let entry = self.tables.by_id.get(&id).ok_or(TlError::UnknownTag(id))?;
        if self.depth >= self.max_depth {
            return Err(TlError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        tracing::trace!(
            id = %format_args!("{id:#010x}"),
            name = entry.name,
            depth = self.depth,
            "reading object"
        );

        let nested = Self {
            tables: Arc::clone(&self.tables),
            depth: self.depth + 1,
            max_depth: self.max_depth,
            max_unpacked_bytes: self.max_unpacked_bytes,
        };
        let mut cursor = buf.clone();
        cursor.advance(4);
        let object = (entry.decode)(&mut cursor, &nested, element)?;
        *buf = cursor;
        Ok(object)
    }

    /// Decode a member of the union `group`, rejecting any other type.
    pub fn decode_member(
        &self,
        buf: &mut Bytes,
        group: u32,
        expected: &'static str,
    ) -> Result<Object> {
        let object = self.decode(buf)?;
        if object.subclass_of_id() != group {
            return Err(TlError::UnexpectedTag {
                expected,
                found: object.constructor_id(),
            });
        }
        Ok(object)
    }

    /// Decode the object at the start of `data`; trailing bytes are ignored.
    pub fn decode_bytes(&self, data: impl Into<Bytes>) -> Result<Object> {
        let mut buf = data.into();
        let object = self.decode(&mut buf)?;
        if buf.has_remaining() {
            tracing::debug!(trailing = buf.remaining(), "ignoring trailing bytes");
        }
        Ok(object)
    }
}
