//! The serializable-object contract.
//!
//! Every concrete wire type implements [`TlObject`]: identity metadata as
//! associated constants plus `encode`/`decode`, with no usable defaults.
//! [`Object`] is the closed union of all registered types; it is what
//! dynamic dispatch produces and what polymorphic fields hold.

use bytes::Bytes;

use crate::error::{Result, TlError};
use crate::framing::{GzipPacked, MsgContainer};
use crate::primitive::boolean::BOOL_GROUP_ID;
use crate::primitive::{write_bool, write_vector, BoolFalse, BoolTrue, VECTOR_ID};
use crate::registry::Registry;
use crate::schema::{
    BadMsgNotification, BadServerSalt, DecryptedMessage8, DecryptedMessageActionSetMessageTTL,
    DecryptedMessageMediaEmpty, DecryptedMessageService8, EncryptedFile, EncryptedFileEmpty,
    EncryptedMessage, EncryptedMessageService, MsgsAck, NewSessionCreated, Ping, Pong, RpcError,
    RpcResult, UpdateNewEncryptedMessage,
};
use crate::value::{Element, Value};

/// A concrete wire type.
pub trait TlObject: Sized {
    /// Wire tag; 0 for types that are never dispatched directly.
    const CONSTRUCTOR_ID: u32;
    /// Tag of the union this type belongs to; 0 if none.
    const SUBCLASS_OF_ID: u32;
    const TYPE_NAME: &'static str;
    /// Fields taking part in serialization, in wire order.
    const SLOTS: &'static [&'static str];

    /// Canonical bytes, including the constructor tag where the type has one.
    fn encode(&self) -> Result<Vec<u8>>;

    /// Decode the fields following the constructor tag.
    fn decode(buf: &mut Bytes, registry: &Registry) -> Result<Self>;
}

macro_rules! objects {
    ($($variant:ident),* $(,)?) => {
        /// Any registered object.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Object {
            Bool(bool),
            Vector(Vec<Value>),
            $($variant($variant),)*
        }

        impl Object {
            pub fn constructor_id(&self) -> u32 {
                match self {
                    Object::Bool(true) => BoolTrue::CONSTRUCTOR_ID,
                    Object::Bool(false) => BoolFalse::CONSTRUCTOR_ID,
                    Object::Vector(_) => VECTOR_ID,
                    $(Object::$variant(_) => <$variant as TlObject>::CONSTRUCTOR_ID,)*
                }
            }

            pub fn subclass_of_id(&self) -> u32 {
                match self {
                    Object::Bool(_) => BOOL_GROUP_ID,
                    Object::Vector(_) => 0,
                    $(Object::$variant(_) => <$variant as TlObject>::SUBCLASS_OF_ID,)*
                }
            }

            pub fn type_name(&self) -> &'static str {
                match self {
                    Object::Bool(true) => BoolTrue::TYPE_NAME,
                    Object::Bool(false) => BoolFalse::TYPE_NAME,
                    Object::Vector(_) => "Vector",
                    $(Object::$variant(_) => <$variant as TlObject>::TYPE_NAME,)*
                }
            }

            pub fn slots(&self) -> &'static [&'static str] {
                match self {
                    Object::Bool(_) => &[],
                    Object::Vector(_) => &["items"],
                    $(Object::$variant(_) => <$variant as TlObject>::SLOTS,)*
                }
            }

            pub fn encode(&self) -> Result<Vec<u8>> {
                match self {
                    Object::Bool(v) => Ok(write_bool(*v).to_vec()),
                    Object::Vector(items) => write_vector(items, Value::encode),
                    $(Object::$variant(o) => o.encode(),)*
                }
            }
        }

        $(
            impl From<$variant> for Object {
                fn from(value: $variant) -> Self {
                    Object::$variant(value)
                }
            }

            impl TryFrom<Object> for $variant {
                type Error = TlError;

                fn try_from(value: Object) -> Result<Self> {
                    match value {
                        Object::$variant(v) => Ok(v),
                        other => Err(TlError::UnexpectedTag {
                            expected: <$variant as TlObject>::TYPE_NAME,
                            found: other.constructor_id(),
                        }),
                    }
                }
            }
        )*
    };
}

objects! {
    GzipPacked,
    MsgContainer,
    Ping,
    Pong,
    MsgsAck,
    RpcResult,
    RpcError,
    NewSessionCreated,
    BadMsgNotification,
    BadServerSalt,
    EncryptedFileEmpty,
    EncryptedFile,
    EncryptedMessage,
    EncryptedMessageService,
    UpdateNewEncryptedMessage,
    DecryptedMessage8,
    DecryptedMessageService8,
    DecryptedMessageMediaEmpty,
    DecryptedMessageActionSetMessageTTL,
}

impl Object {
    /// Decode whatever object starts at the current position.
    pub fn decode(buf: &mut Bytes, registry: &Registry) -> Result<Self> {
        registry.decode(buf)
    }
}

/// Registry adapter: decode `T` and wrap it.
pub(crate) fn decode_as<T>(
    buf: &mut Bytes,
    registry: &Registry,
    _element: Option<&Element>,
) -> Result<Object>
where
    T: TlObject + Into<Object>,
{
    T::decode(buf, registry).map(Into::into)
}
