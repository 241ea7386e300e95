//! Schema-derived types and their registry table.
//!
//! Treat this module as generated data: one struct per constructor, fields in
//! wire order, and a static [`ENTRIES`] table mapping each tag to its
//! qualified name and decoder. Nothing here is mutated at runtime.

use bytes::Bytes;

use crate::error::Result;
use crate::object::{decode_as, Object, TlObject};
use crate::primitive::{
    read_boxed_vector, read_bytes, read_i32, read_i64, read_string, write_bytes, write_i32,
    write_i64, write_string, write_u32, write_vector,
};
use crate::registry::{Entry, Registry};

pub const PONG_GROUP_ID: u32 = 0x816a_ee71;
pub const MSGS_ACK_GROUP_ID: u32 = 0x8276_77c4;
pub const RPC_RESULT_GROUP_ID: u32 = 0x09a7_df30;
pub const RPC_ERROR_GROUP_ID: u32 = 0x4a17_e265;
pub const NEW_SESSION_GROUP_ID: u32 = 0x510d_3031;
pub const BAD_MSG_NOTIFICATION_GROUP_ID: u32 = 0xceba_a157;
pub const ENCRYPTED_FILE_GROUP_ID: u32 = 0x842a_67c0;
pub const ENCRYPTED_MESSAGE_GROUP_ID: u32 = 0x239f_2e51;
pub const UPDATE_GROUP_ID: u32 = 0x9f89_304e;
pub const DECRYPTED_MESSAGE_GROUP_ID: u32 = 0x5303_193e;
pub const DECRYPTED_MESSAGE_MEDIA_GROUP_ID: u32 = 0x0b3d_2034;
pub const DECRYPTED_MESSAGE_ACTION_GROUP_ID: u32 = 0x6faf_258d;

fn tagged(id: u32) -> Vec<u8> {
    write_u32(id).to_vec()
}

/// `ping#7abe77ec ping_id:long = Pong`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ping {
    pub ping_id: i64,
}

impl TlObject for Ping {
    const CONSTRUCTOR_ID: u32 = 0x7abe_77ec;
    const SUBCLASS_OF_ID: u32 = PONG_GROUP_ID;
    const TYPE_NAME: &'static str = "Ping";
    const SLOTS: &'static [&'static str] = &["ping_id"];

    fn encode(&self) -> Result<Vec<u8>> {
        let mut out = tagged(Self::CONSTRUCTOR_ID);
        out.extend_from_slice(&write_i64(self.ping_id));
        Ok(out)
    }

    fn decode(buf: &mut Bytes, _registry: &Registry) -> Result<Self> {
        Ok(Self {
            ping_id: read_i64(buf)?,
        })
    }
}

/// `pong#347773c5 msg_id:long ping_id:long = Pong`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pong {
    pub msg_id: i64,
    pub ping_id: i64,
}

impl TlObject for Pong {
    const CONSTRUCTOR_ID: u32 = 0x3477_73c5;
    const SUBCLASS_OF_ID: u32 = PONG_GROUP_ID;
    const TYPE_NAME: &'static str = "Pong";
    const SLOTS: &'static [&'static str] = &["msg_id", "ping_id"];

    fn encode(&self) -> Result<Vec<u8>> {
        let mut out = tagged(Self::CONSTRUCTOR_ID);
        out.extend_from_slice(&write_i64(self.msg_id));
        out.extend_from_slice(&write_i64(self.ping_id));
        Ok(out)
    }

    fn decode(buf: &mut Bytes, _registry: &Registry) -> Result<Self> {
        Ok(Self {
            msg_id: read_i64(buf)?,
            ping_id: read_i64(buf)?,
        })
    }
}

/// `msgs_ack#62d6b459 msg_ids:Vector<long> = MsgsAck`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgsAck {
    pub msg_ids: Vec<i64>,
}

impl TlObject for MsgsAck {
    const CONSTRUCTOR_ID: u32 = 0x62d6_b459;
    const SUBCLASS_OF_ID: u32 = MSGS_ACK_GROUP_ID;
    const TYPE_NAME: &'static str = "MsgsAck";
    const SLOTS: &'static [&'static str] = &["msg_ids"];

    fn encode(&self) -> Result<Vec<u8>> {
        let mut out = tagged(Self::CONSTRUCTOR_ID);
        out.extend_from_slice(&write_vector(&self.msg_ids, |id| Ok(write_i64(*id).to_vec()))?);
        Ok(out)
    }

    fn decode(buf: &mut Bytes, _registry: &Registry) -> Result<Self> {
        Ok(Self {
            msg_ids: read_boxed_vector(buf, read_i64)?,
        })
    }
}

/// `rpc_result#f35c6d01 req_msg_id:long result:Object = RpcResult`
#[derive(Debug, Clone, PartialEq)]
pub struct RpcResult {
    pub req_msg_id: i64,
    pub result: Box<Object>,
}

impl TlObject for RpcResult {
    const CONSTRUCTOR_ID: u32 = 0xf35c_6d01;
    const SUBCLASS_OF_ID: u32 = RPC_RESULT_GROUP_ID;
    const TYPE_NAME: &'static str = "RpcResult";
    const SLOTS: &'static [&'static str] = &["req_msg_id", "result"];

    fn encode(&self) -> Result<Vec<u8>> {
        let mut out = tagged(Self::CONSTRUCTOR_ID);
        out.extend_from_slice(&write_i64(self.req_msg_id));
        out.extend_from_slice(&self.result.encode()?);
        Ok(out)
    }

    fn decode(buf: &mut Bytes, registry: &Registry) -> Result<Self> {
        Ok(Self {
            req_msg_id: read_i64(buf)?,
            result: Box::new(registry.decode(buf)?),
        })
    }
}

/// `rpc_error#2144ca19 error_code:int error_message:string = RpcError`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcError {
    pub error_code: i32,
    pub error_message: String,
}

impl TlObject for RpcError {
    const CONSTRUCTOR_ID: u32 = 0x2144_ca19;
    const SUBCLASS_OF_ID: u32 = RPC_ERROR_GROUP_ID;
    const TYPE_NAME: &'static str = "RpcError";
    const SLOTS: &'static [&'static str] = &["error_code", "error_message"];

    fn encode(&self) -> Result<Vec<u8>> {
        let mut out = tagged(Self::CONSTRUCTOR_ID);
        out.extend_from_slice(&write_i32(self.error_code));
        out.extend_from_slice(&write_string(&self.error_message)?);
        Ok(out)
    }

    fn decode(buf: &mut Bytes, _registry: &Registry) -> Result<Self> {
        Ok(Self {
            error_code: read_i32(buf)?,
            error_message: read_string(buf)?,
        })
    }
}

/// `new_session_created#9ec20908 first_msg_id:long unique_id:long server_salt:long = NewSession`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSessionCreated {
    pub first_msg_id: i64,
    pub unique_id: i64,
    pub server_salt: i64,
}

impl TlObject for NewSessionCreated {
    const CONSTRUCTOR_ID: u32 = 0x9ec2_0908;
    const SUBCLASS_OF_ID: u32 = NEW_SESSION_GROUP_ID;
    const TYPE_NAME: &'static str = "NewSessionCreated";
    const SLOTS: &'static [&'static str] = &["first_msg_id", "unique_id", "server_salt"];

    fn encode(&self) -> Result<Vec<u8>> {
        let mut out = tagged(Self::CONSTRUCTOR_ID);
        out.extend_from_slice(&write_i64(self.first_msg_id));
        out.extend_from_slice(&write_i64(self.unique_id));
        out.extend_from_slice(&write_i64(self.server_salt));
        Ok(out)
    }

    fn decode(buf: &mut Bytes, _registry: &Registry) -> Result<Self> {
        Ok(Self {
            first_msg_id: read_i64(buf)?,
            unique_id: read_i64(buf)?,
            server_salt: read_i64(buf)?,
        })
    }
}

/// `bad_msg_notification#a7eff811 bad_msg_id:long bad_msg_seqno:int error_code:int = BadMsgNotification`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadMsgNotification {
    pub bad_msg_id: i64,
    pub bad_msg_seqno: i32,
    pub error_code: i32,
}

impl BadMsgNotification {
    /// Server-side meaning of `error_code`.
    pub fn description(&self) -> &'static str {
        match self.error_code {
            16 => "msg_id too low, the client time has to be synchronized",
            17 => "msg_id too high, the client time has to be synchronized",
            18 => "incorrect two lower order msg_id bits, msg_id must be divisible by 4",
            19 => "container msg_id is the same as a previously received msg_id",
            20 => "message too old, it cannot be verified by the server",
            32 => "msg_seqno too low",
            33 => "msg_seqno too high",
            34 => "an even msg_seqno expected, but odd received",
            35 => "an odd msg_seqno expected, but even received",
            48 => "incorrect server salt",
            64 => "invalid container",
            _ => "unknown error",
        }
    }
}

impl TlObject for BadMsgNotification {
    const CONSTRUCTOR_ID: u32 = 0xa7ef_f811;
    const SUBCLASS_OF_ID: u32 = BAD_MSG_NOTIFICATION_GROUP_ID;
    const TYPE_NAME: &'static str = "BadMsgNotification";
    const SLOTS: &'static [&'static str] = &["bad_msg_id", "bad_msg_seqno", "error_code"];

    fn encode(&self) -> Result<Vec<u8>> {
        let mut out = tagged(Self::CONSTRUCTOR_ID);
        out.extend_from_slice(&write_i64(self.bad_msg_id));
        out.extend_from_slice(&write_i32(self.bad_msg_seqno));
        out.extend_from_slice(&write_i32(self.error_code));
        Ok(out)
    }

    fn decode(buf: &mut Bytes, _registry: &Registry) -> Result<Self> {
        Ok(Self {
            bad_msg_id: read_i64(buf)?,
            bad_msg_seqno: read_i32(buf)?,
            error_code: read_i32(buf)?,
        })
    }
}

/// `bad_server_salt#edab447b bad_msg_id:long bad_msg_seqno:int error_code:int new_server_salt:long = BadMsgNotification`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadServerSalt {
    pub bad_msg_id: i64,
    pub bad_msg_seqno: i32,
    pub error_code: i32,
    pub new_server_salt: i64,
}

impl TlObject for BadServerSalt {
    const CONSTRUCTOR_ID: u32 = 0xedab_447b;
    const SUBCLASS_OF_ID: u32 = BAD_MSG_NOTIFICATION_GROUP_ID;
    const TYPE_NAME: &'static str = "BadServerSalt";
    const SLOTS: &'static [&'static str] =
        &["bad_msg_id", "bad_msg_seqno", "error_code", "new_server_salt"];

    fn encode(&self) -> Result<Vec<u8>> {
        let mut out = tagged(Self::CONSTRUCTOR_ID);
        out.extend_from_slice(&write_i64(self.bad_msg_id));
        out.extend_from_slice(&write_i32(self.bad_msg_seqno));
        out.extend_from_slice(&write_i32(self.error_code));
        out.extend_from_slice(&write_i64(self.new_server_salt));
        Ok(out)
    }

    fn decode(buf: &mut Bytes, _registry: &Registry) -> Result<Self> {
        Ok(Self {
            bad_msg_id: read_i64(buf)?,
            bad_msg_seqno: read_i32(buf)?,
            error_code: read_i32(buf)?,
            new_server_salt: read_i64(buf)?,
        })
    }
}

/// `encryptedFileEmpty#c21f497e = EncryptedFile`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedFileEmpty;

impl TlObject for EncryptedFileEmpty {
    const CONSTRUCTOR_ID: u32 = 0xc21f_497e;
    const SUBCLASS_OF_ID: u32 = ENCRYPTED_FILE_GROUP_ID;
    const TYPE_NAME: &'static str = "EncryptedFileEmpty";
    const SLOTS: &'static [&'static str] = &[];

    fn encode(&self) -> Result<Vec<u8>> {
        Ok(tagged(Self::CONSTRUCTOR_ID))
    }

    fn decode(_buf: &mut Bytes, _registry: &Registry) -> Result<Self> {
        Ok(Self)
    }
}

/// `encryptedFile#a8008cd8 id:long access_hash:long size:long dc_id:int key_fingerprint:int = EncryptedFile`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedFile {
    pub id: i64,
    pub access_hash: i64,
    pub size: i64,
    pub dc_id: i32,
    pub key_fingerprint: i32,
}

impl TlObject for EncryptedFile {
    const CONSTRUCTOR_ID: u32 = 0xa800_8cd8;
    const SUBCLASS_OF_ID: u32 = ENCRYPTED_FILE_GROUP_ID;
    const TYPE_NAME: &'static str = "EncryptedFile";
    const SLOTS: &'static [&'static str] = &["id", "access_hash", "size", "dc_id", "key_fingerprint"];

    fn encode(&self) -> Result<Vec<u8>> {
        let mut out = tagged(Self::CONSTRUCTOR_ID);
        out.extend_from_slice(&write_i64(self.id));
        out.extend_from_slice(&write_i64(self.access_hash));
        out.extend_from_slice(&write_i64(self.size));
        out.extend_from_slice(&write_i32(self.dc_id));
        out.extend_from_slice(&write_i32(self.key_fingerprint));
        Ok(out)
    }

    fn decode(buf: &mut Bytes, _registry: &Registry) -> Result<Self> {
        Ok(Self {
            id: read_i64(buf)?,
            access_hash: read_i64(buf)?,
            size: read_i64(buf)?,
            dc_id: read_i32(buf)?,
            key_fingerprint: read_i32(buf)?,
        })
    }
}

/// `encryptedMessage#ed18c118 random_id:long chat_id:int date:int bytes:bytes file:EncryptedFile = EncryptedMessage`
#[derive(Debug, Clone, PartialEq)]
pub struct EncryptedMessage {
    pub random_id: i64,
    pub chat_id: i32,
    pub date: i32,
    pub bytes: Bytes,
    /// `EncryptedFile` or `EncryptedFileEmpty`.
    pub file: Box<Object>,
}

impl TlObject for EncryptedMessage {
    const CONSTRUCTOR_ID: u32 = 0xed18_c118;
    const SUBCLASS_OF_ID: u32 = ENCRYPTED_MESSAGE_GROUP_ID;
    const TYPE_NAME: &'static str = "EncryptedMessage";
    const SLOTS: &'static [&'static str] = &["random_id", "chat_id", "date", "bytes", "file"];

    fn encode(&self) -> Result<Vec<u8>> {
        let mut out = tagged(Self::CONSTRUCTOR_ID);
        out.extend_from_slice(&write_i64(self.random_id));
        out.extend_from_slice(&write_i32(self.chat_id));
        out.extend_from_slice(&write_i32(self.date));
        out.extend_from_slice(&write_bytes(&self.bytes)?);
        out.extend_from_slice(&self.file.encode()?);
        Ok(out)
    }

    fn decode(buf: &mut Bytes, registry: &Registry) -> Result<Self> {
        Ok(Self {
            random_id: read_i64(buf)?,
            chat_id: read_i32(buf)?,
            date: read_i32(buf)?,
            bytes: read_bytes(buf)?,
            file: Box::new(registry.decode_member(buf, ENCRYPTED_FILE_GROUP_ID, "EncryptedFile")?),
        })
    }
}

/// `encryptedMessageService#23734b06 random_id:long chat_id:int date:int bytes:bytes = EncryptedMessage`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedMessageService {
    pub random_id: i64,
    pub chat_id: i32,
    pub date: i32,
    pub bytes: Bytes,
}

impl TlObject for EncryptedMessageService {
    const CONSTRUCTOR_ID: u32 = 0x2373_4b06;
    const SUBCLASS_OF_ID: u32 = ENCRYPTED_MESSAGE_GROUP_ID;
    const TYPE_NAME: &'static str = "EncryptedMessageService";
    const SLOTS: &'static [&'static str] = &["random_id", "chat_id", "date", "bytes"];

    fn encode(&self) -> Result<Vec<u8>> {
        let mut out = tagged(Self::CONSTRUCTOR_ID);
        out.extend_from_slice(&write_i64(self.random_id));
        out.extend_from_slice(&write_i32(self.chat_id));
        out.extend_from_slice(&write_i32(self.date));
        out.extend_from_slice(&write_bytes(&self.bytes)?);
        Ok(out)
    }

    fn decode(buf: &mut Bytes, _registry: &Registry) -> Result<Self> {
        Ok(Self {
            random_id: read_i64(buf)?,
            chat_id: read_i32(buf)?,
            date: read_i32(buf)?,
            bytes: read_bytes(buf)?,
        })
    }
}

/// `updateNewEncryptedMessage#12bcbd9a message:EncryptedMessage qts:int = Update`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateNewEncryptedMessage {
    /// `EncryptedMessage` or `EncryptedMessageService`.
    pub message: Box<Object>,
    pub qts: i32,
}

impl TlObject for UpdateNewEncryptedMessage {
    const CONSTRUCTOR_ID: u32 = 0x12bc_bd9a;
    const SUBCLASS_OF_ID: u32 = UPDATE_GROUP_ID;
    const TYPE_NAME: &'static str = "UpdateNewEncryptedMessage";
    const SLOTS: &'static [&'static str] = &["message", "qts"];

    fn encode(&self) -> Result<Vec<u8>> {
        let mut out = tagged(Self::CONSTRUCTOR_ID);
        out.extend_from_slice(&self.message.encode()?);
        out.extend_from_slice(&write_i32(self.qts));
        Ok(out)
    }

    fn decode(buf: &mut Bytes, registry: &Registry) -> Result<Self> {
        Ok(Self {
            message: Box::new(registry.decode_member(
                buf,
                ENCRYPTED_MESSAGE_GROUP_ID,
                "EncryptedMessage",
            )?),
            qts: read_i32(buf)?,
        })
    }
}

/// `decryptedMessage#1f814f1f random_id:long random_bytes:bytes message:string media:DecryptedMessageMedia = DecryptedMessage` (layer 8)
#[derive(Debug, Clone, PartialEq)]
pub struct DecryptedMessage8 {
    pub random_id: i64,
    pub random_bytes: Bytes,
    pub message: String,
    pub media: Box<Object>,
}

impl TlObject for DecryptedMessage8 {
    const CONSTRUCTOR_ID: u32 = 0x1f81_4f1f;
    const SUBCLASS_OF_ID: u32 = DECRYPTED_MESSAGE_GROUP_ID;
    const TYPE_NAME: &'static str = "DecryptedMessage8";
    const SLOTS: &'static [&'static str] = &["random_id", "random_bytes", "message", "media"];

    fn encode(&self) -> Result<Vec<u8>> {
        let mut out = tagged(Self::CONSTRUCTOR_ID);
        out.extend_from_slice(&write_i64(self.random_id));
        out.extend_from_slice(&write_bytes(&self.random_bytes)?);
        out.extend_from_slice(&write_string(&self.message)?);
        out.extend_from_slice(&self.media.encode()?);
        Ok(out)
    }

    fn decode(buf: &mut Bytes, registry: &Registry) -> Result<Self> {
        Ok(Self {
            random_id: read_i64(buf)?,
            random_bytes: read_bytes(buf)?,
            message: read_string(buf)?,
            media: Box::new(registry.decode_member(
                buf,
                DECRYPTED_MESSAGE_MEDIA_GROUP_ID,
                "DecryptedMessageMedia",
            )?),
        })
    }
}

/// `decryptedMessageService#aa48327d random_id:long random_bytes:bytes action:DecryptedMessageAction = DecryptedMessage` (layer 8)
#[derive(Debug, Clone, PartialEq)]
pub struct DecryptedMessageService8 {
    pub random_id: i64,
    pub random_bytes: Bytes,
    pub action: Box<Object>,
}

impl TlObject for DecryptedMessageService8 {
    const CONSTRUCTOR_ID: u32 = 0xaa48_327d;
    const SUBCLASS_OF_ID: u32 = DECRYPTED_MESSAGE_GROUP_ID;
    const TYPE_NAME: &'static str = "DecryptedMessageService8";
    const SLOTS: &'static [&'static str] = &["random_id", "random_bytes", "action"];

    fn encode(&self) -> Result<Vec<u8>> {
        let mut out = tagged(Self::CONSTRUCTOR_ID);
        out.extend_from_slice(&write_i64(self.random_id));
        out.extend_from_slice(&write_bytes(&self.random_bytes)?);
        out.extend_from_slice(&self.action.encode()?);
        Ok(out)
    }

    fn decode(buf: &mut Bytes, registry: &Registry) -> Result<Self> {
        Ok(Self {
            random_id: read_i64(buf)?,
            random_bytes: read_bytes(buf)?,
            action: Box::new(registry.decode_member(
                buf,
                DECRYPTED_MESSAGE_ACTION_GROUP_ID,
                "DecryptedMessageAction",
            )?),
        })
    }
}

/// `decryptedMessageMediaEmpty#89f5c4a = DecryptedMessageMedia`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptedMessageMediaEmpty;

impl TlObject for DecryptedMessageMediaEmpty {
    const CONSTRUCTOR_ID: u32 = 0x089f_5c4a;
    const SUBCLASS_OF_ID: u32 = DECRYPTED_MESSAGE_MEDIA_GROUP_ID;
    const TYPE_NAME: &'static str = "DecryptedMessageMediaEmpty";
    const SLOTS: &'static [&'static str] = &[];

    fn encode(&self) -> Result<Vec<u8>> {
        Ok(tagged(Self::CONSTRUCTOR_ID))
    }

    fn decode(_buf: &mut Bytes, _registry: &Registry) -> Result<Self> {
        Ok(Self)
    }
}

/// `decryptedMessageActionSetMessageTTL#a1733aec ttl_seconds:int = DecryptedMessageAction`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptedMessageActionSetMessageTTL {
    pub ttl_seconds: i32,
}

impl TlObject for DecryptedMessageActionSetMessageTTL {
    const CONSTRUCTOR_ID: u32 = 0xa173_3aec;
    const SUBCLASS_OF_ID: u32 = DECRYPTED_MESSAGE_ACTION_GROUP_ID;
    const TYPE_NAME: &'static str = "DecryptedMessageActionSetMessageTTL";
    const SLOTS: &'static [&'static str] = &["ttl_seconds"];

    fn encode(&self) -> Result<Vec<u8>> {
        let mut out = tagged(Self::CONSTRUCTOR_ID);
        out.extend_from_slice(&write_i32(self.ttl_seconds));
        Ok(out)
    }

    fn decode(buf: &mut Bytes, _registry: &Registry) -> Result<Self> {
        Ok(Self {
            ttl_seconds: read_i32(buf)?,
        })
    }
}

macro_rules! entries {
    ($($name:literal => $ty:ident),* $(,)?) => {
        &[$(Entry {
            id: <$ty as TlObject>::CONSTRUCTOR_ID,
            name: $name,
            decode: decode_as::<$ty>,
        }),*]
    };
}

/// Tag → qualified name → decoder, for every type above.
pub static ENTRIES: &[Entry] = entries! {
    "mtproto.Ping" => Ping,
    "mtproto.Pong" => Pong,
    "mtproto.MsgsAck" => MsgsAck,
    "mtproto.RpcResult" => RpcResult,
    "mtproto.RpcError" => RpcError,
    "mtproto.NewSessionCreated" => NewSessionCreated,
    "mtproto.BadMsgNotification" => BadMsgNotification,
    "mtproto.BadServerSalt" => BadServerSalt,
    "types.EncryptedFileEmpty" => EncryptedFileEmpty,
    "types.EncryptedFile" => EncryptedFile,
    "types.EncryptedMessage" => EncryptedMessage,
    "types.EncryptedMessageService" => EncryptedMessageService,
    "types.UpdateNewEncryptedMessage" => UpdateNewEncryptedMessage,
    "secret.DecryptedMessage8" => DecryptedMessage8,
    "secret.DecryptedMessageService8" => DecryptedMessageService8,
    "secret.media.DecryptedMessageMediaEmpty" => DecryptedMessageMediaEmpty,
    "secret.action.DecryptedMessageActionSetMessageTTL" => DecryptedMessageActionSetMessageTTL,
};
