//! Diagnostic formatting.
//!
//! Renders objects as `{"_": TypeName, slot: value, ...}` for logs and
//! debugging. Integers wider than 53 bits are rendered as decimal strings so
//! JSON consumers never round them; byte strings are rendered as hex.

use serde_json::{json, Map, Value as Json};

use crate::framing::Message;
use crate::object::{Object, TlObject};
use crate::secret::{
    SecretChatMessage, SecretChatMessageService, SecretMessage, UpdateSecretChatMessage,
};
use crate::value::Value;

fn record(type_name: &str, slots: &[&str], values: Vec<Json>) -> Json {
    let mut map = Map::new();
    map.insert("_".into(), Json::String(type_name.into()));
    for (slot, value) in slots.iter().zip(values) {
        map.insert((*slot).into(), value);
    }
    Json::Object(map)
}

fn long(v: i64) -> Json {
    Json::String(v.to_string())
}

fn hex_string(bytes: &[u8]) -> Json {
    Json::String(hex::encode(bytes))
}

pub fn value_to_json(value: &Value) -> Json {
    match value {
        Value::Int(v) => json!(v),
        Value::Long(v) => long(*v),
        Value::Int128(v) | Value::Int256(v) => Json::String(v.to_string()),
        Value::Float(v) => json!(v),
        Value::Double(v) => json!(v),
        Value::Bool(v) => json!(v),
        Value::Bytes(v) => hex_string(v),
        Value::String(v) => json!(v),
        Value::Vector(items) => Json::Array(items.iter().map(value_to_json).collect()),
        Value::Object(o) => to_json(o),
    }
}

fn message_to_json(m: &Message) -> Json {
    record(
        Message::TYPE_NAME,
        Message::SLOTS,
        vec![to_json(&m.body), long(m.msg_id), json!(m.seq_no), json!(m.length)],
    )
}

/// Render one object.
pub fn to_json(object: &Object) -> Json {
    let name = object.type_name();
    let slots = object.slots();
    match object {
        Object::Bool(v) => json!(v),
        Object::Vector(items) => Json::Array(items.iter().map(value_to_json).collect()),
        Object::GzipPacked(o) => record(name, slots, vec![to_json(&o.packed_data)]),
        Object::MsgContainer(o) => record(
            name,
            slots,
            vec![Json::Array(o.messages.iter().map(message_to_json).collect())],
        ),
        Object::Ping(o) => record(name, slots, vec![long(o.ping_id)]),
        Object::Pong(o) => record(name, slots, vec![long(o.msg_id), long(o.ping_id)]),
        Object::MsgsAck(o) => record(
            name,
            slots,
            vec![Json::Array(o.msg_ids.iter().copied().map(long).collect())],
        ),
        Object::RpcResult(o) => record(name, slots, vec![long(o.req_msg_id), to_json(&o.result)]),
        Object::RpcError(o) => record(
            name,
            slots,
            vec![json!(o.error_code), json!(o.error_message)],
        ),
        Object::NewSessionCreated(o) => record(
            name,
            slots,
            vec![long(o.first_msg_id), long(o.unique_id), long(o.server_salt)],
        ),
        Object::BadMsgNotification(o) => record(
            name,
            slots,
            vec![long(o.bad_msg_id), json!(o.bad_msg_seqno), json!(o.error_code)],
        ),
        Object::BadServerSalt(o) => record(
            name,
            slots,
            vec![
                long(o.bad_msg_id),
                json!(o.bad_msg_seqno),
                json!(o.error_code),
                long(o.new_server_salt),
            ],
        ),
        Object::EncryptedFileEmpty(_)
        | Object::DecryptedMessageMediaEmpty(_) => record(name, slots, Vec::new()),
        Object::EncryptedFile(o) => record(
            name,
            slots,
            vec![
                long(o.id),
                long(o.access_hash),
                long(o.size),
                json!(o.dc_id),
                json!(o.key_fingerprint),
            ],
        ),
        Object::EncryptedMessage(o) => record(
            name,
            slots,
            vec![
                long(o.random_id),
                json!(o.chat_id),
                json!(o.date),
                hex_string(&o.bytes),
                to_json(&o.file),
            ],
        ),
        Object::EncryptedMessageService(o) => record(
            name,
            slots,
            vec![long(o.random_id), json!(o.chat_id), json!(o.date), hex_string(&o.bytes)],
        ),
        Object::UpdateNewEncryptedMessage(o) => {
            record(name, slots, vec![to_json(&o.message), json!(o.qts)])
        }
        Object::DecryptedMessage8(o) => record(
            name,
            slots,
            vec![
                long(o.random_id),
                hex_string(&o.random_bytes),
                json!(o.message),
                to_json(&o.media),
            ],
        ),
        Object::DecryptedMessageService8(o) => record(
            name,
            slots,
            vec![long(o.random_id), hex_string(&o.random_bytes), to_json(&o.action)],
        ),
        Object::DecryptedMessageActionSetMessageTTL(o) => {
            record(name, slots, vec![json!(o.ttl_seconds)])
        }
    }
}

/// Render a decrypted secret-chat projection.
pub fn secret_to_json(update: &UpdateSecretChatMessage) -> Json {
    let message = match &update.message {
        SecretMessage::Message(m) => record(
            SecretChatMessage::TYPE_NAME,
            SecretChatMessage::SLOTS,
            vec![
                Json::String(m.random_id.to_string()),
                json!(m.chat_id),
                json!(m.date),
                to_json(&m.message),
                m.file().map(to_json).unwrap_or(Json::Null),
            ],
        ),
        SecretMessage::Service(m) => record(
            SecretChatMessageService::TYPE_NAME,
            SecretChatMessageService::SLOTS,
            vec![
                Json::String(m.random_id.to_string()),
                json!(m.chat_id),
                json!(m.date),
                to_json(&m.message),
            ],
        ),
    };
    record(
        UpdateSecretChatMessage::TYPE_NAME,
        UpdateSecretChatMessage::SLOTS,
        vec![message, json!(update.qts)],
    )
}
