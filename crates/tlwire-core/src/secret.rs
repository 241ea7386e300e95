//! Post-decryption projection of secret-chat updates.
//!
//! The codec never performs the cryptography: an external [`Decryptor`]
//! turns an encrypted message into a decrypted object, and this module
//! reshapes that result plus metadata copied from the update into a stable
//! value. The original update is kept behind an `Arc` for callers that need
//! it; the file descriptor of a regular message is read from it, not copied.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Result, TlError};
use crate::object::{Object, TlObject};
use crate::schema::{
    EncryptedMessage, UpdateNewEncryptedMessage, ENCRYPTED_MESSAGE_GROUP_ID, UPDATE_GROUP_ID,
};

/// External capability that decrypts one encrypted message.
#[async_trait]
pub trait Decryptor: Send + Sync {
    /// `message` is an `EncryptedMessage` or `EncryptedMessageService`.
    async fn decrypt(&self, message: &Object) -> Result<Object>;
}

/// Decrypted regular message.
#[derive(Debug, Clone)]
pub struct SecretChatMessage {
    pub random_id: u64,
    pub chat_id: i32,
    pub date: i32,
    /// Decrypted payload as returned by the decryptor.
    pub message: Object,
    original: Arc<UpdateNewEncryptedMessage>,
}

impl SecretChatMessage {
    pub const CONSTRUCTOR_ID: u32 = 2;
    pub const SUBCLASS_OF_ID: u32 = ENCRYPTED_MESSAGE_GROUP_ID;
    pub const TYPE_NAME: &'static str = "SecretChatMessage";
    pub const SLOTS: &'static [&'static str] = &["random_id", "chat_id", "date", "message", "file"];

    /// Attached `EncryptedFile` / `EncryptedFileEmpty`, borrowed from the update.
    pub fn file(&self) -> Option<&Object> {
        match self.original.message.as_ref() {
            Object::EncryptedMessage(m) => Some(m.file.as_ref()),
            _ => None,
        }
    }
}

/// Decrypted service message.
#[derive(Debug, Clone)]
pub struct SecretChatMessageService {
    pub random_id: u64,
    pub chat_id: i32,
    pub date: i32,
    pub message: Object,
}

impl SecretChatMessageService {
    pub const CONSTRUCTOR_ID: u32 = 3;
    pub const SUBCLASS_OF_ID: u32 = ENCRYPTED_MESSAGE_GROUP_ID;
    pub const TYPE_NAME: &'static str = "SecretChatMessageService";
    pub const SLOTS: &'static [&'static str] = &["random_id", "chat_id", "date", "message"];
}

#[derive(Debug, Clone)]
pub enum SecretMessage {
    Message(SecretChatMessage),
    Service(SecretChatMessageService),
}

/// Projection of an `updateNewEncryptedMessage` after decryption.
#[derive(Debug, Clone)]
pub struct UpdateSecretChatMessage {
    pub message: SecretMessage,
    pub qts: i32,
    original: Arc<UpdateNewEncryptedMessage>,
}

impl UpdateSecretChatMessage {
    pub const CONSTRUCTOR_ID: u32 = 1;
    pub const SUBCLASS_OF_ID: u32 = UPDATE_GROUP_ID;
    pub const TYPE_NAME: &'static str = "UpdateSecretChatMessage";
    pub const SLOTS: &'static [&'static str] = &["message", "qts"];

    /// Decrypt `update.message` through `decryptor` and project the result.
    /// A service message always yields [`SecretMessage::Service`].
    pub async fn generate<D>(update: Arc<UpdateNewEncryptedMessage>, decryptor: &D) -> Result<Self>
    where
        D: Decryptor + ?Sized,
    {
        let (random_id, chat_id, date, service) = match update.message.as_ref() {
            Object::EncryptedMessageService(m) => (m.random_id, m.chat_id, m.date, true),
            Object::EncryptedMessage(m) => (m.random_id, m.chat_id, m.date, false),
            other => {
                return Err(TlError::UnexpectedTag {
                    expected: EncryptedMessage::TYPE_NAME,
                    found: other.constructor_id(),
                })
            }
        };

        let decrypted = decryptor.decrypt(&update.message).await?;
        tracing::debug!(chat_id, service, decrypted = decrypted.type_name(), "secret message decrypted");

        // random_id is an opaque 64-bit pattern; keep the bits, drop the sign.
        let random_id = random_id as u64;
        let message = if service {
            SecretMessage::Service(SecretChatMessageService {
                random_id,
                chat_id,
                date,
                message: decrypted,
            })
        } else {
            SecretMessage::Message(SecretChatMessage {
                random_id,
                chat_id,
                date,
                message: decrypted,
                original: Arc::clone(&update),
            })
        };

        Ok(Self {
            message,
            qts: update.qts,
            original: update,
        })
    }

    /// The update this projection was built from.
    pub fn original(&self) -> &UpdateNewEncryptedMessage {
        &self.original
    }

    /// Projections have no wire form; re-encode [`Self::original`] instead.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Err(TlError::Unsupported(Self::TYPE_NAME))
    }
}
