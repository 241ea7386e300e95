//! Secret-chat projection over a stub decryptor.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use tlwire_core::inspect::secret_to_json;
use tlwire_core::schema::{
    DecryptedMessage8, DecryptedMessageActionSetMessageTTL, DecryptedMessageMediaEmpty,
    DecryptedMessageService8, EncryptedFile, EncryptedMessage, EncryptedMessageService, Pong,
    UpdateNewEncryptedMessage,
};
use tlwire_core::secret::{Decryptor, SecretMessage, UpdateSecretChatMessage};
use tlwire_core::{Object, Result, TlError};

/// Answers with a canned object per message kind and counts calls.
#[derive(Default)]
struct StubDecryptor {
    calls: AtomicUsize,
}

#[async_trait]
impl Decryptor for StubDecryptor {
    async fn decrypt(&self, message: &Object) -> Result<Object> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(match message {
            Object::EncryptedMessage(_) => DecryptedMessage8 {
                random_id: 1,
                random_bytes: Bytes::from_static(&[9; 15]),
                message: "hi".into(),
                media: Box::new(DecryptedMessageMediaEmpty.into()),
            }
            .into(),
            _ => DecryptedMessageService8 {
                random_id: 2,
                random_bytes: Bytes::from_static(&[8; 15]),
                action: Box::new(DecryptedMessageActionSetMessageTTL { ttl_seconds: 30 }.into()),
            }
            .into(),
        })
    }
}

struct FailingDecryptor;

#[async_trait]
impl Decryptor for FailingDecryptor {
    async fn decrypt(&self, _message: &Object) -> Result<Object> {
        Err(TlError::Decrypt("no key for chat".into()))
    }
}

fn file() -> Object {
    EncryptedFile {
        id: 100,
        access_hash: 200,
        size: 300,
        dc_id: 2,
        key_fingerprint: -5,
    }
    .into()
}

fn regular_update() -> Arc<UpdateNewEncryptedMessage> {
    Arc::new(UpdateNewEncryptedMessage {
        message: Box::new(
            EncryptedMessage {
                random_id: -1,
                chat_id: 42,
                date: 1_700_000_000,
                bytes: Bytes::from_static(b"ciphertext"),
                file: Box::new(file()),
            }
            .into(),
        ),
        qts: 7,
    })
}

#[tokio::test]
async fn regular_message_projection() {
    let decryptor = StubDecryptor::default();
    let update = regular_update();
    let out = UpdateSecretChatMessage::generate(update.clone(), &decryptor)
        .await
        .unwrap();

    assert_eq!(out.qts, 7);
    assert_eq!(decryptor.calls.load(Ordering::SeqCst), 1);
    assert_eq!(out.original(), update.as_ref());

    let SecretMessage::Message(m) = &out.message else {
        panic!("expected a regular message");
    };
    assert_eq!(m.random_id, u64::MAX);
    assert_eq!(m.chat_id, 42);
    assert_eq!(m.date, 1_700_000_000);
    assert_eq!(m.message.type_name(), "DecryptedMessage8");
    assert_eq!(m.file(), Some(&file()));

    assert_eq!(out.encode().unwrap_err().kind().as_str(), "UNSUPPORTED");
}

#[tokio::test]
async fn service_message_projection() {
    let update = Arc::new(UpdateNewEncryptedMessage {
        message: Box::new(
            EncryptedMessageService {
                random_id: 11,
                chat_id: 3,
                date: 5,
                bytes: Bytes::from_static(b"x"),
            }
            .into(),
        ),
        qts: 1,
    });
    let out = UpdateSecretChatMessage::generate(update, &StubDecryptor::default())
        .await
        .unwrap();

    let SecretMessage::Service(m) = &out.message else {
        panic!("expected a service message");
    };
    assert_eq!(m.random_id, 11);
    assert_eq!(m.message.type_name(), "DecryptedMessageService8");
}

#[tokio::test]
async fn non_encrypted_payload_is_rejected_before_decrypting() {
    let decryptor = StubDecryptor::default();
    let update = Arc::new(UpdateNewEncryptedMessage {
        message: Box::new(Pong { msg_id: 1, ping_id: 2 }.into()),
        qts: 1,
    });
    let err = UpdateSecretChatMessage::generate(update, &decryptor)
        .await
        .unwrap_err();
    assert_eq!(err.kind().as_str(), "UNEXPECTED_TAG");
    assert_eq!(decryptor.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn decrypt_failure_propagates() {
    let decryptor: Box<dyn Decryptor> = Box::new(FailingDecryptor);
    let err = UpdateSecretChatMessage::generate(regular_update(), decryptor.as_ref())
        .await
        .unwrap_err();
    assert_eq!(err.kind().as_str(), "DECRYPT");
}

#[tokio::test]
async fn projection_renders_as_json() {
    let out = UpdateSecretChatMessage::generate(regular_update(), &StubDecryptor::default())
        .await
        .unwrap();
    let json = secret_to_json(&out);

    assert_eq!(json["_"], "UpdateSecretChatMessage");
    assert_eq!(json["qts"], 7);
    let message = &json["message"];
    assert_eq!(message["_"], "SecretChatMessage");
    assert_eq!(message["random_id"], "18446744073709551615");
    assert_eq!(message["file"]["_"], "EncryptedFile");
    assert_eq!(message["message"]["message"], "hi");
    assert_eq!(message["message"]["media"]["_"], "DecryptedMessageMediaEmpty");
}
