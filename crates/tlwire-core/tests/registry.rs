//! Registry construction and dispatch.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use bytes::Bytes;

use tlwire_core::registry::{QualifiedName, CORE_ENTRIES};
use tlwire_core::schema::{self, Ping, Pong, RpcResult, ENCRYPTED_FILE_GROUP_ID};
use tlwire_core::{Element, Object, Registry, TlObject, Value};

#[test]
fn standard_registry_builds() {
    let registry = Registry::standard().unwrap();
    assert_eq!(registry.len(), CORE_ENTRIES.len() + schema::ENTRIES.len());
    assert!(registry.contains(Pong::CONSTRUCTOR_ID));
    assert!(!registry.contains(0xdead_beef));
}

#[test]
fn names_resolve_both_ways() {
    let registry = Registry::standard().unwrap();
    let id = registry.lookup("mtproto.Pong").unwrap();
    assert_eq!(id, Pong::CONSTRUCTOR_ID);
    assert_eq!(registry.name(id), Some("mtproto.Pong"));

    let q = registry
        .qualified_name(registry.lookup("secret.media.DecryptedMessageMediaEmpty").unwrap())
        .unwrap();
    assert_eq!(q.namespace, "secret");
    assert_eq!(q.group, Some("media"));
    assert_eq!(q.name, "DecryptedMessageMediaEmpty");
    assert_eq!(q.to_string(), "secret.media.DecryptedMessageMediaEmpty");
    assert!(registry.lookup("mtproto.Nope").is_none());
}

#[test]
fn qualified_name_shapes() {
    let q = QualifiedName::parse("types.EncryptedFile").unwrap();
    assert_eq!(q.group, None);
    for bad in ["Pong", "a.b.c.d", "a..b", ".Pong"] {
        assert!(QualifiedName::parse(bad).is_err(), "{bad}");
    }
}

#[test]
fn duplicate_tags_are_rejected() {
    let err = Registry::new(&[CORE_ENTRIES, CORE_ENTRIES]).unwrap_err();
    assert_eq!(err.kind().as_str(), "REGISTRY");
}

#[test]
fn unknown_tag_consumes_nothing() {
    let registry = Registry::standard().unwrap();
    let mut buf = Bytes::from_static(&[0xef, 0xbe, 0xad, 0xde, 1, 2, 3, 4]);
    let err = registry.decode(&mut buf).unwrap_err();
    assert!(matches!(err, tlwire_core::TlError::UnknownTag(0xdead_beef)));
    assert_eq!(buf.len(), 8);
}

#[test]
fn failed_decode_leaves_cursor() {
    let registry = Registry::standard().unwrap();
    let mut raw = Pong { msg_id: 1, ping_id: 2 }.encode().unwrap();
    raw.truncate(14);
    let mut buf = Bytes::from(raw);
    assert!(registry.decode(&mut buf).is_err());
    assert_eq!(buf.len(), 14);
}

#[test]
fn sequential_decodes_advance() {
    let registry = Registry::standard().unwrap();
    let mut raw = Pong { msg_id: 1, ping_id: 2 }.encode().unwrap();
    raw.extend_from_slice(&Object::Bool(true).encode().unwrap());
    let mut buf = Bytes::from(raw);

    let first = registry.decode(&mut buf).unwrap();
    assert_eq!(first, Object::Pong(Pong { msg_id: 1, ping_id: 2 }));
    assert_eq!(registry.decode(&mut buf).unwrap(), Object::Bool(true));
    assert!(buf.is_empty());
}

#[test]
fn element_hint_selects_typed_vector() {
    let registry = Registry::standard().unwrap();
    let items = vec![Value::String("a".into()), Value::String("bc".into())];
    let raw = Object::Vector(items.clone()).encode().unwrap();

    let mut buf = Bytes::from(raw);
    let decoded = registry.decode_with(&mut buf, Some(&Element::String)).unwrap();
    assert_eq!(decoded, Object::Vector(items));
    assert!(buf.is_empty());
}

#[test]
fn nested_vector_hint() {
    let registry = Registry::standard().unwrap();
    let inner = Value::Vector(vec![Value::Int(1), Value::Int(2)]);
    let raw = Object::Vector(vec![inner.clone(), inner.clone()]).encode().unwrap();

    let element = Element::Vector(Box::new(Element::Int));
    let mut buf = Bytes::from(raw);
    let decoded = registry.decode_with(&mut buf, Some(&element)).unwrap();
    assert_eq!(decoded, Object::Vector(vec![inner.clone(), inner]));
}

#[test]
fn member_outside_group_is_rejected() {
    let registry = Registry::standard().unwrap();
    let raw = Pong { msg_id: 1, ping_id: 2 }.encode().unwrap();
    let mut buf = Bytes::from(raw);
    let err = registry
        .decode_member(&mut buf, ENCRYPTED_FILE_GROUP_ID, "EncryptedFile")
        .unwrap_err();
    assert_eq!(err.kind().as_str(), "UNEXPECTED_TAG");
}

#[test]
fn registry_is_shareable_across_threads() {
    let registry = std::sync::Arc::new(Registry::standard().unwrap());
    let raw = Bytes::from(Pong { msg_id: 5, ping_id: 6 }.encode().unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = registry.clone();
            let raw = raw.clone();
            std::thread::spawn(move || registry.decode_bytes(raw).unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap().constructor_id(), Pong::CONSTRUCTOR_ID);
    }
}

/// `depth` rpc_result headers wrapped around a single ping.
fn nested_rpc_results(depth: usize) -> Vec<u8> {
    let mut raw = Vec::with_capacity(depth * 12 + 12);
    for i in 0..depth {
        raw.extend_from_slice(&0xf35c_6d01u32.to_le_bytes());
        raw.extend_from_slice(&(i as i64).to_le_bytes());
    }
    raw.extend_from_slice(&0x7abe_77ecu32.to_le_bytes());
    raw.extend_from_slice(&42i64.to_le_bytes());
    raw
}

#[test]
fn deep_rpc_result_chain_is_rejected() {
    let registry = Registry::standard().unwrap();
    let raw = nested_rpc_results(5_000);
    assert!(raw.len() < 1024 * 1024);

    let mut buf = Bytes::from(raw);
    let err = registry.decode(&mut buf).unwrap_err();
    assert_eq!(err.kind().as_str(), "NESTING_DEPTH");
    assert_eq!(buf.len(), 5_000 * 12 + 12);
}

#[test]
fn nesting_within_limit_decodes() {
    let registry = Registry::standard().unwrap();
    let depth = registry.max_depth() - 1;
    let mut object = registry.decode_bytes(nested_rpc_results(depth)).unwrap();
    for _ in 0..depth {
        object = *RpcResult::try_from(object).unwrap().result;
    }
    assert_eq!(object, Object::Ping(Ping { ping_id: 42 }));
}

#[test]
fn depth_limit_is_configurable() {
    let registry = Registry::standard().unwrap().with_max_depth(2);
    assert!(registry.decode_bytes(nested_rpc_results(1)).is_ok());
    let err = registry.decode_bytes(nested_rpc_results(2)).unwrap_err();
    assert_eq!(err.kind().as_str(), "NESTING_DEPTH");
}

#[test]
fn nested_gzip_counts_toward_depth() {
    let mut object: Object = Ping { ping_id: 1 }.into();
    for _ in 0..8 {
        object = tlwire_core::GzipPacked::new(object).into();
    }
    let raw = object.encode().unwrap();

    let err = Registry::standard()
        .unwrap()
        .with_max_depth(4)
        .decode_bytes(raw.clone())
        .unwrap_err();
    assert_eq!(err.kind().as_str(), "NESTING_DEPTH");
    assert_eq!(Registry::standard().unwrap().decode_bytes(raw).unwrap(), object);
}
