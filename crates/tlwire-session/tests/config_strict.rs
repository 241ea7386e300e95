#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tlwire_session::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
limits:
  max_packet_byte: 4096 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.limits.max_packet_bytes, 1024 * 1024);
    assert_eq!(cfg.limits.max_container_messages, 1020);
    assert_eq!(cfg.limits.max_unpacked_bytes, 16 * 1024 * 1024);
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
limits:
  max_packet_bytes: 65536
  max_container_messages: 16
  max_unpacked_bytes: 1048576
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.limits.max_packet_bytes, 65536);
    assert_eq!(cfg.limits.max_container_messages, 16);
    assert_eq!(cfg.limits.max_unpacked_bytes, 1048576);
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.kind().as_str(), "CONFIG");
}

#[test]
fn rejects_out_of_range_limits() {
    for bad in [
        "version: 1\nlimits: { max_packet_bytes: 32 }\n",
        "version: 1\nlimits: { max_packet_bytes: 33554432 }\n",
        "version: 1\nlimits: { max_container_messages: 0 }\n",
        "version: 1\nlimits: { max_container_messages: 9000 }\n",
        "version: 1\nlimits: { max_unpacked_bytes: 0 }\n",
        "version: 1\nlimits: { max_unpacked_bytes: 134217728 }\n",
    ] {
        let err = config::load_from_str(bad).expect_err(bad);
        assert_eq!(err.kind().as_str(), "CONFIG", "{bad}");
    }
}

#[test]
fn missing_file_is_a_config_error() {
    let err = config::load_from_file("does/not/exist.yaml").expect_err("must fail");
    assert_eq!(err.kind().as_str(), "CONFIG");
}
