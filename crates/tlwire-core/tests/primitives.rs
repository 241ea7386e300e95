//! Primitive codec behaviour at the edges.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use bytes::Bytes;
use num_bigint::BigInt;

use tlwire_core::primitive::{
    padding, read_boxed_vector, read_bytes, read_double, read_float, read_i64, read_int,
    read_int128, read_int256, read_long, read_string, write_bytes, write_double, write_float,
    write_i64, write_int, write_int128, write_int256, write_long, write_string, write_vector,
    Endian, IntFormat,
};

const FORMATS: [IntFormat; 4] = [
    IntFormat::new(true, Endian::Little),
    IntFormat::new(true, Endian::Big),
    IntFormat::new(false, Endian::Little),
    IntFormat::new(false, Endian::Big),
];

#[test]
fn int_all_formats() {
    for fmt in FORMATS {
        let values: &[i64] = if fmt.signed {
            &[0, 1, -1, i32::MIN as i64, i32::MAX as i64]
        } else {
            &[0, 1, 0x8000_0000, u32::MAX as i64]
        };
        for &v in values {
            let raw = write_int(v, fmt).unwrap();
            let mut buf = Bytes::copy_from_slice(&raw);
            assert_eq!(read_int(&mut buf, fmt).unwrap(), v, "fmt={fmt:?}");
            assert!(buf.is_empty());
        }
    }
}

#[test]
fn int_byte_order() {
    assert_eq!(write_int(1, IntFormat::SIGNED).unwrap(), [1, 0, 0, 0]);
    assert_eq!(
        write_int(1, IntFormat::new(true, Endian::Big)).unwrap(),
        [0, 0, 0, 1]
    );
    assert_eq!(write_int(-1, IntFormat::SIGNED).unwrap(), [0xff; 4]);
}

#[test]
fn int_out_of_range() {
    let err = write_int(i32::MAX as i64 + 1, IntFormat::SIGNED).unwrap_err();
    assert_eq!(err.kind().as_str(), "RANGE");
    let err = write_int(-1, IntFormat::UNSIGNED).unwrap_err();
    assert_eq!(err.kind().as_str(), "RANGE");
    let err = write_long(u64::MAX as i128 + 1, IntFormat::UNSIGNED).unwrap_err();
    assert_eq!(err.kind().as_str(), "RANGE");
}

#[test]
fn long_all_formats() {
    for fmt in FORMATS {
        let v: i128 = if fmt.signed { i64::MIN as i128 } else { u64::MAX as i128 };
        let raw = write_long(v, fmt).unwrap();
        let mut buf = Bytes::copy_from_slice(&raw);
        assert_eq!(read_long(&mut buf, fmt).unwrap(), v, "fmt={fmt:?}");
    }
}

#[test]
fn wide_ints() {
    let v: BigInt = -(BigInt::from(1i32) << 200usize) + 12345i32;
    let raw = write_int256(&v, IntFormat::SIGNED).unwrap();
    assert_eq!(raw.len(), 32);
    assert_eq!(raw[31], 0xff);
    let mut buf = Bytes::copy_from_slice(&raw);
    assert_eq!(read_int256(&mut buf, IntFormat::SIGNED).unwrap(), v);

    let v: BigInt = (BigInt::from(1i32) << 127usize) + 5i32;
    let fmt = IntFormat::new(false, Endian::Big);
    let raw = write_int128(&v, fmt).unwrap();
    assert_eq!(raw[0], 0x80);
    let mut buf = Bytes::copy_from_slice(&raw);
    assert_eq!(read_int128(&mut buf, fmt).unwrap(), v);

    let err = write_int128(&(BigInt::from(1) << 127), IntFormat::SIGNED).unwrap_err();
    assert_eq!(err.kind().as_str(), "RANGE");
}

#[test]
fn short_read_reports_field() {
    let mut buf = Bytes::from_static(&[1, 2, 3]);
    let err = read_i64(&mut buf).unwrap_err();
    assert_eq!(err.kind().as_str(), "SHORT_READ");
}

#[test]
fn floats_honor_endianness() {
    let raw = write_float(1.5, Endian::Big);
    assert_eq!(raw, 1.5f32.to_be_bytes());
    let mut buf = Bytes::copy_from_slice(&raw);
    assert_eq!(read_float(&mut buf, Endian::Big).unwrap(), 1.5);

    let raw = write_double(-0.25, Endian::Little);
    let mut buf = Bytes::copy_from_slice(&raw);
    assert_eq!(read_double(&mut buf, Endian::Little).unwrap(), -0.25);
}

#[test]
fn byte_string_length_boundary() {
    let short = write_bytes(&[7u8; 253]).unwrap();
    assert_eq!(short[0], 253);
    assert_eq!(short.len(), 256);

    let long = write_bytes(&[7u8; 254]).unwrap();
    assert_eq!(&long[..4], &[254, 254, 0, 0]);
    assert_eq!(long.len(), 4 + 254 + 2);

    for payload in [short, long] {
        assert_eq!(payload.len() % 4, 0);
        let mut buf = Bytes::from(payload);
        read_bytes(&mut buf).unwrap();
        assert!(buf.is_empty());
    }
}

#[test]
fn byte_string_lengths_pad_to_four() {
    for n in [0usize, 1, 2, 3, 4, 5, 100, 252, 253, 254, 255, 256, 1000, 70_000] {
        let data: Vec<u8> = (0..n).map(|i| i as u8).collect();
        let raw = write_bytes(&data).unwrap();
        assert_eq!(raw.len() % 4, 0, "n={n}");
        let mut buf = Bytes::from(raw);
        assert_eq!(read_bytes(&mut buf).unwrap(), &data[..], "n={n}");
    }
    assert_eq!(padding(5), 3);
}

#[test]
fn strings_decode_lossy() {
    let raw = write_string("héllo").unwrap();
    let mut buf = Bytes::from(raw);
    assert_eq!(read_string(&mut buf).unwrap(), "héllo");

    let raw = write_bytes(&[0x66, 0xff, 0x6f]).unwrap();
    let mut buf = Bytes::from(raw);
    assert_eq!(read_string(&mut buf).unwrap(), "f\u{fffd}o");
}

#[test]
fn typed_vector() {
    let raw = write_vector(&[3i64, -4], |v| Ok(write_i64(*v).to_vec())).unwrap();
    assert_eq!(&raw[..4], &[0x15, 0xc4, 0xb5, 0x1c]);
    let mut buf = Bytes::from(raw);
    assert_eq!(read_boxed_vector(&mut buf, read_i64).unwrap(), vec![3, -4]);
}

#[test]
fn boxed_vector_rejects_wrong_marker() {
    let mut buf = Bytes::from_static(&[0, 0, 0, 0, 0, 0, 0, 0]);
    let err = read_boxed_vector(&mut buf, read_i64).unwrap_err();
    assert_eq!(err.kind().as_str(), "UNEXPECTED_TAG");
}
