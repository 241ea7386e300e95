//! Arbitrary-precision conversion for integers wider than any machine type.
//!
//! Encoding extracts bytes with `(value >> 8*i) & 0xff` over the unsigned
//! two's-complement image of the value; decoding folds them back. Both reject
//! nothing silently: out-of-range values are a range violation.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, ToPrimitive, Zero};

use crate::error::{Result, TlError};
use crate::primitive::Endian;

/// Inclusive bounds of a `width`-byte integer.
pub fn bounds(width: usize, signed: bool) -> (BigInt, BigInt) {
    let bits = 8 * width;
    if signed {
        let half = BigInt::one() << (bits - 1);
        (-half.clone(), half - 1)
    } else {
        (BigInt::zero(), (BigInt::one() << bits) - 1)
    }
}

/// Encode `value` into exactly `N` bytes.
pub fn to_fixed_bytes<const N: usize>(
    value: &BigInt,
    signed: bool,
    endian: Endian,
    field: &'static str,
) -> Result<[u8; N]> {
    let (min, max) = bounds(N, signed);
    if value < &min || value > &max {
        return Err(TlError::range(
            field,
            format!(
                "{value} outside {}-bit {} range",
                8 * N,
                if signed { "signed" } else { "unsigned" }
            ),
        ));
    }

    let image: BigUint = match value.sign() {
        Sign::Minus => (value + (BigInt::one() << (8 * N))).to_biguint(),
        _ => value.to_biguint(),
    }
    .ok_or_else(|| TlError::range(field, "negative two's complement image"))?;

    let mask = BigUint::from(0xffu8);
    let mut out = [0u8; N];
    for (i, slot) in out.iter_mut().enumerate() {
        let byte = (&image >> (8 * i)) & &mask;
        *slot = byte
            .to_u8()
            .ok_or_else(|| TlError::range(field, "byte extraction overflow"))?;
    }
    if endian == Endian::Big {
        out.reverse();
    }
    Ok(out)
}

/// Decode a fixed-width two's complement (or unsigned) integer.
pub fn from_fixed_bytes(raw: &[u8], signed: bool, endian: Endian) -> BigInt {
    let msb_first: Vec<u8> = match endian {
        Endian::Little => raw.iter().rev().copied().collect(),
        Endian::Big => raw.to_vec(),
    };

    let magnitude = msb_first
        .iter()
        .fold(BigUint::zero(), |acc, &b| (acc << 8usize) | BigUint::from(b));
    let value = BigInt::from(magnitude);

    let negative = signed && msb_first.first().is_some_and(|b| b & 0x80 != 0);
    if negative {
        value - (BigInt::one() << (8 * raw.len()))
    } else {
        value
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn minus_one_is_all_ones() {
        let raw = to_fixed_bytes::<16>(&BigInt::from(-1), true, Endian::Little, "t").unwrap();
        assert_eq!(raw, [0xff; 16]);
        assert_eq!(from_fixed_bytes(&raw, true, Endian::Little), BigInt::from(-1));
        assert_eq!(
            from_fixed_bytes(&raw, false, Endian::Little),
            (BigInt::one() << 128) - 1
        );
    }

    #[test]
    fn endianness_mirrors() {
        let v = BigInt::from(0x0102_0304u32);
        let le = to_fixed_bytes::<16>(&v, false, Endian::Little, "t").unwrap();
        let be = to_fixed_bytes::<16>(&v, false, Endian::Big, "t").unwrap();
        assert_eq!(&le[..4], &[4, 3, 2, 1]);
        assert_eq!(&be[12..], &[1, 2, 3, 4]);
        assert_eq!(from_fixed_bytes(&be, false, Endian::Big), v);
    }

    #[test]
    fn signed_extremes_round_trip() {
        let (min, max) = bounds(32, true);
        for v in [min.clone(), max.clone()] {
            let raw = to_fixed_bytes::<32>(&v, true, Endian::Little, "t").unwrap();
            assert_eq!(from_fixed_bytes(&raw, true, Endian::Little), v);
        }
        assert!(to_fixed_bytes::<32>(&(max + 1), true, Endian::Little, "t").is_err());
        assert!(to_fixed_bytes::<32>(&(min - 1), true, Endian::Little, "t").is_err());
    }

    #[test]
    fn negative_rejected_when_unsigned() {
        let err = to_fixed_bytes::<16>(&BigInt::from(-5), false, Endian::Little, "t").unwrap_err();
        assert_eq!(err.kind().as_str(), "RANGE");
    }
}
