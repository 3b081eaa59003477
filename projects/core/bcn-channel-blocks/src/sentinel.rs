//! Signed endpoint normalization.
//!
//! Signed (SNORM) sub-blocks store endpoints as two's complement octets, but the raw value
//! `-128` is reserved. It is read back as `-127` and silently stored as `-127` when written,
//! so the signed logical domain is always `-127..=127`.

/// The smallest signed endpoint value that can be observed.
pub const SIGNED_ENDPOINT_MIN: i8 = -127;

/// The largest signed endpoint value.
pub const SIGNED_ENDPOINT_MAX: i8 = 127;

/// Decodes a stored endpoint octet into its signed value, mapping `-128` to `-127`.
#[inline(always)]
pub const fn decode_signed_endpoint(raw: u8) -> i8 {
    normalize_signed_endpoint(raw as i8)
}

/// Encodes a signed endpoint into the octet to be stored, mapping `-128` to `-127`.
#[inline(always)]
pub const fn encode_signed_endpoint(value: i8) -> u8 {
    normalize_signed_endpoint(value) as u8
}

/// Maps the reserved `-128` onto `-127`, passing every other value through.
#[inline(always)]
pub const fn normalize_signed_endpoint(value: i8) -> i8 {
    if value == i8::MIN {
        SIGNED_ENDPOINT_MIN
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[rstest]
    #[case(0x00, 0)]
    #[case(0x01, 1)]
    #[case(0x7F, 127)]
    #[case(0xFF, -1)]
    #[case(0x81, -127)]
    #[case(0x80, -127)]
    fn decodes_twos_complement_with_sentinel(#[case] raw: u8, #[case] expected: i8) {
        assert_eq!(decode_signed_endpoint(raw), expected);
    }

    #[rstest]
    #[case(0, 0x00)]
    #[case(127, 0x7F)]
    #[case(-1, 0xFF)]
    #[case(-127, 0x81)]
    #[case(-128, 0x81)]
    fn encodes_twos_complement_with_sentinel(#[case] value: i8, #[case] expected: u8) {
        assert_eq!(encode_signed_endpoint(value), expected);
    }

    #[test]
    fn every_value_survives_encode_then_decode() {
        for value in i8::MIN..=i8::MAX {
            let decoded = decode_signed_endpoint(encode_signed_endpoint(value));
            assert_eq!(decoded, normalize_signed_endpoint(value));
            assert!((SIGNED_ENDPOINT_MIN..=SIGNED_ENDPOINT_MAX).contains(&decoded));
        }
    }
}
