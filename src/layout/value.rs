//! Field values and their byte encoding inside a storage word.
//!
//! Values are big endian and right aligned within their field, the way the
//! Solidity compiler packs struct members.

use alloc::vec::Vec;

use stylus_sdk::alloy_primitives::{Address, I256, U256};

use super::FieldType;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Uint(U256),
    Int(I256),
    Bool(bool),
    Address(Address),
    FixedBytes(Vec<u8>),
}

impl FieldValue {
    /// Whether the value can be stored in a field of type `field_type`
    /// without truncation
    pub fn fits(&self, field_type: FieldType) -> bool {
        if !field_type.is_supported() {
            return false;
        }

        match (self, field_type) {
            (FieldValue::Uint(value), FieldType::Uint(bits)) => value.bit_len() <= bits as usize,
            (FieldValue::Int(value), FieldType::Int(bits)) => {
                if bits == 256 {
                    return true;
                }
                // Bits left once the sign bit is set aside
                let magnitude = if value.is_negative() {
                    !value.into_raw()
                } else {
                    value.into_raw()
                };
                magnitude.bit_len() < bits as usize
            }
            (FieldValue::Bool(_), FieldType::Bool) => true,
            (FieldValue::Address(_), FieldType::Address) => true,
            (FieldValue::FixedBytes(bytes), FieldType::FixedBytes(len)) => bytes.len() == len as usize,
            _ => false,
        }
    }

    /// Write the value into `dest`, the field's bytes within its word.
    /// The value must `fit` the field, and `dest` must be as wide as it.
    pub(crate) fn encode_into(&self, dest: &mut [u8]) {
        let width = dest.len();
        match self {
            FieldValue::Uint(value) => {
                dest.copy_from_slice(&value.to_be_bytes::<32>()[32 - width..]);
            }
            FieldValue::Int(value) => {
                dest.copy_from_slice(&value.into_raw().to_be_bytes::<32>()[32 - width..]);
            }
            FieldValue::Bool(value) => {
                dest[0] = *value as u8;
            }
            FieldValue::Address(value) => {
                dest.copy_from_slice(value.as_slice());
            }
            FieldValue::FixedBytes(bytes) => {
                dest.copy_from_slice(bytes);
            }
        }
    }

    /// Read a value of `field_type` from the field's bytes within its word
    pub(crate) fn decode(field_type: FieldType, src: &[u8]) -> FieldValue {
        let width = src.len();
        match field_type {
            FieldType::Uint(_) => {
                let mut word = [0u8; 32];
                word[32 - width..].copy_from_slice(src);
                FieldValue::Uint(U256::from_be_bytes(word))
            }
            FieldType::Int(_) => {
                // Sign extend from the field's top bit
                let fill = if src[0] & 0x80 != 0 { 0xff } else { 0x00 };
                let mut word = [fill; 32];
                word[32 - width..].copy_from_slice(src);
                FieldValue::Int(I256::from_raw(U256::from_be_bytes(word)))
            }
            FieldType::Bool => FieldValue::Bool(src[0] != 0),
            FieldType::Address => FieldValue::Address(Address::from_slice(src)),
            FieldType::FixedBytes(_) => FieldValue::FixedBytes(src.to_vec()),
        }
    }
}

impl From<U256> for FieldValue {
    fn from(value: U256) -> Self {
        FieldValue::Uint(value)
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Uint(U256::from(value))
    }
}

impl From<I256> for FieldValue {
    fn from(value: I256) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i128> for FieldValue {
    fn from(value: i128) -> Self {
        let fill = if value < 0 { 0xff } else { 0x00 };
        let mut word = [fill; 32];
        word[16..].copy_from_slice(&value.to_be_bytes());
        FieldValue::Int(I256::from_raw(U256::from_be_bytes(word)))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<Address> for FieldValue {
    fn from(value: Address) -> Self {
        FieldValue::Address(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn int(value: i128) -> FieldValue {
        FieldValue::from(value)
    }

    #[test]
    fn test_uint_width_is_enforced() {
        assert!(FieldValue::from(255u64).fits(FieldType::Uint(8)));
        assert!(!FieldValue::from(256u64).fits(FieldType::Uint(8)));
        assert!(FieldValue::Uint(U256::MAX).fits(FieldType::Uint(256)));
        assert!(!FieldValue::Uint(U256::MAX).fits(FieldType::Uint(248)));
    }

    #[test]
    fn test_int_range_is_enforced() {
        assert!(int(127).fits(FieldType::Int(8)));
        assert!(int(-128).fits(FieldType::Int(8)));
        assert!(!int(128).fits(FieldType::Int(8)));
        assert!(!int(-129).fits(FieldType::Int(8)));
        assert!(int(i128::MIN).fits(FieldType::Int(128)));
        assert!(!int(i128::MIN).fits(FieldType::Int(120)));
        assert!(!FieldValue::Int(I256::MIN).fits(FieldType::Int(248)));
        assert!(FieldValue::Int(I256::MIN).fits(FieldType::Int(256)));
        assert!(FieldValue::Int(I256::MAX).fits(FieldType::Int(256)));
    }

    #[test]
    fn test_unsupported_width_never_fits() {
        assert!(!int(0).fits(FieldType::Int(0)));
        assert!(!int(-1).fits(FieldType::Int(0)));
        assert!(!FieldValue::from(0u64).fits(FieldType::Uint(0)));
        assert!(!int(0).fits(FieldType::Int(264)));
        assert!(!FieldValue::FixedBytes(alloc::vec![]).fits(FieldType::FixedBytes(0)));
    }

    #[test]
    fn test_variant_must_match_type() {
        assert!(!FieldValue::Bool(true).fits(FieldType::Uint(8)));
        assert!(!FieldValue::from(1u64).fits(FieldType::Bool));
        assert!(!FieldValue::FixedBytes(alloc::vec![1, 2]).fits(FieldType::FixedBytes(4)));
    }

    #[test]
    fn test_negative_int_is_sign_extended() {
        let mut dest = [0u8; 3];
        int(-2).encode_into(&mut dest);
        assert_eq!(dest, [0xff, 0xff, 0xfe]);

        assert_eq!(FieldValue::decode(FieldType::Int(24), &dest), int(-2));
    }

    #[test]
    fn test_int256_extremes() {
        let mut dest = [0u8; 32];
        FieldValue::Int(I256::MIN).encode_into(&mut dest);
        let mut expected = [0u8; 32];
        expected[0] = 0x80;
        assert_eq!(dest, expected);
        assert_eq!(
            FieldValue::decode(FieldType::Int(256), &dest),
            FieldValue::Int(I256::MIN)
        );

        FieldValue::Int(I256::MAX).encode_into(&mut dest);
        let mut expected = [0xffu8; 32];
        expected[0] = 0x7f;
        assert_eq!(dest, expected);
        assert_eq!(
            FieldValue::decode(FieldType::Int(256), &dest),
            FieldValue::Int(I256::MAX)
        );
    }

    #[test]
    fn test_i128_conversion_keeps_sign() {
        assert_eq!(int(-1), FieldValue::Int(I256::MINUS_ONE));
        assert_eq!(int(0), FieldValue::Int(I256::ZERO));
        assert!(matches!(int(i128::MIN), FieldValue::Int(value) if value.is_negative()));
    }

    #[test]
    fn test_uint_is_right_aligned() {
        let mut dest = [0u8; 4];
        FieldValue::from(0x0102u64).encode_into(&mut dest);
        assert_eq!(dest, [0, 0, 1, 2]);
    }
}
