use alloc::string::ToString;
use core::{fmt, str::FromStr};

use crate::error::{InvalidFieldType, SlotError};

/// Value types a layout field can hold. Every type fits in one word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Unsigned integer of the given bit width
    Uint(u16),

    /// Signed integer of the given bit width, two's complement
    Int(u16),

    Bool,

    Address,

    /// `bytesN`
    FixedBytes(u8),
}

impl FieldType {
    /// Bytes occupied in the word
    pub fn width(&self) -> usize {
        match self {
            FieldType::Uint(bits) | FieldType::Int(bits) => *bits as usize / 8,
            FieldType::Bool => 1,
            FieldType::Address => 20,
            FieldType::FixedBytes(len) => *len as usize,
        }
    }

    pub fn is_supported(&self) -> bool {
        match self {
            FieldType::Uint(bits) => *bits >= 8 && *bits <= 256 && bits % 8 == 0,
            FieldType::Int(bits) => *bits >= 8 && *bits <= 256 && bits % 8 == 0,
            FieldType::Bool | FieldType::Address => true,
            FieldType::FixedBytes(len) => *len >= 1 && *len <= 32,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Uint(bits) => write!(f, "uint{}", bits),
            FieldType::Int(bits) => write!(f, "int{}", bits),
            FieldType::Bool => f.write_str("bool"),
            FieldType::Address => f.write_str("address"),
            FieldType::FixedBytes(len) => write!(f, "bytes{}", len),
        }
    }
}

/// Size suffix of a type name, written the canonical Solidity way: decimal
/// digits only, without a sign or leading zeros
fn parse_size<T: FromStr>(digits: &str) -> Option<T> {
    let canonical = !digits.is_empty()
        && !digits.starts_with('0')
        && digits.bytes().all(|byte| byte.is_ascii_digit());
    if canonical {
        digits.parse().ok()
    } else {
        None
    }
}

/// Parses Solidity type names. `uint` and `int` are the 256 bit aliases.
impl FromStr for FieldType {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            SlotError::InvalidFieldType(InvalidFieldType {
                field: s.to_string(),
            })
        };

        let parsed = match s {
            "bool" => FieldType::Bool,
            "address" => FieldType::Address,
            "uint" => FieldType::Uint(256),
            "int" => FieldType::Int(256),
            _ => {
                if let Some(bits) = s.strip_prefix("uint") {
                    FieldType::Uint(parse_size(bits).ok_or_else(invalid)?)
                } else if let Some(bits) = s.strip_prefix("int") {
                    FieldType::Int(parse_size(bits).ok_or_else(invalid)?)
                } else if let Some(len) = s.strip_prefix("bytes") {
                    FieldType::FixedBytes(parse_size(len).ok_or_else(invalid)?)
                } else {
                    return Err(invalid());
                }
            }
        };

        if parsed.is_supported() {
            Ok(parsed)
        } else {
            Err(invalid())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_solidity_names() {
        assert_eq!("uint256".parse::<FieldType>().unwrap(), FieldType::Uint(256));
        assert_eq!("uint".parse::<FieldType>().unwrap(), FieldType::Uint(256));
        assert_eq!("int64".parse::<FieldType>().unwrap(), FieldType::Int(64));
        assert_eq!("int256".parse::<FieldType>().unwrap(), FieldType::Int(256));
        assert_eq!("int".parse::<FieldType>().unwrap(), FieldType::Int(256));
        assert_eq!("bool".parse::<FieldType>().unwrap(), FieldType::Bool);
        assert_eq!("address".parse::<FieldType>().unwrap(), FieldType::Address);
        assert_eq!("bytes4".parse::<FieldType>().unwrap(), FieldType::FixedBytes(4));
    }

    #[test]
    fn test_reject_unsupported_names() {
        for name in ["uint7", "uint264", "int264", "bytes0", "bytes33", "string", "uintx", ""] {
            assert!(name.parse::<FieldType>().is_err(), "{} should be rejected", name);
        }
    }

    #[test]
    fn test_reject_non_canonical_sizes() {
        for name in ["uint08", "uint+8", "int+16", "int0", "bytes01", "bytes+4", "uint 8", "int-8"] {
            assert!(name.parse::<FieldType>().is_err(), "{} should be rejected", name);
        }
    }

    #[test]
    fn test_display_round_trips_canonical_name() {
        for name in ["uint8", "uint256", "int128", "int256", "bool", "address", "bytes32"] {
            let field_type: FieldType = name.parse().unwrap();
            assert_eq!(alloc::format!("{}", field_type), name);
        }
    }

    #[test]
    fn test_widths() {
        assert_eq!(FieldType::Uint(256).width(), 32);
        assert_eq!(FieldType::Int(24).width(), 3);
        assert_eq!(FieldType::Bool.width(), 1);
        assert_eq!(FieldType::Address.width(), 20);
        assert_eq!(FieldType::FixedBytes(7).width(), 7);
    }
}
