use core::fmt;

use stylus_sdk::alloy_primitives::{B256, U256};

/// Number of words reserved below a derived slot. The low byte of a derived
/// slot is cleared, so offsets 0..=255 never leave the namespace's region.
pub const RESERVED_WORDS: usize = 256;

/// A 256-bit storage address, big endian as the EVM stores it.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StorageSlot(pub [u8; 32]);

impl StorageSlot {
    pub const ZERO: StorageSlot = StorageSlot([0u8; 32]);

    pub const fn new(bytes: [u8; 32]) -> Self {
        StorageSlot(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_b256(&self) -> B256 {
        B256::from(self.0)
    }

    pub fn to_u256(&self) -> U256 {
        U256::from_be_bytes(self.0)
    }

    /// Slot keys with the low byte cleared leave room for a 256 word layout
    pub fn is_aligned(&self) -> bool {
        self.0[31] == 0
    }

    /// Storage key of the word `word_offset` words above this slot
    pub fn key_at(&self, word_offset: u8) -> [u8; 32] {
        self.to_u256()
            .wrapping_add(U256::from(word_offset))
            .to_be_bytes::<32>()
    }
}

impl From<B256> for StorageSlot {
    fn from(value: B256) -> Self {
        StorageSlot(value.0)
    }
}

impl From<StorageSlot> for B256 {
    fn from(value: StorageSlot) -> Self {
        value.to_b256()
    }
}

impl fmt::Display for StorageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for StorageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StorageSlot({})", self)
    }
}
