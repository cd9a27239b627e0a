//! SSTORE and SLOAD helper. The Stylus host provides storage inside the VM;
//! tests and tooling use an in-memory map.
//!
//! Storage is independent of endian format. Bytes are read in the exact
//! format as they are stored.

use alloc::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
use stylus_sdk::hostio;

use crate::slot::StorageSlot;

/// Word-addressed storage substrate. Unset words read as zero.
pub trait SlotActions {
    fn sstore(&mut self, key: &[u8; 32], value: &[u8; 32]);

    fn sload(&self, key: &[u8; 32]) -> [u8; 32];

    fn sload_at(&self, slot: &StorageSlot, word_offset: u8) -> [u8; 32] {
        self.sload(&slot.key_at(word_offset))
    }

    fn sstore_at(&mut self, slot: &StorageSlot, word_offset: u8, value: &[u8; 32]) {
        self.sstore(&slot.key_at(word_offset), value);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    inner: BTreeMap<[u8; 32], [u8; 32]>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Number of words ever written
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8; 32], &[u8; 32])> {
        self.inner.iter()
    }
}

impl SlotActions for MemoryStorage {
    fn sstore(&mut self, key: &[u8; 32], value: &[u8; 32]) {
        self.inner.insert(*key, *value);
    }

    fn sload(&self, key: &[u8; 32]) -> [u8; 32] {
        *self.inner.get(key).unwrap_or(&[0u8; 32])
    }
}

/// Contract storage of the running Stylus program
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub struct HostStorage;

#[cfg(target_arch = "wasm32")]
impl SlotActions for HostStorage {
    fn sstore(&mut self, key: &[u8; 32], value: &[u8; 32]) {
        unsafe { hostio::storage_store_bytes32(key.as_ptr(), value.as_ptr()) };
    }

    fn sload(&self, key: &[u8; 32]) -> [u8; 32] {
        let mut value = [0u8; 32];
        unsafe { hostio::storage_load_bytes32(key.as_ptr(), value.as_mut_ptr()) };

        value
    }
}
