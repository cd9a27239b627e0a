//! ERC-7201 slot derivation
//!
//! `keccak256(abi.encode(uint256(keccak256(id)) - 1)) & ~bytes32(uint256(0xff))`
//!
//! Rehashing the decremented digest keeps a crafted id from landing on a
//! pointer that the sequential layout rule computes for a dynamic array or
//! mapping (`keccak256(p)`). Clearing the low byte reserves 256 words for
//! the namespace's struct.

use core::marker::PhantomData;

use stylus_sdk::alloy_primitives::U256;

use crate::hasher::{Keccak256, SlotHasher};

use super::{NamespaceId, StorageSlot, FORMULA_TAG};

pub struct SlotDeriver<H: SlotHasher = Keccak256> {
    _hasher: PhantomData<H>,
}

impl<H: SlotHasher> SlotDeriver<H> {
    /// Base slot of a namespace. Total: every string maps to a slot.
    pub fn derive(namespace: &NamespaceId) -> StorageSlot {
        Self::derive_str(namespace.as_str())
    }

    /// Hashes every byte of `namespace`, tag included
    pub fn derive_str(namespace: &str) -> StorageSlot {
        let id_hash = H::hash(namespace.as_bytes());

        let decremented = U256::from_be_bytes(id_hash)
            .wrapping_sub(U256::from(1u8))
            .to_be_bytes::<32>();

        let mut slot = H::hash(&decremented);
        slot[31] &= !0xffu8;

        StorageSlot(slot)
    }

    /// Slot named by a `@custom:storage-location` annotation such as
    /// `erc7201:example.main`. Only the id after the tag is hashed, which
    /// gives the values Solidity tooling publishes. `None` for other formulas.
    pub fn derive_annotation(location: &str) -> Option<StorageSlot> {
        location.strip_prefix(FORMULA_TAG).map(Self::derive_str)
    }
}

/// Derive with the pinned keccak hasher
pub fn derive_slot(namespace: &str) -> StorageSlot {
    SlotDeriver::<Keccak256>::derive_str(namespace)
}

/// Read a storage-location annotation with the pinned keccak hasher
pub fn annotation_slot(location: &str) -> Option<StorageSlot> {
    SlotDeriver::<Keccak256>::derive_annotation(location)
}
