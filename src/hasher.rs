//! The 256-bit hash that slot derivation is pinned to.
//!
//! On the Stylus VM the host's accelerated keccak is used. Everywhere else
//! (tests, build tooling) the same digest is computed with tiny-keccak.

#[cfg(not(target_arch = "wasm32"))]
use tiny_keccak::{Hasher, Keccak};

#[cfg(target_arch = "wasm32")]
use stylus_sdk::hostio;

/// Hash primitive used to derive slots. Swapping it moves every derived slot,
/// so a registry fixes it as a type parameter rather than per call.
pub trait SlotHasher {
    fn hash(bytes: &[u8]) -> [u8; 32];
}

/// Keccak-256, as used by the EVM and the ERC-7201 formula
#[derive(Debug)]
pub struct Keccak256;

#[cfg(not(target_arch = "wasm32"))]
impl SlotHasher for Keccak256 {
    fn hash(bytes: &[u8]) -> [u8; 32] {
        let mut hasher = Keccak::v256();
        hasher.update(bytes);

        let mut output = [0u8; 32];
        hasher.finalize(&mut output);
        output
    }
}

#[cfg(target_arch = "wasm32")]
impl SlotHasher for Keccak256 {
    fn hash(bytes: &[u8]) -> [u8; 32] {
        let mut output = [0u8; 32];
        unsafe { hostio::native_keccak256(bytes.as_ptr(), bytes.len(), output.as_mut_ptr()) };

        output
    }
}
