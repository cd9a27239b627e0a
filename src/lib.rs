//! Namespaced storage layout for upgradeable contracts (ERC-7201).
//!
//! A module picks a namespace such as `erc7201:acme.Counter`. The namespace is
//! hashed to a base slot, the [`NamespaceRegistry`] checks that no two
//! namespaces of a deployment share that slot, and a [`LayoutHandle`] reads
//! and writes single fields of the struct stored there.

#![cfg_attr(not(test), no_std)]
extern crate alloc;

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: mini_alloc::MiniAlloc = mini_alloc::MiniAlloc::INIT;

pub mod error;
pub mod hasher;
pub mod layout;
pub mod registry;
pub mod slot;
pub mod storage;

pub use error::*;
pub use hasher::*;
pub use layout::*;
pub use registry::*;
pub use slot::*;
pub use storage::*;
