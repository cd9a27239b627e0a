//! Table of the namespaces used by one deployment.
//!
//! Registration is append only. A namespace moves from unregistered to
//! registered and stays there; entries are never changed or removed.
//! Every failed `register` leaves the table exactly as it was.

use alloc::{collections::BTreeMap, string::ToString, vec::Vec};
use core::marker::PhantomData;

use tracing::{debug, warn};

use crate::{
    error::{DuplicateNamespace, SlotCollision, SlotError, SlotResult},
    hasher::{Keccak256, SlotHasher},
    layout::LayoutDescriptor,
    require,
    slot::{lint_namespace, NamespaceId, NamespaceLint, SlotDeriver, StorageSlot},
};

/// Receives naming lints for each newly registered namespace
pub type LintHook = fn(&NamespaceId, NamespaceLint);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryEntry {
    pub namespace: NamespaceId,
    pub slot: StorageSlot,
    pub layout: LayoutDescriptor,
}

#[derive(Debug)]
pub struct NamespaceRegistry<H: SlotHasher = Keccak256> {
    /// In insertion order
    entries: Vec<RegistryEntry>,
    by_namespace: BTreeMap<NamespaceId, usize>,
    by_slot: BTreeMap<StorageSlot, usize>,
    lint_hook: LintHook,
    _hasher: PhantomData<H>,
}

fn log_lint(namespace: &NamespaceId, lint: NamespaceLint) {
    warn!(namespace = %namespace, "{}", lint);
}

impl<H: SlotHasher> Default for NamespaceRegistry<H> {
    fn default() -> Self {
        NamespaceRegistry {
            entries: Vec::new(),
            by_namespace: BTreeMap::new(),
            by_slot: BTreeMap::new(),
            lint_hook: log_lint,
            _hasher: PhantomData,
        }
    }
}

impl<H: SlotHasher> NamespaceRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default hook, which logs each lint as a warning
    pub fn with_lint_hook(mut self, lint_hook: LintHook) -> Self {
        self.lint_hook = lint_hook;
        self
    }

    /// Register a namespace with its layout.
    ///
    /// Registering the same namespace with an identical layout returns the
    /// existing entry.
    ///
    /// # Errors
    ///
    /// * `DuplicateNamespace` - The namespace is registered with another layout
    /// * `SlotCollision` - Another namespace already derived the same slot
    pub fn register(
        &mut self,
        namespace: impl Into<NamespaceId>,
        layout: LayoutDescriptor,
    ) -> SlotResult<&RegistryEntry> {
        let namespace = namespace.into();

        if let Some(index) = self.by_namespace.get(&namespace).copied() {
            require!(
                self.entries[index].layout == layout,
                SlotError::DuplicateNamespace(DuplicateNamespace {
                    namespace: namespace.to_string(),
                })
            );
            return Ok(&self.entries[index]);
        }

        let slot = SlotDeriver::<H>::derive(&namespace);
        if let Some(index) = self.by_slot.get(&slot).copied() {
            return Err(SlotError::SlotCollision(SlotCollision {
                slot: slot.0,
                registered: self.entries[index].namespace.to_string(),
                incoming: namespace.to_string(),
            }));
        }

        for lint in lint_namespace(&namespace) {
            (self.lint_hook)(&namespace, lint);
        }

        debug!(
            namespace = %namespace,
            slot = %slot,
            words = layout.word_count(),
            "registered namespace"
        );

        let index = self.entries.len();
        self.by_namespace.insert(namespace.clone(), index);
        self.by_slot.insert(slot, index);
        self.entries.push(RegistryEntry {
            namespace,
            slot,
            layout,
        });

        Ok(&self.entries[index])
    }

    pub fn lookup(&self, namespace: &str) -> Option<&RegistryEntry> {
        self.by_namespace
            .get(namespace)
            .map(|index| &self.entries[*index])
    }

    /// Which namespace owns a base slot
    pub fn lookup_slot(&self, slot: &StorageSlot) -> Option<&RegistryEntry> {
        self.by_slot.get(slot).map(|index| &self.entries[*index])
    }

    /// Entries in registration order. Call again to restart.
    pub fn all(&self) -> impl Iterator<Item = &RegistryEntry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
