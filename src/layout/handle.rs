//! Field level access to the struct at a namespace's slot.
//!
//! Only the word backing the requested field is loaded or stored, at
//! `slot + word_offset`. A handle holds no storage reference; the substrate is
//! passed to every call, so a handle stays valid across writes elsewhere.

use alloc::string::ToString;

use crate::{
    error::{SlotError, SlotResult, TypeMismatch, UnknownField},
    registry::RegistryEntry,
    require,
    slot::StorageSlot,
    storage::SlotActions,
};

use super::{FieldLayout, FieldValue, LayoutDescriptor};

/// Handle bound to a registered namespace
pub fn view(entry: &RegistryEntry) -> LayoutHandle<'_> {
    LayoutHandle::new(entry.slot, &entry.layout)
}

#[derive(Clone, Copy, Debug)]
pub struct LayoutHandle<'a> {
    slot: StorageSlot,
    layout: &'a LayoutDescriptor,
}

impl<'a> LayoutHandle<'a> {
    pub fn new(slot: StorageSlot, layout: &'a LayoutDescriptor) -> Self {
        LayoutHandle { slot, layout }
    }

    pub fn slot(&self) -> StorageSlot {
        self.slot
    }

    pub fn layout(&self) -> &'a LayoutDescriptor {
        self.layout
    }

    /// Resolve a field to its storage key
    pub fn field(&self, name: &str) -> SlotResult<FieldPointer<'a>> {
        let field = self.layout.field(name).ok_or_else(|| {
            SlotError::UnknownField(UnknownField {
                field: name.to_string(),
            })
        })?;

        Ok(FieldPointer {
            key: self.slot.key_at(field.word_offset),
            field,
        })
    }

    pub fn read<S: SlotActions>(&self, storage: &S, name: &str) -> SlotResult<FieldValue> {
        Ok(self.field(name)?.load(storage))
    }

    pub fn write<S: SlotActions>(
        &self,
        storage: &mut S,
        name: &str,
        value: &FieldValue,
    ) -> SlotResult<()> {
        self.field(name)?.store(storage, value)
    }
}

/// A resolved field: storage key of its word plus its place in that word
#[derive(Clone, Copy, Debug)]
pub struct FieldPointer<'a> {
    key: [u8; 32],
    field: &'a FieldLayout,
}

impl<'a> FieldPointer<'a> {
    pub fn key(&self) -> [u8; 32] {
        self.key
    }

    pub fn layout(&self) -> &'a FieldLayout {
        self.field
    }

    pub fn load<S: SlotActions>(&self, storage: &S) -> FieldValue {
        let word = storage.sload(&self.key);

        FieldValue::decode(self.field.field_type, &word[self.field.byte_range()])
    }

    /// Store `value`. Fields that share their word with others are updated
    /// by read-modify-write, so neighbouring bytes are preserved.
    pub fn store<S: SlotActions>(&self, storage: &mut S, value: &FieldValue) -> SlotResult<()> {
        require!(
            value.fits(self.field.field_type),
            SlotError::TypeMismatch(TypeMismatch {
                field: self.field.name.clone(),
            })
        );

        let mut word = if self.field.is_full_word() {
            [0u8; 32]
        } else {
            storage.sload(&self.key)
        };

        value.encode_into(&mut word[self.field.byte_range()]);

        storage.sstore(&self.key, &word);
        Ok(())
    }
}
