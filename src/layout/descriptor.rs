//! Layout of the struct stored at a namespace's slot.
//!
//! Fields are packed in declaration order. A field goes into the low-order
//! free bytes of the current word, and starts a new word when it does not fit
//! in what is left. This is the Solidity packing rule for value types, so a
//! layout built here addresses the same bytes as the equivalent Solidity
//! struct.

use alloc::{format, string::String, vec::Vec};
use core::ops::Range;

use stylus_sdk::alloy_primitives::U256;

use crate::{
    error::{DuplicateField, InvalidFieldType, LayoutTooLarge, SlotError, SlotResult},
    require,
    slot::RESERVED_WORDS,
};

use super::FieldType;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: String,

    pub field_type: FieldType,

    /// Word index relative to the base slot
    pub word_offset: u8,

    /// Bytes between the field and the low-order end of its word
    pub byte_offset: u8,
}

impl FieldLayout {
    pub fn width(&self) -> usize {
        self.field_type.width()
    }

    /// Index range of the field within the big endian word
    pub fn byte_range(&self) -> Range<usize> {
        let end = 32 - self.byte_offset as usize;
        end - self.width()..end
    }

    pub fn is_full_word(&self) -> bool {
        self.width() == 32
    }
}

/// Immutable once built. A changed schema needs a new namespace.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutDescriptor {
    fields: Vec<FieldLayout>,
    word_count: usize,
}

impl LayoutDescriptor {
    pub fn builder() -> LayoutBuilder {
        LayoutBuilder::default()
    }

    pub fn fields(&self) -> &[FieldLayout] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldLayout> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Number of words the layout spans, starting at the base slot
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// One line per field: `name type @ word+byte`
    pub fn describe(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|field| {
                format!(
                    "{} {} @ {}+{}",
                    field.name, field.field_type, field.word_offset, field.byte_offset
                )
            })
            .collect()
    }
}

#[derive(Default)]
pub struct LayoutBuilder {
    fields: Vec<(String, FieldType)>,
}

impl LayoutBuilder {
    pub fn field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.push((name.into(), field_type));
        self
    }

    pub fn build(self) -> SlotResult<LayoutDescriptor> {
        let mut fields: Vec<FieldLayout> = Vec::with_capacity(self.fields.len());
        let mut word = 0usize;
        let mut used = 0usize;

        for (name, field_type) in self.fields {
            require!(
                !name.is_empty() && field_type.is_supported(),
                SlotError::InvalidFieldType(InvalidFieldType { field: name })
            );
            require!(
                fields.iter().all(|field| field.name != name),
                SlotError::DuplicateField(DuplicateField { field: name })
            );

            let width = field_type.width();
            if used + width > 32 {
                word += 1;
                used = 0;
            }

            let word_count = word + 1;
            require!(
                word_count <= RESERVED_WORDS,
                SlotError::LayoutTooLarge(LayoutTooLarge {
                    words: U256::from(word_count),
                })
            );

            fields.push(FieldLayout {
                name,
                field_type,
                word_offset: word as u8,
                byte_offset: used as u8,
            });
            used += width;
        }

        let word_count = if fields.is_empty() { 0 } else { word + 1 };

        Ok(LayoutDescriptor { fields, word_count })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_small_fields_share_a_word() {
        let layout = LayoutDescriptor::builder()
            .field("owner", FieldType::Address)
            .field("paused", FieldType::Bool)
            .field("version", FieldType::Uint(64))
            .build()
            .unwrap();

        assert_eq!(layout.word_count(), 1);

        let owner = layout.field("owner").unwrap();
        assert_eq!((owner.word_offset, owner.byte_offset), (0, 0));
        assert_eq!(owner.byte_range(), 12..32);

        let paused = layout.field("paused").unwrap();
        assert_eq!((paused.word_offset, paused.byte_offset), (0, 20));
        assert_eq!(paused.byte_range(), 11..12);

        let version = layout.field("version").unwrap();
        assert_eq!((version.word_offset, version.byte_offset), (0, 21));
        assert_eq!(version.byte_range(), 3..11);
    }

    #[test]
    fn test_field_that_does_not_fit_starts_a_new_word() {
        let layout = LayoutDescriptor::builder()
            .field("flag", FieldType::Bool)
            .field("total", FieldType::Uint(256))
            .field("small", FieldType::Uint(8))
            .build()
            .unwrap();

        assert_eq!(layout.word_count(), 3);
        assert_eq!(layout.field("flag").unwrap().word_offset, 0);

        let total = layout.field("total").unwrap();
        assert_eq!((total.word_offset, total.byte_offset), (1, 0));
        assert!(total.is_full_word());

        let small = layout.field("small").unwrap();
        assert_eq!((small.word_offset, small.byte_offset), (2, 0));
    }

    #[test]
    fn test_empty_layout() {
        let layout = LayoutDescriptor::builder().build().unwrap();

        assert!(layout.is_empty());
        assert_eq!(layout.word_count(), 0);
    }

    #[test]
    fn test_duplicate_field_is_rejected() {
        let result = LayoutDescriptor::builder()
            .field("count", FieldType::Uint(256))
            .field("count", FieldType::Uint(128))
            .build();

        assert!(matches!(result, Err(SlotError::DuplicateField(_))));
    }

    #[test]
    fn test_unsupported_field_type_is_rejected() {
        let result = LayoutDescriptor::builder()
            .field("odd", FieldType::Uint(12))
            .build();
        assert!(matches!(result, Err(SlotError::InvalidFieldType(_))));

        let result = LayoutDescriptor::builder()
            .field("", FieldType::Bool)
            .build();
        assert!(matches!(result, Err(SlotError::InvalidFieldType(_))));
    }

    #[test]
    fn test_layout_fills_reserved_region() {
        let mut builder = LayoutDescriptor::builder();
        for index in 0..RESERVED_WORDS {
            builder = builder.field(alloc::format!("word{}", index), FieldType::Uint(256));
        }
        let layout = builder.build().unwrap();

        assert_eq!(layout.word_count(), RESERVED_WORDS);
        assert_eq!(layout.field("word255").unwrap().word_offset, 255);
    }

    #[test]
    fn test_layout_beyond_reserved_region_is_rejected() {
        let mut builder = LayoutDescriptor::builder();
        for index in 0..=RESERVED_WORDS {
            builder = builder.field(alloc::format!("word{}", index), FieldType::Uint(256));
        }

        assert!(matches!(
            builder.build(),
            Err(SlotError::LayoutTooLarge(_))
        ));
    }

    #[test]
    fn test_describe() {
        let layout = LayoutDescriptor::builder()
            .field("count", FieldType::Uint(256))
            .build()
            .unwrap();

        assert_eq!(layout.describe(), alloc::vec!["count uint256 @ 0+0"]);
    }
}
