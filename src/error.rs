use core::fmt::Debug;

use alloy_sol_types::sol;
use stylus_sdk::prelude::*;

use crate::slot::StorageSlot;

sol! {
    // Two distinct namespaces derived the same base slot
    error SlotCollision(bytes32 slot, string registered, string incoming);

    // Namespace registered again with a different layout
    error DuplicateNamespace(string namespace);

    // Field name is not part of the layout
    error UnknownField(string field);

    // Value type or width does not match the field type
    error TypeMismatch(string field);

    // Two fields of one layout share a name
    error DuplicateField(string field);

    // Field name is empty or its type is outside the supported widths
    error InvalidFieldType(string field);

    // Layout needs more words than the 256 reserved below a derived slot
    error LayoutTooLarge(uint256 words);
}

#[derive(SolidityError)]
pub enum SlotError {
    SlotCollision(SlotCollision),
    DuplicateNamespace(DuplicateNamespace),
    UnknownField(UnknownField),
    TypeMismatch(TypeMismatch),
    DuplicateField(DuplicateField),
    InvalidFieldType(InvalidFieldType),
    LayoutTooLarge(LayoutTooLarge),
}

impl Debug for SlotError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SlotError::SlotCollision(e) => write!(
                f,
                "SlotCollision {{ slot: {}, registered: {:?}, incoming: {:?} }}",
                StorageSlot(e.slot),
                e.registered,
                e.incoming
            ),
            SlotError::DuplicateNamespace(e) => {
                write!(f, "DuplicateNamespace({:?})", e.namespace)
            }
            SlotError::UnknownField(e) => write!(f, "UnknownField({:?})", e.field),
            SlotError::TypeMismatch(e) => write!(f, "TypeMismatch({:?})", e.field),
            SlotError::DuplicateField(e) => write!(f, "DuplicateField({:?})", e.field),
            SlotError::InvalidFieldType(e) => write!(f, "InvalidFieldType({:?})", e.field),
            SlotError::LayoutTooLarge(e) => write!(f, "LayoutTooLarge({})", e.words),
        }
    }
}

pub type SlotResult<T, E = SlotError> = core::result::Result<T, E>;

#[macro_export]
macro_rules! require {
    ($invariant:expr, $error:expr) => {
        if !$invariant {
            return Err($error);
        }
    };
}
