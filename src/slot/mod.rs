pub mod deriver;
pub mod namespace;
pub mod storage_slot;

pub use deriver::*;
pub use namespace::*;
pub use storage_slot::*;
