pub mod descriptor;
pub mod field_type;
pub mod handle;
pub mod value;

pub use descriptor::*;
pub use field_type::*;
pub use handle::*;
pub use value::*;
