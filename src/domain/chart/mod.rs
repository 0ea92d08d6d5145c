//! Chart aggregate: scales, layout and value objects.

pub mod layout;
pub mod scales;
pub mod value_objects;

pub use layout::*;
pub use scales::*;
pub use value_objects::*;
