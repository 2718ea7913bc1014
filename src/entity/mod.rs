mod column;
mod constraint;
mod excel;
mod join;
mod native_type;
pub mod prelude;
#[cfg(feature = "table-registry")]
mod registry;
mod table;
mod type_ref;

pub use column::*;
pub use constraint::*;
pub use excel::*;
pub use join::*;
pub use native_type::*;
#[cfg(feature = "table-registry")]
pub use registry::*;
pub use table::*;
pub use type_ref::*;
