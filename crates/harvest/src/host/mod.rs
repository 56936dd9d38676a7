//! The host side of the marshaling boundary: typed values with a
//! canonical missing marker, columns, and tables.

mod column;
mod table;
mod types;
mod value;

pub use column::Column;
pub use table::Table;
pub use types::DataType;
pub use value::Value;
