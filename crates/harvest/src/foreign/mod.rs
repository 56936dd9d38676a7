//! The foreign (R) side of the marshaling boundary: sentinel encodings,
//! cell representations, and the frame structure bridges produce.

pub mod na;

mod frame;
mod value;

pub use frame::{RColumn, RFrame};
pub use value::{RCell, RType};
