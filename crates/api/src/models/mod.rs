pub mod document;
pub mod layer;
pub mod ows;
pub mod raw;
pub mod tile_matrix;

pub use document::*;
pub use layer::*;
pub use ows::*;
pub use raw::{RawNode, TEXT_KEY, to_sequence};
pub use tile_matrix::*;
