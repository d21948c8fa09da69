//! Narrow interfaces to the collaborators this crate treats as external:
//! the tile registry, the textual trie index, and the scale-stratified
//! spatial index. None of their on-disk formats or matching algorithms are
//! implemented here — only the boundary the retrieval engine calls through.

mod address_index;
mod registry;
mod spatial_index;
mod tile_handle;

pub use address_index::AddressIndex;
pub use registry::TileRegistry;
pub use spatial_index::{CellInterval, ScaleIndexReader, SpatialCoveringProvider};
pub use tile_handle::{ScaleRange, TileHandle};
