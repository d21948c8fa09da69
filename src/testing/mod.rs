//! In-memory stand-ins for the external collaborators, used by this crate's
//! own unit and integration tests. Not part of the public contract for
//! production use, but exported so downstream crates can reuse them in their
//! own tests the same way they'd stub any other narrow trait.

mod mock_registry;
mod mock_spatial_covering;
mod mock_tile_handle;
mod vec_sink;

pub use mock_registry::MockTileRegistry;
pub use mock_spatial_covering::MockSpatialCoveringProvider;
pub use mock_tile_handle::MockTileHandle;
pub use vec_sink::VecSink;
