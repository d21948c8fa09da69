use std::fmt::Debug;

use super::tile_handle::TileHandle;

/// The set of map tiles a retrieval runs over. Mirrors the shape of a
/// container registry: a flat collection of handles the engine borrows for
/// the lifetime of the run, opened and owned elsewhere.
pub trait TileRegistry: Debug {
	fn handles(&self) -> Vec<&dyn TileHandle>;
}
