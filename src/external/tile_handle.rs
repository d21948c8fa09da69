use std::fmt::Debug;

use super::address_index::AddressIndex;
use super::spatial_index::ScaleIndexReader;
use crate::types::{GeoRect, TileId};

/// The range of map scales a tile's spatial index actually covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRange {
	pub min: f64,
	pub max: f64,
}

impl ScaleRange {
	#[must_use]
	pub fn new(min: f64, max: f64) -> ScaleRange {
		ScaleRange { min, max }
	}

	/// Clamps a desired scale into this range.
	#[must_use]
	pub fn clamp(&self, scale: f64) -> f64 {
		scale.clamp(self.min, self.max)
	}
}

/// One tile in the registry, and the entry point to its textual and spatial
/// indexes. A tile the registry hands out may be half-written or mid-eviction;
/// [`TileHandle::is_alive`] is the admission check the controller runs before
/// ever calling the `open_*` methods.
pub trait TileHandle: Debug {
	fn tile_id(&self) -> TileId;

	/// False if the tile has been evicted, is mid-write, or is otherwise not
	/// safe to read. A dead handle must not be opened.
	fn is_alive(&self) -> bool;

	fn bounds(&self) -> GeoRect;

	fn scale_range(&self) -> ScaleRange;

	fn has_textual_index(&self) -> bool;

	fn has_spatial_index(&self) -> bool;

	/// Opens the textual index section. Only valid to call when
	/// [`TileHandle::has_textual_index`] is true.
	fn open_address_index(&self) -> anyhow::Result<Box<dyn AddressIndex + '_>>;

	/// Opens the spatial index section. Only valid to call when
	/// [`TileHandle::has_spatial_index`] is true.
	fn open_spatial_index(&self) -> anyhow::Result<Box<dyn ScaleIndexReader + '_>>;
}
