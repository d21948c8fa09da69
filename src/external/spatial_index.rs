use std::fmt::Debug;

use crate::types::{FeatureId, GeoRect};

/// A contiguous range of cells in whatever linearization the spatial index
/// uses internally (a Hilbert or Z-order range, a quadtree node span, etc).
/// Opaque outside the covering provider that produces it and the scale index
/// reader that consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellInterval {
	pub lo: u64,
	pub hi: u64,
}

/// Computes the set of spatial-index cell ranges that cover a viewport at a
/// given scale. Shared across every tile — unlike the textual and spatial
/// indexes, this collaborator carries no per-tile state, so the controller
/// holds one instance for the whole run rather than opening it per tile.
pub trait SpatialCoveringProvider: Debug {
	fn cover(&self, viewport: &GeoRect, scale: f64) -> Vec<CellInterval>;
}

/// A tile's opened spatial index, stratified by scale.
pub trait ScaleIndexReader: Debug {
	/// Invokes `collector` once per feature whose geometry falls in
	/// `interval` at `scale`. Scale has already been clamped to the tile's
	/// [`crate::external::ScaleRange`] by the caller.
	fn for_each_in_interval_and_scale(
		&self,
		interval: &CellInterval,
		scale: f64,
		collector: &mut dyn FnMut(FeatureId),
	) -> anyhow::Result<()>;
}
