use anyhow::Context;
use itertools::Itertools;

use crate::external::{SpatialCoveringProvider, TileHandle};
use crate::types::{FeatureId, GeoRect};

/// Runs the spatial matcher once for a tile at a clamped scale, returning
/// every feature found across all covering intervals, sorted and deduplicated
/// (a feature's geometry can straddle more than one covering interval).
pub fn run(
	handle: &dyn TileHandle,
	covering: &dyn SpatialCoveringProvider,
	viewport: &GeoRect,
	desired_scale: f64,
) -> anyhow::Result<Vec<FeatureId>> {
	let scale = handle.scale_range().clamp(desired_scale);

	let index = handle
		.open_spatial_index()
		.with_context(|| format!("TileUnreadable: could not open spatial index for {}", handle.tile_id()))?;

	let mut ids = Vec::new();
	for interval in covering.cover(viewport, scale) {
		index
			.for_each_in_interval_and_scale(&interval, scale, &mut |id| ids.push(id))
			.with_context(|| format!("MalformedIndex: spatial matching failed for {}", handle.tile_id()))?;
	}

	Ok(ids.into_iter().sorted().dedup().collect())
}
