use anyhow::Context;

use crate::external::TileHandle;
use crate::types::{FeatureId, QueryParams};

/// Runs the textual matcher once for a tile, returning every feature the
/// trie reports, sorted for the downstream intersection with the geometry
/// matcher's output. The engine itself never filters by address — it hands
/// the trie matcher an all-pass filter and takes whatever it collects.
pub fn run(handle: &dyn TileHandle, params: &QueryParams) -> anyhow::Result<Vec<FeatureId>> {
	let index = handle
		.open_address_index()
		.with_context(|| format!("TileUnreadable: could not open textual index for {}", handle.tile_id()))?;

	let mut ids = Vec::new();
	index
		.match_query(params, &|_id| true, &mut |id| ids.push(id))
		.with_context(|| format!("MalformedIndex: textual matching failed for {}", handle.tile_id()))?;

	ids.sort_unstable();
	Ok(ids)
}
