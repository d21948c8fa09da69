use crate::types::{FeatureId, TileId};

/// Receives each tile's final result exactly once, in the order the
/// controller finishes with that tile.
pub trait ResultSink {
	fn on_tile_processed(&mut self, tile_id: TileId, feature_ids: &[FeatureId]);
}

impl<F> ResultSink for F
where
	F: FnMut(TileId, &[FeatureId]),
{
	fn on_tile_processed(&mut self, tile_id: TileId, feature_ids: &[FeatureId]) {
		self(tile_id, feature_ids)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn closure_implements_result_sink() {
		let mut seen = Vec::new();
		{
			let mut sink = |tile_id: TileId, ids: &[FeatureId]| seen.push((tile_id, ids.to_vec()));
			sink.on_tile_processed(TileId::new(1), &[FeatureId::new(7)]);
		}
		assert_eq!(seen, vec![(TileId::new(1), vec![FeatureId::new(7)])]);
	}
}
