use crate::sink::ResultSink;
use crate::types::{FeatureId, TileId};

/// Records every call in order, for assertions on exactly-once delivery and
/// ordering.
#[derive(Debug, Default)]
pub struct VecSink {
	pub calls: Vec<(TileId, Vec<FeatureId>)>,
}

impl VecSink {
	#[must_use]
	pub fn new() -> VecSink {
		VecSink::default()
	}

	#[must_use]
	pub fn tile_ids(&self) -> Vec<TileId> {
		self.calls.iter().map(|(id, _)| *id).collect()
	}
}

impl ResultSink for VecSink {
	fn on_tile_processed(&mut self, tile_id: TileId, feature_ids: &[FeatureId]) {
		self.calls.push((tile_id, feature_ids.to_vec()));
	}
}
