use std::cmp::Ordering;

use crate::external::TileHandle;
use crate::types::{FeatureId, GeoRect, TileId};

/// A tile's progress through the retrieval loop. Moves strictly forward:
/// `Fresh` tiles have never been matched, `Intersecting` tiles have a cached
/// address match and a viewport that has touched their bounds at least once,
/// `Covered` tiles have a viewport that fully contains their bounds and take
/// no further passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Progress {
	Fresh,
	Intersecting,
	Covered,
}

/// Per-tile state the controller threads through the expansion loop: the
/// cached address match (computed once, on first touch), the most recent
/// geometry match, their intersection, and whether this tile has already
/// been reported to the sink.
#[derive(Debug)]
pub struct TileBucket<'r> {
	handle: &'r dyn TileHandle,
	bounds: GeoRect,
	address_features: Option<Vec<FeatureId>>,
	intersection: Vec<FeatureId>,
	progress: Progress,
	finished: bool,
}

impl<'r> TileBucket<'r> {
	#[must_use]
	pub fn new(handle: &'r dyn TileHandle) -> TileBucket<'r> {
		TileBucket {
			bounds: handle.bounds(),
			handle,
			address_features: None,
			intersection: Vec::new(),
			progress: Progress::Fresh,
			finished: false,
		}
	}

	#[must_use]
	pub fn tile_id(&self) -> TileId {
		self.handle.tile_id()
	}

	#[must_use]
	pub fn handle(&self) -> &'r dyn TileHandle {
		self.handle
	}

	#[must_use]
	pub fn bounds(&self) -> GeoRect {
		self.bounds
	}

	#[must_use]
	pub fn has_address_features(&self) -> bool {
		self.address_features.is_some()
	}

	#[must_use]
	pub fn covered_by_viewport(&self) -> bool {
		self.progress == Progress::Covered
	}

	#[must_use]
	pub fn finished(&self) -> bool {
		self.finished
	}

	#[must_use]
	pub fn intersection(&self) -> &[FeatureId] {
		&self.intersection
	}

	/// Caches the address match result. Called at most once per bucket, the
	/// first time the viewport touches this tile's bounds.
	pub fn record_address_features(&mut self, ids: Vec<FeatureId>) {
		debug_assert!(!self.finished, "address features recorded on a finished bucket");
		self.address_features = Some(ids);
		self.progress = Progress::Intersecting;
	}

	/// Recomputes the intersection against a fresh geometry match.
	pub fn recompute_intersection(&mut self, geometry_features: &[FeatureId]) {
		debug_assert!(!self.finished, "intersection recomputed on a finished bucket");
		let address = self.address_features.as_deref().unwrap_or(&[]);
		self.intersection = sorted_intersection(address, geometry_features);
	}

	/// Marks the tile as fully covered by the current viewport; no further
	/// passes will touch it.
	pub fn mark_covered(&mut self) {
		debug_assert!(!self.finished, "bucket marked covered after it finished");
		self.progress = Progress::Covered;
	}

	/// Marks this bucket as finished, returning whether its final
	/// intersection is non-empty (the sink is only invoked for non-empty
	/// results).
	pub fn mark_finished(&mut self) -> bool {
		debug_assert!(!self.finished, "bucket finished twice");
		self.finished = true;
		!self.intersection.is_empty()
	}
}

/// Intersection of two already-sorted, deduplicated id lists.
fn sorted_intersection(a: &[FeatureId], b: &[FeatureId]) -> Vec<FeatureId> {
	let mut result = Vec::new();
	let (mut i, mut j) = (0, 0);
	while i < a.len() && j < b.len() {
		match a[i].cmp(&b[j]) {
			Ordering::Less => i += 1,
			Ordering::Greater => j += 1,
			Ordering::Equal => {
				result.push(a[i]);
				i += 1;
				j += 1;
			}
		}
	}
	result
}
