use std::f64::consts::SQRT_2;

use anyhow::Result;

use crate::bucket::TileBucket;
use crate::external::{SpatialCoveringProvider, TileRegistry};
use crate::matchers;
use crate::sink::ResultSink;
use crate::types::{GeoRect, Limits, QueryParams};

/// Coordinates the progressive viewport expansion across every admitted
/// tile. Built once per retrieval via [`RetrievalController::init`] and run
/// to completion with [`RetrievalController::run`].
#[derive(Debug)]
pub struct RetrievalController<'r> {
	base_viewport: GeoRect,
	params: QueryParams,
	limits: Limits,
	covering: &'r dyn SpatialCoveringProvider,
	buckets: Vec<TileBucket<'r>>,
}

impl<'r> RetrievalController<'r> {
	/// Admits every alive tile that has both a textual and a spatial index.
	/// Tiles that fail admission are skipped silently from the caller's
	/// perspective (logged at debug level) and never appear in results.
	#[must_use]
	pub fn init(
		registry: &'r dyn TileRegistry,
		covering: &'r dyn SpatialCoveringProvider,
		base_viewport: GeoRect,
		params: QueryParams,
		limits: Limits,
	) -> RetrievalController<'r> {
		let buckets = registry
			.handles()
			.into_iter()
			.filter_map(|handle| {
				if handle.is_alive() && handle.has_textual_index() && handle.has_spatial_index() {
					Some(TileBucket::new(handle))
				} else {
					log::debug!(
						"tile admission skipped for {}: alive={} textual_index={} spatial_index={}",
						handle.tile_id(),
						handle.is_alive(),
						handle.has_textual_index(),
						handle.has_spatial_index()
					);
					None
				}
			})
			.collect();

		RetrievalController { base_viewport, params, limits, covering, buckets }
	}

	/// Runs the expansion loop to completion, reporting every tile with a
	/// non-empty final intersection to `sink` exactly once.
	pub fn run(&mut self, sink: &mut dyn ResultSink) -> Result<()> {
		let mut viewport_scale = 1.0_f64;

		loop {
			let clamped_scale = match self.limits.max_viewport_scale() {
				Some(max) => viewport_scale.min(max),
				None => viewport_scale,
			};
			log::trace!("expansion iteration: raw_scale={viewport_scale}, clamped_scale={clamped_scale}");

			let viewport = self.base_viewport.scaled_about_center(viewport_scale);
			self.run_pass(&viewport, sink)?;

			if self.all_buckets_covered() || self.termination_satisfied(viewport_scale) {
				break;
			}

			viewport_scale *= SQRT_2;
		}

		self.finish_remaining_buckets(sink);
		Ok(())
	}

	fn run_pass(&mut self, viewport: &GeoRect, sink: &mut dyn ResultSink) -> Result<()> {
		for bucket in &mut self.buckets {
			if bucket.finished() || bucket.covered_by_viewport() {
				continue;
			}
			if !viewport.intersects(&bucket.bounds()) {
				continue;
			}

			let first_contact = !bucket.has_address_features();
			if first_contact {
				let ids = matchers::address::run(bucket.handle(), &self.params)?;
				bucket.record_address_features(ids);
			}

			let desired_scale = self.params.scale_hint.unwrap_or(1.0);
			let geometry_ids = matchers::geometry::run(bucket.handle(), self.covering, viewport, desired_scale)?;
			bucket.recompute_intersection(&geometry_ids);

			if first_contact {
				log::debug!("tile {} entered Intersecting, intersection size {}", bucket.tile_id(), bucket.intersection().len());
			}

			if viewport.contains(&bucket.bounds()) {
				bucket.mark_covered();
				log::debug!("tile {} entered Covered, intersection size {}", bucket.tile_id(), bucket.intersection().len());

				let tile_id = bucket.tile_id();
				let intersection_len = bucket.intersection().len();
				if bucket.mark_finished() {
					sink.on_tile_processed(tile_id, bucket.intersection());
				}
				log::debug!("tile {tile_id} entered Finished, intersection size {intersection_len}");
			}
		}
		Ok(())
	}

	fn all_buckets_covered(&self) -> bool {
		self.buckets.iter().all(TileBucket::covered_by_viewport)
	}

	/// Checks the scale-limit and feature-count termination policies, in that
	/// order. Either can end the loop independently of full coverage.
	fn termination_satisfied(&self, viewport_scale: f64) -> bool {
		if let Some(max_scale) = self.limits.max_viewport_scale() {
			if viewport_scale >= max_scale {
				return true;
			}
		}
		if let Some(min_features) = self.limits.min_num_features() {
			// An unset minimum plays no role (handled above); a set minimum of
			// zero is satisfied trivially and must not stop the loop early —
			// only a positive threshold that's actually been reached can.
			let total: u64 = self.buckets.iter().map(|b| b.intersection().len() as u64).sum();
			if min_features > 0 && total >= min_features {
				return true;
			}
		}
		false
	}

	fn finish_remaining_buckets(&mut self, sink: &mut dyn ResultSink) {
		for bucket in &mut self.buckets {
			if bucket.finished() {
				continue;
			}
			let tile_id = bucket.tile_id();
			let intersection_len = bucket.intersection().len();
			if bucket.mark_finished() {
				sink.on_tile_processed(tile_id, bucket.intersection());
			}
			log::debug!("tile {tile_id} entered Finished, intersection size {intersection_len}");
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{MockSpatialCoveringProvider, MockTileHandle, MockTileRegistry, VecSink};
	use crate::types::FeatureId;

	fn params() -> QueryParams {
		QueryParams::from_text("cafe")
	}

	#[test]
	fn tiles_outside_final_scale_are_never_reported() {
		let far_tile = MockTileHandle::new(1)
			.with_bounds(GeoRect::new(100.0, 100.0, 101.0, 101.0).unwrap())
			.with_address_features(vec![FeatureId::new(1)])
			.with_geometry_features(vec![FeatureId::new(1)]);
		let registry = MockTileRegistry::new(vec![Box::new(far_tile)]);
		let covering = MockSpatialCoveringProvider::single_interval();
		let base_viewport = GeoRect::new(0.0, 0.0, 1.0, 1.0).unwrap();
		let limits = Limits::new().with_max_viewport_scale(2.0);

		let mut controller = RetrievalController::init(&registry, &covering, base_viewport, params(), limits);
		let mut sink = VecSink::new();
		controller.run(&mut sink).unwrap();

		assert!(sink.calls.is_empty());
	}

	#[test]
	fn matching_tile_inside_viewport_is_reported_once_covered() {
		let tile = MockTileHandle::new(1)
			.with_bounds(GeoRect::new(0.0, 0.0, 1.0, 1.0).unwrap())
			.with_address_features(vec![FeatureId::new(1), FeatureId::new(2)])
			.with_geometry_features(vec![FeatureId::new(2), FeatureId::new(3)]);
		let registry = MockTileRegistry::new(vec![Box::new(tile)]);
		let covering = MockSpatialCoveringProvider::single_interval();
		let base_viewport = GeoRect::new(0.0, 0.0, 1.0, 1.0).unwrap();

		let mut controller = RetrievalController::init(&registry, &covering, base_viewport, params(), Limits::new());
		let mut sink = VecSink::new();
		controller.run(&mut sink).unwrap();

		assert_eq!(sink.calls.len(), 1);
		assert_eq!(sink.calls[0].1, vec![FeatureId::new(2)]);
	}

	#[test]
	fn non_admitted_tiles_are_never_reported() {
		let dead_tile = MockTileHandle::new(1).dead();
		let no_textual = MockTileHandle::new(2).without_textual_index();
		let no_spatial = MockTileHandle::new(3).without_spatial_index();
		let registry = MockTileRegistry::new(vec![Box::new(dead_tile), Box::new(no_textual), Box::new(no_spatial)]);
		let covering = MockSpatialCoveringProvider::single_interval();
		let base_viewport = GeoRect::new(0.0, 0.0, 1.0, 1.0).unwrap();

		let mut controller = RetrievalController::init(
			&registry,
			&covering,
			base_viewport,
			params(),
			Limits::new().with_max_viewport_scale(1.0),
		);
		let mut sink = VecSink::new();
		controller.run(&mut sink).unwrap();

		assert!(sink.calls.is_empty());
	}

	#[test]
	fn min_feature_count_stops_expansion_early() {
		let tile = MockTileHandle::new(1)
			.with_bounds(GeoRect::new(-50.0, -50.0, 50.0, 50.0).unwrap())
			.with_address_features(vec![FeatureId::new(1)])
			.with_geometry_features(vec![FeatureId::new(1)]);
		let registry = MockTileRegistry::new(vec![Box::new(tile)]);
		let covering = MockSpatialCoveringProvider::single_interval();
		let base_viewport = GeoRect::new(0.0, 0.0, 1.0, 1.0).unwrap();
		let limits = Limits::new().with_min_num_features(1);

		let mut controller = RetrievalController::init(&registry, &covering, base_viewport, params(), limits);
		let mut sink = VecSink::new();
		controller.run(&mut sink).unwrap();

		assert_eq!(sink.calls.len(), 1);
		assert_eq!(sink.calls[0].1, vec![FeatureId::new(1)]);
	}

	#[test]
	fn zero_min_feature_count_never_triggers_termination() {
		let tile = MockTileHandle::new(1).with_bounds(GeoRect::new(-50.0, -50.0, 50.0, 50.0).unwrap());
		let registry = MockTileRegistry::new(vec![Box::new(tile)]);
		let covering = MockSpatialCoveringProvider::single_interval();
		let base_viewport = GeoRect::new(0.0, 0.0, 1.0, 1.0).unwrap();
		let limits = Limits::new().with_min_num_features(0);

		let controller = RetrievalController::init(&registry, &covering, base_viewport, params(), limits);

		// an empty aggregate intersection (0 features) satisfies `total >= 0`
		// trivially; a zero minimum must be treated as no constraint rather
		// than an instantly-met one.
		assert!(!controller.termination_satisfied(1.0));
	}

	#[test]
	fn two_tiles_with_zero_min_feature_count_both_reach_full_coverage() {
		let near = MockTileHandle::new(1)
			.with_bounds(GeoRect::new(-0.5, -0.5, 0.5, 0.5).unwrap())
			.with_address_features(vec![FeatureId::new(1)])
			.with_geometry_features(vec![FeatureId::new(1)]);
		let distant = MockTileHandle::new(2)
			.with_bounds(GeoRect::new(2.5, -0.5, 3.5, 0.5).unwrap())
			.with_address_features(vec![FeatureId::new(2)])
			.with_geometry_features(vec![FeatureId::new(2)]);
		let registry = MockTileRegistry::new(vec![Box::new(near), Box::new(distant)]);
		let covering = MockSpatialCoveringProvider::single_interval();
		let base_viewport = GeoRect::new(-1.0, -1.0, 1.0, 1.0).unwrap();
		let limits = Limits::new().with_min_num_features(0);

		let mut controller = RetrievalController::init(&registry, &covering, base_viewport, params(), limits);
		let mut sink = VecSink::new();
		controller.run(&mut sink).unwrap();

		assert_eq!(sink.calls.len(), 2, "the distant tile must still be reached, not skipped by a zero minimum");
	}
}
