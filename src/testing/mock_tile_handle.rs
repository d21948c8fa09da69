use crate::external::{AddressIndex, CellInterval, ScaleIndexReader, ScaleRange, TileHandle};
use crate::types::{FeatureId, GeoRect, QueryParams, TileId};

/// A stand-in tile whose "indexes" are just fixed feature-id lists supplied
/// by the test. Bounds default to the unit square and scale range to
/// unrestricted; override whichever fields the scenario under test cares
/// about.
#[derive(Debug)]
pub struct MockTileHandle {
	id: TileId,
	alive: bool,
	bounds: GeoRect,
	scale_range: ScaleRange,
	has_textual_index: bool,
	has_spatial_index: bool,
	address_features: Vec<FeatureId>,
	address_error: Option<String>,
	geometry_features: Vec<FeatureId>,
	geometry_error: Option<String>,
}

impl MockTileHandle {
	#[must_use]
	pub fn new(id: u64) -> MockTileHandle {
		MockTileHandle {
			id: TileId::new(id),
			alive: true,
			bounds: GeoRect::new(0.0, 0.0, 1.0, 1.0).unwrap(),
			scale_range: ScaleRange::new(0.0, f64::INFINITY),
			has_textual_index: true,
			has_spatial_index: true,
			address_features: Vec::new(),
			address_error: None,
			geometry_features: Vec::new(),
			geometry_error: None,
		}
	}

	#[must_use]
	pub fn with_bounds(mut self, bounds: GeoRect) -> MockTileHandle {
		self.bounds = bounds;
		self
	}

	#[must_use]
	pub fn with_scale_range(mut self, min: f64, max: f64) -> MockTileHandle {
		self.scale_range = ScaleRange::new(min, max);
		self
	}

	#[must_use]
	pub fn dead(mut self) -> MockTileHandle {
		self.alive = false;
		self
	}

	#[must_use]
	pub fn without_textual_index(mut self) -> MockTileHandle {
		self.has_textual_index = false;
		self
	}

	#[must_use]
	pub fn without_spatial_index(mut self) -> MockTileHandle {
		self.has_spatial_index = false;
		self
	}

	#[must_use]
	pub fn with_address_features(mut self, features: Vec<FeatureId>) -> MockTileHandle {
		self.address_features = features;
		self
	}

	#[must_use]
	pub fn with_address_index_error(mut self, message: &str) -> MockTileHandle {
		self.address_error = Some(message.to_string());
		self
	}

	#[must_use]
	pub fn with_geometry_features(mut self, features: Vec<FeatureId>) -> MockTileHandle {
		self.geometry_features = features;
		self
	}

	#[must_use]
	pub fn with_geometry_index_error(mut self, message: &str) -> MockTileHandle {
		self.geometry_error = Some(message.to_string());
		self
	}
}

impl TileHandle for MockTileHandle {
	fn tile_id(&self) -> TileId {
		self.id
	}

	fn is_alive(&self) -> bool {
		self.alive
	}

	fn bounds(&self) -> GeoRect {
		self.bounds
	}

	fn scale_range(&self) -> ScaleRange {
		self.scale_range
	}

	fn has_textual_index(&self) -> bool {
		self.has_textual_index
	}

	fn has_spatial_index(&self) -> bool {
		self.has_spatial_index
	}

	fn open_address_index(&self) -> anyhow::Result<Box<dyn AddressIndex + '_>> {
		if let Some(message) = &self.address_error {
			anyhow::bail!("{message}");
		}
		Ok(Box::new(MockAddressIndex { features: &self.address_features }))
	}

	fn open_spatial_index(&self) -> anyhow::Result<Box<dyn ScaleIndexReader + '_>> {
		if let Some(message) = &self.geometry_error {
			anyhow::bail!("{message}");
		}
		Ok(Box::new(MockScaleIndexReader { features: &self.geometry_features }))
	}
}

#[derive(Debug)]
struct MockAddressIndex<'a> {
	features: &'a [FeatureId],
}

impl AddressIndex for MockAddressIndex<'_> {
	fn match_query(
		&self,
		_params: &QueryParams,
		filter: &dyn Fn(FeatureId) -> bool,
		collector: &mut dyn FnMut(FeatureId),
	) -> anyhow::Result<()> {
		for &id in self.features {
			if filter(id) {
				collector(id);
			}
		}
		Ok(())
	}
}

#[derive(Debug)]
struct MockScaleIndexReader<'a> {
	features: &'a [FeatureId],
}

impl ScaleIndexReader for MockScaleIndexReader<'_> {
	fn for_each_in_interval_and_scale(
		&self,
		_interval: &CellInterval,
		_scale: f64,
		collector: &mut dyn FnMut(FeatureId),
	) -> anyhow::Result<()> {
		for &id in self.features {
			collector(id);
		}
		Ok(())
	}
}
