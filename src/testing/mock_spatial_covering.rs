use std::cell::RefCell;

use crate::external::{CellInterval, SpatialCoveringProvider};
use crate::types::GeoRect;

/// A covering provider that ignores the viewport and always returns the same
/// fixed set of intervals, recording the last scale it was asked to cover at.
#[derive(Debug)]
pub struct MockSpatialCoveringProvider {
	intervals: Vec<CellInterval>,
	last_scale: RefCell<Option<f64>>,
}

impl MockSpatialCoveringProvider {
	#[must_use]
	pub fn single_interval() -> MockSpatialCoveringProvider {
		MockSpatialCoveringProvider {
			intervals: vec![CellInterval { lo: 0, hi: 1 }],
			last_scale: RefCell::new(None),
		}
	}

	#[must_use]
	pub fn recording() -> MockSpatialCoveringProvider {
		Self::single_interval()
	}

	#[must_use]
	pub fn last_scale(&self) -> Option<f64> {
		*self.last_scale.borrow()
	}
}

impl SpatialCoveringProvider for MockSpatialCoveringProvider {
	fn cover(&self, _viewport: &GeoRect, scale: f64) -> Vec<CellInterval> {
		*self.last_scale.borrow_mut() = Some(scale);
		self.intervals.clone()
	}
}
