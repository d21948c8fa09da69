use std::fmt::Debug;

/// An axis-aligned rectangle in the engine's common coordinate system.
///
/// Used both for a tile's bounds and for the viewport the controller expands.
/// Unlike a validated geographic bounding box, a `GeoRect` places no
/// constraint on its coordinate range — the engine is agnostic to whether
/// the caller's coordinate system is longitude/latitude, a projected plane,
/// or a plain integer grid.
///
/// # Examples
/// ```
/// use versatiles_search::GeoRect;
///
/// let rect = GeoRect::new(0.0, 0.0, 10.0, 10.0).unwrap();
/// assert_eq!(rect.as_tuple(), (0.0, 0.0, 10.0, 10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoRect {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

impl GeoRect {
	/// Creates a new rectangle from `x_min, y_min, x_max, y_max`.
	///
	/// # Errors
	/// Returns an error if `x_min > x_max` or `y_min > y_max`.
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> anyhow::Result<GeoRect> {
		anyhow::ensure!(x_min <= x_max, "x_min ({x_min}) must be <= x_max ({x_max})");
		anyhow::ensure!(y_min <= y_max, "y_min ({y_min}) must be <= y_max ({y_max})");
		Ok(GeoRect { x_min, y_min, x_max, y_max })
	}

	#[must_use]
	pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
		(self.x_min, self.y_min, self.x_max, self.y_max)
	}

	#[must_use]
	pub fn width(&self) -> f64 {
		self.x_max - self.x_min
	}

	#[must_use]
	pub fn height(&self) -> f64 {
		self.y_max - self.y_min
	}

	#[must_use]
	pub fn center(&self) -> (f64, f64) {
		((self.x_min + self.x_max) / 2.0, (self.y_min + self.y_max) / 2.0)
	}

	/// True if `self` and `other` share at least one point.
	///
	/// # Examples
	/// ```
	/// use versatiles_search::GeoRect;
	///
	/// let a = GeoRect::new(0.0, 0.0, 2.0, 2.0).unwrap();
	/// let b = GeoRect::new(1.0, 1.0, 3.0, 3.0).unwrap();
	/// let c = GeoRect::new(5.0, 5.0, 6.0, 6.0).unwrap();
	/// assert!(a.intersects(&b));
	/// assert!(!a.intersects(&c));
	/// ```
	#[must_use]
	pub fn intersects(&self, other: &GeoRect) -> bool {
		self.x_min <= other.x_max && self.x_max >= other.x_min && self.y_min <= other.y_max && self.y_max >= other.y_min
	}

	/// True if `self` fully contains `other`.
	#[must_use]
	pub fn contains(&self, other: &GeoRect) -> bool {
		self.x_min <= other.x_min && self.x_max >= other.x_max && self.y_min <= other.y_min && self.y_max >= other.y_max
	}

	/// Returns a new rectangle scaled by `factor` about this rectangle's
	/// centroid. A `factor` of `1.0` returns an equal rectangle; `factor`
	/// must be positive.
	///
	/// # Examples
	/// ```
	/// use versatiles_search::GeoRect;
	///
	/// let rect = GeoRect::new(4.0, 4.0, 6.0, 6.0).unwrap();
	/// let scaled = rect.scaled_about_center(2.0);
	/// assert_eq!(scaled.as_tuple(), (3.0, 3.0, 7.0, 7.0));
	/// ```
	#[must_use]
	pub fn scaled_about_center(&self, factor: f64) -> GeoRect {
		let (cx, cy) = self.center();
		let half_w = self.width() / 2.0 * factor;
		let half_h = self.height() / 2.0 * factor;
		GeoRect {
			x_min: cx - half_w,
			y_min: cy - half_h,
			x_max: cx + half_w,
			y_max: cy + half_h,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn new_rejects_inverted_ranges() {
		assert!(GeoRect::new(1.0, 0.0, 0.0, 1.0).is_err());
		assert!(GeoRect::new(0.0, 1.0, 1.0, 0.0).is_err());
	}

	#[test]
	fn width_height_center() {
		let rect = GeoRect::new(0.0, 0.0, 4.0, 2.0).unwrap();
		assert_eq!(rect.width(), 4.0);
		assert_eq!(rect.height(), 2.0);
		assert_eq!(rect.center(), (2.0, 1.0));
	}

	#[rstest]
	#[case((0.0, 0.0, 2.0, 2.0), (2.0, 2.0, 4.0, 4.0), true)] // touching corner
	#[case((0.0, 0.0, 2.0, 2.0), (3.0, 3.0, 4.0, 4.0), false)]
	#[case((0.0, 0.0, 10.0, 10.0), (4.0, 4.0, 6.0, 6.0), true)] // fully inside
	fn intersects_cases(#[case] a: (f64, f64, f64, f64), #[case] b: (f64, f64, f64, f64), #[case] expected: bool) {
		let a = GeoRect::new(a.0, a.1, a.2, a.3).unwrap();
		let b = GeoRect::new(b.0, b.1, b.2, b.3).unwrap();
		assert_eq!(a.intersects(&b), expected);
		assert_eq!(b.intersects(&a), expected, "intersects must be symmetric");
	}

	#[test]
	fn contains_requires_full_coverage() {
		let outer = GeoRect::new(0.0, 0.0, 10.0, 10.0).unwrap();
		let inner = GeoRect::new(2.0, 2.0, 8.0, 8.0).unwrap();
		let overlapping = GeoRect::new(5.0, 5.0, 15.0, 15.0).unwrap();
		assert!(outer.contains(&inner));
		assert!(!outer.contains(&overlapping));
		assert!(!inner.contains(&outer));
	}

	#[test]
	fn scaling_by_one_is_identity() {
		let rect = GeoRect::new(1.0, 2.0, 3.0, 8.0).unwrap();
		assert_eq!(rect.scaled_about_center(1.0), rect);
	}

	#[test]
	fn scaling_preserves_center() {
		let rect = GeoRect::new(4.0, 4.0, 6.0, 10.0).unwrap();
		let scaled = rect.scaled_about_center(3.0);
		assert_eq!(scaled.center(), rect.center());
		assert_eq!(scaled.width(), rect.width() * 3.0);
		assert_eq!(scaled.height(), rect.height() * 3.0);
	}
}
