use std::fmt;

/// Identifier of a map feature (POI, road, area), unique within one tile.
///
/// # Examples
/// ```
/// use versatiles_search::FeatureId;
///
/// let id = FeatureId::new(42);
/// assert_eq!(id.as_u32(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeatureId(u32);

impl FeatureId {
	#[must_use]
	pub fn new(id: u32) -> FeatureId {
		FeatureId(id)
	}

	#[must_use]
	pub fn as_u32(&self) -> u32 {
		self.0
	}
}

impl From<u32> for FeatureId {
	fn from(id: u32) -> FeatureId {
		FeatureId(id)
	}
}

impl fmt::Display for FeatureId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_and_as_u32_roundtrip() {
		let id = FeatureId::new(7);
		assert_eq!(id.as_u32(), 7);
	}

	#[test]
	fn from_u32() {
		let id: FeatureId = 9.into();
		assert_eq!(id, FeatureId::new(9));
	}

	#[test]
	fn ordering_matches_underlying_value() {
		assert!(FeatureId::new(1) < FeatureId::new(2));
	}

	#[test]
	fn display_format() {
		assert_eq!(format!("{}", FeatureId::new(5)), "5");
	}
}
