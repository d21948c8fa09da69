/// Optional termination knobs for a retrieval: a minimum aggregate feature
/// count and a maximum viewport scale multiplier. "Unset" is distinct from
/// zero for both fields — `min_num_features = Some(0)` is never satisfied by
/// any aggregate count (zero or more is always already true, so the minimum
/// would stop the loop on the very first pass if it counted), so a zero
/// minimum is treated as no constraint and the loop still runs until full
/// coverage, the same as `None`. A minimum only ends the loop early once it
/// is positive and actually reached.
///
/// # Examples
/// ```
/// use versatiles_search::Limits;
///
/// let limits = Limits::new().with_min_num_features(8).with_max_viewport_scale(5.0);
/// assert!(limits.has_min_num_features());
/// assert_eq!(limits.min_num_features(), Some(8));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Limits {
	min_num_features: Option<u64>,
	max_viewport_scale: Option<f64>,
}

impl Limits {
	#[must_use]
	pub fn new() -> Limits {
		Limits::default()
	}

	#[must_use]
	pub fn with_min_num_features(mut self, value: u64) -> Limits {
		self.min_num_features = Some(value);
		self
	}

	#[must_use]
	pub fn with_max_viewport_scale(mut self, value: f64) -> Limits {
		self.max_viewport_scale = Some(value);
		self
	}

	#[must_use]
	pub fn has_min_num_features(&self) -> bool {
		self.min_num_features.is_some()
	}

	#[must_use]
	pub fn has_max_viewport_scale(&self) -> bool {
		self.max_viewport_scale.is_some()
	}

	#[must_use]
	pub fn min_num_features(&self) -> Option<u64> {
		self.min_num_features
	}

	#[must_use]
	pub fn max_viewport_scale(&self) -> Option<f64> {
		self.max_viewport_scale
	}

	/// Reads `min_num_features`, panicking if unset.
	///
	/// # Panics
	/// Panics if `has_min_num_features()` is false. Reading an unset limit
	/// through this accessor is a `Misconfiguration`: a programming error in
	/// the caller, not a condition this crate recovers from.
	#[must_use]
	pub fn min_num_features_unchecked(&self) -> u64 {
		self
			.min_num_features
			.expect("Misconfiguration: min_num_features is unset")
	}

	/// Reads `max_viewport_scale`, panicking if unset.
	///
	/// # Panics
	/// Panics if `has_max_viewport_scale()` is false, for the same reason as
	/// [`Limits::min_num_features_unchecked`].
	#[must_use]
	pub fn max_viewport_scale_unchecked(&self) -> f64 {
		self
			.max_viewport_scale
			.expect("Misconfiguration: max_viewport_scale is unset")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_is_fully_unset() {
		let limits = Limits::new();
		assert!(!limits.has_min_num_features());
		assert!(!limits.has_max_viewport_scale());
		assert_eq!(limits.min_num_features(), None);
		assert_eq!(limits.max_viewport_scale(), None);
	}

	#[test]
	fn zero_is_distinct_from_unset() {
		let limits = Limits::new().with_min_num_features(0);
		assert!(limits.has_min_num_features());
		assert_eq!(limits.min_num_features(), Some(0));
	}

	#[test]
	fn builders_compose() {
		let limits = Limits::new().with_min_num_features(3).with_max_viewport_scale(2.0);
		assert_eq!(limits.min_num_features(), Some(3));
		assert_eq!(limits.max_viewport_scale(), Some(2.0));
	}

	#[test]
	#[should_panic(expected = "Misconfiguration")]
	fn unchecked_min_num_features_panics_when_unset() {
		let _ = Limits::new().min_num_features_unchecked();
	}

	#[test]
	#[should_panic(expected = "Misconfiguration")]
	fn unchecked_max_viewport_scale_panics_when_unset() {
		let _ = Limits::new().max_viewport_scale_unchecked();
	}
}
