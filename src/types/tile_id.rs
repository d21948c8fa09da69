use std::fmt;

/// Identifier of a map tile, opaque outside the retrieval engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId(u64);

impl TileId {
	#[must_use]
	pub fn new(id: u64) -> TileId {
		TileId(id)
	}

	#[must_use]
	pub fn as_u64(&self) -> u64 {
		self.0
	}
}

impl From<u64> for TileId {
	fn from(id: u64) -> TileId {
		TileId(id)
	}
}

impl fmt::Display for TileId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "tile#{}", self.0)
	}
}
