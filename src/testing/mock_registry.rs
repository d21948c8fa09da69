use crate::external::{TileHandle, TileRegistry};

/// A registry backed by a fixed, owned list of handles.
#[derive(Debug)]
pub struct MockTileRegistry {
	handles: Vec<Box<dyn TileHandle>>,
}

impl MockTileRegistry {
	#[must_use]
	pub fn new(handles: Vec<Box<dyn TileHandle>>) -> MockTileRegistry {
		MockTileRegistry { handles }
	}
}

impl TileRegistry for MockTileRegistry {
	fn handles(&self) -> Vec<&dyn TileHandle> {
		self.handles.iter().map(std::convert::AsRef::as_ref).collect()
	}
}
