//! A geo-textual retrieval engine: given a query and a geographic viewport,
//! find the map features that match both across a set of tiled map files.
//!
//! The hard part is the progressive viewport expansion loop in
//! [`controller::RetrievalController`], which coordinates a textual matcher
//! over an address/name trie and a spatial matcher over a scale-stratified
//! geometric index, one map tile at a time, and reports each tile's result
//! exactly once.
//!
//! The on-disk trie format, the spatial covering structure, query
//! tokenization, and the registry that opens map files are all external
//! collaborators, consumed through the narrow traits in [`external`].

pub mod bucket;
pub mod controller;
pub mod external;
pub mod matchers;
pub mod sink;
pub mod testing;
pub mod types;

pub use controller::RetrievalController;
pub use sink::ResultSink;
pub use types::{FeatureId, GeoRect, Limits, QueryParams, TileId, TokenGroup};
