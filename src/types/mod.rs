//! Core data model: query parameters, feature/tile identifiers, the rectangle
//! type shared by viewports and tile bounds, and the retrieval's limits.

mod feature_id;
mod geo_rect;
mod limits;
mod query;
mod tile_id;

pub use feature_id::FeatureId;
pub use geo_rect::GeoRect;
pub use limits::Limits;
pub use query::{QueryParams, TokenGroup};
pub use tile_id::TileId;
