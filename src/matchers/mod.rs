//! The two per-tile matchers the controller runs on every admitted tile: the
//! textual one over the address index, the spatial one over the scale index.
//! Both are thin glue — the actual matching and covering algorithms are
//! external collaborators reached through [`crate::external`].

pub mod address;
pub mod geometry;
