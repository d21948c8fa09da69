use std::fmt::Debug;

use crate::types::{FeatureId, QueryParams};

/// A tile's opened textual index, bound to the trie matching rules that
/// decide how token groups combine. The on-disk trie layout and the matching
/// algorithm are both opaque here; this crate only supplies the query, an
/// admission filter, and a collector, and reads back whatever feature ids the
/// matcher reports.
pub trait AddressIndex: Debug {
	/// Walks the trie for `params`, invoking `collector` once per matching
	/// feature that also passes `filter`. Implementations may call `filter`
	/// and `collector` in any order and any number of times, but must not
	/// call `collector` for a feature `filter` rejected.
	fn match_query(
		&self,
		params: &QueryParams,
		filter: &dyn Fn(FeatureId) -> bool,
		collector: &mut dyn FnMut(FeatureId),
	) -> anyhow::Result<()>;
}
