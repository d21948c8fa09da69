/// A group of synonym tokens; the textual index matches if any token in the
/// group is present at the relevant trie position. Tokens are assumed to be
/// already normalized (casing, diacritics, transliteration) by the caller.
pub type TokenGroup = Vec<String>;

/// Query parameters passed to both the address and the geometry matcher.
///
/// The token groups are ordered; the textual-trie matching rules (an
/// external collaborator, see [`crate::external`]) decide how groups combine.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
	pub token_groups: Vec<TokenGroup>,
	pub languages: Vec<String>,
	pub scale_hint: Option<f64>,
}

impl QueryParams {
	#[must_use]
	pub fn new(token_groups: Vec<TokenGroup>) -> QueryParams {
		QueryParams {
			token_groups,
			languages: Vec::new(),
			scale_hint: None,
		}
	}

	#[must_use]
	pub fn with_languages(mut self, languages: Vec<String>) -> QueryParams {
		self.languages = languages;
		self
	}

	#[must_use]
	pub fn with_scale_hint(mut self, scale: f64) -> QueryParams {
		self.scale_hint = Some(scale);
		self
	}

	/// Convenience constructor for a single-token, single-group query such as
	/// a plain-text search box.
	#[must_use]
	pub fn from_text(text: &str) -> QueryParams {
		let groups = text
			.split_whitespace()
			.map(|token| vec![token.to_ascii_lowercase()])
			.collect();
		QueryParams::new(groups)
	}
}
