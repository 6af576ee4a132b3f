//! Path-resolver strategies: turn a selection key into a renderer identifier.
//!
//! Two built-ins:
//!
//! - [`FormatTemplatePath`] substitutes the key into a printf-style pattern
//!   holding exactly one `%s` placeholder.
//! - [`CandidateTemplatePaths`] looks the key up in a per-view candidate
//!   table, with an optional default for keys the table does not cover.
//!
//! Both double as the *strategy* parameter of
//! [`SelectableRendererSetup`](crate::setup::SelectableRendererSetup): the
//! strategy type is fixed when the setup is constructed, while the pattern or
//! table is supplied per view declaration via [`ResolverStrategy::Args`].

use crate::error::RenderError;
use crate::host::Request;
use crate::select::SelectionKey;
use std::collections::HashMap;
use std::sync::Arc;

/// Placeholder token of the format strategy.
const PLACEHOLDER: &str = "%s";

/// Maps a selection key (plus static configuration) to a renderer identifier.
pub trait PathResolver: Send + Sync {
	/// Resolve the identifier for this key.
	fn resolve(&self, key: &SelectionKey, request: &Request) -> Result<String, RenderError>;
}

/// Constructs a [`PathResolver`] from per-view static data.
pub trait ResolverStrategy: Send + Sync + 'static {
	/// The static data a view declaration supplies: a format pattern, or a
	/// candidate table.
	type Args;

	/// Build the resolver bound to a specific view declaration.
	fn build(args: Self::Args) -> Arc<dyn PathResolver>;
}

/// Format-string resolution: the key is substituted into a pattern containing
/// exactly one `%s` placeholder.
///
/// # Examples
///
/// ```
/// use selectable_renderer::host::Request;
/// use selectable_renderer::resolve::{FormatTemplatePath, PathResolver};
/// use selectable_renderer::select::SelectionKey;
///
/// let resolver = FormatTemplatePath::new("%s.dummy");
/// let request = Request::builder().uri("/").build().unwrap();
///
/// let path = resolver.resolve(&SelectionKey::new("alive"), &request).unwrap();
/// assert_eq!(path, "alive.dummy");
/// ```
pub struct FormatTemplatePath {
	pattern: String,
}

impl FormatTemplatePath {
	/// Create a resolver for the given pattern.
	///
	/// The pattern is validated at resolve time; a pattern with zero or more
	/// than one `%s` fails with [`RenderError::Format`].
	pub fn new(pattern: impl Into<String>) -> Self {
		Self {
			pattern: pattern.into(),
		}
	}
}

impl PathResolver for FormatTemplatePath {
	fn resolve(&self, key: &SelectionKey, _request: &Request) -> Result<String, RenderError> {
		if self.pattern.matches(PLACEHOLDER).count() != 1 {
			return Err(RenderError::Format {
				pattern: self.pattern.clone(),
			});
		}
		Ok(self.pattern.replacen(PLACEHOLDER, key.as_str(), 1))
	}
}

impl ResolverStrategy for FormatTemplatePath {
	type Args = String;

	fn build(args: Self::Args) -> Arc<dyn PathResolver> {
		Arc::new(Self::new(args))
	}
}

/// A per-view table of selection keys to renderer identifiers, with an
/// optional default.
///
/// # Examples
///
/// ```
/// use selectable_renderer::resolve::CandidateTable;
///
/// let table = CandidateTable::from_iter([("Asite.com", "alive.dummy")])
///     .with_default("dead.dummy");
/// # let _ = table;
/// ```
#[derive(Debug, Clone, Default)]
pub struct CandidateTable {
	entries: HashMap<SelectionKey, String>,
	default: Option<String>,
}

impl CandidateTable {
	/// Create an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a candidate entry.
	pub fn insert(mut self, key: impl Into<SelectionKey>, path: impl Into<String>) -> Self {
		self.entries.insert(key.into(), path.into());
		self
	}

	/// Set the identifier used for keys absent from the table.
	pub fn with_default(mut self, path: impl Into<String>) -> Self {
		self.default = Some(path.into());
		self
	}

	fn lookup(&self, key: &SelectionKey) -> Option<&str> {
		self.entries
			.get(key)
			.or(self.default.as_ref())
			.map(String::as_str)
	}
}

impl<K: Into<SelectionKey>, V: Into<String>> FromIterator<(K, V)> for CandidateTable {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			entries: iter
				.into_iter()
				.map(|(key, path)| (key.into(), path.into()))
				.collect(),
			default: None,
		}
	}
}

/// Candidate-table resolution: the key indexes a per-view table; a configured
/// default covers absent keys, and an absent key with no default is a
/// [`RenderError::Resolution`].
pub struct CandidateTemplatePaths {
	table: CandidateTable,
}

impl CandidateTemplatePaths {
	/// Create a resolver over the given table.
	pub fn new(table: CandidateTable) -> Self {
		Self { table }
	}
}

impl PathResolver for CandidateTemplatePaths {
	fn resolve(&self, key: &SelectionKey, _request: &Request) -> Result<String, RenderError> {
		self.table
			.lookup(key)
			.map(str::to_owned)
			.ok_or_else(|| RenderError::Resolution {
				key: key.to_string(),
			})
	}
}

impl ResolverStrategy for CandidateTemplatePaths {
	type Args = CandidateTable;

	fn build(args: Self::Args) -> Arc<dyn PathResolver> {
		Arc::new(Self::new(args))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn request() -> Request {
		Request::builder().uri("/").build().unwrap()
	}

	#[test]
	fn test_format_substitution() {
		let resolver = FormatTemplatePath::new("%s.dummy");
		let path = resolver
			.resolve(&SelectionKey::new("alive"), &request())
			.unwrap();
		assert_eq!(path, "alive.dummy");
	}

	#[test]
	fn test_format_pattern_without_placeholder_fails() {
		let resolver = FormatTemplatePath::new("static.dummy");
		let err = resolver
			.resolve(&SelectionKey::new("alive"), &request())
			.unwrap_err();
		assert!(matches!(err, RenderError::Format { .. }));
	}

	#[test]
	fn test_format_pattern_with_two_placeholders_fails() {
		let resolver = FormatTemplatePath::new("%s/%s.dummy");
		assert!(matches!(
			resolver.resolve(&SelectionKey::new("alive"), &request()),
			Err(RenderError::Format { .. })
		));
	}

	#[test]
	fn test_candidate_lookup_hits_table() {
		let resolver = CandidateTemplatePaths::new(
			CandidateTable::new().insert("A", "x").with_default("y"),
		);
		let path = resolver.resolve(&SelectionKey::new("A"), &request()).unwrap();
		assert_eq!(path, "x");
	}

	#[test]
	fn test_candidate_lookup_falls_back_to_default() {
		let resolver = CandidateTemplatePaths::new(
			CandidateTable::from_iter([("A", "x")]).with_default("y"),
		);
		let path = resolver.resolve(&SelectionKey::new("B"), &request()).unwrap();
		assert_eq!(path, "y");
	}

	#[test]
	fn test_candidate_lookup_without_default_fails() {
		let resolver = CandidateTemplatePaths::new(CandidateTable::from_iter([("A", "x")]));
		let err = resolver
			.resolve(&SelectionKey::new("B"), &request())
			.unwrap_err();
		assert!(matches!(err, RenderError::Resolution { .. }));
		assert_eq!(err.to_string(), "no template path for selection key `B`");
	}
}
