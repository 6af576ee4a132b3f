//! Selector strategies: compute a per-request selection key.
//!
//! A selector is pure with respect to the request: it reads attributes and
//! never mutates or performs I/O. New selectors are produced by the factory
//! functions in this module (closing over an extraction closure and, where
//! supported, a default), not by implementing a hierarchy of types.

use crate::error::{BoxError, RenderError};
use crate::host::Request;
use std::fmt;
use std::sync::Arc;

/// A selection key derived from a request.
///
/// Opaque to everything but table lookup and cache keying: identity and
/// equality are all that matter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionKey(String);

impl SelectionKey {
	/// Create a key.
	pub fn new(key: impl Into<String>) -> Self {
		Self(key.into())
	}

	/// The key as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for SelectionKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for SelectionKey {
	fn from(key: &str) -> Self {
		Self(key.to_owned())
	}
}

impl From<String> for SelectionKey {
	fn from(key: String) -> Self {
		Self(key)
	}
}

/// Computes the selection key for a request.
pub trait Selector: Send + Sync {
	/// Derive the key from the request.
	fn select(&self, request: &Request) -> Result<SelectionKey, RenderError>;
}

struct PathParamSelector {
	name: String,
	default: String,
}

impl Selector for PathParamSelector {
	fn select(&self, request: &Request) -> Result<SelectionKey, RenderError> {
		let key = request.path_param(&self.name).unwrap_or(&self.default);
		tracing::trace!(param = %self.name, key = %key, "selected key from path parameter");
		Ok(SelectionKey::new(key))
	}
}

/// Selector reading a named path parameter, with a fixed default for requests
/// that lack it. Never fails.
///
/// # Examples
///
/// ```
/// use selectable_renderer::host::Request;
/// use selectable_renderer::select::path_param;
///
/// let selector = path_param("status", "???");
///
/// let request = Request::builder()
///     .uri("/posts/alive")
///     .path_param("status", "alive")
///     .build()
///     .unwrap();
/// assert_eq!(selector.select(&request).unwrap().as_str(), "alive");
///
/// let bare = Request::builder().uri("/posts").build().unwrap();
/// assert_eq!(selector.select(&bare).unwrap().as_str(), "???");
/// ```
pub fn path_param(name: impl Into<String>, default: impl Into<String>) -> Arc<dyn Selector> {
	Arc::new(PathParamSelector {
		name: name.into(),
		default: default.into(),
	})
}

struct FnSelector<F>(F);

impl<F> Selector for FnSelector<F>
where
	F: Fn(&Request) -> Result<SelectionKey, BoxError> + Send + Sync,
{
	fn select(&self, request: &Request) -> Result<SelectionKey, RenderError> {
		(self.0)(request).map_err(RenderError::selection)
	}
}

/// Selector applying a caller-supplied extraction closure to the request.
///
/// Errors from the closure propagate unchanged (as
/// [`RenderError::Selection`]); this selector never swallows them, since only
/// the declaring application knows the right fallback policy.
///
/// # Examples
///
/// ```
/// use selectable_renderer::host::Request;
/// use selectable_renderer::select::{SelectionKey, from_request};
///
/// let selector = from_request(|request: &Request| {
///     Ok(SelectionKey::new(request.path()))
/// });
///
/// let request = Request::builder().uri("/landing").build().unwrap();
/// assert_eq!(selector.select(&request).unwrap().as_str(), "/landing");
/// ```
pub fn from_request<F>(f: F) -> Arc<dyn Selector>
where
	F: Fn(&Request) -> Result<SelectionKey, BoxError> + Send + Sync + 'static,
{
	Arc::new(FnSelector(f))
}

/// Selector keyed on the request host (Host header, falling back to the URI
/// authority). Fails if the request carries neither.
pub fn host() -> Arc<dyn Selector> {
	from_request(|request| {
		request
			.host()
			.map(SelectionKey::new)
			.ok_or_else(|| "request has no host".into())
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn request_with(status: Option<&str>) -> Request {
		let builder = Request::builder().uri("/dummy");
		let builder = match status {
			Some(status) => builder.path_param("status", status),
			None => builder,
		};
		builder.build().unwrap()
	}

	#[test]
	fn test_path_param_selector_reads_param() {
		let selector = path_param("status", "???");
		let key = selector.select(&request_with(Some("alive"))).unwrap();
		assert_eq!(key, SelectionKey::new("alive"));
	}

	#[test]
	fn test_path_param_selector_defaults_when_missing() {
		let selector = path_param("status", "???");
		let key = selector.select(&request_with(None)).unwrap();
		assert_eq!(key.as_str(), "???");
	}

	#[test]
	fn test_from_request_propagates_extraction_errors() {
		let selector = from_request(|_request| Err("attribute missing".into()));
		let err = selector.select(&request_with(None)).unwrap_err();
		assert!(matches!(err, RenderError::Selection(_)));
		assert_eq!(err.to_string(), "attribute missing");
	}

	#[test]
	fn test_host_selector() {
		let request = Request::builder()
			.uri("/")
			.header("host", "Asite.com")
			.build()
			.unwrap();
		assert_eq!(host().select(&request).unwrap().as_str(), "Asite.com");
	}

	#[test]
	fn test_host_selector_errors_without_host() {
		let request = Request::builder().uri("/").build().unwrap();
		assert!(matches!(
			host().select(&request),
			Err(RenderError::Selection(_))
		));
	}

	#[test]
	fn test_selection_is_deterministic() {
		let selector = path_param("status", "???");
		let request = request_with(Some("dead"));
		let first = selector.select(&request).unwrap();
		let second = selector.select(&request).unwrap();
		assert_eq!(first, second);
	}
}
