//! Minimal HTTP request representation used at the host-framework boundary.
//!
//! Selectors only ever *read* request attributes (path parameters, the Host
//! header), so this type carries exactly the request surface the selection
//! machinery consumes plus a builder for tests and embedding frameworks.

use crate::error::RenderError;
use http::header::HOST;
use http::{HeaderMap, HeaderName, HeaderValue, Method, Uri};
use std::collections::HashMap;

/// An incoming HTTP request as seen by the rendering pipeline.
pub struct Request {
	/// HTTP method.
	pub method: Method,
	/// Request URI.
	pub uri: Uri,
	/// Request headers.
	pub headers: HeaderMap,
	/// Path parameters extracted by the host router (e.g. `{status}` in
	/// `/posts/{status}/`).
	pub path_params: HashMap<String, String>,
}

impl Request {
	/// Start building a request.
	///
	/// # Examples
	///
	/// ```
	/// use http::Method;
	/// use selectable_renderer::host::Request;
	///
	/// let request = Request::builder()
	///     .method(Method::GET)
	///     .uri("/posts/alive")
	///     .path_param("status", "alive")
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(request.path(), "/posts/alive");
	/// assert_eq!(request.path_param("status"), Some("alive"));
	/// ```
	pub fn builder() -> RequestBuilder {
		RequestBuilder::new()
	}

	/// The request path.
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Look up a path parameter by name.
	pub fn path_param(&self, name: &str) -> Option<&str> {
		self.path_params.get(name).map(String::as_str)
	}

	/// Set a path parameter (called by routers during path matching).
	pub fn set_path_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.path_params.insert(name.into(), value.into());
	}

	/// The request host, from the `Host` header or, failing that, the URI
	/// authority.
	///
	/// # Examples
	///
	/// ```
	/// use selectable_renderer::host::Request;
	///
	/// let request = Request::builder()
	///     .uri("/")
	///     .header("host", "example.com")
	///     .build()
	///     .unwrap();
	///
	/// assert_eq!(request.host(), Some("example.com"));
	/// ```
	pub fn host(&self) -> Option<&str> {
		self.headers
			.get(HOST)
			.and_then(|value| value.to_str().ok())
			.or_else(|| self.uri.host())
	}
}

/// Builder for [`Request`].
///
/// Parse failures (URI, header name/value) are deferred and reported by
/// [`RequestBuilder::build`].
pub struct RequestBuilder {
	method: Method,
	uri: Result<Uri, http::Error>,
	headers: HeaderMap,
	path_params: HashMap<String, String>,
	err: Option<http::Error>,
}

impl RequestBuilder {
	fn new() -> Self {
		Self {
			method: Method::GET,
			uri: Ok(Uri::from_static("/")),
			headers: HeaderMap::new(),
			path_params: HashMap::new(),
			err: None,
		}
	}

	/// Set the HTTP method (defaults to `GET`).
	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	/// Set the request URI.
	pub fn uri(mut self, uri: &str) -> Self {
		self.uri = uri.parse::<Uri>().map_err(http::Error::from);
		self
	}

	/// Append a header.
	pub fn header(mut self, name: &str, value: &str) -> Self {
		match (
			HeaderName::try_from(name).map_err(http::Error::from),
			HeaderValue::try_from(value).map_err(http::Error::from),
		) {
			(Ok(name), Ok(value)) => {
				self.headers.append(name, value);
			}
			(Err(err), _) | (_, Err(err)) => {
				self.err.get_or_insert(err);
			}
		}
		self
	}

	/// Add a path parameter, as a router would after matching the URL
	/// pattern.
	pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.path_params.insert(name.into(), value.into());
		self
	}

	/// Finish building, surfacing any deferred parse error.
	pub fn build(self) -> Result<Request, RenderError> {
		if let Some(err) = self.err {
			return Err(err.into());
		}
		Ok(Request {
			method: self.method,
			uri: self.uri?,
			headers: self.headers,
			path_params: self.path_params,
		})
	}
}
