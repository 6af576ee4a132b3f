//! Minimal HTTP response representation produced by the rendering pipeline.

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue, StatusCode};

/// An HTTP response carrying rendered output.
#[derive(Debug)]
pub struct Response {
	/// Status code.
	pub status: StatusCode,
	/// Response headers.
	pub headers: HeaderMap,
	/// Response body.
	pub body: Bytes,
}

impl Response {
	/// Create an empty response with the given status code.
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// Create a `200 OK` response with an HTML body.
	///
	/// Rendered views produce `text/html` responses unless a renderer says
	/// otherwise, matching the usual framework default.
	///
	/// # Examples
	///
	/// ```
	/// use selectable_renderer::host::Response;
	///
	/// let response = Response::html("<p>hello</p>");
	/// assert_eq!(response.content_type(), Some("text/html"));
	/// assert_eq!(response.body_text(), "<p>hello</p>");
	/// ```
	pub fn html(body: impl Into<String>) -> Self {
		let mut response = Self::new(StatusCode::OK);
		response
			.headers
			.insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));
		response.body = Bytes::from(body.into());
		response
	}

	/// The `Content-Type` header, if present and valid UTF-8.
	pub fn content_type(&self) -> Option<&str> {
		self.headers
			.get(CONTENT_TYPE)
			.and_then(|value| value.to_str().ok())
	}

	/// The body decoded as UTF-8 (lossy).
	pub fn body_text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_html_response_defaults() {
		let response = Response::html("body");
		assert_eq!(response.status, StatusCode::OK);
		assert_eq!(response.content_type(), Some("text/html"));
		assert_eq!(response.body_text(), "body");
	}
}
