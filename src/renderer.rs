//! Renderer and renderer-factory traits at the host-registry boundary.
//!
//! A *renderer* turns a view's return value into response text. A *renderer
//! factory* compiles a renderer for a given identifier (typically a template
//! path); the host registry owns factories and this crate only asks it to
//! compile, caching the result per identifier.

use crate::error::RenderError;
use crate::host::Request;
use serde_json::Value;
use std::sync::Arc;

/// Information handed to a [`RendererFactory`] when compiling a renderer.
#[derive(Debug, Clone)]
pub struct RendererInfo {
	/// The renderer identifier being compiled, e.g. `alive.dummy`.
	pub name: String,
}

/// Render-time context supplied by the framework alongside the view's return
/// value.
pub struct SystemValues<'a> {
	/// The request being served.
	pub request: &'a Request,
	/// The renderer declaration's name: a selectable renderer-name, or the
	/// identifier itself for direct template declarations.
	pub renderer_name: &'a str,
	/// The view being rendered.
	pub view_name: &'a str,
}

/// A compiled renderer: turns `(value, system_values)` into response text.
pub trait Renderer: Send + Sync {
	/// Render the view's return value.
	fn render(&self, value: &Value, system: &SystemValues<'_>) -> Result<String, RenderError>;
}

/// Compiles renderers for identifiers this factory is registered to handle.
pub trait RendererFactory: Send + Sync {
	/// Compile a renderer for the identifier in `info`.
	fn create(&self, info: &RendererInfo) -> Result<Arc<dyn Renderer>, RenderError>;
}

struct FnRenderer<F>(F);

impl<F> Renderer for FnRenderer<F>
where
	F: Fn(&Value, &SystemValues<'_>) -> Result<String, RenderError> + Send + Sync,
{
	fn render(&self, value: &Value, system: &SystemValues<'_>) -> Result<String, RenderError> {
		(self.0)(value, system)
	}
}

/// Build a renderer from a closure.
///
/// # Examples
///
/// ```
/// use selectable_renderer::renderer::from_fn;
///
/// let renderer = from_fn(|value, _system| {
///     Ok(format!("hello {}", value["name"].as_str().unwrap_or("?")))
/// });
/// # let _ = renderer;
/// ```
pub fn from_fn<F>(f: F) -> Arc<dyn Renderer>
where
	F: Fn(&Value, &SystemValues<'_>) -> Result<String, RenderError> + Send + Sync + 'static,
{
	Arc::new(FnRenderer(f))
}

struct FnFactory<F>(F);

impl<F> RendererFactory for FnFactory<F>
where
	F: Fn(&RendererInfo) -> Result<Arc<dyn Renderer>, RenderError> + Send + Sync,
{
	fn create(&self, info: &RendererInfo) -> Result<Arc<dyn Renderer>, RenderError> {
		(self.0)(info)
	}
}

/// Build a renderer factory from a closure.
///
/// # Examples
///
/// ```
/// use selectable_renderer::renderer::{factory_from_fn, from_fn};
///
/// // A factory whose renderers echo their own identifier.
/// let factory = factory_from_fn(|info| {
///     let name = info.name.clone();
///     Ok(from_fn(move |value, _system| {
///         Ok(format!("{}: {}", name, value["name"].as_str().unwrap_or("?")))
///     }))
/// });
/// # let _ = factory;
/// ```
pub fn factory_from_fn<F>(f: F) -> Arc<dyn RendererFactory>
where
	F: Fn(&RendererInfo) -> Result<Arc<dyn Renderer>, RenderError> + Send + Sync + 'static,
{
	Arc::new(FnFactory(f))
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_fn_renderer_and_factory() {
		let factory = factory_from_fn(|info| {
			let name = info.name.clone();
			Ok(from_fn(move |value, _system| {
				Ok(format!("{}: {}", name, value["name"].as_str().unwrap_or("?")))
			}))
		});

		let renderer = factory
			.create(&RendererInfo {
				name: "alive.dummy".into(),
			})
			.unwrap();

		let request = Request::builder().uri("/").build().unwrap();
		let system = SystemValues {
			request: &request,
			renderer_name: "dead_or_alive",
			view_name: "dummy",
		};
		let body = renderer.render(&json!({"name": "foo"}), &system).unwrap();
		assert_eq!(body, "alive.dummy: foo");
	}
}
