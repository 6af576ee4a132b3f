//! Tera-backed renderer factory.
//!
//! An adapter making a [`tera::Tera`] instance available as a host renderer
//! factory: register it for a suffix (conventionally `.tera`) and resolved
//! identifiers compile into renderers that evaluate the matching Tera
//! template with the view's return value as context.

use crate::error::RenderError;
use crate::renderer::{Renderer, RendererFactory, RendererInfo, SystemValues};
use serde_json::Value;
use std::sync::Arc;
use ::tera::{Context, Tera};

/// Renderer factory backed by a shared Tera instance.
///
/// # Examples
///
/// ```
/// use selectable_renderer::host::Configurator;
/// use selectable_renderer::tera::TeraRendererFactory;
/// use std::sync::Arc;
///
/// let factory = TeraRendererFactory::with_templates([
///     ("alive.tera", "{{ name }} is alive"),
///     ("dead.tera", "{{ name }} is dead"),
/// ])
/// .unwrap();
///
/// let config = Configurator::new();
/// config.add_renderer(".tera", Arc::new(factory));
/// ```
pub struct TeraRendererFactory {
	tera: Arc<Tera>,
}

impl TeraRendererFactory {
	/// Wrap an existing Tera instance.
	pub fn new(tera: Tera) -> Self {
		Self {
			tera: Arc::new(tera),
		}
	}

	/// Build a factory from inline `(name, body)` template pairs.
	pub fn with_templates<'a>(
		templates: impl IntoIterator<Item = (&'a str, &'a str)>,
	) -> Result<Self, RenderError> {
		let mut tera = Tera::default();
		tera.add_raw_templates(templates)
			.map_err(|err| RenderError::Render(Box::new(err)))?;
		Ok(Self::new(tera))
	}
}

impl RendererFactory for TeraRendererFactory {
	fn create(&self, info: &RendererInfo) -> Result<Arc<dyn Renderer>, RenderError> {
		if !self.tera.get_template_names().any(|name| name == info.name) {
			return Err(RenderError::Compilation {
				identifier: info.name.clone(),
				source: format!("template `{}` is not loaded", info.name).into(),
			});
		}
		Ok(Arc::new(TeraRenderer {
			tera: Arc::clone(&self.tera),
			template: info.name.clone(),
		}))
	}
}

struct TeraRenderer {
	tera: Arc<Tera>,
	template: String,
}

impl Renderer for TeraRenderer {
	fn render(&self, value: &Value, _system: &SystemValues<'_>) -> Result<String, RenderError> {
		let context =
			Context::from_serialize(value).map_err(|err| RenderError::Render(Box::new(err)))?;
		self.tera
			.render(&self.template, &context)
			.map_err(|err| RenderError::Render(Box::new(err)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::host::Request;
	use serde_json::json;

	fn system_values(request: &Request) -> SystemValues<'_> {
		SystemValues {
			request,
			renderer_name: "dead_or_alive",
			view_name: "dummy",
		}
	}

	#[test]
	fn test_renders_loaded_template() {
		let factory = TeraRendererFactory::with_templates([("alive.tera", "{{ name }} is alive")])
			.unwrap();
		let renderer = factory
			.create(&RendererInfo {
				name: "alive.tera".into(),
			})
			.unwrap();

		let request = Request::builder().uri("/").build().unwrap();
		let body = renderer
			.render(&json!({"name": "foo"}), &system_values(&request))
			.unwrap();
		assert_eq!(body, "foo is alive");
	}

	#[test]
	fn test_unknown_template_is_a_compilation_error() {
		let factory = TeraRendererFactory::with_templates([("alive.tera", "x")]).unwrap();
		assert!(matches!(
			factory.create(&RendererInfo {
				name: "missing.tera".into(),
			}),
			Err(RenderError::Compilation { .. })
		));
	}
}
