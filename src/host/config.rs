//! The application configuration object: the host-framework surface this
//! crate registers into and dispatches through.
//!
//! A [`Configurator`] owns the renderer-factory registry (keyed by identifier
//! suffix), the set-once renderer-type registry (keyed by renderer-name), the
//! view registry, the before-render signal, and the write-once active-selector
//! slot. It is `Send + Sync`; registries are written during bootstrap and read
//! at render time.

use crate::error::RenderError;
use crate::factory::SelectableRendererFactory;
use crate::host::request::Request;
use crate::host::response::Response;
use crate::host::signals::{BeforeRender, Signal, SignalName};
use crate::renderer::{Renderer, RendererFactory, RendererInfo, SystemValues};
use crate::select::Selector;
use crate::setup::RendererSpec;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A view callable: request in, renderable value out.
pub type ViewFn = Arc<dyn Fn(&Request) -> Value + Send + Sync>;

#[derive(Clone)]
struct ViewConfig {
	view: ViewFn,
	renderer: RendererSpec,
}

/// Application configuration: registries, signals, and the render entry point.
pub struct Configurator {
	/// Identifier suffix (e.g. `.dummy`) to compiling factory.
	renderer_factories: RwLock<HashMap<String, Arc<dyn RendererFactory>>>,
	/// Renderer-name to selectable dispatcher; set-once per name.
	renderer_types: RwLock<HashMap<String, Arc<SelectableRendererFactory>>>,
	views: RwLock<HashMap<String, ViewConfig>>,
	before_render: Signal<BeforeRender>,
	active_selector: OnceCell<Arc<dyn Selector>>,
	/// Compiled renderers for direct (non-selectable) declarations.
	compiled: DashMap<String, Arc<dyn Renderer>>,
}

impl Default for Configurator {
	fn default() -> Self {
		Self::new()
	}
}

impl Configurator {
	/// Create an empty configuration.
	pub fn new() -> Self {
		Self {
			renderer_factories: RwLock::new(HashMap::new()),
			renderer_types: RwLock::new(HashMap::new()),
			views: RwLock::new(HashMap::new()),
			before_render: Signal::new(SignalName::BEFORE_RENDER),
			active_selector: OnceCell::new(),
			compiled: DashMap::new(),
		}
	}

	/// Register a renderer factory for an identifier suffix.
	///
	/// At compile time the factory whose suffix is the longest match for the
	/// identifier wins, so `.tpl.html` takes precedence over `.html`.
	pub fn add_renderer(&self, suffix: impl Into<String>, factory: Arc<dyn RendererFactory>) {
		self.renderer_factories.write().insert(suffix.into(), factory);
	}

	/// Register a selectable dispatcher under a renderer-name.
	///
	/// Set-once: a name that is already registered keeps its existing
	/// dispatcher (and its compiled-renderer cache); repeated registration is
	/// a no-op, never an error.
	pub(crate) fn add_renderer_type(&self, name: &str, factory: SelectableRendererFactory) {
		self.renderer_types
			.write()
			.entry(name.to_owned())
			.or_insert_with(|| Arc::new(factory));
	}

	fn renderer_type(&self, name: &str) -> Option<Arc<SelectableRendererFactory>> {
		self.renderer_types.read().get(name).cloned()
	}

	/// Register a view under a name, with the renderer declaration its output
	/// is rendered through.
	///
	/// # Examples
	///
	/// ```
	/// use selectable_renderer::host::Configurator;
	/// use serde_json::json;
	///
	/// let config = Configurator::new();
	/// config.add_view("dummy", |_request| json!({"name": "foo"}), "fixed.dummy");
	/// ```
	pub fn add_view<F>(&self, name: impl Into<String>, view: F, renderer: impl Into<RendererSpec>)
	where
		F: Fn(&Request) -> Value + Send + Sync + 'static,
	{
		self.views.write().insert(
			name.into(),
			ViewConfig {
				view: Arc::new(view),
				renderer: renderer.into(),
			},
		);
	}

	/// The before-render signal, fired exactly once per render invocation.
	pub fn before_render(&self) -> &Signal<BeforeRender> {
		&self.before_render
	}

	/// Install the configuration-wide active selector.
	///
	/// Write-once: a second install fails with
	/// [`RenderError::ActiveSelectorInstalled`]. Installing also registers the
	/// reserved renderer-name used by
	/// [`selectable_renderer`](crate::active::selectable_renderer).
	pub fn set_active_selector(&self, selector: Arc<dyn Selector>) -> Result<(), RenderError> {
		self.active_selector
			.set(selector)
			.map_err(|_| RenderError::ActiveSelectorInstalled)?;
		self.add_renderer_type(
			crate::active::ACTIVE_RENDERER_NAME,
			SelectableRendererFactory::with_active_selector(crate::active::ACTIVE_RENDERER_NAME),
		);
		Ok(())
	}

	/// The installed active selector.
	///
	/// Looking it up before installation is a configuration error, never a
	/// silent default.
	pub(crate) fn active_selector(&self) -> Result<Arc<dyn Selector>, RenderError> {
		self.active_selector
			.get()
			.cloned()
			.ok_or(RenderError::ActiveSelectorMissing)
	}

	/// Compile the renderer for an identifier through the registered factory
	/// with the longest matching suffix.
	///
	/// This is the host registry's own lookup; selection dispatch treats it
	/// as a black box that may fail.
	pub(crate) fn compile_renderer(&self, identifier: &str) -> Result<Arc<dyn Renderer>, RenderError> {
		let factory = {
			let factories = self.renderer_factories.read();
			factories
				.iter()
				.filter(|(suffix, _)| identifier.ends_with(suffix.as_str()))
				.max_by_key(|(suffix, _)| suffix.len())
				.map(|(_, factory)| Arc::clone(factory))
		};
		let factory = factory.ok_or_else(|| RenderError::NoRendererFactory {
			identifier: identifier.to_owned(),
		})?;
		factory.create(&RendererInfo {
			name: identifier.to_owned(),
		})
	}

	/// Compiled renderer for a direct declaration, cached per identifier.
	fn direct_renderer(&self, identifier: &str) -> Result<Arc<dyn Renderer>, RenderError> {
		match self.compiled.entry(identifier.to_owned()) {
			Entry::Occupied(entry) => Ok(Arc::clone(entry.get())),
			Entry::Vacant(entry) => {
				let renderer = self.compile_renderer(identifier)?;
				entry.insert(Arc::clone(&renderer));
				Ok(renderer)
			}
		}
	}

	/// Render a named view for a request and build the response.
	///
	/// Runs the view, fires [`SignalName::BEFORE_RENDER`] once, dispatches
	/// the declared renderer (direct or selectable), and wraps the output in
	/// a `text/html` response. Errors from selection, resolution, compilation,
	/// or rendering propagate to the caller untranslated.
	pub fn render_view_to_response(
		&self,
		request: &Request,
		view_name: &str,
	) -> Result<Response, RenderError> {
		let view_config = self
			.views
			.read()
			.get(view_name)
			.cloned()
			.ok_or_else(|| RenderError::ViewNotFound(view_name.to_owned()))?;

		let value = (view_config.view)(request);
		let system = SystemValues {
			request,
			renderer_name: view_config.renderer.name(),
			view_name,
		};

		self.before_render.send(&BeforeRender {
			view_name: view_name.to_owned(),
			renderer_name: system.renderer_name.to_owned(),
		});

		let body = match &view_config.renderer {
			RendererSpec::Template(identifier) => {
				let renderer = self.direct_renderer(identifier)?;
				renderer.render(&value, &system)?
			}
			RendererSpec::Selectable(selectable) => {
				let factory = self.renderer_type(&selectable.renderer_name).ok_or_else(|| {
					RenderError::UnregisteredRendererName(selectable.renderer_name.clone())
				})?;
				factory.render(self, selectable.resolver.as_ref(), &value, &system)?
			}
		};

		Ok(Response::html(body))
	}
}
