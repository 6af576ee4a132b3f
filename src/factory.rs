//! The selectable renderer factory: per-request dispatch plus the
//! compiled-renderer cache.
//!
//! One factory lives per registered renderer-name. Each render invocation
//! selects a key, resolves it to a renderer identifier, fetches (or lazily
//! compiles) the renderer for that identifier, and delegates to it. The cache
//! is keyed by identifier, never evicted, and guarantees at most one compile
//! per identifier: concurrent first requests for the same identifier serialize
//! on the cache entry, and every later lookup observes the same compiled
//! renderer.

use crate::error::RenderError;
use crate::host::Configurator;
use crate::renderer::{Renderer, SystemValues};
use crate::resolve::PathResolver;
use crate::select::Selector;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::Value;
use std::sync::Arc;

/// Where a factory obtains its selector.
pub(crate) enum SelectorSource {
	/// Bound at setup time by a [`SelectableRendererSetup`].
	///
	/// [`SelectableRendererSetup`]: crate::setup::SelectableRendererSetup
	Fixed(Arc<dyn Selector>),
	/// The configuration's write-once active selector, read at render time.
	Active,
}

/// Render-time dispatcher registered under a renderer-name.
pub struct SelectableRendererFactory {
	renderer_name: String,
	selector: SelectorSource,
	compiled: DashMap<String, Arc<dyn Renderer>>,
}

impl SelectableRendererFactory {
	pub(crate) fn new(renderer_name: impl Into<String>, selector: Arc<dyn Selector>) -> Self {
		Self {
			renderer_name: renderer_name.into(),
			selector: SelectorSource::Fixed(selector),
			compiled: DashMap::new(),
		}
	}

	pub(crate) fn with_active_selector(renderer_name: impl Into<String>) -> Self {
		Self {
			renderer_name: renderer_name.into(),
			selector: SelectorSource::Active,
			compiled: DashMap::new(),
		}
	}

	/// The renderer-name this factory is registered under.
	pub fn renderer_name(&self) -> &str {
		&self.renderer_name
	}

	/// Number of distinct identifiers compiled so far.
	pub fn compiled_count(&self) -> usize {
		self.compiled.len()
	}

	/// Select, resolve, compile-or-fetch, and render.
	///
	/// Errors from any stage propagate unchanged; the host framework owns the
	/// translation into an HTTP error response.
	pub(crate) fn render(
		&self,
		config: &Configurator,
		resolver: &dyn PathResolver,
		value: &Value,
		system: &SystemValues<'_>,
	) -> Result<String, RenderError> {
		let selector = match &self.selector {
			SelectorSource::Fixed(selector) => Arc::clone(selector),
			SelectorSource::Active => config.active_selector()?,
		};
		let key = selector.select(system.request)?;
		let identifier = resolver.resolve(&key, system.request)?;
		let renderer = self.compiled_for(config, &identifier)?;
		renderer.render(value, system)
	}

	/// Fetch the compiled renderer for `identifier`, compiling through the
	/// host registry on first use.
	///
	/// The vacant entry is held across the compile, so a racing first request
	/// for the same identifier waits rather than compiling twice.
	fn compiled_for(
		&self,
		config: &Configurator,
		identifier: &str,
	) -> Result<Arc<dyn Renderer>, RenderError> {
		match self.compiled.entry(identifier.to_owned()) {
			Entry::Occupied(entry) => Ok(Arc::clone(entry.get())),
			Entry::Vacant(entry) => {
				tracing::debug!(
					renderer_name = %self.renderer_name,
					identifier,
					"compiling renderer"
				);
				let renderer = config.compile_renderer(identifier)?;
				entry.insert(Arc::clone(&renderer));
				Ok(renderer)
			}
		}
	}
}
