//! Setup façade: bind a selector and a resolver strategy under a
//! renderer-name, register it once, and mint per-view renderer declarations.
//!
//! A setup is constructed once at application bootstrap and never mutated
//! afterwards. [`SelectableRendererSetup::register_to`] is idempotent —
//! registration is a set-once declaration keyed by renderer-name — while
//! calling [`SelectableRendererSetup::renderer`] produces a view-scoped
//! declaration carrying the renderer-name together with the resolver built
//! from that view's own pattern or table. Distinct setups on one
//! configuration are fully independent: rendering through one never consults
//! the other's pattern, table, or default.

use crate::factory::SelectableRendererFactory;
use crate::host::Configurator;
use crate::resolve::{PathResolver, ResolverStrategy};
use crate::select::Selector;
use std::marker::PhantomData;
use std::sync::Arc;

/// Binds (selector, resolver strategy, renderer-name) into a reusable
/// renderer-selection scheme.
///
/// # Examples
///
/// ```
/// use selectable_renderer::host::Configurator;
/// use selectable_renderer::resolve::FormatTemplatePath;
/// use selectable_renderer::select::path_param;
/// use selectable_renderer::setup::SelectableRendererSetup;
///
/// let dead_or_alive = SelectableRendererSetup::<FormatTemplatePath>::new(
///     path_param("status", "???"),
///     "dead_or_alive",
/// );
///
/// let config = Configurator::new();
/// dead_or_alive.register_to(&config);
///
/// // A view-scoped declaration; pass it to the view configuration.
/// let renderer = dead_or_alive.renderer("%s.dummy");
/// # let _ = renderer;
/// ```
pub struct SelectableRendererSetup<S: ResolverStrategy> {
	selector: Arc<dyn Selector>,
	renderer_name: String,
	_strategy: PhantomData<fn() -> S>,
}

impl<S: ResolverStrategy> SelectableRendererSetup<S> {
	/// Create a setup for the given selector and renderer-name.
	pub fn new(selector: Arc<dyn Selector>, renderer_name: impl Into<String>) -> Self {
		Self {
			selector,
			renderer_name: renderer_name.into(),
			_strategy: PhantomData,
		}
	}

	/// The renderer-name this setup registers under.
	pub fn renderer_name(&self) -> &str {
		&self.renderer_name
	}

	/// Register this setup's renderer-name with a configuration.
	///
	/// Idempotent: repeated calls with the same renderer-name are no-ops and
	/// never produce a duplicate or conflicting registration.
	pub fn register_to(&self, config: &Configurator) {
		config.add_renderer_type(
			&self.renderer_name,
			SelectableRendererFactory::new(self.renderer_name.clone(), Arc::clone(&self.selector)),
		);
	}

	/// Build a view-scoped renderer declaration from this view's static data
	/// (a format pattern, or a candidate table).
	///
	/// The declaration is valid data before [`register_to`] has run, but a
	/// render through it fails with an unregistered-renderer error until
	/// registration happens.
	///
	/// [`register_to`]: SelectableRendererSetup::register_to
	pub fn renderer(&self, args: impl Into<S::Args>) -> RendererSpec {
		RendererSpec::Selectable(SelectableRenderer {
			renderer_name: self.renderer_name.clone(),
			resolver: S::build(args.into()),
		})
	}
}

/// A view-scoped selectable renderer declaration: the renderer-name to
/// dispatch through plus the resolver bound to this view.
#[derive(Clone)]
pub struct SelectableRenderer {
	pub(crate) renderer_name: String,
	pub(crate) resolver: Arc<dyn PathResolver>,
}

impl SelectableRenderer {
	/// The renderer-name this declaration dispatches through.
	pub fn renderer_name(&self) -> &str {
		&self.renderer_name
	}
}

/// What a view configuration passes as its renderer argument.
#[derive(Clone)]
pub enum RendererSpec {
	/// A fixed renderer identifier, rendered directly through the host
	/// registry with no selection step.
	Template(String),
	/// A selectable declaration minted by a setup façade.
	Selectable(SelectableRenderer),
}

impl RendererSpec {
	/// The name reported to before-render subscribers: the selectable
	/// renderer-name, or the identifier itself for direct declarations.
	pub fn name(&self) -> &str {
		match self {
			Self::Template(identifier) => identifier,
			Self::Selectable(selectable) => &selectable.renderer_name,
		}
	}
}

impl From<&str> for RendererSpec {
	fn from(identifier: &str) -> Self {
		Self::Template(identifier.to_owned())
	}
}

impl From<String> for RendererSpec {
	fn from(identifier: String) -> Self {
		Self::Template(identifier)
	}
}

impl From<SelectableRenderer> for RendererSpec {
	fn from(selectable: SelectableRenderer) -> Self {
		Self::Selectable(selectable)
	}
}
