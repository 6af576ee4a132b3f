//! Convenience layer over a configuration-wide active selector.
//!
//! Some applications want one selection rule for every selectable view — for
//! example, always key on the request host. Rather than threading the same
//! setup façade through every module, the application installs a single
//! selector on its [`Configurator`] during bootstrap and declares views with
//! [`selectable_renderer`], which always resolves through the format strategy
//! against whatever key the active selector produces.
//!
//! The slot is explicit per-configuration state, not ambient process-global
//! state: it lives on the `Configurator`, is write-once
//! ([`Configurator::set_active_selector`]), and reading it before
//! installation is an error surfaced to the caller, never a silent default.
//!
//! This is a thin layer over the per-setup façade: installing the selector
//! registers the reserved renderer-name below through the ordinary
//! registration path.
//!
//! [`Configurator`]: crate::host::Configurator
//! [`Configurator::set_active_selector`]: crate::host::Configurator::set_active_selector

use crate::resolve::FormatTemplatePath;
use crate::setup::{RendererSpec, SelectableRenderer};
use std::sync::Arc;

/// Renderer-name reserved for declarations minted by [`selectable_renderer`].
pub const ACTIVE_RENDERER_NAME: &str = "selectable";

/// Declare a view renderer that resolves `pattern` through the
/// configuration's active selector.
///
/// The declaration itself is plain data; rendering it on a configuration with
/// no installed active selector fails with
/// [`RenderError::ActiveSelectorMissing`](crate::error::RenderError::ActiveSelectorMissing).
///
/// # Examples
///
/// ```
/// use selectable_renderer::active::selectable_renderer;
/// use selectable_renderer::host::Configurator;
/// use selectable_renderer::select;
/// use serde_json::json;
///
/// let config = Configurator::new();
/// config.set_active_selector(select::path_param("status", "???")).unwrap();
///
/// config.add_view(
///     "dummy",
///     |_request| json!({"name": "foo"}),
///     selectable_renderer("%s.dummy"),
/// );
/// ```
pub fn selectable_renderer(pattern: impl Into<String>) -> RendererSpec {
	RendererSpec::Selectable(SelectableRenderer {
		renderer_name: ACTIVE_RENDERER_NAME.to_owned(),
		resolver: Arc::new(FormatTemplatePath::new(pattern)),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_declaration_uses_reserved_name() {
		let spec = selectable_renderer("%s.dummy");
		assert_eq!(spec.name(), ACTIVE_RENDERER_NAME);
	}
}
