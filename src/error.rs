//! Error types for renderer selection and dispatch.
//!
//! Every error in this crate is fatal to the request that triggered it: nothing
//! is retried and nothing is downgraded to a default response. The only place a
//! default is ever applied is the caller-configured default of the candidate
//! table resolver, which is a configuration feature rather than error recovery.

use thiserror::Error;

/// Boxed error type used for errors that originate outside this crate
/// (selector extraction closures, template engines).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised while selecting, resolving, compiling, or invoking a renderer.
#[derive(Debug, Error)]
pub enum RenderError {
	/// A selector's extraction function failed for this request.
	///
	/// Propagated transparently: only the declaring application knows the
	/// correct fallback policy, so the original error is surfaced unchanged.
	#[error(transparent)]
	Selection(BoxError),

	/// The candidate table holds no entry for the selection key and no
	/// default path was configured.
	#[error("no template path for selection key `{key}`")]
	Resolution {
		/// The selection key that missed the table.
		key: String,
	},

	/// A format pattern is unusable for substitution.
	#[error("format pattern `{pattern}` must contain exactly one `%s` placeholder")]
	Format {
		/// The offending pattern.
		pattern: String,
	},

	/// No renderer factory is registered that can compile this identifier.
	#[error("no renderer factory registered for `{identifier}`")]
	NoRendererFactory {
		/// The renderer identifier that could not be matched to a factory.
		identifier: String,
	},

	/// The host registry's factory failed to compile the renderer.
	#[error("failed to compile renderer for `{identifier}`")]
	Compilation {
		/// The renderer identifier whose compilation failed.
		identifier: String,
		/// The factory's own error.
		#[source]
		source: BoxError,
	},

	/// A compiled renderer failed while producing output.
	#[error("renderer failed: {0}")]
	Render(#[source] BoxError),

	/// A view declared a selectable renderer name that was never registered
	/// on this configuration.
	#[error("renderer name `{0}` is not registered; call register_to first")]
	UnregisteredRendererName(String),

	/// A `selectable_renderer` view was rendered before an active selector
	/// was installed on the configuration.
	#[error("no active selector installed on this configuration")]
	ActiveSelectorMissing,

	/// `set_active_selector` was called twice on the same configuration.
	#[error("an active selector is already installed on this configuration")]
	ActiveSelectorInstalled,

	/// No view is registered under the requested name.
	#[error("no view named `{0}`")]
	ViewNotFound(String),

	/// Building a request failed (malformed URI or header).
	#[error("invalid request: {0}")]
	InvalidRequest(#[from] http::Error),
}

impl RenderError {
	/// Wrap an external extraction error as a selection failure.
	pub fn selection(err: impl Into<BoxError>) -> Self {
		Self::Selection(err.into())
	}
}
