//! # selectable-renderer
//!
//! Per-request renderer selection for view rendering.
//!
//! Instead of declaring one fixed renderer, a view declares a *selection
//! scheme*: a [`Selector`](select::Selector) computes a key from the incoming
//! request (a path parameter, the Host header, anything request-derived), a
//! [`PathResolver`](resolve::PathResolver) turns that key into a concrete
//! renderer identifier, and the compiled renderer for that identifier is
//! fetched from a per-scheme cache — compiled through the host registry at
//! most once per identifier — and invoked with the view's return value.
//!
//! ## Quick start
//!
//! ```
//! use selectable_renderer::host::{Configurator, Request};
//! use selectable_renderer::renderer::{factory_from_fn, from_fn};
//! use selectable_renderer::resolve::FormatTemplatePath;
//! use selectable_renderer::select::path_param;
//! use selectable_renderer::setup::SelectableRendererSetup;
//! use serde_json::json;
//!
//! // One selection scheme: key on the `status` path parameter.
//! let dead_or_alive = SelectableRendererSetup::<FormatTemplatePath>::new(
//!     path_param("status", "???"),
//!     "dead_or_alive",
//! );
//!
//! let config = Configurator::new();
//! dead_or_alive.register_to(&config);
//!
//! // A stand-in for the host framework's template machinery.
//! config.add_renderer(
//!     ".dummy",
//!     factory_from_fn(|info| {
//!         let name = info.name.clone();
//!         Ok(from_fn(move |value, _system| {
//!             Ok(format!("{}: {}", name, value["name"].as_str().unwrap_or("?")))
//!         }))
//!     }),
//! );
//!
//! // The view declares the scheme plus its own format pattern.
//! config.add_view(
//!     "dummy",
//!     |request: &Request| json!({"name": request.path_param("name").unwrap_or("?")}),
//!     dead_or_alive.renderer("%s.dummy"),
//! );
//!
//! let request = Request::builder()
//!     .uri("/dummy")
//!     .path_param("name", "foo")
//!     .path_param("status", "alive")
//!     .build()
//!     .unwrap();
//! let response = config.render_view_to_response(&request, "dummy").unwrap();
//! assert_eq!(response.body_text(), "alive.dummy: foo");
//! ```
//!
//! ## Design
//!
//! - Selector and resolver strategies are values built by factory functions
//!   ([`select::path_param`], [`select::from_request`]) and strategy types
//!   ([`resolve::FormatTemplatePath`], [`resolve::CandidateTemplatePaths`]),
//!   combined by the [`setup::SelectableRendererSetup`] façade.
//! - Registration is idempotent and keyed by renderer-name; independent
//!   schemes on one configuration never interfere.
//! - All errors — selection, resolution, compilation, rendering — propagate
//!   to the host framework untranslated; see [`error::RenderError`].
//! - For applications with a single selection rule, [`active`] offers a
//!   write-once per-configuration selector slot behind
//!   [`active::selectable_renderer`].

pub mod active;
pub mod error;
pub mod factory;
pub mod host;
pub mod renderer;
pub mod resolve;
pub mod select;
pub mod setup;
pub mod tera;

pub use active::selectable_renderer;
pub use error::RenderError;
pub use resolve::{CandidateTable, CandidateTemplatePaths, FormatTemplatePath};
pub use select::{SelectionKey, Selector};
pub use setup::{RendererSpec, SelectableRendererSetup};
