//! Integration tests for the configuration-wide active-selector layer.

use selectable_renderer::RenderError;
use selectable_renderer::active::selectable_renderer;
use selectable_renderer::host::{Configurator, Request};
use selectable_renderer::renderer::{RendererInfo, factory_from_fn, from_fn};
use selectable_renderer::select;
use serde_json::json;
use std::sync::Arc;

fn dummy_factory() -> Arc<dyn selectable_renderer::renderer::RendererFactory> {
	factory_from_fn(|info: &RendererInfo| {
		let name = info.name.clone();
		Ok(from_fn(move |value, _system| {
			Ok(format!("{}: {}", name, value["name"].as_str().unwrap_or("?")))
		}))
	})
}

fn status_request(name: &str, status: &str) -> Request {
	Request::builder()
		.uri("/dummy")
		.path_param("name", name)
		.path_param("status", status)
		.build()
		.unwrap()
}

#[test]
fn test_generic_declaration_uses_installed_selector() {
	let config = Configurator::new();
	config.add_renderer(".dummy", dummy_factory());
	config
		.set_active_selector(select::path_param("status", "???"))
		.unwrap();

	config.add_view(
		"dummy",
		|request: &Request| json!({"name": request.path_param("name").unwrap_or("?")}),
		selectable_renderer("%s.dummy"),
	);

	let response = config
		.render_view_to_response(&status_request("foo", "alive"), "dummy")
		.unwrap();
	assert_eq!(response.body_text(), "alive.dummy: foo");

	let response = config
		.render_view_to_response(&status_request("foo", "dead"), "dummy")
		.unwrap();
	assert_eq!(response.body_text(), "dead.dummy: foo");
}

#[test]
fn test_rendering_before_install_is_an_error() {
	let config = Configurator::new();
	config.add_renderer(".dummy", dummy_factory());
	config.add_view(
		"dummy",
		|_request| json!({"name": "foo"}),
		selectable_renderer("%s.dummy"),
	);

	// The reserved renderer-name is only registered by installation, so the
	// declaration cannot dispatch yet.
	let err = config
		.render_view_to_response(&status_request("foo", "alive"), "dummy")
		.unwrap_err();
	assert!(matches!(err, RenderError::UnregisteredRendererName(_)));

	config
		.set_active_selector(select::path_param("status", "???"))
		.unwrap();
	let response = config
		.render_view_to_response(&status_request("foo", "alive"), "dummy")
		.unwrap();
	assert_eq!(response.body_text(), "alive.dummy: foo");
}

#[test]
fn test_second_install_is_rejected() {
	let config = Configurator::new();
	config
		.set_active_selector(select::path_param("status", "???"))
		.unwrap();
	let err = config
		.set_active_selector(select::host())
		.unwrap_err();
	assert!(matches!(err, RenderError::ActiveSelectorInstalled));
}

#[test]
fn test_active_layer_coexists_with_explicit_setups() {
	use selectable_renderer::resolve::FormatTemplatePath;
	use selectable_renderer::setup::SelectableRendererSetup;

	let config = Configurator::new();
	config.add_renderer(".dummy", dummy_factory());
	config
		.set_active_selector(select::path_param("status", "???"))
		.unwrap();

	let by_name = SelectableRendererSetup::<FormatTemplatePath>::new(
		select::path_param("name", "anon"),
		"by_name",
	);
	by_name.register_to(&config);

	config.add_view(
		"generic",
		|_request| json!({"name": "foo"}),
		selectable_renderer("%s.dummy"),
	);
	config.add_view(
		"named",
		|_request| json!({"name": "foo"}),
		by_name.renderer("%s.dummy"),
	);

	let response = config
		.render_view_to_response(&status_request("foo", "alive"), "generic")
		.unwrap();
	assert_eq!(response.body_text(), "alive.dummy: foo");

	// The explicit setup keys on `name`, independent of the active selector.
	let response = config
		.render_view_to_response(&status_request("foo", "alive"), "named")
		.unwrap();
	assert_eq!(response.body_text(), "foo.dummy: foo");
}
