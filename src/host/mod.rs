//! Host-framework boundary: the minimal request/response, signal, and
//! configuration surface the selection machinery integrates with.
//!
//! A full web framework brings its own versions of these pieces; they are
//! kept small here and expose exactly the interfaces the core calls into
//! (renderer-factory lookup, renderer-type registration, the before-render
//! signal) or is called from (`render_view_to_response`).

mod config;
mod request;
mod response;
mod signals;

pub use config::{Configurator, ViewFn};
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use signals::{BeforeRender, Signal, SignalName};
