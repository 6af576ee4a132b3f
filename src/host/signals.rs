//! Synchronous signals fired by the host rendering pipeline.
//!
//! A trimmed-down pub/sub hub: receivers are plain closures, dispatch happens
//! inline on the rendering thread. The only signal this crate fires itself is
//! [`SignalName::BEFORE_RENDER`], exactly once per render invocation, whether
//! or not the view uses a selectable renderer.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Internal storage for signal names, supporting both static and owned
/// strings.
#[derive(Debug, Clone)]
enum SignalNameInner {
	/// Compile-time constant string (zero allocation).
	Static(&'static str),
	/// Dynamically created name (reference-counted).
	Owned(Arc<str>),
}

/// Type-safe signal name wrapper.
///
/// # Examples
///
/// ```
/// use selectable_renderer::host::SignalName;
///
/// let before_render = SignalName::BEFORE_RENDER;
/// assert_eq!(before_render.as_str(), "before_render");
///
/// let custom = SignalName::custom("my_signal");
/// assert_eq!(custom.as_str(), "my_signal");
/// ```
#[derive(Debug, Clone)]
pub struct SignalName(SignalNameInner);

impl SignalName {
	/// Signal sent immediately before a view's return value is rendered.
	pub const BEFORE_RENDER: Self = Self(SignalNameInner::Static("before_render"));

	/// Create a custom signal name.
	pub fn custom(name: impl Into<Arc<str>>) -> Self {
		Self(SignalNameInner::Owned(name.into()))
	}

	/// The name as a string slice.
	pub fn as_str(&self) -> &str {
		match &self.0 {
			SignalNameInner::Static(name) => name,
			SignalNameInner::Owned(name) => name,
		}
	}
}

impl fmt::Display for SignalName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl PartialEq for SignalName {
	fn eq(&self, other: &Self) -> bool {
		self.as_str() == other.as_str()
	}
}

impl Eq for SignalName {}

type Receiver<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A synchronous signal with typed payload.
pub struct Signal<T> {
	name: SignalName,
	receivers: RwLock<Vec<Receiver<T>>>,
}

impl<T> Signal<T> {
	/// Create a signal with the given name.
	pub fn new(name: SignalName) -> Self {
		Self {
			name,
			receivers: RwLock::new(Vec::new()),
		}
	}

	/// The signal's name.
	pub fn name(&self) -> &SignalName {
		&self.name
	}

	/// Connect a receiver. Receivers are invoked in connection order.
	pub fn connect(&self, receiver: impl Fn(&T) + Send + Sync + 'static) {
		self.receivers.write().push(Arc::new(receiver));
	}

	/// Number of connected receivers.
	pub fn receiver_count(&self) -> usize {
		self.receivers.read().len()
	}

	/// Send an event to every connected receiver.
	pub fn send(&self, event: &T) {
		// Clone out of the lock so a receiver may connect more receivers.
		let receivers: Vec<Receiver<T>> = self.receivers.read().clone();
		for receiver in receivers {
			receiver(event);
		}
	}
}

/// Payload of the [`SignalName::BEFORE_RENDER`] signal.
#[derive(Debug, Clone)]
pub struct BeforeRender {
	/// Name of the view being rendered.
	pub view_name: String,
	/// The renderer declaration's name: the selectable renderer-name, or the
	/// renderer identifier itself for direct declarations.
	pub renderer_name: String,
}
