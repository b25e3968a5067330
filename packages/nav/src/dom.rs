//! # Host surfaces consumed by the binder
//!
//! The binder never touches browser globals directly. It is handed a
//! [`Document`] to look elements up in and a [`Navigator`] to send the page
//! somewhere else. Implementations live in sibling modules
//! ([`crate::memory`] for tests and native builds, `crate::web` for the browser).
//!
//! Everything here is single-threaded: handlers run to completion on the host's
//! event queue, so no `Send` bounds are required.

use crate::error::BindError;
use crate::target::RedirectTarget;

/// Click callback attached to an element.
pub type ClickHandler = Box<dyn FnMut()>;

/// Callback run once the document structure is available.
pub type ReadyCallback = Box<dyn FnOnce()>;

/// An interactive element on the page.
pub trait Element: Clone + 'static {
    fn id(&self) -> String;

    /// Read an attribute at call time. `None` if the attribute is absent.
    fn attribute(&self, name: &str) -> Option<String>;

    fn text_content(&self) -> Option<String>;

    /// Attach a click listener. Listeners stay attached for the page lifetime.
    fn on_click(&self, handler: ClickHandler) -> Result<(), BindError>;
}

/// The page's element tree plus its load lifecycle.
pub trait Document: Clone + 'static {
    type Element: Element;

    /// Look up the first element with this id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Run `callback` once the document structure is parsed.
    ///
    /// Runs immediately when the document is already past that point.
    /// Callbacks registered before then run in registration order.
    fn on_ready(&self, callback: ReadyCallback) -> Result<(), BindError>;
}

/// Full-page navigation.
pub trait Navigator: Clone + 'static {
    fn navigate(&self, target: &RedirectTarget);
}
