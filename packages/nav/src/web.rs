//! # Browser host — web-sys DOM and location
//!
//! [`WebDocument`] and [`WebElement`] wrap the live page, [`WebNavigator`] sets
//! `window.location.href`.
//!
//! ## Load timing
//!
//! A wasm bundle usually finishes instantiating after `DOMContentLoaded` has
//! already fired. [`WebDocument::on_ready`] therefore checks
//! `document.readyState` and runs the callback immediately unless the document
//! is still `loading`.
//!
//! ## Listener lifetime
//!
//! Click and load closures are leaked with [`Closure::forget`]. They live as
//! long as the page, and a navigation unloads the page anyway.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::dom::{ClickHandler, Document, Element, Navigator, ReadyCallback};
use crate::error::BindError;
use crate::target::RedirectTarget;

/// The current page's document.
#[derive(Clone, Debug)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    /// `None` outside a window context, e.g. in a worker.
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn on_ready(&self, callback: ReadyCallback) -> Result<(), BindError> {
        if self.document.ready_state() != "loading" {
            callback();
            return Ok(());
        }

        let closure = Closure::once(move || callback());
        self.document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
            .map_err(|e| BindError::Listener {
                target: "document".to_string(),
                reason: describe(&e),
            })?;
        closure.forget();
        Ok(())
    }
}

/// An element of the live page.
#[derive(Clone, Debug)]
pub struct WebElement(web_sys::Element);

impl Element for WebElement {
    fn id(&self) -> String {
        self.0.id()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn text_content(&self) -> Option<String> {
        self.0.text_content()
    }

    fn on_click(&self, handler: ClickHandler) -> Result<(), BindError> {
        let closure = Closure::<dyn FnMut()>::wrap(handler);
        self.0
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|e| BindError::Listener {
                target: format!("#{}", self.0.id()),
                reason: describe(&e),
            })?;
        closure.forget();
        Ok(())
    }
}

/// Navigates by setting `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebNavigator;

impl Navigator for WebNavigator {
    fn navigate(&self, target: &RedirectTarget) {
        let Some(window) = web_sys::window() else {
            tracing::error!(%target, "no window to navigate");
            return;
        };
        if let Err(e) = window.location().set_href(target.as_str()) {
            tracing::error!(%target, "failed to navigate: {}", describe(&e));
        }
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
