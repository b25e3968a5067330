use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::dom::{ClickHandler, Document, Element, Navigator, ReadyCallback};
use crate::error::BindError;
use crate::target::RedirectTarget;

/// In-memory Document for testing and native builds.
#[derive(Clone, Default)]
pub struct MemoryDocument {
    state: Rc<RefCell<DocumentState>>,
}

#[derive(Default)]
struct DocumentState {
    elements: Vec<MemoryElement>,
    ready: bool,
    pending: Vec<ReadyCallback>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element to the page.
    pub fn insert(&self, element: MemoryElement) {
        self.state.borrow_mut().elements.push(element);
    }

    /// Remove every element with this id.
    pub fn remove(&self, id: &str) {
        self.state
            .borrow_mut()
            .elements
            .retain(|element| element.id() != id);
    }

    /// Simulate the end of parsing: run pending ready callbacks once, in order.
    pub fn fire_ready(&self) {
        let pending = {
            let mut state = self.state.borrow_mut();
            state.ready = true;
            std::mem::take(&mut state.pending)
        };
        for callback in pending {
            callback();
        }
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.state
            .borrow()
            .elements
            .iter()
            .find(|element| element.id() == id)
            .cloned()
    }

    fn on_ready(&self, callback: ReadyCallback) -> Result<(), BindError> {
        let mut state = self.state.borrow_mut();
        if state.ready {
            drop(state);
            callback();
        } else {
            state.pending.push(callback);
        }
        Ok(())
    }
}

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("MemoryDocument")
            .field("elements", &state.elements)
            .field("ready", &state.ready)
            .field("pending", &state.pending.len())
            .finish()
    }
}

/// In-memory element. Clones share the same underlying node.
#[derive(Clone)]
pub struct MemoryElement {
    state: Rc<RefCell<ElementState>>,
}

struct ElementState {
    id: String,
    attributes: HashMap<String, String>,
    text: Option<String>,
    click_handlers: Vec<ClickHandler>,
}

impl MemoryElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            state: Rc::new(RefCell::new(ElementState {
                id: id.into(),
                attributes: HashMap::new(),
                text: None,
                click_handlers: Vec::new(),
            })),
        }
    }

    /// Builder method to set an attribute.
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder method to set the text content.
    pub fn with_text(self, text: &str) -> Self {
        self.state.borrow_mut().text = Some(text.to_string());
        self
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.state
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn remove_attribute(&self, name: &str) {
        self.state.borrow_mut().attributes.remove(name);
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().click_handlers.len()
    }

    /// Simulate a user activating the element.
    pub fn click(&self) {
        // Handlers read attributes of this element, so release the borrow first.
        let mut handlers = std::mem::take(&mut self.state.borrow_mut().click_handlers);
        for handler in handlers.iter_mut() {
            handler();
        }
        let mut state = self.state.borrow_mut();
        handlers.append(&mut state.click_handlers);
        state.click_handlers = handlers;
    }
}

impl Element for MemoryElement {
    fn id(&self) -> String {
        self.state.borrow().id.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    fn text_content(&self) -> Option<String> {
        self.state.borrow().text.clone()
    }

    fn on_click(&self, handler: ClickHandler) -> Result<(), BindError> {
        self.state.borrow_mut().click_handlers.push(handler);
        Ok(())
    }
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("MemoryElement")
            .field("id", &state.id)
            .field("attributes", &state.attributes)
            .field("listeners", &state.click_handlers.len())
            .finish()
    }
}

/// Navigator that records every navigation instead of leaving the page.
#[derive(Clone, Debug, Default)]
pub struct MemoryNavigator {
    history: Rc<RefCell<Vec<RedirectTarget>>>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<RedirectTarget> {
        self.history.borrow().clone()
    }

    pub fn last(&self) -> Option<RedirectTarget> {
        self.history.borrow().last().cloned()
    }
}

impl Navigator for MemoryNavigator {
    fn navigate(&self, target: &RedirectTarget) {
        self.history.borrow_mut().push(target.clone());
    }
}
