pub mod binder;
pub mod config;
pub mod dom;
pub mod error;
pub mod target;

mod memory;
pub use memory::{MemoryDocument, MemoryElement, MemoryNavigator};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub mod web;

pub use binder::{bind, BindReport, Binding, BindingSet, NavigationBinder};
pub use config::NavConfig;
pub use dom::{Document, Element, Navigator};
pub use error::{BindError, ConfigError};
pub use target::{PathTemplate, RedirectTarget};
