//! Client bundle for the server-rendered account pages.
//!
//! Binds `#aboutMeButton`, `#logoutButton` and `#loginButton` (plus any links
//! the page's `nav-config` element declares) to full-page navigations.

fn main() {
    dioxus::logger::initialize_default();

    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        if let Err(e) = start() {
            tracing::error!("Failed to start navigation binder: {}", e);
        }
    }

    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        tracing::error!("The navigation bundle only runs in a browser; build it for wasm32 with the `web` feature");
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn start() -> Result<(), nav::BindError> {
    use nav::web::{WebDocument, WebNavigator};
    use nav::{BindingSet, Document, NavConfig, NavigationBinder};

    let Some(document) = WebDocument::current() else {
        tracing::error!("No document available");
        return Ok(());
    };

    // The config element is only guaranteed to be parsed once the document is ready
    let page = document.clone();
    document.on_ready(Box::new(move || {
        let bindings = match NavConfig::from_document(&page).and_then(|config| config.bindings()) {
            Ok(bindings) => bindings,
            Err(e) => {
                tracing::error!("Invalid navigation config, using defaults: {}", e);
                BindingSet::default()
            }
        };
        if let Err(e) = NavigationBinder::with_bindings(page, WebNavigator, bindings).install() {
            tracing::error!("Failed to install navigation bindings: {}", e);
        }
    }))
}
