//! # Navigation binder — click-to-redirect wiring
//!
//! [`NavigationBinder`] attaches one click listener per known element. Each
//! listener computes its [`RedirectTarget`] when the click happens and hands it
//! to the [`Navigator`], which leaves the page.
//!
//! ## Bindings
//!
//! | Binding | Element | Target |
//! |---------|---------|--------|
//! | about me | `#aboutMeButton` | `/aboutme/<data-pk>/` |
//! | logout | `#logoutButton` | `/accounts/logout/` |
//! | login | `#loginButton` | `/accounts/login/` |
//!
//! Extra fixed links can be added through [`NavConfig`](crate::NavConfig).
//!
//! ## Lifecycle
//!
//! [`install`](NavigationBinder::install) registers one ready subscription per
//! binding. A binding whose element is missing fails on its own: the failure is
//! logged and the other subscriptions still run. Callers that want the errors
//! back use [`bind_all`](NavigationBinder::bind_all) after load instead.

use crate::dom::{Document, Element, Navigator};
use crate::error::BindError;
use crate::target::{PathTemplate, RedirectTarget};

pub const ABOUT_ME_BUTTON_ID: &str = "aboutMeButton";
pub const LOGOUT_BUTTON_ID: &str = "logoutButton";
pub const LOGIN_BUTTON_ID: &str = "loginButton";
pub const RECORD_KEY_ATTRIBUTE: &str = "data-pk";

/// One element id and where clicking it leads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub element_id: String,
    pub path: PathTemplate,
    /// Attribute holding the record key, for parameterized paths.
    pub key_attribute: Option<String>,
    pub base_path: String,
}

impl Binding {
    pub fn about_me() -> Self {
        Self {
            name: "about_me".to_string(),
            element_id: ABOUT_ME_BUTTON_ID.to_string(),
            path: PathTemplate::keyed("/aboutme/", "pk", "/"),
            key_attribute: Some(RECORD_KEY_ATTRIBUTE.to_string()),
            base_path: String::new(),
        }
    }

    pub fn logout() -> Self {
        Self::fixed("logout", LOGOUT_BUTTON_ID, PathTemplate::fixed("/accounts/logout/"))
    }

    pub fn login() -> Self {
        Self::fixed("login", LOGIN_BUTTON_ID, PathTemplate::fixed("/accounts/login/"))
    }

    pub fn fixed(name: &str, element_id: &str, path: PathTemplate) -> Self {
        Self {
            name: name.to_string(),
            element_id: element_id.to_string(),
            path,
            key_attribute: None,
            base_path: String::new(),
        }
    }

    /// Builder method to mount the path under a prefix such as `/en`.
    pub fn with_base_path(mut self, base_path: &str) -> Self {
        self.base_path = base_path.to_string();
        self
    }

    /// Target for an explicit key. A missing key renders as empty.
    pub fn target_with_key(&self, key: Option<&str>) -> RedirectTarget {
        self.path.render(&self.base_path, key.unwrap_or_default())
    }

    /// Target for a click on `element`, reading the key attribute now.
    pub fn target_for<E: Element>(&self, element: &E) -> RedirectTarget {
        let Some(attribute) = &self.key_attribute else {
            return self.target_with_key(None);
        };
        let key = element.attribute(attribute);
        if key.is_none() {
            tracing::warn!(
                binding = %self.name,
                element = %self.element_id,
                attribute = %attribute,
                "record key attribute missing, using empty key"
            );
        }
        self.target_with_key(key.as_deref())
    }
}

/// The full set of bindings for a page, in bind order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindingSet {
    pub about_me: Binding,
    pub logout: Binding,
    pub login: Binding,
    pub links: Vec<Binding>,
}

impl Default for BindingSet {
    fn default() -> Self {
        Self {
            about_me: Binding::about_me(),
            logout: Binding::logout(),
            login: Binding::login(),
            links: Vec::new(),
        }
    }
}

impl BindingSet {
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        [&self.about_me, &self.logout, &self.login]
            .into_iter()
            .chain(self.links.iter())
    }
}

/// Outcome of binding every configured element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BindReport {
    pub bound: Vec<String>,
    pub failed: Vec<(String, BindError)>,
}

impl BindReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Attach the click listener for one binding.
pub fn bind<D: Document, N: Navigator>(
    document: &D,
    navigator: &N,
    binding: &Binding,
) -> Result<(), BindError> {
    let element = document
        .element_by_id(&binding.element_id)
        .ok_or_else(|| BindError::ElementNotFound {
            id: binding.element_id.clone(),
        })?;

    let clicked = element.clone();
    let navigator = navigator.clone();
    let handler_binding = binding.clone();
    element.on_click(Box::new(move || {
        let target = handler_binding.target_for(&clicked);
        tracing::info!(binding = %handler_binding.name, %target, "navigating");
        navigator.navigate(&target);
    }))?;

    tracing::debug!(binding = %binding.name, element = %binding.element_id, "bound click handler");
    Ok(())
}

/// Binds a page's navigation buttons.
#[derive(Clone, Debug)]
pub struct NavigationBinder<D, N> {
    document: D,
    navigator: N,
    bindings: BindingSet,
}

impl<D: Document, N: Navigator> NavigationBinder<D, N> {
    /// Binder with the default about-me, logout and login bindings.
    pub fn new(document: D, navigator: N) -> Self {
        Self::with_bindings(document, navigator, BindingSet::default())
    }

    pub fn with_bindings(document: D, navigator: N, bindings: BindingSet) -> Self {
        Self {
            document,
            navigator,
            bindings,
        }
    }

    pub fn bind_about_me(&self) -> Result<(), BindError> {
        bind(&self.document, &self.navigator, &self.bindings.about_me)
    }

    pub fn bind_logout(&self) -> Result<(), BindError> {
        bind(&self.document, &self.navigator, &self.bindings.logout)
    }

    pub fn bind_login(&self) -> Result<(), BindError> {
        bind(&self.document, &self.navigator, &self.bindings.login)
    }

    /// Bind every element now. One failure never stops the others.
    pub fn bind_all(&self) -> BindReport {
        let mut report = BindReport::default();
        for binding in self.bindings.iter() {
            match bind(&self.document, &self.navigator, binding) {
                Ok(()) => report.bound.push(binding.name.clone()),
                Err(e) => report.failed.push((binding.name.clone(), e)),
            }
        }
        report
    }

    /// Register one ready subscription per binding.
    ///
    /// Errors here only come from the host refusing the subscription itself.
    pub fn install(&self) -> Result<(), BindError> {
        for binding in self.bindings.iter() {
            let document = self.document.clone();
            let navigator = self.navigator.clone();
            let binding = binding.clone();
            self.document.on_ready(Box::new(move || {
                if let Err(e) = bind(&document, &navigator, &binding) {
                    tracing::warn!(binding = %binding.name, "navigation binding skipped: {}", e);
                }
            }))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryDocument, MemoryElement, MemoryNavigator};

    #[test]
    fn test_missing_element_is_named_error() {
        let document = MemoryDocument::new();
        document.insert(MemoryElement::new("loginButton"));
        let navigator = MemoryNavigator::new();
        let binder = NavigationBinder::new(document, navigator);

        assert_eq!(binder.bind_login(), Ok(()));
        assert_eq!(
            binder.bind_logout(),
            Err(BindError::ElementNotFound {
                id: "logoutButton".to_string()
            })
        );
    }

    #[test]
    fn test_bind_all_reports_each_binding() {
        let document = MemoryDocument::new();
        document.insert(MemoryElement::new("loginButton"));
        let binder = NavigationBinder::new(document.clone(), MemoryNavigator::new());

        let report = binder.bind_all();
        assert!(!report.is_complete());
        assert_eq!(report.bound, vec!["login".to_string()]);
        let failed: Vec<&str> = report.failed.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(failed, vec!["about_me", "logout"]);
        assert_eq!(document.element_by_id("loginButton").unwrap().listener_count(), 1);
    }

    #[test]
    fn test_extra_links_are_bound_after_defaults() {
        let document = MemoryDocument::new();
        document.insert(MemoryElement::new("registerButton"));
        let navigator = MemoryNavigator::new();

        let mut bindings = BindingSet::default();
        bindings.links.push(Binding::fixed(
            "register",
            "registerButton",
            PathTemplate::fixed("/accounts/register/"),
        ));
        let names: Vec<&str> = bindings.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["about_me", "logout", "login", "register"]);

        let binder = NavigationBinder::with_bindings(document.clone(), navigator.clone(), bindings);
        let report = binder.bind_all();
        assert_eq!(report.bound, vec!["register".to_string()]);

        document.element_by_id("registerButton").unwrap().click();
        assert_eq!(navigator.last().unwrap().as_str(), "/accounts/register/");
    }

    #[test]
    fn test_base_path_applies_to_clicks() {
        let document = MemoryDocument::new();
        document.insert(MemoryElement::new("aboutMeButton").with_attribute("data-pk", "42"));
        let navigator = MemoryNavigator::new();

        let binding = Binding::about_me().with_base_path("/en");
        bind(&document, &navigator, &binding).unwrap();

        document.element_by_id("aboutMeButton").unwrap().click();
        assert_eq!(navigator.last().unwrap().as_str(), "/en/aboutme/42/");
    }

    #[test]
    fn test_target_with_key() {
        assert_eq!(Binding::about_me().target_with_key(Some("9")).as_str(), "/aboutme/9/");
        assert_eq!(Binding::about_me().target_with_key(None).as_str(), "/aboutme//");
        assert_eq!(Binding::login().target_with_key(Some("9")).as_str(), "/accounts/login/");
    }

    #[test]
    fn test_install_before_elements_exist() {
        // Elements rendered after install but before load still get bound
        let document = MemoryDocument::new();
        let navigator = MemoryNavigator::new();
        NavigationBinder::new(document.clone(), navigator.clone())
            .install()
            .unwrap();

        document.insert(MemoryElement::new("logoutButton"));
        document.fire_ready();

        document.element_by_id("logoutButton").unwrap().click();
        assert_eq!(navigator.last().unwrap().as_str(), "/accounts/logout/");
    }
}
