//! # Page-level configuration — `nav.toml`
//!
//! Which element ids to bind and where they lead. The defaults reproduce the
//! accounts pages exactly, so a page without config behaves like one with an
//! empty config.
//!
//! ## Structure
//!
//! ```toml
//! base_path = ""              # prefix such as "/en" for localized routes
//!
//! [about_me]
//! element_id = "aboutMeButton"
//! key_attribute = "data-pk"
//! path = "/aboutme/{pk}/"
//!
//! [logout]
//! element_id = "logoutButton"
//! path = "/accounts/logout/"
//!
//! [login]
//! element_id = "loginButton"
//! path = "/accounts/login/"
//!
//! [[links]]                    # extra fixed links, none by default
//! element_id = "registerButton"
//! path = "/accounts/register/"
//! ```
//!
//! Sections are all-or-nothing: a section that is present must name every field.
//!
//! In the browser the TOML can be embedded in the page itself, in an element
//! with id [`CONFIG_ELEMENT_ID`] (typically `<script type="application/toml">`).

use serde::{Deserialize, Serialize};

use crate::binder::{
    Binding, BindingSet, ABOUT_ME_BUTTON_ID, LOGIN_BUTTON_ID, LOGOUT_BUTTON_ID,
    RECORD_KEY_ATTRIBUTE,
};
use crate::dom::{Document, Element};
use crate::error::ConfigError;
use crate::target::PathTemplate;

/// Id of the element that may carry the config on the page.
pub const CONFIG_ELEMENT_ID: &str = "nav-config";

/// Top-level navigation config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    #[serde(default)]
    pub base_path: String,
    #[serde(default = "KeyedLinkConfig::about_me")]
    pub about_me: KeyedLinkConfig,
    #[serde(default = "LinkConfig::logout")]
    pub logout: LinkConfig,
    #[serde(default = "LinkConfig::login")]
    pub login: LinkConfig,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkConfig>,
}

/// A button leading to a fixed path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkConfig {
    pub element_id: String,
    pub path: String,
}

/// A button whose path carries a record key read from one of its attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyedLinkConfig {
    pub element_id: String,
    pub key_attribute: String,
    pub path: String,
}

impl LinkConfig {
    fn logout() -> Self {
        Self {
            element_id: LOGOUT_BUTTON_ID.to_string(),
            path: "/accounts/logout/".to_string(),
        }
    }

    fn login() -> Self {
        Self {
            element_id: LOGIN_BUTTON_ID.to_string(),
            path: "/accounts/login/".to_string(),
        }
    }

    fn to_binding(&self, name: &str, base_path: &str) -> Result<Binding, ConfigError> {
        let path = PathTemplate::parse(&self.path)?;
        if path.has_placeholder() {
            return Err(ConfigError::UnexpectedPlaceholder {
                element_id: self.element_id.clone(),
                template: self.path.clone(),
            });
        }
        Ok(Binding::fixed(name, &self.element_id, path).with_base_path(base_path))
    }
}

impl KeyedLinkConfig {
    fn about_me() -> Self {
        Self {
            element_id: ABOUT_ME_BUTTON_ID.to_string(),
            key_attribute: RECORD_KEY_ATTRIBUTE.to_string(),
            path: "/aboutme/{pk}/".to_string(),
        }
    }

    fn to_binding(&self, name: &str, base_path: &str) -> Result<Binding, ConfigError> {
        let path = PathTemplate::parse(&self.path)?;
        if !path.has_placeholder() {
            return Err(ConfigError::MissingPlaceholder {
                element_id: self.element_id.clone(),
                template: self.path.clone(),
            });
        }
        Ok(Binding {
            name: name.to_string(),
            element_id: self.element_id.clone(),
            path,
            key_attribute: Some(self.key_attribute.clone()),
            base_path: base_path.to_string(),
        })
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            about_me: KeyedLinkConfig::about_me(),
            logout: LinkConfig::logout(),
            login: LinkConfig::login(),
            links: Vec::new(),
        }
    }
}

impl NavConfig {
    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read the config embedded in the page, if any.
    ///
    /// No config element means the defaults.
    pub fn from_document<D: Document>(document: &D) -> Result<Self, ConfigError> {
        let text = document
            .element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
            .unwrap_or_default();
        Self::from_toml(&text)
    }

    /// Validate every path and build the bindings in bind order.
    pub fn bindings(&self) -> Result<BindingSet, ConfigError> {
        let base_path = self.normalized_base_path()?;
        let links = self
            .links
            .iter()
            .map(|link| link.to_binding(&link.element_id, base_path))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BindingSet {
            about_me: self.about_me.to_binding("about_me", base_path)?,
            logout: self.logout.to_binding("logout", base_path)?,
            login: self.login.to_binding("login", base_path)?,
            links,
        })
    }

    fn normalized_base_path(&self) -> Result<&str, ConfigError> {
        let base_path = self.base_path.trim_end_matches('/');
        if !base_path.is_empty()
            && (!base_path.starts_with('/') || base_path.starts_with("//") || base_path.contains('\\'))
        {
            return Err(ConfigError::InvalidBasePath(self.base_path.clone()));
        }
        Ok(base_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryDocument, MemoryElement};

    #[test]
    fn test_empty_config_is_default() {
        let config = NavConfig::from_toml("").unwrap();
        assert_eq!(config, NavConfig::default());
        assert_eq!(config.bindings().unwrap(), BindingSet::default());
    }

    #[test]
    fn test_default_survives_toml() {
        let text = NavConfig::default().to_toml().unwrap();
        assert!(text.contains("aboutMeButton"));
        assert_eq!(NavConfig::from_toml(&text).unwrap(), NavConfig::default());
    }

    #[test]
    fn test_overrides_and_links() {
        let config = NavConfig::from_toml(
            r#"
            base_path = "/en/"

            [login]
            element_id = "signIn"
            path = "/accounts/login/"

            [[links]]
            element_id = "registerButton"
            path = "/accounts/register/"
            "#,
        )
        .unwrap();

        let bindings = config.bindings().unwrap();
        assert_eq!(bindings.login.element_id, "signIn");
        assert_eq!(bindings.login.target_with_key(None).as_str(), "/en/accounts/login/");
        assert_eq!(
            bindings.about_me.target_with_key(Some("3")).as_str(),
            "/en/aboutme/3/"
        );
        assert_eq!(bindings.links.len(), 1);
        assert_eq!(bindings.links[0].name, "registerButton");
        assert_eq!(
            bindings.links[0].target_with_key(None).as_str(),
            "/en/accounts/register/"
        );
    }

    #[test]
    fn test_incomplete_section_is_rejected() {
        let result = NavConfig::from_toml(
            r#"
            [logout]
            path = "/bye/"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_paths() {
        let mut config = NavConfig::default();
        config.about_me.path = "/aboutme/".to_string();
        assert!(matches!(
            config.bindings(),
            Err(ConfigError::MissingPlaceholder { .. })
        ));

        let mut config = NavConfig::default();
        config.logout.path = "/accounts/logout/{pk}/".to_string();
        assert!(matches!(
            config.bindings(),
            Err(ConfigError::UnexpectedPlaceholder { .. })
        ));

        let mut config = NavConfig::default();
        config.login.path = "accounts/login/".to_string();
        assert!(matches!(
            config.bindings(),
            Err(ConfigError::InvalidTemplate { .. })
        ));

        let config = NavConfig {
            base_path: "en".to_string(),
            ..NavConfig::default()
        };
        assert!(matches!(
            config.bindings(),
            Err(ConfigError::InvalidBasePath(_))
        ));
    }

    #[test]
    fn test_rejects_other_origins() {
        for base_path in ["//evil.example", "/\\evil.example", "/en\\x"] {
            let config = NavConfig::from_toml(&format!("base_path = {base_path:?}")).unwrap();
            assert!(
                matches!(config.bindings(), Err(ConfigError::InvalidBasePath(_))),
                "{base_path} should be rejected"
            );
        }

        let mut config = NavConfig::default();
        config.login.path = "//evil.example/login".to_string();
        assert!(matches!(
            config.bindings(),
            Err(ConfigError::InvalidTemplate { .. })
        ));

        let mut config = NavConfig::default();
        config.about_me.path = "/{pk}/".to_string();
        assert!(matches!(
            config.bindings(),
            Err(ConfigError::InvalidTemplate { .. })
        ));

        let mut config = NavConfig::default();
        config.links.push(LinkConfig {
            element_id: "registerButton".to_string(),
            path: "/\\evil.example/".to_string(),
        });
        assert!(matches!(
            config.bindings(),
            Err(ConfigError::InvalidTemplate { .. })
        ));
    }

    #[test]
    fn test_from_document() {
        let document = MemoryDocument::new();
        assert_eq!(
            NavConfig::from_document(&document).unwrap(),
            NavConfig::default()
        );

        document.insert(
            MemoryElement::new(CONFIG_ELEMENT_ID).with_text("base_path = \"/de\"\n"),
        );
        let config = NavConfig::from_document(&document).unwrap();
        assert_eq!(config.base_path, "/de");

        document.remove(CONFIG_ELEMENT_ID);
        document.insert(MemoryElement::new(CONFIG_ELEMENT_ID).with_text("base_path = ["));
        assert!(NavConfig::from_document(&document).is_err());
    }
}
