//! # Redirect targets and path templates
//!
//! A [`RedirectTarget`] is the path a click navigates to. It is computed on every
//! click from a [`PathTemplate`], used once, and dropped.
//!
//! Templates are plain paths with optional `{name}` placeholders:
//!
//! | Template | Key | Target |
//! |----------|-----|--------|
//! | `/accounts/login/` | (none) | `/accounts/login/` |
//! | `/aboutme/{pk}/` | `42` | `/aboutme/42/` |
//! | `/aboutme/{pk}/` | `""` | `/aboutme//` |
//!
//! Every placeholder is replaced by the record key verbatim. The key is not
//! validated or escaped, so the server sees exactly what the page carried.

use std::fmt;

use crate::error::ConfigError;

/// A path to navigate to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RedirectTarget(String);

impl RedirectTarget {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed path such as `/aboutme/{pk}/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Parse a template, rejecting unbalanced braces and empty placeholder names.
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidTemplate {
            template: source.to_string(),
            reason: reason.to_string(),
        };

        if !source.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }
        // Browsers read `//host` and `/\host` as another origin
        if source.starts_with("//") {
            return Err(invalid("must not start with '//'"));
        }
        if source.contains('\\') {
            return Err(invalid("must not contain '\\'"));
        }

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut placeholder: Option<String> = None;

        for c in source.chars() {
            match c {
                '{' => {
                    if placeholder.is_some() {
                        return Err(invalid("nested '{'"));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    placeholder = Some(String::new());
                }
                '}' => {
                    let Some(name) = placeholder.take() else {
                        return Err(invalid("unmatched '}'"));
                    };
                    let name = name.trim();
                    if name.is_empty() {
                        return Err(invalid("empty placeholder"));
                    }
                    segments.push(Segment::Placeholder(name.to_string()));
                }
                c => match placeholder.as_mut() {
                    Some(name) => name.push(c),
                    None => literal.push(c),
                },
            }
        }

        if placeholder.is_some() {
            return Err(invalid("unclosed '{'"));
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        // A key starting with '/' would otherwise render as `//host`
        if let [Segment::Literal(lead), Segment::Placeholder(_), ..] = segments.as_slice() {
            if lead == "/" {
                return Err(invalid("placeholder must not directly follow the leading '/'"));
            }
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// A template without placeholders.
    pub(crate) fn fixed(path: &str) -> Self {
        Self {
            source: path.to_string(),
            segments: vec![Segment::Literal(path.to_string())],
        }
    }

    /// A template of the form `{prefix}{name}{suffix}`.
    pub(crate) fn keyed(prefix: &str, name: &str, suffix: &str) -> Self {
        Self {
            source: format!("{prefix}{{{name}}}{suffix}"),
            segments: vec![
                Segment::Literal(prefix.to_string()),
                Segment::Placeholder(name.to_string()),
                Segment::Literal(suffix.to_string()),
            ],
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn has_placeholder(&self) -> bool {
        self.placeholders().next().is_some()
    }

    /// Names of the placeholders, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Render under `base_path`, substituting `key` for every placeholder.
    pub fn render(&self, base_path: &str, key: &str) -> RedirectTarget {
        let mut path = String::from(base_path);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Placeholder(_) => path.push_str(key),
            }
        }
        RedirectTarget(path)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
