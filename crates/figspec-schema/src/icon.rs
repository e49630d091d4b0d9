//! Suggestion icons and their `fig:` URI encoding.
//!
//! Completion tooling accepts an icon either as a single literal character or
//! as a URI in the `fig` scheme:
//!
//! - `fig:/path/to/file`: the icon of a file on disk
//! - `fig://icon?type=<preset>`: a built-in icon (or a file extension)
//! - `fig://template?...`: a blank template, useful with a badge
//!
//! Any of the URI forms may carry an [`Overlay`] adding `color` and `badge`
//! query parameters, always in that order.
//!
//! Escaping follows RFC 3986: path segments keep `pchar` characters as-is,
//! and query values additionally keep `/` and `?` but escape `&` and `=`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

const SCHEME: &str = "fig";

/// Escapes all but the RFC 3986 unreserved characters.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Escaped within one path segment.
const PATH_SEGMENT: &AsciiSet = &UNRESERVED
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@');

/// Escaped within a query value. `&` and `=` stay escaped since they delimit pairs.
const QUERY_VALUE: &AsciiSet = &UNRESERVED
    .remove(b'!')
    .remove(b'$')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b':')
    .remove(b'@')
    .remove(b'/')
    .remove(b'?');

/// Color and badge decoration applied on top of an icon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    /// Hex color without the leading `#`
    pub color: Option<String>,
    /// Short text drawn over the icon
    pub badge: Option<String>,
}

impl Overlay {
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            badge: None,
        }
    }

    pub fn badge(badge: impl Into<String>) -> Self {
        Self {
            color: None,
            badge: Some(badge.into()),
        }
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    fn apply(&self, uri: &mut UriComponents) {
        if let Some(color) = &self.color {
            uri.query.push(("color", color.clone()));
        }
        if let Some(badge) = &self.badge {
            uri.query.push(("badge", badge.clone()));
        }
    }
}

/// A named built-in icon. Any file extension is accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Preset(Cow<'static, str>);

macro_rules! presets {
    ($($name:ident => $value:literal),* $(,)?) => {
        impl Preset {
            $(pub const $name: Preset = Preset(Cow::Borrowed($value));)*
        }
    };
}

presets! {
    ALERT => "alert",
    ANDROID => "android",
    APPLE => "apple",
    ASTERISK => "asterisk",
    AWS => "aws",
    AZURE => "azure",
    BOX => "box",
    CARROT => "carrot",
    CHARACTERS => "characters",
    COMMAND => "command",
    COMMANDKEY => "commandkey",
    COMMIT => "commit",
    DATABASE => "database",
    DOCKER => "docker",
    FIREBASE => "firebase",
    GCLOUD => "gcloud",
    GIT => "git",
    GITHUB => "github",
    GITLAB => "gitlab",
    GRADLE => "gradle",
    HEROKU => "heroku",
    INVITE => "invite",
    KUBERNETES => "kubernetes",
    NETLIFY => "netlify",
    NODE => "node",
    NPM => "npm",
    OPTION => "option",
    PACKAGE => "package",
    SLACK => "slack",
    STRING => "string",
    TWITTER => "twitter",
    VERCEL => "vercel",
    YARN => "yarn",
}

impl Preset {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Preset {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// The icon shown next to a suggestion.
#[derive(Debug, Clone, PartialEq)]
pub enum Icon {
    Character(char),
    Path(PathBuf, Option<Overlay>),
    Preset(Preset, Option<Overlay>),
    Template(Overlay),
}

/// An icon that cannot be rendered as a URI.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("could not encode icon {icon}: {reason}")]
pub struct IconError {
    /// Textual form of the offending icon
    pub icon: String,
    pub reason: &'static str,
}

impl Icon {
    /// Render the icon to the string completion tooling expects.
    pub fn encode(&self) -> Result<String, IconError> {
        match self {
            Icon::Character(c) => Ok(c.to_string()),
            Icon::Path(path, overlay) => {
                let text = path.to_str().ok_or_else(|| self.error("path is not valid UTF-8"))?;
                if !text.starts_with('/') {
                    return Err(self.error("path is not absolute"));
                }
                if text.starts_with("//") {
                    return Err(self.error("path would be read as a URI authority"));
                }
                let mut uri = UriComponents::with_path(text);
                if let Some(overlay) = overlay {
                    overlay.apply(&mut uri);
                }
                Ok(uri.render())
            }
            Icon::Preset(preset, overlay) => {
                if preset.as_str().is_empty() {
                    return Err(self.error("preset name is empty"));
                }
                let mut uri = UriComponents::with_authority("icon");
                uri.query.push(("type", preset.as_str().to_string()));
                if let Some(overlay) = overlay {
                    overlay.apply(&mut uri);
                }
                Ok(uri.render())
            }
            Icon::Template(overlay) => {
                let mut uri = UriComponents::with_authority("template");
                overlay.apply(&mut uri);
                Ok(uri.render())
            }
        }
    }

    fn error(&self, reason: &'static str) -> IconError {
        IconError {
            icon: self.to_string(),
            reason,
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Icon::Character(c) => write!(f, "character {c:?}"),
            Icon::Path(path, _) => write!(f, "path {}", path.display()),
            Icon::Preset(preset, _) => write!(f, "preset {:?}", preset.as_str()),
            Icon::Template(_) => write!(f, "template"),
        }
    }
}

impl Serialize for Icon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = self.encode().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&encoded)
    }
}

/// One URI under construction. Built fresh for every encode.
struct UriComponents {
    authority: Option<&'static str>,
    path: String,
    query: Vec<(&'static str, String)>,
}

impl UriComponents {
    fn with_path(path: &str) -> Self {
        Self {
            authority: None,
            path: path
                .split('/')
                .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
                .collect::<Vec<_>>()
                .join("/"),
            query: Vec::new(),
        }
    }

    fn with_authority(authority: &'static str) -> Self {
        Self {
            authority: Some(authority),
            path: String::new(),
            query: Vec::new(),
        }
    }

    fn render(&self) -> String {
        let mut out = format!("{SCHEME}:");
        if let Some(authority) = self.authority {
            out.push_str("//");
            out.push_str(authority);
        }
        out.push_str(&self.path);
        for (i, (key, value)) in self.query.iter().enumerate() {
            out.push(if i == 0 { '?' } else { '&' });
            out.push_str(key);
            out.push('=');
            out.extend(utf8_percent_encode(value, QUERY_VALUE));
        }
        out
    }
}
