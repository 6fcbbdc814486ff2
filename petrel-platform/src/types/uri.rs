//! URI model for file and content resources.
//!
//! This module provides the [`Uri`] type, a lightweight representation of
//! the URI strings the client passes between its layers: local-file URIs
//! (`file:///…`), provider-mediated content URIs (`content://…`), and bare
//! filesystem paths with no scheme at all.
//!
//! Metadata resolution does not branch on scheme strings directly; it
//! dispatches on the tagged [`UriTarget`] returned by [`Uri::target`].
//!
//! # Examples
//!
//! ```
//! use std::path::Path;
//! use petrel_platform::types::uri::{Uri, UriTarget};
//!
//! let uri = Uri::parse("content://mail.attachments/item/42");
//! assert_eq!(uri.scheme(), Some("content"));
//! assert_eq!(uri.last_segment(), Some("42"));
//! assert!(matches!(uri.target(), UriTarget::ContentResource));
//!
//! let file = Uri::from_file_path(Path::new("/data/export/draft.eml"));
//! assert_eq!(file.as_str(), "file:///data/export/draft.eml");
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

/// Classification of a [`Uri`] for metadata resolution.
///
/// Produced by [`Uri::target`]; resolution logic matches on this enum
/// instead of comparing scheme strings at each call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriTarget<'a> {
    /// A directly readable filesystem path (`file` scheme or no scheme).
    LocalFile(PathBuf),
    /// A provider-mediated resource (`content` scheme); its metadata must be
    /// queried, not read from the filesystem.
    ContentResource,
    /// Any other scheme. Contains the scheme name.
    Unsupported(&'a str),
}

/// An owned URI string with scheme-aware accessors.
///
/// Parsing is infallible: a string with no recognizable scheme is treated as
/// a bare filesystem path, which is exactly how the rest of the client hands
/// such strings around.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri {
    raw: String,
}

impl Uri {
    /// Wraps a raw URI string.
    pub fn parse(raw: impl Into<String>) -> Self {
        Uri { raw: raw.into() }
    }

    /// Builds the canonical local-file URI for a filesystem path.
    ///
    /// The path is expected to be absolute; the result is
    /// `file://<path>`, e.g. `file:///data/export/draft.eml`.
    pub fn from_file_path(path: &Path) -> Self {
        Uri {
            raw: format!("file://{}", path.display()),
        }
    }

    /// Returns the URI as a string slice.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the scheme, if the URI has one.
    ///
    /// A scheme is an ASCII-alphabetic character followed by alphanumerics
    /// or `+`/`-`/`.`, terminated by `:`. Anything else means the string is
    /// a bare path and `None` is returned.
    pub fn scheme(&self) -> Option<&str> {
        let colon = self.raw.find(':')?;
        let candidate = &self.raw[..colon];
        let mut chars = candidate.chars();
        let first = chars.next()?;
        if !first.is_ascii_alphabetic() {
            return None;
        }
        if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
            Some(candidate)
        } else {
            None
        }
    }

    /// Returns the hierarchical path component.
    ///
    /// The scheme, the authority (the `//host` part, when present), and any
    /// query or fragment are stripped. For a bare path the whole string is
    /// returned.
    pub fn path(&self) -> &str {
        let rest = match self.scheme() {
            Some(scheme) => &self.raw[scheme.len() + 1..],
            None => &self.raw,
        };
        let end = rest.find(|c| c == '?' || c == '#').unwrap_or(rest.len());
        let rest = &rest[..end];

        match rest.strip_prefix("//") {
            Some(hier) => match hier.find('/') {
                Some(slash) => &hier[slash..],
                None => "",
            },
            None => rest,
        }
    }

    /// Returns the last segment of the path, if any.
    ///
    /// A trailing slash is ignored, so `content://a/b/` yields `b`. Returns
    /// `None` when the path is empty or consists only of slashes.
    pub fn last_segment(&self) -> Option<&str> {
        let path = self.path();
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        trimmed.rsplit('/').next().filter(|s| !s.is_empty())
    }

    /// Classifies the URI for metadata resolution.
    ///
    /// - `file` scheme or no scheme: [`UriTarget::LocalFile`] carrying the
    ///   path component.
    /// - `content` scheme: [`UriTarget::ContentResource`].
    /// - anything else: [`UriTarget::Unsupported`] carrying the scheme.
    pub fn target(&self) -> UriTarget<'_> {
        match self.scheme() {
            None | Some("file") => UriTarget::LocalFile(PathBuf::from(self.path())),
            Some("content") => UriTarget::ContentResource,
            Some(other) => UriTarget::Unsupported(other),
        }
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl From<Uri> for String {
    fn from(uri: Uri) -> Self {
        uri.raw
    }
}
