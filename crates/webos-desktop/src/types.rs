//! Identifier types shared across the crate
//!
//! Window identity is a single opaque string of the form `{wrap}::{suffix}`.
//! Titles are display text only and never take part in lookups.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the wrap id and the window suffix
pub const WINDOW_ID_SEPARATOR: &str = "::";

/// Identifier of a desktop wrap (one isolated window namespace per desktop)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WrapId(String);

impl WrapId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WrapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WrapId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Unique window identifier, composed as `{wrap}::{suffix}`
///
/// The suffix is either a caller-supplied stable id or a generated token.
/// A window keeps its id when it is reassigned to another wrap.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    /// Compose an id from its wrap and suffix
    pub fn compose(wrap: &WrapId, suffix: &str) -> Self {
        Self(format!("{}{}{}", wrap.as_str(), WINDOW_ID_SEPARATOR, suffix))
    }

    /// Wrap an already-composed id string (e.g. received from the host)
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Suffix after the first separator, or the whole id if there is none
    pub fn suffix(&self) -> &str {
        self.0
            .split_once(WINDOW_ID_SEPARATOR)
            .map(|(_, suffix)| suffix)
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique desktop identifier
///
/// Minted from the creation timestamp in milliseconds, bumped when two
/// desktops are created within the same millisecond.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesktopId(pub u64);

impl fmt::Display for DesktopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
