//! Error types for the desktop core
//!
//! Most desktop operations recover locally and never return an error:
//! unknown window ids are no-ops and deleting the last desktop is refused
//! with `false`. `DesktopError` covers the remaining fallible paths.

use crate::types::WindowId;

/// Errors that can occur in desktop core operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// Window with the given ID was not found
    WindowNotFound(WindowId),

    /// Desktop at the given index was not found
    DesktopIndexOutOfBounds {
        /// The requested index
        index: usize,
        /// The actual number of desktops
        count: usize,
    },

    /// At least one desktop must always exist
    LastDesktop,

    /// No free cell is left in the icon grid
    GridFull {
        /// Number of grid columns
        columns: u32,
        /// Number of grid rows
        rows: u32,
    },

    /// JSON serialization or deserialization failed
    SerializationError(String),

    /// Persistence operation failed
    PersistenceError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WindowNotFound(id) => write!(f, "window not found: {}", id),
            Self::DesktopIndexOutOfBounds { index, count } => {
                write!(
                    f,
                    "desktop index {} out of bounds (count: {})",
                    index, count
                )
            }
            Self::LastDesktop => write!(f, "cannot delete the last desktop"),
            Self::GridFull { columns, rows } => {
                write!(f, "icon grid full ({}x{} cells)", columns, rows)
            }
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
            Self::PersistenceError(msg) => write!(f, "persistence error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DesktopError::WindowNotFound(WindowId::from_raw("d1::term"));
        assert_eq!(err.to_string(), "window not found: d1::term");

        let err = DesktopError::DesktopIndexOutOfBounds { index: 5, count: 3 };
        assert_eq!(
            err.to_string(),
            "desktop index 5 out of bounds (count: 3)"
        );

        let err = DesktopError::GridFull { columns: 4, rows: 2 };
        assert_eq!(err.to_string(), "icon grid full (4x2 cells)");
    }

    #[test]
    fn test_error_from_json() {
        let err: DesktopError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, DesktopError::SerializationError(_)));
    }
}
