use serde::{Deserialize, Serialize};

use crate::math::{Size, Vec2};

use super::WindowContent;

/// Properties supplied when opening a window
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Stable suffix for the window id; a random token is used when absent.
    /// Re-opening with the same suffix in the same wrap reuses the window.
    pub id: Option<String>,
    /// Display title
    pub title: String,
    /// Application the window belongs to, if launched from the catalog
    pub app_id: Option<String>,
    /// Top-left corner; cascaded from the window count when absent
    pub position: Option<Vec2>,
    /// Initial size; the configured default when absent
    pub size: Option<Size>,
    /// Minimum size; the configured minimum when absent
    pub min_size: Option<Size>,
    /// Optional maximum size
    pub max_size: Option<Size>,
    /// Hosted content
    pub content: WindowContent,
    /// Start with the loading overlay visible
    pub loading: bool,
}

impl WindowConfig {
    /// Config with a stable id and title
    pub fn named(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Some(Vec2::new(x, y));
        self
    }

    pub fn sized(mut self, width: f32, height: f32) -> Self {
        self.size = Some(Size::new(width, height));
        self
    }

    pub fn with_content(mut self, content: WindowContent) -> Self {
        self.content = content;
        self
    }
}
