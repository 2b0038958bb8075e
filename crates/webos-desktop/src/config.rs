//! Tunable constants for the desktop core
//!
//! Every timing and geometry constant lives here so hosts can override
//! them from JSON. Missing fields fall back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::DesktopResult;
use crate::math::Size;

/// Pointer gesture timings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Press duration before a hold turns into a drag
    pub hold_threshold_ms: f64,
    /// Two taps closer than this count as a double click
    pub double_tap_ms: f64,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            hold_threshold_ms: 100.0,
            double_tap_ms: 300.0,
        }
    }
}

/// Window drag, resize and snap behavior
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowBehavior {
    /// Reserved top chrome (menu bar); windows never go above it
    pub top_offset: f32,
    /// Height of the top band that arms a fullscreen snap
    pub snap_top_band: f32,
    /// Width of the left/right bands that arm a half-screen snap
    pub snap_side_band: f32,
    /// Gap kept around snapped windows
    pub snap_margin: f32,
    /// Pointer must rest in a band this long before a snap is pending
    pub snap_debounce_ms: f64,
    /// Minimum window size when the caller does not supply one
    pub min_size: Size,
    /// Transition used for programmatic (non-user) moves and resizes
    pub programmatic_move_ms: f32,
    /// Fade-out of the loading overlay after `hide_loading`
    pub loading_fade_ms: f64,
    /// Size of windows opened without an explicit size
    pub default_size: Size,
}

impl Default for WindowBehavior {
    fn default() -> Self {
        Self {
            top_offset: 26.0,
            snap_top_band: 26.0,
            snap_side_band: 20.0,
            snap_margin: 0.0,
            snap_debounce_ms: 250.0,
            min_size: Size::new(200.0, 200.0),
            programmatic_move_ms: 300.0,
            loading_fade_ms: 1000.0,
            default_size: Size::new(640.0, 480.0),
        }
    }
}

/// Desktop icon grid geometry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Margin between the viewport edge and the first cell, on every side
    pub margin: f32,
    /// Cell pitch in both axes
    pub cell_size: f32,
    /// Bounding box of a single icon
    pub icon_size: Size,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            margin: 20.0,
            cell_size: 100.0,
            icon_size: Size::new(100.0, 100.0),
        }
    }
}

/// Mission Control overview timings and thumbnail geometry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverviewConfig {
    /// Delay after hiding chrome before the cross-fade starts
    pub open_delay_ms: f64,
    /// Cross-fade duration
    pub fade_ms: f64,
    /// Slide duration when leaving the overview
    pub slide_ms: f64,
    /// Rendered thumbnail height
    pub thumbnail_height: f32,
    /// Horizontal gap between thumbnails
    pub thumbnail_gap: f32,
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            open_delay_ms: 200.0,
            fade_ms: 300.0,
            slide_ms: 300.0,
            thumbnail_height: 150.0,
            thumbnail_gap: 40.0,
        }
    }
}

/// Complete desktop configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub pointer: PointerConfig,
    pub window: WindowBehavior,
    pub grid: GridConfig,
    pub overview: OverviewConfig,
}

impl DesktopConfig {
    /// Parse a (possibly partial) JSON configuration
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> DesktopResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
