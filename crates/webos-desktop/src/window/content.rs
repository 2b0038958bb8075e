//! Hosted window content and the frame focus chain

use serde::{Deserialize, Serialize};

/// What a window renders
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WindowContent {
    /// A first-party component looked up by name
    Component { name: String },
    /// An embedded page hosted in a frame
    Frame {
        url: String,
        /// Element to focus inside the frame when it is reachable
        #[serde(default)]
        canvas_id: Option<String>,
    },
}

impl Default for WindowContent {
    fn default() -> Self {
        WindowContent::Component {
            name: String::new(),
        }
    }
}

impl WindowContent {
    pub fn is_frame(&self) -> bool {
        matches!(self, WindowContent::Frame { .. })
    }
}

/// Why a frame could not be reached
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameAccessError {
    /// The frame document is on another origin
    CrossOrigin,
    /// The frame has not finished loading
    NotReady,
    /// The requested element does not exist
    Missing,
}

/// Access to an embedded frame, provided by the host
pub trait FrameHost {
    /// Focus an element inside the frame document
    fn focus_canvas(&mut self, canvas_id: &str) -> Result<(), FrameAccessError>;

    /// Focus the frame's content window
    fn focus_content_window(&mut self) -> Result<(), FrameAccessError>;

    /// Focus the frame element itself; always possible
    fn focus_element(&mut self);
}

/// Which focus target took the click
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTier {
    Canvas,
    ContentWindow,
    Element,
}

/// Refocus a frame after a click, trying the most specific target first
///
/// Every failure falls through to the next tier; the frame element always
/// accepts focus.
pub fn refocus_frame(host: &mut dyn FrameHost, canvas_id: Option<&str>) -> FocusTier {
    if let Some(canvas_id) = canvas_id {
        match host.focus_canvas(canvas_id) {
            Ok(()) => return FocusTier::Canvas,
            Err(err) => tracing::trace!(?err, canvas_id, "frame canvas unreachable"),
        }
    }
    match host.focus_content_window() {
        Ok(()) => FocusTier::ContentWindow,
        Err(err) => {
            tracing::trace!(?err, "frame content window unreachable");
            host.focus_element();
            FocusTier::Element
        }
    }
}
