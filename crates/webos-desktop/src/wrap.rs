//! Per-desktop wrap
//!
//! A wrap is the isolated namespace one desktop renders: its icon grid and
//! the pointer gestures on those icons. Windows live in the global registry
//! and are tagged with the wrap id.

use crate::config::PointerConfig;
use crate::icons::{GridCoord, GridLayout, IconGrid, Placement};
use crate::input::{HoldGesture, TapKind, TapTracker};
use crate::math::{Size, Vec2};
use crate::types::{WindowId, WrapId};
use crate::window::{Window, WindowRegistry};

/// Result of an icon pointer sequence
#[derive(Clone, Debug, PartialEq)]
pub enum IconEvent {
    /// A single tap selected the icon
    Selected(String),
    /// A double tap asked to open the icon's app
    Open(String),
    /// A hold-drag ended on a cell
    Moved(String, Placement),
    /// A group drag ended; every member's final cell
    GroupMoved(Vec<(String, GridCoord)>),
}

#[derive(Clone, Debug, Default)]
struct IconPress {
    icon: String,
    dragging: bool,
    group: bool,
}

/// One desktop's wrap
#[derive(Clone, Debug)]
pub struct DesktopWrap {
    id: WrapId,
    icons: IconGrid,
    hold: HoldGesture,
    taps: TapTracker,
    last_tapped: Option<String>,
    press: Option<IconPress>,
}

impl DesktopWrap {
    pub fn new(id: WrapId, layout: GridLayout) -> Self {
        Self {
            id,
            icons: IconGrid::new(layout),
            hold: HoldGesture::new(),
            taps: TapTracker::new(),
            last_tapped: None,
            press: None,
        }
    }

    pub fn id(&self) -> &WrapId {
        &self.id
    }

    pub fn icons(&self) -> &IconGrid {
        &self.icons
    }

    pub fn icons_mut(&mut self) -> &mut IconGrid {
        &mut self.icons
    }

    /// Windows of this wrap, bottom to top
    pub fn windows<'a>(
        &'a self,
        registry: &'a WindowRegistry,
    ) -> impl Iterator<Item = &'a Window> + 'a {
        registry.windows_in(&self.id)
    }

    /// Compose a window id in this wrap's namespace
    pub fn window_id(&self, suffix: &str) -> WindowId {
        WindowId::compose(&self.id, suffix)
    }

    pub fn set_viewport(&mut self, viewport: Size) -> Vec<(String, GridCoord)> {
        self.icons.set_viewport(viewport)
    }

    // ========================================================================
    // Icon pointer gestures
    // ========================================================================

    /// Press on an icon; arms the hold timer
    pub fn icon_pointer_down(
        &mut self,
        icon: &str,
        pointer: Vec2,
        now: f64,
        pointer_config: &PointerConfig,
    ) -> bool {
        let Some(origin) = self.icons.pixel_position(icon) else {
            return false;
        };
        self.cancel_icon_gesture();
        self.hold
            .start(pointer, origin, now, pointer_config.hold_threshold_ms);
        self.press = Some(IconPress {
            icon: icon.to_string(),
            ..Default::default()
        });
        true
    }

    /// Start the drag once the hold threshold has passed
    ///
    /// Pressing a member of a multi-selection drags the whole selection.
    pub fn poll_hold(&mut self, now: f64) -> bool {
        let origin_pointer = self.hold.origin_pointer();
        let Some(offset) = self.hold.poll(now) else {
            return false;
        };
        let Some(press) = self.press.as_mut() else {
            return false;
        };

        if self.icons.selected_count() >= 2 && self.icons.is_selected(&press.icon) {
            let start = origin_pointer.unwrap_or(Vec2::ZERO);
            press.group = self.icons.begin_group_drag(start);
            press.dragging = press.group;
        } else {
            press.dragging = self.icons.begin_drag(&press.icon, offset);
        }
        if press.dragging {
            tracing::trace!(icon = %press.icon, group = press.group, "icon drag started");
        }
        press.dragging
    }

    pub fn icon_pointer_move(&mut self, pointer: Vec2, now: f64) -> Option<Vec2> {
        self.poll_hold(now);
        let press = self.press.as_ref()?;
        match (press.dragging, press.group) {
            (true, true) => self.icons.group_drag_to(pointer),
            (true, false) => self.icons.drag_to(pointer),
            _ => None,
        }
    }

    /// Release; a press released before the hold threshold is a tap
    pub fn icon_pointer_up(
        &mut self,
        pointer: Vec2,
        now: f64,
        pointer_config: &PointerConfig,
    ) -> Option<IconEvent> {
        self.poll_hold(now);
        let press = self.press.take()?;
        self.hold.cancel();

        if press.dragging {
            return if press.group {
                self.icons.group_drag_to(pointer);
                Some(IconEvent::GroupMoved(self.icons.end_group_drag()))
            } else {
                self.icons.drag_to(pointer);
                self.icons
                    .end_drag()
                    .map(|(id, placement)| IconEvent::Moved(id, placement))
            };
        }

        if self.last_tapped.as_deref() != Some(press.icon.as_str()) {
            self.taps.reset();
        }
        self.last_tapped = Some(press.icon.clone());

        match self.taps.handle_tap(now, pointer_config.double_tap_ms) {
            TapKind::Double => {
                self.taps.reset();
                Some(IconEvent::Open(press.icon))
            }
            TapKind::Single => {
                self.icons.select_only(&press.icon);
                Some(IconEvent::Selected(press.icon))
            }
        }
    }

    /// Abandon the current icon gesture; a drag returns to its cell
    pub fn cancel_icon_gesture(&mut self) -> bool {
        self.hold.cancel();
        let Some(press) = self.press.take() else {
            return false;
        };
        if press.dragging {
            self.icons.cancel_drag();
        }
        true
    }

    pub fn is_pressing_icon(&self) -> bool {
        self.press.is_some()
    }

    pub fn is_dragging_icon(&self) -> bool {
        self.press.as_ref().is_some_and(|p| p.dragging)
    }
}
