//! Persisted UI state
//!
//! The host offers a string key/value store grouped by namespace. Values
//! cross the boundary as strings; [`UiState`] parses them into typed flags
//! and falls back to defaults for anything absent or malformed.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{DesktopError, DesktopResult};
use crate::icons::GridCoord;
use crate::mission_control::DesktopEntry;
use crate::types::WrapId;

/// Group holding chrome visibility flags and the desktop list
pub const UI_GROUP: &str = "ui";

/// Group holding saved icon layouts, keyed by wrap id
pub const ICONS_GROUP: &str = "icons";

const DESKTOP_ICONS_VISIBLE: &str = "desktopIconsVisible";
const MENUBAR_VISIBLE: &str = "menubarVisible";
const DOCK_VISIBLE: &str = "dockVisible";
const MISSION_CONTROL_OPENED: &str = "missionControlOpened";
const DESKTOPS: &str = "desktops";

/// Grouped string key/value storage provided by the host
pub trait StateStore {
    fn get(&self, group: &str, key: &str) -> Option<String>;

    fn set(&mut self, group: &str, key: &str, value: &str) -> DesktopResult<()>;

    /// Drop a key; removing an absent key is not an error
    fn remove(&mut self, group: &str, key: &str) -> DesktopResult<()>;
}

/// In-memory store used by tests and headless hosts
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<(String, String), String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, group: &str, key: &str) -> Option<String> {
        self.values
            .get(&(group.to_string(), key.to_string()))
            .cloned()
    }

    fn set(&mut self, group: &str, key: &str, value: &str) -> DesktopResult<()> {
        self.values
            .insert((group.to_string(), key.to_string()), value.to_string());
        Ok(())
    }

    fn remove(&mut self, group: &str, key: &str) -> DesktopResult<()> {
        self.values.remove(&(group.to_string(), key.to_string()));
        Ok(())
    }
}

/// Parse a stored flag; anything but "true"/"false" yields `default`
pub fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value {
        Some("true") => true,
        Some("false") => false,
        _ => default,
    }
}

fn flag_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Visibility of the desktop chrome
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromeFlags {
    pub desktop_icons_visible: bool,
    pub menubar_visible: bool,
    pub dock_visible: bool,
}

impl Default for ChromeFlags {
    fn default() -> Self {
        Self {
            desktop_icons_visible: true,
            menubar_visible: true,
            dock_visible: true,
        }
    }
}

impl ChromeFlags {
    /// Flags while the overview is up: icons and menu bar hidden, dock untouched
    pub fn for_overview(self) -> Self {
        Self {
            desktop_icons_visible: false,
            menubar_visible: false,
            ..self
        }
    }
}

/// Typed view over a [`StateStore`]
pub struct UiState<'a> {
    store: &'a mut dyn StateStore,
}

impl<'a> UiState<'a> {
    pub fn new(store: &'a mut dyn StateStore) -> Self {
        Self { store }
    }

    fn flag(&self, key: &str, default: bool) -> bool {
        parse_flag(self.store.get(UI_GROUP, key).as_deref(), default)
    }

    pub fn chrome(&self) -> ChromeFlags {
        ChromeFlags {
            desktop_icons_visible: self.flag(DESKTOP_ICONS_VISIBLE, true),
            menubar_visible: self.flag(MENUBAR_VISIBLE, true),
            dock_visible: self.flag(DOCK_VISIBLE, true),
        }
    }

    pub fn set_chrome(&mut self, flags: ChromeFlags) -> DesktopResult<()> {
        self.store
            .set(UI_GROUP, DESKTOP_ICONS_VISIBLE, flag_str(flags.desktop_icons_visible))?;
        self.store
            .set(UI_GROUP, MENUBAR_VISIBLE, flag_str(flags.menubar_visible))?;
        self.store
            .set(UI_GROUP, DOCK_VISIBLE, flag_str(flags.dock_visible))
    }

    pub fn mission_control_opened(&self) -> bool {
        self.flag(MISSION_CONTROL_OPENED, false)
    }

    pub fn set_mission_control_opened(&mut self, opened: bool) -> DesktopResult<()> {
        self.store
            .set(UI_GROUP, MISSION_CONTROL_OPENED, flag_str(opened))
    }

    pub fn icon_layout(&self, wrap: &WrapId) -> Option<BTreeMap<String, GridCoord>> {
        load_icon_layout(&*self.store, wrap)
    }

    pub fn save_icon_layout(
        &mut self,
        wrap: &WrapId,
        layout: &BTreeMap<String, GridCoord>,
    ) -> DesktopResult<()> {
        let json = serde_json::to_string(layout)?;
        self.store.set(ICONS_GROUP, wrap.as_str(), &json)
    }

    pub fn remove_icon_layout(&mut self, wrap: &WrapId) -> DesktopResult<()> {
        self.store.remove(ICONS_GROUP, wrap.as_str())
    }

    pub fn desktops(&self) -> Option<Vec<DesktopEntry>> {
        load_desktops(&*self.store)
    }

    pub fn save_desktops(&mut self, desktops: &[DesktopEntry]) -> DesktopResult<()> {
        let json = serde_json::to_string(desktops)?;
        self.store.set(UI_GROUP, DESKTOPS, &json)
    }
}

/// Saved icon cells for a wrap; malformed data is discarded
pub fn load_icon_layout(
    store: &dyn StateStore,
    wrap: &WrapId,
) -> Option<BTreeMap<String, GridCoord>> {
    let raw = store.get(ICONS_GROUP, wrap.as_str())?;
    match serde_json::from_str(&raw) {
        Ok(layout) => Some(layout),
        Err(err) => {
            tracing::warn!(wrap = %wrap, %err, "discarding malformed icon layout");
            None
        }
    }
}

/// Saved desktop list; malformed data is discarded
pub fn load_desktops(store: &dyn StateStore) -> Option<Vec<DesktopEntry>> {
    let raw = store.get(UI_GROUP, DESKTOPS)?;
    match serde_json::from_str(&raw) {
        Ok(desktops) => Some(desktops),
        Err(err) => {
            tracing::warn!(%err, "discarding malformed desktop list");
            None
        }
    }
}

/// Map a host storage failure into a [`DesktopError`]
pub fn persistence_error(context: &str, detail: impl std::fmt::Display) -> DesktopError {
    DesktopError::PersistenceError(format!("{}: {}", context, detail))
}
