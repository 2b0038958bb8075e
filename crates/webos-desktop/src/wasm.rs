//! Browser bindings
//!
//! [`WebDesktop`] wraps the engine for JavaScript. Structured results are
//! returned as JSON strings; the clock is `Date.now()` and UI flags are
//! kept in `localStorage` under `{group}.{key}`.

use serde_json::json;
use wasm_bindgen::prelude::*;

use crate::catalog::AppCatalog;
use crate::config::DesktopConfig;
use crate::engine::{DesktopEngine, LaunchAction, PointerOutcome};
use crate::input::SessionId;
use crate::error::{DesktopError, DesktopResult};
use crate::math::{Size, Vec2};
use crate::persistence::{persistence_error, MemoryStore, StateStore};
use crate::types::WindowId;
use crate::window::{ResizeEdge, WindowConfig};
use crate::wrap::IconEvent;

/// [`StateStore`] backed by `window.localStorage`
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    pub fn open() -> DesktopResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| persistence_error("localStorage", "no window"))?;
        let storage = window
            .local_storage()
            .map_err(|e| persistence_error("localStorage", format!("{:?}", e)))?
            .ok_or_else(|| persistence_error("localStorage", "unavailable"))?;
        Ok(Self { storage })
    }

    fn key(group: &str, key: &str) -> String {
        format!("{}.{}", group, key)
    }
}

impl StateStore for LocalStorageStore {
    fn get(&self, group: &str, key: &str) -> Option<String> {
        self.storage.get_item(&Self::key(group, key)).ok().flatten()
    }

    fn set(&mut self, group: &str, key: &str, value: &str) -> DesktopResult<()> {
        self.storage
            .set_item(&Self::key(group, key), value)
            .map_err(|e| persistence_error("localStorage", format!("{:?}", e)))
    }

    fn remove(&mut self, group: &str, key: &str) -> DesktopResult<()> {
        self.storage
            .remove_item(&Self::key(group, key))
            .map_err(|e| persistence_error("localStorage", format!("{:?}", e)))
    }
}

fn to_js_error(err: DesktopError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn launch_json(action: &LaunchAction) -> serde_json::Value {
    match action {
        LaunchAction::Opened(id) => json!({ "type": "opened", "id": id.as_str() }),
        LaunchAction::Navigate(url) => json!({ "type": "navigate", "url": url }),
    }
}

fn outcome_json(outcome: &PointerOutcome) -> serde_json::Value {
    match outcome {
        PointerOutcome::None => json!({ "type": "none" }),
        PointerOutcome::WindowMoved { id, rect } => {
            json!({ "type": "window_moved", "id": id.as_str(), "rect": rect })
        }
        PointerOutcome::WindowSnapped { id, direction, rect } => json!({
            "type": "window_snapped",
            "id": id.as_str(),
            "direction": direction,
            "rect": rect,
        }),
        PointerOutcome::WindowResized { id, rect } => {
            json!({ "type": "window_resized", "id": id.as_str(), "rect": rect })
        }
        PointerOutcome::Icon(IconEvent::Selected(icon)) => {
            json!({ "type": "icon_selected", "icon": icon })
        }
        PointerOutcome::Icon(IconEvent::Open(icon)) => json!({ "type": "icon_open", "icon": icon }),
        PointerOutcome::Icon(IconEvent::Moved(icon, placement)) => json!({
            "type": "icon_moved",
            "icon": icon,
            "cell": placement.coord(),
            "reverted": matches!(placement, crate::icons::Placement::Reverted(_)),
        }),
        PointerOutcome::Icon(IconEvent::GroupMoved(moves)) => {
            let moves: Vec<_> = moves
                .iter()
                .map(|(icon, cell)| json!({ "icon": icon, "cell": cell }))
                .collect();
            json!({ "type": "icons_moved", "moves": moves })
        }
        PointerOutcome::Launched(action) => {
            json!({ "type": "launched", "action": launch_json(action) })
        }
        PointerOutcome::MarqueeSelected(ids) => json!({ "type": "marquee_selected", "icons": ids }),
    }
}

/// Desktop engine exported to JavaScript
///
/// JavaScript sees one pointer at a time, so the token of the session it
/// started last is kept here and handed back on every pointer call.
#[wasm_bindgen]
pub struct WebDesktop {
    engine: DesktopEngine,
    session: Option<SessionId>,
}

impl WebDesktop {
    /// Remember the token of a session that just started
    fn track(&mut self, session: Option<SessionId>) -> bool {
        if session.is_some() {
            self.session = session;
        }
        session.is_some()
    }
}

#[wasm_bindgen]
impl WebDesktop {
    /// Create the desktop; `config_json` and `catalog_json` are optional
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: f32,
        height: f32,
        config_json: Option<String>,
        catalog_json: Option<String>,
    ) -> Result<WebDesktop, JsValue> {
        let config = match config_json {
            Some(json) => DesktopConfig::from_json(&json).map_err(to_js_error)?,
            None => DesktopConfig::default(),
        };
        let catalog = match catalog_json {
            Some(json) => AppCatalog::from_json(&json).map_err(to_js_error)?,
            None => AppCatalog::default(),
        };
        let store: Box<dyn StateStore> = match LocalStorageStore::open() {
            Ok(store) => Box::new(store),
            Err(err) => {
                tracing::warn!(%err, "falling back to in-memory ui state");
                Box::new(MemoryStore::new())
            }
        };
        let engine = DesktopEngine::with_parts(
            config,
            catalog,
            store,
            Size::new(width, height),
            js_sys::Date::now(),
        );
        Ok(Self {
            engine,
            session: None,
        })
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.engine.set_viewport(Size::new(width, height));
    }

    /// Advance timers; returns true while another frame is needed
    pub fn tick(&mut self) -> bool {
        self.engine.tick(js_sys::Date::now())
    }

    // ========================================================================
    // Windows
    // ========================================================================

    pub fn open_window(&mut self, config_json: &str) -> Result<String, JsValue> {
        let config: WindowConfig =
            serde_json::from_str(config_json).map_err(|e| to_js_error(e.into()))?;
        Ok(self.engine.open_window(config).to_string())
    }

    pub fn close_window(&mut self, id: &str) -> bool {
        self.engine.close_window(&WindowId::from_raw(id))
    }

    pub fn focus_window(&mut self, id: &str) -> bool {
        self.engine.focus_window(&WindowId::from_raw(id))
    }

    pub fn focused_component(&self) -> Option<String> {
        self.engine.focus.focused_component().map(str::to_string)
    }

    pub fn show_loading(&mut self, id: &str) -> bool {
        self.engine.show_loading(&WindowId::from_raw(id))
    }

    pub fn hide_loading(&mut self, id: &str) -> bool {
        self.engine
            .hide_loading(&WindowId::from_raw(id), js_sys::Date::now())
    }

    pub fn move_window(&mut self, id: &str, x: f32, y: f32) -> bool {
        self.engine
            .move_window(&WindowId::from_raw(id), x, y, js_sys::Date::now())
    }

    pub fn resize_window(&mut self, id: &str, width: f32, height: f32) -> bool {
        self.engine
            .resize_window(&WindowId::from_raw(id), width, height, js_sys::Date::now())
    }

    pub fn launch_app(&mut self, app_id: &str) -> Option<String> {
        self.engine
            .launch_app(app_id)
            .map(|action| launch_json(&action).to_string())
    }

    /// Windows of the active desktop, bottom to top
    pub fn windows_json(&self) -> String {
        let now = js_sys::Date::now();
        let windows: Vec<_> = self
            .engine
            .visible_windows()
            .into_iter()
            .map(|w| {
                json!({
                    "id": w.id.as_str(),
                    "title": w.title,
                    "rect": w.display_rect(now),
                    "transition": w.transition(),
                    "content": w.content,
                    "loading": w.is_loading(),
                    "overlay_opacity": w.loading().opacity(now),
                    "focused": self.engine.focus.is_focused(w.id.as_str()),
                })
            })
            .collect();
        serde_json::Value::Array(windows).to_string()
    }

    // ========================================================================
    // Pointer
    // ========================================================================

    pub fn begin_window_drag(&mut self, id: &str, x: f32, y: f32) -> bool {
        let now = js_sys::Date::now();
        let session = self
            .engine
            .begin_window_drag(&WindowId::from_raw(id), Vec2::new(x, y), now);
        self.track(session)
    }

    /// `direction` is a compass edge: n, s, e, w, ne, nw, se, sw
    pub fn begin_window_resize(&mut self, id: &str, direction: &str, x: f32, y: f32) -> bool {
        let Some(edge) = ResizeEdge::from_direction(direction) else {
            return false;
        };
        let now = js_sys::Date::now();
        let session = self
            .engine
            .begin_window_resize(&WindowId::from_raw(id), edge, Vec2::new(x, y), now);
        self.track(session)
    }

    pub fn icon_pointer_down(&mut self, icon: &str, x: f32, y: f32) -> bool {
        let session = self
            .engine
            .icon_pointer_down(icon, Vec2::new(x, y), js_sys::Date::now());
        self.track(session)
    }

    pub fn background_pointer_down(&mut self, x: f32, y: f32) -> bool {
        let session = self
            .engine
            .background_pointer_down(Vec2::new(x, y), js_sys::Date::now());
        self.track(session)
    }

    pub fn background_click(&mut self) -> bool {
        self.engine.background_click()
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        let Some(session) = self.session else {
            return false;
        };
        self.engine
            .pointer_move(session, Vec2::new(x, y), js_sys::Date::now())
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) -> String {
        let outcome = match self.session.take() {
            Some(session) => {
                self.engine
                    .pointer_up(session, Vec2::new(x, y), js_sys::Date::now())
            }
            None => PointerOutcome::None,
        };
        outcome_json(&outcome).to_string()
    }

    pub fn cancel_interaction(&mut self) -> bool {
        self.session
            .take()
            .is_some_and(|session| self.engine.cancel_interaction(session))
    }

    pub fn snap_preview(&self) -> String {
        json!(self.engine.snap_preview()).to_string()
    }

    /// Icons of the active desktop with their drawn positions
    pub fn icons_json(&self) -> String {
        let grid = self.engine.active_wrap().icons();
        let icons: Vec<_> = grid
            .icons()
            .iter()
            .map(|icon| {
                json!({
                    "id": icon.id,
                    "label": icon.label,
                    "cell": icon.coord,
                    "position": grid.pixel_position(&icon.id),
                    "selected": icon.selected,
                })
            })
            .collect();
        json!({ "icons": icons, "marquee": grid.marquee_rect() }).to_string()
    }

    // ========================================================================
    // Desktops and overview
    // ========================================================================

    pub fn create_desktop(&mut self) -> String {
        self.engine.create_desktop(js_sys::Date::now()).to_string()
    }

    pub fn switch_desktop(&mut self, index: usize) -> bool {
        self.engine.switch_desktop(index)
    }

    pub fn delete_desktop(&mut self, index: usize) -> bool {
        self.engine.delete_desktop(index)
    }

    pub fn reorder_desktops(&mut self, from: usize, to: usize) -> bool {
        self.engine.reorder_desktops(from, to)
    }

    pub fn rename_desktop(&mut self, index: usize, name: &str) -> bool {
        self.engine.rename_desktop(index, name)
    }

    pub fn active_desktop(&self) -> usize {
        self.engine.mission.active_index()
    }

    pub fn desktops_json(&self) -> String {
        let desktops: Vec<_> = self
            .engine
            .mission
            .desktops()
            .iter()
            .map(|d| json!({ "id": d.id, "name": d.name, "wrap": d.wrap_id().as_str() }))
            .collect();
        json!({ "desktops": desktops, "active": self.engine.mission.active_index() }).to_string()
    }

    pub fn open_overview(&mut self) -> bool {
        self.engine.open_overview(js_sys::Date::now())
    }

    pub fn select_overview(&mut self, index: usize) -> bool {
        self.engine.select_overview(index, js_sys::Date::now())
    }

    pub fn select_overview_at(&mut self, x: f32, y: f32) -> bool {
        self.engine
            .select_overview_at(Vec2::new(x, y), js_sys::Date::now())
    }

    pub fn dismiss_overview(&mut self) -> bool {
        self.engine.dismiss_overview(js_sys::Date::now())
    }

    pub fn overview_opacity(&self) -> f32 {
        self.engine.overview.opacity(js_sys::Date::now())
    }

    /// Persisted chrome visibility flags
    pub fn chrome_json(&mut self) -> String {
        json!(self.engine.ui_state().chrome()).to_string()
    }

    pub fn thumbnails_json(&self) -> String {
        let thumbs: Vec<_> = self
            .engine
            .thumbnails()
            .iter()
            .map(|t| json!({ "index": t.index, "rect": t.rect, "scale": t.scale }))
            .collect();
        serde_json::Value::Array(thumbs).to_string()
    }
}
