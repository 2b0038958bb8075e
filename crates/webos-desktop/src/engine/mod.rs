//! Desktop engine
//!
//! [`DesktopEngine`] is the single entry point the host drives. It owns
//! every piece of desktop state and is the only place where the pieces
//! meet:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        DesktopEngine                         │
//! │  ┌────────────────┐ ┌──────────────────┐ ┌────────────────┐  │
//! │  │ WindowRegistry │ │  MissionControl  │ │    Overview    │  │
//! │  │ (all windows)  │ │ (desktops+wraps) │ │  (timeline)    │  │
//! │  └────────────────┘ └──────────────────┘ └────────────────┘  │
//! │  ┌────────────────┐ ┌──────────────────┐ ┌────────────────┐  │
//! │  │ SessionSlot    │ │ FocusCoordinator │ │   StateStore   │  │
//! │  │ (pointer)      │ │ (single owner)   │ │  (host flags)  │  │
//! │  └────────────────┘ └──────────────────┘ └────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Time is never read from a clock: every timed operation takes `now` in
//! milliseconds, and [`DesktopEngine::tick`] advances hold timers, snap
//! debounces, loading fades, geometry animations and the overview.
//!
//! Only one pointer session exists at a time. Starting a new one winds the
//! previous one down first, so a drag and a resize can never overlap.

mod handle;
mod session;

pub use handle::WindowHandle;
pub use session::{LaunchAction, PointerOutcome, PointerSession};

use crate::catalog::{AppCatalog, AppTarget};
use crate::config::DesktopConfig;
use crate::error::DesktopResult;
use crate::focus::{FocusCoordinator, DESKTOP_SURFACE, MISSION_CONTROL_SURFACE};
use crate::geometry::{band_at, drag_position, snap_target, EdgeSnap};
use crate::icons::GridLayout;
use crate::input::{SessionId, SessionSlot};
use crate::math::{Rect, Size, Vec2};
use crate::mission_control::{
    thumbnail_at, thumbnail_layout, MissionControl, Overview, OverviewEvent, Thumbnail,
};
use crate::persistence::{
    load_desktops, load_icon_layout, ChromeFlags, MemoryStore, StateStore, UiState,
};
use crate::types::{DesktopId, WindowId, WrapId};
use crate::window::{
    drag_bounds, refocus_frame, resize_rect, FocusTier, FrameHost, ResizeEdge, Window,
    WindowConfig, WindowContent, WindowLifecycle, WindowRegistry,
};
use crate::wrap::{DesktopWrap, IconEvent};

/// Give each desktop app an icon, as far as the grid has room
fn seed_icons(wrap: &mut DesktopWrap, catalog: &AppCatalog) {
    let entries = catalog
        .desktop_entries()
        .into_iter()
        .map(|entry| (entry.id.clone(), entry.name.clone()));
    if let Err(err) = wrap.icons_mut().seed(entries) {
        tracing::warn!(wrap = %wrap.id(), %err, "not every app icon fits on the desktop");
    }
}

/// Build the wrap for a desktop: catalog icons plus any saved layout
fn build_wrap(
    config: &DesktopConfig,
    catalog: &AppCatalog,
    store: &dyn StateStore,
    viewport: Size,
    id: DesktopId,
) -> DesktopWrap {
    let layout = GridLayout::new(&config.grid, viewport);
    let mut wrap = DesktopWrap::new(MissionControl::wrap_id_for(id), layout);
    seed_icons(&mut wrap, catalog);
    if let Some(saved) = load_icon_layout(store, wrap.id()) {
        wrap.icons_mut().apply_layout(&saved);
    }
    wrap
}

/// Desktop engine coordinating windows, desktops, icons and the overview
pub struct DesktopEngine {
    config: DesktopConfig,
    viewport: Size,
    catalog: AppCatalog,
    store: Box<dyn StateStore>,
    session: SessionSlot<PointerSession>,
    /// Chrome flags to restore when the overview closes
    saved_chrome: Option<ChromeFlags>,
    /// Every open window, across all desktops
    pub windows: WindowRegistry,
    /// Keyboard focus owner
    pub focus: FocusCoordinator,
    /// Desktops and the active index
    pub mission: MissionControl,
    /// Mission Control overview timeline
    pub overview: Overview,
}

impl DesktopEngine {
    /// Engine with default configuration, no apps and an in-memory store
    pub fn new(viewport: Size, now: f64) -> Self {
        Self::with_parts(
            DesktopConfig::default(),
            AppCatalog::default(),
            Box::new(MemoryStore::new()),
            viewport,
            now,
        )
    }

    /// Engine over a host store; desktops saved in the store are restored
    pub fn with_parts(
        config: DesktopConfig,
        catalog: AppCatalog,
        store: Box<dyn StateStore>,
        viewport: Size,
        now: f64,
    ) -> Self {
        let make_wrap = |id| build_wrap(&config, &catalog, store.as_ref(), viewport, id);
        let mission = match load_desktops(store.as_ref())
            .and_then(|entries| MissionControl::restore(entries, make_wrap))
        {
            Some(mission) => mission,
            None => MissionControl::new(now, make_wrap),
        };
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            desktops = mission.len(),
            "desktop engine created"
        );
        let mut engine = Self {
            windows: WindowRegistry::new(config.window.clone()),
            overview: Overview::new(config.overview.clone()),
            focus: FocusCoordinator::new(),
            session: SessionSlot::new(),
            saved_chrome: None,
            mission,
            config,
            catalog,
            store,
            viewport,
        };
        engine.save_desktops();
        engine
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn catalog(&self) -> &AppCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &dyn StateStore {
        self.store.as_ref()
    }

    /// Typed access to the persisted UI flags
    pub fn ui_state(&mut self) -> UiState<'_> {
        UiState::new(self.store.as_mut())
    }

    fn persist(
        &mut self,
        what: &'static str,
        f: impl FnOnce(&mut UiState<'_>) -> DesktopResult<()>,
    ) {
        let mut ui = UiState::new(self.store.as_mut());
        if let Err(err) = f(&mut ui) {
            tracing::warn!(%err, what, "failed to persist ui state");
        }
    }

    fn save_icons(&mut self, wrap: &WrapId) {
        let Some(layout) = self
            .mission
            .desktop_for_wrap(wrap)
            .map(|d| d.wrap.icons().layout_snapshot())
        else {
            return;
        };
        self.persist("icon layout", |ui| ui.save_icon_layout(wrap, &layout));
    }

    fn save_desktops(&mut self) {
        let desktops = self.mission.entries();
        self.persist("desktop list", |ui| ui.save_desktops(&desktops));
    }

    /// Relayout every desktop's icons for a new viewport
    ///
    /// Icons squeezed off a full grid come back once there is room again.
    pub fn set_viewport(&mut self, viewport: Size) {
        if matches!(self.interaction(), Some(PointerSession::Icon { .. })) {
            self.abort_interaction();
        }
        self.viewport = viewport;

        let mut changed = Vec::new();
        for desktop in self.mission.desktops_mut() {
            let before = desktop.wrap.icons().layout_snapshot();
            desktop.wrap.set_viewport(viewport);
            seed_icons(&mut desktop.wrap, &self.catalog);
            if desktop.wrap.icons().layout_snapshot() != before {
                changed.push(desktop.wrap_id().clone());
            }
        }
        for wrap in changed {
            self.save_icons(&wrap);
        }
    }

    // ========================================================================
    // Desktops
    // ========================================================================

    pub fn active_wrap(&self) -> &DesktopWrap {
        &self.mission.active_desktop().wrap
    }

    pub fn active_wrap_mut(&mut self) -> &mut DesktopWrap {
        &mut self.mission.active_desktop_mut().wrap
    }

    pub fn active_wrap_id(&self) -> WrapId {
        self.mission.active_desktop().wrap_id().clone()
    }

    /// Append a desktop and switch to it
    pub fn create_desktop(&mut self, now: f64) -> DesktopId {
        self.abort_interaction();
        let (config, catalog, store, viewport) =
            (&self.config, &self.catalog, self.store.as_ref(), self.viewport);
        let id = self
            .mission
            .create_desktop(now, |id| build_wrap(config, catalog, store, viewport, id));
        self.save_desktops();
        self.focus.update_focus(DESKTOP_SURFACE);
        id
    }

    pub fn switch_desktop(&mut self, index: usize) -> bool {
        if index == self.mission.active_index() {
            return index < self.mission.len();
        }
        self.abort_interaction();
        if !self.mission.switch_desktop(index) {
            return false;
        }
        self.focus_top_window();
        true
    }

    /// Delete a desktop, close every window in it and forget its icons
    ///
    /// Refused for the last desktop and for out-of-range indices.
    pub fn delete_desktop(&mut self, index: usize) -> bool {
        self.abort_interaction();
        let Some(removed) = self.mission.delete_desktop(index) else {
            return false;
        };
        let closed = self.windows.close_wrap(removed.wrap_id(), &mut self.focus);
        tracing::debug!(
            desktop = %removed.id,
            windows = closed.len(),
            "closed windows of deleted desktop"
        );
        self.persist("icon layout removal", |ui| ui.remove_icon_layout(removed.wrap_id()));
        self.save_desktops();
        self.focus_top_window();
        true
    }

    pub fn reorder_desktops(&mut self, from: usize, to: usize) -> bool {
        let moved = self.mission.reorder_desktops(from, to);
        if moved {
            self.save_desktops();
        }
        moved
    }

    pub fn rename_desktop(&mut self, index: usize, name: impl Into<String>) -> bool {
        let renamed = self.mission.rename_desktop(index, name);
        if renamed {
            self.save_desktops();
        }
        renamed
    }

    fn focus_top_window(&mut self) {
        let wrap = self.active_wrap_id();
        match self.windows.top_in(&wrap).map(|w| w.id.clone()) {
            Some(id) => self.focus.update_focus(id.as_str()),
            None => self.focus.update_focus(DESKTOP_SURFACE),
        };
    }

    // ========================================================================
    // Windows
    // ========================================================================

    /// Open a window on the active desktop
    pub fn open_window(&mut self, config: WindowConfig) -> WindowId {
        let wrap = self.active_wrap_id();
        self.open_window_in(&wrap, config, None)
    }

    /// Open a window in `wrap` and give it focus
    pub fn open_window_in(
        &mut self,
        wrap: &WrapId,
        config: WindowConfig,
        hooks: Option<Box<dyn WindowLifecycle>>,
    ) -> WindowId {
        let id = self.windows.open(wrap, config, hooks);
        self.focus_window(&id);
        id
    }

    pub fn close_window(&mut self, id: &WindowId) -> bool {
        let in_session = self
            .session
            .current()
            .and_then(|(_, session)| session.window())
            == Some(id);
        if in_session {
            self.abort_interaction();
        }
        self.windows.close(id, &mut self.focus)
    }

    /// Focus and raise a window
    pub fn focus_window(&mut self, id: &WindowId) -> bool {
        if !self.windows.raise(id) {
            return false;
        }
        self.focus.update_focus(id.as_str());
        true
    }

    pub fn move_window(&mut self, id: &WindowId, x: f32, y: f32, now: f64) -> bool {
        self.windows.move_to(id, x, y, now)
    }

    pub fn resize_window(&mut self, id: &WindowId, width: f32, height: f32, now: f64) -> bool {
        self.windows.resize(id, width, height, now)
    }

    pub fn show_loading(&mut self, id: &WindowId) -> bool {
        self.windows.show_loading(id)
    }

    pub fn hide_loading(&mut self, id: &WindowId, now: f64) -> bool {
        self.windows.hide_loading(id, now)
    }

    /// Move a window to another desktop's wrap
    pub fn reassign_window(&mut self, id: &WindowId, wrap: &WrapId) -> bool {
        if self.mission.desktop_for_wrap(wrap).is_none() {
            return false;
        }
        self.windows.reassign(id, wrap)
    }

    /// Controls for a window's content; `None` for unknown ids
    pub fn handle(&mut self, id: &WindowId, now: f64) -> Option<WindowHandle<'_>> {
        if !self.windows.contains(id) {
            return None;
        }
        Some(WindowHandle::new(self, id.clone(), now))
    }

    /// Windows of the active desktop, bottom to top
    pub fn visible_windows(&self) -> Vec<&Window> {
        let wrap = self.mission.active_desktop().wrap_id();
        self.windows.windows_in(wrap).collect()
    }

    /// A frame finished loading; fade its overlay out
    pub fn frame_loaded(&mut self, id: &WindowId, now: f64) -> bool {
        self.windows.hide_loading(id, now)
    }

    /// A frame was clicked: focus the window, then the frame content
    pub fn frame_clicked(&mut self, id: &WindowId, host: &mut dyn FrameHost) -> Option<FocusTier> {
        if !self.focus_window(id) {
            return None;
        }
        let canvas_id = match &self.windows.get(id)?.content {
            WindowContent::Frame { canvas_id, .. } => canvas_id.clone(),
            WindowContent::Component { .. } => None,
        };
        Some(refocus_frame(host, canvas_id.as_deref()))
    }

    /// Launch a catalog app: open (or focus) its window, or navigate
    pub fn launch_app(&mut self, app_id: &str) -> Option<LaunchAction> {
        let target = self.catalog.get(app_id)?.target();
        tracing::debug!(app = app_id, "launching app");
        match target {
            AppTarget::Link(url) => Some(LaunchAction::Navigate(url)),
            AppTarget::Window(config) => Some(LaunchAction::Opened(self.open_window(config))),
        }
    }

    // ========================================================================
    // Pointer sessions
    // ========================================================================

    pub fn interaction(&self) -> Option<&PointerSession> {
        self.session.current().map(|(_, session)| session)
    }

    /// Commit whatever the running session has, without any snap
    fn wind_down_session(&mut self) {
        let Some((_, session)) = self.session.take() else {
            return;
        };
        tracing::debug!(?session, "pointer session displaced");
        match session {
            PointerSession::WindowDrag { window, .. }
            | PointerSession::WindowResize { window, .. } => {
                if let Some(live) = self.windows.get_mut(&window).and_then(Window::take_live) {
                    self.windows.commit_geometry(&window, live);
                }
            }
            PointerSession::Icon { wrap } => {
                if let Some(desktop) = self.mission.desktop_for_wrap_mut(&wrap) {
                    desktop.wrap.cancel_icon_gesture();
                }
            }
            PointerSession::Marquee { wrap } => {
                if let Some(desktop) = self.mission.desktop_for_wrap_mut(&wrap) {
                    desktop.wrap.icons_mut().end_marquee();
                }
            }
        }
    }

    /// Start dragging a window by its title bar
    pub fn begin_window_drag(
        &mut self,
        id: &WindowId,
        pointer: Vec2,
        _now: f64,
    ) -> Option<SessionId> {
        if self.overview.is_active() || !self.windows.contains(id) {
            return None;
        }
        self.wind_down_session();
        self.focus_window(id);

        let window = self.windows.get_mut(id)?;
        window.begin_live();
        let grab_offset = pointer - window.position();
        let (session, _) = self.session.begin(PointerSession::WindowDrag {
            window: id.clone(),
            grab_offset,
            snap: EdgeSnap::new(self.config.window.snap_debounce_ms),
        });
        Some(session)
    }

    /// Start resizing a window from an edge or corner
    pub fn begin_window_resize(
        &mut self,
        id: &WindowId,
        edge: ResizeEdge,
        pointer: Vec2,
        _now: f64,
    ) -> Option<SessionId> {
        if self.overview.is_active() || !self.windows.contains(id) {
            return None;
        }
        self.wind_down_session();
        self.focus_window(id);

        let window = self.windows.get_mut(id)?;
        window.begin_live();
        let start_rect = window.rect();
        let (session, _) = self.session.begin(PointerSession::WindowResize {
            window: id.clone(),
            edge,
            start_rect,
            start_pointer: pointer,
        });
        Some(session)
    }

    /// Press on an icon of the active desktop
    pub fn icon_pointer_down(&mut self, icon: &str, pointer: Vec2, now: f64) -> Option<SessionId> {
        if self.overview.is_active() {
            return None;
        }
        self.wind_down_session();
        self.focus.update_focus(DESKTOP_SURFACE);

        let desktop = self.mission.active_desktop_mut();
        if !desktop
            .wrap
            .icon_pointer_down(icon, pointer, now, &self.config.pointer)
        {
            return None;
        }
        let wrap = desktop.wrap_id().clone();
        let (session, _) = self.session.begin(PointerSession::Icon { wrap });
        Some(session)
    }

    /// Press on the empty desktop background; starts a marquee
    pub fn background_pointer_down(&mut self, pointer: Vec2, _now: f64) -> Option<SessionId> {
        if self.overview.is_active() {
            return None;
        }
        self.wind_down_session();
        self.focus.update_focus(DESKTOP_SURFACE);

        let desktop = self.mission.active_desktop_mut();
        desktop.wrap.icons_mut().begin_marquee(pointer);
        let wrap = desktop.wrap_id().clone();
        let (session, _) = self.session.begin(PointerSession::Marquee { wrap });
        Some(session)
    }

    /// Click on the empty background; clears the icon selection
    pub fn background_click(&mut self) -> bool {
        self.active_wrap_mut().icons_mut().background_click()
    }

    /// Feed a pointer move to session `id`
    ///
    /// Moves carrying a token other than the running session's are ignored.
    pub fn pointer_move(&mut self, id: SessionId, pointer: Vec2, now: f64) -> bool {
        let Some((current, session)) = self.session.current_mut() else {
            return false;
        };
        if current != id {
            tracing::trace!(?id, ?current, "pointer move for stale session ignored");
            return false;
        }
        match session {
            PointerSession::WindowDrag {
                window,
                grab_offset,
                snap,
            } => {
                let Some(w) = self.windows.get_mut(window) else {
                    return false;
                };
                let size = w.size();
                let bounds = drag_bounds(self.viewport, size, self.config.window.top_offset);
                let position = drag_position(pointer, *grab_offset, &bounds);
                w.set_live(Rect::from_pos_size(position, size));
                snap.update(band_at(pointer, self.viewport, &self.config.window), now);
                true
            }
            PointerSession::WindowResize {
                window,
                edge,
                start_rect,
                start_pointer,
            } => {
                let Some(w) = self.windows.get_mut(window) else {
                    return false;
                };
                let previous = w.live_rect().unwrap_or(*start_rect);
                let rect = resize_rect(
                    *start_rect,
                    previous,
                    *edge,
                    pointer - *start_pointer,
                    &w.limits,
                    self.config.window.top_offset,
                );
                w.set_live(rect);
                true
            }
            PointerSession::Icon { wrap } => self
                .mission
                .desktop_for_wrap_mut(wrap)
                .and_then(|d| d.wrap.icon_pointer_move(pointer, now))
                .is_some(),
            PointerSession::Marquee { wrap } => self
                .mission
                .desktop_for_wrap_mut(wrap)
                .and_then(|d| d.wrap.icons_mut().update_marquee(pointer))
                .is_some(),
        }
    }

    /// Release the pointer and end session `id`
    ///
    /// The live geometry is committed exactly once here. A stale token
    /// leaves the running session alone and yields [`PointerOutcome::None`].
    pub fn pointer_up(&mut self, id: SessionId, pointer: Vec2, now: f64) -> PointerOutcome {
        self.pointer_move(id, pointer, now);
        let Some(session) = self.session.end(id) else {
            return PointerOutcome::None;
        };

        match session {
            PointerSession::WindowDrag {
                window, mut snap, ..
            } => {
                let band = band_at(pointer, self.viewport, &self.config.window);
                let direction = snap.release(band, now);
                let Some(w) = self.windows.get_mut(&window) else {
                    return PointerOutcome::None;
                };
                let live = w.take_live().unwrap_or_else(|| w.rect());
                match direction {
                    Some(direction) => {
                        let rect = snap_target(direction, self.viewport, &self.config.window);
                        self.windows.commit_geometry(&window, rect);
                        tracing::debug!(window = %window, ?direction, "window snapped");
                        PointerOutcome::WindowSnapped {
                            id: window,
                            direction,
                            rect,
                        }
                    }
                    None => {
                        self.windows.commit_geometry(&window, live);
                        PointerOutcome::WindowMoved {
                            id: window,
                            rect: live,
                        }
                    }
                }
            }
            PointerSession::WindowResize { window, .. } => {
                let Some(w) = self.windows.get_mut(&window) else {
                    return PointerOutcome::None;
                };
                let live = w.take_live().unwrap_or_else(|| w.rect());
                self.windows.commit_geometry(&window, live);
                PointerOutcome::WindowResized {
                    id: window,
                    rect: live,
                }
            }
            PointerSession::Icon { wrap } => {
                let event = self
                    .mission
                    .desktop_for_wrap_mut(&wrap)
                    .and_then(|d| d.wrap.icon_pointer_up(pointer, now, &self.config.pointer));
                match event {
                    Some(IconEvent::Open(app)) => match self.launch_app(&app) {
                        Some(action) => PointerOutcome::Launched(action),
                        None => PointerOutcome::Icon(IconEvent::Open(app)),
                    },
                    Some(event @ (IconEvent::Moved(..) | IconEvent::GroupMoved(_))) => {
                        self.save_icons(&wrap);
                        PointerOutcome::Icon(event)
                    }
                    Some(event) => PointerOutcome::Icon(event),
                    None => PointerOutcome::None,
                }
            }
            PointerSession::Marquee { wrap } => {
                let selected = self
                    .mission
                    .desktop_for_wrap_mut(&wrap)
                    .map(|d| d.wrap.icons_mut().end_marquee())
                    .unwrap_or_default();
                PointerOutcome::MarqueeSelected(selected)
            }
        }
    }

    /// Abandon session `id`; windows keep their committed geometry
    pub fn cancel_interaction(&mut self, id: SessionId) -> bool {
        match self.session.end(id) {
            Some(session) => {
                self.discard_session(session);
                true
            }
            None => false,
        }
    }

    /// Abandon whatever session is running
    fn abort_interaction(&mut self) -> bool {
        match self.session.take() {
            Some((_, session)) => {
                self.discard_session(session);
                true
            }
            None => false,
        }
    }

    fn discard_session(&mut self, session: PointerSession) {
        tracing::debug!(?session, "pointer session cancelled");
        match session {
            PointerSession::WindowDrag { window, .. }
            | PointerSession::WindowResize { window, .. } => {
                if let Some(w) = self.windows.get_mut(&window) {
                    w.take_live();
                }
            }
            PointerSession::Icon { wrap } => {
                if let Some(desktop) = self.mission.desktop_for_wrap_mut(&wrap) {
                    desktop.wrap.cancel_icon_gesture();
                }
            }
            PointerSession::Marquee { wrap } => {
                if let Some(desktop) = self.mission.desktop_for_wrap_mut(&wrap) {
                    desktop.wrap.icons_mut().end_marquee();
                }
            }
        }
    }

    /// Preview of the pending edge snap, if any
    pub fn snap_preview(&self) -> Option<Rect> {
        match self.interaction()? {
            PointerSession::WindowDrag { snap, .. } => {
                snap.preview(self.viewport, &self.config.window)
            }
            _ => None,
        }
    }

    // ========================================================================
    // Mission Control overview
    // ========================================================================

    /// Open the overview; hides the chrome at once
    pub fn open_overview(&mut self, now: f64) -> bool {
        if !self.overview.open(now) {
            return false;
        }
        self.abort_interaction();
        let chrome = UiState::new(self.store.as_mut()).chrome();
        self.saved_chrome = Some(chrome);
        self.persist("overview open", |ui| {
            ui.set_chrome(chrome.for_overview())?;
            ui.set_mission_control_opened(true)
        });
        self.focus.update_focus(MISSION_CONTROL_SURFACE);
        true
    }

    /// Leave the overview towards desktop `index`
    pub fn select_overview(&mut self, index: usize, now: f64) -> bool {
        index < self.mission.len() && self.overview.select(index, now)
    }

    /// Leave the overview towards the thumbnail under `point`
    pub fn select_overview_at(&mut self, point: Vec2, now: f64) -> bool {
        match thumbnail_at(&self.thumbnails(), point) {
            Some(index) => self.select_overview(index, now),
            None => false,
        }
    }

    /// Leave the overview without switching desktop
    pub fn dismiss_overview(&mut self, now: f64) -> bool {
        let active = self.mission.active_index();
        self.overview.dismiss(active, now)
    }

    pub fn thumbnails(&self) -> Vec<Thumbnail> {
        thumbnail_layout(self.mission.len(), self.viewport, &self.config.overview)
    }

    fn on_overview_event(&mut self, event: OverviewEvent) {
        match event {
            OverviewEvent::FadeStarted | OverviewEvent::Opened => {
                tracing::trace!(?event, "overview");
            }
            OverviewEvent::Closed { target } => {
                if !self.mission.switch_desktop(target) {
                    tracing::debug!(index = target, "overview target gone, keeping active desktop");
                }
                let chrome = self.saved_chrome.take().unwrap_or_default();
                self.persist("overview close", |ui| {
                    ui.set_chrome(chrome)?;
                    ui.set_mission_control_opened(false)
                });
                self.focus_top_window();
            }
        }
    }

    // ========================================================================
    // Frame loop
    // ========================================================================

    /// Advance every timer; returns true while anything is still moving
    pub fn tick(&mut self, now: f64) -> bool {
        let mut active = self.windows.tick(now);

        if let Some((_, session)) = self.session.current_mut() {
            match session {
                PointerSession::WindowDrag { snap, .. } => {
                    snap.tick(now);
                }
                PointerSession::Icon { wrap } => {
                    if let Some(desktop) = self.mission.desktop_for_wrap_mut(wrap) {
                        desktop.wrap.poll_hold(now);
                    }
                }
                PointerSession::WindowResize { .. } | PointerSession::Marquee { .. } => {}
            }
            active = true;
        }

        for event in self.overview.tick(now) {
            self.on_overview_event(event);
        }
        active || self.overview.is_active()
    }
}
