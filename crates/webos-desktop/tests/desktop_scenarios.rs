//! Desktop Scenario Tests
//!
//! End-to-end behavior of the engine through its public API.

use webos_desktop::icons::GridLayout;
use webos_desktop::persistence::{ICONS_GROUP, UI_GROUP};
use webos_desktop::{
    AppCatalog, DesktopConfig, DesktopEngine, GridConfig, GridCoord, IconEvent, IconGrid,
    LaunchAction, MemoryStore, MissionControl, Placement, PointerOutcome, Rect, ResizeEdge, Size,
    StateStore, Vec2, WindowConfig, WindowId, WrapId,
};

const VIEWPORT: Size = Size::new(1440.0, 900.0);

/// Engine whose first desktop has the wrap id "desktop-1"
fn engine() -> DesktopEngine {
    DesktopEngine::new(VIEWPORT, 1.0)
}

fn icon_grid(ids: &[&str]) -> IconGrid {
    let layout = GridLayout::new(&GridConfig::default(), Size::new(1000.0, 800.0));
    let mut grid = IconGrid::new(layout);
    grid.seed(ids.iter().map(|id| (*id, *id))).unwrap();
    grid
}

const CATALOG: &str = r#"[
    {"id": "finder", "name": "Finder", "priority": 0, "indock": true},
    {"id": "terminal", "name": "Terminal", "priority": 1},
    {"id": "sorting", "name": "Sorting", "priority": 2},
    {"id": "blog", "name": "Blog", "priority": 3, "link": "https://example.org/blog"}
]"#;

// =============================================================================
// Window registry
// =============================================================================

#[test]
fn test_open_twice_yields_one_window() {
    let mut e = engine();
    let first = e.open_window(WindowConfig::named("terminal", "Terminal"));
    let second = e.open_window(WindowConfig::named("terminal", "Terminal"));

    assert_eq!(first, second);
    assert_eq!(e.windows.len(), 1);
    assert_eq!(first.as_str(), "desktop-1::terminal");
}

#[test]
fn test_reopen_after_close_creates_fresh_window() {
    let mut e = engine();
    let id = e.open_window(WindowConfig::named("terminal", "Terminal").at(300.0, 300.0));
    assert!(e.close_window(&id));

    let again = e.open_window(WindowConfig::named("terminal", "Terminal"));
    assert_eq!(again, id);
    assert_eq!(e.windows.len(), 1);
    assert_ne!(e.windows.get(&again).unwrap().position(), Vec2::new(300.0, 300.0));
}

#[test]
fn test_missing_id_is_noop() {
    let mut e = engine();
    let kept = e.open_window(WindowConfig::named("terminal", "Terminal").sized(600.0, 400.0));
    let ghost = WindowId::from_raw("nonexistent");

    assert!(!e.close_window(&ghost));
    assert!(!e.resize_window(&ghost, 100.0, 100.0, 0.0));
    assert!(!e.move_window(&ghost, 0.0, 0.0, 0.0));
    assert!(!e.show_loading(&ghost));
    assert!(!e.hide_loading(&ghost, 0.0));

    assert_eq!(e.windows.len(), 1);
    assert_eq!(e.windows.get(&kept).unwrap().size(), Size::new(600.0, 400.0));
}

#[test]
fn test_reassign_moves_window_between_desktops() {
    let mut e = engine();
    let id = e.open_window(WindowConfig::named("terminal", "Terminal"));
    e.create_desktop(50.0);
    let second = e.active_wrap_id();

    assert!(e.reassign_window(&id, &second));
    assert_eq!(e.visible_windows().len(), 1);
    assert!(!e.reassign_window(&id, &WrapId::new("desktop-404")));

    e.switch_desktop(0);
    assert!(e.visible_windows().is_empty());
}

// =============================================================================
// Icon grid
// =============================================================================

#[test]
fn test_snap_clamps_negative_drop_to_first_cell() {
    let mut grid = icon_grid(&["terminal"]);
    assert_eq!(
        grid.handle_position_change("terminal", Vec2::new(520.0, 520.0)),
        Some(Placement::Committed(GridCoord::new(5, 5)))
    );

    let placement = grid.handle_position_change("terminal", Vec2::new(-50.0, -50.0));
    assert_eq!(placement, Some(Placement::Committed(GridCoord::new(0, 0))));
    assert_eq!(grid.pixel_position("terminal"), Some(Vec2::new(20.0, 20.0)));
}

#[test]
fn test_group_drag_keeps_relative_offsets() {
    let mut grid = icon_grid(&["a", "b", "c", "d"]);
    grid.handle_position_change("c", Vec2::new(120.0, 20.0));
    grid.toggle_selection("a");
    grid.toggle_selection("c");

    let before_a = grid.pixel_position("a").unwrap();
    let before_c = grid.pixel_position("c").unwrap();

    assert!(grid.begin_group_drag(Vec2::new(60.0, 60.0)));
    grid.group_drag_to(Vec2::new(360.0, 360.0));
    let moves = grid.end_group_drag();
    assert_eq!(moves.len(), 2);

    let delta = Vec2::new(300.0, 300.0);
    assert_eq!(grid.pixel_position("a"), Some(before_a + delta));
    assert_eq!(grid.pixel_position("c"), Some(before_c + delta));
}

/// Test that an icon layout survives a reload at a later time
#[test]
fn test_icon_layout_persists_across_engines() {
    let loaded_at = 1_700_000_000_000.0;
    let catalog = AppCatalog::from_json(CATALOG).unwrap();
    let mut e = DesktopEngine::with_parts(
        DesktopConfig::default(),
        catalog.clone(),
        Box::new(MemoryStore::new()),
        VIEWPORT,
        loaded_at,
    );
    let wrap = e.active_wrap_id();

    // terminal is seeded at (20, 20); hold, drag and drop it on (4, 3)
    let s = e
        .icon_pointer_down("terminal", Vec2::new(30.0, 30.0), loaded_at)
        .unwrap();
    e.tick(loaded_at + 100.0);
    assert!(e.active_wrap().is_dragging_icon());
    e.pointer_move(s, Vec2::new(430.0, 330.0), loaded_at + 120.0);
    let outcome = e.pointer_up(s, Vec2::new(430.0, 330.0), loaded_at + 130.0);
    assert_eq!(
        outcome,
        PointerOutcome::Icon(IconEvent::Moved(
            "terminal".into(),
            Placement::Committed(GridCoord::new(4, 3))
        ))
    );

    // Copy what the first session left in the host store
    let mut store = MemoryStore::new();
    for (group, key) in [(UI_GROUP, "desktops"), (ICONS_GROUP, wrap.as_str())] {
        store.set(group, key, &e.store().get(group, key).unwrap()).unwrap();
    }

    let restored = DesktopEngine::with_parts(
        DesktopConfig::default(),
        catalog,
        Box::new(store),
        VIEWPORT,
        loaded_at + 5_000.0,
    );
    assert_eq!(restored.active_wrap_id(), wrap);
    let icon = restored.active_wrap().icons().icon("terminal").unwrap();
    assert_eq!(icon.coord, GridCoord::new(4, 3));
}

/// Test that icons beyond the grid's capacity are left off instead of stacked
#[test]
fn test_full_grid_keeps_icons_apart() {
    let catalog = AppCatalog::from_json(
        r#"[
            {"id": "a", "name": "A"}, {"id": "b", "name": "B"}, {"id": "c", "name": "C"},
            {"id": "d", "name": "D"}, {"id": "e", "name": "E"}, {"id": "f", "name": "F"}
        ]"#,
    )
    .unwrap();
    // 250x250 holds a 2x2 grid
    let mut e = DesktopEngine::with_parts(
        DesktopConfig::default(),
        catalog,
        Box::new(MemoryStore::new()),
        Size::new(250.0, 250.0),
        1.0,
    );

    let cells = |e: &DesktopEngine| -> Vec<GridCoord> {
        e.active_wrap().icons().icons().iter().map(|i| i.coord).collect()
    };
    let placed = cells(&e);
    assert_eq!(placed.len(), 4);
    let distinct: std::collections::HashSet<_> = placed.iter().collect();
    assert_eq!(distinct.len(), 4);
    assert!(e.active_wrap().icons().icon("e").is_none());

    // A bigger viewport makes room for the rest
    e.set_viewport(VIEWPORT);
    assert_eq!(cells(&e).len(), 6);
    assert!(e.active_wrap().icons().icon("f").is_some());
}

#[test]
fn test_double_tap_launches_app() {
    let catalog = AppCatalog::from_json(CATALOG).unwrap();
    let mut e = DesktopEngine::with_parts(
        DesktopConfig::default(),
        catalog,
        Box::new(MemoryStore::new()),
        VIEWPORT,
        1.0,
    );

    assert!(e.active_wrap().icons().icon("finder").is_none());
    assert!(e.icon_pointer_down("finder", Vec2::new(50.0, 50.0), 0.0).is_none());

    let p = Vec2::new(50.0, 50.0);
    let s = e.icon_pointer_down("terminal", p, 0.0).unwrap();
    let first = e.pointer_up(s, p, 20.0);
    assert_eq!(first, PointerOutcome::Icon(IconEvent::Selected("terminal".into())));

    let s = e.icon_pointer_down("terminal", p, 100.0).unwrap();
    let second = e.pointer_up(s, p, 120.0);
    let expected = WindowId::from_raw("desktop-1::terminal");
    assert_eq!(second, PointerOutcome::Launched(LaunchAction::Opened(expected.clone())));
    assert!(e.focus.is_focused(expected.as_str()));

    assert_eq!(
        e.launch_app("blog"),
        Some(LaunchAction::Navigate("https://example.org/blog".into()))
    );
    assert_eq!(e.launch_app("unknown"), None);
}

#[test]
fn test_marquee_then_background_click() {
    let catalog = AppCatalog::from_json(CATALOG).unwrap();
    let mut e = DesktopEngine::with_parts(
        DesktopConfig::default(),
        catalog,
        Box::new(MemoryStore::new()),
        VIEWPORT,
        1.0,
    );

    let s = e.background_pointer_down(Vec2::new(400.0, 5.0), 0.0).unwrap();
    e.pointer_move(s, Vec2::new(60.0, 300.0), 10.0);
    let outcome = e.pointer_up(s, Vec2::new(60.0, 300.0), 20.0);
    assert_eq!(
        outcome,
        PointerOutcome::MarqueeSelected(vec!["terminal".into(), "sorting".into(), "blog".into()])
    );

    // the click fired by the same mouse-up is swallowed
    assert!(!e.background_click());
    assert_eq!(e.active_wrap().icons().selected_count(), 3);
    assert!(e.background_click());
    assert_eq!(e.active_wrap().icons().selected_count(), 0);
}

// =============================================================================
// Mission Control
// =============================================================================

#[test]
fn test_delete_desktop_index_safety() {
    let mut e = engine();
    e.create_desktop(10.0);
    e.create_desktop(20.0);
    e.switch_desktop(1);

    assert!(e.delete_desktop(0));
    assert_eq!(e.mission.len(), 2);
    assert_eq!(e.mission.active_index(), 0);

    let mut single = engine();
    let id = single.mission.active_desktop().id;
    assert!(!single.delete_desktop(0));
    assert!(!single.delete_desktop(1));
    assert_eq!(single.mission.len(), 1);
    assert_eq!(single.mission.active_desktop().id, id);
}

#[test]
fn test_desktop_ids_stay_unique() {
    let mut e = engine();
    let a = e.create_desktop(5.0);
    let b = e.create_desktop(5.0);
    assert_ne!(a, b);
    assert_ne!(MissionControl::wrap_id_for(a), MissionControl::wrap_id_for(b));
}

#[test]
fn test_overview_select_by_thumbnail() {
    let mut e = engine();
    e.create_desktop(10.0);
    e.open_overview(1_000.0);
    e.tick(1_600.0);
    assert_eq!(e.store().get(UI_GROUP, "missionControlOpened").as_deref(), Some("true"));

    let first = e.thumbnails()[0].rect.center();
    assert!(e.select_overview_at(first, 1_700.0));
    e.tick(2_000.0);

    assert_eq!(e.mission.active_index(), 0);
    assert_eq!(e.store().get(UI_GROUP, "menubarVisible").as_deref(), Some("true"));
    assert_eq!(e.store().get(UI_GROUP, "missionControlOpened").as_deref(), Some("false"));
}

// =============================================================================
// Window interaction
// =============================================================================

#[test]
fn test_edge_snap_requires_dwell() {
    let mut e = engine();
    let id = e.open_window(WindowConfig::named("w", "W").at(300.0, 300.0).sized(600.0, 400.0));

    // brushes the top band, leaves before the debounce
    let s = e.begin_window_drag(&id, Vec2::new(400.0, 310.0), 0.0).unwrap();
    e.pointer_move(s, Vec2::new(400.0, 10.0), 100.0);
    e.tick(300.0);
    e.pointer_move(s, Vec2::new(400.0, 10.0), 340.0);
    e.pointer_move(s, Vec2::new(400.0, 200.0), 349.0);
    e.tick(700.0);
    let outcome = e.pointer_up(s, Vec2::new(400.0, 200.0), 800.0);
    assert!(matches!(outcome, PointerOutcome::WindowMoved { .. }));

    // brief visit, released before the debounce elapsed
    let s = e.begin_window_drag(&id, Vec2::new(400.0, 200.0), 1_000.0).unwrap();
    e.pointer_move(s, Vec2::new(400.0, 10.0), 1_100.0);
    let outcome = e.pointer_up(s, Vec2::new(400.0, 200.0), 1_200.0);
    assert!(matches!(outcome, PointerOutcome::WindowMoved { .. }));

    // dwell of 250ms commits fullscreen
    let s = e.begin_window_drag(&id, Vec2::new(400.0, 200.0), 2_000.0).unwrap();
    e.pointer_move(s, Vec2::new(400.0, 10.0), 2_100.0);
    e.tick(2_350.0);
    let outcome = e.pointer_up(s, Vec2::new(400.0, 10.0), 2_360.0);
    let fullscreen = Rect::new(0.0, 26.0, 1440.0, 874.0);
    assert!(matches!(
        outcome,
        PointerOutcome::WindowSnapped { rect, .. } if rect == fullscreen
    ));
    assert_eq!(e.windows.get(&id).unwrap().rect(), fullscreen);
}

#[test]
fn test_end_to_end_drag_hits_clamps() {
    let mut e = engine();
    let wrap = WrapId::new("desktop-1");
    assert_eq!(e.active_wrap_id(), wrap);

    let id = e.open_window_in(
        &wrap,
        WindowConfig::named("a", "Terminal").at(10.0, 10.0).sized(600.0, 400.0),
        None,
    );

    let grab = Vec2::new(100.0, 20.0);
    let s = e.begin_window_drag(&id, grab, 0.0).unwrap();
    e.pointer_move(s, grab + Vec2::new(-20.0, -20.0), 16.0);
    let outcome = e.pointer_up(s, grab + Vec2::new(-20.0, -20.0), 32.0);

    let expected = Rect::new(0.0, 26.0, 600.0, 400.0);
    assert_eq!(outcome, PointerOutcome::WindowMoved { id: id.clone(), rect: expected });
    assert_eq!(e.windows.get(&id).unwrap().rect(), expected);
}

#[test]
fn test_resize_never_below_minimum() {
    let mut e = engine();
    let id = e.open_window(WindowConfig::named("w", "W").at(300.0, 300.0).sized(600.0, 400.0));

    let s = e
        .begin_window_resize(&id, ResizeEdge::BottomRight, Vec2::new(900.0, 700.0), 0.0)
        .unwrap();
    e.pointer_move(s, Vec2::new(-5_000.0, -5_000.0), 10.0);
    let outcome = e.pointer_up(s, Vec2::new(-5_000.0, -5_000.0), 20.0);

    let rect = match outcome {
        PointerOutcome::WindowResized { rect, .. } => rect,
        other => panic!("expected resize, got {:?}", other),
    };
    assert_eq!(rect.size(), Size::new(200.0, 200.0));
    assert_eq!(rect.position(), Vec2::new(300.0, 300.0));
}

#[test]
fn test_programmatic_move_eases_but_commits_immediately() {
    let mut e = engine();
    let id = e.open_window(WindowConfig::named("w", "W").at(100.0, 100.0).sized(400.0, 300.0));

    assert!(e.move_window(&id, 500.0, 100.0, 0.0));
    let window = e.windows.get(&id).unwrap();
    assert_eq!(window.position(), Vec2::new(500.0, 100.0));
    let halfway = window.display_rect(150.0);
    assert!(halfway.x > 100.0 && halfway.x < 500.0);

    assert!(e.tick(150.0));
    assert!(!e.tick(300.0));
    assert_eq!(e.windows.get(&id).unwrap().display_rect(300.0).x, 500.0);
}
