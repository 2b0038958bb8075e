//! Icon grid state and drag/drop commit rules

use std::collections::BTreeMap;

use crate::error::{DesktopError, DesktopResult};
use crate::geometry::clamp_axis;
use crate::math::{Rect, Size, Vec2};

use super::search::{nearest_free_cell, OccupiedSet};
use super::{GridCoord, GridLayout, IconRecord, Marquee};

/// Outcome of dropping a single icon
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The icon moved to (or stayed on) this cell
    Committed(GridCoord),
    /// The target cell was taken; the icon went back to this cell
    Reverted(GridCoord),
}

impl Placement {
    pub fn coord(&self) -> GridCoord {
        match *self {
            Placement::Committed(c) | Placement::Reverted(c) => c,
        }
    }
}

#[derive(Clone, Debug)]
struct IconDrag {
    index: usize,
    grab_offset: Vec2,
    live: Vec2,
}

#[derive(Clone, Debug)]
struct GroupMember {
    index: usize,
    origin: Vec2,
}

#[derive(Clone, Debug)]
struct GroupDrag {
    start_pointer: Vec2,
    members: Vec<GroupMember>,
    delta: Vec2,
}

/// Icon grid for one desktop
///
/// Icons keep their insertion order, which also decides who goes first
/// when several icons need a new cell in the same pass.
#[derive(Clone, Debug)]
pub struct IconGrid {
    layout: GridLayout,
    icons: Vec<IconRecord>,
    drag: Option<IconDrag>,
    group: Option<GroupDrag>,
    marquee: Option<Marquee>,
    suppress_next_click: bool,
}

impl IconGrid {
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            icons: Vec::new(),
            drag: None,
            group: None,
            marquee: None,
            suppress_next_click: false,
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn icons(&self) -> &[IconRecord] {
        &self.icons
    }

    pub fn icon(&self, id: &str) -> Option<&IconRecord> {
        self.icons.iter().find(|icon| icon.id == id)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.icons.iter().position(|icon| icon.id == id)
    }

    /// Add an icon in the first free cell, filling columns top to bottom
    ///
    /// Adding an id that already exists returns its current cell. When no
    /// cell is free the icon is not added and [`DesktopError::GridFull`] is
    /// returned.
    pub fn insert_icon(
        &mut self,
        id: impl Into<String>,
        label: impl Into<String>,
    ) -> DesktopResult<GridCoord> {
        let id = id.into();
        if let Some(existing) = self.icon(&id) {
            return Ok(existing.coord);
        }

        let occupied = self.occupied_where(|_| true);
        let (columns, rows) = (self.layout.columns(), self.layout.rows());
        let coord = (0..columns)
            .flat_map(|col| (0..rows).map(move |row| GridCoord::new(col, row)))
            .find(|cell| !occupied.contains(cell))
            .ok_or(DesktopError::GridFull { columns, rows })?;

        self.icons.push(IconRecord::new(id, label, coord));
        Ok(coord)
    }

    /// Seed icons in catalog order, stopping at the first one that does not fit
    pub fn seed<I, S, L>(&mut self, entries: I) -> DesktopResult<()>
    where
        I: IntoIterator<Item = (S, L)>,
        S: Into<String>,
        L: Into<String>,
    {
        for (id, label) in entries {
            self.insert_icon(id, label)?;
        }
        Ok(())
    }

    /// Where an icon is drawn: live drag position if dragging, else derived
    pub fn pixel_position(&self, id: &str) -> Option<Vec2> {
        let index = self.index_of(id)?;
        if let Some(drag) = self.drag.as_ref().filter(|d| d.index == index) {
            return Some(drag.live);
        }
        if let Some(group) = &self.group {
            if let Some(member) = group.members.iter().find(|m| m.index == index) {
                return Some(member.origin + group.delta);
            }
        }
        Some(self.layout.pixel_of(self.icons[index].coord))
    }

    fn occupied_where(&self, include: impl Fn(usize) -> bool) -> OccupiedSet {
        self.icons
            .iter()
            .enumerate()
            .filter(|(i, _)| include(*i))
            .map(|(_, icon)| icon.coord)
            .collect()
    }

    // =========================================================================
    // Single-icon drop
    // =========================================================================

    /// Commit a proposed pixel position for one icon
    ///
    /// The position is snapped and converted to a cell. If another icon
    /// already holds that cell the move is rejected and the icon keeps its
    /// previous cell; there is no nudging aside. Unknown ids return `None`.
    pub fn handle_position_change(&mut self, id: &str, proposed: Vec2) -> Option<Placement> {
        let index = self.index_of(id)?;
        let candidate = self.layout.coord_of(self.layout.snap(proposed));

        let taken = self
            .icons
            .iter()
            .enumerate()
            .any(|(i, icon)| i != index && icon.coord == candidate);

        if taken {
            tracing::debug!(
                icon = id,
                col = candidate.col,
                row = candidate.row,
                "drop rejected, cell occupied"
            );
            return Some(Placement::Reverted(self.icons[index].coord));
        }

        self.icons[index].coord = candidate;
        Some(Placement::Committed(candidate))
    }

    /// Start dragging one icon; `grab_offset` is pointer minus icon corner
    pub fn begin_drag(&mut self, id: &str, grab_offset: Vec2) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.group = None;
        self.drag = Some(IconDrag {
            index,
            grab_offset,
            live: self.layout.pixel_of(self.icons[index].coord),
        });
        true
    }

    /// Move the dragged icon under the pointer, clamped to the viewport
    pub fn drag_to(&mut self, pointer: Vec2) -> Option<Vec2> {
        let bounds = self.layout.bounds();
        let drag = self.drag.as_mut()?;
        drag.live = crate::geometry::drag_position(pointer, drag.grab_offset, &bounds);
        Some(drag.live)
    }

    /// Drop the dragged icon at its live position
    pub fn end_drag(&mut self) -> Option<(String, Placement)> {
        let drag = self.drag.take()?;
        let id = self.icons[drag.index].id.clone();
        let placement = self.handle_position_change(&id, drag.live)?;
        Some((id, placement))
    }

    /// Abandon the drag; the icon stays on its committed cell
    pub fn cancel_drag(&mut self) {
        self.drag = None;
        self.group = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some() || self.group.is_some()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn select_only(&mut self, id: &str) {
        for icon in &mut self.icons {
            icon.selected = icon.id == id;
        }
    }

    pub fn toggle_selection(&mut self, id: &str) {
        if let Some(icon) = self.icons.iter_mut().find(|icon| icon.id == id) {
            icon.selected = !icon.selected;
        }
    }

    pub fn clear_selection(&mut self) {
        for icon in &mut self.icons {
            icon.selected = false;
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.icon(id).map(|icon| icon.selected).unwrap_or(false)
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.icons
            .iter()
            .filter(|icon| icon.selected)
            .map(|icon| icon.id.clone())
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.icons.iter().filter(|icon| icon.selected).count()
    }

    // =========================================================================
    // Group drag
    // =========================================================================

    /// Snapshot every selected icon; needs at least two selected
    pub fn begin_group_drag(&mut self, pointer: Vec2) -> bool {
        if self.selected_count() < 2 {
            return false;
        }
        let members = self
            .icons
            .iter()
            .enumerate()
            .filter(|(_, icon)| icon.selected)
            .map(|(index, icon)| GroupMember {
                index,
                origin: self.layout.pixel_of(icon.coord),
            })
            .collect();

        self.drag = None;
        self.group = Some(GroupDrag {
            start_pointer: pointer,
            members,
            delta: Vec2::ZERO,
        });
        true
    }

    /// Translate the whole selection; the group is clamped as one block
    pub fn group_drag_to(&mut self, pointer: Vec2) -> Option<Vec2> {
        let bounds = self.layout.bounds();
        let group = self.group.as_mut()?;

        let raw = pointer - group.start_pointer;
        let (min, max) = group.members.iter().fold(
            (
                Vec2::new(f32::INFINITY, f32::INFINITY),
                Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
            ),
            |(min, max), m| {
                (
                    Vec2::new(min.x.min(m.origin.x), min.y.min(m.origin.y)),
                    Vec2::new(max.x.max(m.origin.x), max.y.max(m.origin.y)),
                )
            },
        );

        group.delta = Vec2::new(
            clamp_axis(raw.x, bounds.min.x - min.x, bounds.max.x - max.x),
            clamp_axis(raw.y, bounds.min.y - min.y, bounds.max.y - max.y),
        );
        Some(group.delta)
    }

    /// Drop the selection
    ///
    /// Each icon targets its own cell. Collisions with icons outside the
    /// selection, and with selected icons already placed in this pass, are
    /// resolved with the nearest-free-cell search. If some member finds no
    /// free cell the whole drop is refused and every member keeps its cell.
    pub fn end_group_drag(&mut self) -> Vec<(String, GridCoord)> {
        let Some(group) = self.group.take() else {
            return Vec::new();
        };
        let (columns, rows) = (self.layout.columns(), self.layout.rows());
        let members: Vec<usize> = group.members.iter().map(|m| m.index).collect();
        let mut occupied = self.occupied_where(|i| !members.contains(&i));

        let mut cells = Vec::with_capacity(group.members.len());
        for member in &group.members {
            let target = self.layout.coord_of(member.origin + group.delta);
            match nearest_free_cell(target, &occupied, columns, rows) {
                Ok(cell) => {
                    occupied.insert(cell);
                    cells.push((member.index, cell));
                }
                Err(err) => {
                    tracing::warn!(%err, "no free cell for grouped icon, group drop refused");
                    return Vec::new();
                }
            }
        }

        let placed: Vec<(String, GridCoord)> = cells
            .into_iter()
            .map(|(index, cell)| {
                let icon = &mut self.icons[index];
                icon.coord = cell;
                (icon.id.clone(), cell)
            })
            .collect();
        tracing::debug!(count = placed.len(), "group drop committed");
        placed
    }

    // =========================================================================
    // Viewport changes and restore
    // =========================================================================

    /// Relayout after a viewport change
    ///
    /// Icons still on the grid keep their cells. Icons that fell off are
    /// moved to the nearest free cell from their clamped position; icons
    /// left without any free cell are removed. Returns the relocated icons.
    pub fn set_viewport(&mut self, viewport: Size) -> Vec<(String, GridCoord)> {
        self.layout.viewport = viewport;
        self.drag = None;
        self.group = None;
        self.relocate_displaced()
    }

    /// Apply a saved layout (unknown ids ignored), then heal collisions
    pub fn apply_layout(
        &mut self,
        saved: &BTreeMap<String, GridCoord>,
    ) -> Vec<(String, GridCoord)> {
        for icon in &mut self.icons {
            if let Some(coord) = saved.get(&icon.id) {
                icon.coord = *coord;
            }
        }
        self.relocate_displaced()
    }

    /// Current cell of every icon, keyed by id
    pub fn layout_snapshot(&self) -> BTreeMap<String, GridCoord> {
        self.icons
            .iter()
            .map(|icon| (icon.id.clone(), icon.coord))
            .collect()
    }

    fn relocate_displaced(&mut self) -> Vec<(String, GridCoord)> {
        let (columns, rows) = (self.layout.columns(), self.layout.rows());
        let mut occupied = OccupiedSet::new();
        let mut displaced = Vec::new();

        for (index, icon) in self.icons.iter().enumerate() {
            if !(icon.coord.in_bounds(columns, rows) && occupied.insert(icon.coord)) {
                displaced.push(index);
            }
        }

        let mut moved = Vec::with_capacity(displaced.len());
        let mut homeless = Vec::new();
        for index in displaced {
            let seed = self.icons[index].coord.clamped(columns, rows);
            match nearest_free_cell(seed, &occupied, columns, rows) {
                Ok(cell) => {
                    occupied.insert(cell);
                    let icon = &mut self.icons[index];
                    icon.coord = cell;
                    moved.push((icon.id.clone(), cell));
                }
                Err(err) => {
                    let icon = &self.icons[index].id;
                    tracing::warn!(icon = %icon, %err, "no free cell, removing icon");
                    homeless.push(index);
                }
            }
        }
        // Highest index first so earlier indices stay valid
        for index in homeless.into_iter().rev() {
            self.icons.remove(index);
        }

        if !moved.is_empty() {
            tracing::debug!(count = moved.len(), columns, rows, "relocated icons");
        }
        moved
    }

    // =========================================================================
    // Marquee selection
    // =========================================================================

    /// Start a rubber-band selection; clears the current selection
    pub fn begin_marquee(&mut self, pointer: Vec2) {
        self.clear_selection();
        self.marquee = Some(Marquee::new(pointer));
    }

    /// Grow the marquee and select every icon it overlaps
    pub fn update_marquee(&mut self, pointer: Vec2) -> Option<Rect> {
        let marquee = self.marquee.as_mut()?;
        marquee.current = pointer;
        let rect = marquee.rect();
        for icon in &mut self.icons {
            icon.selected = self.layout.rect_of(icon.coord).intersects(&rect);
        }
        Some(rect)
    }

    /// Finish the marquee; the mouse-up's own background click is swallowed
    pub fn end_marquee(&mut self) -> Vec<String> {
        if self.marquee.take().is_some() {
            self.suppress_next_click = true;
        }
        self.selected_ids()
    }

    pub fn marquee_rect(&self) -> Option<Rect> {
        self.marquee.as_ref().map(Marquee::rect)
    }

    /// Click on empty desktop: deselect all, unless a marquee just ended
    ///
    /// Returns true if the selection was cleared.
    pub fn background_click(&mut self) -> bool {
        if self.suppress_next_click {
            self.suppress_next_click = false;
            return false;
        }
        self.clear_selection();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    fn grid() -> IconGrid {
        let layout = GridLayout::new(&GridConfig::default(), Size::new(1000.0, 800.0));
        let mut grid = IconGrid::new(layout);
        grid.seed([("terminal", "Terminal"), ("sorting", "Sorting"), ("snake", "Snake")])
            .unwrap();
        grid
    }

    fn coord(grid: &IconGrid, id: &str) -> GridCoord {
        grid.icon(id).unwrap().coord
    }

    #[test]
    fn test_seed_fills_first_column() {
        let grid = grid();
        assert_eq!(coord(&grid, "terminal"), GridCoord::new(0, 0));
        assert_eq!(coord(&grid, "sorting"), GridCoord::new(0, 1));
        assert_eq!(coord(&grid, "snake"), GridCoord::new(0, 2));
    }

    #[test]
    fn test_insert_existing_id_is_idempotent() {
        let mut grid = grid();
        assert_eq!(grid.insert_icon("sorting", "Sorting"), Ok(GridCoord::new(0, 1)));
        assert_eq!(grid.icons().len(), 3);
    }

    #[test]
    fn test_seed_stops_when_grid_is_full() {
        // 250x250 leaves room for a 2x2 grid
        let layout = GridLayout::new(&GridConfig::default(), Size::new(250.0, 250.0));
        assert_eq!((layout.columns(), layout.rows()), (2, 2));
        let mut grid = IconGrid::new(layout);

        let ids = ["a", "b", "c", "d", "e", "f"];
        let err = grid.seed(ids.iter().map(|id| (*id, *id))).unwrap_err();
        assert_eq!(err, DesktopError::GridFull { columns: 2, rows: 2 });
        assert_eq!(grid.icons().len(), 4);

        let cells: OccupiedSet = grid.icons().iter().map(|i| i.coord).collect();
        assert_eq!(cells.len(), 4);
        assert!(grid.icon("e").is_none());
        // Known ids still resolve on a full grid
        assert_eq!(grid.insert_icon("d", "d"), Ok(GridCoord::new(1, 1)));
    }

    #[test]
    fn test_viewport_shrink_removes_icons_without_room() {
        let mut grid = grid();
        grid.handle_position_change("snake", Vec2::new(520.0, 520.0));

        // 150x150 leaves a single cell
        let moved = grid.set_viewport(Size::new(150.0, 150.0));
        assert!(moved.is_empty());
        assert_eq!(grid.icons().len(), 1);
        assert_eq!(coord(&grid, "terminal"), GridCoord::new(0, 0));

        // Growing back lets the missing icons be seeded again
        grid.set_viewport(Size::new(1000.0, 800.0));
        grid.seed([("terminal", "Terminal"), ("sorting", "Sorting"), ("snake", "Snake")])
            .unwrap();
        assert_eq!(grid.icons().len(), 3);
    }

    #[test]
    fn test_drop_on_free_cell_commits() {
        let mut grid = grid();
        let placement = grid
            .handle_position_change("terminal", Vec2::new(330.0, 240.0))
            .unwrap();
        assert_eq!(placement, Placement::Committed(GridCoord::new(3, 2)));
        assert_eq!(grid.pixel_position("terminal"), Some(Vec2::new(320.0, 220.0)));
    }

    #[test]
    fn test_drop_on_occupied_cell_reverts() {
        let mut grid = grid();
        let placement = grid
            .handle_position_change("terminal", Vec2::new(25.0, 115.0))
            .unwrap();
        assert_eq!(placement, Placement::Reverted(GridCoord::new(0, 0)));
        assert_eq!(coord(&grid, "terminal"), GridCoord::new(0, 0));
        assert_eq!(coord(&grid, "sorting"), GridCoord::new(0, 1));
    }

    #[test]
    fn test_drop_negative_position_snaps_to_margin() {
        let mut grid = grid();
        grid.handle_position_change("snake", Vec2::new(520.0, 520.0));
        let placement = grid
            .handle_position_change("snake", Vec2::new(-50.0, -50.0))
            .unwrap();
        // (0,0) is held by terminal
        assert_eq!(placement, Placement::Reverted(GridCoord::new(5, 5)));

        grid.handle_position_change("terminal", Vec2::new(720.0, 20.0));
        let placement = grid
            .handle_position_change("snake", Vec2::new(-50.0, -50.0))
            .unwrap();
        assert_eq!(placement, Placement::Committed(GridCoord::new(0, 0)));
        assert_eq!(grid.pixel_position("snake"), Some(Vec2::new(20.0, 20.0)));
    }

    #[test]
    fn test_unknown_icon_is_ignored() {
        let mut grid = grid();
        assert_eq!(grid.handle_position_change("nope", Vec2::ZERO), None);
        assert!(!grid.begin_drag("nope", Vec2::ZERO));
    }

    #[test]
    fn test_single_drag_session() {
        let mut grid = grid();
        assert!(grid.begin_drag("sorting", Vec2::new(10.0, 10.0)));
        let live = grid.drag_to(Vec2::new(440.0, 350.0)).unwrap();
        assert_eq!(live, Vec2::new(430.0, 340.0));
        assert_eq!(grid.pixel_position("sorting"), Some(live));

        let (id, placement) = grid.end_drag().unwrap();
        assert_eq!(id, "sorting");
        assert_eq!(placement, Placement::Committed(GridCoord::new(4, 3)));
        assert!(!grid.is_dragging());
    }

    #[test]
    fn test_live_drag_is_clamped() {
        let mut grid = grid();
        grid.begin_drag("snake", Vec2::ZERO);
        assert_eq!(grid.drag_to(Vec2::new(5000.0, -300.0)), Some(Vec2::new(880.0, 20.0)));
    }

    #[test]
    fn test_group_drag_requires_two_selected() {
        let mut grid = grid();
        grid.select_only("terminal");
        assert!(!grid.begin_group_drag(Vec2::ZERO));
        grid.toggle_selection("sorting");
        assert!(grid.begin_group_drag(Vec2::ZERO));
    }

    #[test]
    fn test_group_drag_preserves_offsets() {
        let mut grid = grid();
        grid.select_only("terminal");
        grid.toggle_selection("sorting");

        grid.begin_group_drag(Vec2::new(50.0, 50.0));
        grid.group_drag_to(Vec2::new(260.0, 140.0));
        assert_eq!(grid.pixel_position("terminal"), Some(Vec2::new(230.0, 110.0)));

        let placed = grid.end_group_drag();
        assert_eq!(placed.len(), 2);
        assert_eq!(grid.pixel_position("terminal"), Some(Vec2::new(220.0, 120.0)));
        assert_eq!(grid.pixel_position("sorting"), Some(Vec2::new(220.0, 220.0)));
        // Unselected icon untouched
        assert_eq!(coord(&grid, "snake"), GridCoord::new(0, 2));
    }

    #[test]
    fn test_group_drop_avoids_unselected_icons() {
        let mut grid = grid();
        grid.select_only("terminal");
        grid.toggle_selection("sorting");

        // Shift down by one row: sorting would land on snake
        grid.begin_group_drag(Vec2::ZERO);
        grid.group_drag_to(Vec2::new(0.0, 100.0));
        grid.end_group_drag();

        let all: Vec<GridCoord> = grid.icons().iter().map(|i| i.coord).collect();
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
        assert_eq!(coord(&grid, "terminal"), GridCoord::new(0, 1));
        assert_eq!(coord(&grid, "snake"), GridCoord::new(0, 2));
    }

    #[test]
    fn test_group_is_clamped_as_a_block() {
        let mut grid = grid();
        grid.select_only("terminal");
        grid.toggle_selection("snake");
        grid.begin_group_drag(Vec2::ZERO);
        // Far up-left: the top icon stops at the margin, the block keeps shape
        let delta = grid.group_drag_to(Vec2::new(-500.0, -500.0)).unwrap();
        assert_eq!(delta, Vec2::ZERO);
        // Far down: the bottom icon (snake at row 2) stops at the last row
        let delta = grid.group_drag_to(Vec2::new(0.0, 5000.0)).unwrap();
        assert_eq!(delta.y, 680.0 - 220.0);
    }

    #[test]
    fn test_viewport_shrink_relocates_only_displaced_icons() {
        let mut grid = grid();
        grid.handle_position_change("snake", Vec2::new(820.0, 620.0));
        assert_eq!(coord(&grid, "snake"), GridCoord::new(8, 6));

        let moved = grid.set_viewport(Size::new(500.0, 400.0));
        // 500 -> 4 columns, 400 -> 3 rows
        assert_eq!(moved, vec![("snake".to_string(), GridCoord::new(3, 2))]);
        assert_eq!(coord(&grid, "terminal"), GridCoord::new(0, 0));
        assert_eq!(coord(&grid, "sorting"), GridCoord::new(0, 1));
    }

    #[test]
    fn test_relocation_avoids_occupied_clamp_target() {
        let mut grid = grid();
        grid.handle_position_change("terminal", Vec2::new(320.0, 220.0));
        grid.handle_position_change("snake", Vec2::new(820.0, 620.0));

        grid.set_viewport(Size::new(500.0, 400.0));
        assert_eq!(coord(&grid, "terminal"), GridCoord::new(3, 2));
        assert_ne!(coord(&grid, "snake"), GridCoord::new(3, 2));
        assert!(coord(&grid, "snake").in_bounds(4, 3));
    }

    #[test]
    fn test_apply_layout_heals_duplicates() {
        let mut grid = grid();
        let saved: BTreeMap<String, GridCoord> = [
            ("terminal".to_string(), GridCoord::new(2, 2)),
            ("sorting".to_string(), GridCoord::new(2, 2)),
            ("ghost".to_string(), GridCoord::new(1, 1)),
        ]
        .into_iter()
        .collect();
        let moved = grid.apply_layout(&saved);
        assert_eq!(moved.len(), 1);
        assert_eq!(coord(&grid, "terminal"), GridCoord::new(2, 2));
        assert_ne!(coord(&grid, "sorting"), GridCoord::new(2, 2));
        assert_eq!(grid.layout_snapshot().len(), 3);
    }

    #[test]
    fn test_marquee_selects_intersecting_icons() {
        let mut grid = grid();
        grid.begin_marquee(Vec2::new(300.0, 150.0));
        // Covers rows 0 and 1 of the first column (y 20..220)
        grid.update_marquee(Vec2::new(60.0, 5.0));
        let selected = grid.end_marquee();
        assert_eq!(selected, vec!["terminal".to_string(), "sorting".to_string()]);
    }

    #[test]
    fn test_marquee_mouse_up_does_not_clear_selection() {
        let mut grid = grid();
        grid.begin_marquee(Vec2::new(0.0, 0.0));
        grid.update_marquee(Vec2::new(60.0, 60.0));
        grid.end_marquee();

        // The click generated by the marquee's own mouse-up
        assert!(!grid.background_click());
        assert!(grid.is_selected("terminal"));

        // A genuine background click afterwards
        assert!(grid.background_click());
        assert_eq!(grid.selected_count(), 0);
    }
}
