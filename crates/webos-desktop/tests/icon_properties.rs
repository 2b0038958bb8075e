//! Icon Grid Property Tests
//!
//! Invariants of the icon grid under arbitrary drop sequences.

use std::collections::HashSet;

use proptest::prelude::*;
use webos_desktop::icons::GridLayout;
use webos_desktop::{GridConfig, IconGrid, Size, Vec2};

const IDS: [&str; 6] = ["terminal", "sorting", "snake", "blog", "chess", "paint"];

fn grid() -> IconGrid {
    let layout = GridLayout::new(&GridConfig::default(), Size::new(1000.0, 800.0));
    let mut grid = IconGrid::new(layout);
    grid.seed(IDS.iter().map(|id| (*id, *id))).unwrap();
    grid
}

fn assert_distinct_cells(grid: &IconGrid) {
    let cells: HashSet<_> = grid.icons().iter().map(|icon| icon.coord).collect();
    assert_eq!(cells.len(), grid.icons().len());
}

proptest! {
    /// Test that single-icon drops never stack two icons on one cell
    #[test]
    fn single_drops_keep_cells_distinct(
        drops in prop::collection::vec((0usize..6, -300.0f32..1300.0, -300.0f32..1100.0), 1..40)
    ) {
        let mut g = grid();
        for (index, x, y) in drops {
            g.handle_position_change(IDS[index], Vec2::new(x, y));
            assert_distinct_cells(&g);
        }
    }

    /// Test that group drops resolve collisions instead of stacking
    #[test]
    fn group_drops_keep_cells_distinct(
        members in prop::collection::hash_set(0usize..6, 2..6),
        dx in -900.0f32..900.0,
        dy in -700.0f32..700.0,
    ) {
        let mut g = grid();
        for index in &members {
            g.toggle_selection(IDS[*index]);
        }
        prop_assert!(g.begin_group_drag(Vec2::new(500.0, 400.0)));
        g.group_drag_to(Vec2::new(500.0 + dx, 400.0 + dy));
        let placed = g.end_group_drag();

        prop_assert_eq!(placed.len(), members.len());
        assert_distinct_cells(&g);
        let (columns, rows) = (g.layout().columns(), g.layout().rows());
        for icon in g.icons() {
            prop_assert!(icon.coord.in_bounds(columns, rows));
        }
    }
}
