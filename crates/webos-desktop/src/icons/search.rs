use std::collections::{HashSet, VecDeque};

use crate::error::{DesktopError, DesktopResult};

use super::GridCoord;

/// Cells currently claimed by icons
///
/// Rebuilt from scratch for every commit rather than maintained
/// incrementally; icon counts are small.
pub type OccupiedSet = HashSet<GridCoord>;

/// Breadth-first search for the free cell closest to `target`
///
/// Visits `target`, then its four neighbours, ring by ring, in FIFO order.
/// The search is bounded by the grid's cell count and reports
/// [`DesktopError::GridFull`] when every cell is occupied.
pub fn nearest_free_cell(
    target: GridCoord,
    occupied: &OccupiedSet,
    columns: u32,
    rows: u32,
) -> DesktopResult<GridCoord> {
    let columns = columns.max(1);
    let rows = rows.max(1);
    let start = target.clamped(columns, rows);
    let capacity = columns as usize * rows as usize;

    let mut visited = HashSet::with_capacity(capacity);
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    // Each cell is enqueued at most once, so this runs at most `capacity` times
    while let Some(cell) = queue.pop_front() {
        if !occupied.contains(&cell) {
            return Ok(cell);
        }
        for next in neighbours(cell, columns, rows) {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    Err(DesktopError::GridFull { columns, rows })
}

/// In-bounds orthogonal neighbours: right, down, left, up
fn neighbours(cell: GridCoord, columns: u32, rows: u32) -> impl Iterator<Item = GridCoord> {
    let GridCoord { col, row } = cell;
    [
        (col + 1 < columns).then(|| GridCoord::new(col + 1, row)),
        (row + 1 < rows).then(|| GridCoord::new(col, row + 1)),
        col.checked_sub(1).map(|c| GridCoord::new(c, row)),
        row.checked_sub(1).map(|r| GridCoord::new(col, r)),
    ]
    .into_iter()
    .flatten()
}
