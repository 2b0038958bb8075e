use serde::{Deserialize, Serialize};

/// Integer cell on the icon grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    pub col: u32,
    pub row: u32,
}

impl GridCoord {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Whether the cell exists on a `columns` x `rows` grid
    pub fn in_bounds(&self, columns: u32, rows: u32) -> bool {
        self.col < columns && self.row < rows
    }

    /// Nearest cell on a `columns` x `rows` grid
    pub fn clamped(&self, columns: u32, rows: u32) -> GridCoord {
        GridCoord::new(
            self.col.min(columns.saturating_sub(1)),
            self.row.min(rows.saturating_sub(1)),
        )
    }
}

/// One desktop icon
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IconRecord {
    /// Application id this icon launches
    pub id: String,
    /// Display label
    pub label: String,
    /// Committed grid cell
    pub coord: GridCoord,
    /// Transient selection state, never persisted
    #[serde(skip)]
    pub selected: bool,
}

impl IconRecord {
    pub fn new(id: impl Into<String>, label: impl Into<String>, coord: GridCoord) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            coord,
            selected: false,
        }
    }
}
