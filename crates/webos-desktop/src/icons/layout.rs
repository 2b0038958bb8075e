use crate::config::GridConfig;
use crate::geometry::{self, Bounds, Margins};
use crate::math::{Rect, Size, Vec2};

use super::GridCoord;

/// Grid geometry for one viewport size
///
/// Cell `(col, row)` has its top-left corner at
/// `margin + (col, row) * cell_size`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    pub margin: f32,
    pub cell_size: f32,
    pub icon_size: Size,
    pub viewport: Size,
}

impl GridLayout {
    pub fn new(config: &GridConfig, viewport: Size) -> Self {
        Self {
            margin: config.margin,
            cell_size: config.cell_size,
            icon_size: config.icon_size,
            viewport,
        }
    }

    /// Number of columns whose icons fit fully inside the viewport (at least one)
    pub fn columns(&self) -> u32 {
        Self::cells_along(self.viewport.width, self.margin, self.icon_size.width, self.cell_size)
    }

    /// Number of rows whose icons fit fully inside the viewport (at least one)
    pub fn rows(&self) -> u32 {
        Self::cells_along(self.viewport.height, self.margin, self.icon_size.height, self.cell_size)
    }

    fn cells_along(extent: f32, margin: f32, icon: f32, cell: f32) -> u32 {
        let usable = extent - 2.0 * margin - icon;
        if usable < 0.0 || cell <= 0.0 {
            return 1;
        }
        (usable / cell).floor() as u32 + 1
    }

    /// Total cell count
    pub fn capacity(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    /// Clamp range for an icon's top-left corner
    pub fn bounds(&self) -> Bounds {
        Bounds::for_element(self.viewport, Margins::uniform(self.margin), self.icon_size)
    }

    /// Pixel position derived from a grid cell
    pub fn pixel_of(&self, coord: GridCoord) -> Vec2 {
        Vec2::new(
            self.margin + coord.col as f32 * self.cell_size,
            self.margin + coord.row as f32 * self.cell_size,
        )
    }

    /// Icon bounding box for a cell
    pub fn rect_of(&self, coord: GridCoord) -> Rect {
        Rect::from_pos_size(self.pixel_of(coord), self.icon_size)
    }

    /// Snap a raw pixel position onto the grid, clamped to the viewport
    pub fn snap(&self, raw: Vec2) -> Vec2 {
        geometry::snap_to_grid(
            raw,
            Vec2::new(self.margin, self.margin),
            self.cell_size,
            &self.bounds(),
        )
    }

    /// Candidate cell for a pixel position: rounded, clamped to the grid
    pub fn coord_of(&self, pixel: Vec2) -> GridCoord {
        let col = ((pixel.x - self.margin) / self.cell_size).round().max(0.0) as u32;
        let row = ((pixel.y - self.margin) / self.cell_size).round().max(0.0) as u32;
        GridCoord::new(col, row).clamped(self.columns(), self.rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(w: f32, h: f32) -> GridLayout {
        GridLayout::new(&GridConfig::default(), Size::new(w, h))
    }

    #[test]
    fn test_grid_dimensions() {
        // usable width 1000 - 40 - 100 = 860 -> 8 full steps + first cell
        let l = layout(1000.0, 800.0);
        assert_eq!(l.columns(), 9);
        assert_eq!(l.rows(), 7);
        assert_eq!(l.capacity(), 63);
    }

    #[test]
    fn test_tiny_viewport_keeps_one_cell() {
        let l = layout(50.0, 50.0);
        assert_eq!(l.columns(), 1);
        assert_eq!(l.rows(), 1);
    }

    #[test]
    fn test_pixel_and_coord_agree() {
        let l = layout(1000.0, 800.0);
        let c = GridCoord::new(3, 2);
        assert_eq!(l.pixel_of(c), Vec2::new(320.0, 220.0));
        assert_eq!(l.coord_of(l.pixel_of(c)), c);
        assert_eq!(l.coord_of(Vec2::new(360.0, 180.0)), GridCoord::new(3, 2));
    }

    #[test]
    fn test_coord_of_negative_and_far_positions_clamp() {
        let l = layout(1000.0, 800.0);
        assert_eq!(l.coord_of(Vec2::new(-500.0, -500.0)), GridCoord::new(0, 0));
        assert_eq!(l.coord_of(Vec2::new(5000.0, 5000.0)), GridCoord::new(8, 6));
    }

    #[test]
    fn test_snap_clamps_to_margin() {
        let l = layout(1000.0, 800.0);
        assert_eq!(l.snap(Vec2::new(-50.0, -50.0)), Vec2::new(20.0, 20.0));
    }
}
