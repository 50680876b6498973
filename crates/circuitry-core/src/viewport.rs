//! Viewport dimensions and pointer position.

/// Size of the drawing surface in virtual pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Build a viewport from a terminal size and the pixel size of one cell.
    pub fn from_cells(columns: u16, rows: u16, cell_width_px: f32, cell_height_px: f32) -> Self {
        Self::new(columns as f32 * cell_width_px, rows as f32 * cell_height_px)
    }

    /// Whether either dimension collapsed to zero (or below).
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Width over height, or `None` for a degenerate viewport.
    pub fn aspect(&self) -> Option<f32> {
        if self.is_degenerate() {
            None
        } else {
            Some(self.width / self.height)
        }
    }

    /// Offset of a pixel position from the viewport centre.
    pub fn offset_from_center(&self, x: f32, y: f32) -> PointerOffset {
        PointerOffset::new(x - self.width / 2.0, y - self.height / 2.0)
    }
}

/// Pointer position relative to the viewport centre, in pixels.
/// Positive y points down, as on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffset {
    pub x: f32,
    pub y: f32,
}

impl PointerOffset {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_of_terminal_cells() {
        let viewport = Viewport::from_cells(80, 24, 8.0, 16.0);
        assert_eq!(viewport, Viewport::new(640.0, 384.0));
        let aspect = viewport.aspect().unwrap();
        assert!((aspect - 640.0 / 384.0).abs() < 1e-6);
    }

    #[test]
    fn zero_sized_viewport_has_no_aspect() {
        assert_eq!(Viewport::new(0.0, 100.0).aspect(), None);
        assert_eq!(Viewport::new(100.0, 0.0).aspect(), None);
        assert!(Viewport::default().is_degenerate());
    }

    #[test]
    fn offset_is_relative_to_center() {
        let viewport = Viewport::new(200.0, 100.0);
        assert_eq!(viewport.offset_from_center(150.0, 25.0), PointerOffset::new(50.0, -25.0));
    }
}
