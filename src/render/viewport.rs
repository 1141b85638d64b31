//! Letterbox viewport
//!
//! The play-field has a fixed logical size. It is scaled uniformly to fit
//! the window and centered, leaving bars on the long axis.

use macroquad::math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Logical play-field size
    pub logical: Vec2,
    /// Window pixels per logical pixel
    pub scale: f32,
    /// Window position of the play-field's top-left corner
    pub offset: Vec2,
}

impl Viewport {
    /// Fit `logical` inside a `window`-sized area
    pub fn fit(logical: Vec2, window: Vec2) -> Self {
        let scale = (window.x / logical.x).min(window.y / logical.y).max(0.0);
        let offset = (window - logical * scale) * 0.5;
        Self { logical, scale, offset }
    }

    /// Size of the scaled play-field in window pixels
    pub fn size(&self) -> Vec2 {
        self.logical * self.scale
    }

    /// Window position → logical position (None when the window has no area)
    pub fn to_logical(&self, window_pos: Vec2) -> Option<Vec2> {
        if self.scale <= 0.0 {
            return None;
        }
        Some((window_pos - self.offset) / self.scale)
    }

    /// Logical position → window position
    #[cfg(test)]
    pub fn to_window(&self, logical_pos: Vec2) -> Vec2 {
        logical_pos * self.scale + self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: Vec2 = Vec2::new(600.0, 800.0);

    #[test]
    fn test_wide_window_gets_side_bars() {
        let vp = Viewport::fit(FIELD, Vec2::new(1920.0, 1080.0));
        assert!((vp.scale - 1.35).abs() < 1e-6);
        assert!((vp.offset.x - 555.0).abs() < 1e-3);
        assert!(vp.offset.y.abs() < 1e-3);
        assert!((vp.size().y - 1080.0).abs() < 1e-3);
    }

    #[test]
    fn test_tall_window_gets_top_bars() {
        let vp = Viewport::fit(FIELD, Vec2::new(300.0, 1000.0));
        assert_eq!(vp.scale, 0.5);
        assert_eq!(vp.offset, Vec2::new(0.0, 300.0));
    }

    #[test]
    fn test_coordinate_mapping() {
        let vp = Viewport::fit(FIELD, Vec2::new(1200.0, 800.0));
        assert_eq!(vp.scale, 1.0);
        assert_eq!(vp.offset, Vec2::new(300.0, 0.0));

        let window = vp.to_window(Vec2::new(300.0, 500.0));
        assert_eq!(window, Vec2::new(600.0, 500.0));
        assert_eq!(vp.to_logical(window), Some(Vec2::new(300.0, 500.0)));
        // A click on the left bar lands at negative x
        assert!(vp.to_logical(Vec2::new(10.0, 10.0)).unwrap().x < 0.0);
    }

    #[test]
    fn test_minimized_window() {
        let vp = Viewport::fit(FIELD, Vec2::ZERO);
        assert_eq!(vp.to_logical(Vec2::new(5.0, 5.0)), None);
    }
}
