//! Render-space layout math
//!
//! Pure geometry: no drawing, no state. The engine computes rectangles
//! here and hands them to the draw surface unchanged.

use statbar_types::VerticalAlignment;

/// Axis-aligned rectangle in render-space, corner form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Rect {
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x + width,
            y1: y + height,
        }
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

/// Resolve the top Y of a content block within an overlay's bounds
///
/// `content_height` is the full height of whatever is being anchored (text
/// row plus bar, for bar overlays). The match is total over the closed
/// alignment enum; a new variant fails compilation here until handled.
pub fn resolve_vertical_anchor(
    alignment: VerticalAlignment,
    overlay_top: f32,
    overlay_height: f32,
    content_height: f32,
) -> f32 {
    match alignment {
        VerticalAlignment::Top => overlay_top,
        VerticalAlignment::Middle => overlay_top + (overlay_height - content_height) / 2.0,
        VerticalAlignment::Bottom => overlay_top + overlay_height - content_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_top() {
        assert_eq!(
            resolve_vertical_anchor(VerticalAlignment::Top, 100.0, 50.0, 20.0),
            100.0
        );
    }

    #[test]
    fn test_anchor_middle() {
        assert_eq!(
            resolve_vertical_anchor(VerticalAlignment::Middle, 100.0, 50.0, 20.0),
            115.0
        );
    }

    #[test]
    fn test_anchor_bottom() {
        assert_eq!(
            resolve_vertical_anchor(VerticalAlignment::Bottom, 100.0, 50.0, 20.0),
            130.0
        );
    }

    #[test]
    fn test_anchor_content_taller_than_overlay() {
        // Content overflows upward for Bottom, stays pinned for Top
        assert_eq!(
            resolve_vertical_anchor(VerticalAlignment::Bottom, 100.0, 10.0, 30.0),
            80.0
        );
        assert_eq!(
            resolve_vertical_anchor(VerticalAlignment::Top, 100.0, 10.0, 30.0),
            100.0
        );
    }

    #[test]
    fn test_rect_from_xywh() {
        let rect = Rect::from_xywh(5.0, 10.0, 20.0, 4.0);
        assert_eq!(rect, Rect::new(5.0, 10.0, 25.0, 14.0));
        assert_eq!(rect.width(), 20.0);
        assert_eq!(rect.height(), 4.0);
    }
}
