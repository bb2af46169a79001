//! Canvas geometry: inch-based rectangles and EMU conversion.
//!
//! All placement in the deck model is expressed in absolute inches on a
//! fixed widescreen canvas. The OOXML serializer converts inches to EMUs
//! (English Metric Units, 914,400 per inch) at the boundary.

use serde::{Deserialize, Serialize};

/// Canvas width in inches (16:9 widescreen).
pub const CANVAS_WIDTH: f64 = 13.333;

/// Canvas height in inches (16:9 widescreen).
pub const CANVAS_HEIGHT: f64 = 7.5;

/// English Metric Units per inch.
pub const EMU_PER_INCH: f64 = 914_400.0;

/// Convert a length in inches to EMUs.
pub fn emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH).round() as i64
}

/// Convert a font size in points to centipoints (the `sz` attribute unit).
pub fn centipoints(points: u32) -> u32 {
    points * 100
}

/// An absolute rectangle on the slide canvas, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from left/top/width/height in inches.
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Shrink the rectangle by a horizontal and vertical inset on each side.
    pub fn inset(&self, dx: f64, dy: f64) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            width: self.width - 2.0 * dx,
            height: self.height - 2.0 * dy,
        }
    }

    /// Whether width and height are both non-negative.
    pub fn is_valid(&self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emu_conversion() {
        assert_eq!(emu(1.0), 914_400);
        assert_eq!(emu(0.12), 109_728);
        assert_eq!(emu(0.0), 0);
        // Canvas width rounds to the nearest EMU
        assert_eq!(emu(CANVAS_WIDTH), 12_191_695);
    }

    #[test]
    fn test_centipoints() {
        assert_eq!(centipoints(40), 4000);
        assert_eq!(centipoints(12), 1200);
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_rect_inset() {
        let r = Rect::new(0.9, 2.2, 11.5, 4.6);
        let inner = r.inset(0.45, 0.35);
        assert!(close(inner.left, 1.35));
        assert!(close(inner.top, 2.55));
        assert!(close(inner.width, 10.6));
        assert!(close(inner.height, 3.9));
    }

    #[test]
    fn test_rect_validity() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, -1.0, 1.0).is_valid());
    }
}
