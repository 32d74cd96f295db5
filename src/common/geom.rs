//! Rectangle geometry in EMUs.

use super::unit::{Emu, inches_to_emu};
use std::fmt;

/// A positioned rectangle: left/top offset plus extent, all in EMUs.
///
/// Every visual primitive is placed by one of these. Coordinates originate
/// at the top-left corner of the slide canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: Emu,
    pub top: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl Rect {
    #[inline]
    pub const fn new(left: Emu, top: Emu, width: Emu, height: Emu) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Build a rectangle from inch measurements.
    pub fn from_inches(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(
            inches_to_emu(left),
            inches_to_emu(top),
            inches_to_emu(width),
            inches_to_emu(height),
        )
    }

    #[inline]
    pub fn right(&self) -> Emu {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> Emu {
        self.top + self.height
    }

    /// Whether the rectangle lies entirely within a canvas of the given
    /// extent. Zero-area rectangles on the boundary count as inside.
    pub fn fits_within(&self, canvas_width: Emu, canvas_height: Emu) -> bool {
        self.left >= 0
            && self.top >= 0
            && self.width >= 0
            && self.height >= 0
            && self.right() <= canvas_width
            && self.bottom() <= canvas_height
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[left={} top={} width={} height={}]",
            self.left, self.top, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_inches() {
        let rect = Rect::from_inches(0.5, 7.1, 12.333, 0.02);
        assert_eq!(rect.left, 457_200);
        assert_eq!(rect.top, 6_492_240);
    }

    #[test]
    fn test_fits_within() {
        let canvas = (inches_to_emu(13.333), inches_to_emu(7.5));
        assert!(Rect::from_inches(0.0, 0.0, 13.333, 1.2).fits_within(canvas.0, canvas.1));
        assert!(Rect::from_inches(12.0, 7.0, 1.2, 0.4).fits_within(canvas.0, canvas.1));
        assert!(!Rect::from_inches(12.0, 7.2, 1.2, 0.4).fits_within(canvas.0, canvas.1));
        assert!(!Rect::new(-1, 0, 100, 100).fits_within(canvas.0, canvas.1));
    }
}
