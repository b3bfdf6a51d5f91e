//! Axis-aligned filled rectangle.

use crate::basics::Point;
use crate::canvas::Canvas;
use crate::error::RasterError;
use crate::shape::{rejected, resolve_color, Shape};

/// Rectangle spanning `lower_left..=upper_right` on both axes.
///
/// Corners are not normalized: when `lower_left` exceeds `upper_right` on
/// either axis the fill range is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub lower_left: Point,
    pub upper_right: Point,
    pub color: i32,
}

impl Rectangle {
    pub fn new(lower_left: Point, upper_right: Point, color: i32) -> Self {
        Self {
            lower_left,
            upper_right,
            color,
        }
    }
}

impl Shape for Rectangle {
    /// Both corners and the color index are validated before any write.
    fn draw(&self, canvas: &mut Canvas) -> Result<(), RasterError> {
        canvas
            .check_points(&[self.lower_left, self.upper_right])
            .map_err(|e| rejected(self.kind(), e))?;
        let c = resolve_color(self.color).map_err(|e| rejected(self.kind(), e))?;

        log::trace!(
            "rectangle {:?}..{:?} color {}",
            self.lower_left,
            self.upper_right,
            self.color
        );
        for y in self.lower_left.y..=self.upper_right.y {
            canvas.draw_span(self.lower_left.x, self.upper_right.x, y, c)?;
        }
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "Rectangle"
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BACKGROUND, BLUE, PALETTE, RED};

    #[test]
    fn test_inclusive_fill() {
        let mut c = Canvas::new(20, 20);
        let r = Rectangle::new(Point::new(2, 3), Point::new(5, 4), BLUE);
        r.draw(&mut c).unwrap();
        assert_eq!(c.count_color(PALETTE[BLUE as usize]), 4 * 2);
        assert_eq!(c.pixel(2, 3).unwrap(), PALETTE[BLUE as usize]);
        assert_eq!(c.pixel(5, 4).unwrap(), PALETTE[BLUE as usize]);
        assert_eq!(c.pixel(6, 4).unwrap(), BACKGROUND);
        assert_eq!(c.pixel(5, 5).unwrap(), BACKGROUND);
    }

    #[test]
    fn test_single_pixel() {
        let mut c = Canvas::new(4, 4);
        Rectangle::new(Point::new(1, 1), Point::new(1, 1), RED)
            .draw(&mut c)
            .unwrap();
        assert_eq!(c.count_color(PALETTE[RED as usize]), 1);
    }

    #[test]
    fn test_inverted_is_empty() {
        let mut c = Canvas::new(10, 10);
        let r = Rectangle::new(Point::new(6, 2), Point::new(3, 8), RED);
        assert!(r.draw(&mut c).is_ok());
        assert_eq!(c.count_color(BACKGROUND), 100);
    }

    #[test]
    fn test_out_of_bounds_no_writes() {
        let mut c = Canvas::new(10, 10);
        let r = Rectangle::new(Point::new(0, 0), Point::new(4, 10), RED);
        assert_eq!(r.draw(&mut c), Err(RasterError::OutOfBounds { x: 4, y: 10 }));
        assert_eq!(c.count_color(BACKGROUND), 100);
    }

    #[test]
    fn test_bounds_checked_before_color() {
        let mut c = Canvas::new(10, 10);
        let r = Rectangle::new(Point::new(-1, 0), Point::new(4, 4), 99);
        assert!(r.draw(&mut c).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn test_extreme_corners_no_writes() {
        let mut c = Canvas::new(10, 10);
        let (min, max) = (Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX));
        for r in [
            Rectangle::new(min, max, RED),
            Rectangle::new(Point::new(0, 0), max, RED),
            Rectangle::new(min, Point::new(4, 4), i32::MAX),
            Rectangle::new(max, min, RED),
        ] {
            assert!(r.draw(&mut c).unwrap_err().is_out_of_bounds(), "{r:?}");
        }
        assert_eq!(c.count_color(BACKGROUND), 100);
    }

    #[test]
    fn test_unknown_color_no_writes() {
        let mut c = Canvas::new(10, 10);
        let r = Rectangle::new(Point::new(0, 0), Point::new(4, 4), 9);
        assert_eq!(r.draw(&mut c), Err(RasterError::ColorUnknown));
        assert_eq!(c.count_color(BACKGROUND), 100);
    }

    #[test]
    fn test_kind() {
        let r = Rectangle::new(Point::default(), Point::default(), RED);
        assert_eq!(r.kind(), "Rectangle");
    }
}
