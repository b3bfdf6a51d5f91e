//! Foundation types shared by the canvas and every rasterizer.

// ============================================================================
// Point
// ============================================================================

/// An integer pixel coordinate.
///
/// A point carries no invariant of its own; whether it is usable is always
/// decided against a [`Canvas`](crate::canvas::Canvas) extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)`, or `None` if either coordinate overflows.
    #[inline]
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// Offset by `(dx, dy)`, clamping each coordinate to the `i32` range.
    #[inline]
    pub const fn saturating_offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Tests
// ============================================================================
