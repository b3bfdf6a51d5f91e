//! Filled triangle via scanline interpolation.
//!
//! Vertices are sorted by y, the x coordinate of each edge is interpolated
//! per row, and the long edge (`p0 -> p2`) is paired against the two short
//! edges (`p0 -> p1 -> p2`). A single comparison at the middle row decides
//! which side is left for the whole triangle.

use crate::basics::Point;
use crate::canvas::Canvas;
use crate::error::RasterError;
use crate::shape::{rejected, resolve_color, Shape};
use crate::span_interpolator::interpolate;

/// Triangle with arbitrary vertex order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub color: i32,
}

impl Triangle {
    pub fn new(p0: Point, p1: Point, p2: Point, color: i32) -> Self {
        Self { p0, p1, p2, color }
    }

    /// Vertices ordered so that `y0 <= y1 <= y2`.
    fn sorted_by_y(&self) -> (Point, Point, Point) {
        let (mut p0, mut p1, mut p2) = (self.p0, self.p1, self.p2);
        if p1.y < p0.y {
            std::mem::swap(&mut p0, &mut p1);
        }
        if p2.y < p0.y {
            std::mem::swap(&mut p0, &mut p2);
        }
        if p2.y < p1.y {
            std::mem::swap(&mut p1, &mut p2);
        }
        (p0, p1, p2)
    }

    /// Left and right x boundaries for every row from the lowest to the
    /// highest vertex, indexed by `y - y0`.
    pub fn spans(&self) -> (Vec<i32>, Vec<i32>) {
        let (p0, p1, p2) = self.sorted_by_y();

        let mut x012 = interpolate(p0.y, p0.x, p1.y, p1.x);
        let x12 = interpolate(p1.y, p1.x, p2.y, p2.x);
        let x02 = interpolate(p0.y, p0.x, p2.y, p2.x);

        // The short edges share the middle vertex's row.
        x012.pop();
        x012.extend_from_slice(&x12);

        let m = x012.len() / 2;
        if x02[m] < x012[m] {
            (x02, x012)
        } else {
            (x012, x02)
        }
    }
}

impl Shape for Triangle {
    /// All three vertices and the color index are validated before any
    /// write.
    fn draw(&self, canvas: &mut Canvas) -> Result<(), RasterError> {
        canvas
            .check_points(&[self.p0, self.p1, self.p2])
            .map_err(|e| rejected(self.kind(), e))?;
        let c = resolve_color(self.color).map_err(|e| rejected(self.kind(), e))?;

        log::trace!(
            "triangle {:?} {:?} {:?} color {}",
            self.p0,
            self.p1,
            self.p2,
            self.color
        );
        let y0 = self.p0.y.min(self.p1.y).min(self.p2.y);
        let (left, right) = self.spans();
        for (row, (xl, xr)) in left.iter().zip(right.iter()).enumerate() {
            canvas.draw_span(*xl, *xr, y0 + row as i32, c)?;
        }
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "Triangle"
    }
}

// ============================================================================
// Tests
// ============================================================================
