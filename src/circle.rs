//! Filled circle via a concentric midpoint sweep.
//!
//! The disk is filled by drawing the outline of every radius from `r` down
//! to `0`. Concentric midpoint outlines alone leave isolated holes where
//! neighbouring rings step two pixels apart, so each step also plots the
//! pixel one step inward along x. Inner pixels never extend past the
//! outermost ring.

use crate::basics::Point;
use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::RasterError;
use crate::midpoint_circle::{octant_points, MidpointCircleInterpolator};
use crate::shape::{rejected, resolve_color, Shape};

/// Circle of integer `radius` around `center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
    pub color: i32,
}

impl Circle {
    pub fn new(center: Point, radius: i32, color: i32) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    /// The four axis-aligned extreme points checked before drawing, or
    /// `None` when one of them has no `i32` coordinate.
    pub fn cardinal_points(&self) -> Option<[Point; 4]> {
        let (c, r) = (self.center, self.radius);
        let neg = r.checked_neg()?;
        Some([
            c.checked_offset(0, r)?,
            c.checked_offset(0, neg)?,
            c.checked_offset(r, 0)?,
            c.checked_offset(neg, 0)?,
        ])
    }

    /// Fail with `OutOfBounds` unless all cardinal points are on `canvas`.
    ///
    /// A point that overflows `i32` cannot be on any canvas. It is reported
    /// at the clamped coordinate `center + (0, radius)`.
    fn check_cardinals(&self, canvas: &Canvas) -> Result<(), RasterError> {
        match self.cardinal_points() {
            Some(points) => canvas.check_points(&points),
            None => {
                let p = self.center.saturating_offset(0, self.radius);
                Err(RasterError::OutOfBounds { x: p.x, y: p.y })
            }
        }
    }
}

impl Shape for Circle {
    /// Only the cardinal points are validated up front. Ring pixels that
    /// still fall outside the canvas are skipped and do not fail the draw.
    fn draw(&self, canvas: &mut Canvas) -> Result<(), RasterError> {
        self.check_cardinals(canvas).map_err(|e| rejected(self.kind(), e))?;
        let c = resolve_color(self.color).map_err(|e| rejected(self.kind(), e))?;

        log::trace!(
            "circle {:?} r={} color {}",
            self.center,
            self.radius,
            self.color
        );
        let mut skipped = 0usize;
        for r in (0..=self.radius).rev() {
            for (x, y) in MidpointCircleInterpolator::new(r) {
                skipped += plot_octants(canvas, self.center, x, y, c)?;
                if x - 1 >= y {
                    skipped += plot_octants(canvas, self.center, x - 1, y, c)?;
                }
            }
        }

        if skipped > 0 {
            log::debug!(
                "circle at {:?}: skipped {} off-canvas pixels",
                self.center,
                skipped
            );
        }
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "Circle"
    }
}

/// Plot the eight reflections of `(x, y)` around `center`, returning how
/// many fell off the canvas.
///
/// `draw` only sweeps circles whose cardinal points are on the canvas, and
/// the sweep stays inside that bounding square, so from `draw` the count is
/// currently always zero. Off-canvas pixels are still skipped rather than
/// failing the draw.
fn plot_octants(
    canvas: &mut Canvas,
    center: Point,
    x: i32,
    y: i32,
    c: Color,
) -> Result<usize, RasterError> {
    let mut skipped = 0;
    for (dx, dy) in octant_points(x, y) {
        match canvas.draw_pixel(center.x + dx, center.y + dy, c) {
            Err(RasterError::OutOfBounds { .. }) => skipped += 1,
            other => other?,
        }
    }
    Ok(skipped)
}

// ============================================================================
// Tests
// ============================================================================
