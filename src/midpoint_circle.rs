//! Midpoint circle stepper.
//!
//! Integer-only walk over one octant of a circle outline using the
//! midpoint decision variable. The caller mirrors each step into the other
//! seven octants.

// ============================================================================
// MidpointCircleInterpolator
// ============================================================================

/// Steps through the pixel offsets of the octant `x >= y >= 0` of a circle
/// of radius `r`, starting at `(r, 0)` and ending on the diagonal.
///
/// Yields `(x, y)` offsets from the center. Radius `0` yields the single
/// offset `(0, 0)`; a negative radius yields nothing.
#[derive(Debug, Clone)]
pub struct MidpointCircleInterpolator {
    x: i32,
    y: i32,
    d: i32,
}

impl MidpointCircleInterpolator {
    pub fn new(r: i32) -> Self {
        Self {
            x: r,
            y: 0,
            d: 1i32.saturating_sub(r),
        }
    }
}

impl Iterator for MidpointCircleInterpolator {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.x < self.y {
            return None;
        }
        let step = (self.x, self.y);

        self.y += 1;
        if self.d < 0 {
            self.d += 2 * self.y + 1;
        } else {
            self.x -= 1;
            self.d += 2 * (self.y - self.x) + 1;
        }
        Some(step)
    }
}

/// The eight octant reflections of offset `(x, y)`.
#[inline]
pub fn octant_points(x: i32, y: i32) -> [(i32, i32); 8] {
    [
        (x, y),
        (y, x),
        (-y, x),
        (-x, y),
        (-x, -y),
        (-y, -x),
        (y, -x),
        (x, -y),
    ]
}

// ============================================================================
// Tests
// ============================================================================
