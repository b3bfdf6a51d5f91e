//! Linear value interpolation over an integer range.
//!
//! Used by the triangle rasterizer to compute the x coordinate of each edge
//! for every scanline between two vertices.

/// Values of the line through `(l0, d0)` and `(l1, d1)` at every integer
/// `l` in `l0..=l1`.
///
/// The value starts at `d0` and advances by the slope `(d1 - d0) / (l1 - l0)`
/// per step, truncated toward zero at each step. When `l0 == l1` the slope is
/// undefined and the result is the single value `[d0]`. When `l1 < l0` the
/// range is empty.
///
/// Each step is evaluated as an exact integer quotient rather than by
/// accumulating a floating-point slope, so the last value is always `d1`.
/// The quotient is taken in `i128`, which holds `d0 * n + (d1 - d0) * i`
/// for any `i32` inputs.
pub fn interpolate(l0: i32, d0: i32, l1: i32, d1: i32) -> Vec<i32> {
    if l0 == l1 {
        return vec![d0];
    }
    if l1 < l0 {
        return Vec::new();
    }

    let n = i128::from(l1) - i128::from(l0);
    let base = i128::from(d0) * n;
    let delta = i128::from(d1) - i128::from(d0);

    (0..=n).map(|i| ((base + delta * i) / n) as i32).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_range() {
        assert_eq!(interpolate(5, 42, 5, 7), vec![42]);
    }

    #[test]
    fn test_extreme_values() {
        assert_eq!(interpolate(0, i32::MIN, 2, i32::MAX), vec![i32::MIN, 0, i32::MAX]);
        assert_eq!(interpolate(0, i32::MAX, 1, i32::MIN), vec![i32::MAX, i32::MIN]);
        assert_eq!(
            interpolate(i32::MAX - 1, i32::MIN, i32::MAX, i32::MIN),
            vec![i32::MIN, i32::MIN]
        );
        assert!(interpolate(i32::MAX, 0, i32::MIN, 0).is_empty());
    }

    #[test]
    fn test_constant() {
        assert_eq!(interpolate(0, 3, 4, 3), vec![3, 3, 3, 3, 3]);
    }

    #[test]
    fn test_rising() {
        assert_eq!(interpolate(0, 0, 4, 2), vec![0, 0, 1, 1, 2]);
        assert_eq!(interpolate(10, 0, 12, 10), vec![0, 5, 10]);
    }

    #[test]
    fn test_falling_truncates_toward_zero() {
        // 4, 3.5, 3, 2.5, 2
        assert_eq!(interpolate(0, 4, 4, 2), vec![4, 3, 3, 2, 2]);
    }

    #[test]
    fn test_length_and_endpoints() {
        let v = interpolate(-3, 100, 17, 900);
        assert_eq!(v.len(), 21);
        assert_eq!(v[0], 100);
        assert_eq!(*v.last().unwrap(), 900);
    }

    #[test]
    fn test_endpoint_exact() {
        // A float slope of 0.6 accumulated five times falls just short of 7.
        assert_eq!(interpolate(1, 4, 6, 7), vec![4, 4, 5, 5, 6, 7]);
        assert_eq!(interpolate(1, 4, 6, 1), vec![4, 3, 2, 2, 1, 1]);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        assert!(interpolate(5, 0, 2, 9).is_empty());
    }
}
