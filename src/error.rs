//! Errors returned by canvas access and shape rasterization.

use thiserror::Error;

/// The two recoverable failure kinds of the rasterizer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterError {
    /// A coordinate lies outside `[0, width) x [0, height)`.
    #[error("geometry out of bounds at ({x}, {y})")]
    OutOfBounds { x: i32, y: i32 },
    /// A palette index outside `[0, 9)`, or a color value not in the palette.
    #[error("color unknown")]
    ColorUnknown,
}

impl RasterError {
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    pub fn is_color_unknown(&self) -> bool {
        matches!(self, Self::ColorUnknown)
    }
}
