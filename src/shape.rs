//! The capability shared by every drawable shape.

use crate::canvas::Canvas;
use crate::color::{palette_color, Color};
use crate::error::RasterError;

/// A shape that can rasterize itself onto a [`Canvas`].
///
/// Implementors validate their inputs before touching the canvas and fail
/// fast on the first violated precondition.
pub trait Shape {
    /// Fill the shape onto `canvas`.
    fn draw(&self, canvas: &mut Canvas) -> Result<(), RasterError>;

    /// Fixed name of the shape kind, e.g. `"Rectangle"`.
    fn kind(&self) -> &'static str;
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn draw(&self, canvas: &mut Canvas) -> Result<(), RasterError> {
        (**self).draw(canvas)
    }

    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}

/// Resolve a shape's palette index, failing with `ColorUnknown`.
pub(crate) fn resolve_color(index: i32) -> Result<Color, RasterError> {
    palette_color(index).ok_or(RasterError::ColorUnknown)
}

/// Log a rejected draw and pass the error through.
pub(crate) fn rejected(kind: &str, err: RasterError) -> RasterError {
    log::debug!("{} rejected: {}", kind, err);
    err
}
