//! Fixed-extent grid of palette colors.
//!
//! Every mutation goes through [`Canvas::draw_pixel`], which only accepts
//! exact palette colors, so each cell always holds one of the nine palette
//! entries. Storage is row-major (`y * width + x`).

use std::io;
use std::path::{Path, PathBuf};

use crate::basics::Point;
use crate::color::{color_value_valid, Color, BACKGROUND};
use crate::error::RasterError;
use crate::ppm;

// ============================================================================
// Canvas
// ============================================================================

/// In-memory pixel canvas.
///
/// The extent is fixed between calls to [`initialize`](Canvas::initialize).
/// The canvas is an owned value: rasterizers borrow it mutably for the
/// duration of a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Create a `width x height` canvas filled with white.
    pub fn new(width: i32, height: i32) -> Self {
        let mut canvas = Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        };
        canvas.initialize(width, height);
        canvas
    }

    /// (Re)allocate the grid and fill it with white, discarding any prior
    /// content. Negative extents are clamped to zero.
    pub fn initialize(&mut self, width: i32, height: i32) {
        self.width = width.max(0);
        self.height = height.max(0);
        self.pixels = vec![BACKGROUND; self.width as usize * self.height as usize];
        log::trace!("canvas initialized to {}x{}", self.width, self.height);
    }

    /// `(width, height)`.
    pub fn extent(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.in_bounds(p.x, p.y)
    }

    /// Fail with `OutOfBounds` unless every point lies on the canvas.
    pub fn check_points(&self, points: &[Point]) -> Result<(), RasterError> {
        match points.iter().find(|p| !self.contains(**p)) {
            Some(p) => Err(RasterError::OutOfBounds { x: p.x, y: p.y }),
            None => Ok(()),
        }
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Write one pixel.
    ///
    /// The color is checked before the coordinate, so an unknown color is
    /// reported as `ColorUnknown` even when the position is also invalid.
    pub fn draw_pixel(&mut self, x: i32, y: i32, c: Color) -> Result<(), RasterError> {
        if !color_value_valid(&c) {
            return Err(RasterError::ColorUnknown);
        }
        if !self.in_bounds(x, y) {
            return Err(RasterError::OutOfBounds { x, y });
        }
        let i = self.offset(x, y);
        self.pixels[i] = c;
        Ok(())
    }

    /// Write the inclusive horizontal run `x1..=x2` on row `y`.
    ///
    /// An inverted run (`x1 > x2`) writes nothing. Stops at the first pixel
    /// that fails.
    pub fn draw_span(&mut self, x1: i32, x2: i32, y: i32, c: Color) -> Result<(), RasterError> {
        for x in x1..=x2 {
            self.draw_pixel(x, y, c)?;
        }
        Ok(())
    }

    /// Read one pixel.
    pub fn pixel(&self, x: i32, y: i32) -> Result<Color, RasterError> {
        if !self.in_bounds(x, y) {
            return Err(RasterError::OutOfBounds { x, y });
        }
        Ok(self.pixels[self.offset(x, y)])
    }

    /// Reset every cell to white.
    pub fn clear(&mut self) {
        self.pixels.fill(BACKGROUND);
    }

    /// Row `y` as a slice of `width` colors, left to right.
    pub fn row(&self, y: i32) -> Option<&[Color]> {
        if y < 0 || y >= self.height {
            return None;
        }
        let start = self.offset(0, y);
        Some(&self.pixels[start..start + self.width as usize])
    }

    /// Iterate over all `height` rows, top (`y = 0`) first. On a zero-width
    /// canvas every row is empty.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        (0..self.height).filter_map(move |y| self.row(y))
    }

    /// Number of cells equal to `c`.
    pub fn count_color(&self, c: Color) -> usize {
        self.pixels.iter().filter(|p| **p == c).count()
    }

    /// Largest single channel value anywhere on the canvas, `0` when empty.
    pub fn max_channel_value(&self) -> i32 {
        self.pixels
            .iter()
            .map(Color::max_channel)
            .max()
            .unwrap_or(0)
    }

    /// Write the canvas as a plain PPM file at `<stem>.ppm` and return the
    /// path written.
    pub fn export_image<P: AsRef<Path>>(&self, stem: P) -> io::Result<PathBuf> {
        ppm::save_ppm(self, stem)
    }
}

// ============================================================================
// Tests
// ============================================================================
