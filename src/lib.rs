//! # raster-canvas
//!
//! A minimal 2D software rasterizer: an in-memory canvas of palette colors,
//! fill algorithms for three shape kinds, and export to plain PPM.
//!
//! - Axis-aligned rectangles (inclusive corners)
//! - Triangles, filled by scanline interpolation of their edges
//! - Circles, filled by a concentric midpoint sweep
//!
//! ## Pipeline
//!
//! 1. **Canvas**: created once with a fixed extent, filled with white
//! 2. **Shape**: a value implementing [`Shape`]; `draw` validates the shape
//!    against the canvas and its palette index, then writes pixels
//! 3. **Readback**: [`Canvas::pixel`]
//! 4. **Export**: [`Canvas::export_image`] writes `<stem>.ppm`
//!
//! ```no_run
//! use raster_canvas::{color, Canvas, Point, Rectangle, Shape};
//!
//! let mut canvas = Canvas::new(1024, 1024);
//! let rect = Rectangle::new(Point::new(100, 300), Point::new(600, 900), color::RED);
//! rect.draw(&mut canvas).unwrap();
//! canvas.export_image("output").unwrap();
//! ```

// Foundation
pub mod basics;
pub mod color;
pub mod error;

// Pixel storage and export
pub mod canvas;
pub mod ppm;

// Rasterization
pub mod circle;
pub mod midpoint_circle;
pub mod rectangle;
pub mod shape;
pub mod span_interpolator;
pub mod triangle;

pub use basics::Point;
pub use canvas::Canvas;
pub use circle::Circle;
pub use color::Color;
pub use error::RasterError;
pub use rectangle::Rectangle;
pub use shape::Shape;
pub use triangle::Triangle;
