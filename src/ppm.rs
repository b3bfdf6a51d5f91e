//! Plain-text PPM (`P3`) export.
//!
//! Layout:
//!
//! ```text
//! P3
//! <width> <height>
//! <max channel value>
//! r g b r g b ...        <- row y = 0, one triple per column, trailing space
//! ...
//! ```
//!
//! The max channel value is the largest channel found anywhere in the
//! canvas, not a fixed 255, so the whole buffer is scanned before the
//! header is written.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::canvas::Canvas;

/// Extension appended to the stem given to [`save_ppm`].
pub const PPM_EXTENSION: &str = "ppm";

/// Write `canvas` in the text image format to `w`.
pub fn write_ppm<W: Write>(canvas: &Canvas, w: &mut W) -> io::Result<()> {
    let (width, height) = canvas.extent();
    let depth = canvas.max_channel_value();

    writeln!(w, "P3")?;
    writeln!(w, "{} {}", width, height)?;
    writeln!(w, "{}", depth)?;

    for row in canvas.rows() {
        for c in row {
            write!(w, "{} {} {} ", c.r, c.g, c.b)?;
        }
        writeln!(w)?;
    }
    w.flush()
}

/// Render `canvas` to an in-memory string.
pub fn to_ppm_string(canvas: &Canvas) -> io::Result<String> {
    let mut out = Vec::new();
    write_ppm(canvas, &mut out)?;
    String::from_utf8(out).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Create `<stem>.ppm` and write `canvas` into it.
///
/// Fails only if the file cannot be created or written.
pub fn save_ppm<P: AsRef<Path>>(canvas: &Canvas, stem: P) -> io::Result<PathBuf> {
    let mut path = stem.as_ref().as_os_str().to_owned();
    path.push(".");
    path.push(PPM_EXTENSION);
    let path = PathBuf::from(path);

    let mut f = BufWriter::new(File::create(&path)?);
    write_ppm(canvas, &mut f)?;
    log::debug!(
        "exported {}x{} canvas to {}",
        canvas.width(),
        canvas.height(),
        path.display()
    );
    Ok(path)
}

// ============================================================================
// Tests
// ============================================================================
