//! ASCII and PNG renderers. Both only read the [`Canvas`].

use crate::canvas::Canvas;
use crate::error::PlantError;
use image::{ImageFormat, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Foreground/background colors for raster output, as RGBA.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Color of drawn cells.
    pub foreground: [u8; 4],
    /// Color of everything else.
    pub background: [u8; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foreground: [255, 170, 0, 255], // Amber
            background: [16, 16, 16, 255],
        }
    }
}

/// Renders the canvas as text: one line per row, `glyph` for marked cells and a
/// space for the rest. Every row, including the last, ends with `\n`.
pub fn to_ascii(canvas: &Canvas, glyph: char) -> String {
    let mut out = String::with_capacity(canvas.height() * (canvas.width() + 1));
    for row in canvas.rows() {
        out.extend(row.iter().map(|&cell| if cell { glyph } else { ' ' }));
        out.push('\n');
    }
    out
}

/// Writes [`to_ascii`] output to `writer`.
pub fn write_ascii<W: Write>(canvas: &Canvas, glyph: char, mut writer: W) -> io::Result<()> {
    writer.write_all(to_ascii(canvas, glyph).as_bytes())?;
    writer.flush()
}

/// Converts the canvas to an image with one pixel per cell.
pub fn to_image(canvas: &Canvas, palette: &Palette) -> RgbaImage {
    let fg = Rgba(palette.foreground);
    let bg = Rgba(palette.background);
    RgbaImage::from_fn(canvas.width() as u32, canvas.height() as u32, |x, y| {
        if canvas.is_marked(x as i64, y as i64) { fg } else { bg }
    })
}

/// Encodes the canvas as PNG and writes it to `path`.
pub fn save_png(
    canvas: &Canvas,
    palette: &Palette,
    path: impl AsRef<Path>,
) -> Result<(), PlantError> {
    let path = path.as_ref();
    to_image(canvas, palette).save_with_format(path, ImageFormat::Png)?;
    info!(path = %path.display(), "image saved");
    Ok(())
}
