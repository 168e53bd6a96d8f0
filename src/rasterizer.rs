//! Boundary to the external rasterization engine.

use std::fs;
use std::path::Path;

use ab_glyph::FontArc;

use crate::error::FontError;
use crate::handle::FontHandle;

/// Engine-side "open font" primitive.
///
/// The registry treats whatever sits behind this trait as a black box: it
/// hands over a path, pixel size, and optional style and gets back an owned
/// font or a failure. Opening is one-shot; a font that fails to open is not
/// retried.
pub trait FontRasterizer {
    /// The loaded-font resource produced by this engine.
    type Font;

    fn open(&self, path: &Path, size: u32, style: Option<&str>) -> Result<Self::Font, FontError>;
}

/// Production rasterizer backed by `ab_glyph`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AbGlyphRasterizer;

impl FontRasterizer for AbGlyphRasterizer {
    type Font = FontHandle;

    fn open(&self, path: &Path, size: u32, style: Option<&str>) -> Result<FontHandle, FontError> {
        let data = fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let font = FontArc::try_from_vec(data).map_err(|source| FontError::InvalidFont {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("opened font {} at {}px", path.display(), size);
        Ok(FontHandle::new(font, path, size, style))
    }
}
