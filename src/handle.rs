use std::fmt;
use std::path::{Path, PathBuf};

use ab_glyph::{Font as _, FontArc, PxScale, ScaleFont as _};

/// A loaded, rasterization-ready font at a specific pixel size and style.
///
/// Handles are created by a rasterizer and shared out of the registry cache
/// behind an `Arc`. They hold the engine's parsed font for as long as the
/// registry lives.
pub struct FontHandle {
    font: FontArc,
    path: PathBuf,
    size: u32,
    style: Option<String>,
}

impl FontHandle {
    pub(crate) fn new(font: FontArc, path: &Path, size: u32, style: Option<&str>) -> Self {
        Self {
            font,
            path: path.to_path_buf(),
            size,
            style: style.map(str::to_owned),
        }
    }

    /// The underlying engine font, ready for glyph outlines and metrics.
    pub fn font(&self) -> &FontArc {
        &self.font
    }

    /// Pixel scale matching the size this handle was loaded at.
    pub fn scale(&self) -> PxScale {
        PxScale::from(self.size as f32)
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Style modifier the handle was requested with, if any. Passed through
    /// from the caller; the engine treats it as opaque.
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Vertical distance between consecutive baselines at this size.
    pub fn line_height(&self) -> f32 {
        let scaled = self.font.as_scaled(self.scale());
        scaled.ascent() - scaled.descent() + scaled.line_gap()
    }
}

impl fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontHandle")
            .field("path", &self.path)
            .field("size", &self.size)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
