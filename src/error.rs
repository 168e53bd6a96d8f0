use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// The requested font file does not exist. Checked eagerly, before the
    /// rasterization engine is invoked.
    #[error("cannot find font file `{}`", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read font file `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file exists but the rasterization engine rejected its contents.
    #[error("invalid font data in `{}`", .path.display())]
    InvalidFont {
        path: PathBuf,
        #[source]
        source: ab_glyph::InvalidFont,
    },
}
