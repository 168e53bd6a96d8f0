pub mod cache;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod handle;
pub mod platform;
pub mod rasterizer;
pub mod registry;

pub use cache::{FontCache, FontKey};
pub use error::FontError;
pub use handle::FontHandle;
pub use platform::PlatformKind;
pub use rasterizer::{AbGlyphRasterizer, FontRasterizer};
pub use registry::FontRegistry;
