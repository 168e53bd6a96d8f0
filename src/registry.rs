//! System font lookup and memoized loading.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::cache::{FontCache, FontKey};
use crate::catalog;
use crate::config::Config;
use crate::error::FontError;
use crate::platform::PlatformKind;
use crate::rasterizer::{AbGlyphRasterizer, FontRasterizer};

/// Resolves, enumerates, and loads system fonts.
///
/// A registry resolves the platform font directory once at construction and
/// owns the loaded-font cache. Construct one at startup and share it by
/// reference with every call site that needs fonts; the cache mutex keeps
/// the one-handle-per-key invariant under concurrent loads.
pub struct FontRegistry<R: FontRasterizer = AbGlyphRasterizer> {
    platform: PlatformKind,
    directory: Option<PathBuf>,
    default_family: Option<String>,
    cache: Mutex<FontCache<R::Font>>,
    rasterizer: R,
}

impl FontRegistry {
    /// Creates a registry for the detected platform with default settings.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates a registry honoring the `[font]` settings in `config`.
    pub fn with_config(config: &Config) -> Self {
        Self::with_rasterizer(config, AbGlyphRasterizer)
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: FontRasterizer> FontRegistry<R> {
    /// Creates a registry that loads fonts through a custom engine.
    pub fn with_rasterizer(config: &Config, rasterizer: R) -> Self {
        let platform = PlatformKind::detect();
        let directory = config
            .font
            .directory
            .clone()
            .or_else(|| platform.font_directory());
        match &directory {
            Some(dir) => log::debug!("font directory: {}", dir.display()),
            None => log::warn!("no system font directory found; the catalog will be empty"),
        }

        Self {
            platform,
            directory,
            default_family: config.font.family.clone(),
            cache: Mutex::new(FontCache::new()),
            rasterizer,
        }
    }

    /// The resolved system font directory, if any.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Full paths of regular-style `.ttf` fonts, in catalog order.
    ///
    /// Rescans the directory on every call.
    pub fn all_paths(&self) -> Vec<PathBuf> {
        match &self.directory {
            Some(dir) => catalog::list_ttf_paths(dir, self.platform.scans_recursively()),
            None => Vec::new(),
        }
    }

    /// Deduplicated, ascending catalog of font names.
    pub fn all_names(&self) -> Vec<String> {
        catalog::list_names(&self.all_paths())
    }

    /// Finds the first catalog path containing `name`, case-insensitively.
    pub fn resolve_path(&self, name: &str) -> Option<PathBuf> {
        catalog::find_path(&self.all_paths(), name).cloned()
    }

    /// Path of the font to use when the caller names none.
    ///
    /// Preference order: the configured family, then an "arial" match, then
    /// the first catalog entry. `None` when no fonts were found.
    pub fn default_font(&self) -> Option<PathBuf> {
        if let Some(family) = &self.default_family {
            if let Some(path) = self.resolve_path(family) {
                return Some(path);
            }
            log::warn!("configured font family `{family}` not found; falling back");
        }

        if self.all_names().iter().any(|name| name == "arial") {
            return self.resolve_path("arial");
        }
        self.all_paths().into_iter().next()
    }

    /// Loads the font at `path` at `size` pixels, memoized by
    /// (path, size, style).
    ///
    /// The first call for a key opens the font through the rasterization
    /// engine; every later call returns the same shared handle. Fails with
    /// [`FontError::NotFound`] before reaching the engine when the file
    /// does not exist.
    pub fn load(
        &self,
        path: impl AsRef<Path>,
        size: u32,
        style: Option<&str>,
    ) -> Result<Arc<R::Font>, FontError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FontError::NotFound(path.to_path_buf()));
        }

        let key = FontKey::new(path, size, style);
        // Lock spans check and insert: at most one engine open per key.
        let mut cache = self.cache();
        if let Some(handle) = cache.get(&key) {
            return Ok(handle);
        }

        let handle = Arc::new(self.rasterizer.open(path, size, style)?);
        cache.insert(key, handle.clone());
        Ok(handle)
    }

    /// Number of fonts currently held by the cache.
    pub fn loaded_count(&self) -> usize {
        self.cache().len()
    }

    fn cache(&self) -> MutexGuard<'_, FontCache<R::Font>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
