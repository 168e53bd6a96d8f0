use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ahash::RandomState;

/// Cache key for loaded fonts.
///
/// Two keys are equal only when path, size, and style all match, so the
/// same file loaded at another size or style gets its own entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontKey {
    path: PathBuf,
    size: u32,
    style: Option<String>,
}

impl FontKey {
    pub fn new(path: &Path, size: u32, style: Option<&str>) -> Self {
        Self {
            path: path.to_path_buf(),
            size,
            style: style.map(str::to_owned),
        }
    }
}

/// Loaded-font cache keyed by (path, size, style).
///
/// Entries are inserted lazily and never evicted; handles stay alive for
/// the lifetime of the owning registry. The font type is generic so the
/// registry can be driven by any rasterization engine.
pub struct FontCache<F> {
    entries: HashMap<FontKey, Arc<F>, RandomState>,
}

impl<F> FontCache<F> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::default(),
        }
    }

    /// Returns a shared handle for the key, if one was loaded before.
    pub fn get(&self, key: &FontKey) -> Option<Arc<F>> {
        self.entries.get(key).cloned()
    }

    pub fn insert(&mut self, key: FontKey, font: Arc<F>) {
        self.entries.insert(key, font);
    }

    pub fn contains(&self, key: &FontKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<F> Default for FontCache<F> {
    fn default() -> Self {
        Self::new()
    }
}
