//! Directory scanning and filename heuristics for the font catalog.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Filename fragments that mark a non-regular weight or style variant.
const EXCLUDED_VARIANTS: [&str; 5] = ["bold", "italic", "oblique", "narrow", "black"];

/// Returns true when a file name denotes a bold/italic/oblique/narrow/black
/// variant.
///
/// This is a naming heuristic: it keeps the catalog down to regular-weight
/// faces without parsing any font tables. A font whose family name happens
/// to contain one of the fragments (e.g. "Blackadder") is excluded too.
pub fn is_excluded_variant(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    EXCLUDED_VARIANTS.iter().any(|variant| lower.contains(variant))
}

/// Lists regular-style `.ttf` files under `dir`, sorted by lowercased file
/// name with the `.ttf` suffix stripped.
///
/// `recursive` walks the whole tree; otherwise only direct entries are
/// listed. Returned paths are always full paths and keep their original
/// spelling. The listing is recomputed on every call, so the catalog
/// reflects whatever is on disk right now.
pub fn list_ttf_paths(dir: &Path, recursive: bool) -> Vec<PathBuf> {
    let mut paths = if recursive {
        walk_entries(dir)
    } else {
        flat_entries(dir)
    };

    paths.retain(|path| {
        has_ttf_extension(path)
            && path
                .file_name()
                .map(|name| !is_excluded_variant(&name.to_string_lossy()))
                .unwrap_or(false)
    });
    paths.sort_by_cached_key(|path| sort_key(path));
    paths
}

/// Derives the catalog name for a font path: last path segment with a
/// trailing `.ttf` stripped, lowercased.
pub fn font_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stripped = name.strip_suffix(".ttf").unwrap_or(&name);
    stripped.to_lowercase()
}

/// Deduplicated, ascending catalog names for the given paths.
pub fn list_names(paths: &[PathBuf]) -> Vec<String> {
    let names: BTreeSet<String> = paths.iter().map(|path| font_name(path)).collect();
    names.into_iter().collect()
}

/// First path whose lowercased form contains `name`, case-insensitively.
pub fn find_path<'a>(paths: &'a [PathBuf], name: &str) -> Option<&'a PathBuf> {
    let needle = name.to_lowercase();
    paths
        .iter()
        .find(|path| path.to_string_lossy().to_lowercase().contains(&needle))
}

fn has_ttf_extension(path: &Path) -> bool {
    // Exact, case-sensitive match: `.TTF` files are not listed.
    path.extension().map(|ext| ext == "ttf").unwrap_or(false)
}

fn sort_key(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    name.strip_suffix(".ttf").map(str::to_owned).unwrap_or(name)
}

fn walk_entries(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::debug!("skipping unreadable entry under {}: {}", dir.display(), err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect()
}

fn flat_entries(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::debug!("cannot list font directory {}: {}", dir.display(), err);
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(err) => {
                log::debug!("skipping unreadable entry under {}: {}", dir.display(), err);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn fixture_dir(files: &[&str]) -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        for file in files {
            File::create(tmp.path().join(file)).unwrap();
        }
        tmp
    }

    fn file_names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_excluded_variant_fragments() {
        assert!(is_excluded_variant("Arial Bold.ttf"));
        assert!(is_excluded_variant("DejaVuSans-Oblique.ttf"));
        assert!(is_excluded_variant("ARIAL ITALIC.TTF"));
        assert!(is_excluded_variant("LiberationSansNarrow.ttf"));
        assert!(is_excluded_variant("Roboto-Black.ttf"));
        assert!(!is_excluded_variant("Arial.ttf"));
        assert!(!is_excluded_variant("Courier New.ttf"));
    }

    #[test]
    fn test_list_drops_variants_and_foreign_extensions() {
        let tmp = fixture_dir(&[
            "Arial.ttf",
            "Arial Bold.ttf",
            "Arial Italic.ttf",
            "Courier.ttf",
            "README.txt",
            "Vera.otf",
        ]);

        let paths = list_ttf_paths(tmp.path(), false);
        assert_eq!(file_names(&paths), vec!["Arial.ttf", "Courier.ttf"]);
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        let tmp = fixture_dir(&["Upper.TTF", "lower.ttf"]);

        let paths = list_ttf_paths(tmp.path(), false);
        assert_eq!(file_names(&paths), vec!["lower.ttf"]);
    }

    #[test]
    fn test_sort_ignores_case_and_ttf_suffix() {
        let tmp = fixture_dir(&["zilla.ttf", "Andale Mono.ttf", "courier.ttf"]);

        let paths = list_ttf_paths(tmp.path(), false);
        assert_eq!(
            file_names(&paths),
            vec!["Andale Mono.ttf", "courier.ttf", "zilla.ttf"]
        );
    }

    #[test]
    fn test_recursive_walk_finds_nested_fonts() {
        let tmp = fixture_dir(&["Top.ttf"]);
        let nested = tmp.path().join("truetype");
        fs::create_dir(&nested).unwrap();
        File::create(nested.join("Nested.ttf")).unwrap();

        let flat = list_ttf_paths(tmp.path(), false);
        assert_eq!(file_names(&flat), vec!["Top.ttf"]);

        let recursive = list_ttf_paths(tmp.path(), true);
        assert_eq!(file_names(&recursive), vec!["Nested.ttf", "Top.ttf"]);
    }

    #[test]
    fn test_missing_directory_is_empty_not_error() {
        let tmp = tempfile::tempdir().unwrap();
        let gone = tmp.path().join("no-such-dir");
        assert!(list_ttf_paths(&gone, false).is_empty());
    }

    #[test]
    fn test_font_name_strips_suffix_and_lowercases() {
        assert_eq!(font_name(Path::new("/fonts/Arial.ttf")), "arial");
        assert_eq!(font_name(Path::new("/fonts/Courier New.ttf")), "courier new");
        // Only an exact `.ttf` suffix is stripped.
        assert_eq!(font_name(Path::new("/fonts/Weird.TTF")), "weird.ttf");
    }

    #[test]
    fn test_list_names_dedupes_and_sorts() {
        let paths = vec![
            PathBuf::from("/fonts/b/Zed.ttf"),
            PathBuf::from("/fonts/a/zed.ttf"),
            PathBuf::from("/fonts/Arial.ttf"),
        ];
        assert_eq!(list_names(&paths), vec!["arial", "zed"]);
    }

    #[test]
    fn test_find_path_case_insensitive_substring() {
        let paths = vec![
            PathBuf::from("/fonts/Arial.ttf"),
            PathBuf::from("/fonts/Courier New.ttf"),
        ];
        assert_eq!(
            find_path(&paths, "courier"),
            Some(&PathBuf::from("/fonts/Courier New.ttf"))
        );
        assert_eq!(
            find_path(&paths, "COURIER"),
            Some(&PathBuf::from("/fonts/Courier New.ttf"))
        );
        assert_eq!(find_path(&paths, "comic"), None);
    }
}
