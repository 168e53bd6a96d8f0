//! Platform detection and font directory resolution.

use std::path::{Path, PathBuf};

const MACOS_FONT_PATH: &str = "/Library/Fonts";
const LINUX_FONT_PATH: &str = "/usr/share/fonts";
const WINDOWS_FONT_PATH: &str = "C:/Windows/Fonts";
const OPENBSD_FONT_PATH: &str = "/usr/X11R6/lib/X11/fonts";

/// Probe order when the platform cannot be identified.
const CANDIDATE_DIRECTORIES: [&str; 4] = [
    MACOS_FONT_PATH,
    LINUX_FONT_PATH,
    WINDOWS_FONT_PATH,
    OPENBSD_FONT_PATH,
];

/// Host platform, resolved once at registry construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKind {
    MacOs,
    Linux,
    Windows,
    OpenBsd,
    /// Unidentified host. Font directory resolution falls back to probing
    /// the known candidates, and directory scans stay non-recursive.
    Unknown,
}

impl PlatformKind {
    /// Detects the platform from the compile-time OS identifier.
    pub fn detect() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Maps a platform identifier string to a kind by substring match.
    pub fn from_identifier(identifier: &str) -> Self {
        let id = identifier.to_lowercase();
        if id.contains("darwin") || id.contains("macos") {
            Self::MacOs
        } else if id.contains("linux") {
            Self::Linux
        } else if id.contains("mingw") || id.contains("windows") {
            Self::Windows
        } else if id.contains("openbsd") {
            Self::OpenBsd
        } else {
            Self::Unknown
        }
    }

    /// The system font directory for this platform.
    ///
    /// An unknown platform probes the candidate directories in a fixed
    /// order and takes the first that exists. `None` means no system fonts
    /// are available; callers degrade to an empty catalog rather than
    /// erroring.
    pub fn font_directory(self) -> Option<PathBuf> {
        match self {
            Self::MacOs => Some(PathBuf::from(MACOS_FONT_PATH)),
            Self::Linux => Some(PathBuf::from(LINUX_FONT_PATH)),
            Self::Windows => Some(PathBuf::from(WINDOWS_FONT_PATH)),
            Self::OpenBsd => Some(PathBuf::from(OPENBSD_FONT_PATH)),
            Self::Unknown => {
                let candidates: Vec<&Path> =
                    CANDIDATE_DIRECTORIES.iter().map(Path::new).collect();
                first_existing(&candidates)
            }
        }
    }

    /// Known platforms enumerate `*.ttf` files recursively; an unidentified
    /// host lists direct directory entries only.
    pub fn scans_recursively(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

fn first_existing(candidates: &[&Path]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|dir| dir.exists())
        .map(|dir| dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_identifier_known_platforms() {
        assert_eq!(PlatformKind::from_identifier("darwin"), PlatformKind::MacOs);
        assert_eq!(PlatformKind::from_identifier("macos"), PlatformKind::MacOs);
        assert_eq!(PlatformKind::from_identifier("linux"), PlatformKind::Linux);
        assert_eq!(
            PlatformKind::from_identifier("x86_64-pc-linux-gnu"),
            PlatformKind::Linux
        );
        assert_eq!(PlatformKind::from_identifier("mingw32"), PlatformKind::Windows);
        assert_eq!(PlatformKind::from_identifier("windows"), PlatformKind::Windows);
        assert_eq!(
            PlatformKind::from_identifier("openbsd"),
            PlatformKind::OpenBsd
        );
    }

    #[test]
    fn test_from_identifier_unknown() {
        assert_eq!(PlatformKind::from_identifier(""), PlatformKind::Unknown);
        assert_eq!(
            PlatformKind::from_identifier("dragonfly"),
            PlatformKind::Unknown
        );
    }

    #[test]
    fn test_font_directory_linux() {
        assert_eq!(
            PlatformKind::Linux.font_directory(),
            Some(PathBuf::from("/usr/share/fonts"))
        );
    }

    #[test]
    fn test_first_existing_respects_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let missing = first.path().join("does-not-exist");

        let candidates = [missing.as_path(), first.path(), second.path()];
        assert_eq!(
            first_existing(&candidates),
            Some(first.path().to_path_buf())
        );
    }

    #[test]
    fn test_first_existing_none() {
        let tmp = tempfile::tempdir().unwrap();
        let a = tmp.path().join("a");
        let b = tmp.path().join("b");
        let candidates = [a.as_path(), b.as_path()];
        assert_eq!(first_existing(&candidates), None);
    }

    #[test]
    fn test_unknown_platform_scans_flat() {
        assert!(PlatformKind::Linux.scans_recursively());
        assert!(PlatformKind::Windows.scans_recursively());
        assert!(!PlatformKind::Unknown.scans_recursively());
    }
}
