use serde::Deserialize;
use std::path::PathBuf;

// =============================================================================
// Source file constants
// =============================================================================

/// First line holds the base version label (e.g. "0.9.0.")
pub const DEFAULT_VERSION_FILE: &str = "Version.txt";

/// First line holds the version-control keyword (e.g. "$Revision: 1648 $")
pub const DEFAULT_REVISION_FILE: &str = "Revision.txt";

/// Companion binaries whose file metadata encodes the build time
pub const DEFAULT_BUILD_CANDIDATES: &[&str] = &[
    "ORTS.Common.dll",
    "OpenRails.exe",
    "Menu.exe",
    "RunActivity.exe",
];

/// Locations of the files version information is read from
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct VersionSources {
    pub version_file: String,
    pub revision_file: String,
    /// Order only matters when two candidates encode the same build time
    pub build_candidates: Vec<String>,
}

impl Default for VersionSources {
    fn default() -> Self {
        Self {
            version_file: DEFAULT_VERSION_FILE.to_string(),
            revision_file: DEFAULT_REVISION_FILE.to_string(),
            build_candidates: DEFAULT_BUILD_CANDIDATES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

/// Returns the directory containing the running executable,
/// or None if the executable path cannot be determined.
pub fn app_dir() -> Option<PathBuf> {
    app_dir_from_exe(std::env::current_exe().ok())
}

fn app_dir_from_exe(exe: Option<PathBuf>) -> Option<PathBuf> {
    exe.and_then(|path| path.parent().map(PathBuf::from))
}
