//! Revision number from a version-control keyword file

use std::path::Path;

use tracing::debug;

use crate::version::error::SourceError;
use crate::version::sidecar::read_first_line;

/// Keyword prefix expanded by the version-control system
pub const REVISION_TAG: &str = "$Revision:";

/// Present in the keyword of builds that were never tagged (local builds)
pub const UNSET_REVISION_MARKER: &str = " 000 ";

/// Extract the revision from a keyword line such as `$Revision: 1648 $`.
///
/// Returns None unless the trimmed line starts with [`REVISION_TAG`],
/// ends with `$` and does not contain [`UNSET_REVISION_MARKER`].
pub fn parse_revision(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.contains(UNSET_REVISION_MARKER) {
        return None;
    }
    line.strip_prefix(REVISION_TAG)?
        .strip_suffix('$')
        .map(str::trim)
}

/// Read and parse the revision file at `path`
pub fn try_resolve_revision(path: &Path) -> Result<String, SourceError> {
    let line = read_first_line(path)?;
    let Some(revision) = parse_revision(&line).map(str::to_string) else {
        return Err(SourceError::Malformed(line));
    };
    Ok(revision)
}

/// Resolve the revision, or an empty string if it is unavailable
pub fn resolve_revision(path: &Path) -> String {
    try_resolve_revision(path)
        .inspect_err(|e| debug!("No revision from {}: {}", path.display(), e))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    #[rstest]
    #[case("$Revision: 1648 $", Some("1648"))]
    #[case("  $Revision: 1649 $  ", Some("1649"))]
    #[case("$Revision:1650$", Some("1650"))]
    #[case("$Revision:$", Some(""))]
    #[case("$Revision: 000 $", None)] // untagged local build
    #[case("$Revision: 1 000 2 $", None)] // marker anywhere disables recognition
    #[case("$Revision: 1648", None)] // missing trailing dollar
    #[case("Revision: 1648 $", None)] // missing leading tag
    #[case("$Rev: 1648 $", None)]
    #[case("", None)]
    fn test_parse_revision(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(parse_revision(line), expected);
    }

    #[test]
    fn resolve_revision_reads_first_line_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Revision.txt");
        fs::write(&path, "$Revision: 1648 $\n$Revision: 9999 $\n").unwrap();

        assert_eq!(resolve_revision(&path), "1648");
    }

    #[test]
    fn resolve_revision_returns_empty_for_unset_marker() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Revision.txt");
        fs::write(&path, "$Revision: 000 $\n").unwrap();

        assert_eq!(resolve_revision(&path), "");
    }

    #[test]
    fn resolve_revision_returns_empty_for_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        assert_eq!(resolve_revision(&temp_dir.path().join("Revision.txt")), "");
    }

    #[test]
    fn try_resolve_revision_reports_malformed_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Revision.txt");
        fs::write(&path, "1648\n").unwrap();

        let err = try_resolve_revision(&path).unwrap_err();
        assert!(matches!(err, SourceError::Malformed(line) if line == "1648"));
    }
}
