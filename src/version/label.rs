//! Release version label: base label file plus revision

use std::path::Path;

use tracing::debug;

use crate::version::error::SourceError;
use crate::version::sidecar::read_first_line;

/// Join the base label with the revision.
///
/// The label is only meaningful for tagged builds, so a missing
/// revision yields None even when the label itself is present.
pub fn compose_version(label: &str, revision: &str) -> Option<String> {
    if revision.is_empty() {
        return None;
    }
    Some(format!("{label}{revision}"))
}

/// Read the base label at `path` and join it with `revision`
pub fn try_resolve_version(path: &Path, revision: &str) -> Result<Option<String>, SourceError> {
    let label = match read_first_line(path) {
        Ok(label) => label,
        // An empty label file still carries a tagged revision
        Err(SourceError::MissingLine) => String::new(),
        Err(e) => return Err(e),
    };
    Ok(compose_version(&label, revision))
}

/// Resolve the version, or an empty string if it is unavailable
pub fn resolve_version(path: &Path, revision: &str) -> String {
    match try_resolve_version(path, revision) {
        Ok(version) => version.unwrap_or_default(),
        Err(e) => {
            debug!("No version from {}: {}", path.display(), e);
            String::new()
        }
    }
}
