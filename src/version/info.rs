//! Version information of the running application

use std::path::Path;
use std::sync::OnceLock;

use serde::Serialize;
use tracing::debug;

use crate::config::{VersionSources, app_dir};
use crate::version::build::resolve_build;
use crate::version::label::resolve_version;
use crate::version::metadata::{MetadataReader, PeMetadataReader};
use crate::version::revision::resolve_revision;

static CURRENT: OnceLock<VersionInfo> = OnceLock::new();

/// Version, revision and build of an application, resolved once.
///
/// Every value is an empty string when its sources are unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    /// Release version, e.g. "0.9.0.1648"; empty for untagged builds
    pub version: String,
    /// Revision number, e.g. "1648"
    pub revision: String,
    /// Build description, e.g. "0.0.5223.24629 (2014-04-20 13:40:58Z)"
    pub build: String,
    /// `version` if non-empty, otherwise `build`
    pub version_or_build: String,
}

impl VersionInfo {
    /// Resolve all values from the files in `dir`.
    ///
    /// With no directory every value is empty.
    pub fn resolve<R>(dir: Option<&Path>, sources: &VersionSources, reader: &R) -> Self
    where
        R: MetadataReader + ?Sized,
    {
        let Some(dir) = dir else {
            debug!("Application directory unknown, version information unavailable");
            return Self::default();
        };

        let revision = resolve_revision(&dir.join(&sources.revision_file));
        let version = resolve_version(&dir.join(&sources.version_file), &revision);
        let build = resolve_build(dir, &sources.build_candidates, reader);
        Self::from_parts(version, revision, build)
    }

    /// Assemble from already resolved values
    pub fn from_parts(version: String, revision: String, build: String) -> Self {
        let version_or_build = select_version_or_build(&version, &build).to_string();
        Self {
            version,
            revision,
            build,
            version_or_build,
        }
    }

    /// Version information of the running executable.
    ///
    /// Resolved on first access from the executable's directory and
    /// cached for the lifetime of the process.
    pub fn current() -> &'static VersionInfo {
        CURRENT.get_or_init(|| {
            Self::resolve(
                app_dir().as_deref(),
                &VersionSources::default(),
                &PeMetadataReader,
            )
        })
    }
}

/// Prefer the release version, falling back to the build description
pub fn select_version_or_build<'a>(version: &'a str, build: &'a str) -> &'a str {
    if version.is_empty() { build } else { version }
}
