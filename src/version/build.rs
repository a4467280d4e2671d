//! Build description reconstructed from companion binary metadata
//!
//! The build and private product version components encode the build time
//! as days since [`BUILD_EPOCH_SECS`] and seconds since midnight divided by two.
//! Among all readable candidates the most recent build wins.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::Path;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use crate::version::metadata::{FileVersion, MetadataReader};

/// 2000-01-01T00:00:00Z as seconds since the UNIX epoch
pub const BUILD_EPOCH_SECS: i64 = 946_684_800;

/// Universal sortable date/time pattern (e.g. "2014-04-20 13:40:58Z")
pub const BUILD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%SZ";

/// Offset of the build time from the build epoch
pub fn build_offset(version: &FileVersion) -> TimeDelta {
    TimeDelta::days(i64::from(version.build_part))
        + TimeDelta::seconds(i64::from(version.private_part) * 2)
}

/// Absolute build time for an offset from the build epoch
pub fn build_time(offset: TimeDelta) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(BUILD_EPOCH_SECS, 0)?.checked_add_signed(offset)
}

/// Product versions keyed by build offset.
///
/// A candidate whose offset is already present is dropped; the first
/// binary read for a given build time is the one reported.
#[derive(Debug, Default)]
pub struct BuildTable {
    builds: BTreeMap<TimeDelta, String>,
}

impl BuildTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a candidate, returning false if its offset was already taken
    pub fn insert(&mut self, version: FileVersion) -> bool {
        match self.builds.entry(build_offset(&version)) {
            Entry::Vacant(entry) => {
                entry.insert(version.product_version);
                true
            }
            Entry::Occupied(entry) => {
                debug!(
                    "Dropping build {} with same build time as {}",
                    version.product_version,
                    entry.get()
                );
                false
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.builds.is_empty()
    }

    /// The most recent build as `"<product version> (<build time>)"`
    pub fn latest(&self) -> Option<String> {
        let (offset, product_version) = self.builds.last_key_value()?;
        let time = build_time(*offset)?;
        Some(format!(
            "{} ({})",
            product_version,
            time.format(BUILD_TIME_FORMAT)
        ))
    }
}

/// Resolve the build description from the candidate files in `dir`.
///
/// Candidates that are missing or carry no version metadata are skipped.
/// Returns an empty string if no candidate is usable.
pub fn resolve_build<R, S>(dir: &Path, candidates: &[S], reader: &R) -> String
where
    R: MetadataReader + ?Sized,
    S: AsRef<str>,
{
    let mut table = BuildTable::new();
    for candidate in candidates {
        let path = dir.join(candidate.as_ref());
        match reader.read(&path) {
            Ok(version) => {
                table.insert(version);
            }
            Err(e) => debug!("Skipping build candidate {}: {}", path.display(), e),
        }
    }
    table.latest().unwrap_or_default()
}
