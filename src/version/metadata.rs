//! File version metadata embedded in companion binaries

#[cfg(test)]
use mockall::automock;

use std::path::Path;

use pelite::pe32::Pe as _;
use pelite::pe64::Pe as _;
use pelite::resources::Resources;
use pelite::resources::version_info::VersionInfo;
use pelite::{pe32, pe64};

use crate::version::error::MetadataError;

/// String table key holding the human-readable product version
const PRODUCT_VERSION_KEY: &str = "ProductVersion";

/// Version metadata of a single binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileVersion {
    /// Product version as written in the string table (e.g. "0.0.5223.24629")
    pub product_version: String,
    /// Third numeric product version component
    pub build_part: u16,
    /// Fourth numeric product version component
    pub private_part: u16,
}

/// Trait for reading version metadata from a file
#[cfg_attr(test, automock)]
pub trait MetadataReader {
    fn read(&self, path: &Path) -> Result<FileVersion, MetadataError>;
}

/// Reads the `VS_VERSIONINFO` resource of PE32 and PE32+ images
#[derive(Debug, Clone, Copy, Default)]
pub struct PeMetadataReader;

impl MetadataReader for PeMetadataReader {
    fn read(&self, path: &Path) -> Result<FileVersion, MetadataError> {
        let image = std::fs::read(path)?;
        let resources = resources(&image)?;
        let version_info = resources
            .version_info()
            .map_err(|e| MetadataError::Resource(e.to_string()))?;
        file_version(&version_info)
    }
}

fn resources(image: &[u8]) -> Result<Resources<'_>, MetadataError> {
    let resources = match pe64::PeFile::from_bytes(image) {
        Ok(file) => file.resources(),
        Err(_) => pe32::PeFile::from_bytes(image)
            .map_err(|e| MetadataError::Pe(e.to_string()))?
            .resources(),
    };
    resources.map_err(|e| MetadataError::Resource(e.to_string()))
}

fn file_version(version_info: &VersionInfo<'_>) -> Result<FileVersion, MetadataError> {
    let fixed = version_info.fixed().ok_or(MetadataError::MissingFixedInfo)?;
    let product = fixed.dwProductVersion;

    // Fall back to the numeric version when the string table has no entry
    let product_version = version_info
        .translation()
        .iter()
        .find_map(|&lang| version_info.value(lang, PRODUCT_VERSION_KEY))
        .unwrap_or_else(|| {
            format!(
                "{}.{}.{}.{}",
                product.Major, product.Minor, product.Patch, product.Build
            )
        });

    Ok(FileVersion {
        product_version,
        build_part: product.Patch,
        private_part: product.Build,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    #[test]
    fn pe_reader_reads_pe32_product_version_string() {
        let version = PeMetadataReader.read(&fixture("versioned32.dll")).unwrap();

        assert_eq!(
            version,
            FileVersion {
                product_version: "0.9.0.1648".to_string(),
                build_part: 5223,
                private_part: 24629,
            }
        );
    }

    #[test]
    fn pe_reader_formats_fixed_version_without_product_version_string() {
        let version = PeMetadataReader.read(&fixture("unlabelled64.dll")).unwrap();

        assert_eq!(
            version,
            FileVersion {
                product_version: "0.0.5224.100".to_string(),
                build_part: 5224,
                private_part: 100,
            }
        );
    }

    #[test]
    fn pe_reader_fails_for_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = PeMetadataReader.read(&temp_dir.path().join("Menu.exe"));

        assert!(matches!(result, Err(MetadataError::Io(_))));
    }

    #[test]
    fn pe_reader_fails_for_non_pe_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Menu.exe");
        fs::write(&path, b"#!/bin/sh\necho not a pe image\n").unwrap();

        let result = PeMetadataReader.read(&path);

        assert!(matches!(result, Err(MetadataError::Pe(_))));
    }

    #[test]
    fn pe_reader_fails_for_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ORTS.Common.dll");
        fs::write(&path, b"").unwrap();

        assert!(PeMetadataReader.read(&path).is_err());
    }
}
