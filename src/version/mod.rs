//! Version information resolution
//!
//! Derives a human-readable version for the running application from files
//! shipped alongside its executable.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │ Revision.txt│────▶│  Revision   │──┐
//! └─────────────┘     └─────────────┘  │  ┌─────────────┐
//! ┌─────────────┐     ┌─────────────┐  ├─▶│ VersionInfo │
//! │ Version.txt │────▶│   Version   │──┤  │ (once)      │
//! └─────────────┘     └─────────────┘  │  └─────────────┘
//! ┌─────────────┐     ┌─────────────┐  │
//! │  binaries   │────▶│    Build    │──┘
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`revision`]: Revision number from a version-control keyword file
//! - [`label`]: Release version from the base label and revision
//! - [`metadata`]: `MetadataReader` trait and the PE implementation
//! - [`build`]: Build description from companion binary metadata
//! - [`info`]: `VersionInfo`, resolved once per process
//! - [`sidecar`]: First-line reading of text files
//! - [`error`]: Error types for sidecar and metadata reads

pub mod build;
pub mod error;
pub mod info;
pub mod label;
pub mod metadata;
pub mod revision;
pub mod sidecar;
