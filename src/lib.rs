pub mod config;
pub mod version;

pub use version::info::VersionInfo;
