use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File is empty")]
    MissingLine,

    #[error("Unrecognized content: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid PE image: {0}")]
    Pe(String),

    #[error("Version resource not found: {0}")]
    Resource(String),

    #[error("Version resource has no fixed file info")]
    MissingFixedInfo,
}
