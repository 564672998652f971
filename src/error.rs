use thiserror::Error;

/// Errors from the outer layers of the application: files, images and configuration.
///
/// Drawing, history and tool operations never fail; see the individual modules.
#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode or encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("No background image is loaded")]
    NoImageLoaded,

    #[error("No output directory selected")]
    NoOutputDirectory,

    #[error("File index {index} out of range (list has {len} entries)")]
    FileIndexOutOfRange { index: usize, len: usize },

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// Result type for fallible application operations
pub type MarkupResult<T> = Result<T, MarkupError>;
