use std::path::PathBuf;
use thiserror::Error;

/// Failures that can stop icon generation.
///
/// Every variant is terminal: the driver reports it and aborts the run.
#[derive(Debug, Error)]
pub enum IconError {
    /// The raster backend could not be brought up, nothing was written
    #[error("raster backend `{backend}` is not available")]
    DependencyMissing { backend: String },

    #[error("cannot render {size}x{size} icon: {reason}")]
    Render { size: u32, reason: String },

    #[error("cannot encode {size}x{size} icon as PNG")]
    Encode {
        size: u32,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IconError {
    pub fn render(size: u32, reason: impl Into<String>) -> Self {
        IconError::Render {
            size,
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IconError::Io {
            path: path.into(),
            source,
        }
    }
}
