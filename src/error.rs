use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("file could not be read, check that {} exists", .path.display())]
    ImageMissing { path: PathBuf },

    #[error("failed to decode image {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    #[error("noise amount must lie within [0, 1], got {0}")]
    InvalidNoiseAmount(f64),

    #[error("failed to save image {}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FilterError>;
