//! Crate-level error type and `Result` alias.
//! Every failure is either reading the input or writing the output; both carry
//! the offending path and the underlying `image` error.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl Error {
    pub fn decode(path: impl Into<PathBuf>, source: impl Into<image::ImageError>) -> Self {
        Error::Decode {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn encode(path: impl Into<PathBuf>, source: impl Into<image::ImageError>) -> Self {
        Error::Encode {
            path: path.into(),
            source: source.into(),
        }
    }
}
