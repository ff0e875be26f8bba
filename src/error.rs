//! Errors raised by the I/O layer. Expansion and interpretation never fail.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PlantError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid settings file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
