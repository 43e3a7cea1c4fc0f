use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning a source image into an ICO container.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("failed to read source image {}: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode source image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("source image is empty: {width}×{height}")]
    EmptySource { width: u32, height: u32 },

    #[error("invalid icon size: {0} (must be in 1..=256)")]
    InvalidSize(u32),

    #[error("icon size list is empty")]
    EmptySizeSet,

    #[error("icon sizes must be strictly ascending: {previous} is followed by {next}")]
    SizesNotAscending { previous: u32, next: u32 },

    #[error("no frames to encode")]
    NoFrames,

    #[error("invalid icon frame {width}×{height}: {reason}")]
    InvalidFrame {
        width: u32,
        height: u32,
        reason: &'static str,
    },

    #[error("failed to encode ICO: {0}")]
    Encode(#[source] image::ImageError),

    #[error("failed to write {}: {source}", .path.display())]
    WriteDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read ICO file {}: {source}", .path.display())]
    ReadIco {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed ICO data: {reason}")]
    MalformedIco { reason: String },
}

impl IconError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedIco {
            reason: reason.into(),
        }
    }
}
