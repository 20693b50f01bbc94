//! Error types.
//!
//! Two channels: [`ConvolutionError`] for dimension and coordinate misuse
//! detected while building buffers and kernels, and [`CodecError`] for the
//! recoverable decode/encode failures at the file boundary.
use std::path::PathBuf;
use thiserror::Error;

/// Validation failures raised by buffer, kernel, padding and convolution code.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvolutionError {
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),
    #[error("coordinate ({col}, {row}, {channel}) out of range for {width}x{height}x{channels}")]
    OutOfRange {
        col: usize,
        row: usize,
        channel: usize,
        width: usize,
        height: usize,
        channels: usize,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),
    #[error("expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Failures while reading or writing image files.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to read {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to save {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("unsupported image format for {0}")]
    UnsupportedFormat(PathBuf),
    #[error("unsupported channel count {0}")]
    UnsupportedChannels(usize),
    #[error("decoded image rejected: {0}")]
    Buffer(#[from] ConvolutionError),
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}
