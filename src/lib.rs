#![doc = include_str!("../README.md")]

pub mod config;
pub mod convolution;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod kernel;
pub mod padding;

// --- High-level re-exports -------------------------------------------------

pub use crate::convolution::{convolve, convolve_batch};
pub use crate::error::{CodecError, ConvolutionError};
pub use crate::image::{Layout, PixelBuffer, PixelSource, PixelView};
pub use crate::kernel::{FilterKernel, KernelPreset};
pub use crate::padding::{pad, PaddingPolicy};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use image_convolution::prelude::*;
///
/// let img = PixelBuffer::from_bytes(3, 3, 1, Layout::Interleaved, &[100; 9]).unwrap();
/// let out = convolve(&img, &FilterKernel::box_blur(), PaddingPolicy::Zero).unwrap();
/// assert_eq!(out[(1, 1, 0)], 100);
/// assert_eq!(out[(0, 0, 0)], 44);
/// ```
pub mod prelude {
    pub use crate::image::{Layout, PixelBuffer, PixelSource};
    pub use crate::{convolve, pad, FilterKernel, PaddingPolicy};
}
