//! Reference 2-D correlation over multi-channel byte images.
//!
//! The kernel is applied without flipping. For every channel, output row and
//! output column the taps are accumulated in `f32`, rows of the kernel outer
//! and columns inner:
//!
//! ```text
//! sum = Σ_ky Σ_kx padded(x + kx, y + ky, c) · kernel(kx, ky)
//! out = clamp(sum, 0, 255) as u8        // truncating
//! ```
//!
//! Floating-point addition is not associative, so this order is part of the
//! output contract: a variant that sums in another order may round a sample
//! differently and can only be compared against a tolerance.
use crate::error::ConvolutionError;
use crate::image::{PixelBuffer, PixelSource};
use crate::kernel::FilterKernel;
use crate::padding::{pad, PaddingPolicy};
use log::debug;

/// Correlate `image` with `kernel`, synthesising borders with `policy`.
///
/// The output has the dimensions, channel count and layout of `image`. The
/// input is never modified; one padded and one output buffer are allocated.
/// Fails when [`pad`] rejects the border, e.g. a mirror border wider than the
/// reflection range of a very narrow image.
pub fn convolve<S: PixelSource + ?Sized>(
    image: &S,
    kernel: &FilterKernel,
    policy: PaddingPolicy,
) -> Result<PixelBuffer, ConvolutionError> {
    let (w, h, c) = (image.width(), image.height(), image.channels());
    let k = kernel.size();
    debug!(
        "convolve {}x{}x{} ({}) with {}x{} kernel, {:?} padding",
        w,
        h,
        c,
        image.layout(),
        k,
        k,
        policy
    );

    let radius = kernel.radius();
    let padded = pad(image, radius, radius, policy)?;
    let mut output = PixelBuffer::new(w, h, c, image.layout())?;

    let layout = image.layout();
    let (pw, ph) = (padded.width(), padded.height());
    let src = padded.as_slice();
    let weights = kernel.weights();
    let dst = output.as_mut_slice();
    for channel in 0..c {
        for y in 0..h {
            for x in 0..w {
                let mut sum = 0.0f32;
                for ky in 0..k {
                    let taps = &weights[ky * k..(ky + 1) * k];
                    for (kx, &tap) in taps.iter().enumerate() {
                        let sample = src[layout.index(pw, ph, c, x + kx, y + ky, channel)];
                        sum += sample as f32 * tap;
                    }
                }
                dst[layout.index(w, h, c, x, y, channel)] = sum.clamp(0.0, 255.0) as u8;
            }
        }
    }
    Ok(output)
}

/// Convolve independent images with the same kernel; results keep input order.
///
/// Each call owns its buffers, so with the `parallel` feature the images are
/// processed on the rayon pool.
#[cfg(feature = "parallel")]
pub fn convolve_batch(
    images: &[PixelBuffer],
    kernel: &FilterKernel,
    policy: PaddingPolicy,
) -> Result<Vec<PixelBuffer>, ConvolutionError> {
    use rayon::prelude::*;

    images
        .par_iter()
        .map(|image| convolve(image, kernel, policy))
        .collect()
}

#[cfg(not(feature = "parallel"))]
pub fn convolve_batch(
    images: &[PixelBuffer],
    kernel: &FilterKernel,
    policy: PaddingPolicy,
) -> Result<Vec<PixelBuffer>, ConvolutionError> {
    images
        .iter()
        .map(|image| convolve(image, kernel, policy))
        .collect()
}
