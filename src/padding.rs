//! Border synthesis for same-size filtering.
//!
//! [`pad`] grows an image by `pad_width` columns on the left and right and
//! `pad_height` rows on top and bottom. Interior samples are copied verbatim;
//! samples outside the source are produced by the [`PaddingPolicy`]:
//!
//! - `Zero`: constant 0.
//! - `Replicate`: clamp to the nearest edge sample.
//! - `Mirror`: `m = |i| mod 2n`, then `m = min(m, 2n - 1 - m - 1)`. This
//!   reflection does not repeat the edge sample (column −1 maps to column 1),
//!   and accelerated implementations must use the same mapping.
use crate::error::ConvolutionError;
use crate::image::{PixelBuffer, PixelSource};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaddingPolicy {
    #[default]
    Zero,
    Replicate,
    Mirror,
}

/// Source index for a mirrored coordinate, or `None` when the formula leaves
/// `[0, extent)`. That only happens when the border is at least `2n - 1` wide.
pub fn mirror_index(coord: isize, extent: usize) -> Option<usize> {
    let period = 2 * extent;
    let m = coord.unsigned_abs() % period;
    // period - 1 - (m + 1)
    let reflected = period as isize - 2 - m as isize;
    let m = (m as isize).min(reflected);
    usize::try_from(m).ok().filter(|&m| m < extent)
}

#[inline]
fn replicate_index(coord: isize, extent: usize) -> usize {
    coord.clamp(0, extent as isize - 1) as usize
}

/// Source index for each destination position along one axis; `None` means zero.
///
/// Fails when the mirror formula lands outside `[0, extent)`, i.e. when the
/// border is at least `2n - 1` wide.
fn axis_map(
    extent: usize,
    pad: usize,
    policy: PaddingPolicy,
) -> Result<Vec<Option<usize>>, ConvolutionError> {
    (0..extent + 2 * pad)
        .map(|dst| {
            let src = dst as isize - pad as isize;
            if src >= 0 && (src as usize) < extent {
                return Ok(Some(src as usize));
            }
            match policy {
                PaddingPolicy::Zero => Ok(None),
                PaddingPolicy::Replicate => Ok(Some(replicate_index(src, extent))),
                PaddingPolicy::Mirror => mirror_index(src, extent).map(Some).ok_or_else(|| {
                    ConvolutionError::InvalidArgument(format!(
                        "mirror padding of {pad} exceeds reflection range of extent {extent} \
                         (coordinate {src})"
                    ))
                }),
            }
        })
        .collect()
}

/// Return a new `(W + 2·pad_width) × (H + 2·pad_height)` image with the same
/// channel count and layout as `source`.
///
/// Fails with `InvalidArgument` when the padded extent is not addressable, or
/// when a `Mirror` border reaches past the reflection range of the source.
/// With zero padding the result equals the source.
pub fn pad<S: PixelSource + ?Sized>(
    source: &S,
    pad_width: usize,
    pad_height: usize,
    policy: PaddingPolicy,
) -> Result<PixelBuffer, ConvolutionError> {
    let (w, h, c) = (source.width(), source.height(), source.channels());
    let padded_w = pad_width
        .checked_mul(2)
        .and_then(|p| p.checked_add(w))
        .filter(|&v| v <= isize::MAX as usize);
    let padded_h = pad_height
        .checked_mul(2)
        .and_then(|p| p.checked_add(h))
        .filter(|&v| v <= isize::MAX as usize);
    let (Some(padded_w), Some(padded_h)) = (padded_w, padded_h) else {
        return Err(ConvolutionError::InvalidArgument(format!(
            "padding ({pad_width}, {pad_height}) too large for {w}x{h}"
        )));
    };
    debug!(
        "pad {}x{}x{} ({}) by ({}, {}) with {:?}",
        w,
        h,
        c,
        source.layout(),
        pad_width,
        pad_height,
        policy
    );

    let cols = axis_map(w, pad_width, policy)?;
    let rows = axis_map(h, pad_height, policy)?;
    let mut padded = PixelBuffer::new(padded_w, padded_h, c, source.layout())?;

    let src = source.as_slice();
    let layout = source.layout();
    let dst = padded.as_mut_slice();
    for channel in 0..c {
        for (y, row) in rows.iter().enumerate() {
            for (x, col) in cols.iter().enumerate() {
                let value = match (*col, *row) {
                    (Some(col), Some(row)) => src[layout.index(w, h, c, col, row, channel)],
                    _ => 0,
                };
                dst[layout.index(padded_w, padded_h, c, x, y, channel)] = value;
            }
        }
    }
    Ok(padded)
}
