//! Owned multi-channel 8-bit image with an explicit memory layout.
//!
//! One buffer type serves both orderings. The [`Layout`] tag selects the index
//! mapping, and [`PixelBuffer::convert_layout`] permutes the bytes between them.
use super::traits::PixelSource;
use super::view::PixelView;
use crate::error::ConvolutionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Byte ordering of the samples inside a [`PixelBuffer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Pixel-major: all channels of one pixel are adjacent (AoS).
    #[default]
    Interleaved,
    /// Channel-major: every channel is a contiguous `W × H` plane (SoA).
    Planar,
}

impl Layout {
    /// Map `(col, row, channel)` to a linear index for a `width × height × channels` image.
    #[inline]
    pub fn index(
        self,
        width: usize,
        height: usize,
        channels: usize,
        col: usize,
        row: usize,
        channel: usize,
    ) -> usize {
        match self {
            Layout::Interleaved => (row * width + col) * channels + channel,
            Layout::Planar => channel * width * height + row * width + col,
        }
    }

    /// The other layout.
    pub fn flipped(self) -> Self {
        match self {
            Layout::Interleaved => Layout::Planar,
            Layout::Planar => Layout::Interleaved,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Interleaved => f.write_str("interleaved"),
            Layout::Planar => f.write_str("planar"),
        }
    }
}

/// Owned `W × H × C` byte image.
///
/// Cloning deep-copies the samples. Equality compares dimensions and raw
/// bytes, not the layout tag.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    channels: usize,
    layout: Layout,
    data: Vec<u8>,
}

/// Validate dimensions and return the sample count.
pub(crate) fn checked_len(
    width: usize,
    height: usize,
    channels: usize,
) -> Result<usize, ConvolutionError> {
    if width == 0 || height == 0 || channels == 0 {
        return Err(ConvolutionError::InvalidDimension(format!(
            "image dimensions must be positive, got {width}x{height}x{channels}"
        )));
    }
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(|| {
            ConvolutionError::InvalidDimension(format!(
                "image {width}x{height}x{channels} overflows addressable size"
            ))
        })
}

impl PixelBuffer {
    /// Zero-filled buffer.
    pub fn new(
        width: usize,
        height: usize,
        channels: usize,
        layout: Layout,
    ) -> Result<Self, ConvolutionError> {
        let len = checked_len(width, height, channels)?;
        Ok(Self {
            width,
            height,
            channels,
            layout,
            data: vec![0; len],
        })
    }

    /// Deep-copy `bytes`, which must already be ordered according to `layout`.
    pub fn from_bytes(
        width: usize,
        height: usize,
        channels: usize,
        layout: Layout,
        bytes: &[u8],
    ) -> Result<Self, ConvolutionError> {
        Self::from_vec(width, height, channels, layout, bytes.to_vec())
    }

    /// Take ownership of `data` without copying.
    pub fn from_vec(
        width: usize,
        height: usize,
        channels: usize,
        layout: Layout,
        data: Vec<u8>,
    ) -> Result<Self, ConvolutionError> {
        let expected = checked_len(width, height, channels)?;
        if data.len() != expected {
            return Err(ConvolutionError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            layout,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Number of samples (`W · H · C`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Borrow as a read-only [`PixelView`].
    pub fn as_view(&self) -> PixelView<'_> {
        PixelView {
            width: self.width,
            height: self.height,
            channels: self.channels,
            layout: self.layout,
            data: &self.data,
        }
    }

    fn out_of_range(&self, col: usize, row: usize, channel: usize) -> ConvolutionError {
        ConvolutionError::OutOfRange {
            col,
            row,
            channel,
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }

    /// Read a sample, failing with `OutOfRange` outside the image.
    pub fn get(&self, col: usize, row: usize, channel: usize) -> Result<u8, ConvolutionError> {
        if !self.contains(col, row, channel) {
            return Err(self.out_of_range(col, row, channel));
        }
        Ok(self.data[self.index_of(col, row, channel)])
    }

    /// Mutable access to a sample, failing with `OutOfRange` outside the image.
    pub fn get_mut(
        &mut self,
        col: usize,
        row: usize,
        channel: usize,
    ) -> Result<&mut u8, ConvolutionError> {
        if !self.contains(col, row, channel) {
            return Err(self.out_of_range(col, row, channel));
        }
        let i = self.index_of(col, row, channel);
        Ok(&mut self.data[i])
    }

    /// Rewrite the samples into the other layout.
    pub fn convert_layout(&mut self) {
        let target = self.layout.flipped();
        let (w, h, c) = (self.width, self.height, self.channels);
        let mut converted = vec![0u8; self.data.len()];
        for channel in 0..c {
            for row in 0..h {
                for col in 0..w {
                    converted[target.index(w, h, c, col, row, channel)] =
                        self.data[self.layout.index(w, h, c, col, row, channel)];
                }
            }
        }
        self.data = converted;
        self.layout = target;
    }

    /// Return the buffer in `layout`, converting only when it differs.
    pub fn into_layout(mut self, layout: Layout) -> Self {
        if self.layout != layout {
            self.convert_layout();
        }
        self
    }
}

impl PixelSource for PixelBuffer {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn channels(&self) -> usize {
        self.channels
    }
    #[inline]
    fn layout(&self) -> Layout {
        self.layout
    }
    #[inline]
    fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl PartialEq for PixelBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.channels == other.channels
            && self.data == other.data
    }
}

impl Eq for PixelBuffer {}

impl Index<(usize, usize, usize)> for PixelBuffer {
    type Output = u8;

    /// Panics when `(col, row, channel)` lies outside the image.
    #[inline]
    fn index(&self, (col, row, channel): (usize, usize, usize)) -> &u8 {
        assert!(
            self.contains(col, row, channel),
            "{}",
            self.out_of_range(col, row, channel)
        );
        &self.data[self.index_of(col, row, channel)]
    }
}

impl IndexMut<(usize, usize, usize)> for PixelBuffer {
    #[inline]
    fn index_mut(&mut self, (col, row, channel): (usize, usize, usize)) -> &mut u8 {
        assert!(
            self.contains(col, row, channel),
            "{}",
            self.out_of_range(col, row, channel)
        );
        let i = self.index_of(col, row, channel);
        &mut self.data[i]
    }
}

impl fmt::Display for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = self
            .data
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);
        writeln!(f, "Image data:")?;
        for row in 0..self.height {
            for col in 0..self.width {
                f.write_str("(")?;
                for channel in 0..self.channels {
                    if channel > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:>cell$}", self[(col, row, channel)])?;
                }
                f.write_str(") ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(w: usize, h: usize, c: usize) -> PixelBuffer {
        let bytes: Vec<u8> = (0..w * h * c).map(|i| (i * 7 % 251) as u8).collect();
        PixelBuffer::from_vec(w, h, c, Layout::Interleaved, bytes).unwrap()
    }

    #[test]
    fn index_mapping_matches_layout() {
        assert_eq!(Layout::Interleaved.index(4, 3, 3, 2, 1, 1), (4 + 2) * 3 + 1);
        assert_eq!(Layout::Planar.index(4, 3, 3, 2, 1, 1), 12 + 4 + 2);
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            PixelBuffer::new(0, 3, 1, Layout::Interleaved),
            Err(ConvolutionError::InvalidDimension(_))
        ));
        assert!(PixelBuffer::new(3, 3, 0, Layout::Planar).is_err());
    }

    #[test]
    fn rejects_wrong_byte_count() {
        let err = PixelBuffer::from_bytes(2, 2, 3, Layout::Interleaved, &[0; 11]).unwrap_err();
        assert_eq!(
            err,
            ConvolutionError::LengthMismatch {
                expected: 12,
                actual: 11
            }
        );
    }

    #[test]
    fn conversion_keeps_samples_addressable() {
        let aos = ramp(5, 3, 3);
        let mut soa = aos.clone();
        soa.convert_layout();
        assert_eq!(soa.layout(), Layout::Planar);
        for ch in 0..3 {
            for row in 0..3 {
                for col in 0..5 {
                    assert_eq!(aos[(col, row, ch)], soa[(col, row, ch)]);
                }
            }
        }
        soa.convert_layout();
        assert_eq!(soa, aos);
        assert_eq!(soa.layout(), Layout::Interleaved);
    }

    #[test]
    fn planar_plane_is_contiguous_channel() {
        let soa = ramp(3, 2, 2).into_layout(Layout::Planar);
        let plane = soa.plane(1).unwrap();
        assert_eq!(plane.len(), 6);
        assert_eq!(plane[4], soa[(1, 1, 1)]);
        assert!(ramp(3, 2, 2).plane(0).is_none());
    }

    #[test]
    fn get_reports_out_of_range() {
        let mut img = ramp(2, 2, 1);
        assert!(matches!(
            img.get(2, 0, 0),
            Err(ConvolutionError::OutOfRange { col: 2, .. })
        ));
        assert!(img.get_mut(0, 0, 1).is_err());
        *img.get_mut(1, 1, 0).unwrap() = 42;
        assert_eq!(img.get(1, 1, 0).unwrap(), 42);
    }

    #[test]
    #[should_panic]
    fn index_panics_out_of_range() {
        let img = ramp(2, 2, 1);
        let _ = img[(0, 2, 0)];
    }

    #[test]
    fn clone_is_independent() {
        let original = ramp(2, 2, 1);
        let mut copy = original.clone();
        copy[(0, 0, 0)] = 255;
        assert_ne!(original[(0, 0, 0)], 255);
    }

    #[test]
    fn display_pads_columns() {
        let img = PixelBuffer::from_bytes(2, 1, 2, Layout::Interleaved, &[1, 200, 30, 4]).unwrap();
        assert_eq!(img.to_string(), "Image data:\n(  1, 200) ( 30,   4) \n");
    }
}
