use super::buffer::{checked_len, Layout, PixelBuffer};
use crate::error::ConvolutionError;

/// Borrowed read-only image, e.g. over a decoder's output.
#[derive(Clone, Copy, Debug)]
pub struct PixelView<'a> {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) channels: usize,
    pub(crate) layout: Layout,
    pub(crate) data: &'a [u8],
}

impl<'a> PixelView<'a> {
    pub fn new(
        width: usize,
        height: usize,
        channels: usize,
        layout: Layout,
        data: &'a [u8],
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

    /// Deep copy into an owned buffer with the same layout.
    pub fn to_buffer(&self) -> PixelBuffer {
        PixelBuffer::from_bytes(
            self.width,
            self.height,
            self.channels,
            self.layout,
            self.data,
        )
        .expect("view dimensions validated at construction")
    }
}

impl crate::image::traits::PixelSource for PixelView<'_> {
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
        self.data
    }
}
