use super::Layout;

/// Read access to a `W × H × C` byte image under either [`Layout`].
///
/// Implementors only expose their dimensions and backing slice; sample
/// addressing is shared so every source maps `(col, row, channel)` the same way.
pub trait PixelSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn channels(&self) -> usize;
    fn layout(&self) -> Layout;

    /// Backing bytes, exactly `width * height * channels` long.
    fn as_slice(&self) -> &[u8];

    #[inline]
    fn contains(&self, col: usize, row: usize, channel: usize) -> bool {
        col < self.width() && row < self.height() && channel < self.channels()
    }

    /// Linear index of a sample. Coordinates are not checked.
    #[inline]
    fn index_of(&self, col: usize, row: usize, channel: usize) -> usize {
        self.layout().index(
            self.width(),
            self.height(),
            self.channels(),
            col,
            row,
            channel,
        )
    }

    /// Read one sample. Panics when the coordinate lies outside the image.
    #[inline]
    fn sample(&self, col: usize, row: usize, channel: usize) -> u8 {
        assert!(
            self.contains(col, row, channel),
            "sample ({col}, {row}, {channel}) outside {}x{}x{}",
            self.width(),
            self.height(),
            self.channels()
        );
        self.as_slice()[self.index_of(col, row, channel)]
    }

    /// Contiguous plane of one channel; only available for planar data.
    fn plane(&self, channel: usize) -> Option<&[u8]> {
        if self.layout() != Layout::Planar || channel >= self.channels() {
            return None;
        }
        let n = self.width() * self.height();
        Some(&self.as_slice()[channel * n..(channel + 1) * n])
    }
}
