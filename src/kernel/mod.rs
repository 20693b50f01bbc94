//! Square, odd-sized correlation kernels.
//!
//! [`FilterKernel`] owns a row-major `K × K` weight table. The size invariant
//! (square, odd, positive) is checked once at construction, so the convolution
//! can rely on a symmetric radius of `K / 2`.

pub mod presets;

use crate::error::ConvolutionError;
use std::fmt;
use std::ops::{Index, IndexMut};

pub use presets::{KernelPreset, StaticKernel};

#[derive(Clone, Debug, PartialEq)]
pub struct FilterKernel {
    size: usize,
    weights: Vec<f32>,
}

impl FilterKernel {
    /// Build a kernel from row-major `weights`.
    ///
    /// Fails with `InvalidDimension` when either side is zero, even, or the
    /// sides differ, and with `LengthMismatch` when `weights` is not `w · h` long.
    pub fn new(width: usize, height: usize, weights: Vec<f32>) -> Result<Self, ConvolutionError> {
        if width == 0 || height == 0 {
            return Err(ConvolutionError::InvalidDimension(
                "kernel dimensions must be greater than 0".into(),
            ));
        }
        if width % 2 == 0 || height % 2 == 0 {
            return Err(ConvolutionError::InvalidDimension(format!(
                "kernel dimensions must be odd, got {width}x{height}"
            )));
        }
        if width != height {
            return Err(ConvolutionError::InvalidDimension(format!(
                "kernel dimensions must be equal, got {width}x{height}"
            )));
        }
        let expected = width * height;
        if weights.len() != expected {
            return Err(ConvolutionError::LengthMismatch {
                expected,
                actual: weights.len(),
            });
        }
        Ok(Self {
            size: width,
            weights,
        })
    }

    /// `size × size` kernel, optionally scaled so the weights sum to one.
    ///
    /// Normalisation fails with `InvalidKernel` when the weights sum to zero
    /// (or to a non-finite value), e.g. for edge-detection style kernels.
    pub fn custom(size: usize, weights: &[f32], normalize: bool) -> Result<Self, ConvolutionError> {
        let mut weights = weights.to_vec();
        if normalize {
            let sum: f32 = weights.iter().sum();
            if sum == 0.0 || !sum.is_finite() {
                return Err(ConvolutionError::InvalidKernel(format!(
                    "cannot normalise kernel with weight sum {sum}"
                )));
            }
            for w in &mut weights {
                *w /= sum;
            }
        }
        Self::new(size, size, weights)
    }

    pub fn preset(preset: KernelPreset) -> Self {
        Self::from(preset.table())
    }

    pub fn gaussian_blur() -> Self {
        Self::preset(KernelPreset::GaussianBlur)
    }

    pub fn box_blur() -> Self {
        Self::preset(KernelPreset::BoxBlur)
    }

    pub fn edge_detection() -> Self {
        Self::preset(KernelPreset::EdgeDetection)
    }

    pub fn sharpen() -> Self {
        Self::preset(KernelPreset::Sharpen)
    }

    pub fn unsharp_mask() -> Self {
        Self::preset(KernelPreset::UnsharpMask)
    }

    pub fn emboss() -> Self {
        Self::preset(KernelPreset::Emboss)
    }

    pub fn width(&self) -> usize {
        self.size
    }

    pub fn height(&self) -> usize {
        self.size
    }

    /// Side length `K`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Padding needed on each side for same-size output.
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }

    fn out_of_range(&self, col: usize, row: usize) -> ConvolutionError {
        ConvolutionError::OutOfRange {
            col,
            row,
            channel: 0,
            width: self.size,
            height: self.size,
            channels: 1,
        }
    }

    pub fn get(&self, col: usize, row: usize) -> Result<f32, ConvolutionError> {
        if col >= self.size || row >= self.size {
            return Err(self.out_of_range(col, row));
        }
        Ok(self.weights[row * self.size + col])
    }

    pub fn get_mut(&mut self, col: usize, row: usize) -> Result<&mut f32, ConvolutionError> {
        if col >= self.size || row >= self.size {
            return Err(self.out_of_range(col, row));
        }
        Ok(&mut self.weights[row * self.size + col])
    }
}

impl From<StaticKernel> for FilterKernel {
    fn from(table: StaticKernel) -> Self {
        Self {
            size: table.size(),
            weights: table.weights().to_vec(),
        }
    }
}

impl Index<(usize, usize)> for FilterKernel {
    type Output = f32;

    /// `(col, row)`; panics outside `[0, K)`.
    #[inline]
    fn index(&self, (col, row): (usize, usize)) -> &f32 {
        assert!(col < self.size && row < self.size, "{}", self.out_of_range(col, row));
        &self.weights[row * self.size + col]
    }
}

impl IndexMut<(usize, usize)> for FilterKernel {
    #[inline]
    fn index_mut(&mut self, (col, row): (usize, usize)) -> &mut f32 {
        assert!(col < self.size && row < self.size, "{}", self.out_of_range(col, row));
        &mut self.weights[row * self.size + col]
    }
}

/// Shortest decimal form of a weight: trailing zeros and a bare `.` dropped.
fn trim_weight(w: f32) -> String {
    let s = format!("{w:.6}");
    let s = s.trim_end_matches('0');
    s.trim_end_matches('.').to_string()
}

impl fmt::Display for FilterKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.weights.iter().map(|&w| trim_weight(w)).collect();
        let cell = cells.iter().map(String::len).max().unwrap_or(1);
        writeln!(f, "Kernel dimensions: {}x{}", self.size, self.size)?;
        writeln!(f, "Kernel data:")?;
        for row in cells.chunks(self.size) {
            for value in row {
                write!(f, "{value:>cell$} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
