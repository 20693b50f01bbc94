//! Serializable run summaries written by the command-line tool.
use crate::image::{Layout, PixelSource};
use crate::kernel::FilterKernel;
use crate::padding::PaddingPolicy;
use serde::{Deserialize, Serialize};

/// Wall-clock time of one repetition of the convolution, numbered from 1.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IterationTiming {
    pub iteration: usize,
    pub elapsed_ms: f64,
}

/// Per-iteration timings of a repeated run and their sum.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub iterations: Vec<IterationTiming>,
}

impl TimingBreakdown {
    /// Record the next iteration.
    pub fn record(&mut self, elapsed_ms: f64) {
        self.total_ms += elapsed_ms;
        self.iterations.push(IterationTiming {
            iteration: self.iterations.len() + 1,
            elapsed_ms,
        });
    }

    pub fn mean_ms(&self) -> f64 {
        if self.iterations.is_empty() {
            0.0
        } else {
            self.total_ms / self.iterations.len() as f64
        }
    }

    /// Fastest iteration, if any ran.
    pub fn min_ms(&self) -> Option<f64> {
        self.iterations
            .iter()
            .map(|t| t.elapsed_ms)
            .min_by(|a, b| a.total_cmp(b))
    }
}

/// What was convolved, with which kernel and border, and how long it took.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvolutionReport {
    pub image_width: usize,
    pub image_height: usize,
    pub image_channels: usize,
    pub layout: Layout,
    pub kernel_size: usize,
    pub padding: PaddingPolicy,
    pub iterations: usize,
    pub mean_ms: f64,
    pub min_ms: Option<f64>,
    pub timing: TimingBreakdown,
}

impl ConvolutionReport {
    pub fn new<S: PixelSource + ?Sized>(
        image: &S,
        kernel: &FilterKernel,
        padding: PaddingPolicy,
        timing: TimingBreakdown,
    ) -> Self {
        Self {
            image_width: image.width(),
            image_height: image.height(),
            image_channels: image.channels(),
            layout: image.layout(),
            kernel_size: kernel.size(),
            padding,
            iterations: timing.iterations.len(),
            mean_ms: timing.mean_ms(),
            min_ms: timing.min_ms(),
            timing,
        }
    }
}
