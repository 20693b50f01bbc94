use crate::error::ConvolutionError;
use crate::image::Layout;
use crate::kernel::{FilterKernel, KernelPreset};
use crate::padding::PaddingPolicy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ConvolveToolConfig {
    pub input: PathBuf,
    /// Force the decoded channel count (1..=4); `0` keeps the file's own.
    #[serde(default)]
    pub channels: usize,
    #[serde(default)]
    pub layout: Layout,
    pub kernel: KernelConfig,
    #[serde(default)]
    pub padding: PaddingPolicy,
    #[serde(default)]
    pub run: RunConfig,
    pub output: ConvolveOutputConfig,
}

/// Either a preset name (`"gaussian_blur"`) or an explicit weight table.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum KernelConfig {
    Preset(KernelPreset),
    Custom {
        size: usize,
        weights: Vec<f32>,
        #[serde(default = "default_normalize")]
        normalize: bool,
    },
}

fn default_normalize() -> bool {
    true
}

impl KernelConfig {
    pub fn build(&self) -> Result<FilterKernel, ConvolutionError> {
        match self {
            KernelConfig::Preset(preset) => Ok(FilterKernel::preset(*preset)),
            KernelConfig::Custom {
                size,
                weights,
                normalize,
            } => FilterKernel::custom(*size, weights, *normalize),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of times the convolution is repeated for timing.
    pub iterations: usize,
    /// 0 = silent, 1 = summary, 2 = summary plus image and kernel details.
    pub verbosity: u8,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterations: 1,
            verbosity: 1,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ConvolveOutputConfig {
    pub image: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn parse_config(text: &str) -> Result<ConvolveToolConfig, String> {
    serde_json::from_str(text).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<ConvolveToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data)
}
