//! JSON configuration for the command-line tools.
pub mod convolve;

pub use convolve::{load_config, parse_config, ConvolveToolConfig, KernelConfig};
