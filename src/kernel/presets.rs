use serde::{Deserialize, Serialize};

/// Square kernel stored as a static row-major weight table.
#[derive(Clone, Copy, Debug)]
pub struct StaticKernel {
    size: usize,
    weights: &'static [f32],
}

impl StaticKernel {
    pub const fn new(size: usize, weights: &'static [f32]) -> Self {
        Self { size, weights }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn weights(&self) -> &'static [f32] {
        self.weights
    }
}

/// 3×3 Gaussian `[1 2 1; 2 4 2; 1 2 1] / 16`.
#[rustfmt::skip]
pub const GAUSSIAN_BLUR: StaticKernel = StaticKernel::new(
    3,
    &[
        1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0,
        2.0 / 16.0, 4.0 / 16.0, 2.0 / 16.0,
        1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0,
    ],
);

/// 3×3 mean filter.
#[rustfmt::skip]
pub const BOX_BLUR: StaticKernel = StaticKernel::new(
    3,
    &[
        1.0 / 9.0, 1.0 / 9.0, 1.0 / 9.0,
        1.0 / 9.0, 1.0 / 9.0, 1.0 / 9.0,
        1.0 / 9.0, 1.0 / 9.0, 1.0 / 9.0,
    ],
);

/// 3×3 Laplacian-style edge detector; weights sum to zero.
#[rustfmt::skip]
pub const EDGE_DETECTION: StaticKernel = StaticKernel::new(
    3,
    &[
        -1.0, -1.0, -1.0,
        -1.0, 8.0, -1.0,
        -1.0, -1.0, -1.0,
    ],
);

#[rustfmt::skip]
pub const SHARPEN: StaticKernel = StaticKernel::new(
    3,
    &[
        0.0, -1.0, 0.0,
        -1.0, 5.0, -1.0,
        0.0, -1.0, 0.0,
    ],
);

/// 5×5 unsharp mask: identity·2 minus the 5×5 binomial blur, over 256.
#[rustfmt::skip]
pub const UNSHARP_MASK: StaticKernel = StaticKernel::new(
    5,
    &[
        -1.0 / 256.0, -4.0 / 256.0, -6.0 / 256.0, -4.0 / 256.0, -1.0 / 256.0,
        -4.0 / 256.0, -16.0 / 256.0, -24.0 / 256.0, -16.0 / 256.0, -4.0 / 256.0,
        -6.0 / 256.0, -24.0 / 256.0, 476.0 / 256.0, -24.0 / 256.0, -6.0 / 256.0,
        -4.0 / 256.0, -16.0 / 256.0, -24.0 / 256.0, -16.0 / 256.0, -4.0 / 256.0,
        -1.0 / 256.0, -4.0 / 256.0, -6.0 / 256.0, -4.0 / 256.0, -1.0 / 256.0,
    ],
);

#[rustfmt::skip]
pub const EMBOSS: StaticKernel = StaticKernel::new(
    3,
    &[
        -2.0, -1.0, 0.0,
        -1.0, 1.0, 1.0,
        0.0, 1.0, 2.0,
    ],
);

/// Named predefined kernels, deserialized from lowercase snake-case names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelPreset {
    GaussianBlur,
    BoxBlur,
    EdgeDetection,
    Sharpen,
    UnsharpMask,
    Emboss,
}

impl KernelPreset {
    pub const ALL: [KernelPreset; 6] = [
        KernelPreset::GaussianBlur,
        KernelPreset::BoxBlur,
        KernelPreset::EdgeDetection,
        KernelPreset::Sharpen,
        KernelPreset::UnsharpMask,
        KernelPreset::Emboss,
    ];

    pub fn table(self) -> StaticKernel {
        match self {
            KernelPreset::GaussianBlur => GAUSSIAN_BLUR,
            KernelPreset::BoxBlur => BOX_BLUR,
            KernelPreset::EdgeDetection => EDGE_DETECTION,
            KernelPreset::Sharpen => SHARPEN,
            KernelPreset::UnsharpMask => UNSHARP_MASK,
            KernelPreset::Emboss => EMBOSS,
        }
    }
}
