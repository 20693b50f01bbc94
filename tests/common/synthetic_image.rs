#![allow(dead_code)]

use image_convolution::{Layout, PixelBuffer};

/// Generates a high-contrast checkerboard; every channel gets its own pair of levels.
pub fn checkerboard(width: usize, height: usize, channels: usize, cell: usize) -> PixelBuffer {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut data = vec![0u8; width * height * channels];
    for y in 0..height {
        for x in 0..width {
            let dark = ((x / cell) + (y / cell)) & 1 == 0;
            for c in 0..channels {
                let (lo, hi) = (32 + 10 * c as u8, 220 - 15 * c as u8);
                data[(y * width + x) * channels + c] = if dark { lo } else { hi };
            }
        }
    }
    PixelBuffer::from_vec(width, height, channels, Layout::Interleaved, data).unwrap()
}

/// Constant-valued interleaved image.
pub fn uniform(width: usize, height: usize, channels: usize, value: u8) -> PixelBuffer {
    PixelBuffer::from_vec(
        width,
        height,
        channels,
        Layout::Interleaved,
        vec![value; width * height * channels],
    )
    .unwrap()
}

/// Deterministic pseudo-random bytes (xorshift), interleaved.
pub fn noise(width: usize, height: usize, channels: usize, seed: u32) -> PixelBuffer {
    let mut state = seed.max(1);
    let data = (0..width * height * channels)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect();
    PixelBuffer::from_vec(width, height, channels, Layout::Interleaved, data).unwrap()
}
