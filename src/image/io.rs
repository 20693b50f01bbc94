//! Codec boundary: decode files into [`PixelBuffer`]s and encode them back.
//!
//! - `load_image`: read a PNG/JPEG/BMP/TGA into an owned buffer, optionally
//!   forcing the channel count and converting to planar layout.
//! - `save_image`: write a buffer, converting to interleaved first; the
//!   encoder is chosen from the file extension. JPEG output drops alpha.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{Layout, PixelBuffer};
use crate::error::{CodecError, ConvolutionError};
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageBuffer, ImageFormat, LumaA, Rgba};
use log::debug;
use serde::Serialize;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// JPEG output is written at maximum quality.
const JPEG_QUALITY: u8 = 100;

/// Map a file extension to one of the supported encoders.
pub fn image_format_from_path(path: &Path) -> Option<ImageFormat> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some(ImageFormat::Png),
        "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
        "bmp" => Some(ImageFormat::Bmp),
        "tga" => Some(ImageFormat::Tga),
        _ => None,
    }
}

fn color_type_for(channels: usize) -> Result<ColorType, CodecError> {
    match channels {
        1 => Ok(ColorType::L8),
        2 => Ok(ColorType::La8),
        3 => Ok(ColorType::Rgb8),
        4 => Ok(ColorType::Rgba8),
        n => Err(CodecError::UnsupportedChannels(n)),
    }
}

fn to_u32(value: usize) -> Result<u32, CodecError> {
    u32::try_from(value).map_err(|_| {
        CodecError::Buffer(ConvolutionError::InvalidDimension(format!(
            "{value} exceeds encoder limits"
        )))
    })
}

/// Split a decoded image into 8-bit samples with `channels` channels (1..=4).
fn into_raw_channels(img: DynamicImage, channels: usize) -> Result<Vec<u8>, CodecError> {
    Ok(match channels {
        1 => img.into_luma8().into_raw(),
        2 => img.into_luma_alpha8().into_raw(),
        3 => img.into_rgb8().into_raw(),
        4 => img.into_rgba8().into_raw(),
        n => return Err(CodecError::UnsupportedChannels(n)),
    })
}

/// JPEG has no alpha channel: gray-alpha becomes gray and RGBA becomes RGB.
fn jpeg_samples(
    data: &[u8],
    w: u32,
    h: u32,
    channels: usize,
) -> Result<(Cow<'_, [u8]>, ColorType), CodecError> {
    let with_alpha = match channels {
        2 => ImageBuffer::<LumaA<u8>, _>::from_raw(w, h, data.to_vec())
            .map(DynamicImage::ImageLumaA8),
        4 => ImageBuffer::<Rgba<u8>, _>::from_raw(w, h, data.to_vec())
            .map(DynamicImage::ImageRgba8),
        _ => return Ok((Cow::Borrowed(data), color_type_for(channels)?)),
    };
    let img = with_alpha.ok_or(CodecError::Buffer(ConvolutionError::LengthMismatch {
        expected: w as usize * h as usize * channels,
        actual: data.len(),
    }))?;
    Ok(if channels == 2 {
        (Cow::Owned(img.to_luma8().into_raw()), ColorType::L8)
    } else {
        (Cow::Owned(img.to_rgb8().into_raw()), ColorType::Rgb8)
    })
}

/// Decode an image from disk.
///
/// `channel_force == 0` keeps the file's own channel count. The decoded
/// samples are interleaved; `layout == Planar` converts them after loading.
pub fn load_image(
    path: &Path,
    channel_force: usize,
    layout: Layout,
) -> Result<PixelBuffer, CodecError> {
    let img = image::open(path).map_err(|source| CodecError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let channels = if channel_force == 0 {
        img.color().channel_count() as usize
    } else {
        channel_force
    };
    let (width, height) = (img.width() as usize, img.height() as usize);
    let data = into_raw_channels(img, channels)?;
    let buffer = PixelBuffer::from_vec(width, height, channels, Layout::Interleaved, data)?;
    debug!(
        "load_image {}: {}x{}x{} -> {}",
        path.display(),
        width,
        height,
        channels,
        layout
    );
    Ok(buffer.into_layout(layout))
}

/// Encode `buffer` to `path`, picking the codec from the extension.
///
/// Planar buffers are converted to interleaved on a copy; the caller's
/// buffer is left untouched.
pub fn save_image(buffer: &PixelBuffer, path: &Path) -> Result<(), CodecError> {
    let format =
        image_format_from_path(path).ok_or_else(|| CodecError::UnsupportedFormat(path.into()))?;
    let color = color_type_for(buffer.channels())?;
    let (w, h) = (to_u32(buffer.width())?, to_u32(buffer.height())?);

    let interleaved;
    let data = if buffer.layout() == Layout::Interleaved {
        buffer.as_slice()
    } else {
        interleaved = buffer.clone().into_layout(Layout::Interleaved);
        interleaved.as_slice()
    };

    ensure_parent_dir(path)?;
    let encode_err = |source| CodecError::Encode {
        path: path.to_path_buf(),
        source,
    };
    if format == ImageFormat::Jpeg {
        // Encode in memory so a rejected image leaves nothing on disk.
        let (samples, color) = jpeg_samples(data, w, h, buffer.channels())?;
        let mut encoded = Vec::new();
        JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY)
            .encode(&samples, w, h, color.into())
            .map_err(encode_err)?;
        fs::write(path, encoded).map_err(|source| CodecError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    } else {
        image::save_buffer_with_format(path, data, w, h, color, format).map_err(encode_err)?;
    }
    debug!("save_image {} ({:?})", path.display(), format);
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), CodecError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), CodecError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| CodecError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
