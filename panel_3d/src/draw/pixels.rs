/// Pixel buffers crossing the graphics API: texture uploads and framebuffer captures.

use crate::error::Result;
use crate::{panel_bail, panel_err};

const LOG_SOURCE: &str = "panel3d::pixels";

/// 8-bit-per-channel pixel layouts accepted for upload and capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb8,
    Rgba8,
}

impl PixelFormat {
    /// Format for a channel count (3 or 4).
    pub fn from_channels(channels: u32) -> Result<Self> {
        match channels {
            3 => Ok(PixelFormat::Rgb8),
            4 => Ok(PixelFormat::Rgba8),
            other => Err(panel_err!(
                LOG_SOURCE, InvalidResource, "unsupported channel count {} (expected 3 or 4)", other
            )),
        }
    }

    pub fn channels(self) -> u32 {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

fn expected_len(width: u32, height: u32, format: PixelFormat) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(format.channels() as usize))
        .ok_or_else(|| panel_err!(
            LOG_SOURCE, InvalidResource, "{}x{} image size overflows", width, height
        ))
}

/// Texture minification / magnification filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFilter {
    Nearest,
    Linear,
    NearestMipmapNearest,
}

/// Texture coordinate wrap mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureWrap {
    Repeat,
    ClampToEdge,
}

/// Sampling state applied when a texture is uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerSettings {
    pub min_filter: TextureFilter,
    pub mag_filter: TextureFilter,
    pub wrap_s: TextureWrap,
    pub wrap_t: TextureWrap,
    pub generate_mipmaps: bool,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            min_filter: TextureFilter::NearestMipmapNearest,
            mag_filter: TextureFilter::Nearest,
            wrap_s: TextureWrap::Repeat,
            wrap_t: TextureWrap::Repeat,
            generate_mipmaps: true,
        }
    }
}

/// A validated 2D texture upload: tightly packed rows (unpack alignment 1).
#[derive(Debug, Clone, PartialEq)]
pub struct TextureUpload<'a> {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub data: &'a [u8],
    pub sampler: SamplerSettings,
}

impl<'a> TextureUpload<'a> {
    /// # Errors
    ///
    /// `InvalidResource` for a zero dimension, a channel count other than
    /// 3 or 4, or a buffer whose length is not `width * height * channels`.
    pub fn new(width: u32, height: u32, channels: u32, data: &'a [u8]) -> Result<Self> {
        if width == 0 || height == 0 {
            panel_bail!(LOG_SOURCE, InvalidResource, "texture size must be non-zero, got {}x{}", width, height);
        }
        let format = PixelFormat::from_channels(channels)?;
        let expected = expected_len(width, height, format)?;
        if data.len() != expected {
            panel_bail!(
                LOG_SOURCE, InvalidResource, "texture data is {} bytes, expected {} for {}x{}x{}",
                data.len(), expected, width, height, channels
            );
        }
        Ok(Self {
            width,
            height,
            format,
            data,
            sampler: SamplerSettings::default(),
        })
    }

    pub fn with_sampler(mut self, sampler: SamplerSettings) -> Self {
        self.sampler = sampler;
        self
    }
}

/// Reverse the row order of a packed image.
///
/// Framebuffer reads return rows bottom-up; images expect them top-down
/// (and vice versa).
pub fn flip_rows(pixels: &[u8], width: u32, height: u32, channels: u32) -> Result<Vec<u8>> {
    let format = PixelFormat::from_channels(channels)?;
    let expected = expected_len(width, height, format)?;
    if pixels.len() != expected {
        panel_bail!(
            LOG_SOURCE, InvalidResource, "capture buffer is {} bytes, expected {} for {}x{}x{}",
            pixels.len(), expected, width, height, channels
        );
    }
    if expected == 0 {
        return Ok(Vec::new());
    }

    let row_len = width as usize * channels as usize;
    Ok(pixels
        .chunks_exact(row_len)
        .rev()
        .flatten()
        .copied()
        .collect())
}

/// Flip a captured framebuffer in place.
pub fn flip_rows_in_place(pixels: &mut [u8], width: u32, height: u32, channels: u32) -> Result<()> {
    let format = PixelFormat::from_channels(channels)?;
    let expected = expected_len(width, height, format)?;
    if pixels.len() != expected {
        panel_bail!(
            LOG_SOURCE, InvalidResource, "capture buffer is {} bytes, expected {} for {}x{}x{}",
            pixels.len(), expected, width, height, channels
        );
    }

    let row_len = width as usize * channels as usize;
    let rows = height as usize;
    for top in 0..rows / 2 {
        let bottom = rows - 1 - top;
        let (head, tail) = pixels.split_at_mut(bottom * row_len);
        head[top * row_len..(top + 1) * row_len].swap_with_slice(&mut tail[..row_len]);
    }
    Ok(())
}

#[cfg(test)]
#[path = "pixels_tests.rs"]
mod tests;
