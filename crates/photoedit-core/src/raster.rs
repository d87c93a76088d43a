//! Raster image type handed between the UI collaborator and the engine.

use serde::{Deserialize, Serialize};

use crate::color::{to_storage, to_working, WorkingPixel};
use crate::error::InvalidInput;

/// Supported 8-bit pixel layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    /// 3 bytes per pixel.
    Rgb8,
    /// 4 bytes per pixel, straight (non-premultiplied) alpha.
    #[default]
    Rgba8,
}

impl PixelFormat {
    /// Bytes per pixel.
    #[inline]
    pub fn channels(self) -> u8 {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }

    /// Look up the format for a channel count.
    pub fn from_channels(channels: u8) -> Option<Self> {
        match channels {
            3 => Some(PixelFormat::Rgb8),
            4 => Some(PixelFormat::Rgba8),
            _ => None,
        }
    }
}

/// An 8-bit raster in row-major, interleaved order.
///
/// The engine never mutates a raster it is given; every operation returns a
/// new one with the same dimensions and channel count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    channels: u8,
    pixels: Vec<u8>,
}

impl Raster {
    /// Create a raster in a supported format.
    ///
    /// The buffer length is not checked here; see [`Raster::validate`].
    pub fn new(width: u32, height: u32, format: PixelFormat, pixels: Vec<u8>) -> Self {
        Self::from_raw(width, height, format.channels(), pixels)
    }

    /// Create a raster from an arbitrary channel count.
    ///
    /// Used at the boundary where the caller's layout is not yet known to be
    /// supported; processing rejects anything [`Raster::validate`] refuses.
    pub fn from_raw(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels,
            pixels,
        }
    }

    /// Create a raster filled with one RGBA color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        // Oversized dimensions get an empty buffer, which validation rejects
        let len = byte_len(width, height, 4).unwrap_or(0);
        let pixels = rgba.iter().copied().cycle().take(len).collect();
        Self::new(width, height, PixelFormat::Rgba8, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Pixel layout, if the channel count is supported.
    pub fn format(&self) -> Option<PixelFormat> {
        PixelFormat::from_channels(self.channels)
    }

    /// Raw interleaved pixel bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the raster and return its pixel bytes.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Get the total number of pixels, saturating at `usize::MAX`.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Bytes of the pixel at (x, y), or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let stride = self.channels as usize;
        let start = (y as usize)
            .checked_mul(self.width as usize)?
            .checked_add(x as usize)?
            .checked_mul(stride)?;
        self.pixels.get(start..start.checked_add(stride)?)
    }

    /// Check the raster can be processed.
    ///
    /// Rejects zero dimensions, channel counts other than 3 or 4, dimensions
    /// whose byte size doesn't fit in memory, and buffers whose length doesn't
    /// match `width * height * channels`.
    pub fn validate(&self) -> Result<PixelFormat, InvalidInput> {
        if self.width == 0 || self.height == 0 {
            return Err(InvalidInput::ZeroDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let format = self
            .format()
            .ok_or(InvalidInput::UnsupportedChannels(self.channels))?;

        let expected = byte_len(self.width, self.height, self.channels).ok_or(
            InvalidInput::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            },
        )?;
        if self.pixels.len() != expected {
            return Err(InvalidInput::BufferLength {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(format)
    }

    /// Decode every pixel into working space.
    pub(crate) fn to_working(&self) -> Vec<WorkingPixel> {
        self.pixels
            .chunks_exact(self.channels as usize)
            .map(to_working)
            .collect()
    }

    /// Build a raster of `format` from working pixels, clamping as it goes.
    pub(crate) fn from_working(
        width: u32,
        height: u32,
        format: PixelFormat,
        working: &[WorkingPixel],
    ) -> Self {
        let channels = format.channels() as usize;
        let mut pixels = Vec::with_capacity(working.len() * channels);
        for &px in working {
            pixels.extend_from_slice(&to_storage(px)[..channels]);
        }
        Self::new(width, height, format, pixels)
    }
}

/// `width * height * channels`, or `None` if it overflows `usize`.
fn byte_len(width: u32, height: u32, channels: u8) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(channels as usize)
}

impl From<image::RgbaImage> for Raster {
    fn from(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self::new(width, height, PixelFormat::Rgba8, img.into_raw())
    }
}

impl From<image::RgbImage> for Raster {
    fn from(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self::new(width, height, PixelFormat::Rgb8, img.into_raw())
    }
}

impl Raster {
    /// Convert to an `image::RgbaImage`. RGB rasters get opaque alpha.
    ///
    /// Returns `None` if the raster fails validation.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        match self.validate().ok()? {
            PixelFormat::Rgba8 => {
                image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            }
            PixelFormat::Rgb8 => {
                let pixels = self
                    .pixels
                    .chunks_exact(3)
                    .flat_map(|p| [p[0], p[1], p[2], 255])
                    .collect();
                image::RgbaImage::from_raw(self.width, self.height, pixels)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_creation() {
        let img = Raster::new(100, 50, PixelFormat::Rgb8, vec![0u8; 100 * 50 * 3]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.format(), Some(PixelFormat::Rgb8));
        assert_eq!(img.validate(), Ok(PixelFormat::Rgb8));
    }

    #[test]
    fn test_filled() {
        let img = Raster::filled(2, 3, [1, 2, 3, 4]);
        assert_eq!(img.pixels().len(), 24);
        assert_eq!(img.pixel(1, 2), Some(&[1u8, 2, 3, 4][..]));
        assert_eq!(img.pixel(2, 0), None);
    }

    #[test]
    fn test_validate_zero_dimensions() {
        let img = Raster::new(0, 10, PixelFormat::Rgba8, vec![]);
        assert_eq!(
            img.validate(),
            Err(InvalidInput::ZeroDimensions {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn test_validate_unsupported_channels() {
        let img = Raster::from_raw(2, 2, 2, vec![0u8; 8]);
        assert_eq!(img.format(), None);
        assert_eq!(img.validate(), Err(InvalidInput::UnsupportedChannels(2)));
    }

    #[test]
    fn test_validate_buffer_length() {
        let img = Raster::new(4, 4, PixelFormat::Rgba8, vec![0u8; 60]);
        assert_eq!(
            img.validate(),
            Err(InvalidInput::BufferLength {
                expected: 64,
                actual: 60
            })
        );
    }

    #[test]
    fn test_validate_buffer_too_long() {
        let img = Raster::new(2, 2, PixelFormat::Rgb8, vec![0u8; 13]);
        assert_eq!(
            img.validate(),
            Err(InvalidInput::BufferLength {
                expected: 12,
                actual: 13
            })
        );
    }

    #[test]
    fn test_validate_oversized_dimensions() {
        let img = Raster::from_raw(u32::MAX, u32::MAX, 4, vec![]);
        assert_eq!(
            img.validate(),
            Err(InvalidInput::DimensionsTooLarge {
                width: u32::MAX,
                height: u32::MAX
            })
        );
        assert_eq!(
            img.pixel_count(),
            (u32::MAX as usize).saturating_mul(u32::MAX as usize)
        );
        assert_eq!(img.pixel(u32::MAX - 1, u32::MAX - 1), None);
    }

    #[test]
    fn test_filled_oversized_is_rejected() {
        let img = Raster::filled(u32::MAX, u32::MAX, [0, 0, 0, 255]);
        assert!(img.pixels().is_empty());
        assert!(img.validate().is_err());
    }

    #[test]
    fn test_byte_len() {
        assert_eq!(byte_len(4, 3, 4), Some(48));
        assert_eq!(byte_len(u32::MAX, u32::MAX, 3), None);
    }

    #[test]
    fn test_working_round_trip() {
        let pixels: Vec<u8> = (0..=255).collect();
        let img = Raster::new(8, 8, PixelFormat::Rgba8, pixels);
        let working = img.to_working();
        let back = Raster::from_working(8, 8, PixelFormat::Rgba8, &working);
        assert_eq!(back, img);
    }

    #[test]
    fn test_rgb_working_round_trip_drops_alpha() {
        let img = Raster::new(1, 2, PixelFormat::Rgb8, vec![1, 2, 3, 250, 251, 252]);
        let working = img.to_working();
        assert_eq!(working[0][3], 1.0);
        let back = Raster::from_working(1, 2, PixelFormat::Rgb8, &working);
        assert_eq!(back, img);
    }

    #[test]
    fn test_image_crate_conversions() {
        let rgba = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 40]));
        let raster = Raster::from(rgba.clone());
        assert_eq!(raster.format(), Some(PixelFormat::Rgba8));
        assert_eq!(raster.to_rgba_image(), Some(rgba));

        let rgb = image::RgbImage::from_pixel(2, 2, image::Rgb([7, 8, 9]));
        let raster = Raster::from(rgb);
        assert_eq!(raster.channels(), 3);
        let back = raster.to_rgba_image().unwrap();
        assert_eq!(back.get_pixel(1, 1), &image::Rgba([7, 8, 9, 255]));
    }

    #[test]
    fn test_invalid_raster_has_no_rgba_image() {
        let img = Raster::from_raw(2, 2, 5, vec![0u8; 20]);
        assert!(img.to_rgba_image().is_none());
    }
}
