//! Linear RGB framebuffer.

use crate::Color;

/// Row-major grid of linear RGB colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Check if the framebuffer has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Add `other / samples` into this buffer, pixel by pixel.
    ///
    /// Panics if the two buffers differ in size.
    pub fn merge_scaled(&mut self, other: &Framebuffer, samples: u32) {
        assert_eq!(
            (self.width, self.height),
            (other.width, other.height),
            "framebuffer size mismatch"
        );

        let samples = samples as f32;
        for (dst, src) in self.pixels.iter_mut().zip(&other.pixels) {
            *dst += *src / samples;
        }
    }

    /// Flat view of the channels, `[r, g, b, r, g, b, ...]`.
    pub fn channels(&self) -> &[f32] {
        halo_math::as_channels(&self.pixels)
    }

    /// Convert to 8-bit RGB bytes by truncating `channel * 255`.
    ///
    /// Expects channels already clamped to [0, 1].
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.channels().iter().map(|&c| channel_to_u8(c)).collect()
    }
}

/// Convert one channel in [0, 1] to a byte.
#[inline]
pub fn channel_to_u8(c: f32) -> u8 {
    // `as` saturates, so out-of-range input still lands in 0..=255
    (c * 255.0) as u8
}
