//! Render configuration.

use thiserror::Error;

/// Reasons a `RenderSettings` can't be rendered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Image size must be non-zero (got {width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Sample count must be at least 1")]
    NoSamples,

    #[error("Thread count must be at least 1")]
    NoThreads,
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Total samples per pixel, split across all threads
    pub samples: u32,
    /// Maximum bounces after the camera ray's first hit
    pub bounces: u32,
    /// Requested worker thread count (clamped to `samples`)
    pub threads: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            samples: 16,
            bounces: 5,
            threads: 4,
        }
    }
}

impl RenderSettings {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples: u32, bounces: u32) -> Self {
        self.samples = samples;
        self.bounces = bounces;
        self
    }

    /// Set worker thread count.
    pub fn with_threads(mut self, threads: u32) -> Self {
        self.threads = threads;
        self
    }

    /// Total pixel count.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check the settings describe a renderable image.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.width == 0 || self.height == 0 {
            return Err(SettingsError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples == 0 {
            return Err(SettingsError::NoSamples);
        }
        if self.threads == 0 {
            return Err(SettingsError::NoThreads);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = RenderSettings::default();
        assert_eq!(settings.pixel_count(), 256 * 256);
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn test_builder() {
        let settings = RenderSettings::default()
            .with_resolution(640, 480)
            .with_quality(64, 8)
            .with_threads(12);

        assert_eq!(
            settings,
            RenderSettings {
                width: 640,
                height: 480,
                samples: 64,
                bounces: 8,
                threads: 12,
            }
        );
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        let base = RenderSettings::default();

        assert_eq!(
            base.clone().with_resolution(0, 10).validate(),
            Err(SettingsError::EmptyImage { width: 0, height: 10 })
        );
        assert_eq!(base.clone().with_quality(0, 5).validate(), Err(SettingsError::NoSamples));
        assert_eq!(base.clone().with_threads(0).validate(), Err(SettingsError::NoThreads));

        // Zero bounces is a valid (direct-only) render
        assert_eq!(base.with_quality(1, 0).validate(), Ok(()));
    }
}
