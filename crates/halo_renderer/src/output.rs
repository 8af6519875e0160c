//! Image file output.

use std::path::Path;

use image::RgbImage;

use crate::{Framebuffer, RenderError};

/// Convert a post-processed framebuffer to an 8-bit RGB image.
///
/// Fails if `pixels` does not hold exactly `width * height` entries.
pub fn to_rgb_image(framebuffer: &Framebuffer) -> Result<RgbImage, RenderError> {
    let size_error = || RenderError::BufferSize {
        width: framebuffer.width,
        height: framebuffer.height,
        len: framebuffer.pixels.len(),
    };
    if framebuffer.pixels.len() != framebuffer.width as usize * framebuffer.height as usize {
        return Err(size_error());
    }
    RgbImage::from_raw(framebuffer.width, framebuffer.height, framebuffer.to_rgb8())
        .ok_or_else(size_error)
}

/// Save a post-processed framebuffer as a PNG.
///
/// The format is chosen from the file extension, so `.png` is the usual
/// choice; any format enabled in the `image` crate features works.
pub fn save_png<P: AsRef<Path>>(framebuffer: &Framebuffer, path: P) -> Result<(), RenderError> {
    let path = path.as_ref();
    log::info!("Saving to {}...", path.display());
    to_rgb_image(framebuffer)?.save(path)?;
    Ok(())
}
