//! Post-process pass: optional filmic tone mapping, then clamp to [0, 1].

use crate::{Color, Framebuffer};
use rayon::prelude::*;

// ACES filmic curve fit
// https://knarkowicz.wordpress.com/2016/01/06/aces-filmic-tone-mapping-curve/
const ACES_A: f32 = 2.51;
const ACES_B: f32 = 0.03;
const ACES_C: f32 = 2.43;
const ACES_D: f32 = 0.59;
const ACES_E: f32 = 0.14;

/// Apply the ACES filmic curve component-wise.
#[inline]
pub fn tonemap_aces(x: Color) -> Color {
    (x * (ACES_A * x + ACES_B)) / (x * (ACES_C * x + ACES_D) + ACES_E)
}

/// Clamp every channel to [0, 1].
#[inline]
pub fn clamp_01(color: Color) -> Color {
    color.clamp(Color::ZERO, Color::ONE)
}

/// Tone map (if enabled) and clamp every pixel in place.
pub fn post_process(framebuffer: &mut Framebuffer, tone_mapping: bool) {
    framebuffer.pixels.par_iter_mut().for_each(|pixel| {
        let color = if tone_mapping { tonemap_aces(*pixel) } else { *pixel };
        *pixel = clamp_01(color);
    });
}
