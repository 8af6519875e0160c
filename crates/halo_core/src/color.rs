//! Vector and color values as they appear in scene files.
//!
//! Every vector field accepts three spellings:
//!
//! - `[x, y, z]`: a numeric triple
//! - `0.5`: a scalar, splatted to all three components
//! - `"#ff8800"`, `"ff8800"` or `"#f80"`: a hex color, each channel / 255

use halo_math::Vec3;
use serde::{de, Deserialize, Deserializer};
use thiserror::Error;

/// Errors from parsing a hex color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Unsupported color format: {0:?} (expected #rgb or #rrggbb)")]
    UnsupportedFormat(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VectorValue {
    Triple([f32; 3]),
    Scalar(f32),
    Hex(String),
}

/// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb` into a linear color in [0, 1].
pub fn parse_hex_color(text: &str) -> Result<Vec3, ColorError> {
    let unsupported = || ColorError::UnsupportedFormat(text.to_string());

    let digits = text.strip_prefix('#').unwrap_or(text);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(unsupported());
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(unsupported()),
    };

    let hex = u32::from_str_radix(&expanded, 16).map_err(|_| unsupported())?;
    let r = ((hex >> 16) & 0xFF) as f32;
    let g = ((hex >> 8) & 0xFF) as f32;
    let b = (hex & 0xFF) as f32;

    Ok(Vec3::new(r, g, b) / 255.0)
}

/// `deserialize_with` adapter for `Vec3` fields.
pub(crate) fn deserialize_vec3<'de, D>(deserializer: D) -> Result<Vec3, D::Error>
where
    D: Deserializer<'de>,
{
    match VectorValue::deserialize(deserializer)? {
        VectorValue::Triple(v) => Ok(Vec3::from_array(v)),
        VectorValue::Scalar(s) => Ok(Vec3::splat(s)),
        VectorValue::Hex(text) => parse_hex_color(&text).map_err(de::Error::custom),
    }
}
