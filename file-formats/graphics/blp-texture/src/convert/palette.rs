//! Indexed color decoding: one palette index byte per pixel followed by an
//! alpha plane of 0, 1, 4 or 8 bits per pixel.

use super::check_level_size;
use crate::error::Result;
use crate::tables::{ALPHA_1BIT, ALPHA_4BIT};
use crate::types::{AlphaDepth, ContentFormat, Palette};

/// Decode a palettized level into packed `0xAARRGGBB` pixels.
///
/// `data` holds `width * height` index bytes followed by the alpha plane.
/// Trailing bytes are ignored; a short buffer fails with
/// [`TruncatedLevel`](crate::BlpError::TruncatedLevel) before anything is
/// allocated.
pub fn decode_indexed(
    data: &[u8],
    palette: &Palette,
    depth: AlphaDepth,
    width: u32,
    height: u32,
    level: usize,
) -> Result<Vec<u32>> {
    let required = ContentFormat::Palettized(depth).level_size(width, height);
    check_level_size(level, width, height, required, data.len())?;

    // Both fit in `usize` once the whole level does
    let pixel_count = width as usize * height as usize;
    let alpha_size = depth.plane_size(pixel_count).unwrap_or_default();

    let (indices, rest) = data.split_at(pixel_count);
    let alpha = expand_alpha(&rest[..alpha_size], depth, pixel_count);

    let pixels = match alpha {
        Some(alpha) => indices
            .iter()
            .zip(alpha)
            .map(|(&index, a)| palette.rgb(index) | (u32::from(a) << 24))
            .collect(),
        None => indices
            .iter()
            .map(|&index| palette.rgb(index) | 0xFF00_0000)
            .collect(),
    };
    Ok(pixels)
}

/// Expand a packed alpha plane to one byte per pixel. Bits are consumed
/// least significant first; unused bits of the last byte are ignored.
fn expand_alpha(plane: &[u8], depth: AlphaDepth, pixel_count: usize) -> Option<Vec<u8>> {
    let alpha = match depth {
        AlphaDepth::None => return None,
        AlphaDepth::Bit1 => (0..pixel_count)
            .map(|i| ALPHA_1BIT[((plane[i / 8] >> (i % 8)) & 0x01) as usize])
            .collect(),
        AlphaDepth::Bit4 => (0..pixel_count)
            .map(|i| ALPHA_4BIT[((plane[i / 2] >> ((i % 2) * 4)) & 0x0F) as usize])
            .collect(),
        AlphaDepth::Bit8 => plane.to_vec(),
    };
    Some(alpha)
}
