/// Block decompression
pub mod dxtn;
/// Palette lookup with alpha plane expansion
pub mod palette;

use crate::error::{BlpError, Result};
use crate::types::PixelFormat;
use log::*;

/// Serialize packed `0xAARRGGBB` pixels as bytes in R, G, B, A order
pub fn pack_rgba8(pixels: &[u32]) -> Vec<u8> {
    pixels
        .iter()
        .flat_map(|&pixel| {
            let [b, g, r, a] = pixel.to_le_bytes();
            [r, g, b, a]
        })
        .collect()
}

/// Check that `available` stored bytes cover a `width` x `height` level
/// needing `required` bytes. `None` means the size does not fit in `usize`.
pub fn check_level_size(
    level: usize,
    width: u32,
    height: u32,
    required: Option<usize>,
    available: usize,
) -> Result<()> {
    let Some(expected) = required else {
        return Err(BlpError::MalformedHeader(format!(
            "mip level {level} of {width}x{height} is too large to decode"
        )));
    };
    if available < expected {
        debug!("Level {level} ({width}x{height}) has {available} bytes, needs {expected}");
        return Err(BlpError::TruncatedLevel {
            level,
            expected,
            actual: available,
        });
    }
    Ok(())
}

/// Expand the bytes of mip level `level` in `format` into RGBA8 bytes.
///
/// Block data must cover every block of the level. RGBA8 input must hold
/// exactly `width * height` pixels and is copied.
pub fn expand(
    format: PixelFormat,
    data: &[u8],
    level: usize,
    width: u32,
    height: u32,
) -> Result<Vec<u8>> {
    match format {
        PixelFormat::Rgba8 => {
            let expected = (width as usize)
                .checked_mul(height as usize)
                .and_then(|pixels| pixels.checked_mul(4));
            if expected != Some(data.len()) {
                return Err(BlpError::RawConvert { width, height });
            }
            Ok(data.to_vec())
        }
        PixelFormat::Block(block) => {
            check_level_size(
                level,
                width,
                height,
                block.compressed_size(width, height),
                data.len(),
            )?;
            let pixels = dxtn::decompress(block, data, width, height)
                .ok_or(BlpError::RawConvert { width, height })?;
            Ok(pack_rgba8(&pixels))
        }
    }
}
