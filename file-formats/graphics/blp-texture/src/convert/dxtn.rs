//! BC1/BC2/BC3 (DXT1/DXT3/DXT5) block decompression.
//!
//! Every block covers 4x4 pixels and decodes into 16 packed `0xAARRGGBB`
//! words. Blocks are laid out row-major, `ceil(width / 4)` per row. Pixels
//! of edge blocks that fall outside the image are decoded and dropped.
//!
//! All scratch state lives in per-block stack arrays, so any number of
//! threads may decode concurrently.

use crate::tables::ALPHA_4BIT;
use crate::types::BlockFormat;

const OPAQUE: u32 = 0xFF00_0000;

/// Decompress a whole level into `width * height` packed pixels.
///
/// Returns `None` when `data` does not hold every block of the level.
pub fn decompress(
    format: BlockFormat,
    data: &[u8],
    width: u32,
    height: u32,
) -> Option<Vec<u32>> {
    if data.len() < format.compressed_size(width, height)? {
        return None;
    }

    let width = width as usize;
    let height = height as usize;
    let mut pixels = vec![0u32; width * height];
    if width == 0 || height == 0 {
        return Some(pixels);
    }

    let blocks_wide = width.div_ceil(4);
    let row_bytes = blocks_wide * format.block_size();
    // One row of blocks covers four rows of pixels
    let band = width * 4;

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        pixels
            .par_chunks_mut(band)
            .enumerate()
            .for_each(|(by, rows)| decode_block_row(format, data, by * row_bytes, width, rows));
    }

    #[cfg(not(feature = "parallel"))]
    for (by, rows) in pixels.chunks_mut(band).enumerate() {
        decode_block_row(format, data, by * row_bytes, width, rows);
    }

    Some(pixels)
}

fn decode_block_row(
    format: BlockFormat,
    data: &[u8],
    row_start: usize,
    width: usize,
    rows: &mut [u32],
) {
    let block_size = format.block_size();
    let row_count = rows.len() / width;

    for bx in 0..width.div_ceil(4) {
        let block = read_block(data, row_start + bx * block_size, block_size);
        let decoded = decode_block(format, &block);

        for y in 0..row_count {
            for x in 0..4 {
                let px = bx * 4 + x;
                if px < width {
                    rows[y * width + px] = decoded[y * 4 + x];
                }
            }
        }
    }
}

/// Copy one block out of `data`. BC1 blocks fill the first 8 bytes.
fn read_block(data: &[u8], start: usize, block_size: usize) -> [u8; 16] {
    let mut block = [0u8; 16];
    block[..block_size].copy_from_slice(&data[start..start + block_size]);
    block
}

/// Decode one block. BC1 uses the first 8 bytes of `block`.
pub fn decode_block(format: BlockFormat, block: &[u8; 16]) -> [u32; 16] {
    match format {
        BlockFormat::Bc1 => color_block(&block[..8]).map(|color| color | OPAQUE),
        BlockFormat::Bc2 => {
            let alpha = le_bits(&block[..8]);
            let colors = color_block(&block[8..]);
            std::array::from_fn(|i| {
                let a = ALPHA_4BIT[((alpha >> (4 * i)) & 0x0F) as usize];
                colors[i] | (u32::from(a) << 24)
            })
        }
        BlockFormat::Bc3 => {
            let table = alpha_table(block[0], block[1]);
            let indices = le_bits(&block[2..8]);
            let colors = color_block(&block[8..]);
            std::array::from_fn(|i| {
                let a = table[((indices >> (3 * i)) & 0x07) as usize];
                colors[i] | (u32::from(a) << 24)
            })
        }
    }
}

/// Decode the 8-byte color part shared by all three formats. Alpha bits of
/// the result are zero.
fn color_block(bytes: &[u8]) -> [u32; 16] {
    let c1 = u16::from_le_bytes([bytes[0], bytes[1]]);
    let c2 = u16::from_le_bytes([bytes[2], bytes[3]]);
    let e1 = expand_565(c1);
    let e2 = expand_565(c2);

    // Endpoints are compared packed, not expanded
    let colors = if c1 > c2 {
        [
            pack(e1),
            pack(e2),
            pack(mix(e1, e2, |a, b| (2 * a + b) / 3)),
            pack(mix(e1, e2, |a, b| (a + 2 * b) / 3)),
        ]
    } else {
        [
            pack(e1),
            pack(e2),
            pack(mix(e1, e2, |a, b| (a + b) / 2)),
            0,
        ]
    };

    let indices = le_bits(&bytes[4..8]);
    std::array::from_fn(|i| colors[((indices >> (2 * i)) & 0x03) as usize])
}

/// RGB565 to 8 bits per channel by bit replication. Components are kept in
/// bit order: bits 0-4, bits 5-10, bits 11-15.
fn expand_565(color: u16) -> [u8; 3] {
    let c0 = (color & 0x1F) as u8;
    let c1 = ((color >> 5) & 0x3F) as u8;
    let c2 = ((color >> 11) & 0x1F) as u8;
    [(c0 << 3) | (c0 >> 2), (c1 << 2) | (c1 >> 4), (c2 << 3) | (c2 >> 2)]
}

fn mix(a: [u8; 3], b: [u8; 3], f: impl Fn(u16, u16) -> u16) -> [u8; 3] {
    std::array::from_fn(|i| f(u16::from(a[i]), u16::from(b[i])) as u8)
}

fn pack(color: [u8; 3]) -> u32 {
    u32::from(color[0]) | (u32::from(color[1]) << 8) | (u32::from(color[2]) << 16)
}

/// Interpolated BC3 alpha values for the two endpoints
fn alpha_table(a1: u8, a2: u8) -> [u8; 8] {
    let (w1, w2) = (u16::from(a1), u16::from(a2));
    let mut table = [a1, a2, 0, 0, 0, 0, 0, 0xFF];
    if a1 > a2 {
        for i in 0..6u16 {
            table[i as usize + 2] = (((6 - i) * w1 + (1 + i) * w2) / 7) as u8;
        }
    } else {
        for i in 0..4u16 {
            table[i as usize + 2] = (((4 - i) * w1 + (1 + i) * w2) / 5) as u8;
        }
    }
    table
}

/// Little-endian integer from up to 8 bytes
fn le_bits(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .rev()
        .fold(0, |acc, &byte| (acc << 8) | u64::from(byte))
}
