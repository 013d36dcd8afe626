//! Common test utilities: builds BLP byte streams in memory

#![allow(dead_code)]

use blp_texture::{
    BlockFormat, COMPRESSION_BLOCK, COMPRESSION_PALETTE, HEADER_SIZE, MAX_MIP_LEVELS,
    PALETTE_SIZE,
};
use std::io::Cursor;

/// Builder for in-memory BLP2 files
#[derive(Debug, Clone)]
pub struct TextureBuilder {
    pub magic: [u8; 4],
    pub compression: u8,
    pub alpha_depth: u8,
    pub alpha_compression: u8,
    pub mip_levels: Option<u8>,
    pub width: i32,
    pub height: i32,
    pub palette: Option<[u32; PALETTE_SIZE]>,
    /// Level data by index; `None` leaves the slot empty
    pub levels: Vec<Option<Vec<u8>>>,
}

impl TextureBuilder {
    pub fn block(format: BlockFormat, width: i32, height: i32) -> Self {
        let alpha_compression = match format {
            BlockFormat::Bc1 => 0,
            BlockFormat::Bc2 => 1,
            BlockFormat::Bc3 => 7,
        };
        Self {
            magic: *b"BLP2",
            compression: COMPRESSION_BLOCK,
            alpha_depth: 8,
            alpha_compression,
            mip_levels: None,
            width,
            height,
            palette: None,
            levels: Vec::new(),
        }
    }

    pub fn palettized(palette: [u32; PALETTE_SIZE], alpha_depth: u8, width: i32, height: i32) -> Self {
        Self {
            magic: *b"BLP2",
            compression: COMPRESSION_PALETTE,
            alpha_depth,
            alpha_compression: 0,
            mip_levels: None,
            width,
            height,
            palette: Some(palette),
            levels: Vec::new(),
        }
    }

    pub fn level(mut self, data: Vec<u8>) -> Self {
        self.levels.push(Some(data));
        self
    }

    pub fn empty_level(mut self) -> Self {
        self.levels.push(None);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&self.magic);
        data.extend_from_slice(&1u32.to_le_bytes());
        let mip_levels = self
            .mip_levels
            .unwrap_or(if self.levels.len() > 1 { 1 } else { 0 });
        data.extend_from_slice(&[
            self.compression,
            self.alpha_depth,
            self.alpha_compression,
            mip_levels,
        ]);
        data.extend_from_slice(&self.width.to_le_bytes());
        data.extend_from_slice(&self.height.to_le_bytes());

        let offsets_at = data.len();
        data.resize(HEADER_SIZE, 0);

        if let Some(palette) = &self.palette {
            for color in palette {
                data.extend_from_slice(&color.to_le_bytes());
            }
        }

        let mut offsets = [0u32; MAX_MIP_LEVELS];
        let mut sizes = [0u32; MAX_MIP_LEVELS];
        for (level, bytes) in self.levels.iter().enumerate() {
            if let Some(bytes) = bytes {
                offsets[level] = data.len() as u32;
                sizes[level] = bytes.len() as u32;
                data.extend_from_slice(bytes);
            }
        }

        for (i, (offset, size)) in offsets.iter().zip(&sizes).enumerate() {
            let at = offsets_at + i * 4;
            data[at..at + 4].copy_from_slice(&offset.to_le_bytes());
            let at = offsets_at + MAX_MIP_LEVELS * 4 + i * 4;
            data[at..at + 4].copy_from_slice(&size.to_le_bytes());
        }
        data
    }

    pub fn cursor(&self) -> Cursor<Vec<u8>> {
        Cursor::new(self.build())
    }
}

/// One BC1 color block (8 bytes)
pub fn color_block(c1: u16, c2: u16, indices: u32) -> [u8; 8] {
    let mut block = [0u8; 8];
    block[0..2].copy_from_slice(&c1.to_le_bytes());
    block[2..4].copy_from_slice(&c2.to_le_bytes());
    block[4..8].copy_from_slice(&indices.to_le_bytes());
    block
}

/// A block of one solid RGB565 color
pub fn solid_bc1(color: u16) -> [u8; 8] {
    color_block(color, color, 0)
}

/// Block data for every level of a full mip chain of `format`
pub fn block_chain(format: BlockFormat, width: u32, height: u32) -> Vec<Vec<u8>> {
    (0..MAX_MIP_LEVELS)
        .map(|level| blp_texture::mipmap::level_dimensions(width, height, level))
        .scan(false, |done, (w, h)| {
            if *done {
                return None;
            }
            *done = w == 1 && h == 1;
            Some(vec![0x5A; format.compressed_size(w, h).unwrap()])
        })
        .collect()
}
