use crate::error::{BlpError, Result};
use crate::mipmap;
use crate::types::image::MipmapInfo;
use log::*;
use std::fmt;

/// Magic value at the start of every BLP2 file
pub const BLP_MAGIC: [u8; 4] = *b"BLP2";

/// Size of the fixed header in bytes
pub const HEADER_SIZE: usize = 148;

/// Number of mip level slots stored in the header
pub const MAX_MIP_LEVELS: usize = 16;

/// Number of entries in the color palette
pub const PALETTE_SIZE: usize = 256;

/// `compression` value for indexed (palettized) content
pub const COMPRESSION_PALETTE: u8 = 1;

/// `compression` value for block-compressed content
pub const COMPRESSION_BLOCK: u8 = 2;

/// Block compression algorithm used for a block-compressed texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BlockFormat {
    /// BC1 (DXT1), 8 bytes per block, no explicit alpha
    Bc1,
    /// BC2 (DXT3), 16 bytes per block, explicit 4-bit alpha
    Bc2,
    /// BC3 (DXT5), 16 bytes per block, interpolated alpha
    Bc3,
}

impl BlockFormat {
    /// Maps the header's alpha compression byte to a block format
    pub fn from_alpha_compression(value: u8) -> Option<Self> {
        match value {
            0 => Some(BlockFormat::Bc1),
            1 => Some(BlockFormat::Bc2),
            7 => Some(BlockFormat::Bc3),
            _ => None,
        }
    }

    /// Returns the block size in bytes for this format
    pub fn block_size(self) -> usize {
        match self {
            BlockFormat::Bc1 => 8,
            BlockFormat::Bc2 | BlockFormat::Bc3 => 16,
        }
    }

    /// Number of bytes needed to cover a `width` x `height` image with blocks,
    /// `None` when that does not fit in `usize`
    pub fn compressed_size(self, width: u32, height: u32) -> Option<usize> {
        (width.div_ceil(4) as usize)
            .checked_mul(height.div_ceil(4) as usize)?
            .checked_mul(self.block_size())
    }
}

/// Bit depth of the separate alpha plane of palettized content
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlphaDepth {
    /// No alpha plane, every pixel is opaque
    None,
    /// One bit per pixel
    Bit1,
    /// One nibble per pixel
    Bit4,
    /// One byte per pixel
    Bit8,
}

impl AlphaDepth {
    /// Number of alpha bits per pixel
    pub fn bits(self) -> u8 {
        match self {
            AlphaDepth::None => 0,
            AlphaDepth::Bit1 => 1,
            AlphaDepth::Bit4 => 4,
            AlphaDepth::Bit8 => 8,
        }
    }

    /// Size of the alpha plane for `pixels` pixels. Partial trailing bytes
    /// count as whole bytes.
    pub fn plane_size(self, pixels: usize) -> Option<usize> {
        pixels
            .checked_mul(self.bits() as usize)
            .map(|bits| bits.div_ceil(8))
    }
}

impl TryFrom<u8> for AlphaDepth {
    type Error = BlpError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(AlphaDepth::None),
            1 => Ok(AlphaDepth::Bit1),
            4 => Ok(AlphaDepth::Bit4),
            8 => Ok(AlphaDepth::Bit8),
            _ => Err(BlpError::UnsupportedAlphaDepth(value)),
        }
    }
}

/// How the pixel data of every mip level is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentFormat {
    /// 8-bit palette indices followed by an alpha plane
    Palettized(AlphaDepth),
    /// 4x4 compressed blocks
    Block(BlockFormat),
}

impl ContentFormat {
    /// Stored bytes a `width` x `height` level needs, `None` when that does
    /// not fit in `usize`
    pub fn level_size(self, width: u32, height: u32) -> Option<usize> {
        match self {
            ContentFormat::Block(format) => format.compressed_size(width, height),
            ContentFormat::Palettized(depth) => {
                let pixels = (width as usize).checked_mul(height as usize)?;
                pixels.checked_add(depth.plane_size(pixels)?)
            }
        }
    }
}

/// Fixed-size BLP2 header. Fields keep their on-disk values so that the
/// header can be inspected even when the content format is unsupported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlpHeader {
    /// Magic value, normally `BLP2`
    pub magic: [u8; 4],
    /// Content version field
    pub version: u32,
    /// 2 for block compression, anything else is treated as a palette
    pub compression: u8,
    /// Bits of alpha per pixel for palettized content
    pub alpha_depth: u8,
    /// Block format selector for block-compressed content
    pub alpha_compression: u8,
    /// Zero when only level 0 is stored
    pub mip_levels: u8,
    /// Width of level 0 in pixels
    pub width: u32,
    /// Height of level 0 in pixels
    pub height: u32,
    /// Byte offset of each mip level, zero when absent
    pub mip_offsets: [u32; MAX_MIP_LEVELS],
    /// Byte size of each mip level, zero when absent
    pub mip_sizes: [u32; MAX_MIP_LEVELS],
}

impl BlpHeader {
    /// Whether the texture stores mip levels beyond level 0
    pub fn has_mipmaps(&self) -> bool {
        self.mip_levels != 0
    }

    /// Resolves the compression bytes into the format used by every level
    pub fn content_format(&self) -> Result<ContentFormat> {
        if self.compression == COMPRESSION_BLOCK {
            return BlockFormat::from_alpha_compression(self.alpha_compression)
                .map(ContentFormat::Block)
                .ok_or(BlpError::UnsupportedFormat {
                    compression: self.compression,
                    alpha_compression: self.alpha_compression,
                });
        }

        if self.compression != COMPRESSION_PALETTE {
            warn!(
                "Unexpected compression value {}, decoding as palette",
                self.compression
            );
        }
        let depth = AlphaDepth::try_from(self.alpha_depth)?;
        Ok(ContentFormat::Palettized(depth))
    }

    /// Dimensions of the given mip level
    pub fn level_dimensions(&self, level: usize) -> (u32, u32) {
        mipmap::level_dimensions(self.width, self.height, level)
    }

    /// Whether the given level is stored. Levels above 0 only count when the
    /// header enables mip levels.
    pub fn is_level_present(&self, level: usize) -> bool {
        if level >= MAX_MIP_LEVELS || (level > 0 && !self.has_mipmaps()) {
            return false;
        }
        self.mip_offsets[level] != 0 && self.mip_sizes[level] != 0
    }

    /// Iterates over the indices of all stored levels
    pub fn present_levels(&self) -> impl Iterator<Item = usize> + '_ {
        (0..MAX_MIP_LEVELS).filter(|&level| self.is_level_present(level))
    }

    /// Summary of every stored level
    pub fn mipmap_info(&self) -> Vec<MipmapInfo> {
        self.present_levels()
            .map(|level| {
                let (width, height) = self.level_dimensions(level);
                MipmapInfo {
                    level,
                    width,
                    height,
                    offset: self.mip_offsets[level],
                    size: self.mip_sizes[level],
                }
            })
            .collect()
    }
}

impl fmt::Display for BlpHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BLP texture ({}x{}, compression {}, alpha depth {}, alpha compression {}, {} levels)",
            self.width,
            self.height,
            self.compression,
            self.alpha_depth,
            self.alpha_compression,
            self.present_levels().count()
        )
    }
}
