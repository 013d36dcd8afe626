use super::header::BlockFormat;
use crate::convert;
use crate::debug;
use crate::error::Result;
use crate::mipmap;
use custom_debug::Debug;
use std::collections::BTreeMap;

/// Decoded 8-bit-per-channel RGBA image, ready for upload or saving
pub type Rgba8Buffer = ::image::RgbaImage;

/// Pixel layout of decoded level bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PixelFormat {
    /// Still block compressed
    Block(BlockFormat),
    /// Four bytes per pixel in R, G, B, A order
    Rgba8,
}

impl PixelFormat {
    /// Block size in bytes, `None` for expanded formats
    pub fn block_size(self) -> Option<usize> {
        match self {
            PixelFormat::Block(format) => Some(format.block_size()),
            PixelFormat::Rgba8 => None,
        }
    }

    /// Bytes per row of pixels (per row of blocks for compressed formats)
    pub fn pitch(self, width: u32) -> usize {
        match self {
            PixelFormat::Block(format) => width.div_ceil(4) as usize * format.block_size(),
            PixelFormat::Rgba8 => width as usize * 4,
        }
    }

    /// Whether the bytes still need block decompression
    pub fn is_compressed(self) -> bool {
        matches!(self, PixelFormat::Block(_))
    }
}

impl From<BlockFormat> for PixelFormat {
    fn from(format: BlockFormat) -> Self {
        PixelFormat::Block(format)
    }
}

/// A single mip level in its stored (format-native) representation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawLevel {
    /// Mip level index
    pub level: usize,
    /// Layout of `data`
    pub format: PixelFormat,
    /// Width of the level in pixels
    pub width: u32,
    /// Height of the level in pixels
    pub height: u32,
    /// Compressed blocks or RGBA8 pixels
    #[debug(with = debug::trimmed_collection_fmt)]
    pub data: Vec<u8>,
}

impl RawLevel {
    /// Bytes per row (per row of blocks for compressed formats)
    pub fn pitch(&self) -> usize {
        self.format.pitch(self.width)
    }
}

/// Summary of one stored mip level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MipmapInfo {
    /// Mip level index
    pub level: usize,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Byte offset in the stream
    pub offset: u32,
    /// Byte size in the stream
    pub size: u32,
}

/// All stored levels of a texture in one pixel format, with per-level
/// row pitch. Owns its buffers and holds nothing from the source stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    /// Layout of every level buffer
    pub format: PixelFormat,
    /// Width of level 0
    pub width: u32,
    /// Height of level 0
    pub height: u32,
    /// Level index to level bytes
    #[debug(with = debug::level_map_fmt)]
    pub levels: BTreeMap<usize, Vec<u8>>,
    /// Level index to row pitch in bytes
    pub pitches: BTreeMap<usize, usize>,
}

impl ImageDescriptor {
    /// Block size in bytes, `None` once expanded
    pub fn block_size(&self) -> Option<usize> {
        self.format.block_size()
    }

    /// Dimensions of the given mip level
    pub fn level_dimensions(&self, level: usize) -> (u32, u32) {
        mipmap::level_dimensions(self.width, self.height, level)
    }

    /// Bytes of the given level, if stored
    pub fn level(&self, level: usize) -> Option<&[u8]> {
        self.levels.get(&level).map(Vec::as_slice)
    }

    /// Expands every level to RGBA8. Already expanded descriptors are copied.
    pub fn to_rgba8(&self) -> Result<ImageDescriptor> {
        let mut levels = BTreeMap::new();
        let mut pitches = BTreeMap::new();
        for (&level, data) in &self.levels {
            let (width, height) = self.level_dimensions(level);
            let pixels = convert::expand(self.format, data, level, width, height)?;
            levels.insert(level, pixels);
            pitches.insert(level, PixelFormat::Rgba8.pitch(width));
        }

        Ok(ImageDescriptor {
            format: PixelFormat::Rgba8,
            width: self.width,
            height: self.height,
            levels,
            pitches,
        })
    }
}
