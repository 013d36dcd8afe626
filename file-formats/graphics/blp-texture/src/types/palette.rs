use super::header::PALETTE_SIZE;
use crate::debug;
use custom_debug::Debug;

/// 256-entry color table of palettized textures.
///
/// Entries are stored on disk as BGRA bytes, so read as little-endian words
/// they are `0xAARRGGBB`. The stored alpha byte is ignored by the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Palette {
    /// Packed colors
    #[debug(with = debug::trimmed_collection_fmt)]
    pub colors: [u32; PALETTE_SIZE],
}

impl Palette {
    /// Creates a palette from packed colors
    pub fn new(colors: [u32; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    /// Color for a palette index with the alpha byte cleared
    #[inline]
    pub fn rgb(&self, index: u8) -> u32 {
        self.colors[index as usize] & 0x00FF_FFFF
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new([0; PALETTE_SIZE])
    }
}
