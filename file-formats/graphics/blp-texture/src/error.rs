//! Error handling for BLP decoding

use std::io;
use thiserror::Error;

/// Errors that can occur while decoding a BLP texture
#[derive(Debug, Error)]
pub enum BlpError {
    /// The stream is too short for the fixed header or the palette, or a
    /// declared mip level lies outside the stream
    #[error("Malformed BLP header: {0}")]
    MalformedHeader(String),

    /// Magic value is not `BLP2` (only reported in strict mode)
    #[error("Unexpected magic value {0:?}, expected \"BLP2\"")]
    InvalidMagic([u8; 4]),

    /// Compression and alpha compression do not name a known pixel format
    #[error("Unsupported format: compression {compression}, alpha compression {alpha_compression}")]
    UnsupportedFormat {
        /// Raw compression byte from the header
        compression: u8,
        /// Raw alpha compression byte from the header
        alpha_compression: u8,
    },

    /// Palette alpha depth is not one of 0, 1, 4 or 8
    #[error("Unsupported alpha depth {0}, expected 0, 1, 4 or 8")]
    UnsupportedAlphaDepth(u8),

    /// Neither the requested mip level nor any level below it is present
    #[error("No decodable mip level at or below level {0}")]
    NoDecodableLevel(usize),

    /// Mip level index is outside the 16 stored levels
    #[error("Mip level index {0} is out of range (0..16)")]
    LevelIndexOutOfRange(usize),

    /// A mip level holds fewer bytes than its dimensions require
    #[error("Mip level {level} needs {expected} bytes but only {actual} are stored")]
    TruncatedLevel {
        /// Index of the short level
        level: usize,
        /// Bytes the level dimensions require
        expected: usize,
        /// Bytes declared in the header
        actual: usize,
    },

    /// Decoded pixels could not be wrapped into an RGBA image
    #[error("Failed to assemble {width}x{height} RGBA buffer")]
    RawConvert {
        /// Width of the level
        width: u32,
        /// Height of the level
        height: u32,
    },

    /// An I/O error from the underlying stream
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Type alias for Results from BLP operations
pub type Result<T> = std::result::Result<T, BlpError>;
