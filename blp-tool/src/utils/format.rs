//! Formatting utilities

use blp_texture::{AlphaDepth, BlockFormat, ContentFormat};
use humansize::{DECIMAL, format_size};

/// Format file size in human-readable format
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, DECIMAL)
}

/// Format a compression ratio
pub fn format_compression_ratio(original: u64, compressed: u64) -> String {
    if compressed == 0 {
        "N/A".to_string()
    } else {
        format!("{:.2}:1", original as f64 / compressed as f64)
    }
}

/// Human-readable name of a content format
pub fn describe_content(format: ContentFormat) -> String {
    match format {
        ContentFormat::Palettized(depth) => match depth {
            AlphaDepth::None => "Palettized, no alpha".to_string(),
            depth => format!("Palettized, {}-bit alpha", depth.bits()),
        },
        ContentFormat::Block(BlockFormat::Bc1) => "S3TC BC1 (4 bpp)".to_string(),
        ContentFormat::Block(BlockFormat::Bc2) => {
            "S3TC BC2 (8 bpp, explicit alpha)".to_string()
        }
        ContentFormat::Block(BlockFormat::Bc3) => {
            "S3TC BC3 (8 bpp, interpolated alpha)".to_string()
        }
    }
}
