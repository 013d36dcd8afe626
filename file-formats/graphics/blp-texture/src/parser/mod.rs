/// Bounds checks for header-declared level spans
pub mod bounds;
mod header;
mod level;
/// Little-endian field readers
pub mod reader;

pub use header::{ParseMode, parse_header, parse_header_with_mode};
pub use level::{read_level_bytes, read_palette};
