/// BLP file header structures
pub mod header;
/// Decoded level and descriptor types
pub mod image;
/// Color palette of palettized textures
pub mod palette;

pub use self::image::*;
pub use header::*;
pub use palette::*;
