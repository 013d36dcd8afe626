//! Public decode entry points: single levels, best match for a target size,
//! every stored level, and the per-level descriptor.

use crate::convert;
use crate::error::{BlpError, Result};
use crate::mipmap::best_matching_level;
use crate::parser::{read_level_bytes, read_palette};
use crate::types::*;
use log::*;
use std::collections::BTreeMap;
use std::io::{Read, Seek};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Content format resolved from the header, with the palette already loaded
enum Content {
    Block(BlockFormat),
    Palettized(AlphaDepth, Palette),
}

impl Content {
    fn load<R: Read + Seek>(stream: &mut R, header: &BlpHeader) -> Result<Self> {
        let content = match header.content_format()? {
            ContentFormat::Block(format) => Content::Block(format),
            ContentFormat::Palettized(depth) => Content::Palettized(depth, read_palette(stream)?),
        };
        Ok(content)
    }

    fn format(&self) -> ContentFormat {
        match self {
            Content::Block(format) => ContentFormat::Block(*format),
            Content::Palettized(depth, _) => ContentFormat::Palettized(*depth),
        }
    }

    fn read_level<R: Read + Seek>(
        &self,
        stream: &mut R,
        header: &BlpHeader,
        level: usize,
    ) -> Result<RawLevel> {
        let data = read_level_bytes(stream, header, level)?;
        let (width, height) = header.level_dimensions(level);
        let required = self.format().level_size(width, height);
        convert::check_level_size(level, width, height, required, data.len())?;

        let (format, data) = match self {
            Content::Block(format) => (PixelFormat::Block(*format), data),
            Content::Palettized(depth, palette) => {
                let pixels =
                    convert::palette::decode_indexed(&data, palette, *depth, width, height, level)?;
                (PixelFormat::Rgba8, convert::pack_rgba8(&pixels))
            }
        };
        trace!("Level {level}: {width}x{height} {format:?}, {} bytes", data.len());

        Ok(RawLevel {
            level,
            format,
            width,
            height,
            data,
        })
    }
}

/// Reads one mip level in its native representation.
///
/// Block-compressed levels keep their blocks; palettized levels come back
/// already assembled into RGBA8. The level must be stored: there is no
/// fallback to a lower level here, see [`decode_best_match`] for that.
///
/// A level holding fewer bytes than its dimensions need fails with
/// [`BlpError::TruncatedLevel`]; nothing is padded.
pub fn decode_level<R: Read + Seek>(
    stream: &mut R,
    header: &BlpHeader,
    level: usize,
) -> Result<RawLevel> {
    if level >= MAX_MIP_LEVELS {
        return Err(BlpError::LevelIndexOutOfRange(level));
    }
    Content::load(stream, header)?.read_level(stream, header, level)
}

/// Expands a level to an RGBA8 image
pub fn to_rgba8(raw: &RawLevel) -> Result<Rgba8Buffer> {
    let bytes = convert::expand(raw.format, &raw.data, raw.level, raw.width, raw.height)?;
    Rgba8Buffer::from_raw(raw.width, raw.height, bytes).ok_or(BlpError::RawConvert {
        width: raw.width,
        height: raw.height,
    })
}

/// Decodes the stored level that best fits `target_width` x `target_height`
pub fn decode_best_match<R: Read + Seek>(
    stream: &mut R,
    header: &BlpHeader,
    target_width: u32,
    target_height: u32,
) -> Result<Rgba8Buffer> {
    let level = best_matching_level(header, target_width, target_height)?;
    debug!("Decoding level {level} for target {target_width}x{target_height}");
    to_rgba8(&decode_level(stream, header, level)?)
}

/// Decodes every stored level to RGBA8, in level order
pub fn decode_all_levels<R: Read + Seek>(
    stream: &mut R,
    header: &BlpHeader,
) -> Result<Vec<(usize, Rgba8Buffer)>> {
    let raw = read_present_levels(stream, header)?;

    #[cfg(feature = "parallel")]
    let levels = raw.par_iter();
    #[cfg(not(feature = "parallel"))]
    let levels = raw.iter();

    levels
        .map(|level| Ok((level.level, to_rgba8(level)?)))
        .collect()
}

/// Collects every stored level in its native format together with its pitch
pub fn decode_descriptor<R: Read + Seek>(
    stream: &mut R,
    header: &BlpHeader,
) -> Result<ImageDescriptor> {
    let format = match header.content_format()? {
        ContentFormat::Block(format) => PixelFormat::Block(format),
        ContentFormat::Palettized(_) => PixelFormat::Rgba8,
    };

    let mut levels = BTreeMap::new();
    let mut pitches = BTreeMap::new();
    for raw in read_present_levels(stream, header)? {
        pitches.insert(raw.level, raw.pitch());
        levels.insert(raw.level, raw.data);
    }

    Ok(ImageDescriptor {
        format,
        width: header.width,
        height: header.height,
        levels,
        pitches,
    })
}

fn read_present_levels<R: Read + Seek>(
    stream: &mut R,
    header: &BlpHeader,
) -> Result<Vec<RawLevel>> {
    let content = Content::load(stream, header)?;
    header
        .present_levels()
        .map(|level| content.read_level(stream, header, level))
        .collect()
}
