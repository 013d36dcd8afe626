use super::reader::ByteReader;
use crate::error::{BlpError, Result};
use crate::types::*;
use log::*;
use std::io::{Read, Seek, SeekFrom};

/// How strictly the header is validated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// Accept any magic value and treat unknown compression values as a
    /// palette. Matches how the format is read by the game.
    #[default]
    Permissive,
    /// Require `BLP2` magic and a known compression/alpha combination
    Strict,
}

/// Parse the fixed header in permissive mode
pub fn parse_header<R: Read + Seek>(stream: &mut R) -> Result<BlpHeader> {
    parse_header_with_mode(stream, ParseMode::Permissive)
}

/// Parse the fixed header from the start of `stream`
pub fn parse_header_with_mode<R: Read + Seek>(
    stream: &mut R,
    mode: ParseMode,
) -> Result<BlpHeader> {
    stream.seek(SeekFrom::Start(0))?;

    let magic = stream.read_field::<4>("magic")?;
    if magic != BLP_MAGIC {
        match mode {
            ParseMode::Strict => return Err(BlpError::InvalidMagic(magic)),
            ParseMode::Permissive => warn!(
                "Unexpected magic value {}, reading as BLP2 anyway",
                String::from_utf8_lossy(&magic)
            ),
        }
    }

    let version = stream.read_u32_le("version field")?;
    let compression = stream.read_u8("compression field")?;
    let alpha_depth = stream.read_u8("alpha_depth field")?;
    let alpha_compression = stream.read_u8("alpha_compression field")?;
    let mip_levels = stream.read_u8("mip_levels field")?;
    let width = read_dimension(stream, "width")?;
    let height = read_dimension(stream, "height")?;
    let mip_offsets = stream.read_u32_array::<MAX_MIP_LEVELS>("mip offsets")?;
    let mip_sizes = stream.read_u32_array::<MAX_MIP_LEVELS>("mip sizes")?;

    let header = BlpHeader {
        magic,
        version,
        compression,
        alpha_depth,
        alpha_compression,
        mip_levels,
        width,
        height,
        mip_offsets,
        mip_sizes,
    };
    trace!("{header:?}");

    if mode == ParseMode::Strict {
        validate_strict(&header)?;
    }

    debug!("Parsed {header}");
    Ok(header)
}

fn read_dimension<R: Read>(stream: &mut R, field: &str) -> Result<u32> {
    let value = stream.read_i32_le(field)?;
    u32::try_from(value)
        .map_err(|_| BlpError::MalformedHeader(format!("negative {field} {value}")))
}

fn validate_strict(header: &BlpHeader) -> Result<()> {
    if header.compression != COMPRESSION_PALETTE && header.compression != COMPRESSION_BLOCK {
        return Err(BlpError::UnsupportedFormat {
            compression: header.compression,
            alpha_compression: header.alpha_compression,
        });
    }
    header.content_format()?;
    Ok(())
}
