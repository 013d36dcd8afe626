use super::bounds::check_bounds;
use super::reader::{ByteReader, stream_len};
use crate::error::{BlpError, Result};
use crate::types::*;
use log::*;
use std::io::{Read, Seek, SeekFrom};

/// Read the 256-entry palette that follows the fixed header
pub fn read_palette<R: Read + Seek>(stream: &mut R) -> Result<Palette> {
    stream.seek(SeekFrom::Start(HEADER_SIZE as u64))?;
    let colors = stream.read_u32_array::<PALETTE_SIZE>("palette")?;
    Ok(Palette::new(colors))
}

/// Read the stored bytes of one mip level after checking that the declared
/// span lies inside the stream
pub fn read_level_bytes<R: Read + Seek>(
    stream: &mut R,
    header: &BlpHeader,
    level: usize,
) -> Result<Vec<u8>> {
    if level >= MAX_MIP_LEVELS {
        return Err(BlpError::LevelIndexOutOfRange(level));
    }
    if !header.is_level_present(level) {
        return Err(BlpError::NoDecodableLevel(level));
    }

    let offset = header.mip_offsets[level];
    let size = header.mip_sizes[level];
    let len = stream_len(stream)?;
    check_bounds(len, offset, size, level)?;

    trace!("Reading mip level {level}: {size} bytes at offset {offset}");
    stream.seek(SeekFrom::Start(u64::from(offset)))?;
    let mut data = vec![0u8; size as usize];
    stream.read_bytes_into(&mut data, "mip level data")?;
    Ok(data)
}
