//! Little-endian field readers for BLP parsing
//!
//! Every read names the field it is reading so that a truncated stream
//! reports where it ended.

use crate::error::{BlpError, Result};
use std::io::{self, Read, Seek, SeekFrom};

/// Field reading helpers available on every [`Read`] implementation
pub trait ByteReader: Read {
    /// Read exactly `N` bytes
    fn read_field<const N: usize>(&mut self, field: &str) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.read_exact(&mut buf)
            .map_err(|e| eof_as_malformed(e, field))?;
        Ok(buf)
    }

    /// Read a single unsigned 8-bit integer
    fn read_u8(&mut self, field: &str) -> Result<u8> {
        let [value] = self.read_field::<1>(field)?;
        Ok(value)
    }

    /// Read a single unsigned 32-bit integer in little-endian format
    fn read_u32_le(&mut self, field: &str) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_field(field)?))
    }

    /// Read a single signed 32-bit integer in little-endian format
    fn read_i32_le(&mut self, field: &str) -> Result<i32> {
        Ok(i32::from_le_bytes(self.read_field(field)?))
    }

    /// Read `N` consecutive little-endian unsigned 32-bit integers
    fn read_u32_array<const N: usize>(&mut self, field: &str) -> Result<[u32; N]> {
        let mut values = [0u32; N];
        for value in values.iter_mut() {
            *value = self.read_u32_le(field)?;
        }
        Ok(values)
    }

    /// Fill `buf` completely
    fn read_bytes_into(&mut self, buf: &mut [u8], field: &str) -> Result<()> {
        self.read_exact(buf).map_err(|e| eof_as_malformed(e, field))
    }
}

impl<R: Read + ?Sized> ByteReader for R {}

/// Total length of a seekable stream. The stream position is preserved.
pub fn stream_len<S: Seek + ?Sized>(stream: &mut S) -> Result<u64> {
    let position = stream.stream_position()?;
    let len = stream.seek(SeekFrom::End(0))?;
    stream.seek(SeekFrom::Start(position))?;
    Ok(len)
}

fn eof_as_malformed(error: io::Error, field: &str) -> BlpError {
    if error.kind() == io::ErrorKind::UnexpectedEof {
        BlpError::MalformedHeader(format!("stream ended while reading {field}"))
    } else {
        BlpError::Io(error)
    }
}
