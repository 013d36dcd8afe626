//! Bounds checking of header-declared mip level spans

use crate::error::{BlpError, Result};
use log::error;

/// Check that `size` bytes at `offset` lie within a stream of `stream_len`
/// bytes. Arithmetic is done in 64 bits so hostile offsets cannot wrap.
pub fn check_bounds(stream_len: u64, offset: u32, size: u32, level: usize) -> Result<()> {
    let start = u64::from(offset);
    let end = start + u64::from(size);

    if start >= stream_len {
        error!("Offset of mip level {level} is out of bounds! {start} >= {stream_len}");
        return Err(BlpError::MalformedHeader(format!(
            "mip level {level} starts at {start}, past the end of a {stream_len} byte stream"
        )));
    }

    if end > stream_len {
        error!("Offset+size of mip level {level} is out of bounds! {end} > {stream_len}");
        return Err(BlpError::MalformedHeader(format!(
            "mip level {level} spans {start}..{end}, past the end of a {stream_len} byte stream"
        )));
    }

    Ok(())
}
