//! Command implementations

pub mod convert;
pub mod info;
pub mod validate;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Open a BLP file for buffered, seekable reading
pub fn open_blp(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open BLP file: {}", path.display()))?;
    Ok(BufReader::new(file))
}
