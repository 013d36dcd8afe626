//! Decoder for BLP2 textures.
//!
//! Reads the fixed header, picks a mip level, and turns palettized or
//! BC1/BC2/BC3 block-compressed level data into RGBA8 buffers.
//!
//! # Examples
//!
//! ```no_run
//! use blp_texture::{decode_best_match, parse_header};
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let mut stream = BufReader::new(File::open("Interface/Icons/INV_Misc_QuestionMark.blp")?);
//! let header = parse_header(&mut stream)?;
//! let image = decode_best_match(&mut stream, &header, 64, 64)?;
//! println!("{header} -> {}x{}", image.width(), image.height());
//! # Ok::<(), blp_texture::BlpError>(())
//! ```

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Pixel expansion for palettized and block-compressed data
pub mod convert;
/// Trimmed `Debug` output for large buffers
pub mod debug;
/// Decode entry points
pub mod decode;
/// Error types
pub mod error;
/// Mip level dimensions and selection
pub mod mipmap;
/// Reading the header, palette and level bytes
pub mod parser;
/// Alpha lookup tables
pub mod tables;
/// Header, palette and image types
pub mod types;

pub use decode::{decode_all_levels, decode_best_match, decode_descriptor, decode_level, to_rgba8};
pub use error::{BlpError, Result};
pub use mipmap::best_matching_level;
pub use parser::{ParseMode, parse_header, parse_header_with_mode};
pub use types::*;
