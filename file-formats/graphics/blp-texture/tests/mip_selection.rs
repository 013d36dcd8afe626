//! Integration tests for level selection, header validation and bounds checks

mod common;

use blp_texture::{
    BlockFormat, BlpError, ParseMode, best_matching_level, decode_best_match, decode_level,
    parse_header, parse_header_with_mode,
};
use common::{TextureBuilder, block_chain, solid_bc1};
use pretty_assertions::assert_eq;
use std::io::Cursor;

#[test]
fn test_best_match_picks_covering_level() {
    let mut texture = TextureBuilder::block(BlockFormat::Bc1, 64, 64);
    for level in block_chain(BlockFormat::Bc1, 64, 64) {
        texture = texture.level(level);
    }
    let mut stream = texture.cursor();
    let header = parse_header(&mut stream).unwrap();

    assert_eq!(best_matching_level(&header, 20, 20).unwrap(), 1);
    let image = decode_best_match(&mut stream, &header, 20, 20).unwrap();
    assert_eq!(image.dimensions(), (32, 32));

    let image = decode_best_match(&mut stream, &header, 1, 1).unwrap();
    assert_eq!(image.dimensions(), (2, 2));
}

#[test]
fn test_best_match_falls_back_to_stored_level() {
    // Only level 0 is stored although the header enables mip levels
    let texture = TextureBuilder::block(BlockFormat::Bc1, 8, 8)
        .level(vec![0; 32])
        .empty_level()
        .empty_level();
    let mut stream = texture.cursor();
    let header = parse_header(&mut stream).unwrap();

    let image = decode_best_match(&mut stream, &header, 1, 1).unwrap();
    assert_eq!(image.dimensions(), (8, 8));
}

#[test]
fn test_best_match_without_levels() {
    let texture = TextureBuilder::block(BlockFormat::Bc1, 8, 8);
    let mut stream = texture.cursor();
    let header = parse_header(&mut stream).unwrap();

    assert!(matches!(
        decode_best_match(&mut stream, &header, 8, 8),
        Err(BlpError::NoDecodableLevel(0))
    ));
}

#[test]
fn test_levels_ignored_without_mipmap_flag() {
    let mut texture = TextureBuilder::block(BlockFormat::Bc1, 8, 4)
        .level(vec![0; 16])
        .level(solid_bc1(0xFFFF).to_vec());
    texture.mip_levels = Some(0);
    let mut stream = texture.cursor();
    let header = parse_header(&mut stream).unwrap();

    assert_eq!(header.present_levels().collect::<Vec<_>>(), vec![0]);
    assert!(matches!(
        decode_level(&mut stream, &header, 1),
        Err(BlpError::NoDecodableLevel(1))
    ));
    let image = decode_best_match(&mut stream, &header, 1, 1).unwrap();
    assert_eq!(image.dimensions(), (8, 4));
}

#[test]
fn test_level_outside_stream() {
    let mut data = TextureBuilder::block(BlockFormat::Bc1, 4, 4)
        .level(solid_bc1(0).to_vec())
        .build();
    // Point level 0 past the end of the stream
    data[20..24].copy_from_slice(&10_000u32.to_le_bytes());
    let mut stream = Cursor::new(data);
    let header = parse_header(&mut stream).unwrap();

    assert!(matches!(
        decode_level(&mut stream, &header, 0),
        Err(BlpError::MalformedHeader(_))
    ));
}

#[test]
fn test_level_size_past_end_of_stream() {
    let mut data = TextureBuilder::block(BlockFormat::Bc1, 4, 4)
        .level(solid_bc1(0).to_vec())
        .build();
    // Grow the declared size of level 0 by one byte
    data[84..88].copy_from_slice(&9u32.to_le_bytes());
    let mut stream = Cursor::new(data);
    let header = parse_header(&mut stream).unwrap();

    assert!(matches!(
        decode_level(&mut stream, &header, 0),
        Err(BlpError::MalformedHeader(_))
    ));
}

#[test]
fn test_stream_shorter_than_header() {
    let data = TextureBuilder::block(BlockFormat::Bc1, 4, 4).build();
    let mut stream = Cursor::new(data[..100].to_vec());
    assert!(matches!(
        parse_header(&mut stream),
        Err(BlpError::MalformedHeader(_))
    ));
}

#[test]
fn test_palette_past_end_of_stream() {
    let mut texture = TextureBuilder::block(BlockFormat::Bc1, 4, 4);
    texture.compression = 1;
    texture.alpha_depth = 0;
    let mut stream = texture.cursor();
    let header = parse_header(&mut stream).unwrap();

    assert!(matches!(
        decode_level(&mut stream, &header, 0),
        Err(BlpError::MalformedHeader(_))
    ));
}

#[test_log::test]
fn test_permissive_and_strict_modes() {
    let mut texture = TextureBuilder::block(BlockFormat::Bc1, 4, 4).level(solid_bc1(0).to_vec());
    texture.magic = *b"BLP1";
    let data = texture.build();

    assert!(parse_header(&mut Cursor::new(data.clone())).is_ok());
    assert!(matches!(
        parse_header_with_mode(&mut Cursor::new(data), ParseMode::Strict),
        Err(BlpError::InvalidMagic(_))
    ));
}

#[test]
fn test_unsupported_block_format() {
    let mut texture = TextureBuilder::block(BlockFormat::Bc1, 4, 4).level(solid_bc1(0).to_vec());
    texture.alpha_compression = 3;
    let data = texture.build();

    // Permissive parsing accepts the header; decoding reports the format
    let mut stream = Cursor::new(data.clone());
    let header = parse_header(&mut stream).unwrap();
    assert!(matches!(
        decode_level(&mut stream, &header, 0),
        Err(BlpError::UnsupportedFormat {
            compression: 2,
            alpha_compression: 3
        })
    ));

    assert!(matches!(
        parse_header_with_mode(&mut Cursor::new(data), ParseMode::Strict),
        Err(BlpError::UnsupportedFormat { .. })
    ));
}
