//! `info` command: header summary, stored levels and best-match level

use super::open_blp;
use crate::cli::InfoArgs;
use crate::utils::{describe_content, format_bytes, format_compression_ratio, mipmap_table};
use anyhow::{Context, Result};
use blp_texture::{best_matching_level, parse_header};

pub fn execute(args: InfoArgs) -> Result<()> {
    let mut stream = open_blp(&args.file)?;
    let header = parse_header(&mut stream)
        .with_context(|| format!("Failed to parse BLP header: {}", args.file.display()))?;

    println!("BLP File Information: {}", args.file.display());
    println!("=====================================");

    println!("Magic: {}", String::from_utf8_lossy(&header.magic));
    println!("Version: {}", header.version);
    println!("Dimensions: {}x{}", header.width, header.height);
    match header.content_format() {
        Ok(format) => println!("Content: {}", describe_content(format)),
        Err(e) => println!("Content: unsupported ({e})"),
    }
    println!(
        "Compression: {} (alpha depth {}, alpha compression {})",
        header.compression, header.alpha_depth, header.alpha_compression
    );
    println!("Has Mipmaps: {}", header.has_mipmaps());

    let levels = header.mipmap_info();
    println!("Stored Levels: {}", levels.len());

    let stored: u64 = levels.iter().map(|info| u64::from(info.size)).sum();
    let expanded: u64 = levels
        .iter()
        .map(|info| u64::from(info.width) * u64::from(info.height) * 4)
        .sum();
    println!(
        "Level Data: {} ({} as RGBA8, ratio {})",
        format_bytes(stored),
        format_bytes(expanded),
        format_compression_ratio(expanded, stored)
    );

    if let Some(target) = args.best_for {
        println!("\nBest Mipmap for {target} target:");
        println!("-------------------------------");
        let level = best_matching_level(&header, target.width, target.height)
            .context("No stored level can serve this target")?;
        let (width, height) = header.level_dimensions(level);
        println!("Best Level: {level} ({width}x{height})");
    }

    if args.mipmaps {
        println!("\nMipmap Information:");
        println!("-------------------");
        mipmap_table(&levels).printstd();
    }

    Ok(())
}
