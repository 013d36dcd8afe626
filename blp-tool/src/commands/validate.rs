//! `validate` command: parse, bounds-check and decode every stored level

use super::open_blp;
use crate::cli::ValidateArgs;
use anyhow::Result;
use blp_texture::{
    BLP_MAGIC, BlpHeader, COMPRESSION_BLOCK, COMPRESSION_PALETTE, ParseMode, decode_level,
    parse_header_with_mode, to_rgba8,
};
use std::io::{Read, Seek};

#[derive(Default)]
struct Report {
    errors: Vec<String>,
    warnings: Vec<String>,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    println!("Validating BLP file: {}", args.file.display());

    let mode = if args.strict {
        ParseMode::Strict
    } else {
        ParseMode::Permissive
    };
    let mut stream = open_blp(&args.file)?;
    let header = match parse_header_with_mode(&mut stream, mode) {
        Ok(header) => header,
        Err(e) => {
            println!("✗ Failed to parse BLP header: {e}");
            return Err(e.into());
        }
    };

    let mut report = Report::default();
    check_header(&header, &mut report);
    check_levels(&mut stream, &header, &mut report);

    if report.errors.is_empty() && report.warnings.is_empty() {
        println!("✓ BLP file is valid");
        return Ok(());
    }

    if !report.errors.is_empty() {
        println!("\nErrors:");
        for error in &report.errors {
            println!("  ✗ {error}");
        }
    }

    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &report.warnings {
            println!("  ⚠ {warning}");
        }
    }

    if report.errors.is_empty() {
        println!("\n✓ BLP file is valid with warnings");
        Ok(())
    } else {
        anyhow::bail!(
            "BLP file validation failed with {} error(s)",
            report.errors.len()
        )
    }
}

fn check_header(header: &BlpHeader, report: &mut Report) {
    if header.magic != BLP_MAGIC {
        report.warnings.push(format!(
            "Non-standard magic {:?}",
            String::from_utf8_lossy(&header.magic)
        ));
    }

    if header.compression != COMPRESSION_PALETTE && header.compression != COMPRESSION_BLOCK {
        report.warnings.push(format!(
            "Unknown compression value {}, decoded as palette",
            header.compression
        ));
    }

    if header.width == 0 || header.height == 0 {
        report
            .errors
            .push("Invalid dimensions (0 width or height)".to_string());
    } else if !header.width.is_power_of_two() || !header.height.is_power_of_two() {
        report
            .warnings
            .push("Dimensions are not powers of 2 (non-standard but may work)".to_string());
    }
}

fn check_levels<R: Read + Seek>(stream: &mut R, header: &BlpHeader, report: &mut Report) {
    if let Err(e) = header.content_format() {
        report.errors.push(e.to_string());
        return;
    }

    let present: Vec<usize> = header.present_levels().collect();
    if present.is_empty() {
        report.errors.push("No mip level is stored".to_string());
        return;
    }

    if header.has_mipmaps() {
        let expected = (0..)
            .position(|level| header.level_dimensions(level) == (1, 1))
            .map_or(1, |last| last + 1);
        if present.len() < expected {
            report.warnings.push(format!(
                "Incomplete mipmap chain: expected {expected} levels, got {}",
                present.len()
            ));
        }
    }

    for level in present {
        let (width, height) = header.level_dimensions(level);
        match decode_level(stream, header, level).and_then(|raw| to_rgba8(&raw)) {
            Ok(_) => log::debug!("Level {level} ({width}x{height}) decoded"),
            Err(e) => report.errors.push(format!("Level {level}: {e}")),
        }
    }
}
