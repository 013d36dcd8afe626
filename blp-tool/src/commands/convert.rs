//! `convert` command: decode one level and save it through `image`

use super::open_blp;
use crate::cli::{ConvertArgs, OutputFormat};
use anyhow::{Context, Result};
use blp_texture::{decode_best_match, decode_level, parse_header, to_rgba8};
use image::{DynamicImage, ImageFormat};

impl From<OutputFormat> for ImageFormat {
    fn from(value: OutputFormat) -> ImageFormat {
        match value {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Bmp => ImageFormat::Bmp,
            OutputFormat::Tga => ImageFormat::Tga,
            OutputFormat::Tiff => ImageFormat::Tiff,
            OutputFormat::Webp => ImageFormat::WebP,
        }
    }
}

pub fn execute(args: ConvertArgs) -> Result<()> {
    let format = match args.format {
        Some(format) => format.into(),
        None => ImageFormat::from_path(&args.output).with_context(|| {
            format!(
                "Failed to determine output format of {}. Please specify with --format",
                args.output.display()
            )
        })?,
    };

    let mut stream = open_blp(&args.input)?;
    let header = parse_header(&mut stream)
        .with_context(|| format!("Failed to parse BLP header: {}", args.input.display()))?;

    let image = match args.best_for {
        Some(target) => decode_best_match(&mut stream, &header, target.width, target.height)
            .with_context(|| format!("Failed to decode the best level for {target}"))?,
        None => {
            let level = args.level.unwrap_or(0);
            let raw = decode_level(&mut stream, &header, level)
                .with_context(|| format!("Failed to read mipmap level {level}"))?;
            to_rgba8(&raw).with_context(|| format!("Failed to expand mipmap level {level}"))?
        }
    };
    log::info!(
        "Decoded {}x{} image, saving as {format:?}",
        image.width(),
        image.height()
    );

    // JPEG has no alpha channel
    let image = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(image).to_rgb8()),
        _ => DynamicImage::ImageRgba8(image),
    };
    image
        .save_with_format(&args.output, format)
        .with_context(|| format!("Failed to save image: {}", args.output.display()))?;

    println!(
        "✓ Converted {} to {}",
        args.input.display(),
        args.output.display()
    );
    Ok(())
}
