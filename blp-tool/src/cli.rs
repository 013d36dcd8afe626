//! Root CLI structure for blp-tool

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "blp-tool")]
#[command(about = "Inspect, validate and convert BLP2 textures", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Display information about a BLP file
    Info(InfoArgs),

    /// Decode a BLP file and save it as a regular image
    Convert(ConvertArgs),

    /// Validate BLP file integrity
    Validate(ValidateArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct InfoArgs {
    /// Path to the BLP file
    pub file: PathBuf,

    /// Show detailed mipmap information
    #[arg(long)]
    pub mipmaps: bool,

    /// Find the best mipmap level for a target size (WxH or a single edge)
    #[arg(long, value_name = "WxH")]
    pub best_for: Option<TargetSize>,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Input BLP file
    pub input: PathBuf,

    /// Output image file
    pub output: PathBuf,

    /// Mipmap level to extract
    #[arg(long, conflicts_with = "best_for")]
    pub level: Option<usize>,

    /// Extract the level that best matches a target size (WxH or a single edge)
    #[arg(long, value_name = "WxH")]
    pub best_for: Option<TargetSize>,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the BLP file
    pub file: PathBuf,

    /// Reject non-standard magic and unknown compression values
    #[arg(long)]
    pub strict: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Bmp,
    Tga,
    Tiff,
    Webp,
}

/// Target resolution for level selection
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl FromStr for TargetSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|e| format!("invalid size '{v}': {e}"))
        };
        match s.split_once(['x', 'X']) {
            Some((width, height)) => Ok(Self {
                width: parse(width)?,
                height: parse(height)?,
            }),
            None => {
                let edge = parse(s)?;
                Ok(Self {
                    width: edge,
                    height: edge,
                })
            }
        }
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
