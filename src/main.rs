//! Initials Avatar CLI
//!
//! Usage:
//!   initials-avatar [OPTIONS] <NAME>
//!
//! Options:
//!   -c, --config <FILE>   Options file (TOML format)
//!       --shape <SHAPE>   Background shape: circle or rect
//!       --data-uri        Print a base64 data URI instead of SVG
//!   -v, --verbose         Enable debug logging
//!   -h, --help            Print help

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use initials_avatar::{Avatar, AvatarOptions, OptionsError, Shape, Title};

#[derive(Parser)]
#[command(name = "initials-avatar")]
#[command(about = "Render a deterministic initials avatar as SVG")]
struct Cli {
    /// Name to derive initials and color from
    name: String,

    /// Options file (TOML format); flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of distinct colors, must divide 360
    #[arg(long)]
    colors: Option<u32>,

    /// Maximum number of initials
    #[arg(long)]
    limit: Option<usize>,

    /// Background shape
    #[arg(long, value_enum)]
    shape: Option<ShapeArg>,

    /// Width and height in pixels
    #[arg(long)]
    size: Option<u32>,

    /// Title text for the image
    #[arg(long, conflicts_with = "title_from_name")]
    title: Option<String>,

    /// Use the name as the image title
    #[arg(long)]
    title_from_name: bool,

    /// Font size multiplier between 0 and 2
    #[arg(long)]
    font_size_multiplier: Option<f64>,

    /// Text opacity between 0 and 1
    #[arg(long)]
    text_opacity: Option<f64>,

    /// Print a base64 data URI instead of SVG
    #[arg(long)]
    data_uri: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ShapeArg {
    Circle,
    Rect,
}

impl From<ShapeArg> for Shape {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Circle => Shape::Circle,
            ShapeArg::Rect => Shape::Rect,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match build_avatar(&cli) {
        Ok(avatar) => {
            if cli.data_uri {
                println!("{}", avatar.to_data_uri());
            } else {
                println!("{}", avatar);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Load the options file, apply flags on top and validate
fn build_avatar(cli: &Cli) -> Result<Avatar, OptionsError> {
    let options = match &cli.config {
        Some(path) => AvatarOptions::from_file(path)?,
        None => AvatarOptions::default(),
    };
    let options = apply_flags(options, cli);
    Ok(Avatar::new(&cli.name, options)?)
}

/// Override file options with any flags given on the command line
fn apply_flags(mut options: AvatarOptions, cli: &Cli) -> AvatarOptions {
    if let Some(colors) = cli.colors {
        options = options.with_colors(colors);
    }
    if let Some(limit) = cli.limit {
        options = options.with_limit(limit);
    }
    if let Some(shape) = cli.shape {
        options = options.with_shape(shape.into());
    }
    if let Some(size) = cli.size {
        options = options.with_size(size);
    }
    if let Some(title) = &cli.title {
        options = options.with_title_text(title.clone());
    } else if cli.title_from_name {
        options = options.with_title(Title::DerivedFromName);
    }
    if let Some(multiplier) = cli.font_size_multiplier {
        options = options.with_font_size_multiplier(multiplier);
    }
    if let Some(opacity) = cli.text_opacity {
        options = options.with_text_opacity(opacity);
    }
    options
}
