//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use wardrobe_domain::Category;

/// How a suggestion is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown rendered with terminal styling
    Rendered,
    /// The markdown exactly as returned
    Raw,
    /// JSON summary of the wardrobe and the suggestion
    Json,
}

impl From<OutputFormat> for wardrobe_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Rendered => Self::Rendered,
            OutputFormat::Raw => Self::Raw,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for wardrobe-stylist
#[derive(Parser, Debug)]
#[command(name = "wardrobe-stylist")]
#[command(author, version, about = "Catalog your clothes and get outfit suggestions from Gemini")]
#[command(long_about = r#"
Wardrobe Stylist keeps a catalog of clothing photos (tops, bottoms, shoes)
and asks Gemini to put an outfit together from the items you select.

The API key is read from API_KEY (or GEMINI_API_KEY).

Configuration files are loaded from (in priority order):
1. WARDROBE_* environment variables
2. --config <path>       Explicit config file
3. ./wardrobe.toml       Project-level config
4. ~/.config/wardrobe-stylist/config.toml   Global config

Example:
  wardrobe-stylist --tops shirt.jpg --bottoms jeans.png --shoes boots.jpg --suggest
  wardrobe-stylist --tops shirt.jpg
"#)]
pub struct Cli {
    /// Add a top (can be specified multiple times)
    #[arg(long, value_name = "FILE")]
    pub tops: Vec<String>,

    /// Add a bottom (can be specified multiple times)
    #[arg(long, value_name = "FILE")]
    pub bottoms: Vec<String>,

    /// Add a pair of shoes (can be specified multiple times)
    #[arg(long, value_name = "FILE")]
    pub shoes: Vec<String>,

    /// Select every added item, print one suggestion and exit
    #[arg(short, long)]
    pub suggest: bool,

    /// Gemini model to use
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Write diagnostics to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Image sources given on the command line, in category order
    pub fn intake_sources(&self) -> Vec<(Category, &str)> {
        [
            (Category::Tops, &self.tops),
            (Category::Bottoms, &self.bottoms),
            (Category::Shoes, &self.shoes),
        ]
        .into_iter()
        .flat_map(|(category, sources)| sources.iter().map(move |s| (category, s.as_str())))
        .collect()
    }
}
