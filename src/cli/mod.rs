//! CLI module for AgroVision
//!
//! Provides command-line interface parsing and handling for the agrovision binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod commands;
pub mod output;
pub mod repl;

use agrovision_core::{PhRange, RainfallLevel, Season, SoilType, Weather};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AgroVision - agriculture assistant client
///
/// Crop recommendation, plant disease detection and an agriculture chatbot,
/// backed by the AgroVision prediction service.
#[derive(Parser, Debug)]
#[command(
    name = "agrovision",
    author = "AgroVision <dev@agrovision.ai>",
    version,
    about = "AgroVision - crop recommendation, disease detection and farming chat",
    long_about = "Command-line client for the AgroVision backend.\n\n\
                  Crop and disease results are cached locally and passed to the chatbot\n\
                  as context for follow-up questions.",
    after_help = "EXAMPLES:\n    \
                  agrovision crop --soil-type sandy --season summer\n    \
                  agrovision disease leaf.jpg\n    \
                  agrovision chat \"How often should I water millet?\"\n    \
                  agrovision chat                 # interactive session\n    \
                  agrovision cache show"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "agrovision.toml", global = true)]
    pub config: PathBuf,

    /// Backend origin (overrides config and AGRO_API_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Cache file (overrides config and AGRO_CACHE_PATH)
    #[arg(long, global = true)]
    pub cache: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend crops for the given field conditions
    ///
    /// Values are matched case-insensitively; see `agrovision options`.
    Crop {
        /// Soil type
        #[arg(long, default_value_t = SoilType::default())]
        soil_type: SoilType,

        /// Growing season
        #[arg(long, default_value_t = Season::default())]
        season: Season,

        /// Expected rainfall
        #[arg(long, default_value_t = RainfallLevel::default())]
        rainfall: RainfallLevel,

        /// Prevailing weather
        #[arg(long, default_value_t = Weather::default())]
        weather: Weather,

        /// Soil pH band
        #[arg(long, default_value_t = PhRange::default())]
        ph: PhRange,
    },

    /// Detect plant disease from a leaf image (jpg, jpeg or png)
    Disease {
        /// Image file to upload
        image: PathBuf,
    },

    /// Ask the agriculture chatbot
    ///
    /// With a question, asks once and exits. Without, starts an interactive
    /// session (type /help inside it for commands).
    Chat {
        /// Question to ask
        question: Option<String>,
    },

    /// Inspect or clear cached predictions
    #[command(subcommand)]
    Cache(CacheCommands),

    /// Check that the backend is reachable
    Status,

    /// List the allowed values of each crop form field
    Options,
}

/// Cache management subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show the cached crop and disease responses
    Show,

    /// Forget both cached responses
    Clear,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
