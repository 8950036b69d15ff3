//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// deskcalc: feed keypad tokens to a desktop-style calculator
///
/// Tokens are names (`7`, `decimal`, `add`, `equals`, `toggle-sign`, ...)
/// or single keyboard keys (`+`, `*`, `=`, `Escape`). With no tokens,
/// whitespace-separated tokens are read from stdin.
#[derive(Parser, Debug)]
#[command(name = "deskcalc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tokens to apply, in order
    pub tokens: Vec<String>,

    /// Interpret every token as a keyboard key
    #[arg(short, long)]
    pub keys: bool,

    /// Print the display after every token instead of only at the end
    #[arg(short, long)]
    pub trace: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: FormatArg,

    /// Display configuration file (YAML)
    #[arg(short, long, env = "DESKCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Display width override
    #[arg(long)]
    pub width: Option<usize>,

    /// Exit with failure on the first calculator error
    #[arg(long)]
    pub strict: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Color output (auto, always, never)
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorArg,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Display text only
    #[default]
    Text,
    /// One JSON snapshot per line
    Json,
}

impl From<FormatArg> for crate::output::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
