//! CLI configuration

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use deskcalc::core::DisplayConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - warnings and errors
    #[default]
    Normal,
    /// Verbose - engine transitions
    Verbose,
    /// Debug - everything
    Debug,
}

impl Verbosity {
    /// Maps `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Default `tracing` filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "warn,deskcalc=debug",
            Self::Debug => "debug,deskcalc=trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Output format
    pub format: OutputFormat,
    /// Print after every token
    pub trace: bool,
    /// Tokens are keyboard keys
    pub keys: bool,
    /// Stop on the first calculator error
    pub strict: bool,
    /// Display width policy handed to the engine
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set output format
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set trace mode
    #[must_use]
    pub const fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Set keyboard-key interpretation
    #[must_use]
    pub const fn with_keys(mut self, keys: bool) -> Self {
        self.keys = keys;
        self
    }

    /// Set strict mode
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set display configuration
    #[must_use]
    pub const fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }
}

/// Loads a display configuration from a YAML file
///
/// Missing keys fall back to the defaults.
pub fn load_display_config(path: &Path) -> CliResult<DisplayConfig> {
    let text = std::fs::read_to_string(path)?;
    let config: DisplayConfig = serde_yaml_ng::from_str(&text)
        .map_err(|e| CliError::config(format!("{}: {e}", path.display())))?;
    config.validate()?;
    Ok(config)
}
