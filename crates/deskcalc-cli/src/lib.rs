//! deskcalc CLI library
//!
//! Argument parsing, configuration, token sessions and output rendering
//! for the `deskcalc` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
mod session;

pub use commands::{Cli, ColorArg, FormatArg};
pub use config::{load_display_config, CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Printer, Snapshot};
pub use session::{Session, Step};
