//! Output formatting

use crate::error::CliResult;
use console::style;
use deskcalc::core::{ArithmeticEngine, CalculatorState, Operation, Phase};
use serde::{Deserialize, Serialize};

/// Output format for display snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON lines
    Json,
}

/// What the rendering side sees after one token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Token that produced this snapshot, absent for the final read-out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Display text
    pub display: String,
    /// Operator to highlight
    pub active_operator: Option<Operation>,
    /// State-machine node
    pub phase: Phase,
    /// Full engine state
    pub state: CalculatorState,
}

impl Snapshot {
    /// Captures the engine after `token`
    #[must_use]
    pub fn capture(engine: &ArithmeticEngine, token: Option<&str>) -> Self {
        Self {
            token: token.map(str::to_string),
            display: engine.display_text(),
            active_operator: engine.active_operator(),
            phase: engine.phase(),
            state: engine.state().clone(),
        }
    }
}

/// Renders snapshots and error notices
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    format: OutputFormat,
    color: bool,
}

impl Printer {
    /// Creates a printer
    #[must_use]
    pub const fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// Renders one snapshot as a single line
    pub fn render(&self, snapshot: &Snapshot) -> CliResult<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(snapshot)?),
            OutputFormat::Text => Ok(self.render_text(snapshot)),
        }
    }

    fn render_text(&self, snapshot: &Snapshot) -> String {
        let mut line = String::new();
        if let Some(token) = &snapshot.token {
            line.push_str(&format!("{token:>12} │ "));
        }
        if self.color {
            line.push_str(&style(&snapshot.display).bold().to_string());
        } else {
            line.push_str(&snapshot.display);
        }
        if let Some(op) = snapshot.active_operator {
            line.push_str(&format!(" [{}]", op.symbol()));
        }
        line
    }

    /// Renders a user-facing error notice
    #[must_use]
    pub fn notice(&self, message: &str) -> String {
        if self.color {
            style(message).red().to_string()
        } else {
            message.to_string()
        }
    }
}
