//! Token session: resolves raw CLI words and feeds them to the engine

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Snapshot;
use deskcalc::core::ArithmeticEngine;
use deskcalc::input::Token;
use deskcalc::CalcError;
use tracing::{info, warn};

/// Outcome of feeding one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Token applied; snapshot after it
    Applied(Snapshot),
    /// Token applied but the engine reported an error
    Failed {
        /// Snapshot after recovery
        snapshot: Snapshot,
        /// The reported error
        error: CalcError,
    },
    /// Word maps to no token
    Ignored(String),
}

/// One calculator run
#[derive(Debug)]
pub struct Session {
    engine: ArithmeticEngine,
    keys: bool,
    strict: bool,
}

impl Session {
    /// Creates a session from CLI configuration
    pub fn new(config: &CliConfig) -> CliResult<Self> {
        let engine = ArithmeticEngine::with_config(config.display)?;
        Ok(Self {
            engine,
            keys: config.keys,
            strict: config.strict,
        })
    }

    /// The engine driven by this session
    #[must_use]
    pub fn engine(&self) -> &ArithmeticEngine {
        &self.engine
    }

    /// Resolves a word to a token
    ///
    /// Token names take priority; single keyboard keys are accepted as a
    /// fallback unless `keys` mode makes them the only interpretation.
    #[must_use]
    pub fn resolve(&self, word: &str) -> Option<Token> {
        if self.keys {
            Token::from_key(word)
        } else {
            Token::parse(word).or_else(|| Token::from_key(word))
        }
    }

    /// Feeds one word
    ///
    /// In strict mode unknown words and engine errors end the session.
    pub fn feed(&mut self, word: &str) -> CliResult<Step> {
        let Some(token) = self.resolve(word) else {
            if self.strict {
                return Err(CliError::invalid_argument(format!("unknown token {word:?}")));
            }
            warn!(word, "ignoring unknown token");
            return Ok(Step::Ignored(word.to_string()));
        };

        match self.engine.apply(token) {
            Ok(()) => Ok(Step::Applied(Snapshot::capture(&self.engine, Some(word)))),
            Err(error) if self.strict => Err(error.into()),
            Err(error) => {
                info!(%error, reset = error.resets_engine(), "continuing after calculator error");
                Ok(Step::Failed {
                    snapshot: Snapshot::capture(&self.engine, Some(word)),
                    error,
                })
            }
        }
    }

    /// Snapshot of the final read-out
    #[must_use]
    pub fn finish(&self) -> Snapshot {
        Snapshot::capture(&self.engine, None)
    }
}
