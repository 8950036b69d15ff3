//! Tracing subscriber setup

use crate::config::Verbosity;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, writing to stderr
///
/// `RUST_LOG` wins over the verbosity flags. Calling this twice keeps the
/// first subscriber.
pub fn init_tracing(verbosity: Verbosity, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // A subscriber may already be installed by a test harness
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init_tracing(Verbosity::Quiet, false);
        init_tracing(Verbosity::Debug, true);
    }
}
