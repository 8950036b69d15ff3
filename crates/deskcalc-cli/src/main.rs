//! deskcalc: drive a desktop-style calculator from the command line
//!
//! ## Usage
//!
//! ```bash
//! deskcalc 2 add 3 multiply 4 equals      # prints 20
//! deskcalc --keys -- 1 2 + 3 =            # keyboard keys
//! deskcalc --trace 9 toggle-sign percent  # display after every token
//! echo "5 divide 0 equals" | deskcalc     # tokens from stdin
//! ```

use clap::Parser;
use deskcalc_cli::{
    load_display_config, logging, Cli, CliConfig, CliResult, Printer, Session, Step, Verbosity,
};
use std::io::{self, BufRead};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    logging::init_tracing(config.verbosity, cli.log_json);

    let words = if cli.tokens.is_empty() {
        read_stdin_tokens()?
    } else {
        cli.tokens.clone()
    };

    let printer = Printer::new(config.format, config.color.should_color());
    let mut session = Session::new(&config)?;

    for word in &words {
        match session.feed(word)? {
            Step::Applied(snapshot) => {
                if config.trace {
                    println!("{}", printer.render(&snapshot)?);
                }
            }
            Step::Failed { snapshot, error } => {
                eprintln!("{}", printer.notice(&error.user_message()));
                if config.trace {
                    println!("{}", printer.render(&snapshot)?);
                }
            }
            Step::Ignored(_) => {}
        }
    }

    if !config.trace {
        println!("{}", printer.render(&session.finish())?);
    }
    Ok(())
}

fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let mut display = match &cli.config {
        Some(path) => load_display_config(path)?,
        None => deskcalc::core::DisplayConfig::default(),
    };
    if let Some(width) = cli.width {
        display = display.with_width(width);
    }
    display.validate()?;

    Ok(CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.into())
        .with_format(cli.format.into())
        .with_trace(cli.trace)
        .with_keys(cli.keys)
        .with_strict(cli.strict)
        .with_display(display))
}

fn read_stdin_tokens() -> CliResult<Vec<String>> {
    let mut words = Vec::new();
    for line in io::stdin().lock().lines() {
        words.extend(line?.split_whitespace().map(str::to_string));
    }
    Ok(words)
}
