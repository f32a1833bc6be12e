mod cli;
mod error;
mod logging;
mod profiles;
mod report;
mod scoring;
mod types;

use crate::error::ScorerError;
use clap::{CommandFactory, Parser};

pub mod exit_code {
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<(), ScorerError> {
    if std::env::args_os().len() <= 1 {
        cli::Cli::command().print_help()?;
        return Ok(());
    }

    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let format = if cli.json {
        report::OutputFormat::Json
    } else {
        report::OutputFormat::Text
    };

    let mode = cli.mode()?;
    tracing::debug!(?mode, ?format, "resolved invocation");

    let profile = match mode {
        cli::Mode::List => {
            let rendered = report::render_listing(&profiles::builtin_profiles(), format)?;
            return report::write_report(&mut std::io::stdout().lock(), &rendered);
        }
        cli::Mode::Builtin(name) => profiles::get_builtin_profile(name)?,
        cli::Mode::Custom(args) => profiles::make_custom_profile(
            args.name.as_deref().unwrap_or_default(),
            args.description.as_deref(),
            args.attributes(),
        )?,
    };

    let rendered = report::render(&scoring::scored(&profile), format)?;
    report::write_report(&mut std::io::stdout().lock(), &rendered)
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}
