mod cli;
mod commands;
mod formatting;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_compare, run_score};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = cli::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Compare {
            first,
            second,
            first_label,
            second_label,
            keywords,
            output,
        } => run_compare(
            args.config,
            first,
            second,
            first_label,
            second_label,
            keywords,
            output,
        ),
        Commands::Score {
            input,
            label,
            keywords,
            output,
        } => run_score(args.config, input, label, keywords, output),
    }
}

/// Logs go to stderr so stdout stays a clean report. `RUST_LOG` wins over
/// `--verbose`.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "jojo=debug,jojo_lib=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
