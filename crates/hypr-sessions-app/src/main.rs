mod cli;
mod commands;
mod report;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn init_logging(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli::log_level(verbosity))),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.verbose);
    tracing::debug!("hypr-sessions v{}", env!("CARGO_PKG_VERSION"));

    let result = match args.command {
        cli::Command::Save(save) => commands::save(save),
        cli::Command::Restore(restore) => commands::restore(restore),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hypr-sessions: {e}");
            ExitCode::FAILURE
        }
    }
}
