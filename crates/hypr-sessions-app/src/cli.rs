use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Save and restore Hyprland window sessions.
#[derive(Parser, Debug)]
#[command(name = "hypr-sessions", version, about)]
pub struct Args {
    /// More log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Capture the open windows into a session file.
    Save(SaveArgs),
    /// Relaunch the saved windows and move them back into place.
    Restore(RestoreArgs),
}

#[derive(clap::Args, Debug)]
pub struct SaveArgs {
    /// Session file to write.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Command map file.
    #[arg(short, long)]
    pub apps_toml: Option<PathBuf>,

    /// Print the session instead of writing it.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(clap::Args, Debug)]
pub struct RestoreArgs {
    /// Session file to read.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Command map file.
    #[arg(short, long)]
    pub apps_toml: Option<PathBuf>,

    /// Show what would be launched without touching any window.
    #[arg(long)]
    pub dry_run: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Default log directive for a `-v` count. `RUST_LOG` takes precedence.
pub fn log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_flags() {
        let args = Args::try_parse_from([
            "hypr-sessions",
            "save",
            "-o",
            "/tmp/s.json",
            "--apps-toml",
            "/tmp/apps.toml",
            "--dry-run",
        ])
        .unwrap();
        let Command::Save(save) = args.command else {
            panic!("expected save");
        };
        assert_eq!(save.output, Some(PathBuf::from("/tmp/s.json")));
        assert_eq!(save.apps_toml, Some(PathBuf::from("/tmp/apps.toml")));
        assert!(save.dry_run);
    }

    #[test]
    fn restore_defaults() {
        let args = Args::try_parse_from(["hypr-sessions", "restore"]).unwrap();
        let Command::Restore(restore) = args.command else {
            panic!("expected restore");
        };
        assert!(restore.input.is_none());
        assert!(restore.apps_toml.is_none());
        assert!(!restore.dry_run);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn verbosity_is_global_and_counted() {
        let args = Args::try_parse_from(["hypr-sessions", "restore", "-vv", "-a", "x.toml"]).unwrap();
        assert_eq!(args.verbose, 2);
        let args = Args::try_parse_from(["hypr-sessions", "-v", "save"]).unwrap();
        assert_eq!(args.verbose, 1);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Args::try_parse_from(["hypr-sessions"]).is_err());
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(log_level(0), "warn");
        assert_eq!(log_level(1), "info");
        assert_eq!(log_level(2), "debug");
        assert_eq!(log_level(3), "trace");
        assert_eq!(log_level(9), "trace");
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
