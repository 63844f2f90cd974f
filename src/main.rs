mod commands;
mod render;
mod sample;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use flexi_logger::{FileSpec, Logger, LoggerHandle};

#[derive(Parser)]
#[command(name = "gamify")]
#[command(about = "Month calendar for the gamify dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid
    Month {
        /// Month to display (YYYY-MM); defaults to the selected day's month
        #[arg(short, long)]
        month: Option<String>,

        /// Day to highlight (YYYY-MM-DD); overrides `initial_selection`
        #[arg(short, long)]
        select: Option<String>,

        /// Page this many months back
        #[arg(long, conflicts_with = "next", value_parser = clap::value_parser!(i32).range(0..))]
        prev: Option<i32>,

        /// Page this many months forward
        #[arg(long, value_parser = clap::value_parser!(i32).range(0..))]
        next: Option<i32>,

        /// Print the state and grid as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        source: commands::EventSource,
    },
    /// Click a visible day and show the resulting month
    Select {
        /// Day to click (YYYY-MM-DD)
        date: String,

        /// Month shown before the click (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,

        /// Print the state and grid as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        source: commands::EventSource,
    },
    /// List events grouped by day
    Events {
        /// Show events from this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Show events until this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        #[command(flatten)]
        source: commands::EventSource,
    },
    /// Show or create the config file
    Config {
        /// Write a commented default config if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _logger = init_logger(cli.log_file)?;

    match cli.command {
        Commands::Month {
            month,
            select,
            prev,
            next,
            json,
            source,
        } => {
            let delta = month_delta(prev, next);
            commands::month::run(month.as_deref(), select.as_deref(), delta, json, &source)
        }
        Commands::Select {
            date,
            month,
            json,
            source,
        } => commands::select::run(&date, month.as_deref(), json, &source),
        Commands::Events { from, to, source } => {
            commands::events::run(from.as_deref(), to.as_deref(), &source)
        }
        Commands::Config { init } => commands::config::run(init),
    }
}

/// Signed month offset from `--prev`/`--next`, both already non-negative.
fn month_delta(prev: Option<i32>, next: Option<i32>) -> i32 {
    match (prev, next) {
        (Some(n), _) => -n,
        (_, Some(n)) => n,
        _ => 0,
    }
}

fn init_logger(log_file: Option<PathBuf>) -> Result<LoggerHandle> {
    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "warn"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = log_file {
        logger = logger.log_to_file(FileSpec::try_from(log_file)?);
    }

    Ok(logger.start()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paging(args: &[&str]) -> Result<i32, clap::Error> {
        let mut argv = vec!["gamify", "month"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv)?;
        match cli.command {
            Commands::Month { prev, next, .. } => Ok(month_delta(prev, next)),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_month_paging_delta() {
        assert_eq!(paging(&[]).unwrap(), 0);
        assert_eq!(paging(&["--prev", "3"]).unwrap(), -3);
        assert_eq!(paging(&["--next", "14"]).unwrap(), 14);
        assert_eq!(paging(&["--next", "2147483647"]).unwrap(), i32::MAX);
        assert_eq!(paging(&["--prev", "2147483647"]).unwrap(), -i32::MAX);
    }

    #[test]
    fn test_month_paging_rejects_out_of_range_counts() {
        assert!(paging(&["--prev", "2147483648"]).is_err());
        assert!(paging(&["--next", "4294967295"]).is_err());
        assert!(paging(&["--next", "-1"]).is_err());
        assert!(paging(&["--prev", "1", "--next", "1"]).is_err());
    }
}
