//! period-compare - compute period-over-period comparison date ranges

use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use period_engine::{
    compare_with_options, CompareOptions, DateRange, FirstWeekday, Granularity, OffsetGranularity,
    PeriodicMode,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "period-compare")]
#[command(author, version, about = "Compute the date range to compare a period with")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the range playing the same role `offset` containers away
    Compare {
        /// First day of the range (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// Last day of the range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end: String,

        /// Unit of the range: daily, weekly, monthly or yearly
        #[arg(short, long)]
        granularity: Granularity,

        /// Containers to move; negative is earlier
        #[arg(short, long, allow_hyphen_values = true)]
        offset: i64,

        /// Container unit: periodic, daily, weekly, monthly or yearly
        #[arg(long)]
        offset_granularity: OffsetGranularity,

        /// First day of the week, 0 = Monday through 6 = Sunday
        #[arg(long, env = "PERIOD_COMPARE_FIRST_WEEKDAY", default_value_t = 0)]
        first_weekday: u8,

        /// Move periodic offsets by the whole range length for every granularity
        #[arg(long)]
        whole_range: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the number of whole periods in a range
    Length {
        /// First day of the range (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// Last day of the range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end: String,

        /// Unit of the range: daily, weekly, monthly or yearly
        #[arg(short, long)]
        granularity: Granularity,

        /// First day of the week, 0 = Monday through 6 = Sunday
        #[arg(long, env = "PERIOD_COMPARE_FIRST_WEEKDAY", default_value_t = 0)]
        first_weekday: u8,
    },

    /// List the offset granularities a date granularity can be compared by
    Offsets {
        #[arg(short, long)]
        granularity: Granularity,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Compare {
            start,
            end,
            granularity,
            offset,
            offset_granularity,
            first_weekday,
            whole_range,
            json,
        } => {
            let start = parse_date(&start)?;
            let end = parse_date(&end)?;
            let options = CompareOptions {
                periodic: if whole_range {
                    PeriodicMode::WholeRange
                } else {
                    PeriodicMode::Standard
                },
            };
            debug!(%start, %end, %granularity, offset, %offset_granularity, first_weekday, "comparing");

            let compared = compare_with_options(
                start,
                end,
                granularity,
                offset,
                offset_granularity,
                first_weekday,
                &options,
            )
            .with_context(|| {
                format!("Cannot compare {start}..{end} by {offset} {offset_granularity}")
            })?;

            if json {
                println!("{}", serde_json::to_string_pretty(&compared)?);
            } else {
                println!("{} {}", compared.start_date, compared.end_date);
            }
        }

        Commands::Length {
            start,
            end,
            granularity,
            first_weekday,
        } => {
            let start = parse_date(&start)?;
            let end = parse_date(&end)?;
            let first_weekday = FirstWeekday::new(i64::from(first_weekday))?;
            let range = DateRange::new(start, end, granularity, first_weekday)
                .with_context(|| format!("Invalid {granularity} range {start}..{end}"))?;
            println!("{}", range.length());
        }

        Commands::Offsets { granularity } => {
            for offset_granularity in granularity.supported_offsets() {
                println!("{offset_granularity}");
            }
        }
    }

    Ok(())
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{value}' (expected YYYY-MM-DD)"))
}
