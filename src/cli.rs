// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};

use lunation::DEFAULT_YEARS;

/// Moon phase tables and reports.
#[derive(Parser)]
#[command(
    name = "lunation",
    version,
    about = "Moon phase tables and reports from orbital mechanics"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate the per-day phase table.
    Table(TableArgs),
    /// Report the Moon's phase at one moment.
    Phase(MomentArgs),
    /// List the principal phases of the lunation containing one moment.
    Hunt(MomentArgs),
}

/// Arguments for the `table` subcommand.
#[derive(clap::Args)]
pub struct TableArgs {
    /// Day treated as today (RFC 3339 or YYYY-MM-DD, UTC). Defaults to now.
    #[arg(short, long, value_parser = parse_utc)]
    pub start: Option<DateTime<Utc>>,

    /// Years to cover, 365 days each.
    #[arg(short, long, default_value_t = DEFAULT_YEARS, allow_negative_numbers = true)]
    pub years: i32,

    /// Output path. Defaults to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `phase` and `hunt` subcommands.
#[derive(clap::Args)]
pub struct MomentArgs {
    /// Moment to evaluate (RFC 3339 or YYYY-MM-DD, UTC). Defaults to now.
    #[arg(short, long, value_parser = parse_utc)]
    pub at: Option<DateTime<Utc>>,
}

/// Parse an RFC 3339 timestamp, or a bare date taken as midnight UTC.
pub fn parse_utc(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("expected RFC 3339 or YYYY-MM-DD, got `{s}`"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_bare_date_as_midnight() {
        assert_eq!(
            parse_utc("2000-01-01").unwrap(),
            Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        assert_eq!(
            parse_utc("2024-03-10T01:30:00+02:00").unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 9, 23, 30, 0).unwrap()
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_utc("yesterday").is_err());
        assert!(parse_utc("2024-13-01").is_err());
    }

    #[test]
    fn table_defaults() {
        let cli = Cli::try_parse_from(["lunation", "table"]).unwrap();
        match cli.command {
            Command::Table(args) => {
                assert_eq!(args.years, DEFAULT_YEARS);
                assert!(args.start.is_none());
                assert!(args.output.is_none());
            }
            _ => panic!("expected table"),
        }
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn global_verbosity_counts() {
        let cli = Cli::try_parse_from(["lunation", "hunt", "-vv", "--at", "2000-01-01"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
