// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

mod cli;
mod logging;
mod report;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::info;

use lunation::{generate, JulianMoment, TableConfig};

use crate::cli::{Cli, Command, MomentArgs, TableArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Table(args) => run_table(args),
        Command::Phase(args) => run_moment(args, report::write_phase),
        Command::Hunt(args) => run_moment(args, report::write_hunt),
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => Box::new(BufWriter::new(
            File::create(p).with_context(|| format!("creating {}", p.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn run_table(args: TableArgs) -> Result<()> {
    let config = TableConfig::new(args.start.unwrap_or_else(Utc::now)).with_years(args.years);
    info!(start = %config.start(), years = config.years(), "phase table requested");

    let table = generate(&config).context("generating phase table")?;
    info!("{table}");

    let mut out = open_output(args.output.as_deref())?;
    report::write_table(&mut out, &table)?;
    out.flush().context("flushing output")?;
    Ok(())
}

fn run_moment(
    args: MomentArgs,
    write: fn(&mut Box<dyn Write>, JulianMoment) -> Result<()>,
) -> Result<()> {
    let moment = JulianMoment::from_utc(args.at.unwrap_or_else(Utc::now));
    info!(%moment, "evaluating");

    let mut out = open_output(None)?;
    write(&mut out, moment)?;
    out.flush().context("flushing output")?;
    Ok(())
}
