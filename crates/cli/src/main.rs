// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod report;
mod scenario;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use dshift_domain::{ParkingSpot, parse_date};
use scenario::Scenario;
use serde::Serialize;
use std::path::PathBuf;
use time::{Date, OffsetDateTime};
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// d-shift - automatic shift scheduling from a JSON scenario
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path to the scenario JSON file
    #[arg(short, long, global = true)]
    scenario: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD) for the default period. Defaults to today (UTC).
    #[arg(long, global = true)]
    today: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Generate assignments for the period
    #[command(visible_alias = "g")]
    Generate,

    /// List help alerts and per-date shortages
    #[command(visible_alias = "a")]
    Alerts,

    /// List the dates of the period
    #[command(visible_alias = "p")]
    Period,

    /// List the parking spot catalog
    #[command(visible_alias = "s")]
    Spots,
}

impl Args {
    fn run(&self) -> Result<()> {
        let scenario: Scenario = match &self.scenario {
            Some(path) => Scenario::load(path)?,
            None => Scenario::default(),
        };
        let today: Date = self.today()?;

        match self.command {
            Command::Generate => self.print(&report::generate(&scenario, today)?),
            Command::Alerts => self.print(&report::alerts(&scenario, today)?),
            Command::Period => self.print(&scenario.period_dates(today)?),
            Command::Spots => {
                let spots: Vec<ParkingSpot> = scenario.parking.all_spots();
                self.print(&spots)
            }
        }
    }

    fn today(&self) -> Result<Date> {
        match &self.today {
            Some(value) => Ok(parse_date(value)?),
            None => Ok(OffsetDateTime::now_utc().date()),
        }
    }

    fn print<T: Serialize>(&self, value: &T) -> Result<()> {
        let json: String = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{json}");
        Ok(())
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}
