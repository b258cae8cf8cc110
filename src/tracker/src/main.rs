#[macro_use]
extern crate log;

use std::fmt::Display;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use serde::Serialize;
use tracker_algos::{day_steps_report, training_report};
use tracker_types::biometrics::Biometrics;

#[derive(Parser)]
pub struct TrackerCli {
    /// Body weight in kilograms
    #[arg(env, long)]
    pub weight: f64,
    /// Height in meters
    #[arg(env, long)]
    pub height: f64,
    /// Print the report as JSON
    #[arg(long, global = true)]
    pub json: bool,
    #[clap(subcommand)]
    pub subcommand: TrackerCommand,
}

#[derive(Subcommand)]
pub enum TrackerCommand {
    ///
    /// Summarize a daily step total, e.g. "678,0h50m"
    ///
    DaySteps { data: String },
    ///
    /// Summarize a training, e.g. "3456,Ходьба,3h00m"
    ///
    Training { data: String },
}

fn main() -> anyhow::Result<()> {
    let env_file = dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(error) = env_file {
        debug!("{}", error);
    }

    let cli = TrackerCli::parse();
    let biometrics = Biometrics::new(cli.weight, cli.height);

    match cli.subcommand {
        TrackerCommand::DaySteps { data } => {
            let report = day_steps_report(&data, &biometrics)?;
            print_report(&report, cli.json)
        }
        TrackerCommand::Training { data } => {
            let report = training_report(&data, &biometrics)?;
            print_report(&report, cli.json)
        }
    }
}

fn print_report<R: Display + Serialize>(report: &R, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
