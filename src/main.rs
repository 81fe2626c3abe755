#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use workout_metrics::{Training, cli, utils};

#[macro_use]
extern crate workout_metrics;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let packages = cli.packages();
    dlog!(
        "mode={} packages={}",
        if cli.json { "json" } else { "text" },
        packages.len()
    );

    for package in &packages {
        let workout = package
            .read()
            .with_context(|| format!("reading package {package}"))?;
        dlog!(
            "package={package} training_type={} action={} duration={} weight={}",
            workout.training_type(),
            workout.action(),
            workout.duration(),
            workout.weight()
        );

        let info = workout
            .show_training_info()
            .with_context(|| format!("computing metrics for package {package}"))?;

        if cli.json {
            println!("{}", info.to_json());
        } else {
            println!("{info}");
        }
    }

    tracing::info!(reports = packages.len(), "done");
    Ok(())
}
