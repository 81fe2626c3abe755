use crate::dispatch::Package;
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "workout-metrics",
    about = "Print distance, mean speed and calories for raw workout sensor packages"
)]
pub struct Cli {
    /// Sensor packages as CODE:v1,v2,... where CODE is SWM, RUN or WLK.
    ///
    /// SWM: action,duration,weight,length_pool,count_pool
    /// RUN: action,duration,weight
    /// WLK: action,duration,weight,height
    ///
    /// Default: the built-in sample packages.
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<Package>,

    /// Print each report as a JSON object instead of the text summary.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

impl Cli {
    /// Packages to process, falling back to the samples.
    pub fn packages(&self) -> Vec<Package> {
        if self.packages.is_empty() {
            Package::samples()
        } else {
            self.packages.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::WorkoutCode;

    #[test]
    fn defaults_to_samples() {
        let cli = Cli::try_parse_from(["workout-metrics"]).unwrap();
        assert!(!cli.json);
        assert_eq!(cli.packages(), Package::samples());
    }

    #[test]
    fn parses_packages_and_flags() {
        let cli = Cli::try_parse_from([
            "workout-metrics",
            "-vv",
            "--json",
            "RUN:15000,1,75",
            "WLK:9000,1,75,180",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
        let packages = cli.packages();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[1].code, WorkoutCode::SportsWalking);
    }

    #[test]
    fn rejects_unknown_code() {
        assert!(Cli::try_parse_from(["workout-metrics", "BIK:1,1,1"]).is_err());
    }
}
