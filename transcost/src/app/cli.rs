use std::path::{Path, PathBuf};

use clap::Parser;

use super::{pipeline, TransCostAppError, TransCostConfig, DEFAULT_CONFIG_FILE};

/// Computes the annual transportation cost of each surveyed household and
/// writes its monthly cost and share of income, optionally placed at a point
/// inside the household's zone.
///
/// Settings are read from config/transcost.toml when that file exists.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct TransCostApp {
    /// household CSV with columns Unique, Inc, Zone, Veh
    pub households: PathBuf,
    /// person CSV with columns Unique, Serial, Per#, Lic, Transit Pass, Per Type
    pub persons: PathBuf,
    /// trip CSV with columns UniqueID, Serial, Person#, Mode, Dist
    pub trips: PathBuf,
    /// output CSV location
    pub output: PathBuf,
}

impl TransCostApp {
    pub fn run(&self) -> Result<(), TransCostAppError> {
        let config = TransCostConfig::read(Path::new(DEFAULT_CONFIG_FILE))?;
        pipeline::run(
            &self.households,
            &self.persons,
            &self.trips,
            &self.output,
            &config,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_four_positional_arguments() {
        let app = TransCostApp::try_parse_from([
            "transcost",
            "hh.csv",
            "per.csv",
            "trip.csv",
            "out.csv",
        ])
        .unwrap();
        assert_eq!(app.households, PathBuf::from("hh.csv"));
        assert_eq!(app.persons, PathBuf::from("per.csv"));
        assert_eq!(app.trips, PathBuf::from("trip.csv"));
        assert_eq!(app.output, PathBuf::from("out.csv"));
    }

    #[test]
    fn test_wrong_argument_count() {
        let missing = TransCostApp::try_parse_from(["transcost", "hh.csv", "per.csv"]);
        assert_eq!(
            missing.unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        let extra = TransCostApp::try_parse_from(["transcost", "a", "b", "c", "d", "e"]);
        assert!(extra.is_err());
    }

    #[test]
    fn test_help_is_not_a_failure() {
        let help = TransCostApp::try_parse_from(["transcost", "--help"]);
        assert_eq!(help.unwrap_err().kind(), ErrorKind::DisplayHelp);
    }
}
