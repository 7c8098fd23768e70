//! Command line arguments and configuration files

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use seaway_core::TalkerTable;

#[derive(Parser, Debug)]
#[command(name = "seaway", version, about = "AIS log scanner and collision-risk reporter")]
pub struct Cli {
    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,

    /// JSON file mapping extra talker codes to talkers, e.g. {"BS": "BaseStation"}
    #[arg(long, global = true, value_name = "FILE")]
    pub talkers: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse received AIS lines and summarise them
    Scan {
        /// Input file, stdin if absent or '-'
        input: Option<PathBuf>,

        /// Print each parsed message as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report vessel pairs whose safety envelopes will meet
    Risk {
        /// CSV file of decoded vessel positions
        input: PathBuf,

        /// Only report encounters starting within this many seconds
        #[arg(long, default_value_t = 600, value_name = "SECONDS")]
        horizon: u64,

        /// Print each encounter as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Standard talker table, extended with the mappings in `path` if given
pub fn talker_table(path: Option<&Path>) -> anyhow::Result<TalkerTable> {
    let mut table = TalkerTable::default();
    if let Some(path) = path {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read talker table {}", path.display()))?;
        let extra = TalkerTable::from_json(&json)
            .with_context(|| format!("invalid talker table {}", path.display()))?;
        log::debug!("{}: {} extra talker codes", path.display(), extra.len());
        table.extend(extra);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use seaway_core::Talker;
    use std::io::Write;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_risk_args() {
        let cli =
            Cli::try_parse_from(["seaway", "risk", "positions.csv", "--horizon", "120"]).unwrap();
        match cli.command {
            Command::Risk { input, horizon, json } => {
                assert_eq!(input, PathBuf::from("positions.csv"));
                assert_eq!(horizon, 120);
                assert!(!json);
            }
            _ => panic!("expected risk"),
        }
    }

    #[test]
    fn test_talker_table_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"BS": "BaseStation"}}"#).unwrap();

        let table = talker_table(Some(file.path())).unwrap();
        assert_eq!(table.resolve("$BSVDM"), Talker::BaseStation);
        assert_eq!(table.resolve("!AIVDM"), Talker::MobileStation);

        let table = talker_table(None).unwrap();
        assert_eq!(table.resolve("$BSVDM"), Talker::Unknown);
    }

    #[test]
    fn test_bad_talker_table_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(talker_table(Some(file.path())).is_err());
        assert!(talker_table(Some(Path::new("/nonexistent/talkers.json"))).is_err());
    }
}
