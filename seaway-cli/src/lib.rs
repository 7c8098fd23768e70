//! Seaway command line tools
//!
//! - `scan`: parse a log of received AIS lines and summarise what was in it
//! - `risk`: assess every pair of decoded vessel positions for collision risk

pub mod records;
pub mod risk;
pub mod scan;
pub mod settings;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::Context;

use settings::{Cli, Command};

/// Open `path` for reading, or stdin when it is absent or `-`
pub fn open_input(path: Option<&Path>) -> anyhow::Result<Box<dyn BufRead>> {
    match path {
        None => Ok(Box::new(BufReader::new(io::stdin()))),
        Some(p) if p.as_os_str() == "-" => Ok(Box::new(BufReader::new(io::stdin()))),
        Some(p) => {
            let file = File::open(p).with_context(|| format!("failed to open {}", p.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let talkers = settings::talker_table(cli.talkers.as_deref())?;

    match cli.command {
        Command::Scan { input, json } => {
            let reader = open_input(input.as_deref())?;
            let report = scan::scan(reader, &talkers, |message| {
                if json {
                    match serde_json::to_string(message) {
                        Ok(line) => println!("{}", line),
                        Err(e) => log::error!("Unable to serialize message: {}", e),
                    }
                }
            })?;
            if json {
                eprintln!("{}", report);
            } else {
                println!("{}", report);
            }
        }
        Command::Risk {
            input,
            horizon,
            json,
        } => {
            let reader = open_input(Some(&input))?;
            let (positions, skipped) = records::read_positions(reader)?;
            if skipped > 0 {
                log::warn!("{}: skipped {} invalid rows", input.display(), skipped);
            }
            let report = risk::assess(&positions, horizon);
            if json {
                for encounter in &report.encounters {
                    println!("{}", serde_json::to_string(encounter)?);
                }
                eprintln!("{}", report);
            } else {
                println!("{}", report);
            }
        }
    }
    Ok(())
}
