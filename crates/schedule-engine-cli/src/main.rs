use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use schedule_engine::{
    find_conflicts, format_section_line, print_summary, sort_combination, ScoredCombination,
    ScoredCombinationRecord, Section, SectionRecord,
};
use serde::de::DeserializeOwned;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "schedule",
    version,
    about = "Check, order and summarize course schedule combinations"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check one combination (a JSON array of section records) for time conflicts
    Check {
        /// Input file (reads stdin if omitted or "-")
        #[arg(default_value = "-")]
        input: String,
    },
    /// Print one combination's sections in display order
    Sort {
        /// Input file (reads stdin if omitted or "-")
        #[arg(default_value = "-")]
        input: String,
    },
    /// Print the summary of scored combinations, best first
    Report {
        /// Input file with [{"sections": [...], "score_info": {...}}, ...]
        #[arg(default_value = "-")]
        input: String,

        /// Only print the first N options
        #[arg(long, value_name = "N")]
        top: Option<usize>,

        /// Keep each combination's sections in input order
        #[arg(long)]
        no_sort: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Check { input } => {
            let sections = read_sections(&input)?;
            let conflicts = find_conflicts(&sections);
            info!(
                sections = sections.len(),
                conflicts = conflicts.len(),
                "checked combination"
            );
            if conflicts.is_empty() {
                println!("no conflicts");
                return Ok(ExitCode::SUCCESS);
            }
            for conflict in conflicts {
                println!(
                    "conflict: {} <-> {}",
                    sections[conflict.first].name, sections[conflict.second].name
                );
            }
            Ok(ExitCode::from(1))
        }
        Command::Sort { input } => {
            let sections = read_sections(&input)?;
            for section in sort_combination(&sections) {
                println!("{}", format_section_line(&section));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Report {
            input,
            top,
            no_sort,
        } => {
            let records: Vec<ScoredCombinationRecord> = read_json(&input)?;
            let mut combinations = records
                .into_iter()
                .enumerate()
                .map(|(i, record)| {
                    ScoredCombination::try_from(record)
                        .with_context(|| format!("Invalid combination #{}", i + 1))
                })
                .collect::<Result<Vec<_>>>()?;

            if let Some(limit) = top {
                combinations.truncate(limit);
            }
            if !no_sort {
                for combination in &mut combinations {
                    combination.sections = sort_combination(&combination.sections);
                }
            }

            info!(options = combinations.len(), "rendering report");
            print_summary(&combinations).context("Failed to write report")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_sections(input: &str) -> Result<Vec<Section>> {
    let records: Vec<SectionRecord> = read_json(input)?;
    records
        .into_iter()
        .map(|record| {
            let name = record.name.clone();
            Section::try_from(record).with_context(|| format!("Invalid section '{name}'"))
        })
        .collect()
}

fn read_json<T: DeserializeOwned>(input: &str) -> Result<T> {
    let text = if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read '{input}'"))?
    };
    serde_json::from_str(&text).with_context(|| format!("Failed to parse JSON from '{input}'"))
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
