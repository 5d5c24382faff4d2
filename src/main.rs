use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use tagmark::{Limits, supported_tags, try_parse};
use tagmark_rs::catalog::{self, Category};
use tagmark_rs::{CliError, Result, log_init, report};

#[derive(Parser, Debug)]
#[command(name = "tagmark", version, about = "Parse bracket-tag widget markup")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Append log records to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Most verbose level written to the log file.
    #[arg(long, global = true, default_value = "debug")]
    log_level: LevelFilter,

    /// Reject inputs longer than this many bytes.
    #[arg(long, global = true)]
    max_input: Option<usize>,

    /// Reject inputs producing more tag candidates than this.
    #[arg(long, global = true)]
    max_matches: Option<usize>,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a file (or stdin) and list its nodes.
    Parse {
        /// Input file; reads stdin when omitted.
        file: Option<PathBuf>,
    },
    /// List the supported tag names.
    Tags,
    /// List, run or check the example catalog.
    Catalog {
        /// Case to parse and display.
        name: Option<String>,

        /// Run every case and fail on any widget count mismatch.
        #[arg(long, conflicts_with = "name")]
        check: bool,
    },
}

impl Cli {
    fn limits(&self) -> Limits {
        let mut limits = Limits::none();
        if let Some(max) = self.max_input {
            limits = limits.max_input_len(max);
        }
        if let Some(max) = self.max_matches {
            limits = limits.max_matches(max);
        }
        limits
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("tagmark: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    if let Some(path) = &cli.log_file {
        log_init::init_logger(path, cli.log_level)?;
    }

    let limits = cli.limits();
    let color = !cli.no_color;
    let mut out = io::stdout().lock();

    match &cli.command {
        Command::Parse { file } => {
            let input = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let nodes = try_parse(&input, &limits)?;
            log::info!("parsed {} nodes", nodes.len());
            report::write_nodes(&mut out, &nodes, color)?;
        }
        Command::Tags => {
            report::write_tags(&mut out, &supported_tags())?;
        }
        Command::Catalog { name: None, check: false } => {
            for category in Category::ALL {
                writeln!(out, "{category}:")?;
                for case in catalog::cases_in(category) {
                    writeln!(out, "  {:<20} {}", case.name, case.description)?;
                }
            }
        }
        Command::Catalog { name: None, check: true } => {
            let mut failures = 0;
            for case in catalog::all_cases() {
                let result = case.run(&limits)?;
                report::write_case_summary(&mut out, case, &result, color)?;
                if !result.passed() {
                    failures += 1;
                }
            }
            if failures > 0 {
                log::warn!("{failures} catalog cases failed");
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Catalog { name: Some(name), .. } => {
            let case = catalog::find(name).ok_or_else(|| CliError::UnknownCase(name.clone()))?;
            let result = case.run(&limits)?;
            report::write_nodes(&mut out, &result.nodes, color)?;
            report::write_case_summary(&mut out, case, &result, color)?;
            if !result.passed() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    out.flush()?;
    Ok(ExitCode::SUCCESS)
}
