// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
#![allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]

mod logging;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use mapper_validator::{SourceConfig, output, validate_dir};

/// Check onboarding command mapper files for YAML syntax errors.
///
/// With no arguments, validates every `.yml` file in the
/// `onboarding_command_mappers` directory next to this executable.
#[derive(Parser, Debug)]
#[command(name = "mapper-validator", version, about)]
struct Cli {
    /// Validate this directory instead of the one next to the executable.
    #[arg(long, value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Increase diagnostic logging on stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let config = match &cli.dir {
        Some(dir) => SourceConfig::for_dir(dir),
        None => SourceConfig::beside_executable()?,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let ok = match validate_dir(&config) {
        Ok(report) => {
            match cli.format {
                OutputFormat::Human => {
                    output::write_header(&mut out)?;
                    output::write_human(&report, &mut out)?;
                }
                OutputFormat::Json => output::write_json(&report, &mut out)?,
            }
            report.ok
        }
        Err(err) => {
            tracing::debug!("validation aborted: {err}");
            match cli.format {
                OutputFormat::Human => output::write_fatal_human(&err, &mut out)?,
                OutputFormat::Json => output::write_fatal_json(&err, &mut out)?,
            }
            false
        }
    };

    out.flush()?;
    Ok(ok)
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
