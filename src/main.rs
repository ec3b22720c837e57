use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use commentharvest::export::{default_output_path, write_report};
use commentharvest::{extract_comments, Config, ExportFormat, ExtractOptions, HarvestError};

#[derive(Parser, Debug)]
#[command(
    name = "commentharvest",
    version,
    about = "Export Word (.docx) comments together with the text they annotate"
)]
struct Cli {
    /// Path to the .docx file
    #[arg(required_unless_present = "init_config")]
    input: Option<PathBuf>,

    /// Output file (default: <input>_comments.<ext> next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,

    /// Include Author column
    #[arg(long)]
    author: bool,

    /// Include Date column
    #[arg(long)]
    date: bool,

    /// Include Author and Date columns
    #[arg(long)]
    all_columns: bool,

    /// Keep rows with empty commented text
    #[arg(long)]
    keep_empty: bool,

    /// Read defaults from this config file instead of the user config
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Command-line flags can only switch options on
    fn extract_options(&self, config: &Config) -> ExtractOptions {
        let defaults = config.extract_options();
        ExtractOptions {
            include_author: defaults.include_author || self.author || self.all_columns,
            include_date: defaults.include_date || self.date || self.all_columns,
            keep_empty: defaults.keep_empty || self.keep_empty,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// Exit status: 2 when there is no usable document, 1 for anything else
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<HarvestError>() {
        Some(e) if e.is_not_found() => 2,
        _ => 1,
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        if exit_code(&err) == 2 {
            eprintln!("No Word document to read: {err:#}");
        } else {
            eprintln!("Error: {err:#}");
        }
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.init_config {
        let path = Config::init_default()?;
        println!("Wrote default config: {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let Some(input) = cli.input.as_deref() else {
        anyhow::bail!("No input file given");
    };

    let options = cli.extract_options(&config);
    let format = cli.format.unwrap_or(config.format);

    let report = extract_comments(input, &options)
        .with_context(|| format!("Failed to extract comments from {}", input.display()))?;

    if cli.stdout {
        write_report(&report, &format, None)?;
    } else {
        let output = cli
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(input, &format));
        write_report(&report, &format, Some(&output))?;
        println!("Wrote: {}", output.display());
    }

    Ok(())
}
