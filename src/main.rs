use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use bibabrv::telemetry::{self, DEFAULT_LOG_LEVEL};
use bibabrv::{Report, RunConfig};

/// Replace journal and conference names in a BibTeX file with their abbreviations
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the .bib file to abbreviate
    #[arg(long)]
    file: Option<PathBuf>,

    /// Journal list with one `full name=abbreviation` pair per line
    /// [default: journal_list.txt next to the executable]
    #[arg(long, env = "BIBABRV_JOURNAL_LIST")]
    journal_list: Option<PathBuf>,

    /// Path of the abbreviated file [default: <name>_abrv.<ext> next to the input]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the report without writing the abbreviated file
    #[arg(long)]
    dry_run: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log filter, e.g. `info` or `bibabrv=debug` (RUST_LOG takes precedence)
    #[arg(long, env = "BIBABRV_LOG", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    telemetry::init(&cli.log_level)?;

    let config = RunConfig::new(cli.file, cli.journal_list, cli.output)
        .context("invalid command line, see --help")?
        .with_dry_run(cli.dry_run);

    let report = bibabrv::run(&config)
        .with_context(|| format!("failed to abbreviate {}", config.input.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report, &config);
    }
    Ok(())
}

fn print_summary(report: &Report, config: &RunConfig) {
    println!("{report}");
    println!();
    if config.dry_run {
        println!("Dry run, {} not written", config.output.display());
    } else {
        println!("Wrote {}", config.output.display());
    }
}
