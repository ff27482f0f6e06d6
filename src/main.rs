use std::collections::HashSet;
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cardex::catalog::Catalog;
use cardex::config::ExportConfig;
use cardex::constants::images::DEFAULT_IMAGE_DIR;
use cardex::pipeline::{ExportJob, Exporter};
use cardex::types::SetCode;

#[derive(Debug, Parser)]
#[command(
    name = "cardex",
    disable_help_subcommand = true,
    about = "Resolve card lists against a set dataset and write wiki Lua data modules",
    after_help = "Each LIST=OUTPUT pair is processed in order against the same catalog."
)]
struct Cli {
    /// Set dataset JSON file (AllSets layout)
    #[arg(long = "data", value_name = "PATH")]
    data: PathBuf,
    /// Card lists paired with output modules
    #[arg(value_name = "LIST=OUTPUT", required = true, value_parser = parse_job)]
    jobs: Vec<ExportJob>,
    /// Skip image downloads entirely
    #[arg(long = "no-images")]
    no_images: bool,
    /// Directory downloaded card images are stored in
    #[arg(long = "image-dir", value_name = "DIR", default_value = DEFAULT_IMAGE_DIR)]
    image_dir: PathBuf,
    /// Exclude a set code from resolution, repeat as needed (default: EXP)
    #[arg(long = "skip-set", value_name = "CODE")]
    skip_sets: Vec<SetCode>,
    /// Log at debug level (RUST_LOG overrides)
    #[arg(long)]
    verbose: bool,
}

fn parse_job(raw: &str) -> Result<ExportJob, String> {
    let (list, output) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected LIST=OUTPUT, got '{raw}'"))?;
    if list.is_empty() || output.is_empty() {
        return Err(format!("both sides of '{raw}' must be non-empty paths"));
    }
    Ok(ExportJob {
        list: PathBuf::from(list),
        output: PathBuf::from(output),
    })
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .try_init();

    info!("[cardex] loading set dataset from {}", cli.data.display());
    let mut catalog = Catalog::load(File::open(&cli.data)?)?;

    let mut config = ExportConfig::default()
        .with_download_images(!cli.no_images)
        .with_image_dir(cli.image_dir);
    if !cli.skip_sets.is_empty() {
        config = config.with_skip_sets(cli.skip_sets);
    }
    let excluded: HashSet<SetCode> = config.skip_sets.iter().cloned().collect();
    catalog.remove_sets(&excluded);
    info!("[cardex] catalog holds {} sets after exclusions", catalog.len());

    let exporter = Exporter::new(&catalog, &config);
    for job in &cli.jobs {
        let summary = exporter.run(job)?;
        info!(
            "[cardex] {}: {} written, {} missing, {} render failures",
            job.list.display(),
            summary.written,
            summary.missing,
            summary.failed
        );
    }
    Ok(())
}
