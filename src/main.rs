use anyhow::{bail, Context, Result};
use clap::Parser;
use gather_modules::{report, GatherConfig};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gather-modules")]
#[command(author, version, about = "Generate a single HTML page showing all module visualisations from multiple antiSMASH results")]
struct Args {
    /// The path to a directory containing antiSMASH output directories
    #[arg(value_name = "PATH")]
    inputs: PathBuf,

    /// The output location, will be created if it does not exist
    #[arg(value_name = "PATH")]
    output: PathBuf,

    /// Directory of static files copied next to the page (default: bundled `dependencies`)
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Open the generated page in a browser
    #[arg(long)]
    open: bool,

    /// Show detailed progress
    #[arg(short, long)]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.verbose {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    if !args.inputs.is_dir() {
        bail!("Input is not a directory: {}", args.inputs.display());
    }
    if !args.output.exists() {
        std::fs::create_dir_all(&args.output)
            .with_context(|| format!("Failed to create output directory {}", args.output.display()))?;
    }
    if !args.output.is_dir() {
        bail!("Output is not a directory: {}", args.output.display());
    }

    info!("gather-modules v{}", env!("CARGO_PKG_VERSION"));

    let mut config = GatherConfig::new()
        .with_open_report(args.open)
        .with_quiet(args.quiet);
    if let Some(ref assets) = args.assets {
        config = config.with_assets_dir(assets);
    }

    let index = report::generate_page(&args.inputs, &args.output, &config)?;

    if config.open_report {
        if let Err(e) = open::that(&index) {
            warn!("Could not open {} automatically: {}", index.display(), e);
        }
    }
    Ok(())
}
