use clap::Parser;
use std::path::PathBuf;
use storage_loader::load_layout;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "storage-layout-extract")]
#[command(about = "Extract the bare storage layout from a build artifact or standard-json output")]
struct Args {
    /// Input JSON document
    #[arg(short, long, required = true)]
    file: PathBuf,

    /// Contract to select from a standard-json output
    #[arg(short, long)]
    contract: Option<String>,

    /// Output file path
    #[arg(short, long, required = true)]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    info!(input = %args.file.display(), "extracting storage layout");

    let loaded = load_layout(&args.file, args.contract.as_deref())?;
    /* slots and sizes go out as decimal strings, the shape solc writes */
    let json = serde_json::to_string_pretty(&loaded.layout)?;
    std::fs::write(&args.output, json + "\n")?;

    info!(
        variables = loaded.layout.storage.len(),
        types = loaded.layout.types.len(),
        format = ?loaded.format,
        output = %args.output.display(),
        "wrote bare layout"
    );

    Ok(())
}
