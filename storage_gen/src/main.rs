use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use storage_gen::cmds::common::validate_contract_name;
use storage_gen::cmds::generate::{self, GenerateOptions};
use storage_gen::codegen::OutputFormat;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "storage-gen")]
#[command(about = "Generate named slot/offset/size constants from a storage layout", long_about = None)]
#[command(version)]
struct Cli {
    /// Storage layout JSON (bare layout, build artifact or standard-json output)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Version string for the generated `pragma solidity` line
    #[arg(value_name = "SOLIDITY_VERSION")]
    solidity_version: String,

    /// Contract name; the library is called `<CONTRACT_NAME>StorageConstants`
    #[arg(value_name = "CONTRACT_NAME", value_parser = validate_contract_name)]
    contract_name: String,

    /// Write the generated file here instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "solidity")]
    format: Format,

    /// Skip variables whose type cannot be classified instead of failing
    #[arg(long = "lenient")]
    lenient: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Format {
    /// Solidity library of `uint256 public constant`s
    Solidity,
    /// JSON listing of the constants
    Json,
    /// YAML listing of the constants
    Yaml,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Solidity => OutputFormat::Solidity,
            Format::Json => OutputFormat::Json,
            Format::Yaml => OutputFormat::Yaml,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    /* stdout carries the generated file */
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = GenerateOptions {
        input: cli.input,
        solidity_version: cli.solidity_version,
        contract_name: cli.contract_name,
        output: cli.output,
        format: cli.format.into(),
        lenient: cli.lenient,
    };
    generate::run(&options)?;

    Ok(())
}
