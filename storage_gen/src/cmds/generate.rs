/* Generate command - emit storage constants from a layout document */

use crate::codegen::{self, LibraryTarget, OutputFormat};
use crate::layout::{generate, GeneratorOptions, UnknownTypePolicy};
use anyhow::Context;
use std::path::PathBuf;
use storage_loader::load_layout;
use tracing::{debug, info};

use super::common::write_output;

#[derive(Clone, Debug)]
pub struct GenerateOptions {
  pub input: PathBuf,
  pub solidity_version: String,
  pub contract_name: String,
  pub output: Option<PathBuf>,
  pub format: OutputFormat,
  pub lenient: bool,
}

/* Load, walk and render without touching the output. Any failure leaves
   nothing written. */
pub fn render(options: &GenerateOptions) -> anyhow::Result<String> {
  let loaded = load_layout(&options.input, Some(&options.contract_name))?;
  debug!(format = ?loaded.format, "input document");

  let generator_options = GeneratorOptions {
    unknown_types: if options.lenient { UnknownTypePolicy::Skip } else { UnknownTypePolicy::Reject },
  };
  let constants = generate(&loaded.layout, generator_options)
    .with_context(|| format!("cannot generate constants for {}", options.input.display()))?;

  let target = LibraryTarget::new(&options.contract_name, &options.solidity_version);
  let rendered = codegen::emit(options.format, &target, &constants)?;
  info!(constants = constants.len(), library = %target.library_name(), "rendered storage constants");
  Ok(rendered)
}

/* Execute the generate command */
pub fn run(options: &GenerateOptions) -> anyhow::Result<()> {
  let rendered = render(options)?;
  write_output(&rendered, options.output.as_deref())
}
