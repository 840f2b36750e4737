/* Common utilities for the command layer */

use anyhow::Context;
use std::io::Write;
use std::path::Path;

/* Contract names end up in `library <name>StorageConstants`, so they must be
   Solidity identifiers */
pub fn validate_contract_name(name: &str) -> Result<String, String> {
  let mut chars = name.chars();
  let valid_start = chars.next().map_or(false, |c| c.is_ascii_alphabetic() || c == '_' || c == '$');
  if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
    Ok(name.to_string())
  } else {
    Err(format!("`{}` is not a valid Solidity identifier", name))
  }
}

/* Write the finished artifact in one go, to a file or to stdout */
pub fn write_output(contents: &str, output: Option<&Path>) -> anyhow::Result<()> {
  match output {
    Some(path) => std::fs::write(path, contents).with_context(|| format!("failed to write {}", path.display())),
    None => {
      let stdout = std::io::stdout();
      let mut handle = stdout.lock();
      handle.write_all(contents.as_bytes()).context("failed to write to stdout")?;
      handle.flush().context("failed to flush stdout")
    }
  }
}
