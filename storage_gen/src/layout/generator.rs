/* Storage roots and struct-type roots, flattened into the constant list */

use super::error::LayoutError;
use super::registry::TypeRegistry;
use super::walker::{struct_root_prefix, Constant, LayoutWalker, UnknownTypePolicy};
use std::collections::HashSet;
use storage_types::{StorageLayout, U256};
use tracing::debug;

pub const STORAGE_PREFIX: &str = "STORAGE";

#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratorOptions {
  pub unknown_types: UnknownTypePolicy,
}

/// Produce every constant for `layout`: storage roots in declaration order,
/// then struct-type roots in document order. Fails if two constants would
/// share a name.
pub fn generate(layout: &StorageLayout, options: GeneratorOptions) -> Result<Vec<Constant>, LayoutError> {
  let registry = TypeRegistry::new(&layout.types);
  let walker = LayoutWalker::new(registry, options.unknown_types);
  let mut constants = Vec::new();

  for variable in &layout.storage {
    let records = walker.walk(STORAGE_PREFIX, U256::ZERO, variable)?;
    debug!(variable = %variable.label, leaves = records.len(), "storage root");
    constants.extend(records.iter().flat_map(|r| r.constants()));
  }

  for (type_id, info) in registry.struct_types() {
    let prefix = struct_root_prefix(&info.label);
    constants.push(Constant::new(format!("{}_SIZE", prefix), info.number_of_bytes));

    let records = walker.walk_members(&prefix, type_id)?;
    debug!(%type_id, %prefix, leaves = records.len(), "struct root");
    constants.extend(records.iter().flat_map(|r| r.constants()));
  }

  ensure_unique(&constants)?;
  debug!(count = constants.len(), "generated constants");
  Ok(constants)
}

fn ensure_unique(constants: &[Constant]) -> Result<(), LayoutError> {
  let mut seen = HashSet::with_capacity(constants.len());
  for constant in constants {
    if !seen.insert(constant.name.as_str()) {
      return Err(LayoutError::DuplicateConstant { name: constant.name.clone() });
    }
  }
  Ok(())
}
