/* Recursive layout walk producing flat leaf records */

use super::classify::{classify, TypeCategory};
use super::error::LayoutError;
use super::registry::TypeRegistry;
use serde::Serialize;
use storage_types::{ByteSize, SlotIndex, VariableRef, U256};
use tracing::{trace, warn};

/// A fully resolved storage location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafRecord {
  pub name: String,
  /// Absolute slot: the sum of the slots along the path from the root.
  #[serde(serialize_with = "storage_types::serialize_decimal")]
  pub slot: SlotIndex,
  /// Byte offset within `slot`, taken from the leaf itself.
  pub offset: u8,
  #[serde(serialize_with = "storage_types::serialize_decimal")]
  pub size: ByteSize,
}

/// One emitted `NAME = VALUE` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constant {
  pub name: String,
  #[serde(serialize_with = "storage_types::serialize_decimal")]
  pub value: U256,
}

impl Constant {
  pub fn new(name: impl Into<String>, value: U256) -> Self {
    Self { name: name.into(), value }
  }
}

impl LeafRecord {
  /// `<name>_SLOT`, `<name>_OFFSET` and `<name>_SIZE`, in that order.
  pub fn constants(&self) -> [Constant; 3] {
    [
      Constant::new(format!("{}_SLOT", self.name), self.slot),
      Constant::new(format!("{}_OFFSET", self.name), U256::from(self.offset)),
      Constant::new(format!("{}_SIZE", self.name), self.size),
    ]
  }
}

/// What to do with a type that matches no category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTypePolicy {
  #[default]
  Reject,
  /// Drop the node and keep going.
  Skip,
}

/// Name segment contributed by a variable or member label.
pub fn label_segment(label: &str) -> String {
  label.replace('_', "").to_uppercase()
}

/// Prefix of a struct-type root, e.g. `struct Vault.Position` -> `STRUCT_VAULT_POSITION`.
pub fn struct_root_prefix(type_label: &str) -> String {
  type_label.replace([' ', '.'], "_").to_uppercase()
}

pub struct LayoutWalker<'a> {
  registry: TypeRegistry<'a>,
  policy: UnknownTypePolicy,
}

impl<'a> LayoutWalker<'a> {
  pub fn new(registry: TypeRegistry<'a>, policy: UnknownTypePolicy) -> Self {
    Self { registry, policy }
  }

  /// Walk `variable` under `prefix`, with `base_slot` the absolute slot of the
  /// enclosing struct (0 for roots). Records come out in declared member order.
  pub fn walk(&self, prefix: &str, base_slot: SlotIndex, variable: &VariableRef) -> Result<Vec<LeafRecord>, LayoutError> {
    let mut records = Vec::new();
    let mut open_structs = Vec::new();
    self.walk_into(prefix, base_slot, variable, &mut open_structs, &mut records)?;
    Ok(records)
  }

  /// Walk every member of a struct type as if it were the root, with slots
  /// relative to the start of the struct.
  pub fn walk_members(&self, prefix: &str, type_id: &'a str) -> Result<Vec<LeafRecord>, LayoutError> {
    let mut records = Vec::new();
    let mut open_structs = vec![type_id];
    for member in self.registry.members(type_id, prefix)? {
      self.walk_into(prefix, U256::ZERO, member, &mut open_structs, &mut records)?;
    }
    Ok(records)
  }

  fn walk_into<'v>(
    &self,
    prefix: &str,
    base_slot: SlotIndex,
    variable: &'v VariableRef,
    open_structs: &mut Vec<&'v str>,
    records: &mut Vec<LeafRecord>,
  ) -> Result<(), LayoutError>
  where
    'a: 'v,
  {
    let name = format!("{}_{}", prefix, label_segment(&variable.label));
    let slot = base_slot
      .checked_add(variable.slot)
      .ok_or_else(|| LayoutError::SlotOverflow { name: name.clone() })?;

    match classify(&variable.type_id) {
      Some(category) if category.is_leaf() => {
        if variable.offset > 31 {
          return Err(LayoutError::InvalidOffset { name, offset: variable.offset });
        }
        let size = self.registry.get(&variable.type_id, &variable.label)?.number_of_bytes;
        trace!(%name, %slot, offset = variable.offset, %size, "leaf");
        records.push(LeafRecord { name, slot, offset: variable.offset, size });
      }
      Some(TypeCategory::Aggregate) => {
        let type_id = variable.type_id.as_str();
        if open_structs.contains(&type_id) {
          return Err(LayoutError::RecursiveStruct {
            type_id: type_id.to_string(),
            referenced_by: variable.label.clone(),
          });
        }
        let members = self.registry.members(type_id, &variable.label)?;
        open_structs.push(type_id);
        for member in members {
          self.walk_into(&name, slot, member, open_structs, records)?;
        }
        open_structs.pop();
      }
      _ => match self.policy {
        UnknownTypePolicy::Reject => {
          return Err(LayoutError::UnclassifiableType {
            type_id: variable.type_id.clone(),
            referenced_by: variable.label.clone(),
          });
        }
        UnknownTypePolicy::Skip => {
          warn!(%name, type_id = %variable.type_id, "skipping unclassifiable type");
        }
      },
    }

    Ok(())
  }
}

/// Walk `variable` with the strict policy.
pub fn walk(prefix: &str, base_slot: SlotIndex, variable: &VariableRef, registry: TypeRegistry<'_>) -> Result<Vec<LeafRecord>, LayoutError> {
  LayoutWalker::new(registry, UnknownTypePolicy::Reject).walk(prefix, base_slot, variable)
}
