use super::classify::{classify, TypeCategory};
use super::error::LayoutError;
use storage_types::{TypeId, TypeInfo, TypeTable, VariableRef};

/* Read-only view of the `types` section, queried by key during the walk */
#[derive(Debug, Clone, Copy)]
pub struct TypeRegistry<'a> {
  types: &'a TypeTable,
}

impl<'a> TypeRegistry<'a> {
  pub fn new(types: &'a TypeTable) -> Self {
    Self { types }
  }

  /* `referenced_by` names the variable or member whose type is looked up, for error messages */
  pub fn get(&self, type_id: &str, referenced_by: &str) -> Result<&'a TypeInfo, LayoutError> {
    self.types.get(type_id).ok_or_else(|| LayoutError::UnknownType {
      type_id: type_id.to_string(),
      referenced_by: referenced_by.to_string(),
    })
  }

  pub fn members(&self, type_id: &str, referenced_by: &str) -> Result<&'a [VariableRef], LayoutError> {
    self
      .get(type_id, referenced_by)?
      .members
      .as_deref()
      .ok_or_else(|| LayoutError::MissingMembers { type_id: type_id.to_string() })
  }

  /* Struct types in document order */
  pub fn struct_types(&self) -> impl Iterator<Item = (&'a TypeId, &'a TypeInfo)> + 'a {
    self.types.iter().filter(|(type_id, _)| classify(type_id) == Some(TypeCategory::Aggregate))
  }

  pub fn len(&self) -> usize {
    self.types.len()
  }

  pub fn is_empty(&self) -> bool {
    self.types.is_empty()
  }
}
