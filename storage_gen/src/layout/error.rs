use thiserror::Error;

/* Errors raised while walking a storage layout. All of them are fatal: the
   generator never produces partial output. */
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
  #[error("type `{type_id}` referenced by `{referenced_by}` is not defined in the `types` section")]
  UnknownType { type_id: String, referenced_by: String },

  #[error("struct type `{type_id}` has no `members`")]
  MissingMembers { type_id: String },

  #[error("cannot classify type `{type_id}` of `{referenced_by}` (not a value type, array, mapping, bytes/string or struct)")]
  UnclassifiableType { type_id: String, referenced_by: String },

  #[error("struct type `{type_id}` contains itself via `{referenced_by}`")]
  RecursiveStruct { type_id: String, referenced_by: String },

  #[error("offset {offset} of `{name}` does not fit in a 32-byte slot")]
  InvalidOffset { name: String, offset: u8 },

  #[error("slot of `{name}` overflows")]
  SlotOverflow { name: String },

  #[error("constant `{name}` is generated twice")]
  DuplicateConstant { name: String },
}
