/* Type classification by type identifier */

/// How the walker treats a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
  /// Fits in one slot: booleans, addresses, integers, fixed bytes, enums,
  /// contract references, user-defined value types and function pointers.
  ScalarLike,
  /// Dynamic bytes/strings, arrays and mappings. Emitted as a single leaf
  /// even when the value spans several slots.
  OpaqueComplex,
  /// Structs. The walker descends into the members.
  Aggregate,
}

impl TypeCategory {
  pub fn is_leaf(self) -> bool {
    matches!(self, TypeCategory::ScalarLike | TypeCategory::OpaqueComplex)
  }
}

const SCALAR_PREFIXES: &[&str] = &[
  "t_uint",
  "t_int",
  "t_enum",
  "t_contract",
  "t_userDefinedValueType",
  "t_function",
];

const OPAQUE_PREFIXES: &[&str] = &["t_array", "t_mapping"];

const OPAQUE_EXACT: &[&str] = &["t_bytes_storage", "t_string_storage"];

/// Classify a type identifier. Returns `None` for identifiers that match no
/// known category.
pub fn classify(type_id: &str) -> Option<TypeCategory> {
  if type_id == "t_bool" || type_id == "t_address" || type_id == "t_address_payable" {
    return Some(TypeCategory::ScalarLike);
  }
  if is_fixed_bytes(type_id) || SCALAR_PREFIXES.iter().any(|p| type_id.starts_with(p)) {
    return Some(TypeCategory::ScalarLike);
  }
  if OPAQUE_EXACT.contains(&type_id) || OPAQUE_PREFIXES.iter().any(|p| type_id.starts_with(p)) {
    return Some(TypeCategory::OpaqueComplex);
  }
  if type_id.starts_with("t_struct") {
    return Some(TypeCategory::Aggregate);
  }
  None
}

/* `t_bytes1` .. `t_bytes32` */
fn is_fixed_bytes(type_id: &str) -> bool {
  type_id
    .strip_prefix("t_bytes")
    .filter(|width| !width.is_empty() && width.bytes().all(|b| b.is_ascii_digit()))
    .and_then(|width| width.parse::<u8>().ok())
    .map_or(false, |width| (1..=32).contains(&width))
}
