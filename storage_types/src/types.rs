use crate::number::{deserialize_decimal, serialize_decimal, ByteSize, SlotIndex};
use indexmap::IndexMap;
use serde::de::Deserializer;
use serde_derive::{Deserialize, Serialize};

/* Key into the `types` section, e.g. `t_uint256` or `t_struct(Pair)12_storage` */
pub type TypeId = String;

/* The registry table as it appears in the document. Insertion order is the
   document order. */
pub type TypeTable = IndexMap<TypeId, TypeInfo>;

/* A storage variable or struct member */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VariableRef {
    pub label: String,
    /* Relative to the enclosing struct, or absolute for top-level variables */
    #[serde(deserialize_with = "deserialize_decimal", serialize_with = "serialize_decimal")]
    pub slot: SlotIndex,
    /* Byte offset inside the slot for packed values */
    pub offset: u8,
    #[serde(rename = "type")]
    pub type_id: TypeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ast_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<String>,
}

impl VariableRef {
    pub fn new(label: impl Into<String>, slot: SlotIndex, offset: u8, type_id: impl Into<TypeId>) -> Self {
        Self {
            label: label.into(),
            slot,
            offset,
            type_id: type_id.into(),
            ast_id: None,
            contract: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TypeInfo {
    /* Human-readable name, e.g. `uint256` or `struct Vault.Position` */
    pub label: String,
    #[serde(deserialize_with = "deserialize_decimal", serialize_with = "serialize_decimal")]
    pub number_of_bytes: ByteSize,
    /* Only present for structs */
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<VariableRef>>,
    /* `inplace`, `mapping`, `dynamic_array` or `bytes` */
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    /* Element type of arrays */
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<TypeId>,
    /* Key and value types of mappings */
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<TypeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<TypeId>,
}

impl TypeInfo {
    pub fn new(label: impl Into<String>, number_of_bytes: ByteSize) -> Self {
        Self {
            label: label.into(),
            number_of_bytes,
            members: None,
            encoding: None,
            base: None,
            key: None,
            value: None,
        }
    }

    pub fn with_members(mut self, members: Vec<VariableRef>) -> Self {
        self.members = Some(members);
        self
    }
}

/* The whole layout document: `{ "storage": [...], "types": {...} }` */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
pub struct StorageLayout {
    pub storage: Vec<VariableRef>,
    /* solc writes `null` here for contracts without state, but the key is required */
    #[serde(deserialize_with = "deserialize_nullable_table")]
    pub types: TypeTable,
}

fn deserialize_nullable_table<'de, D>(deserializer: D) -> Result<TypeTable, D::Error>
where
    D: Deserializer<'de>,
{
    let table: Option<TypeTable> = serde::Deserialize::deserialize(deserializer)?;
    Ok(table.unwrap_or_default())
}
