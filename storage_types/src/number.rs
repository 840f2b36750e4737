use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde_derive::Deserialize;

pub use ethnum::U256;

/* Slot indices and byte sizes. A slot is a 256-bit word index, so solc writes
   both as decimal strings; hand-written fixtures tend to use numbers. */
pub type SlotIndex = U256;
pub type ByteSize = U256;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumericValue {
    Str(String),
    Unsigned(u64),
}

/* Deserialize a non-negative integer given either as a JSON number or as a
   decimal string */
pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    let value: NumericValue = serde::Deserialize::deserialize(deserializer)?;
    match value {
        NumericValue::Unsigned(u) => Ok(U256::from(u)),
        NumericValue::Str(s) => parse_decimal(&s).map_err(DeError::custom),
    }
}

/* Write the value back the way solc does: a decimal string */
pub fn serialize_decimal<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}

/* Parse a decimal string such as "0" or "115792089237316195423570985008687907853269984665640564039457584007913129639935" */
pub fn parse_decimal(s: &str) -> Result<U256, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("expected a decimal integer, found an empty string".to_string());
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("expected a decimal integer, found \"{}\"", s));
    }
    U256::from_str_radix(trimmed, 10).map_err(|e| format!("decimal integer \"{}\" out of range: {}", s, e))
}
