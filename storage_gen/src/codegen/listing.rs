/* JSON and YAML listings of the generated constants */

use super::{EmitError, LibraryTarget};
use crate::layout::Constant;
use serde::Serialize;
use storage_types::U256;

#[derive(Serialize)]
struct Listing<'a> {
    contract: &'a str,
    library: String,
    solidity: &'a str,
    constants: Vec<ListedConstant<'a>>,
}

#[derive(Serialize)]
struct ListedConstant<'a> {
    name: &'a str,
    value: ListedValue,
}

/* Values past u64 are written as decimal strings so every JSON reader can load them */
#[derive(Serialize)]
#[serde(untagged)]
enum ListedValue {
    Number(u64),
    Decimal(String),
}

impl From<U256> for ListedValue {
    fn from(value: U256) -> Self {
        if value <= U256::from(u64::MAX) {
            ListedValue::Number(value.as_u64())
        } else {
            ListedValue::Decimal(value.to_string())
        }
    }
}

fn listing<'a>(target: &'a LibraryTarget, constants: &'a [Constant]) -> Listing<'a> {
    Listing {
        contract: &target.contract_name,
        library: target.library_name(),
        solidity: &target.solidity_version,
        constants: constants
            .iter()
            .map(|c| ListedConstant {
                name: &c.name,
                value: c.value.into(),
            })
            .collect(),
    }
}

pub fn emit_json(target: &LibraryTarget, constants: &[Constant]) -> Result<String, EmitError> {
    let mut output = serde_json::to_string_pretty(&listing(target, constants))?;
    output.push('\n');
    Ok(output)
}

pub fn emit_yaml(target: &LibraryTarget, constants: &[Constant]) -> Result<String, EmitError> {
    Ok(serde_yml::to_string(&listing(target, constants))?)
}
