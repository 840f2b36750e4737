/* Solidity library emission */

use super::LibraryTarget;
use crate::layout::Constant;

const INDENT: &str = "    ";

pub fn emit_library(target: &LibraryTarget, constants: &[Constant]) -> String {
    let mut output = String::new();
    output.push_str(&format!("pragma solidity {};\n", target.solidity_version));
    output.push('\n');
    output.push_str(&format!("library {} {{\n", target.library_name()));
    for constant in constants {
        output.push_str(&emit_constant(constant));
    }
    output.push_str("}\n");
    output
}

fn emit_constant(constant: &Constant) -> String {
    format!(
        "{}uint256 public constant {} = {};\n",
        INDENT, constant.name, constant.value
    )
}
