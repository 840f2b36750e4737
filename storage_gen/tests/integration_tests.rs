use std::path::{Path, PathBuf};
use storage_gen::{
    cmds::generate::{render, GenerateOptions},
    codegen::OutputFormat,
    layout::{generate, Constant, GeneratorOptions, LayoutError, UnknownTypePolicy},
};
use storage_types::{StorageLayout, TypeInfo, TypeTable, VariableRef, U256};

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn options(input: &Path, contract: &str) -> GenerateOptions {
    GenerateOptions {
        input: input.to_path_buf(),
        solidity_version: "0.8.26".to_string(),
        contract_name: contract.to_string(),
        output: None,
        format: OutputFormat::Solidity,
        lenient: false,
    }
}

fn value_of(constants: &[Constant], name: &str) -> U256 {
    constants
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("missing constant {}", name))
        .value
}

#[test]
fn escrow_layout_matches_golden_file() {
    let input = fixtures_path().join("escrow.layout.json");
    let expected = std::fs::read_to_string(fixtures_path().join("EscrowStorageConstants.sol")).unwrap();

    let rendered = render(&options(&input, "Escrow")).expect("render should succeed");
    assert_eq!(rendered, expected);
}

#[test]
fn generation_is_deterministic() {
    let input = fixtures_path().join("escrow.layout.json");
    let first = render(&options(&input, "Escrow")).unwrap();
    let second = render(&options(&input, "Escrow")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn top_level_leaves_echo_slot_and_offset() {
    let input = fixtures_path().join("escrow.layout.json");
    let loaded = storage_loader::load_layout(&input, None).unwrap();
    let constants = generate(&loaded.layout, GeneratorOptions::default()).unwrap();

    for variable in &loaded.layout.storage {
        if variable.type_id.starts_with("t_struct") {
            continue;
        }
        let name = format!("STORAGE_{}", variable.label.replace('_', "").to_uppercase());
        assert_eq!(value_of(&constants, &format!("{}_SLOT", name)), variable.slot);
        assert_eq!(value_of(&constants, &format!("{}_OFFSET", name)), U256::from(variable.offset));
    }
}

/* A chain of structs `Level0 { pad; next: Level1 { pad; next: ... } }`
   where member `next` of level i sits at slot i + 1 inside its parent */
fn nested_layout(depth: usize, root_slot: u128) -> StorageLayout {
    let mut types = TypeTable::new();
    types.insert("t_uint256".to_string(), TypeInfo::new("uint256", U256::new(32)));
    for level in 0..depth {
        let mut members = vec![VariableRef::new("pad", U256::new(0), 0, "t_uint256")];
        if level + 1 < depth {
            members.push(VariableRef::new(
                "next",
                U256::new(level as u128 + 1),
                0,
                format!("t_struct(Level{})_storage", level + 1),
            ));
        }
        types.insert(
            format!("t_struct(Level{})_storage", level),
            TypeInfo::new(format!("struct Level{}", level), U256::new(32 * (depth - level) as u128)).with_members(members),
        );
    }
    StorageLayout {
        storage: vec![VariableRef::new("root", U256::new(root_slot), 0, "t_struct(Level0)_storage")],
        types,
    }
}

#[test]
fn nested_slots_are_sums_of_ancestor_slots() {
    for depth in 1..8 {
        let root_slot = 7;
        let constants = generate(&nested_layout(depth, root_slot), GeneratorOptions::default()).unwrap();

        let mut name = "STORAGE_ROOT".to_string();
        let mut expected_slot = root_slot;
        for level in 0..depth {
            assert_eq!(
                value_of(&constants, &format!("{}_PAD_SLOT", name)),
                U256::new(expected_slot),
                "depth {} level {}",
                depth,
                level
            );
            name.push_str("_NEXT");
            expected_slot += level as u128 + 1;
        }
    }
}

#[test]
fn every_struct_root_starts_with_its_size() {
    let constants = generate(&nested_layout(4, 0), GeneratorOptions::default()).unwrap();
    for level in 0..4 {
        let prefix = format!("STRUCT_LEVEL{}", level);
        let positions: Vec<usize> = constants
            .iter()
            .enumerate()
            .filter(|(_, c)| c.name.starts_with(&format!("{}_", prefix)))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(constants[positions[0]].name, format!("{}_SIZE", prefix));
        assert_eq!(constants[positions[0]].value, U256::new(32 * (4 - level) as u128));
    }
}

#[test]
fn same_label_under_different_prefixes_does_not_collide() {
    let mut types = TypeTable::new();
    types.insert("t_uint256".to_string(), TypeInfo::new("uint256", U256::new(32)));
    types.insert(
        "t_struct(A)1_storage".to_string(),
        TypeInfo::new("struct A", U256::new(32)).with_members(vec![VariableRef::new("value", U256::new(0), 0, "t_uint256")]),
    );
    types.insert(
        "t_struct(B)2_storage".to_string(),
        TypeInfo::new("struct B", U256::new(32)).with_members(vec![VariableRef::new("value", U256::new(0), 0, "t_uint256")]),
    );
    let layout = StorageLayout {
        storage: vec![
            VariableRef::new("value", U256::new(0), 0, "t_uint256"),
            VariableRef::new("a", U256::new(1), 0, "t_struct(A)1_storage"),
            VariableRef::new("b", U256::new(2), 0, "t_struct(B)2_storage"),
        ],
        types,
    };

    let constants = generate(&layout, GeneratorOptions::default()).unwrap();
    assert_eq!(value_of(&constants, "STORAGE_VALUE_SLOT"), U256::new(0));
    assert_eq!(value_of(&constants, "STORAGE_A_VALUE_SLOT"), U256::new(1));
    assert_eq!(value_of(&constants, "STORAGE_B_VALUE_SLOT"), U256::new(2));
    assert_eq!(value_of(&constants, "STRUCT_A_VALUE_SLOT"), U256::new(0));
    assert_eq!(value_of(&constants, "STRUCT_B_VALUE_SLOT"), U256::new(0));
}

#[test]
fn array_variable_is_one_leaf() {
    let mut types = TypeTable::new();
    types.insert("t_array(t_uint256)4_storage".to_string(), TypeInfo::new("uint256[4]", U256::new(128)));
    let layout = StorageLayout {
        storage: vec![VariableRef::new("window", U256::new(2), 0, "t_array(t_uint256)4_storage")],
        types,
    };

    let constants = generate(&layout, GeneratorOptions::default()).unwrap();
    assert_eq!(
        constants,
        vec![
            Constant::new("STORAGE_WINDOW_SLOT", U256::new(2)),
            Constant::new("STORAGE_WINDOW_OFFSET", U256::new(0)),
            Constant::new("STORAGE_WINDOW_SIZE", U256::new(128)),
        ]
    );
}

#[test]
fn unclassifiable_types_fail_unless_lenient() {
    let mut types = TypeTable::new();
    types.insert("t_bool".to_string(), TypeInfo::new("bool", U256::new(1)));
    types.insert("t_fixed128x18".to_string(), TypeInfo::new("fixed128x18", U256::new(16)));
    let layout = StorageLayout {
        storage: vec![
            VariableRef::new("rate", U256::new(0), 0, "t_fixed128x18"),
            VariableRef::new("paused", U256::new(0), 16, "t_bool"),
        ],
        types,
    };

    let err = generate(&layout, GeneratorOptions::default()).unwrap_err();
    assert!(matches!(err, LayoutError::UnclassifiableType { .. }));

    let lenient = GeneratorOptions { unknown_types: UnknownTypePolicy::Skip };
    let constants = generate(&layout, lenient).unwrap();
    let names: Vec<&str> = constants.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["STORAGE_PAUSED_SLOT", "STORAGE_PAUSED_OFFSET", "STORAGE_PAUSED_SIZE"]);
}

#[test]
fn artifact_input_renders_like_bare_input() {
    let dir = tempfile::tempdir().unwrap();
    let bare = std::fs::read_to_string(fixtures_path().join("escrow.layout.json")).unwrap();
    let artifact_path = dir.path().join("Escrow.json");
    std::fs::write(&artifact_path, format!("{{\"abi\": [], \"storageLayout\": {}}}", bare)).unwrap();

    let from_artifact = render(&options(&artifact_path, "Escrow")).unwrap();
    let from_bare = render(&options(&fixtures_path().join("escrow.layout.json"), "Escrow")).unwrap();
    assert_eq!(from_artifact, from_bare);
}

#[test]
fn json_format_lists_the_same_constants() {
    let input = fixtures_path().join("escrow.layout.json");
    let mut opts = options(&input, "Escrow");
    opts.format = OutputFormat::Json;

    let listing: serde_json::Value = serde_json::from_str(&render(&opts).unwrap()).unwrap();
    let constants = listing["constants"].as_array().unwrap();
    assert_eq!(constants.len(), 45);
    assert_eq!(constants[0]["name"], "STORAGE_STATE_SLOT");
    assert_eq!(constants[44]["name"], "STRUCT_ESCROW_TOTALS_LASTUPDATE_VALUE_SIZE");
}

#[test]
fn missing_type_aborts_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(
        &path,
        r#"{"storage": [{"label": "owner", "offset": 0, "slot": "0", "type": "t_address"}], "types": {}}"#,
    )
    .unwrap();

    let err = render(&options(&path, "Broken")).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("t_address"), "{}", message);
    assert!(message.contains("owner"), "{}", message);
}

#[test]
fn failed_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.json");
    std::fs::write(&input, r#"{"storage": [{"label": "x", "offset": 0, "slot": "0", "type": "t_uint8"}]}"#).unwrap();
    let output = dir.path().join("Out.sol");

    let mut opts = options(&input, "Broken");
    opts.output = Some(output.clone());
    assert!(storage_gen::cmds::generate::run(&opts).is_err());
    assert!(!output.exists());
}

#[test]
fn writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("EscrowStorageConstants.sol");
    let mut opts = options(&fixtures_path().join("escrow.layout.json"), "Escrow");
    opts.output = Some(output.clone());

    storage_gen::cmds::generate::run(&opts).unwrap();
    let expected = std::fs::read_to_string(fixtures_path().join("EscrowStorageConstants.sol")).unwrap();
    assert_eq!(std::fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn relocated_layout_keeps_full_width_slots() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("relocated.json");
    std::fs::write(
        &input,
        r#"{
  "storage": [
    {"label": "owner", "offset": 0, "slot": "57896044618658097711785492504343953926634992332820282019728792003956564819968", "type": "t_address"},
    {"label": "config", "offset": 0, "slot": "57896044618658097711785492504343953926634992332820282019728792003956564819969", "type": "t_struct(Config)3_storage"}
  ],
  "types": {
    "t_address": {"encoding": "inplace", "label": "address", "numberOfBytes": "20"},
    "t_struct(Config)3_storage": {
      "encoding": "inplace", "label": "struct Relocated.Config", "numberOfBytes": "64",
      "members": [
        {"label": "fee", "offset": 0, "slot": "0", "type": "t_uint256"},
        {"label": "limit", "offset": 0, "slot": "1", "type": "t_uint256"}
      ]
    },
    "t_uint256": {"encoding": "inplace", "label": "uint256", "numberOfBytes": "32"}
  }
}"#,
    )
    .unwrap();

    let rendered = render(&options(&input, "Relocated")).expect("render should succeed");
    assert!(rendered.contains(
        "uint256 public constant STORAGE_OWNER_SLOT = 57896044618658097711785492504343953926634992332820282019728792003956564819968;"
    ));
    assert!(rendered.contains(
        "uint256 public constant STORAGE_CONFIG_LIMIT_SLOT = 57896044618658097711785492504343953926634992332820282019728792003956564819970;"
    ));
    assert!(rendered.contains("uint256 public constant STRUCT_RELOCATED_CONFIG_LIMIT_SLOT = 1;"));
}
