//! IDL export of a descriptor table.

use tokenizer_ix_core::idl::ProgramIdl;
use tokenizer_ix_core::prelude::*;

const MINT: InstructionDescriptor = InstructionDescriptor {
    name: "mint_to",
    tag: 3,
    fields: &[
        FieldDescriptor::new("amount", FieldType::U64),
        FieldDescriptor::new("recipient", FieldType::Address),
    ],
    accounts: &[
        AccountSlot::writable("mint").docs("The mint"),
        AccountSlot::signer("authority"),
    ],
    docs: "Mint new tokens\nto a recipient",
};

static INTERFACE: ProgramInterface = ProgramInterface {
    name: "minter",
    version: "1.2.0",
    instructions: &[MINT],
};

#[test]
fn test_idl_carries_discriminant_flags_and_types() {
    let idl = ProgramIdl::from_interface(&INTERFACE);
    assert_eq!(idl.name, "minter");
    assert_eq!(idl.version, "1.2.0");

    let ix = idl.instruction("mint_to").unwrap();
    assert_eq!(ix.discriminant, 3);
    assert_eq!(ix.docs, vec!["Mint new tokens", "to a recipient"]);
    assert!(ix.accounts[0].writable && !ix.accounts[0].signer);
    assert!(!ix.accounts[1].writable && ix.accounts[1].signer);
    assert_eq!(ix.args[0].type_, "u64");
    assert_eq!(ix.args[1].type_, "publicKey");
}

#[test]
fn test_idl_json_round_trip() {
    let idl = ProgramIdl::from_interface(&INTERFACE);
    let json = idl.to_json_pretty().unwrap();
    assert!(json.contains("\"type\": \"u64\""), "JSON: {}", json);
    assert_eq!(ProgramIdl::from_json(&json).unwrap(), idl);
}

#[test]
fn test_undocumented_account_omits_docs() {
    let idl = ProgramIdl::from_interface(&INTERFACE);
    let json = serde_json::to_string(&idl.instructions[0].accounts[1]).unwrap();
    assert!(!json.contains("docs"), "empty docs should be omitted, JSON: {}", json);
}

#[test]
fn test_missing_flags_default_false() {
    let json = r#"{"name":"state"}"#;
    let acc: tokenizer_ix_core::idl::IdlAccountItem = serde_json::from_str(json).unwrap();
    assert!(!acc.writable);
    assert!(!acc.signer);
    assert!(acc.docs.is_empty());
}

#[test]
fn test_accounts_table_markdown() {
    let table = MINT.accounts_table();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines[0], "| Index | Writable | Signer | Description |");
    assert_eq!(lines[2], "| 0 | ✅ | ❌ | The mint |");
    // falls back to the slot name
    assert_eq!(lines[3], "| 1 | ❌ | ✅ | authority |");
}
