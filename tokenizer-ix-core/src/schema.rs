//! Instruction descriptor table types.
//!
//! A program's whole wire contract is a `'static` [`ProgramInterface`]: for
//! every instruction the tag byte, the ordered argument fields and the
//! ordered account slots with their signer/writable flags. The encoder, the
//! account list builder and the IDL export all read from here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{InstructionError, InstructionResult};

/// Wire type of an instruction argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    /// u32 little-endian byte length, then raw UTF-8 bytes
    String,
    /// 32 raw bytes
    Address,
}

impl FieldType {
    /// Encoded width for fixed-size types, `None` for strings.
    pub const fn fixed_len(self) -> Option<usize> {
        match self {
            FieldType::Bool | FieldType::U8 => Some(1),
            FieldType::U16 => Some(2),
            FieldType::U32 => Some(4),
            FieldType::U64 => Some(8),
            FieldType::U128 => Some(16),
            FieldType::Address => Some(32),
            FieldType::String => None,
        }
    }

    /// Type name used in IDL documents.
    pub const fn idl_name(self) -> &'static str {
        match self {
            FieldType::Bool => "bool",
            FieldType::U8 => "u8",
            FieldType::U16 => "u16",
            FieldType::U32 => "u32",
            FieldType::U64 => "u64",
            FieldType::U128 => "u128",
            FieldType::String => "string",
            FieldType::Address => "publicKey",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Address => f.write_str("address"),
            other => f.write_str(other.idl_name()),
        }
    }
}

/// A named argument field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub ty: FieldType,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, ty: FieldType) -> Self {
        Self { name, ty }
    }
}

/// One positional account slot and the flags the program requires for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountSlot {
    pub name: &'static str,
    pub is_signer: bool,
    pub is_writable: bool,
    pub docs: &'static str,
}

impl AccountSlot {
    pub const fn new(name: &'static str, is_signer: bool, is_writable: bool) -> Self {
        Self {
            name,
            is_signer,
            is_writable,
            docs: "",
        }
    }

    pub const fn readonly(name: &'static str) -> Self {
        Self::new(name, false, false)
    }

    pub const fn writable(name: &'static str) -> Self {
        Self::new(name, false, true)
    }

    pub const fn signer(name: &'static str) -> Self {
        Self::new(name, true, false)
    }

    pub const fn writable_signer(name: &'static str) -> Self {
        Self::new(name, true, true)
    }

    pub const fn docs(self, docs: &'static str) -> Self {
        Self { docs, ..self }
    }
}

/// Static wire description of one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionDescriptor {
    /// snake_case instruction name
    pub name: &'static str,
    pub tag: u8,
    pub fields: &'static [FieldDescriptor],
    pub accounts: &'static [AccountSlot],
    pub docs: &'static str,
}

impl InstructionDescriptor {
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    pub fn account_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.accounts.iter().map(|a| a.name)
    }

    /// Markdown account table, in the layout used by the program's
    /// instruction documentation.
    pub fn accounts_table(&self) -> String {
        let mut table = String::from("| Index | Writable | Signer | Description |\n");
        table.push_str("| ----- | -------- | ------ | ----------- |\n");
        for (index, slot) in self.accounts.iter().enumerate() {
            let description = if slot.docs.is_empty() {
                slot.name
            } else {
                slot.docs
            };
            table.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                index,
                flag_emoji(slot.is_writable),
                flag_emoji(slot.is_signer),
                description
            ));
        }
        table
    }
}

fn flag_emoji(flag: bool) -> &'static str {
    if flag {
        "✅"
    } else {
        "❌"
    }
}

/// The closed instruction set of one program version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramInterface {
    pub name: &'static str,
    pub version: &'static str,
    pub instructions: &'static [InstructionDescriptor],
}

impl ProgramInterface {
    /// Look up an instruction by its tag byte.
    pub fn descriptor(&self, tag: u8) -> InstructionResult<&'static InstructionDescriptor> {
        let instructions: &'static [InstructionDescriptor] = self.instructions;
        instructions
            .iter()
            .find(|ix| ix.tag == tag)
            .ok_or_else(|| InstructionError::UnknownVariant {
                program: self.name.to_string(),
                tag,
            })
    }

    /// Look up an instruction by its snake_case name.
    pub fn descriptor_by_name(
        &self,
        name: &str,
    ) -> InstructionResult<&'static InstructionDescriptor> {
        let instructions: &'static [InstructionDescriptor] = self.instructions;
        instructions
            .iter()
            .find(|ix| ix.name == name)
            .ok_or_else(|| InstructionError::UnknownInstructionName {
                program: self.name.to_string(),
                name: name.to_string(),
            })
    }
}
