//! IDL (Interface Definition Language) export.
//!
//! Renders a [`ProgramInterface`] as an Anchor-style JSON document so that
//! client generators and explorers can consume the same table the builders
//! use.

use serde::{Deserialize, Serialize};

use crate::schema::{InstructionDescriptor, ProgramInterface};

/// Top-level IDL for a program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramIdl {
    pub version: String,
    pub name: String,
    pub instructions: Vec<IdlInstruction>,
}

/// An instruction in the IDL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdlInstruction {
    pub name: String,
    pub discriminant: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<String>,
    pub accounts: Vec<IdlAccountItem>,
    pub args: Vec<IdlArg>,
}

/// An account expected by an instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdlAccountItem {
    pub name: String,
    #[serde(default)]
    pub writable: bool,
    #[serde(default)]
    pub signer: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<String>,
}

/// An instruction argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdlArg {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
}

impl ProgramIdl {
    pub fn from_interface(interface: &ProgramInterface) -> Self {
        Self {
            version: interface.version.to_string(),
            name: interface.name.to_string(),
            instructions: interface
                .instructions
                .iter()
                .map(IdlInstruction::from_descriptor)
                .collect(),
        }
    }

    pub fn instruction(&self, name: &str) -> Option<&IdlInstruction> {
        self.instructions.iter().find(|ix| ix.name == name)
    }

    /// Serialize the IDL to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl IdlInstruction {
    fn from_descriptor(descriptor: &InstructionDescriptor) -> Self {
        Self {
            name: descriptor.name.to_string(),
            discriminant: descriptor.tag,
            docs: docs_lines(descriptor.docs),
            accounts: descriptor
                .accounts
                .iter()
                .map(|slot| IdlAccountItem {
                    name: slot.name.to_string(),
                    writable: slot.is_writable,
                    signer: slot.is_signer,
                    docs: docs_lines(slot.docs),
                })
                .collect(),
            args: descriptor
                .fields
                .iter()
                .map(|field| IdlArg {
                    name: field.name.to_string(),
                    type_: field.ty.idl_name().to_string(),
                })
                .collect(),
        }
    }
}

fn docs_lines(docs: &str) -> Vec<String> {
    docs.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
