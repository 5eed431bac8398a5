//! The example program generated with every new project.
//!
//! It is an independent program with its own tag space, so its only
//! instruction reuses tag 0.

use crate::prelude::*;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExampleInstruction {
    ExampleInstr = 0,
}

impl ExampleInstruction {
    pub const ALL: [Self; 1] = [Self::ExampleInstr];

    pub const fn tag(self) -> u8 {
        self as u8
    }

    pub fn descriptor(self) -> &'static InstructionDescriptor {
        match self {
            Self::ExampleInstr => &EXAMPLE_INSTR,
        }
    }
}

impl TryFrom<u8> for ExampleInstruction {
    type Error = InstructionError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|ix| ix.tag() == tag)
            .ok_or_else(|| InstructionError::UnknownVariant {
                program: INTERFACE.name.to_string(),
                tag,
            })
    }
}

impl From<ExampleInstruction> for u8 {
    fn from(ix: ExampleInstruction) -> Self {
        ix.tag()
    }
}

/// An example instruction.
///
/// | Index | Writable | Signer | Description                   |
/// | ----- | -------- | ------ | ----------------------------- |
/// | 0     | ❌       | ❌     | The system program account    |
/// | 1     | ❌       | ❌     | The SPL token program account |
/// | 2     | ✅       | ✅     | Fee payer account             |
/// | 3     | ✅       | ❌     | The example state account     |
pub const EXAMPLE_INSTR: InstructionDescriptor = InstructionDescriptor {
    name: "example_instr",
    tag: ExampleInstruction::ExampleInstr as u8,
    fields: &[FieldDescriptor::new("example", FieldType::String)],
    accounts: &[
        AccountSlot::readonly("system_program").docs("The system program account"),
        AccountSlot::readonly("spl_token_program").docs("The SPL token program account"),
        AccountSlot::writable_signer("fee_payer").docs("Fee payer account"),
        AccountSlot::writable("example_state").docs("The example state account"),
    ],
    docs: "An example instruction",
};

pub static INTERFACE: ProgramInterface = ProgramInterface {
    name: "example_program",
    version: "0.1.0",
    instructions: &[EXAMPLE_INSTR],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AccountSlots)]
pub struct Accounts {
    pub system_program: Address,
    pub spl_token_program: Address,
    pub fee_payer: Address,
    pub example_state: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, InstructionParams)]
pub struct Params {
    pub example: String,
}

pub fn example_instr(
    program_id: Address,
    accounts: Accounts,
    params: Params,
) -> InstructionResult<BuiltInstruction> {
    assemble_typed(program_id, &EXAMPLE_INSTR, &accounts, params)
}

/// Decode example program instruction data.
pub fn decode(data: &[u8]) -> InstructionResult<DecodedInstruction> {
    decode_payload(&INTERFACE, data)
}
