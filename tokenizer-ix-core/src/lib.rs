//! # Tokenizer Instruction Core
//!
//! Core types for building instructions: the descriptor table types, the
//! payload encoder, the account list builder and the assembler that ties
//! them together.

pub mod accounts;
pub mod address;
pub mod encode;
pub mod error;
pub mod idl;
pub mod instruction;
pub mod schema;
pub mod value;

pub mod prelude {
    pub use crate::accounts::{AccountMeta, AccountSlots};
    pub use crate::address::Address;
    pub use crate::encode::{decode_payload, DecodedInstruction};
    pub use crate::error::{InstructionError, InstructionResult};
    pub use crate::instruction::{assemble, BuiltInstruction};
    pub use crate::schema::{
        AccountSlot, FieldDescriptor, FieldType, InstructionDescriptor, ProgramInterface,
    };
    pub use crate::value::{ArgValue, InstructionParams};
}
