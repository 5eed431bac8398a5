//! # Tokenizer Instructions
//!
//! Instruction builders for the name tokenizer program and the example
//! program shipped alongside it. Each instruction has a typed builder
//! (`name_tokenizer::create_nft`, ...) and an entry in its program's
//! descriptor table (`name_tokenizer::INTERFACE`) for callers that pick the
//! instruction at runtime.

// Re-export the derive macros
pub use tokenizer_ix_macros::{AccountSlots, InstructionParams};

// Re-export core types
pub use tokenizer_ix_core::*;

pub mod example_program;
pub mod name_tokenizer;

pub mod prelude {
    pub use crate::{AccountSlots, InstructionParams};
    pub use tokenizer_ix_core::instruction::assemble_typed;
    pub use tokenizer_ix_core::prelude::*;
}
