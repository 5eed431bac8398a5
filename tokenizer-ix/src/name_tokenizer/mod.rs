//! Name tokenizer program: turns a domain name into an NFT backed by a
//! verified collection, and back.
//!
//! Tags are permanent. A new instruction gets the next free tag; an existing
//! tag is never reassigned or reordered.

use crate::prelude::*;

pub mod create_collection;
pub mod create_mint;
pub mod create_nft;
pub mod redeem_nft;
pub mod withdraw_tokens;

/// Instructions of the name tokenizer program, by tag.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameTokenizerInstruction {
    CreateMint = 0,
    CreateCollection = 1,
    CreateNft = 2,
    RedeemNft = 3,
    WithdrawTokens = 4,
}

impl NameTokenizerInstruction {
    pub const ALL: [Self; 5] = [
        Self::CreateMint,
        Self::CreateCollection,
        Self::CreateNft,
        Self::RedeemNft,
        Self::WithdrawTokens,
    ];

    pub const fn tag(self) -> u8 {
        self as u8
    }

    pub fn descriptor(self) -> &'static InstructionDescriptor {
        match self {
            Self::CreateMint => &create_mint::DESCRIPTOR,
            Self::CreateCollection => &create_collection::DESCRIPTOR,
            Self::CreateNft => &create_nft::DESCRIPTOR,
            Self::RedeemNft => &redeem_nft::DESCRIPTOR,
            Self::WithdrawTokens => &withdraw_tokens::DESCRIPTOR,
        }
    }
}

impl TryFrom<u8> for NameTokenizerInstruction {
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

impl From<NameTokenizerInstruction> for u8 {
    fn from(ix: NameTokenizerInstruction) -> Self {
        ix.tag()
    }
}

/// Descriptor table of the name tokenizer program.
pub static INTERFACE: ProgramInterface = ProgramInterface {
    name: "name_tokenizer",
    version: "0.1.0",
    instructions: &[
        create_mint::DESCRIPTOR,
        create_collection::DESCRIPTOR,
        create_nft::DESCRIPTOR,
        redeem_nft::DESCRIPTOR,
        withdraw_tokens::DESCRIPTOR,
    ],
};

pub fn create_mint(
    program_id: Address,
    accounts: create_mint::Accounts,
) -> InstructionResult<BuiltInstruction> {
    assemble_typed(program_id, &create_mint::DESCRIPTOR, &accounts, ())
}

pub fn create_collection(
    program_id: Address,
    accounts: create_collection::Accounts,
) -> InstructionResult<BuiltInstruction> {
    assemble_typed(program_id, &create_collection::DESCRIPTOR, &accounts, ())
}

pub fn create_nft(
    program_id: Address,
    accounts: create_nft::Accounts,
    params: create_nft::Params,
) -> InstructionResult<BuiltInstruction> {
    assemble_typed(program_id, &create_nft::DESCRIPTOR, &accounts, params)
}

pub fn redeem_nft(
    program_id: Address,
    accounts: redeem_nft::Accounts,
) -> InstructionResult<BuiltInstruction> {
    assemble_typed(program_id, &redeem_nft::DESCRIPTOR, &accounts, ())
}

pub fn withdraw_tokens(
    program_id: Address,
    accounts: withdraw_tokens::Accounts,
) -> InstructionResult<BuiltInstruction> {
    assemble_typed(program_id, &withdraw_tokens::DESCRIPTOR, &accounts, ())
}

/// Decode name tokenizer instruction data.
pub fn decode(data: &[u8]) -> InstructionResult<DecodedInstruction> {
    decode_payload(&INTERFACE, data)
}
