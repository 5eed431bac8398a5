//! Withdraw tokens that were sent to the NFT record while the name was
//! tokenized.

use super::NameTokenizerInstruction;
use crate::prelude::*;

/// Accounts expected:
///
/// 0. `[writable]` The token account holding the NFT
/// 1. `[writable, signer]` The owner of the NFT token account
/// 2. `[writable]` The NFT record account
/// 3. `[writable]` The destination of the tokens
/// 4. `[writable]` The token account owned by the NFT record
/// 5. `[]` The SPL token program account
/// 6. `[]` The system program account
pub const DESCRIPTOR: InstructionDescriptor = InstructionDescriptor {
    name: "withdraw_tokens",
    tag: NameTokenizerInstruction::WithdrawTokens as u8,
    fields: &[],
    accounts: &[
        AccountSlot::writable("nft").docs("The token account holding the NFT"),
        AccountSlot::writable_signer("nft_owner").docs("The owner of the NFT token account"),
        AccountSlot::writable("nft_record").docs("The NFT record account"),
        AccountSlot::writable("token_destination").docs("The destination of the tokens"),
        AccountSlot::writable("token_source").docs("The token account owned by the NFT record"),
        AccountSlot::readonly("spl_token_program").docs("The SPL token program account"),
        AccountSlot::readonly("system_program").docs("The system program account"),
    ],
    docs: "Withdraw funds sent to the NFT record of a tokenized name",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AccountSlots)]
pub struct Accounts {
    pub nft: Address,
    pub nft_owner: Address,
    pub nft_record: Address,
    pub token_destination: Address,
    pub token_source: Address,
    pub spl_token_program: Address,
    pub system_program: Address,
}
