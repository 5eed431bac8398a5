//! Give the NFT back and take the domain name out of the program.

use super::NameTokenizerInstruction;
use crate::prelude::*;

/// Accounts expected:
///
/// 0. `[writable]` The mint of the NFT
/// 1. `[writable]` The current token account holding the NFT
/// 2. `[writable, signer]` The NFT owner
/// 3. `[writable]` The NFT record account
/// 4. `[writable]` The domain name account
/// 5. `[]` The SPL token program account
/// 6. `[]` The SPL name service program account
pub const DESCRIPTOR: InstructionDescriptor = InstructionDescriptor {
    name: "redeem_nft",
    tag: NameTokenizerInstruction::RedeemNft as u8,
    fields: &[],
    accounts: &[
        AccountSlot::writable("mint").docs("The mint of the NFT"),
        AccountSlot::writable("nft_source").docs("The current token account holding the NFT"),
        AccountSlot::writable_signer("nft_owner").docs("The NFT owner"),
        AccountSlot::writable("nft_record").docs("The NFT record account"),
        AccountSlot::writable("name_account").docs("The domain name account"),
        AccountSlot::readonly("spl_token_program").docs("The SPL token program account"),
        AccountSlot::readonly("spl_name_service_program")
            .docs("The SPL name service program account"),
    ],
    docs: "Redeem a tokenized domain name back to the NFT holder",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AccountSlots)]
pub struct Accounts {
    pub mint: Address,
    pub nft_source: Address,
    pub nft_owner: Address,
    pub nft_record: Address,
    pub name_account: Address,
    pub spl_token_program: Address,
    pub spl_name_service_program: Address,
}
