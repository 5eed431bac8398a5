//! Create the NFT mint of a domain name.

use super::NameTokenizerInstruction;
use crate::prelude::*;

/// Accounts expected:
///
/// 0. `[writable]` The mint of the NFT
/// 1. `[writable]` The domain name account
/// 2. `[]` The central state account
/// 3. `[]` The SPL token program account
/// 4. `[]` The system program account
/// 5. `[]` Rent sysvar account
/// 6. `[]` The fee payer account
pub const DESCRIPTOR: InstructionDescriptor = InstructionDescriptor {
    name: "create_mint",
    tag: NameTokenizerInstruction::CreateMint as u8,
    fields: &[],
    accounts: &[
        AccountSlot::writable("mint").docs("The mint of the NFT"),
        AccountSlot::writable("name_account").docs("The domain name account"),
        AccountSlot::readonly("central_state").docs("The central state account"),
        AccountSlot::readonly("spl_token_program").docs("The SPL token program account"),
        AccountSlot::readonly("system_program").docs("The system program account"),
        AccountSlot::readonly("rent_account").docs("Rent sysvar account"),
        AccountSlot::readonly("fee_payer").docs("The fee payer account"),
    ],
    docs: "Create the NFT mint of a domain name",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AccountSlots)]
pub struct Accounts {
    pub mint: Address,
    pub name_account: Address,
    pub central_state: Address,
    pub spl_token_program: Address,
    pub system_program: Address,
    pub rent_account: Address,
    pub fee_payer: Address,
}
