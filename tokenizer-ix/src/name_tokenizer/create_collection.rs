//! Create the verified collection every tokenized name belongs to.

use super::NameTokenizerInstruction;
use crate::prelude::*;

/// Accounts expected:
///
/// 0. `[writable]` The mint of the collection
/// 1. `[writable]` The master edition account of the collection
/// 2. `[writable]` The metadata account
/// 3. `[]` The central state account
/// 4. `[writable]` Token account of the central state to hold the master edition
/// 5. `[]` The fee payer account
/// 6. `[]` The SPL token program account
/// 7. `[]` The metadata program account
/// 8. `[]` The system program account
/// 9. `[]` The SPL name service program account
/// 10. `[]` The associated token account program
/// 11. `[]` Rent sysvar account
pub const DESCRIPTOR: InstructionDescriptor = InstructionDescriptor {
    name: "create_collection",
    tag: NameTokenizerInstruction::CreateCollection as u8,
    fields: &[],
    accounts: &[
        AccountSlot::writable("collection_mint").docs("The mint of the collection"),
        AccountSlot::writable("edition").docs("The master edition account of the collection"),
        AccountSlot::writable("metadata_account").docs("The metadata account"),
        AccountSlot::readonly("central_state").docs("The central state account"),
        AccountSlot::writable("central_state_nft_ata")
            .docs("Token account of the central state to hold the master edition"),
        AccountSlot::readonly("fee_payer").docs("The fee payer account"),
        AccountSlot::readonly("spl_token_program").docs("The SPL token program account"),
        AccountSlot::readonly("metadata_program").docs("The metadata program account"),
        AccountSlot::readonly("system_program").docs("The system program account"),
        AccountSlot::readonly("spl_name_service_program")
            .docs("The SPL name service program account"),
        AccountSlot::readonly("ata_program").docs("The associated token account program"),
        AccountSlot::readonly("rent_account").docs("Rent sysvar account"),
    ],
    docs: "Create the verified collection of tokenized names",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AccountSlots)]
pub struct Accounts {
    pub collection_mint: Address,
    pub edition: Address,
    pub metadata_account: Address,
    pub central_state: Address,
    pub central_state_nft_ata: Address,
    pub fee_payer: Address,
    pub spl_token_program: Address,
    pub metadata_program: Address,
    pub system_program: Address,
    pub spl_name_service_program: Address,
    pub ata_program: Address,
    pub rent_account: Address,
}
