//! Tokenize a domain name: mint its NFT with metadata, inside the collection.

use super::NameTokenizerInstruction;
use crate::prelude::*;

/// Accounts expected:
///
/// 0. `[writable]` The mint of the NFT
/// 1. `[writable]` The NFT token destination
/// 2. `[writable]` The domain name account
/// 3. `[writable]` The NFT record account
/// 4. `[writable, signer]` The domain name owner
/// 5. `[writable]` The metadata account
/// 6. `[]` Master edition account
/// 7. `[]` Collection metadata account
/// 8. `[]` Collection mint
/// 9. `[writable]` The central state account
/// 10. `[writable, signer]` The fee payer account
/// 11. `[]` The SPL token program account
/// 12. `[]` The metadata program account
/// 13. `[]` The system program account
/// 14. `[]` The SPL name service program account
/// 15. `[]` Rent sysvar account
/// 16. `[signer]` The metadata signer
///
/// Data: `name` then `uri`, both length-prefixed strings.
pub const DESCRIPTOR: InstructionDescriptor = InstructionDescriptor {
    name: "create_nft",
    tag: NameTokenizerInstruction::CreateNft as u8,
    fields: &[
        FieldDescriptor::new("name", FieldType::String),
        FieldDescriptor::new("uri", FieldType::String),
    ],
    accounts: &[
        AccountSlot::writable("mint").docs("The mint of the NFT"),
        AccountSlot::writable("nft_destination").docs("The NFT token destination"),
        AccountSlot::writable("name_account").docs("The domain name account"),
        AccountSlot::writable("nft_record").docs("The NFT record account"),
        AccountSlot::writable_signer("name_owner").docs("The domain name owner"),
        AccountSlot::writable("metadata_account").docs("The metadata account"),
        AccountSlot::readonly("edition_account").docs("Master edition account"),
        AccountSlot::readonly("collection_metadata").docs("Collection metadata account"),
        AccountSlot::readonly("collection_mint").docs("Collection mint"),
        AccountSlot::writable("central_state").docs("The central state account"),
        AccountSlot::writable_signer("fee_payer").docs("The fee payer account"),
        AccountSlot::readonly("spl_token_program").docs("The SPL token program account"),
        AccountSlot::readonly("metadata_program").docs("The metadata program account"),
        AccountSlot::readonly("system_program").docs("The system program account"),
        AccountSlot::readonly("spl_name_service_program")
            .docs("The SPL name service program account"),
        AccountSlot::readonly("rent_account").docs("Rent sysvar account"),
        AccountSlot::signer("metadata_signer").docs("The metadata signer"),
    ],
    docs: "Tokenize a domain name into an NFT of the collection",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AccountSlots)]
pub struct Accounts {
    pub mint: Address,
    pub nft_destination: Address,
    pub name_account: Address,
    pub nft_record: Address,
    pub name_owner: Address,
    pub metadata_account: Address,
    pub edition_account: Address,
    pub collection_metadata: Address,
    pub collection_mint: Address,
    pub central_state: Address,
    pub fee_payer: Address,
    pub spl_token_program: Address,
    pub metadata_program: Address,
    pub system_program: Address,
    pub spl_name_service_program: Address,
    pub rent_account: Address,
    pub metadata_signer: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, InstructionParams)]
pub struct Params {
    /// The domain name, without the `.sol` suffix
    pub name: String,
    /// The URI of the off-chain metadata JSON
    pub uri: String,
}
