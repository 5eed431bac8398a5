//! Name tokenizer builders against the program's account and data layout.

use borsh::BorshSerialize;
use tokenizer_ix::name_tokenizer::{
    self, create_collection, create_mint, create_nft, redeem_nft, withdraw_tokens,
    NameTokenizerInstruction, INTERFACE,
};
use tokenizer_ix::idl::ProgramIdl;
use tokenizer_ix::prelude::*;

const URI: &str = "https://example.com/x.json";

fn key(i: u8) -> Address {
    Address::new([i; 32])
}

fn program_id() -> Address {
    Address::new([0xaa; 32])
}

/// (is_writable, is_signer) per slot
fn flags(ix: &BuiltInstruction) -> Vec<(bool, bool)> {
    ix.accounts
        .iter()
        .map(|m| (m.is_writable, m.is_signer))
        .collect()
}

const R: (bool, bool) = (false, false);
const W: (bool, bool) = (true, false);
const S: (bool, bool) = (false, true);
const WS: (bool, bool) = (true, true);

fn create_nft_accounts() -> create_nft::Accounts {
    create_nft::Accounts {
        mint: key(1),
        nft_destination: key(2),
        name_account: key(3),
        nft_record: key(4),
        name_owner: key(5),
        metadata_account: key(6),
        edition_account: key(7),
        collection_metadata: key(8),
        collection_mint: key(9),
        central_state: key(10),
        fee_payer: key(11),
        spl_token_program: key(12),
        metadata_program: key(13),
        system_program: key(14),
        spl_name_service_program: key(15),
        rent_account: key(16),
        metadata_signer: key(17),
    }
}

fn foo_params() -> create_nft::Params {
    create_nft::Params {
        name: "Foo".to_string(),
        uri: URI.to_string(),
    }
}

#[test]
fn test_create_mint() {
    let ix = name_tokenizer::create_mint(
        program_id(),
        create_mint::Accounts {
            mint: key(1),
            name_account: key(2),
            central_state: key(3),
            spl_token_program: key(4),
            system_program: key(5),
            rent_account: key(6),
            fee_payer: key(7),
        },
    )
    .unwrap();

    assert_eq!(ix.program_id, program_id());
    assert_eq!(ix.data, vec![0]);
    assert_eq!(flags(&ix), vec![W, W, R, R, R, R, R]);
    let keys: Vec<Address> = ix.accounts.iter().map(|m| m.pubkey).collect();
    assert_eq!(keys, (1..=7).map(key).collect::<Vec<_>>());
}

#[test]
fn test_create_collection() {
    let ix = name_tokenizer::create_collection(
        program_id(),
        create_collection::Accounts {
            collection_mint: key(1),
            edition: key(2),
            metadata_account: key(3),
            central_state: key(4),
            central_state_nft_ata: key(5),
            fee_payer: key(6),
            spl_token_program: key(7),
            metadata_program: key(8),
            system_program: key(9),
            spl_name_service_program: key(10),
            ata_program: key(11),
            rent_account: key(12),
        },
    )
    .unwrap();

    assert_eq!(ix.data, vec![1]);
    assert_eq!(flags(&ix), vec![W, W, W, R, W, R, R, R, R, R, R, R]);
}

#[test]
fn test_create_nft_bytes_end_to_end() {
    let ix = name_tokenizer::create_nft(program_id(), create_nft_accounts(), foo_params()).unwrap();

    let mut expected = vec![0x02, 0x03, 0x00, 0x00, 0x00, b'F', b'o', b'o'];
    expected.extend_from_slice(&(URI.len() as u32).to_le_bytes());
    expected.extend_from_slice(URI.as_bytes());
    assert_eq!(URI.len(), 26);
    assert_eq!(&ix.data[8..12], &[0x1a, 0x00, 0x00, 0x00]);
    assert_eq!(ix.data, expected);

    assert_eq!(ix.accounts.len(), 17);
    assert_eq!(
        flags(&ix),
        vec![W, W, W, W, WS, W, R, R, R, W, WS, R, R, R, R, R, S]
    );
    let signers: Vec<&Address> = ix.signers().collect();
    assert_eq!(signers, vec![&key(5), &key(11), &key(17)]);
}

#[test]
fn test_create_nft_27_byte_uri() {
    let uri = "https://example.com/xy.json";
    let params = create_nft::Params {
        name: "Foo".to_string(),
        uri: uri.to_string(),
    };
    let ix = name_tokenizer::create_nft(program_id(), create_nft_accounts(), params).unwrap();

    assert_eq!(&ix.data[8..12], &[0x1b, 0x00, 0x00, 0x00]);
    assert_eq!(&ix.data[12..], uri.as_bytes());
    assert_eq!(ix.data.len(), 1 + 4 + 3 + 4 + 27);
}

#[test]
fn test_redeem_nft() {
    let ix = name_tokenizer::redeem_nft(
        program_id(),
        redeem_nft::Accounts {
            mint: key(1),
            nft_source: key(2),
            nft_owner: key(3),
            nft_record: key(4),
            name_account: key(5),
            spl_token_program: key(6),
            spl_name_service_program: key(7),
        },
    )
    .unwrap();

    assert_eq!(ix.data, vec![3]);
    assert_eq!(flags(&ix), vec![W, W, WS, W, W, R, R]);
}

#[test]
fn test_withdraw_tokens() {
    let ix = name_tokenizer::withdraw_tokens(
        program_id(),
        withdraw_tokens::Accounts {
            nft: key(1),
            nft_owner: key(2),
            nft_record: key(3),
            token_destination: key(4),
            token_source: key(5),
            spl_token_program: key(6),
            system_program: key(7),
        },
    )
    .unwrap();

    assert_eq!(ix.data, vec![4]);
    assert_eq!(flags(&ix), vec![W, WS, W, W, W, R, R]);
}

#[test]
fn test_create_nft_matches_borsh_struct() {
    #[derive(BorshSerialize)]
    struct CreateNftData {
        tag: u8,
        name: String,
        uri: String,
    }

    let ix = name_tokenizer::create_nft(program_id(), create_nft_accounts(), foo_params()).unwrap();
    let expected = borsh::to_vec(&CreateNftData {
        tag: 2,
        name: "Foo".to_string(),
        uri: URI.to_string(),
    })
    .unwrap();
    assert_eq!(ix.data, expected);
}

#[test]
fn test_builders_are_deterministic() {
    let a = name_tokenizer::create_nft(program_id(), create_nft_accounts(), foo_params()).unwrap();
    let b = name_tokenizer::create_nft(program_id(), create_nft_accounts(), foo_params()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_account_structs_match_descriptors() {
    let cases: [(&[&str], NameTokenizerInstruction); 5] = [
        (create_mint::Accounts::NAMES, NameTokenizerInstruction::CreateMint),
        (
            create_collection::Accounts::NAMES,
            NameTokenizerInstruction::CreateCollection,
        ),
        (create_nft::Accounts::NAMES, NameTokenizerInstruction::CreateNft),
        (redeem_nft::Accounts::NAMES, NameTokenizerInstruction::RedeemNft),
        (
            withdraw_tokens::Accounts::NAMES,
            NameTokenizerInstruction::WithdrawTokens,
        ),
    ];
    for (names, ix) in cases {
        let descriptor_names: Vec<&str> = ix.descriptor().account_names().collect();
        assert_eq!(names, descriptor_names.as_slice(), "{:?}", ix);
    }
}

#[test]
fn test_tags_are_stable() {
    let tags: Vec<u8> = NameTokenizerInstruction::ALL.iter().map(|ix| ix.tag()).collect();
    assert_eq!(tags, vec![0, 1, 2, 3, 4]);
    for ix in NameTokenizerInstruction::ALL {
        assert_eq!(ix.descriptor().tag, u8::from(ix));
        assert_eq!(INTERFACE.descriptor(ix.tag()).unwrap(), ix.descriptor());
        assert_eq!(NameTokenizerInstruction::try_from(ix.tag()).unwrap(), ix);
    }
}

#[test]
fn test_unknown_tag_is_rejected() {
    assert_eq!(
        NameTokenizerInstruction::try_from(5).unwrap_err(),
        InstructionError::UnknownVariant {
            program: "name_tokenizer".to_string(),
            tag: 5,
        }
    );
    assert!(name_tokenizer::decode(&[5]).is_err());
}

#[test]
fn test_dynamic_build_missing_address() {
    let mut addresses = create_nft_accounts().addresses();
    addresses.pop();
    let args = foo_params().into_args();

    let err = INTERFACE
        .build(program_id(), 2, &args, &addresses)
        .unwrap_err();
    assert_eq!(
        err,
        InstructionError::AccountCountMismatch {
            instruction: "create_nft".to_string(),
            expected: 17,
            actual: 16,
        }
    );
}

#[test]
fn test_dynamic_build_missing_string() {
    let addresses = create_nft_accounts().addresses();
    let err = INTERFACE
        .build_by_name(program_id(), "create_nft", &[ArgValue::from("Foo")], &addresses)
        .unwrap_err();
    assert_eq!(
        err,
        InstructionError::ArgumentCountMismatch {
            instruction: "create_nft".to_string(),
            expected: 2,
            actual: 1,
        }
    );
}

#[test]
fn test_dynamic_build_matches_typed_builder() {
    let typed = name_tokenizer::create_nft(program_id(), create_nft_accounts(), foo_params()).unwrap();
    let dynamic = INTERFACE
        .build_by_name(
            program_id(),
            "create_nft",
            &foo_params().into_args(),
            &create_nft_accounts().addresses(),
        )
        .unwrap();
    assert_eq!(typed, dynamic);
}

#[test]
fn test_decode_create_nft() {
    let ix = name_tokenizer::create_nft(program_id(), create_nft_accounts(), foo_params()).unwrap();
    let decoded = name_tokenizer::decode(&ix.data).unwrap();
    assert_eq!(decoded.instruction, "create_nft");
    assert_eq!(decoded.tag, 2);
    assert_eq!(decoded.arg("name"), Some(&ArgValue::from("Foo")));
    assert_eq!(decoded.arg("uri"), Some(&ArgValue::from(URI)));
}

#[test]
fn test_idl_lists_every_instruction() {
    let idl = ProgramIdl::from_interface(&INTERFACE);
    let json: serde_json::Value = serde_json::from_str(&idl.to_json_pretty().unwrap()).unwrap();

    let names: Vec<&str> = json["instructions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|ix| ix["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "create_mint",
            "create_collection",
            "create_nft",
            "redeem_nft",
            "withdraw_tokens"
        ]
    );

    let nft_ix = &json["instructions"][2];
    assert_eq!(nft_ix["discriminant"], 2);
    assert_eq!(nft_ix["args"][1]["name"], "uri");
    assert_eq!(nft_ix["args"][1]["type"], "string");
    assert_eq!(nft_ix["accounts"][16]["name"], "metadata_signer");
    assert_eq!(nft_ix["accounts"][16]["signer"], true);
    assert_eq!(nft_ix["accounts"][16]["writable"], false);
}

/// `nft_owner` declared first: same addresses, wrong slot order.
#[derive(AccountSlots)]
struct MisorderedRedeem {
    nft_owner: Address,
    mint: Address,
    nft_source: Address,
    nft_record: Address,
    name_account: Address,
    spl_token_program: Address,
    spl_name_service_program: Address,
}

#[test]
fn test_misordered_account_struct_is_rejected() {
    let accounts = MisorderedRedeem {
        nft_owner: key(3),
        mint: key(1),
        nft_source: key(2),
        nft_record: key(4),
        name_account: key(5),
        spl_token_program: key(6),
        spl_name_service_program: key(7),
    };
    let err = assemble_typed(program_id(), &redeem_nft::DESCRIPTOR, &accounts, ()).unwrap_err();
    match err {
        InstructionError::AccountOrderMismatch {
            instruction,
            index,
            expected,
            found,
        } => {
            assert_eq!(instruction, "redeem_nft");
            assert_eq!(index, 0);
            assert_eq!(expected, "mint");
            assert_eq!(found, "nft_owner");
        }
        other => panic!("Expected AccountOrderMismatch, got {:?}", other),
    }
}
