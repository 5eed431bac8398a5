//! Account list building.
//!
//! Callers only supply addresses, in slot order. Signer and writable flags
//! always come from the instruction's account schema.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::{InstructionError, InstructionResult};
use crate::schema::InstructionDescriptor;

/// An account reference as it appears in a built instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMeta {
    pub pubkey: Address,
    pub is_signer: bool,
    pub is_writable: bool,
}

/// Typed, named addresses for one instruction, flattened in slot order.
///
/// Usually derived with `#[derive(AccountSlots)]`, which takes the slot
/// names and the order from the struct's fields.
pub trait AccountSlots {
    /// Field names, in declaration order.
    const NAMES: &'static [&'static str];

    fn addresses(&self) -> Vec<Address>;
}

/// Validate that the correct number of accounts was provided.
pub fn validate_account_count(
    descriptor: &InstructionDescriptor,
    actual: usize,
) -> InstructionResult<()> {
    let expected = descriptor.accounts.len();
    if actual != expected {
        return Err(InstructionError::AccountCountMismatch {
            instruction: descriptor.name.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that typed slot names follow the schema's account order.
///
/// A length difference is left to [`validate_account_count`].
pub fn validate_account_order(
    descriptor: &InstructionDescriptor,
    names: &[&str],
) -> InstructionResult<()> {
    let misplaced = descriptor
        .account_names()
        .zip(names)
        .enumerate()
        .find(|(_, (expected, found))| expected != *found);

    if let Some((index, (expected, found))) = misplaced {
        return Err(InstructionError::AccountOrderMismatch {
            instruction: descriptor.name.to_string(),
            index,
            expected: expected.to_string(),
            found: found.to_string(),
        });
    }
    Ok(())
}

/// Attach the schema's flags to caller-supplied addresses.
///
/// Addresses are not checked for uniqueness, ownership or existence; the
/// program does that at execution time.
pub fn build_account_metas(
    descriptor: &InstructionDescriptor,
    addresses: &[Address],
) -> InstructionResult<Vec<AccountMeta>> {
    validate_account_count(descriptor, addresses.len())?;

    Ok(descriptor
        .accounts
        .iter()
        .zip(addresses)
        .map(|(slot, pubkey)| AccountMeta {
            pubkey: *pubkey,
            is_signer: slot.is_signer,
            is_writable: slot.is_writable,
        })
        .collect())
}
