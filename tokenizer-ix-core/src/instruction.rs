//! Instruction assembly: the single composition point of encoder and
//! account list builder.

use serde::{Deserialize, Serialize};

use crate::accounts::{build_account_metas, validate_account_order, AccountMeta, AccountSlots};
use crate::address::Address;
use crate::encode::encode_payload;
use crate::error::InstructionResult;
use crate::schema::{InstructionDescriptor, ProgramInterface};
use crate::value::{ArgValue, InstructionParams};

/// A fully built instruction, ready to be handed to a transaction builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltInstruction {
    pub program_id: Address,
    pub data: Vec<u8>,
    pub accounts: Vec<AccountMeta>,
}

impl BuiltInstruction {
    pub fn signers(&self) -> impl Iterator<Item = &Address> + '_ {
        self.accounts
            .iter()
            .filter(|meta| meta.is_signer)
            .map(|meta| &meta.pubkey)
    }

    /// Convert to the tuple form expected by most transaction builders.
    pub fn into_parts(self) -> (Address, Vec<u8>, Vec<AccountMeta>) {
        (self.program_id, self.data, self.accounts)
    }
}

/// Build an instruction from its descriptor, arguments and addresses.
///
/// Either the complete instruction is returned or nothing is.
pub fn assemble(
    program_id: Address,
    descriptor: &InstructionDescriptor,
    args: &[ArgValue],
    addresses: &[Address],
) -> InstructionResult<BuiltInstruction> {
    let built = encode_payload(descriptor, args).and_then(|data| {
        let accounts = build_account_metas(descriptor, addresses)?;
        Ok(BuiltInstruction {
            program_id,
            data,
            accounts,
        })
    });

    match &built {
        Ok(ix) => log::trace!(
            "built {} for {}: {} data bytes, {} accounts",
            descriptor.name,
            program_id,
            ix.data.len(),
            ix.accounts.len()
        ),
        Err(e) => log::debug!("rejected {} for {}: {}", descriptor.name, program_id, e),
    }
    built
}

/// Typed variant of [`assemble`] used by the per-instruction builders.
///
/// The struct's slot names must follow the descriptor's account order,
/// otherwise `AccountOrderMismatch` is returned.
pub fn assemble_typed<A, P>(
    program_id: Address,
    descriptor: &InstructionDescriptor,
    accounts: &A,
    params: P,
) -> InstructionResult<BuiltInstruction>
where
    A: AccountSlots,
    P: InstructionParams,
{
    if let Err(e) = validate_account_order(descriptor, A::NAMES) {
        log::debug!("rejected {} for {}: {}", descriptor.name, program_id, e);
        return Err(e);
    }
    assemble(
        program_id,
        descriptor,
        &params.into_args(),
        &accounts.addresses(),
    )
}

impl ProgramInterface {
    /// Look up `tag` and build it. For callers that pick the instruction at
    /// runtime; typed builders are preferable otherwise.
    pub fn build(
        &self,
        program_id: Address,
        tag: u8,
        args: &[ArgValue],
        addresses: &[Address],
    ) -> InstructionResult<BuiltInstruction> {
        let descriptor = self.descriptor(tag)?;
        assemble(program_id, descriptor, args, addresses)
    }

    /// Same as [`ProgramInterface::build`], selecting by instruction name.
    pub fn build_by_name(
        &self,
        program_id: Address,
        name: &str,
        args: &[ArgValue],
        addresses: &[Address],
    ) -> InstructionResult<BuiltInstruction> {
        let descriptor = self.descriptor_by_name(name)?;
        assemble(program_id, descriptor, args, addresses)
    }
}
