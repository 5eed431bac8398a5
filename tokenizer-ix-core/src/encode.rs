//! Instruction data encoding.
//!
//! Layout: one tag byte, then every field in schema order with no padding.
//! Integers are little-endian at their declared width, strings are a u32
//! little-endian byte length followed by the raw UTF-8 bytes, addresses are
//! 32 raw bytes. This is exactly the Borsh encoding of the equivalent Rust
//! struct, so each field is written with its Borsh implementation.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::address::Address;
use crate::error::{InstructionError, InstructionResult};
use crate::schema::{FieldDescriptor, FieldType, InstructionDescriptor, ProgramInterface};
use crate::value::ArgValue;

/// Serialize an instruction's tag and arguments.
pub fn encode_payload(
    descriptor: &InstructionDescriptor,
    args: &[ArgValue],
) -> InstructionResult<Vec<u8>> {
    if args.len() != descriptor.fields.len() {
        return Err(InstructionError::ArgumentCountMismatch {
            instruction: descriptor.name.to_string(),
            expected: descriptor.fields.len(),
            actual: args.len(),
        });
    }

    let mut out = Vec::with_capacity(payload_len(args));
    out.push(descriptor.tag);
    for (field, value) in descriptor.fields.iter().zip(args) {
        encode_field(&mut out, descriptor, field, value)?;
    }
    Ok(out)
}

fn payload_len(args: &[ArgValue]) -> usize {
    1 + args
        .iter()
        .map(|arg| match arg {
            ArgValue::Str(s) => 4 + s.len(),
            ArgValue::Bytes(b) => 4 + b.len(),
            other => other.field_type().fixed_len().unwrap_or(0),
        })
        .sum::<usize>()
}

fn encode_field(
    out: &mut Vec<u8>,
    descriptor: &InstructionDescriptor,
    field: &FieldDescriptor,
    value: &ArgValue,
) -> InstructionResult<()> {
    let mismatch = |found: String| InstructionError::ArgumentTypeMismatch {
        instruction: descriptor.name.to_string(),
        field: field.name.to_string(),
        expected: field.ty,
        found,
    };

    let written = match (field.ty, value) {
        (FieldType::Bool, ArgValue::Bool(v)) => v.serialize(out),
        (FieldType::U8, ArgValue::U8(v)) => v.serialize(out),
        (FieldType::U16, ArgValue::U16(v)) => v.serialize(out),
        (FieldType::U32, ArgValue::U32(v)) => v.serialize(out),
        (FieldType::U64, ArgValue::U64(v)) => v.serialize(out),
        (FieldType::U128, ArgValue::U128(v)) => v.serialize(out),
        (FieldType::String, ArgValue::Str(s)) => s.serialize(out),
        (FieldType::String, ArgValue::Bytes(bytes)) => {
            let text = std::str::from_utf8(bytes)
                .map_err(|e| mismatch(format!("bytes that are not valid UTF-8 ({})", e)))?;
            text.serialize(out)
        }
        (FieldType::Address, ArgValue::Address(a)) => a.serialize(out),
        (_, other) => return Err(mismatch(other.kind().to_string())),
    };

    // Only reachable for strings whose length does not fit the u32 prefix.
    written.map_err(|e| mismatch(format!("{} that cannot be encoded ({})", value.kind(), e)))
}

/// A named argument recovered from instruction data.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DecodedArg {
    pub name: &'static str,
    pub value: ArgValue,
}

/// Instruction data decoded against a program interface.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DecodedInstruction {
    pub instruction: &'static str,
    pub tag: u8,
    pub args: Vec<DecodedArg>,
}

impl DecodedInstruction {
    pub fn arg(&self, name: &str) -> Option<&ArgValue> {
        self.args.iter().find(|a| a.name == name).map(|a| &a.value)
    }

    pub fn into_values(self) -> Vec<ArgValue> {
        self.args.into_iter().map(|a| a.value).collect()
    }
}

/// Decode instruction data the way the program reads it: tag first, then
/// the tag's fields in schema order. Trailing bytes are rejected.
pub fn decode_payload(
    interface: &ProgramInterface,
    data: &[u8],
) -> InstructionResult<DecodedInstruction> {
    let (tag, mut rest) = data
        .split_first()
        .ok_or_else(|| InstructionError::malformed("empty instruction data"))?;
    let descriptor = interface.descriptor(*tag)?;

    let mut args = Vec::with_capacity(descriptor.fields.len());
    for field in descriptor.fields {
        let value = decode_field(field.ty, &mut rest).map_err(|e| {
            InstructionError::malformed(format!("{}.{}: {}", descriptor.name, field.name, e))
        })?;
        args.push(DecodedArg {
            name: field.name,
            value,
        });
    }

    if !rest.is_empty() {
        return Err(InstructionError::malformed(format!(
            "{} trailing bytes after {}",
            rest.len(),
            descriptor.name
        )));
    }

    Ok(DecodedInstruction {
        instruction: descriptor.name,
        tag: descriptor.tag,
        args,
    })
}

fn decode_field(ty: FieldType, buf: &mut &[u8]) -> std::io::Result<ArgValue> {
    Ok(match ty {
        FieldType::Bool => ArgValue::Bool(bool::deserialize(buf)?),
        FieldType::U8 => ArgValue::U8(u8::deserialize(buf)?),
        FieldType::U16 => ArgValue::U16(u16::deserialize(buf)?),
        FieldType::U32 => ArgValue::U32(u32::deserialize(buf)?),
        FieldType::U64 => ArgValue::U64(u64::deserialize(buf)?),
        FieldType::U128 => ArgValue::U128(u128::deserialize(buf)?),
        FieldType::String => ArgValue::Str(String::deserialize(buf)?),
        FieldType::Address => ArgValue::Address(Address::deserialize(buf)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXED: InstructionDescriptor = InstructionDescriptor {
        name: "fixed",
        tag: 9,
        fields: &[
            FieldDescriptor::new("flag", FieldType::Bool),
            FieldDescriptor::new("small", FieldType::U16),
            FieldDescriptor::new("amount", FieldType::U64),
        ],
        accounts: &[],
        docs: "",
    };

    #[test]
    fn integers_are_little_endian_and_unpadded() {
        let data = encode_payload(
            &FIXED,
            &[ArgValue::Bool(true), ArgValue::U16(0x0102), ArgValue::U64(0xdead)],
        )
        .unwrap();
        assert_eq!(
            data,
            vec![9, 1, 0x02, 0x01, 0xad, 0xde, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn presized_buffer_matches_output() {
        let args = [ArgValue::Bool(false), ArgValue::U16(1), ArgValue::U64(2)];
        let data = encode_payload(&FIXED, &args).unwrap();
        assert_eq!(payload_len(&args), data.len());
    }

    #[test]
    fn wrong_integer_width_is_a_type_mismatch() {
        let err = encode_payload(
            &FIXED,
            &[ArgValue::Bool(true), ArgValue::U32(1), ArgValue::U64(1)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            InstructionError::ArgumentTypeMismatch {
                instruction: "fixed".to_string(),
                field: "small".to_string(),
                expected: FieldType::U16,
                found: "u32".to_string(),
            }
        );
    }
}
