//! Typed argument values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::schema::FieldType;

/// A single instruction argument, with its type preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ArgValue {
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    #[serde(rename = "string")]
    Str(String),
    /// Raw text bytes for a `string` field; must be valid UTF-8 to encode.
    Bytes(Vec<u8>),
    Address(Address),
}

impl ArgValue {
    /// The field type this value encodes as, if any. `Bytes` only encodes
    /// as a string after UTF-8 validation, so it reports `String` too.
    pub fn field_type(&self) -> FieldType {
        match self {
            ArgValue::Bool(_) => FieldType::Bool,
            ArgValue::U8(_) => FieldType::U8,
            ArgValue::U16(_) => FieldType::U16,
            ArgValue::U32(_) => FieldType::U32,
            ArgValue::U64(_) => FieldType::U64,
            ArgValue::U128(_) => FieldType::U128,
            ArgValue::Str(_) | ArgValue::Bytes(_) => FieldType::String,
            ArgValue::Address(_) => FieldType::Address,
        }
    }

    /// Short description used in type mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            ArgValue::Bytes(_) => "bytes",
            ArgValue::Str(_) => "string",
            ArgValue::Address(_) => "address",
            other => other.field_type().idl_name(),
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Bool(v) => write!(f, "{}", v),
            ArgValue::U8(v) => write!(f, "{}", v),
            ArgValue::U16(v) => write!(f, "{}", v),
            ArgValue::U32(v) => write!(f, "{}", v),
            ArgValue::U64(v) => write!(f, "{}", v),
            ArgValue::U128(v) => write!(f, "{}", v),
            ArgValue::Str(s) => write!(f, "\"{}\"", s),
            ArgValue::Bytes(bytes) => match std::str::from_utf8(bytes) {
                Ok(s) => write!(f, "\"{}\"", s),
                Err(_) => write!(f, "0x{}", hex::encode(bytes)),
            },
            ArgValue::Address(a) => write!(f, "{}", a),
        }
    }
}

macro_rules! impl_from_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ArgValue {
                fn from(v: $ty) -> Self {
                    ArgValue::$variant(v)
                }
            }
        )*
    };
}

impl_from_value! {
    bool => Bool,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    String => Str,
    Vec<u8> => Bytes,
    Address => Address,
}

impl From<&str> for ArgValue {
    fn from(v: &str) -> Self {
        ArgValue::Str(v.to_string())
    }
}

/// Typed parameters of one instruction, flattened in field-schema order.
///
/// Usually derived with `#[derive(InstructionParams)]`; field declaration
/// order must match the instruction's field schema.
pub trait InstructionParams {
    fn into_args(self) -> Vec<ArgValue>;
}

/// Instructions whose only payload is the tag.
impl InstructionParams for () {
    fn into_args(self) -> Vec<ArgValue> {
        Vec::new()
    }
}
