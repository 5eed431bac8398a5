//! # Tokenizer Instruction Derive Macros
//!
//! `#[derive(AccountSlots)]` and `#[derive(InstructionParams)]` turn a plain
//! struct into the ordered address list / argument list the assembler in
//! `tokenizer-ix-core` consumes. Field declaration order is wire order.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tokenizer_ix::prelude::*;
//!
//! #[derive(AccountSlots)]
//! pub struct Accounts {
//!     pub mint: Address,
//!     pub fee_payer: Address,
//! }
//!
//! #[derive(InstructionParams)]
//! pub struct Params {
//!     pub name: String,
//! }
//! ```
//!
//! The generated code refers to `::tokenizer_ix_core`, so that crate must be
//! a direct dependency of the crate using the derives.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident};

/// Derive `AccountSlots`: slot names and addresses from the struct's fields.
///
/// Every field must be `Copy` and convert into `Address`.
#[proc_macro_derive(AccountSlots)]
pub fn derive_account_slots(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_account_slots(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Derive `InstructionParams`: argument values from the struct's fields.
///
/// Every field type must convert into `ArgValue`.
#[proc_macro_derive(InstructionParams)]
pub fn derive_instruction_params(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_instruction_params(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

// ─── Internal expansion logic ────────────────────────────────────────────

fn expand_account_slots(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let fields = named_fields(&input, "AccountSlots")?;

    if fields.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "AccountSlots needs at least one account field",
        ));
    }

    let slot_names: Vec<String> = fields.iter().map(|f| f.to_string()).collect();

    Ok(quote! {
        impl #impl_generics ::tokenizer_ix_core::accounts::AccountSlots for #name #ty_generics #where_clause {
            const NAMES: &'static [&'static str] = &[#(#slot_names),*];

            fn addresses(&self) -> ::std::vec::Vec<::tokenizer_ix_core::address::Address> {
                ::std::vec![
                    #(::core::convert::Into::<::tokenizer_ix_core::address::Address>::into(self.#fields)),*
                ]
            }
        }
    })
}

fn expand_instruction_params(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let fields = named_fields(&input, "InstructionParams")?;

    Ok(quote! {
        impl #impl_generics ::tokenizer_ix_core::value::InstructionParams for #name #ty_generics #where_clause {
            fn into_args(self) -> ::std::vec::Vec<::tokenizer_ix_core::value::ArgValue> {
                ::std::vec![
                    #(::core::convert::Into::<::tokenizer_ix_core::value::ArgValue>::into(self.#fields)),*
                ]
            }
        }
    })
}

/// Field identifiers of a struct with named fields, in declaration order.
/// Unit structs are accepted and yield no fields.
fn named_fields(input: &DeriveInput, derive: &str) -> syn::Result<Vec<Ident>> {
    let data = match &input.data {
        Data::Struct(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                format!("{} can only be derived for structs", derive),
            ))
        }
    };

    match &data.fields {
        Fields::Named(named) => Ok(named
            .named
            .iter()
            .filter_map(|f| f.ident.clone())
            .collect()),
        Fields::Unit => Ok(Vec::new()),
        Fields::Unnamed(_) => Err(syn::Error::new_spanned(
            &input.ident,
            format!(
                "{} needs named fields: the field names are the wire schema",
                derive
            ),
        )),
    }
}
