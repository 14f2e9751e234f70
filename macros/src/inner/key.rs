//! Type-level key construction (`key!`).
//!
//! A key is `Uint<D0, ..., D15>`: the 16 hexadecimal digits of a `u64`, most
//! significant first. Integer literals are split here; any other constant
//! expression is split by `key_digit` during const evaluation.

use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{Expr, LitInt};

/// Number of hexadecimal digits in a key.
pub const KEY_DIGITS: usize = 16;

/// Split a value into its 16 digits, most significant first.
pub fn key_digits(value: u64) -> [u8; KEY_DIGITS] {
    let mut digits = [0u8; KEY_DIGITS];
    for (i, digit) in digits.iter_mut().enumerate() {
        let shift = (KEY_DIGITS - 1 - i) * 4;
        *digit = ((value >> shift) & 0xF) as u8;
    }
    digits
}

/// Expand `key!(..)` input into a `Uint` type.
pub fn expand_key(input: TokenStream) -> TokenStream {
    if let Ok(lit) = syn::parse2::<LitInt>(input.clone()) {
        return match lit.base10_parse::<u64>() {
            Ok(value) => literal_key(value),
            Err(err) => err.to_compile_error(),
        };
    }

    match syn::parse2::<Expr>(input) {
        Ok(expr) => expr_key(&expr),
        Err(err) => err.to_compile_error(),
    }
}

/// Key with digits computed at expansion time.
pub fn literal_key(value: u64) -> TokenStream {
    let digits: Vec<Literal> = key_digits(value).iter().map(|d| Literal::u8_unsuffixed(*d)).collect();
    quote! {
        ::tola_tql::primitives::unsigned::Uint<#(#digits),*>
    }
}

/// Key with digits computed by const evaluation at the use site.
pub fn expr_key(expr: &Expr) -> TokenStream {
    let digits = (0..KEY_DIGITS).map(|i| {
        quote! {
            { ::tola_tql::primitives::const_utils::key_digit((#expr) as u64, #i) }
        }
    });
    quote! {
        ::tola_tql::primitives::unsigned::Uint<#(#digits),*>
    }
}
