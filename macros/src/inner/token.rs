//! Operator token construction (`op!`).
//!
//! A token is the 64-bit FNV-1a hash of its text carried as a
//! `HashStream16`. String literals are hashed here; other `&'static str`
//! constant expressions are hashed by `hash_nibble` during const evaluation.

use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{Expr, LitStr};

pub fn fnv1a_64(s: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for b in s.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

pub fn expand_op(input: TokenStream) -> TokenStream {
    if let Ok(lit) = syn::parse2::<LitStr>(input.clone()) {
        let hash = fnv1a_64(&lit.value());
        let nibbles: Vec<Literal> = (0..16)
            .map(|i| Literal::u8_unsuffixed(((hash >> (i * 4)) & 0xF) as u8))
            .collect();
        return quote! {
            ::tola_tql::key::token::Token<
                ::tola_tql::primitives::stream::HashStream16<#(#nibbles),*>
            >
        };
    }

    let expr: Expr = match syn::parse2(input) {
        Ok(expr) => expr,
        Err(err) => return err.to_compile_error(),
    };
    let nibbles = (0u8..16).map(|i| {
        quote! { { ::tola_tql::primitives::const_utils::hash_nibble(#expr, #i) } }
    });
    quote! {
        ::tola_tql::key::token::Token<
            ::tola_tql::primitives::stream::HashStream16<#(#nibbles),*>
        >
    }
}
