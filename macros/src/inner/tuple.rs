//! Type-list -> flat tuple impls.
//!
//! Generates `ToTuple` for `Nil`, `Cons<M0, Nil>`, ... up to the requested
//! arity. Each slot is the wrapped element's `Keyed::Inner`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{parse::Parse, parse::ParseStream, LitInt};

pub struct TupleInput {
    pub max: usize,
}

impl Parse for TupleInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        Ok(TupleInput { max })
    }
}

pub fn expand_to_tuple(input: TupleInput) -> TokenStream {
    let impls = (0..=input.max).map(tuple_impl);
    quote! { #(#impls)* }
}

fn tuple_impl(arity: usize) -> TokenStream {
    let params: Vec<_> = (0..arity).map(|i| format_ident!("M{}", i)).collect();

    let list = params
        .iter()
        .rev()
        .fold(quote! { Nil }, |tail, p| quote! { Cons<#p, #tail> });

    quote! {
        impl<#(#params: Keyed),*> ToTuple for #list {
            type Out = (#(<#params as Keyed>::Inner,)*);
        }
    }
}
