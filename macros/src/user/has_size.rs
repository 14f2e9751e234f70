use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Expr, Meta};

use crate::inner::key::{expr_key, literal_key};

/// `#[derive(HasSize)]` reads the `#[size = ..]` (or `#[size(..)]`)
/// attribute and implements both `HasSize` and `Keyed` (keyed by itself).
pub fn expand_derive_has_size(input: DeriveInput) -> TokenStream2 {
    let size = match size_attr(&input) {
        Ok(expr) => expr,
        Err(err) => return err.to_compile_error(),
    };

    let key = match &size {
        Expr::Lit(syn::ExprLit { lit: syn::Lit::Int(lit), .. }) => match lit.base10_parse::<u64>() {
            Ok(value) => literal_key(value),
            Err(err) => return err.to_compile_error(),
        },
        other => expr_key(other),
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::tola_tql::HasSize for #ident #ty_generics #where_clause {
            type Size = #key;
        }

        impl #impl_generics ::tola_tql::Keyed for #ident #ty_generics #where_clause {
            type Inner = Self;
            type Key = <Self as ::tola_tql::HasSize>::Size;
        }
    }
}

fn size_attr(input: &DeriveInput) -> syn::Result<Expr> {
    let mut found = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("size") {
            continue;
        }
        if found.is_some() {
            return Err(syn::Error::new_spanned(attr, "duplicate `#[size]` attribute"));
        }
        let expr = match &attr.meta {
            Meta::NameValue(nv) => nv.value.clone(),
            Meta::List(_) => attr.parse_args::<Expr>()?,
            Meta::Path(_) => {
                return Err(syn::Error::new_spanned(attr, "expected `#[size = <const expr>]`"));
            }
        };
        found = Some(expr);
    }

    found.ok_or_else(|| {
        syn::Error::new_spanned(
            &input.ident,
            "`#[derive(HasSize)]` requires a `#[size = <const expr>]` attribute",
        )
    })
}
