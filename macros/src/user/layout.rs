use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

use crate::inner::key::expr_key;

/// `#[derive(Layout)]` keys a type by `size_of` and `align_of`.
///
/// The key digits are const-evaluated from the concrete type, so generic
/// types are rejected: list each instantiation with `impl_layout!` instead.
pub fn expand_derive_layout(input: DeriveInput) -> TokenStream2 {
    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input.generics,
            "`#[derive(Layout)]` only supports non-generic types; \
             use `tola_tql::impl_layout!(Type<Concrete>)` for each instantiation",
        )
        .to_compile_error();
    }

    let ident = &input.ident;
    let size = expr_key(&syn::parse_quote!(::core::mem::size_of::<#ident>()));
    let align = expr_key(&syn::parse_quote!(::core::mem::align_of::<#ident>()));

    quote! {
        impl ::tola_tql::Layout for #ident {
            type Size = #size;
            type Align = #align;
        }
    }
}
