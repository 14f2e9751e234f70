//! Procedural macros for the tola-tql type-list toolkit
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `key!(expr)` | type position | Build a type-level key |
//! | `op!("<=")` | type position | Build an operator token |
//! | `#[derive(HasSize)]` | struct/enum | Declare a size key with `#[size = N]` |
//! | `#[derive(Layout)]` | struct/enum | Key by `size_of` / `align_of` |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(HasSize)]
//! #[size = 48]
//! struct MsgLogin;
//!
//! type Budget = key!(1200);
//! type LessEq = op!("<=");
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Two-tier: inner / user)
// =============================================================================

mod inner;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate Peano number type aliases D0..Dn.
///
/// # Usage
/// ```ignore
/// peano!(16);  // Generates D0 = Z, D1 = S<D0>, ..., D16 = S<D15>
/// ```
#[proc_macro]
pub fn peano(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::peano::expand_peano(input).into()
}

/// Generate `ToTuple` impls for type-lists of length 0..=N.
///
/// Expects `ToTuple`, `Keyed`, `Cons` and `Nil` in scope at the call site.
#[proc_macro]
pub fn impl_to_tuple(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::tuple::TupleInput);
    inner::tuple::expand_to_tuple(input).into()
}

// =============================================================================
// User-facing Macros
// =============================================================================

/// Build a type-level key (`Uint<..>`) from a constant expression.
///
/// Integer literals are split into digits at expansion time; any other
/// expression must be a constant that does not mention generic parameters.
///
/// ```ignore
/// type Mtu = key!(1200);
/// type Word = key!(core::mem::size_of::<usize>());
/// ```
#[proc_macro]
pub fn key(input: TokenStream) -> TokenStream {
    inner::key::expand_key(input.into()).into()
}

/// Build an operator token from its text.
///
/// The token holds only the 64-bit FNV-1a hash of the text, so tokens compare
/// equal exactly when their hashes do.
///
/// ```ignore
/// type Le = op!("<=");
/// ```
#[proc_macro]
pub fn op(input: TokenStream) -> TokenStream {
    inner::token::expand_op(input.into()).into()
}

/// Derive `HasSize` (and `Keyed`) from a declared size.
///
/// ```ignore
/// #[derive(HasSize)]
/// #[size = 1200]
/// struct Mtu;
/// ```
#[proc_macro_derive(HasSize, attributes(size))]
pub fn derive_has_size(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_has_size(input).into()
}

/// Derive `Layout` (storage size and alignment keys) for a non-generic type.
///
/// ```ignore
/// #[derive(Layout)]
/// struct Medium { c: [u8; 9] }
/// ```
#[proc_macro_derive(Layout)]
pub fn derive_layout(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_layout(input).into()
}
