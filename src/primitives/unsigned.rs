//! Type-level unsigned keys.
//!
//! Stable Rust cannot branch on a generic `const` at the type level, so keys
//! are carried as 16 hexadecimal digits. `Uint<D0, ..., D15>` holds the digits
//! as const parameters (most significant first); its `Digits` view is a cons
//! list of nibble types that the comparison walks lexicographically. With a
//! fixed width, lexicographic order is numeric order.
//!
//! Build keys with [`key!`](crate::key), which accepts any constant
//! expression that does not depend on generic parameters.

use core::marker::PhantomData;
use super::nibble::{Nibble, NibbleCmp, SelectNibble};
use super::ordering::{Equal, Ordering};

// =============================================================================
// Digit lists
// =============================================================================

/// End of a digit list.
#[derive(Debug, Default, Clone, Copy)]
pub struct DNil;

/// Digit list cell: most significant remaining digit + rest.
pub struct DCons<H, T>(PhantomData<(H, T)>);

/// Finite list of nibbles.
pub trait DigitList: 'static {
    /// Value of the digits read as a base-16 number.
    const VALUE: u64;
    const LEN: usize;
}

impl DigitList for DNil {
    const VALUE: u64 = 0;
    const LEN: usize = 0;
}

impl<H: Nibble, T: DigitList> DigitList for DCons<H, T> {
    const VALUE: u64 = ((H::VALUE as u64) << (4 * T::LEN)) | T::VALUE;
    const LEN: usize = T::LEN + 1;
}

/// Lexicographic comparison of two equal-length digit lists.
pub trait DigitCmp<Other> {
    type Out: Ordering;
}

impl DigitCmp<DNil> for DNil {
    type Out = Equal;
}

impl<H1, T1, H2, T2> DigitCmp<DCons<H2, T2>> for DCons<H1, T1>
where
    H1: NibbleCmp<H2>,
    H2: Nibble,
    T1: DigitCmp<T2>,
{
    type Out = <<H1 as NibbleCmp<H2>>::Out as Ordering>::Then<<T1 as DigitCmp<T2>>::Out>;
}

// =============================================================================
// Unsigned
// =============================================================================

/// A type-level unsigned integer usable as a key.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a type-level unsigned key",
    label = "expected a key built with `key!(..)`",
    note = "keys are `Uint<..>` values; build one with `tola_tql::key!(<const expr>)`"
)]
pub trait Unsigned: 'static {
    const VALUE: u64;
    type Digits: DigitList;
}

/// 64-bit key as 16 hexadecimal digits, most significant first.
#[derive(Debug, Default, Clone, Copy)]
pub struct Uint<
    const D0: u8, const D1: u8, const D2: u8, const D3: u8,
    const D4: u8, const D5: u8, const D6: u8, const D7: u8,
    const D8: u8, const D9: u8, const D10: u8, const D11: u8,
    const D12: u8, const D13: u8, const D14: u8, const D15: u8,
>(PhantomData<()>);

type Sel<const N: u8> = <() as SelectNibble<N>>::Out;

impl<
    const D0: u8, const D1: u8, const D2: u8, const D3: u8,
    const D4: u8, const D5: u8, const D6: u8, const D7: u8,
    const D8: u8, const D9: u8, const D10: u8, const D11: u8,
    const D12: u8, const D13: u8, const D14: u8, const D15: u8,
> Unsigned for Uint<D0, D1, D2, D3, D4, D5, D6, D7, D8, D9, D10, D11, D12, D13, D14, D15>
where
    (): SelectNibble<D0> + SelectNibble<D1> + SelectNibble<D2> + SelectNibble<D3>
      + SelectNibble<D4> + SelectNibble<D5> + SelectNibble<D6> + SelectNibble<D7>
      + SelectNibble<D8> + SelectNibble<D9> + SelectNibble<D10> + SelectNibble<D11>
      + SelectNibble<D12> + SelectNibble<D13> + SelectNibble<D14> + SelectNibble<D15>,
{
    const VALUE: u64 = <Self::Digits as DigitList>::VALUE;

    type Digits = DCons<Sel<D0>, DCons<Sel<D1>, DCons<Sel<D2>, DCons<Sel<D3>,
        DCons<Sel<D4>, DCons<Sel<D5>, DCons<Sel<D6>, DCons<Sel<D7>,
        DCons<Sel<D8>, DCons<Sel<D9>, DCons<Sel<D10>, DCons<Sel<D11>,
        DCons<Sel<D12>, DCons<Sel<D13>, DCons<Sel<D14>, DCons<Sel<D15>,
        DNil>>>>>>>>>>>>>>>>;
}

/// Three-way comparison of two keys.
pub trait Compare<Other: Unsigned>: Unsigned {
    type Out: Ordering;
}

impl<A, B> Compare<B> for A
where
    A: Unsigned,
    B: Unsigned,
    A::Digits: DigitCmp<B::Digits>,
{
    type Out = <A::Digits as DigitCmp<B::Digits>>::Out;
}

/// Ordering of key `A` relative to key `B`.
pub type CmpOf<A, B> = <A as Compare<B>>::Out;
