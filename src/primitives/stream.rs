//! Token hash streams and Peano numbers.
//!
//! A token (operator text such as `"<="`) is hashed with 64-bit FNV-1a and
//! carried as a stream of 16 nibbles. Two tokens are equal when their streams
//! agree up to a depth limit.

use core::marker::PhantomData;
use super::bool::{Absent, Bool, Present};
use super::nibble::{Nibble, NibbleEq, SelectNibble};

// =============================================================================
// Hash Stream trait
// =============================================================================

/// Infinite stream of nibbles via recursive type
pub trait HashStream: 'static {
    type Head: Nibble;
    type Tail: HashStream;
}

// =============================================================================
// Peano Numbers
// =============================================================================

/// Peano number trait
pub trait Peano: 'static {
    const VALUE: usize;
}

/// Zero (base case)
#[derive(Debug, Default, Clone, Copy)]
pub struct Z;
impl Peano for Z {
    const VALUE: usize = 0;
}

/// Successor (S<N> = N + 1)
#[derive(Debug, Default, Clone, Copy)]
pub struct S<N>(PhantomData<N>);
impl<N: Peano> Peano for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

// Generate D0..D16 using proc-macro
macros::peano!(16);

/// Default comparison depth for token streams (16 nibbles = 64 bits)
pub type DefaultMaxDepth = D16;

// =============================================================================
// Stream comparison
// =============================================================================

/// Compare two hash streams up to a depth limit
pub trait StreamEq<Other: HashStream, Limit> {
    type Out: Bool;
}

impl<A: HashStream, B: HashStream> StreamEq<B, Z> for A {
    type Out = Present;
}

impl<A, B, L> StreamEq<B, S<L>> for A
where
    A: HashStream,
    B: HashStream,
    A::Head: NibbleEq<B::Head>,
    <A::Head as NibbleEq<B::Head>>::Out: StreamEqDispatch<A::Tail, B::Tail, L>,
{
    type Out = <<A::Head as NibbleEq<B::Head>>::Out as StreamEqDispatch<A::Tail, B::Tail, L>>::Out;
}

/// Continue the comparison only while heads agree.
pub trait StreamEqDispatch<TailA, TailB, Limit> {
    type Out: Bool;
}

impl<TailA, TailB, L> StreamEqDispatch<TailA, TailB, L> for Absent {
    type Out = Absent;
}

impl<TailA, TailB, L> StreamEqDispatch<TailA, TailB, L> for Present
where
    TailA: HashStream + StreamEq<TailB, L>,
    TailB: HashStream,
{
    type Out = <TailA as StreamEq<TailB, L>>::Out;
}

// =============================================================================
// Const-to-Stream conversion
// =============================================================================

/// Build a hash stream from 16 const nibble values (for 64-bit hash)
/// Usage: HashStream16<{n0}, {n1}, ..., {n15}>
///
/// The tail rotates the digits, so the stream is infinite and cycles every 16
/// nibbles; comparisons stop at `DefaultMaxDepth`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HashStream16<
    const N0: u8, const N1: u8, const N2: u8, const N3: u8,
    const N4: u8, const N5: u8, const N6: u8, const N7: u8,
    const N8: u8, const N9: u8, const N10: u8, const N11: u8,
    const N12: u8, const N13: u8, const N14: u8, const N15: u8,
>(PhantomData<()>);

impl<
    const N0: u8, const N1: u8, const N2: u8, const N3: u8,
    const N4: u8, const N5: u8, const N6: u8, const N7: u8,
    const N8: u8, const N9: u8, const N10: u8, const N11: u8,
    const N12: u8, const N13: u8, const N14: u8, const N15: u8,
> HashStream for HashStream16<N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, N10, N11, N12, N13, N14, N15>
where
    (): SelectNibble<N0> + SelectNibble<N1> + SelectNibble<N2> + SelectNibble<N3>
      + SelectNibble<N4> + SelectNibble<N5> + SelectNibble<N6> + SelectNibble<N7>
      + SelectNibble<N8> + SelectNibble<N9> + SelectNibble<N10> + SelectNibble<N11>
      + SelectNibble<N12> + SelectNibble<N13> + SelectNibble<N14> + SelectNibble<N15>,
{
    type Head = <() as SelectNibble<N0>>::Out;
    type Tail = HashStream16<N1, N2, N3, N4, N5, N6, N7, N8, N9, N10, N11, N12, N13, N14, N15, N0>;
}

#[cfg(test)]
mod tests {
    use super::*;

    type Abc = HashStream16<1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0>;
    type Abd = HashStream16<1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 1>;

    #[test]
    fn test_peano_aliases() {
        assert_eq!(D0::VALUE, 0);
        assert_eq!(D16::VALUE, 16);
    }

    #[test]
    fn test_stream_eq_full_depth() {
        assert!(<<Abc as StreamEq<Abc, DefaultMaxDepth>>::Out as Bool>::VALUE);
        assert!(!<<Abc as StreamEq<Abd, DefaultMaxDepth>>::Out as Bool>::VALUE);
    }

    #[test]
    fn test_stream_eq_respects_limit() {
        // The streams only differ in the 16th nibble.
        assert!(<<Abc as StreamEq<Abd, D15>>::Out as Bool>::VALUE);
    }
}
