//! Type-level nibble system (4-bit values X0-XF).
//!
//! Nibbles are the digits of type-level keys and of token hash streams.

use super::bool::{Absent, Present};
use super::ordering::{Equal, Greater, Less};

// =============================================================================
// Nibble iteration macros
// =============================================================================

/// Iterate over all 16 nibbles (X0..XF).
#[macro_export]
macro_rules! for_each_nibble {
    ($mac:ident) => {
        $mac!(X0, 0); $mac!(X1, 1); $mac!(X2, 2); $mac!(X3, 3);
        $mac!(X4, 4); $mac!(X5, 5); $mac!(X6, 6); $mac!(X7, 7);
        $mac!(X8, 8); $mac!(X9, 9); $mac!(XA, 10); $mac!(XB, 11);
        $mac!(XC, 12); $mac!(XD, 13); $mac!(XE, 14); $mac!(XF, 15);
    };
}

/// Generate an impl for every ordered pair `(Lo, Hi)` with `Lo < Hi`.
#[macro_export]
macro_rules! for_ordered_pairs {
    ($mac:ident) => {
        $crate::for_ordered_pairs!(@recurse $mac, [X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF]);
    };
    (@recurse $mac:ident, [$head:ident, $($tail:ident),*]) => {
        $(
            $mac!($head, $tail);
        )*
        $crate::for_ordered_pairs!(@recurse $mac, [$($tail),*]);
    };
    (@recurse $mac:ident, [$last:ident]) => {};
}

// =============================================================================
// Nibble trait and types
// =============================================================================

/// Type-level nibble (4-bit value, 0..15)
pub trait Nibble: 'static {
    const VALUE: u8;
}

// Define structs X0..XF and implement Nibble
macro_rules! define_nibble {
    ($n:ident, $v:literal) => {
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $n;
        impl Nibble for $n {
            const VALUE: u8 = $v;
        }
    };
}
for_each_nibble!(define_nibble);

// =============================================================================
// Const to Type Mapping
// =============================================================================

/// Select the nibble type for a const digit.
///
/// Only `0..=15` are mapped; anything larger has no impl.
pub trait SelectNibble<const N: u8> {
    type Out: Nibble;
}

macro_rules! impl_select_nibble {
    ($n:ident, $v:literal) => {
        impl SelectNibble<$v> for () {
            type Out = $n;
        }
    };
}
for_each_nibble!(impl_select_nibble);

// =============================================================================
// Nibble equality
// =============================================================================

/// Type-level nibble equality
pub trait NibbleEq<Other: Nibble>: Nibble {
    type Out: super::bool::Bool;
}

macro_rules! impl_eq_self {
    ($n:ident, $v:literal) => {
        impl NibbleEq<$n> for $n {
            type Out = Present;
        }
    };
}
for_each_nibble!(impl_eq_self);

macro_rules! impl_neq {
    ($a:ident, $b:ident) => {
        impl NibbleEq<$b> for $a {
            type Out = Absent;
        }
        impl NibbleEq<$a> for $b {
            type Out = Absent;
        }
    };
}
for_ordered_pairs!(impl_neq);

// =============================================================================
// Nibble ordering
// =============================================================================

/// Type-level three-way comparison of two nibbles.
pub trait NibbleCmp<Other: Nibble>: Nibble {
    type Out: super::ordering::Ordering;
}

macro_rules! impl_cmp_self {
    ($n:ident, $v:literal) => {
        impl NibbleCmp<$n> for $n {
            type Out = Equal;
        }
    };
}
for_each_nibble!(impl_cmp_self);

macro_rules! impl_cmp_pair {
    ($lo:ident, $hi:ident) => {
        impl NibbleCmp<$hi> for $lo {
            type Out = Less;
        }
        impl NibbleCmp<$lo> for $hi {
            type Out = Greater;
        }
    };
}
for_ordered_pairs!(impl_cmp_pair);
