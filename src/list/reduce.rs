//! Folds over the keys of a keyed list.
//!
//! Overflow is never wrapped. Computing a `const` total that overflows is a
//! compile error; a runtime call to [`reduce_sizes`] that overflows panics.
//!
//! ```
//! use tola_tql::{HasSize, tlist, sum_sizes};
//!
//! #[derive(HasSize)] #[size = 10] struct A;
//! #[derive(HasSize)] #[size = 20] struct B;
//!
//! const TOTAL: u64 = sum_sizes::<tlist![A, B]>();
//! assert_eq!(TOTAL, 30);
//! ```

use super::node::{Cons, Nil, TypeList};
use crate::key::keyed::Keyed;

/// Closed set of size folds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldOp {
    Add,
    Min,
    Max,
}

impl FoldOp {
    /// Neutral element of the fold.
    pub const fn identity(self) -> u64 {
        match self {
            FoldOp::Add => 0,
            FoldOp::Min => u64::MAX,
            FoldOp::Max => 0,
        }
    }

    /// One fold step.
    ///
    /// # Panics
    ///
    /// `Add` panics on overflow, in every build profile.
    pub const fn combine(self, acc: u64, size: u64) -> u64 {
        match self {
            FoldOp::Add => match acc.checked_add(size) {
                Some(total) => total,
                None => panic!("size fold overflow"),
            },
            FoldOp::Min => if size < acc { size } else { acc },
            FoldOp::Max => if size > acc { size } else { acc },
        }
    }
}

/// Type-level marker selecting a [`FoldOp`].
pub trait SizeOp {
    const OP: FoldOp;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AddOp;

#[derive(Debug, Default, Clone, Copy)]
pub struct MinOp;

#[derive(Debug, Default, Clone, Copy)]
pub struct MaxOp;

impl SizeOp for AddOp {
    const OP: FoldOp = FoldOp::Add;
}

impl SizeOp for MinOp {
    const OP: FoldOp = FoldOp::Min;
}

impl SizeOp for MaxOp {
    const OP: FoldOp = FoldOp::Max;
}

/// Fold of every element key with `Op`, starting from the op's identity.
pub trait Reduce<Op: SizeOp>: TypeList {
    const TOTAL: u64;
}

impl<Op: SizeOp> Reduce<Op> for Nil {
    const TOTAL: u64 = Op::OP.identity();
}

impl<Op: SizeOp, H: Keyed, T: Reduce<Op>> Reduce<Op> for Cons<H, T> {
    const TOTAL: u64 = Op::OP.combine(<T as Reduce<Op>>::TOTAL, H::SIZE);
}

/// `Op(..Op(Op(init, s0), s1).., sn)` over the keys of `L`.
///
/// The ops are associative and commutative, so folding the list first and
/// combining with `init` last gives the same value.
pub const fn reduce_sizes<Op: SizeOp, L: Reduce<Op>>(init: u64) -> u64 {
    Op::OP.combine(init, <L as Reduce<Op>>::TOTAL)
}

/// Sum of the keys of `L`; `0` for the empty list.
pub const fn sum_sizes<L: Reduce<AddOp>>() -> u64 {
    <L as Reduce<AddOp>>::TOTAL
}

/// Smallest key of `L`; `u64::MAX` for the empty list.
pub const fn min_size<L: Reduce<MinOp>>() -> u64 {
    <L as Reduce<MinOp>>::TOTAL
}

/// Largest key of `L`; `0` for the empty list.
pub const fn max_size<L: Reduce<MaxOp>>() -> u64 {
    <L as Reduce<MaxOp>>::TOTAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::keyed::SizeOf;

    #[derive(crate::HasSize)]
    #[size = 4096]
    struct Page;

    #[derive(crate::HasSize)]
    #[size = 12]
    struct Word;

    #[test]
    fn test_sum() {
        assert_eq!(sum_sizes::<Nil>(), 0);
        assert_eq!(sum_sizes::<crate::tlist![Page]>(), 4096);
        assert_eq!(sum_sizes::<crate::tlist![Page, Word, SizeOf<u32>]>(), 4112);
    }

    #[test]
    fn test_min_max() {
        type L = crate::tlist![Word, Page, SizeOf<u16>];
        assert_eq!(min_size::<L>(), 2);
        assert_eq!(max_size::<L>(), 4096);
        assert_eq!(min_size::<Nil>(), u64::MAX);
    }

    #[test]
    fn test_reduce_with_init() {
        type L = crate::tlist![Word, Word];
        assert_eq!(reduce_sizes::<AddOp, L>(100), 124);
        assert_eq!(reduce_sizes::<MaxOp, L>(100), 100);
        assert_eq!(reduce_sizes::<MinOp, L>(100), 12);
        assert_eq!(reduce_sizes::<AddOp, Nil>(7), 7);
    }

    #[test]
    fn test_const_context() {
        const TOTAL: u64 = sum_sizes::<crate::tlist![Page, Page]>();
        assert_eq!(TOTAL, 8192);
    }

    #[test]
    fn test_add_reaches_max_without_overflow() {
        assert_eq!(FoldOp::Add.combine(u64::MAX - 12, 12), u64::MAX);
        assert_eq!(reduce_sizes::<AddOp, crate::tlist![Word]>(u64::MAX - 12), u64::MAX);
    }

    #[test]
    #[should_panic(expected = "size fold overflow")]
    fn test_runtime_overflow_panics() {
        let init = core::hint::black_box(u64::MAX);
        reduce_sizes::<AddOp, crate::tlist![Word]>(init);
    }
}
