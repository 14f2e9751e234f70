//! Quicksort over keyed lists.
//!
//! The head is the pivot; the tail is partitioned twice, once with the
//! order's left comparator and once with its right comparator:
//!
//! ```text
//! Sort<Asc>  [p, ..tail] = Sort(tail | e <  p) ++ [p] ++ Sort(tail | e >= p)
//! Sort<Desc> [p, ..tail] = Sort(tail | e >  p) ++ [p] ++ Sort(tail | e <= p)
//! ```
//!
//! Each partition step keeps input order, but equal keys may be reordered
//! across steps: the sort is not globally stable.
//!
//! Deep lists need more trait-solver recursion; raise
//! `#![recursion_limit = "..."]` in the calling crate if the compiler asks.

use super::node::{Append, Cons, Nil, TypeList};
use super::partition::Partition;
use crate::key::keyed::MapKey;
use crate::key::relation::{By, Order};

/// Sort a keyed list in order `O`.
pub trait Sort<O: Order>: TypeList {
    type Out: TypeList;
}

impl<O: Order> Sort<O> for Nil {
    type Out = Nil;
}

type LeftOf<O, H, T> = <T as Partition<H, By<<O as Order>::Left>>>::Pass;
type RightOf<O, H, T> = <T as Partition<H, By<<O as Order>::Right>>>::Pass;

impl<O, H, T> Sort<O> for Cons<H, T>
where
    O: Order,
    T: Partition<H, By<O::Left>> + Partition<H, By<O::Right>>,
    LeftOf<O, H, T>: Sort<O>,
    RightOf<O, H, T>: Sort<O>,
    <LeftOf<O, H, T> as Sort<O>>::Out: Append<Cons<H, <RightOf<O, H, T> as Sort<O>>::Out>>,
{
    type Out = <<LeftOf<O, H, T> as Sort<O>>::Out as Append<
        Cons<H, <RightOf<O, H, T> as Sort<O>>::Out>,
    >>::Out;
}

/// Sorted list of `L`'s elements wrapped with key selector `K`.
///
/// The originals are the `Inner` types of the result (see
/// [`Originals`](crate::key::keyed::Originals)).
pub type TypeSort<O, K, L> = <<L as MapKey<K>>::Out as Sort<O>>::Out;

/// `Sort<O>` applied to an already keyed list.
pub type Sorted<O, L> = <L as Sort<O>>::Out;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::keyed::{Keyed, Size};
    use crate::key::relation::{Asc, Desc};

    #[derive(crate::HasSize)]
    #[size = 3]
    struct Three;

    #[derive(crate::HasSize)]
    #[size = 1]
    struct One;

    #[derive(crate::HasSize)]
    #[size = 2]
    struct Two;

    #[test]
    fn test_trivial_lists() {
        crate::assert_type_eq!(Sorted<Asc, Nil>, Nil);
        crate::assert_type_eq!(Sorted<Asc, crate::tlist![One]>, crate::tlist![One]);
        crate::assert_type_eq!(Sorted<Desc, crate::tlist![One]>, crate::tlist![One]);
    }

    #[test]
    fn test_three_elements() {
        type L = crate::tlist![Three, One, Two];
        crate::assert_type_eq!(Sorted<Asc, L>, crate::tlist![One, Two, Three]);
        crate::assert_type_eq!(Sorted<Desc, L>, crate::tlist![Three, Two, One]);
    }

    #[test]
    fn test_type_sort_wraps() {
        type S = TypeSort<Asc, crate::key::keyed::BySize, crate::tlist![Two, One]>;
        crate::assert_type_eq!(S, crate::tlist![Size<One>, Size<Two>]);
        assert_eq!(<<S as crate::list::NonEmpty>::Head as Keyed>::SIZE, 1);
    }
}
