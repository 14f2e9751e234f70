//! Stable partition of a list against a pivot-relative relation.
//!
//! ```text
//! Partition<P, R> for [e0, e1, e2, ..]
//!   Pass = [ei | R(P, ei) = Present]   (input order)
//!   Fail = [ei | R(P, ei) = Absent]    (input order)
//! ```

use super::node::{Cons, Nil, TypeList};
use crate::key::keyed::MapKey;
use crate::key::relation::Relation;
use crate::primitives::bool::{Absent, Present};

/// Split a list into the elements that satisfy `Rel` against `Pivot` and the
/// rest.
pub trait Partition<Pivot, Rel>: TypeList {
    type Pass: TypeList;
    type Fail: TypeList;
}

impl<P, R> Partition<P, R> for Nil {
    type Pass = Nil;
    type Fail = Nil;
}

impl<P, R, H, T> Partition<P, R> for Cons<H, T>
where
    T: Partition<P, R>,
    R: Relation<P, H>,
    <R as Relation<P, H>>::Out: Bucket<H, T::Pass, T::Fail>,
{
    type Pass = <<R as Relation<P, H>>::Out as Bucket<H, T::Pass, T::Fail>>::Pass;
    type Fail = <<R as Relation<P, H>>::Out as Bucket<H, T::Pass, T::Fail>>::Fail;
}

/// Prepend `H` to the bucket chosen by the verdict.
pub trait Bucket<H, Pass: TypeList, Fail: TypeList> {
    type Pass: TypeList;
    type Fail: TypeList;
}

impl<H, Pass: TypeList, Fail: TypeList> Bucket<H, Pass, Fail> for Present {
    type Pass = Cons<H, Pass>;
    type Fail = Fail;
}

impl<H, Pass: TypeList, Fail: TypeList> Bucket<H, Pass, Fail> for Absent {
    type Pass = Pass;
    type Fail = Cons<H, Fail>;
}

/// Elements of `L` for which `R(P, e)` holds.
pub type FilterBy<P, R, L> = <L as Partition<P, R>>::Pass;

/// Elements of `L` for which `R(P, e)` does not hold.
pub type RejectIfBy<P, R, L> = <L as Partition<P, R>>::Fail;

/// Both buckets as a two-element list `[Pass, Fail]`.
pub type Split<P, R, L> = Cons<FilterBy<P, R, L>, Cons<RejectIfBy<P, R, L>, Nil>>;

/// Wrap every element of `L` with key selector `K`, then split against `P`.
pub type PartitionByKey<P, R, K, L> = Split<P, R, <L as MapKey<K>>::Out>;
