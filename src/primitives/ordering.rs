//! Type-level three-way ordering.
//!
//! `Less`, `Equal` and `Greater` are the type-level counterparts of
//! `core::cmp::Ordering`. Comparators read them through the `IsLess` /
//! `IsEqual` / `IsGreater` projections.

use super::bool::{Absent, Bool, Present};

/// Result of a type-level comparison.
pub trait Ordering: 'static {
    /// Runtime mirror of this ordering.
    const VALUE: core::cmp::Ordering;

    type IsLess: Bool;
    type IsEqual: Bool;
    type IsGreater: Bool;

    /// Lexicographic chaining: `Equal` defers to `Next`, anything else wins.
    type Then<Next: Ordering>: Ordering;

    /// `Less` <-> `Greater`.
    type Reverse: Ordering;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Less;

#[derive(Debug, Default, Clone, Copy)]
pub struct Equal;

#[derive(Debug, Default, Clone, Copy)]
pub struct Greater;

impl Ordering for Less {
    const VALUE: core::cmp::Ordering = core::cmp::Ordering::Less;
    type IsLess = Present;
    type IsEqual = Absent;
    type IsGreater = Absent;
    type Then<Next: Ordering> = Less;
    type Reverse = Greater;
}

impl Ordering for Equal {
    const VALUE: core::cmp::Ordering = core::cmp::Ordering::Equal;
    type IsLess = Absent;
    type IsEqual = Present;
    type IsGreater = Absent;
    type Then<Next: Ordering> = Next;
    type Reverse = Equal;
}

impl Ordering for Greater {
    const VALUE: core::cmp::Ordering = core::cmp::Ordering::Greater;
    type IsLess = Absent;
    type IsEqual = Absent;
    type IsGreater = Present;
    type Then<Next: Ordering> = Greater;
    type Reverse = Less;
}
