//! Pivot-relative relations over keyed types.
//!
//! A relation answers, at the type level, whether an element stands in some
//! relation to a pivot. The standard family compares keys:
//! `By<C>` evaluates `C(elem.key, pivot.key)`.

use core::marker::PhantomData;
use super::keyed::Keyed;
use crate::primitives::bool::Bool;
use crate::primitives::ordering::Ordering;
use crate::primitives::unsigned::{CmpOf, Compare};

/// Type-level predicate over a pivot and an element.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a relation between `{Pivot}` and `{Elem}`",
    label = "not a relation for this pivot/element pair",
    note = "both sides must be keyed; an unrecognized operator token maps to `NoMatch`, which is not a relation"
)]
pub trait Relation<Pivot, Elem> {
    type Out: Bool;
}

// =============================================================================
// Comparators
// =============================================================================

/// Turns the ordering of `elem.key` against `pivot.key` into a verdict.
pub trait Comparator {
    type Test<O: Ordering>: Bool;
}

/// `elem < pivot`
#[derive(Debug, Default, Clone, Copy)]
pub struct Below;

/// `elem <= pivot`
#[derive(Debug, Default, Clone, Copy)]
pub struct AtMost;

/// `elem > pivot`
#[derive(Debug, Default, Clone, Copy)]
pub struct Above;

/// `elem >= pivot`
#[derive(Debug, Default, Clone, Copy)]
pub struct AtLeast;

/// `elem == pivot`
#[derive(Debug, Default, Clone, Copy)]
pub struct Equals;

/// `elem != pivot`
#[derive(Debug, Default, Clone, Copy)]
pub struct Differs;

impl Comparator for Below {
    type Test<O: Ordering> = O::IsLess;
}

impl Comparator for AtMost {
    type Test<O: Ordering> = <O::IsGreater as Bool>::Not;
}

impl Comparator for Above {
    type Test<O: Ordering> = O::IsGreater;
}

impl Comparator for AtLeast {
    type Test<O: Ordering> = <O::IsLess as Bool>::Not;
}

impl Comparator for Equals {
    type Test<O: Ordering> = O::IsEqual;
}

impl Comparator for Differs {
    type Test<O: Ordering> = <O::IsEqual as Bool>::Not;
}

// =============================================================================
// By<C>
// =============================================================================

/// Relation comparing the element key against the pivot key with `C`.
pub struct By<C>(PhantomData<C>);

impl<C, P, E> Relation<P, E> for By<C>
where
    C: Comparator,
    P: Keyed,
    E: Keyed,
    E::Key: Compare<P::Key>,
{
    type Out = C::Test<CmpOf<E::Key, P::Key>>;
}

/// The six standard relations.
pub mod ops {
    use super::*;

    pub type Lt = By<Below>;
    pub type Le = By<AtMost>;
    pub type Gt = By<Above>;
    pub type Ge = By<AtLeast>;
    pub type EqTo = By<Equals>;
    pub type Ne = By<Differs>;
}

/// `Present` if `Elem` stands in relation `R` to `Pivot`.
pub type Holds<R, Pivot, Elem> = <R as Relation<Pivot, Elem>>::Out;

// =============================================================================
// Sort orders
// =============================================================================

/// Direction of a sort: which comparators route tail elements left/right of
/// the pivot.
pub trait Order {
    type Left: Comparator;
    type Right: Comparator;
}

/// Non-decreasing key order.
#[derive(Debug, Default, Clone, Copy)]
pub struct Asc;

/// Non-increasing key order.
#[derive(Debug, Default, Clone, Copy)]
pub struct Desc;

impl Order for Asc {
    type Left = Below;
    type Right = AtLeast;
}

impl Order for Desc {
    type Left = Above;
    type Right = AtMost;
}
