//! Materialize a keyed list as a tuple or a coproduct of its original types.

use super::node::{Cons, Nil, TypeList};
use super::variant::{CNil, Coprod};
use crate::key::keyed::Keyed;

/// Flat tuple `(M0::Inner, M1::Inner, ..)` of a keyed list.
///
/// Defined for lists of up to 32 elements; `Nil` gives `()`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be turned into a tuple",
    note = "tuples are available for keyed lists of at most 32 elements"
)]
pub trait ToTuple: TypeList {
    type Out;
}

macros::impl_to_tuple!(32);

/// Coproduct `Coprod<M0::Inner, Coprod<M1::Inner, .. CNil>>` of a keyed list.
pub trait ToVariant: TypeList {
    type Out;
}

impl ToVariant for Nil {
    type Out = CNil;
}

impl<H: Keyed, T: ToVariant> ToVariant for Cons<H, T> {
    type Out = Coprod<H::Inner, <T as ToVariant>::Out>;
}

/// Tuple of the original types of `L`, in list order.
pub type TupleOf<L> = <L as ToTuple>::Out;

/// Coproduct of the original types of `L`, in list order.
pub type VariantOf<L> = <L as ToVariant>::Out;
