//! Type-list structure: `Nil | Cons<Head, Tail>`.

use core::marker::PhantomData;

/// The empty list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Nil;

/// A list cell: `Head` followed by the list `Tail`.
pub struct Cons<H, T>(PhantomData<(H, T)>);

// Manual impls: no bounds on the element types.
impl<H, T> Default for Cons<H, T> {
    fn default() -> Self {
        Cons(PhantomData)
    }
}

impl<H, T> Clone for Cons<H, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H, T> Copy for Cons<H, T> {}

impl<H, T> core::fmt::Debug for Cons<H, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Cons<")?;
        f.write_str(core::any::type_name::<H>())?;
        f.write_str(", ..>")
    }
}

// =============================================================================
// TypeList
// =============================================================================

/// A finite type-level list.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a type-list",
    label = "expected `Nil` or `Cons<_, _>`",
    note = "build lists with `tlist![A, B, ..]`"
)]
pub trait TypeList {
    const LEN: usize;
}

impl TypeList for Nil {
    const LEN: usize = 0;
}

impl<H, T: TypeList> TypeList for Cons<H, T> {
    const LEN: usize = T::LEN + 1;
}

/// Head/tail access, only for non-empty lists.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is empty",
    label = "`Nil` has no head or tail"
)]
pub trait NonEmpty: TypeList {
    type Head;
    type Tail: TypeList;
}

impl<H, T: TypeList> NonEmpty for Cons<H, T> {
    type Head = H;
    type Tail = T;
}

// =============================================================================
// Concatenation
// =============================================================================

/// List concatenation: `Self` elements, then `Other` elements.
pub trait Append<Other: TypeList>: TypeList {
    type Out: TypeList;
}

impl<B: TypeList> Append<B> for Nil {
    type Out = B;
}

impl<H, T, B> Append<B> for Cons<H, T>
where
    T: Append<B>,
    B: TypeList,
{
    type Out = Cons<H, <T as Append<B>>::Out>;
}

/// `A ++ B`.
pub type Concat<A, B> = <A as Append<B>>::Out;

/// Build a type-list from a comma-separated sequence of types.
///
/// ```
/// use tola_tql::{tlist, list::{Cons, Nil}};
/// tola_tql::assert_type_eq!(tlist![u8, u16], Cons<u8, Cons<u16, Nil>>);
/// ```
#[macro_export]
macro_rules! tlist {
    () => { $crate::list::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::list::Cons<$head, $crate::tlist![$($tail),*]>
    };
}
