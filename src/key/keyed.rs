//! Keyed wrappers: a type paired with the scalar it is compared by.
//!
//! - `Size<T>`: the size `T` declares through [`HasSize`].
//! - `SizeOf<T>`: storage size of `T` (`size_of`), through [`Layout`].
//! - `AlignOf<T>`: alignment of `T` (`align_of`), through [`Layout`].
//!
//! Key selectors (`BySize`, `BySizeOf`, `ByAlignOf`, or any selector made with
//! [`key_of!`](crate::key_of)) pick the wrapper applied to every element of a
//! list.

use core::marker::PhantomData;
use crate::list::{Cons, Nil, TypeList};
use crate::primitives::unsigned::Unsigned;

// =============================================================================
// Core traits
// =============================================================================

/// A type that carries a key.
///
/// `Inner` is the original type; `Key` is the type-level scalar it is ordered
/// and filtered by.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no key",
    label = "not a keyed type",
    note = "wrap it with `Size<_>`, `SizeOf<_>` or `AlignOf<_>`, or derive `HasSize` with `#[size = N]`"
)]
pub trait Keyed {
    type Inner;
    type Key: Unsigned;

    const SIZE: u64 = <Self::Key as Unsigned>::VALUE;
}

/// A type that declares a size attribute.
///
/// Usually derived:
///
/// ```
/// use tola_tql::{HasSize, Keyed};
///
/// #[derive(HasSize)]
/// #[size = 48]
/// struct MsgLogin;
///
/// assert_eq!(<MsgLogin as Keyed>::SIZE, 48);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not declare a size",
    label = "missing `HasSize`",
    note = "add `#[derive(HasSize)]` with `#[size = N]` to `{Self}`"
)]
pub trait HasSize {
    type Size: Unsigned;
}

/// Storage size and alignment of a type as keys.
///
/// Implemented for the primitive types; derive it for your own non-generic
/// types, or use [`impl_layout!`](crate::impl_layout).
#[diagnostic::on_unimplemented(
    message = "the layout of `{Self}` is not known at the type level",
    label = "missing `Layout`",
    note = "add `#[derive(Layout)]` to `{Self}` or call `impl_layout!({Self})`"
)]
pub trait Layout {
    type Size: Unsigned;
    type Align: Unsigned;
}

// =============================================================================
// Wrappers
// =============================================================================

/// Keyed by the declared size of `T`.
pub struct Size<T>(PhantomData<T>);

impl<T: HasSize> Keyed for Size<T> {
    type Inner = T;
    type Key = T::Size;
}

/// Keyed by `size_of::<T>()`.
pub struct SizeOf<T>(PhantomData<T>);

impl<T: Layout> Keyed for SizeOf<T> {
    type Inner = T;
    type Key = <T as Layout>::Size;
}

/// Keyed by `align_of::<T>()`.
pub struct AlignOf<T>(PhantomData<T>);

impl<T: Layout> Keyed for AlignOf<T> {
    type Inner = T;
    type Key = <T as Layout>::Align;
}

// =============================================================================
// Key selectors
// =============================================================================

/// Chooses the keyed wrapper applied to each element of a list.
pub trait KeyOf {
    type Wrap<T>;
}

/// Declare a key selector `By<Wrapper>` for a one-parameter keyed wrapper.
///
/// The wrapper must be at least as visible as the selector (`$vis`), since
/// the selector names it in `KeyOf::Wrap`.
///
/// ```
/// use core::marker::PhantomData;
/// use tola_tql::{key, key_of, Keyed};
///
/// pub struct Fixed<T>(PhantomData<T>);
/// impl<T> Keyed for Fixed<T> {
///     type Inner = T;
///     type Key = key!(7);
/// }
///
/// key_of!(pub Fixed);
/// type Keys = tola_tql::Apply<ByFixed, tola_tql::tlist![u8, u16]>;
/// assert_eq!(tola_tql::sum_sizes::<Keys>(), 14);
/// ```
#[macro_export]
macro_rules! key_of {
    ($vis:vis $wrapper:ident) => {
        $crate::paste::paste! {
            #[derive(Debug, Default, Clone, Copy)]
            $vis struct [<By $wrapper>];

            impl $crate::KeyOf for [<By $wrapper>] {
                type Wrap<T> = $wrapper<T>;
            }
        }
    };
}

key_of!(pub Size);
key_of!(pub SizeOf);
key_of!(pub AlignOf);

// =============================================================================
// List mapping
// =============================================================================

/// Wrap every element of a list with the selector `K`.
pub trait MapKey<K: KeyOf>: TypeList {
    type Out: TypeList;
}

impl<K: KeyOf> MapKey<K> for Nil {
    type Out = Nil;
}

impl<K: KeyOf, H, T: MapKey<K>> MapKey<K> for Cons<H, T> {
    type Out = Cons<K::Wrap<H>, <T as MapKey<K>>::Out>;
}

/// `[K::Wrap<T0>, K::Wrap<T1>, ..]` for `L = [T0, T1, ..]`.
pub type Apply<K, L> = <L as MapKey<K>>::Out;

/// Recover the original types of a keyed list.
pub trait MapInner: TypeList {
    type Out: TypeList;
}

impl MapInner for Nil {
    type Out = Nil;
}

impl<H: Keyed, T: MapInner> MapInner for Cons<H, T> {
    type Out = Cons<H::Inner, <T as MapInner>::Out>;
}

/// `[M0::Inner, M1::Inner, ..]` for a keyed list `[M0, M1, ..]`.
pub type Originals<L> = <L as MapInner>::Out;

// =============================================================================
// Layout of primitive types
// =============================================================================

/// Implement [`Layout`] for concrete, non-generic types.
///
/// ```
/// struct Header { _len: u16, _kind: u8 }
/// tola_tql::impl_layout!(Header);
///
/// assert_eq!(
///     <tola_tql::SizeOf<Header> as tola_tql::Keyed>::SIZE,
///     core::mem::size_of::<Header>() as u64,
/// );
/// ```
#[macro_export]
macro_rules! impl_layout {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Layout for $ty {
                type Size = $crate::key!(::core::mem::size_of::<$ty>());
                type Align = $crate::key!(::core::mem::align_of::<$ty>());
            }
        )*
    };
}

impl_layout!(
    (), bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
);
