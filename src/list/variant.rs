//! Coproducts: closed tagged unions over a type-list.
//!
//! `Coprod<A, Coprod<B, CNil>>` holds exactly one of `A` or `B`. Alternatives
//! are addressed by type; the position index (`Z`, `S<Z>`, ..) is inferred.
//!
//! ```
//! use tola_tql::handlers;
//! use tola_tql::list::variant::{CNil, Coprod};
//!
//! type V = Coprod<u8, Coprod<&'static str, CNil>>;
//!
//! let v = V::inject("ping");
//! assert_eq!(v.get::<&str, _>(), Some(&"ping"));
//! assert_eq!(v.get::<u8, _>(), None);
//!
//! let len = v.fold(handlers![|n: u8| n as usize, |s: &'static str| s.len()]);
//! assert_eq!(len, 4);
//! ```

use crate::primitives::stream::{S, Z};

/// The empty coproduct; has no values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CNil {}

/// Either the head alternative `H` or one of the alternatives in `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coprod<H, T> {
    Here(H),
    There(T),
}

// =============================================================================
// Membership
// =============================================================================

/// `T` is an alternative of `Self` at position `I`.
pub trait Member<T, I>: Sized {
    fn inject(value: T) -> Self;
    fn get(&self) -> Option<&T>;
    fn take(self) -> Result<T, Self>;
}

impl<H, T> Member<H, Z> for Coprod<H, T> {
    fn inject(value: H) -> Self {
        Coprod::Here(value)
    }

    fn get(&self) -> Option<&H> {
        match self {
            Coprod::Here(h) => Some(h),
            Coprod::There(_) => None,
        }
    }

    fn take(self) -> Result<H, Self> {
        match self {
            Coprod::Here(h) => Ok(h),
            other => Err(other),
        }
    }
}

impl<H, T, U, I> Member<U, S<I>> for Coprod<H, T>
where
    T: Member<U, I>,
{
    fn inject(value: U) -> Self {
        Coprod::There(T::inject(value))
    }

    fn get(&self) -> Option<&U> {
        match self {
            Coprod::Here(_) => None,
            Coprod::There(t) => t.get(),
        }
    }

    fn take(self) -> Result<U, Self> {
        match self {
            Coprod::Here(h) => Err(Coprod::Here(h)),
            Coprod::There(t) => t.take().map_err(Coprod::There),
        }
    }
}

// =============================================================================
// Folding
// =============================================================================

/// Dispatch the active alternative to one handler per alternative.
///
/// Handlers are a nested pair list `(F0, (F1, (.., ())))` in alternative
/// order; build it with [`handlers!`](crate::handlers).
pub trait Fold<Handlers, R> {
    fn fold(self, handlers: Handlers) -> R;
}

impl<R> Fold<(), R> for CNil {
    fn fold(self, _handlers: ()) -> R {
        match self {}
    }
}

impl<H, T, F, Rest, R> Fold<(F, Rest), R> for Coprod<H, T>
where
    F: FnOnce(H) -> R,
    T: Fold<Rest, R>,
{
    fn fold(self, (f, rest): (F, Rest)) -> R {
        match self {
            Coprod::Here(h) => f(h),
            Coprod::There(t) => t.fold(rest),
        }
    }
}

impl<H, T> Coprod<H, T> {
    /// Build the coproduct from one of its alternatives.
    pub fn inject<U, I>(value: U) -> Self
    where
        Self: Member<U, I>,
    {
        <Self as Member<U, I>>::inject(value)
    }

    /// Borrow alternative `U` if it is the active one.
    pub fn get<U, I>(&self) -> Option<&U>
    where
        Self: Member<U, I>,
    {
        <Self as Member<U, I>>::get(self)
    }

    /// Move alternative `U` out, or give the coproduct back.
    pub fn take<U, I>(self) -> Result<U, Self>
    where
        Self: Member<U, I>,
    {
        <Self as Member<U, I>>::take(self)
    }

    /// Apply the handler matching the active alternative.
    pub fn fold<Hs, R>(self, handlers: Hs) -> R
    where
        Self: Fold<Hs, R>,
    {
        <Self as Fold<Hs, R>>::fold(self, handlers)
    }
}

/// Build a handler list for [`Coprod::fold`].
#[macro_export]
macro_rules! handlers {
    () => { () };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        ($head, $crate::handlers!($($tail),*))
    };
}
