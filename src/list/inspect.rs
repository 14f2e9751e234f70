//! Runtime inspection of type-lists
//!
//! Walks a list and reports each element, for debugging and tests.

use super::node::{Cons, Nil};
use crate::key::keyed::Keyed;

/// Runtime inspection of a type-list.
pub trait Inspect {
    /// Calls `f` with the type name of each element, in list order.
    fn inspect<F: FnMut(&'static str)>(f: F);

    /// Type names of all elements.
    #[cfg(feature = "alloc")]
    fn type_names() -> alloc::vec::Vec<&'static str> {
        let mut names = alloc::vec::Vec::new();
        Self::inspect(|name| names.push(name));
        names
    }
}

impl Inspect for Nil {
    fn inspect<F: FnMut(&'static str)>(_f: F) {}
}

impl<H, T: Inspect> Inspect for Cons<H, T> {
    fn inspect<F: FnMut(&'static str)>(mut f: F) {
        f(core::any::type_name::<H>());
        T::inspect(f);
    }
}

/// Runtime inspection of a keyed list: original types and their keys.
pub trait InspectKeys {
    /// Calls `f` with the original type name and key of each element.
    fn inspect_keys<F: FnMut(&'static str, u64)>(f: F);

    /// Keys of all elements, in list order.
    #[cfg(feature = "alloc")]
    fn keys() -> alloc::vec::Vec<u64> {
        let mut keys = alloc::vec::Vec::new();
        Self::inspect_keys(|_, key| keys.push(key));
        keys
    }

    /// Original type names of all elements.
    #[cfg(feature = "alloc")]
    fn inner_names() -> alloc::vec::Vec<&'static str> {
        let mut names = alloc::vec::Vec::new();
        Self::inspect_keys(|name, _| names.push(name));
        names
    }
}

impl InspectKeys for Nil {
    fn inspect_keys<F: FnMut(&'static str, u64)>(_f: F) {}
}

impl<H: Keyed, T: InspectKeys> InspectKeys for Cons<H, T> {
    fn inspect_keys<F: FnMut(&'static str, u64)>(mut f: F) {
        f(core::any::type_name::<H::Inner>(), H::SIZE);
        T::inspect_keys(f);
    }
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use crate::key::keyed::{AlignOf, SizeOf};

    #[test]
    fn test_type_names_in_order() {
        type L = crate::tlist![u8, bool];
        assert_eq!(L::type_names(), ["u8", "bool"]);
        assert!(Nil::type_names().is_empty());
    }

    #[test]
    fn test_keys_and_inner_names() {
        type L = crate::tlist![SizeOf<u32>, AlignOf<u16>];
        assert_eq!(L::keys(), [4, 2]);
        assert_eq!(L::inner_names(), ["u32", "u16"]);
    }

    #[test]
    fn test_visit_count() {
        let mut count = 0;
        <crate::tlist![u8, u8, u8] as Inspect>::inspect(|_| count += 1);
        assert_eq!(count, 3);
    }
}
