//! Query sugar
//!
//! Short forms for the type-level queries. Lists are written inline; a
//! relation may be given as a type or as an operator literal.
//!
//! | Macro | Expands to |
//! |-------|------------|
//! | `filter_by![P, R; A, B]` | `FilterBy<P, R, tlist![A, B]>` |
//! | `reject_if_by![P, R; A, B]` | `RejectIfBy<P, R, tlist![A, B]>` |
//! | `partition_by![P, R; A, B]` | `Split<P, R, tlist![A, B]>` |
//! | `partition_by_key![P, R, K; A, B]` | `PartitionByKey<P, R, K, tlist![A, B]>` |
//! | `sort_types![A, B]` | tuple of `A, B` by ascending declared size |
//! | `sort_types_by![K; A, B]` | tuple, ascending by selector `K` |
//! | `sort_types_desc![K; A, B]` | tuple, descending by selector `K` |
//! | `to_tuple![L]` / `to_variant![L]` | `TupleOf<L>` / `VariantOf<L>` |
//! | `sum_sizes![A, B]` | `sum_sizes::<tlist![A, B]>()` |
//! | `reduce_sizes![Op, init; A, B]` | `reduce_sizes::<Op, tlist![A, B]>(init)` |
//! | `op_rel!("<=")` | `OpType<op!("<=")>` |

// =============================================================================
// Relations
// =============================================================================

/// Relation named by an operator literal: `"<"`, `"<="`, `">"`, `">="`,
/// `"=="` or `"!="`.
#[macro_export]
macro_rules! op_rel {
    ($op:literal) => {
        $crate::OpType<$crate::op!($op)>
    };
}

// =============================================================================
// Partition
// =============================================================================

/// Elements that satisfy the relation against the pivot.
#[macro_export]
macro_rules! filter_by {
    ($pivot:ty, $op:literal; $($t:ty),* $(,)?) => {
        $crate::FilterBy<$pivot, $crate::op_rel!($op), $crate::tlist![$($t),*]>
    };
    ($pivot:ty, $rel:ty; $($t:ty),* $(,)?) => {
        $crate::FilterBy<$pivot, $rel, $crate::tlist![$($t),*]>
    };
}

/// Elements that do not satisfy the relation against the pivot.
#[macro_export]
macro_rules! reject_if_by {
    ($pivot:ty, $op:literal; $($t:ty),* $(,)?) => {
        $crate::RejectIfBy<$pivot, $crate::op_rel!($op), $crate::tlist![$($t),*]>
    };
    ($pivot:ty, $rel:ty; $($t:ty),* $(,)?) => {
        $crate::RejectIfBy<$pivot, $rel, $crate::tlist![$($t),*]>
    };
}

/// Both buckets as `[Pass, Fail]`.
#[macro_export]
macro_rules! partition_by {
    ($pivot:ty, $op:literal; $($t:ty),* $(,)?) => {
        $crate::Split<$pivot, $crate::op_rel!($op), $crate::tlist![$($t),*]>
    };
    ($pivot:ty, $rel:ty; $($t:ty),* $(,)?) => {
        $crate::Split<$pivot, $rel, $crate::tlist![$($t),*]>
    };
}

/// Wrap each type with a key selector, then split.
#[macro_export]
macro_rules! partition_by_key {
    ($pivot:ty, $op:literal, $key:ty; $($t:ty),* $(,)?) => {
        $crate::PartitionByKey<$pivot, $crate::op_rel!($op), $key, $crate::tlist![$($t),*]>
    };
    ($pivot:ty, $rel:ty, $key:ty; $($t:ty),* $(,)?) => {
        $crate::PartitionByKey<$pivot, $rel, $key, $crate::tlist![$($t),*]>
    };
}

// =============================================================================
// Sort
// =============================================================================

/// Tuple of the types in ascending declared-size order.
#[macro_export]
macro_rules! sort_types {
    ($($t:ty),* $(,)?) => {
        $crate::sort_types_by![$crate::BySize; $($t),*]
    };
}

/// Tuple of the types in ascending order of selector `K`.
#[macro_export]
macro_rules! sort_types_by {
    ($key:ty; $($t:ty),* $(,)?) => {
        $crate::TupleOf<$crate::TypeSort<$crate::Asc, $key, $crate::tlist![$($t),*]>>
    };
}

/// Tuple of the types in descending order of selector `K`.
#[macro_export]
macro_rules! sort_types_desc {
    ($key:ty; $($t:ty),* $(,)?) => {
        $crate::TupleOf<$crate::TypeSort<$crate::Desc, $key, $crate::tlist![$($t),*]>>
    };
}

// =============================================================================
// Extraction
// =============================================================================

#[macro_export]
macro_rules! to_tuple {
    ($list:ty) => {
        $crate::TupleOf<$list>
    };
}

#[macro_export]
macro_rules! to_variant {
    ($list:ty) => {
        $crate::VariantOf<$list>
    };
}

// =============================================================================
// Folds
// =============================================================================

/// Sum of the keys of the given keyed types (`0` for none).
#[macro_export]
macro_rules! sum_sizes {
    ($($t:ty),* $(,)?) => {
        $crate::sum_sizes::<$crate::tlist![$($t),*]>()
    };
}

/// Fold of the keys with a [`SizeOp`](crate::list::reduce::SizeOp), from `init`.
#[macro_export]
macro_rules! reduce_sizes {
    ($op:ty, $init:expr; $($t:ty),* $(,)?) => {
        $crate::reduce_sizes::<$op, $crate::tlist![$($t),*]>($init)
    };
}

// =============================================================================
// Type equality
// =============================================================================

/// Implemented only when `Self` and `T` are the same type.
#[diagnostic::on_unimplemented(
    message = "type mismatch: `{Self}` is not `{T}`",
    label = "these types differ"
)]
pub trait TypeEq<T: ?Sized> {}

impl<T: ?Sized> TypeEq<T> for T {}

/// Compile-time assertion that two types are identical.
///
/// ```
/// tola_tql::assert_type_eq!(tola_tql::tlist![u8], tola_tql::list::Cons<u8, tola_tql::list::Nil>);
/// ```
///
/// ```compile_fail
/// tola_tql::assert_type_eq!(u8, u16);
/// ```
#[macro_export]
macro_rules! assert_type_eq {
    ($a:ty, $b:ty $(,)?) => {
        const _: () = {
            const fn __assert_type_eq<A: ?Sized + $crate::TypeEq<B>, B: ?Sized>() {}
            __assert_type_eq::<$a, $b>();
        };
    };
}
