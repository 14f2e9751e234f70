#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables Vec-returning inspection helpers in no_std

//! # tola-tql
//!
//! Compile-time queries over type-lists.
//!
//! **Filter, partition and sort sets of types by a key during compilation.**
//!
//! ## Architecture
//!
//! A query takes a list of types, attaches a key to each (usually a byte
//! size), and produces a new type: a list, a tuple or a tagged union. Nothing
//! happens at runtime; every step is trait resolution.
//!
//! ### 1. Keys
//! Keys are type-level 64-bit numbers written as 16 hexadecimal digits:
//!
//! ```text
//! key!(1200) -> Uint<0,0,0,0,0,0,0,0,0,0,0,0,0,4,B,0> -> DCons<X0, .. DCons<X0, DNil>>
//! ```
//!
//! Comparison walks the digits most significant first.
//!
//! ### 2. Relations
//! `By<C>` compares an element's key with a pivot's key. Operator tokens
//! (`op!("<=")`) are FNV-1a hash streams mapped to relations by first-match
//! dispatch (`OpType`).
//!
//! ### 3. Queries
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool, Ordering, Nibble (X0-XF), Uint keys, hash streams        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Keys                                                    |
//! |  - Keyed wrappers (Size, SizeOf, AlignOf), Relation, Match        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Type-Lists                                              |
//! |  - Partition, Sort, ToTuple, ToVariant, Reduce, Inspect           |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_tql::prelude::*;
//!
//! #[derive(HasSize)] #[size = 10] struct A;
//! #[derive(HasSize)] #[size = 20] struct B;
//! #[derive(HasSize)] #[size = 5]  struct C;
//! #[derive(HasSize)] #[size = 15] struct D;
//!
//! // Types no larger than A
//! assert_type_eq!(filter_by![A, "<="; A, B, C, D], tlist![A, C]);
//!
//! // Ascending by declared size, as a tuple
//! assert_type_eq!(sort_types![A, B, C, D], (C, A, D, B));
//!
//! assert_eq!(sum_sizes![A, B], 30);
//! ```
//!
//! ## Errors
//!
//! Every error is a compile error. An element without a key:
//!
//! ```compile_fail
//! use tola_tql::prelude::*;
//! #[derive(HasSize)] #[size = 10] struct A;
//! struct NoKey;
//! type Bad = filter_by![A, "<"; NoKey];
//! let _: Option<Bad> = None;
//! ```
//!
//! An unknown operator maps to `NoMatch`, which is not a relation:
//!
//! ```compile_fail
//! use tola_tql::prelude::*;
//! #[derive(HasSize)] #[size = 10] struct A;
//! type Bad = filter_by![A, "<>"; A];
//! let _: Option<Bad> = None;
//! ```
//!
//! ## Limits
//!
//! - Sorting or partitioning long lists may need
//!   `#![recursion_limit = "256"]` (or more) in the calling crate. The
//!   compiler reports the limit; results are never truncated.
//! - `ToTuple` is defined for lists of at most 32 elements. `ToVariant` has no
//!   such limit.

// Allow `::tola_tql` to work inside the crate itself
extern crate self as tola_tql;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for key_of! macro
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Keys, Relations, Tokens
// =============================================================================
pub mod key;

// =============================================================================
// Layer 2: Type-Lists
// =============================================================================
pub mod list;

// Query sugar (filter_by!, sort_types!, assert_type_eq!, ...)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use key::*;
pub use list::*;
pub use primitives::bool::{Absent, Bool, Present};
pub use primitives::ordering::{Equal, Greater, Less, Ordering};
pub use primitives::stream::{DefaultMaxDepth, Peano, S, Z};
pub use primitives::unsigned::{CmpOf, Compare, Uint, Unsigned};
pub use syntax_macros::TypeEq;

// Re-export proc-macros
pub use macros::{key, op, HasSize, Layout};

/// Common items for type-list queries.
pub mod prelude {
    pub use crate::key::{
        // Keys
        AlignOf, BySize, ByAlignOf, BySizeOf, HasSize, Keyed, Layout, Size, SizeOf,
        // Relations
        ops, Asc, By, Desc, OpType, Relation,
    };
    pub use crate::list::{
        // Structure
        Concat, Cons, Nil, TypeList,
        // Queries
        FilterBy, Partition, PartitionByKey, RejectIfBy, Sort, Split, TypeSort,
        // Extraction
        CNil, Coprod, ToTuple, ToVariant, TupleOf, VariantOf,
        // Folds and inspection
        max_size, min_size, AddOp, Inspect, InspectKeys, MaxOp, MinOp,
    };
    pub use crate::primitives::bool::{Absent, Bool, Present};
    pub use macros::{key, op, HasSize, Layout};
    // Note: tlist!, filter_by!, sort_types!, assert_type_eq!, ... are #[macro_export] so they're at crate root
    pub use crate::{
        assert_type_eq, filter_by, handlers, partition_by, partition_by_key, reduce_sizes,
        reject_if_by, sort_types, sort_types_by, sort_types_desc, sum_sizes, tlist, to_tuple,
        to_variant,
    };
}
