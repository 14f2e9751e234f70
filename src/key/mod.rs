//! # Layer 1: Keys and Relations
//!
//! - `keyed.rs`: `Keyed` wrappers (`Size`, `SizeOf`, `AlignOf`) and key selectors.
//! - `relation.rs`: Pivot-relative relations, comparators and sort orders.
//! - `token.rs`: Operator tokens and first-match dispatch (`Match`, `OpType`).

pub mod keyed;
pub mod relation;
pub mod token;

pub use keyed::{
    AlignOf, Apply, ByAlignOf, BySize, BySizeOf, HasSize, KeyOf, Keyed, Layout, MapInner,
    MapKey, Originals, Size, SizeOf,
};
pub use relation::{
    ops, AtLeast, AtMost, Above, Asc, Below, By, Comparator, Desc, Differs, Equals, Holds, Order,
    Relation,
};
pub use token::{Case, KeyEq, Match, MatchStep, NoMatch, OpTable, OpType, Otherwise, Select, Token};
