//! # Layer 2: Type-Lists and Queries
//!
//! - `node.rs`: `Nil` / `Cons`, length, head/tail, concatenation, `tlist!`.
//! - `partition.rs`: Stable partition against a pivot-relative relation.
//! - `sort.rs`: Quicksort over keyed lists (`Asc` / `Desc`).
//! - `extract.rs`: Materialization as tuple or coproduct.
//! - `variant.rs`: `Coprod` / `CNil` with inject, get and fold.
//! - `reduce.rs`: Sum/min/max folds over keys.
//! - `inspect.rs`: Runtime inspection of lists.

pub mod extract;
pub mod inspect;
pub mod node;
pub mod partition;
pub mod reduce;
pub mod sort;
pub mod variant;

pub use extract::{ToTuple, ToVariant, TupleOf, VariantOf};
pub use inspect::{Inspect, InspectKeys};
pub use node::{Append, Concat, Cons, NonEmpty, Nil, TypeList};
pub use partition::{Bucket, FilterBy, Partition, PartitionByKey, RejectIfBy, Split};
pub use reduce::{
    max_size, min_size, reduce_sizes, sum_sizes, AddOp, FoldOp, MaxOp, MinOp, Reduce, SizeOp,
};
pub use sort::{Sort, Sorted, TypeSort};
pub use variant::{CNil, Coprod, Fold, Member};
