//! # Layer 0: Primitives
//!
//! Basic building blocks for type-level queries:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `ordering.rs`: Type-level three-way ordering (Less/Equal/Greater).
//! - `nibble.rs`: Type-level 4-bit values (X0-XF) with equality and order tables.
//! - `unsigned.rs`: Type-level 64-bit keys built from nibbles.
//! - `stream.rs`: Token hash streams and Peano numbers.

pub mod bool;
pub mod const_utils;
pub mod nibble;
pub mod ordering;
pub mod stream;
pub mod unsigned;

// Re-export key types at this level
pub use bool::{Absent, Bool, Present};
pub use nibble::{Nibble, NibbleCmp, NibbleEq, SelectNibble};
pub use ordering::{Equal, Greater, Less, Ordering};
pub use stream::{DefaultMaxDepth, HashStream, HashStream16, Peano, StreamEq, S, Z};
pub use unsigned::{CmpOf, Compare, Uint, Unsigned};
