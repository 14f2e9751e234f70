//! Internal generators used by the `tola-tql` crate itself.

pub mod key;
pub mod peano;
pub mod token;
pub mod tuple;
