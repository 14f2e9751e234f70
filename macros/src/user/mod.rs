//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(HasSize)]` | on struct/enum with `#[size = N]` | Declare a size key |
//! | `#[derive(Layout)]` | on non-generic struct/enum | Expose storage size and alignment keys |

pub mod has_size;
pub mod layout;

pub use has_size::expand_derive_has_size;
pub use layout::expand_derive_layout;
