//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Via)]` | on struct | Accessor + forwarding layers |

mod via;

pub use via::expand_derive_via;
