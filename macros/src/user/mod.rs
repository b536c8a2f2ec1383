//! User-facing derive implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(TypeCaps)]` | on struct/enum | Declare capabilities |
//! | `#[derive(Proxyable)]` | on struct | Build views from a field |

mod proxyable;
mod type_caps;

pub use proxyable::expand_derive_proxyable;
pub use type_caps::expand_derive_type_caps;
