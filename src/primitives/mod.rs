//! # Layer 0: Primitives
//!
//! - `bool.rs`: Type-level booleans (Present/Absent).

pub mod bool;

pub use bool::{Absent, And, Bool, Not, Present};
