//! Procedural macros for plot-caps
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `is_detected!(T: Expr)` | - | Probe a concrete type for traits |
//! | `#[derive(TypeCaps)]` | struct/enum | Declare iterable / string / scalar shape |
//! | `#[derive(Proxyable)]` | struct | Let a struct be passed as a `View` |
//!
//! ## Example
//!
//! ```ignore
//! assert!(is_detected!(Vec<f64>: IntoIterator & !Copy));
//!
//! #[derive(TypeCaps, Proxyable)]
//! #[caps(elem = f64)]
//! struct Series {
//!     #[proxy(f64)]
//!     values: Vec<f64>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod common;
mod user;

/// Check at compile time whether a concrete type implements a boolean
/// combination of traits.
///
/// Each trait is checked with an "Inherent Const Fallback" probe, so an
/// unimplemented trait yields `false` instead of a compile error. Generic
/// parameters are not seen through: inside `fn f<T: Clone>()`,
/// `is_detected!(T: Clone)` is `false`. Use `TypeCaps` there.
///
/// The expansion is a constant expression, so it can initialize `const`
/// items.
///
/// # Usage
/// ```ignore
/// assert!(is_detected!(String: Clone & !Copy));
/// assert!(is_detected!([u8; 4]: IntoIterator | core::fmt::Display));
/// ```
#[proc_macro]
pub fn is_detected(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::DetectInput);
    common::expand_detect(&input).into()
}

/// Derive `TypeCaps`.
///
/// Without attributes the type is a scalar. `#[caps(elem = T)]` declares an
/// iterable whose shared borrow yields `&T` (checked); `#[caps(string)]`
/// declares a string.
#[proc_macro_derive(TypeCaps, attributes(caps))]
pub fn derive_type_caps(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_type_caps(input).into()
}

/// Derive `Proxyable<T>` from the field marked `#[proxy(T)]`.
#[proc_macro_derive(Proxyable, attributes(proxy))]
pub fn derive_proxyable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_proxyable(input).into()
}
