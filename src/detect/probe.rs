//! Autoref-based probes for undeclared concrete types.
//!
//! This module implements the "Inherent Const Fallback" pattern.
//!
//! ## How it works
//!
//! For each capability X we want to detect:
//! 1. Define a fallback trait with `const IS_X: bool = false`
//! 2. Implement fallback for `Detect<T>` for all T
//! 3. Implement an inherent const `IS_X = true` for `Detect<T>` where T has X
//!
//! When resolving `Detect::<Concrete>::IS_X`, the compiler:
//! - If `Concrete` has X, finds the inherent const (true)
//! - Otherwise, finds the trait const (false)
//!
//! The fallback traits have to be in scope at the use site, otherwise a
//! missing capability is a compile error instead of `false`. Import them
//! together with `Detect` through `plot_caps::detect::*` or the prelude:
//!
//! ```
//! use plot_caps::detect::*;
//!
//! struct Opaque;
//!
//! assert!(Detect::<Vec<f64>>::IS_ITERABLE);
//! assert!(!Detect::<Opaque>::IS_ITERABLE);
//! assert!(!Detect::<Opaque>::IS_TYPE_CAPS);
//! ```
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! In `fn foo<T>()` the fallback always wins; use [`TypeCaps`] there.
//!
//! [`TypeCaps`]: crate::detect::TypeCaps

use core::marker::PhantomData;

/// Carrier for the probe consts: `Detect::<T>::IS_ITERABLE` and friends.
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Generate fallback trait + inherent const for one capability.
macro_rules! impl_detect {
    ($Name:ident => $CONST:ident where $($bound:tt)+) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Name Fallback>] { const $CONST: bool = false; }
            impl<X: ?Sized> [<$Name Fallback>] for Detect<X> {}
            impl<X: ?Sized> Detect<X> where $($bound)+ { pub const $CONST: bool = true; }
        }
    };
}

// Dereference-based: a shared borrow hands out an iterator.
impl_detect!(Iterable => IS_ITERABLE where for<'a> &'a X: IntoIterator);
impl_detect!(StringLike => IS_STRING_LIKE where X: AsRef<str>);
impl_detect!(TypeCaps => IS_TYPE_CAPS where X: crate::detect::TypeCaps);
impl_detect!(Clone => IS_CLONE where X: Clone);
impl_detect!(Debug => IS_DEBUG where X: core::fmt::Debug);

#[cfg(test)]
mod tests {
    use super::*;

    struct Opaque;

    #[test]
    fn test_probe_iterable() {
        assert!(Detect::<[u8; 3]>::IS_ITERABLE);
        assert!(!Detect::<u8>::IS_ITERABLE);
        assert!(!Detect::<Opaque>::IS_ITERABLE);
    }

    #[test]
    fn test_probe_string_like() {
        assert!(Detect::<str>::IS_STRING_LIKE);
        assert!(!Detect::<[char; 2]>::IS_STRING_LIKE);
    }

    #[test]
    fn test_probe_declared() {
        assert!(Detect::<f64>::IS_TYPE_CAPS);
        assert!(!Detect::<Opaque>::IS_TYPE_CAPS);
        assert!(!Detect::<Opaque>::IS_CLONE);
        assert!(Detect::<u8>::IS_DEBUG);
    }
}
