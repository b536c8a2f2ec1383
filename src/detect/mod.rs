//! # Layer 1: Capability Detection
//!
//! Answers "does type `T` support operation X" at compile time. There are
//! two ways to ask:
//!
//! 1. [`TypeCaps`] - a declared capability table. Works in generic code
//!    (`fn f<C: TypeCaps>()`) and drives the derived predicates below.
//! 2. Probes - [`is_detected!`](crate::is_detected) and [`Detect`] consts.
//!    No declaration needed, but only concrete types are answered
//!    correctly (generic parameters fall back to `false`).
//!
//! Iterability is derived by dereferencing the borrowed iterator: a type
//! is iterable when `&C: IntoIterator`, and its element is what the items
//! point at. Containers do not have to publish an element alias.
//!
//! ```
//! use plot_caps::detect::{is_iterable_1d, is_iterable_2d, is_iterable_pair};
//! use std::collections::BTreeMap;
//!
//! assert!(is_iterable_1d::<Vec<f64>>());
//! assert!(is_iterable_2d::<Vec<Vec<f64>>>());
//! assert!(is_iterable_pair::<BTreeMap<String, f64>>());
//! assert!(!is_iterable_1d::<f64>());
//! ```

#[cfg(feature = "detect")]
pub mod probe;
mod std_types;

use crate::primitives::{And, Bool, Not, Present};

// The fallback traits must be in scope for a `Detect` const to answer
// `false`, so they travel with it.
#[cfg(feature = "detect")]
pub use probe::{
    CloneFallback, DebugFallback, Detect, IterableFallback, StringLikeFallback, TypeCapsFallback,
};

/// Declared capabilities of a type.
///
/// Implemented for the scalars, strings, tuples and containers of `core`,
/// `alloc` and `std`. Smart pointers answer for what they point at. User
/// types implement it by hand or with `#[derive(TypeCaps)]`.
///
/// A derived `#[caps(elem = T)]` only holds where `&Self` iterates over
/// `&T`. A type that cannot be borrowed-iterated gets no impl at all, so
/// asking about it is a compile error rather than a wrong answer:
///
/// ```compile_fail
/// use plot_caps::TypeCaps;
/// use plot_caps::detect::is_iterable;
///
/// #[derive(TypeCaps)]
/// #[caps(elem = f64)]
/// struct NotIterable<T>(T);
///
/// let _ = is_iterable::<NotIterable<u8>>();
/// ```
///
/// The same holds when the items are not `&T`:
///
/// ```compile_fail
/// use plot_caps::TypeCaps;
/// use plot_caps::detect::is_iterable;
///
/// #[derive(TypeCaps)]
/// #[caps(elem = f64)]
/// struct Counts(Vec<u32>);
///
/// impl<'a> IntoIterator for &'a Counts {
///     type Item = &'a u32;
///     type IntoIter = std::slice::Iter<'a, u32>;
///     fn into_iter(self) -> Self::IntoIter {
///         self.0.iter()
///     }
/// }
///
/// let _ = is_iterable::<Counts>();
/// ```
pub trait TypeCaps {
    /// A shared borrow iterates (`&Self: IntoIterator`).
    type Iterable: Bool;

    /// What the borrowed iterator's items dereference to. `Self` when not iterable.
    type Elem: ?Sized + TypeCaps;

    /// Two-component key/value shape.
    type Pair: Bool;

    /// A real string, as opposed to a sequence of chars.
    type StringLike: Bool;

    /// First component of a pair, `Self` otherwise.
    type First: ?Sized;

    /// Second component of a pair, `Self` otherwise.
    type Second: ?Sized;
}

// =============================================================================
// Detected-or
// =============================================================================

/// `Op` when `Found` is `Present`, otherwise `Default`.
///
/// Lets composite predicates try an operation and fall back to a sentinel.
pub type DetectedOr<Found, Op, Default> = <Found as Bool>::If<Op, Default>;

/// Element type of `C`, or `Default` when `C` is not iterable.
pub type ElemOr<C, Default> = DetectedOr<IsIterable<C>, <C as TypeCaps>::Elem, Default>;

// =============================================================================
// Derived predicates (type level)
// =============================================================================

pub type IsIterable<C> = <C as TypeCaps>::Iterable;

/// Iterable and the element is itself iterable.
pub type HasIterableElem<C> = IsIterable<<C as TypeCaps>::Elem>;

/// Something like `Vec<f64>`.
pub type IsIterable1d<C> = And<IsIterable<C>, Not<HasIterableElem<C>>>;

/// Something like `Vec<Vec<f64>>`.
pub type IsIterable2d<C> = And<IsIterable<C>, HasIterableElem<C>>;

/// Something like `BTreeMap<K, V>`.
pub type IsIterablePair<C> = And<IsIterable1d<C>, <<C as TypeCaps>::Elem as TypeCaps>::Pair>;

pub type IsString<T> = <T as TypeCaps>::StringLike;

pub type IsPair<T> = <T as TypeCaps>::Pair;

// =============================================================================
// Derived predicates (value level)
// =============================================================================

#[inline]
pub const fn is_iterable<C: TypeCaps + ?Sized>() -> bool {
    <IsIterable<C> as Bool>::VALUE
}

#[inline]
pub const fn is_iterable_1d<C: TypeCaps + ?Sized>() -> bool {
    <IsIterable1d<C> as Bool>::VALUE
}

#[inline]
pub const fn is_iterable_2d<C: TypeCaps + ?Sized>() -> bool {
    <IsIterable2d<C> as Bool>::VALUE
}

#[inline]
pub const fn is_iterable_pair<C: TypeCaps + ?Sized>() -> bool {
    <IsIterablePair<C> as Bool>::VALUE
}

#[inline]
pub const fn is_string<T: TypeCaps + ?Sized>() -> bool {
    <IsString<T> as Bool>::VALUE
}

#[inline]
pub const fn is_pair<T: TypeCaps + ?Sized>() -> bool {
    <IsPair<T> as Bool>::VALUE
}

// =============================================================================
// IterableTraits
// =============================================================================

/// Element, key and mapped types of an iterable.
///
/// For map-like inputs (pair elements) `Key`/`Mapped` are the pair
/// components; for plain sequences both are the element type.
pub trait IterableTraits: TypeCaps {
    type Value: ?Sized;
    const IS_MAP: bool;
    type Key: ?Sized;
    type Mapped: ?Sized;
}

impl<C> IterableTraits for C
where
    C: TypeCaps<Iterable = Present> + ?Sized,
{
    type Value = C::Elem;
    const IS_MAP: bool = <<C::Elem as TypeCaps>::Pair as Bool>::VALUE;
    type Key = <C::Elem as TypeCaps>::First;
    type Mapped = <C::Elem as TypeCaps>::Second;
}
