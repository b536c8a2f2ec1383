//! # Layer 2: Borrowed Views
//!
//! [`View<'a, T>`] is the uniform "sequence of `T`" parameter type of the
//! chart-building APIs. Callers pass an array, a vector, a literal or a
//! single scalar; the API sees one borrowed, read-only window and copies
//! out of it before the call returns.
//!
//! ```
//! use plot_caps::view::View;
//!
//! fn total<'a>(v: impl Into<View<'a, f64>>) -> f64 {
//!     v.into().iter().sum()
//! }
//!
//! assert_eq!(total(&[1.0, 2.0, 3.0]), 6.0);
//! assert_eq!(total(&vec![4.0, 5.0]), 9.0);
//! assert_eq!(total(&5.0_f64), 5.0);
//! assert_eq!(total(View::empty()), 0.0);
//! ```
//!
//! A view never allocates, copies or frees. Its lifetime parameter ties it
//! to the source, so it cannot outlive the data it points at.

mod proxy;

pub use proxy::Proxyable;

use core::fmt;
use core::ops::Index;
use core::slice;

/// Read-only, non-owning view over contiguous `T`s.
///
/// Copying a view copies the borrow; both copies alias the same storage.
pub struct View<'a, T> {
    slice: &'a [T],
}

impl<'a, T> View<'a, T> {
    /// Empty view, count 0.
    #[inline]
    pub const fn new() -> Self {
        View { slice: &[] }
    }

    /// Empty view, count 0.
    #[inline]
    pub const fn empty() -> Self {
        Self::new()
    }

    /// Explicit empty marker.
    #[inline]
    pub const fn null() -> Self {
        Self::new()
    }

    /// View over a single value, count 1.
    #[inline]
    pub const fn from_ref(value: &'a T) -> Self {
        View { slice: slice::from_ref(value) }
    }

    #[inline]
    pub const fn from_slice(slice: &'a [T]) -> Self {
        View { slice }
    }

    /// View over anything declared [`Proxyable`] to `T`.
    #[inline]
    pub fn of<U: Proxyable<T> + ?Sized>(source: &'a U) -> Self {
        View { slice: source.proxy() }
    }

    /// View from an explicit (pointer, count) pair.
    ///
    /// A null `ptr` is accepted when `len` is 0.
    ///
    /// # Safety
    ///
    /// When `len > 0`, `ptr` must point at `len` initialized, contiguous
    /// `T`s that stay alive and unmodified for `'a`. See
    /// [`slice::from_raw_parts`].
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *const T, len: usize) -> Self {
        if len == 0 {
            return Self::new();
        }
        // SAFETY: upheld by the caller.
        View { slice: unsafe { slice::from_raw_parts(ptr, len) } }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.slice.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    /// Pointer to the first element. Dangling (never dereferenceable) when empty.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.slice.as_ptr()
    }

    #[inline]
    pub const fn as_slice(&self) -> &'a [T] {
        self.slice
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.slice.iter()
    }

    /// First element.
    ///
    /// The view must be non-empty: debug builds assert, release builds panic
    /// on the slice access.
    #[inline]
    pub fn front(&self) -> &'a T {
        debug_assert!(!self.is_empty(), "front() on an empty View");
        &self.slice[0]
    }

    /// Last element. Same precondition as [`front`](Self::front).
    #[inline]
    pub fn back(&self) -> &'a T {
        debug_assert!(!self.is_empty(), "back() on an empty View");
        &self.slice[self.slice.len() - 1]
    }

    #[inline]
    pub fn first(&self) -> Option<&'a T> {
        self.slice.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&'a T> {
        self.slice.last()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.slice.get(index)
    }

    /// Copy the contents into owned storage.
    #[cfg(feature = "alloc")]
    #[inline]
    pub fn to_vec(&self) -> alloc::vec::Vec<T>
    where
        T: Clone,
    {
        self.slice.to_vec()
    }
}

impl<T> Clone for View<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for View<'_, T> {}

impl<T> Default for View<'_, T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for View<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slice).finish()
    }
}

impl<T: PartialEq> PartialEq for View<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.slice == other.slice
    }
}

impl<T: PartialEq> PartialEq<[T]> for View<'_, T> {
    #[inline]
    fn eq(&self, other: &[T]) -> bool {
        self.slice == other
    }
}

impl<T> Index<usize> for View<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len(),
            "View index {index} out of range for length {}",
            self.len()
        );
        &self.slice[index]
    }
}

impl<'a, T> IntoIterator for View<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter()
    }
}

impl<'a, T> IntoIterator for &View<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<'a, T, U> From<&'a U> for View<'a, T>
where
    U: Proxyable<T> + ?Sized,
{
    #[inline]
    fn from(source: &'a U) -> Self {
        Self::of(source)
    }
}

/// `None` is the null marker.
impl<'a, T, U> From<Option<&'a U>> for View<'a, T>
where
    U: Proxyable<T> + ?Sized,
{
    #[inline]
    fn from(source: Option<&'a U>) -> Self {
        source.map_or_else(Self::null, Self::of)
    }
}

impl<T: crate::detect::TypeCaps> crate::detect::TypeCaps for View<'_, T> {
    type Iterable = crate::primitives::Present;
    type Elem = T;
    type Pair = crate::primitives::Absent;
    type StringLike = crate::primitives::Absent;
    type First = Self;
    type Second = Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_forms() {
        let a: View<'_, f64> = View::new();
        let b: View<'_, f64> = View::null();
        let c: View<'_, f64> = None::<&[f64]>.into();
        assert!(a.is_empty() && b.is_empty() && c.is_empty());
        assert_eq!(View::<u8>::default().len(), 0);
    }

    #[test]
    fn test_scalar_is_count_one() {
        let v = 2.5_f64;
        let view = View::from_ref(&v);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0], 2.5);
        assert!(core::ptr::eq(view.as_ptr(), &v));
    }

    #[test]
    fn test_copies_alias() {
        let data = [1, 2, 3];
        let a: View<'_, i32> = (&data).into();
        let b = a;
        assert_eq!(a.as_ptr(), b.as_ptr());
        assert_eq!(*a.front(), 1);
        assert_eq!(*b.back(), 3);
    }

    #[test]
    fn test_raw_parts() {
        let data = [7u16, 8];
        let view = unsafe { View::from_raw_parts(data.as_ptr(), data.len()) };
        assert_eq!(view.as_slice(), &data);
        let empty = unsafe { View::<u16>::from_raw_parts(core::ptr::null(), 0) };
        assert!(empty.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let data = [1.0_f32];
        let view = View::from_slice(&data);
        let _ = view[1];
    }

    #[test]
    fn test_thread_safety_follows_slice() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<View<'static, f64>>();
    }
}
