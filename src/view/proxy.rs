//! The adaptation point for [`View`](super::View) sources.

use super::View;

/// A type a `View<T>` can be built from without copying.
///
/// `proxy` yields the count and the first element as one borrowed slice.
/// Implement it for your own containers, or derive it:
///
/// ```
/// use plot_caps::Proxyable;
/// use plot_caps::view::View;
///
/// #[derive(Proxyable)]
/// struct Samples {
///     #[proxy(f64)]
///     values: Vec<f64>,
///     label: &'static str,
/// }
///
/// let s = Samples { values: vec![1.0, 2.0], label: "a" };
/// let view: View<'_, f64> = (&s).into();
/// assert_eq!(view.len(), 2);
/// # let _ = s.label;
/// ```
pub trait Proxyable<T> {
    fn proxy(&self) -> &[T];
}

impl<T> Proxyable<T> for [T] {
    #[inline]
    fn proxy(&self) -> &[T] {
        self
    }
}

/// Fixed-size arrays are always proxyable to their element type.
impl<T, const N: usize> Proxyable<T> for [T; N] {
    #[inline]
    fn proxy(&self) -> &[T] {
        self
    }
}

impl<T> Proxyable<T> for View<'_, T> {
    #[inline]
    fn proxy(&self) -> &[T] {
        self.as_slice()
    }
}

/// A single scalar is a sequence of one.
macro_rules! impl_scalar_proxy {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Proxyable<$ty> for $ty {
                #[inline]
                fn proxy(&self) -> &[$ty] {
                    core::slice::from_ref(self)
                }
            }
        )*
    };
}

impl_scalar_proxy!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64, bool, char,
);

#[cfg(feature = "alloc")]
mod alloc_types {
    use super::Proxyable;
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::sync::Arc;
    use alloc::vec::Vec;

    impl<T> Proxyable<T> for Vec<T> {
        #[inline]
        fn proxy(&self) -> &[T] {
            self
        }
    }

    impl<T> Proxyable<T> for Box<[T]> {
        #[inline]
        fn proxy(&self) -> &[T] {
            self
        }
    }

    // Shared pointers lend out whatever they point at.
    impl<T, U: Proxyable<T> + ?Sized> Proxyable<T> for Rc<U> {
        #[inline]
        fn proxy(&self) -> &[T] {
            (**self).proxy()
        }
    }

    impl<T, U: Proxyable<T> + ?Sized> Proxyable<T> for Arc<U> {
        #[inline]
        fn proxy(&self) -> &[T] {
            (**self).proxy()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_proxy_points_at_first_element() {
        let arr = [3.0_f64, 4.0, 5.0];
        let view: View<'_, f64> = (&arr).into();
        assert_eq!(view.len(), arr.len());
        assert_eq!(view.as_ptr(), arr.as_ptr());
    }

    #[test]
    fn test_literal_list() {
        let view: View<'_, f64> = (&[1.0, 2.0, 3.0]).into();
        assert_eq!(view.len(), 3);
        assert_eq!(view[1], 2.0);
    }

    #[test]
    fn test_view_of_view() {
        let data = [1u8, 2];
        let inner = View::from_slice(&data);
        let outer = View::of(&inner);
        assert_eq!(outer.as_ptr(), inner.as_ptr());
    }
}
