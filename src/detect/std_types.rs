//! `TypeCaps` declarations for core, alloc and std types.

use super::TypeCaps;
use crate::primitives::{Absent, Present};

/// Non-iterable, non-pair, non-string leaf types.
macro_rules! impl_scalar_caps {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TypeCaps for $ty {
                type Iterable = Absent;
                type Elem = Self;
                type Pair = Absent;
                type StringLike = Absent;
                type First = Self;
                type Second = Self;
            }
        )*
    };
}

macro_rules! impl_string_caps {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TypeCaps for $ty {
                type Iterable = Absent;
                type Elem = Self;
                type Pair = Absent;
                type StringLike = Present;
                type First = Self;
                type Second = Self;
            }
        )*
    };
}

/// Sequences whose borrowed iterator yields `&T`.
macro_rules! impl_seq_caps {
    ($(impl<$($extra:ident),*> for $ty:ty;)*) => {
        $(
            impl<T: TypeCaps, $($extra),*> TypeCaps for $ty {
                type Iterable = Present;
                type Elem = T;
                type Pair = Absent;
                type StringLike = Absent;
                type First = Self;
                type Second = Self;
            }
        )*
    };
}

/// Maps whose borrowed iterator yields `(&K, &V)`; the element is the pair.
macro_rules! impl_map_caps {
    ($(impl<$($extra:ident),*> for $ty:ty;)*) => {
        $(
            impl<K: TypeCaps, V: TypeCaps, $($extra),*> TypeCaps for $ty {
                type Iterable = Present;
                type Elem = (K, V);
                type Pair = Absent;
                type StringLike = Absent;
                type First = Self;
                type Second = Self;
            }
        )*
    };
}

impl_scalar_caps!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64, bool, char, (),
);

impl_string_caps!(str);

impl<A, B> TypeCaps for (A, B) {
    type Iterable = Absent;
    type Elem = Self;
    type Pair = Present;
    type StringLike = Absent;
    type First = A;
    type Second = B;
}

impl<T: TypeCaps> TypeCaps for [T] {
    type Iterable = Present;
    type Elem = T;
    type Pair = Absent;
    type StringLike = Absent;
    type First = Self;
    type Second = Self;
}

impl<T: TypeCaps, const N: usize> TypeCaps for [T; N] {
    type Iterable = Present;
    type Elem = T;
    type Pair = Absent;
    type StringLike = Absent;
    type First = Self;
    type Second = Self;
}

/// References answer for what they point at.
macro_rules! impl_ref_caps {
    ($($ty:ty),*) => {
        $(
            impl<T: TypeCaps + ?Sized> TypeCaps for $ty {
                type Iterable = T::Iterable;
                type Elem = T::Elem;
                type Pair = T::Pair;
                type StringLike = T::StringLike;
                type First = T::First;
                type Second = T::Second;
            }
        )*
    };
}

impl_ref_caps!(&T, &mut T);

/// Tuples other than pairs are plain values.
macro_rules! impl_tuple_caps {
    ($(($($name:ident),+)),* $(,)?) => {
        $(
            impl<$($name),+> TypeCaps for ($($name,)+) {
                type Iterable = Absent;
                type Elem = Self;
                type Pair = Absent;
                type StringLike = Absent;
                type First = Self;
                type Second = Self;
            }
        )*
    };
}

impl_tuple_caps!(
    (A),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
);

// `&Option<T>` yields zero or one `&T`.
impl<T: TypeCaps> TypeCaps for Option<T> {
    type Iterable = Present;
    type Elem = T;
    type Pair = Absent;
    type StringLike = Absent;
    type First = Self;
    type Second = Self;
}

/// Ranges iterate by value; only stepping ranges (integers, chars) are declared.
macro_rules! impl_range_caps {
    ($($range:ident),*) => {
        $(
            impl<T: TypeCaps> TypeCaps for core::ops::$range<T>
            where
                core::ops::$range<T>: Iterator<Item = T>,
            {
                type Iterable = Present;
                type Elem = T;
                type Pair = Absent;
                type StringLike = Absent;
                type First = Self;
                type Second = Self;
            }
        )*
    };
}

impl_range_caps!(Range, RangeInclusive);

#[cfg(feature = "alloc")]
mod alloc_types {
    use super::TypeCaps;
    use crate::primitives::{Absent, Present};
    use alloc::borrow::Cow;
    use alloc::boxed::Box;
    use alloc::collections::{BTreeMap, BTreeSet, BinaryHeap, LinkedList, VecDeque};
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec::Vec;

    impl_string_caps!(String, Cow<'_, str>);

    // Owning pointers answer for their pointee, like references do:
    // `Box<[f64]>` and `Rc<[f64]>` are flat sequences, `Arc<str>` a string.
    impl_ref_caps!(Box<T>, Rc<T>, Arc<T>);

    impl_seq_caps! {
        impl<> for Vec<T>;
        impl<> for VecDeque<T>;
        impl<> for LinkedList<T>;
        impl<> for BTreeSet<T>;
        impl<> for BinaryHeap<T>;
    }

    impl_map_caps! {
        impl<> for BTreeMap<K, V>;
    }
}

#[cfg(feature = "std")]
mod std_lib_types {
    use super::TypeCaps;
    use crate::primitives::{Absent, Present};
    use std::collections::{HashMap, HashSet};

    impl_seq_caps! {
        impl<S> for HashSet<T, S>;
    }

    impl_map_caps! {
        impl<S> for HashMap<K, V, S>;
    }
}
