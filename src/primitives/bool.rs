//! Type-level booleans.
//!
//! Every capability answer in [`crate::detect`] is `Present` or `Absent`.
//! Composite predicates combine answers with [`And`] / [`Not`], and
//! "detected or default" picks a type with [`Bool::If`].

/// A capability answer.
pub trait Bool: 'static {
    const VALUE: bool;

    /// `Then` for `Present`, `Else` for `Absent`.
    type If<Then: ?Sized, Else: ?Sized>: ?Sized;

    type And<Other: Bool>: Bool;

    type Not: Bool;
}

/// The capability is there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Present;

/// The capability is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then: ?Sized, Else: ?Sized> = Then;
    type And<Other: Bool> = Other;
    type Not = Absent;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then: ?Sized, Else: ?Sized> = Else;
    type And<Other: Bool> = Absent;
    type Not = Present;
}

/// `A && B`
pub type And<A, B> = <A as Bool>::And<B>;

/// `!A`
pub type Not<A> = <A as Bool>::Not;

#[cfg(test)]
mod tests {
    use super::*;
    use core::any::TypeId;

    #[test]
    fn test_logic_tables() {
        assert!(<And<Present, Present> as Bool>::VALUE);
        assert!(!<And<Present, Absent> as Bool>::VALUE);
        assert!(!<And<Absent, Present> as Bool>::VALUE);
        assert!(<Not<Absent> as Bool>::VALUE);
        assert!(!<Not<Present> as Bool>::VALUE);
    }

    #[test]
    fn test_if_selects_type() {
        assert_eq!(TypeId::of::<<Present as Bool>::If<u8, ()>>(), TypeId::of::<u8>());
        assert_eq!(TypeId::of::<<Absent as Bool>::If<u8, ()>>(), TypeId::of::<()>());
    }
}
