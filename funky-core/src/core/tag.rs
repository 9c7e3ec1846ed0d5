//! Side tags.
//!
//! A tag wraps a single value and records which side of an [`Either`] it is
//! meant for. Tags are converted into an `Either` with [`From`]/[`Into`],
//! which lets the other side's type come from context.
use std::fmt;

use crate::Either;

/// A value headed for the left side of an [`Either`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct LeftTag<L>(L);

/// A value headed for the right side of an [`Either`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct RightTag<R>(R);

/// Tag a value for the left side.
pub fn left<L>(value: L) -> LeftTag<L> { LeftTag(value) }

/// Tag a value for the right side.
pub fn right<R>(value: R) -> RightTag<R> { RightTag(value) }

impl<L> LeftTag<L> {
    pub fn into_inner(self) -> L { self.0 }

    pub fn map<LL, F>(self, f: F) -> LeftTag<LL>
    where
        F: FnOnce(L) -> LL,
    {
        LeftTag(f(self.0))
    }
}

impl<R> RightTag<R> {
    pub fn into_inner(self) -> R { self.0 }

    pub fn map<RR, F>(self, f: F) -> RightTag<RR>
    where
        F: FnOnce(R) -> RR,
    {
        RightTag(f(self.0))
    }

    /// Feed the value to a function producing an [`Either`].
    ///
    /// A right tag is already known to be on the success side, so this is
    /// just `f(value)`.
    pub fn flat_map<L, RR, F>(self, f: F) -> Either<L, RR>
    where
        F: FnOnce(R) -> Either<L, RR>,
    {
        f(self.0)
    }
}

impl<L, R> From<LeftTag<L>> for Either<L, R> {
    fn from(tag: LeftTag<L>) -> Self { Either::Left(tag.0) }
}

impl<L, R> From<RightTag<R>> for Either<L, R> {
    fn from(tag: RightTag<R>) -> Self { Either::Right(tag.0) }
}

impl<L: fmt::Display> fmt::Display for LeftTag<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Left({})", self.0) }
}

impl<R: fmt::Display> fmt::Display for RightTag<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Right({})", self.0) }
}

/// Method-style tagging, available on every sized type.
pub trait Tag: Sized {
    fn tag_left(self) -> LeftTag<Self> { left(self) }

    fn tag_right(self) -> RightTag<Self> { right(self) }
}

impl<T> Tag for T {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_tags_pick_the_side() {
        let l: Either<i32, i32> = left(1).into();
        let r: Either<i32, i32> = right(1).into();
        assert_eq!(l, Either::Left(1));
        assert_eq!(r, Either::Right(1));

        let l: Either<&str, i32> = "err".tag_left().into();
        let r: Either<&str, i32> = 5_i32.tag_right().into();
        assert!(l.is_left());
        assert!(r.is_right());
    }

    #[test]
    fn test_tag_map() {
        assert_eq!(right(2).map(|x| x * 3).into_inner(), 6);
        assert_eq!(left("a").map(str::len).into_inner(), 1);
    }

    #[test]
    fn test_right_tag_flat_map() {
        let value: Either<String, i32> =
            right(3).flat_map(|x| if x > 0 { Either::Right(x + 1) } else { Either::Left("neg".into()) });
        assert_eq!(value, Either::Right(4));
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(left("err").to_string(), "Left(err)");
        assert_eq!(right(6).to_string(), "Right(6)");
    }
}
