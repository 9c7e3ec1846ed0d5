//! The `Either` type and its elimination rule.
//!
//! An [`Either`] holds exactly one of two values. By convention the `Left`
//! side carries the alternative (usually a failure) and the `Right` side
//! carries the success value, but nothing in this crate depends on that
//! reading beyond which side the combinators short-circuit on.
//!
//! [`Either::fold`] is the single consuming elimination rule, and every
//! combinator in [`combinators`](super::combinators) and
//! [`convert`](super::convert) is written on top of it. The only other place
//! that looks at the variants directly is [`Either::as_ref`] (and its mutable
//! twin), which is the borrowing view `fold` cannot provide.
use std::fmt;

/// Which side of an [`Either`] is populated.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "Left"),
            Side::Right => write!(f, "Right"),
        }
    }
}

/// A value that is either a `L` or a `R`.
///
/// The variants can be written directly, or the value can be built from the
/// [`left`](crate::left)/[`right`](crate::right) tags, which is the way to
/// pick a side when `L` and `R` are the same type and the target type is only
/// known from context:
///
/// ```
/// use funky_core::{right, Either};
///
/// let value: Either<i32, i32> = right(3).into();
/// assert!(value.is_right());
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Either<L, R> {
    /// The alternative value.
    Left(L),
    /// The success value.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Create an `Either` holding a left value.
    pub fn from_left(left: L) -> Self { Either::Left(left) }

    /// Create an `Either` holding a right value.
    pub fn from_right(right: R) -> Self { Either::Right(right) }

    /// Consume the value, calling exactly one of the handlers.
    ///
    /// `on_left` runs only for a `Left` and `on_right` only for a `Right`; the
    /// handler for the other side is dropped without being called. The result
    /// of the handler is returned as is.
    pub fn fold<T, FL, FR>(self, on_left: FL, on_right: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    /// Consume the value for its side effects only.
    ///
    /// This is [`fold`](Self::fold) with handlers returning `()`.
    pub fn branch<FL, FR>(self, on_left: FL, on_right: FR)
    where
        FL: FnOnce(L),
        FR: FnOnce(R),
    {
        self.fold(on_left, on_right)
    }

    /// Borrow the populated side.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Mutably borrow the populated side.
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    pub fn side(&self) -> Side { self.as_ref().fold(|_| Side::Left, |_| Side::Right) }

    pub fn is_left(&self) -> bool { self.side() == Side::Left }

    pub fn is_right(&self) -> bool { self.side() == Side::Right }

    pub fn left(&self) -> Option<&L> { self.as_ref().fold(Some, |_| None) }

    pub fn right(&self) -> Option<&R> { self.as_ref().fold(|_| None, Some) }
}

impl<L, R> fmt::Display for Either<L, R>
where
    L: fmt::Display,
    R: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value: &dyn fmt::Display = self
            .as_ref()
            .fold(|l| l as &dyn fmt::Display, |r| r as &dyn fmt::Display);
        write!(f, "{}({})", self.side(), value)
    }
}
