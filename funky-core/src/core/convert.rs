use std::convert::identity;

use crate::{Either, Side, SideError, SideResult};

impl<L, R> Either<L, R> {
    /// Take the left value, or report that the value is on the right.
    pub fn try_into_left(self) -> SideResult<L> {
        self.fold(Ok, |_| Err(SideError::new(Side::Left, Side::Right)))
    }

    /// Take the right value, or report that the value is on the left.
    pub fn try_into_right(self) -> SideResult<R> {
        self.fold(|_| Err(SideError::new(Side::Right, Side::Left)), Ok)
    }

    pub fn left_or_else<F>(self, f: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        self.fold(identity, f)
    }

    pub fn right_or_else<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        self.fold(f, identity)
    }

    /// Swap the two sides.
    pub fn flip(self) -> Either<R, L> { self.fold(Either::Right, Either::Left) }

    /// `Right` becomes `Ok`, `Left` becomes `Err`.
    pub fn into_result(self) -> Result<R, L> { self.fold(Err, Ok) }
}

impl<T> Either<T, T> {
    pub fn into_inner(self) -> T { self.fold(identity, identity) }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}
