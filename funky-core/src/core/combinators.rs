//! Combinators over [`Either`].
//!
//! All of them consume the receiver and build a new value through
//! [`Either::fold`], so a handler for the side that is not populated is never
//! called. The biased ones (`flat_map`, `or_else`, `select_many`) treat
//! `Right` as the success side and pass a `Left` through untouched.
use std::convert::identity;

use crate::{Either, Side, SideError, SideResult};

impl<L, R> Either<L, R> {
    /// Transform whichever side is populated, keeping the side.
    pub fn map<LL, RR, FL, FR>(self, f_left: FL, f_right: FR) -> Either<LL, RR>
    where
        FL: FnOnce(L) -> LL,
        FR: FnOnce(R) -> RR,
    {
        self.fold(|l| Either::Left(f_left(l)), |r| Either::Right(f_right(r)))
    }

    pub fn map_left<LL, F>(self, f: F) -> Either<LL, R>
    where
        F: FnOnce(L) -> LL,
    {
        self.map(f, identity)
    }

    pub fn map_right<RR, F>(self, f: F) -> Either<L, RR>
    where
        F: FnOnce(R) -> RR,
    {
        self.map(identity, f)
    }

    /// Chain a computation that may itself end up on the left side.
    ///
    /// A `Left` is returned unchanged and `f` is not called. For a `Right`,
    /// the result of `f` is returned as is.
    pub fn flat_map<RR, F>(self, f: F) -> Either<L, RR>
    where
        F: FnOnce(R) -> Either<L, RR>,
    {
        self.fold(Either::Left, f)
    }

    /// Keep a `Right`, or replace a `Left` with the result of `fallback`.
    ///
    /// `fallback` is only called for a `Left`.
    pub fn or_else<F>(self, fallback: F) -> Either<L, R>
    where
        F: FnOnce() -> Either<L, R>,
    {
        self.fold(|_| fallback(), Either::Right)
    }

    /// Query-style alias of [`map`](Self::map).
    pub fn select<LL, RR, FL, FR>(self, f_left: FL, f_right: FR) -> Either<LL, RR>
    where
        FL: FnOnce(L) -> LL,
        FR: FnOnce(R) -> RR,
    {
        self.map(f_left, f_right)
    }

    /// Bind and then project both right values into one.
    ///
    /// `bind` sees the current right value by reference; if it returns a
    /// `Right`, `project` receives the current value and the new one. A
    /// `Left` from either step stops the chain before `project` runs.
    pub fn select_many<U, RR, B, P>(self, bind: B, project: P) -> Either<L, RR>
    where
        B: FnOnce(&R) -> Either<L, U>,
        P: FnOnce(R, U) -> RR,
    {
        self.flat_map(|t| bind(&t).map_right(|u| project(t, u)))
    }

    /// Query-style alias of [`flat_map`](Self::flat_map).
    pub fn select_many_flat<RR, F>(self, f: F) -> Either<L, RR>
    where
        F: FnOnce(R) -> Either<L, RR>,
    {
        self.flat_map(f)
    }
}

impl<FL, FR> Either<FL, FR> {
    /// Apply a wrapped function to a wrapped argument on the same side.
    ///
    /// The left function takes the left argument and the right function the
    /// right argument. When the two values are on different sides nothing is
    /// called and the mismatch is reported as a [`SideError`] whose `expected`
    /// side is the side of the function.
    pub fn apply<L, R, LL, RR>(self, arg: Either<L, R>) -> SideResult<Either<LL, RR>>
    where
        FL: FnOnce(L) -> LL,
        FR: FnOnce(R) -> RR,
    {
        // each handler owns only the half of the argument it can use
        let (left_arg, right_arg) = arg.fold(|l| (Some(l), None), |r| (None, Some(r)));
        self.fold(
            |f_left| {
                left_arg
                    .map(|l| Either::Left(f_left(l)))
                    .ok_or(SideError::new(Side::Left, Side::Right))
            },
            |f_right| {
                right_arg
                    .map(|r| Either::Right(f_right(r)))
                    .ok_or(SideError::new(Side::Right, Side::Left))
            },
        )
    }
}
