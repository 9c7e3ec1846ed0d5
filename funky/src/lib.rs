//! A two-sided value type and the combinators to chain it.
//!
//! [`Either`] holds exactly one of a left value (the alternative, usually a
//! failure) or a right value (the success). Computations are chained with
//! [`Either::map`], [`Either::flat_map`], [`Either::or_else`] and friends, each
//! of which only ever calls the handler for the side that is populated.
//!
//! With the `macros` feature (on by default) the [`either!`] macro offers a
//! sequential notation for chains of `flat_map`:
//!
//! ```
//! use funky::prelude::*;
//!
//! fn positive(x: i32) -> Either<String, i32> {
//!     if x > 0 { right(x).into() } else { left(format!("{} is not positive", x)).into() }
//! }
//!
//! let sum = either! {
//!     a <- positive(2);
//!     b <- positive(3);
//!     yield a + b
//! };
//! assert_eq!(sum, Either::Right(5));
//!
//! let sum = either! {
//!     a <- positive(-2);
//!     b <- positive(3);
//!     yield a + b
//! };
//! assert_eq!(sum.to_string(), "Left(-2 is not positive)");
//! ```

pub use funky_core::*;
#[cfg(feature = "macros")]
pub use funky_macros::either;

pub mod prelude {
    pub use funky_core::{left, right, Either, LeftTag, RightTag, Side, Tag};
    #[cfg(feature = "macros")]
    pub use funky_macros::either;
}
