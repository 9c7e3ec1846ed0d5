use proc_macro::TokenStream;

use crate::comprehension::expand_either;

mod comprehension;

/// Chain `Either` computations in sequence.
///
/// Statements are separated by `;`:
///
/// - `pat <- expr` binds the right value of `expr` and stops at a left one.
/// - `let pat = expr` is an ordinary binding.
/// - `expr` on its own is evaluated for its side, and its right value is
///   discarded.
///
/// The last statement is either an expression producing the final `Either`,
/// or `yield expr`, which puts a plain value on the right side.
///
/// A bound pattern becomes a closure parameter, so it must be irrefutable:
/// `(a, b) <- pair()` works, `Some(x) <- lookup()` does not compile.
///
/// `<-` written without spaces is always read as a bind, even where it could
/// be a comparison with a negated value. Write `x < -1` to compare.
///
/// ```
/// use funky_core::Either;
/// use funky_macros::either;
///
/// fn half(x: i32) -> Either<String, i32> {
///     if x % 2 == 0 { Either::Right(x / 2) } else { Either::Left(format!("{} is odd", x)) }
/// }
///
/// let value = either! {
///     a <- half(8);
///     b <- half(a);
///     yield a + b
/// };
/// assert_eq!(value, Either::Right(6));
/// ```
#[proc_macro]
pub fn either(input: TokenStream) -> TokenStream {
    expand_either(input.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
