pub mod combinators;
pub mod convert;
pub mod either;
pub mod tag;
