use thiserror::Error;

use crate::Side;

/// A value was requested from the side of an [`Either`](crate::Either) that is
/// not populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected a {expected} value, found a {found} value")]
pub struct SideError {
    /// The side the caller asked for.
    pub expected: Side,
    /// The side the value is actually on.
    pub found: Side,
}

impl SideError {
    pub fn new(expected: Side, found: Side) -> Self { Self { expected, found } }
}

pub type SideResult<T> = Result<T, SideError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_side_error_message() {
        let error = SideError::new(Side::Right, Side::Left);
        assert_eq!(error.to_string(), "expected a Right value, found a Left value");
    }
}
