pub(crate) mod core;
pub(crate) mod support;

pub use crate::core::{
    either::{Either, Side},
    tag::{left, right, LeftTag, RightTag, Tag},
};

pub use crate::support::error::{SideError, SideResult};
