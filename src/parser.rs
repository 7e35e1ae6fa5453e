//! Parser.

pub(crate) mod char;
pub(crate) mod details;
pub(crate) mod str;
