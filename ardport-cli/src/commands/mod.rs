//! Command implementations.

pub(crate) mod completions;
pub(crate) mod list;
pub(crate) mod resolve;
