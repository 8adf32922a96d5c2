//! Console presentation helpers.

pub mod output;
