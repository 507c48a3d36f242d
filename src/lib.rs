//! Flag parsing for `-name[=value]` style argument vectors.
//!
//! Raw arguments are folded into an [`args::ArgMap`] and read back through
//! typed accessors with default-value fallback and `-noX` negation.

pub mod args;
pub mod logging;

pub use args::{ArgContext, ArgError, ArgMap};
