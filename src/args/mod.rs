//! Command-line argument map and typed accessors.
//!
//! ```text
//! argv → Token::classify → ArgMap → accessors → bool / String / i64
//! ```
//!
//! The map keeps raw strings; coercion and `-noX` negation happen only when
//! a value is read. Nothing here returns an error to the lenient callers:
//! absent flags fall back to the caller's default.

mod accessor;
mod context;
mod error;
mod map;
mod token;

pub use accessor::{
    get_arg, get_bool_arg, get_int_arg, negated_flag, try_get_int_arg, ArgDefault,
};
pub use context::ArgContext;
pub use error::ArgError;
pub use map::ArgMap;
pub use token::Token;
