//! Typed accessors: argument map → bool / string / integer.
//!
//! All accessors take the canonical flag spelling (`-X`). None of them
//! fail: absent flags yield the caller's default, and a present integer
//! flag that does not parse yields `0`.

use crate::args::error::ArgError;
use crate::args::map::ArgMap;

/// The negated spelling of `flag`: `-X` → `-noX`.
pub fn negated_flag(flag: &str) -> String {
    let bare = flag.strip_prefix('-').unwrap_or(flag);
    format!("-no{bare}")
}

/// Read `flag` as a boolean.
///
/// The plain form wins whenever it is present: it is `false` only for the
/// value `"0"`. Without it, `-noX` yields `false` unless its own value is
/// `"0"`. With neither, `default` is returned.
pub fn get_bool_arg(map: &ArgMap, flag: &str, default: bool) -> bool {
    if let Some(value) = map.get(flag) {
        return value != "0";
    }
    if let Some(value) = map.get(&negated_flag(flag)) {
        return value == "0";
    }
    default
}

/// Read `flag` as a string, verbatim. Bare flags read as `""`.
pub fn get_arg(map: &ArgMap, flag: &str, default: &str) -> String {
    map.get(flag).unwrap_or(default).to_string()
}

/// Read `flag` as a base-10 integer.
///
/// A present value that does not parse (including `""`) reads as `0`,
/// not as `default`.
pub fn get_int_arg(map: &ArgMap, flag: &str, default: i64) -> i64 {
    match try_get_int_arg(map, flag) {
        Ok(n) => n,
        Err(ArgError::Missing { .. }) => default,
        Err(ArgError::InvalidInteger { .. }) => 0,
    }
}

/// Strict integer read for callers that validate their own input.
pub fn try_get_int_arg(map: &ArgMap, flag: &str) -> Result<i64, ArgError> {
    let value = map.get(flag).ok_or_else(|| ArgError::Missing {
        flag: flag.to_string(),
    })?;

    value
        .parse::<i64>()
        .map_err(|source| ArgError::InvalidInteger {
            flag: flag.to_string(),
            value: value.to_string(),
            source,
        })
}

/// Default value types accepted by [`ArgMap::get_arg`].
///
/// Lets one accessor name serve both the string and the integer form,
/// picked by the type of the default.
pub trait ArgDefault {
    type Output;

    fn read(self, map: &ArgMap, flag: &str) -> Self::Output;
}

impl ArgDefault for &str {
    type Output = String;

    fn read(self, map: &ArgMap, flag: &str) -> String {
        get_arg(map, flag, self)
    }
}

impl ArgDefault for String {
    type Output = String;

    fn read(self, map: &ArgMap, flag: &str) -> String {
        map.get(flag).map(str::to_string).unwrap_or(self)
    }
}

impl ArgDefault for i64 {
    type Output = i64;

    fn read(self, map: &ArgMap, flag: &str) -> i64 {
        get_int_arg(map, flag, self)
    }
}

impl ArgMap {
    /// Read `flag` as a string or integer, depending on `default`'s type.
    pub fn get_arg<D: ArgDefault>(&self, flag: &str, default: D) -> D::Output {
        default.read(self, flag)
    }

    /// See [`get_bool_arg`].
    pub fn get_bool_arg(&self, flag: &str, default: bool) -> bool {
        get_bool_arg(self, flag, default)
    }

    /// See [`try_get_int_arg`].
    pub fn try_get_int_arg(&self, flag: &str) -> Result<i64, ArgError> {
        try_get_int_arg(self, flag)
    }
}
