//! Shared argument state.
//!
//! Provides a cloneable handle to the current [`ArgMap`]. The host builds it
//! once at startup; tests build a fresh context per case.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::args::accessor;
use crate::args::map::ArgMap;

/// Thread-safe holder of the parsed arguments.
///
/// Uses a read-write lock: any number of readers, while
/// [`parse_parameters`](Self::parse_parameters) replaces the map exclusively.
#[derive(Clone, Default)]
pub struct ArgContext {
    inner: Arc<RwLock<ArgMap>>,
}

impl ArgContext {
    /// Create a context with no arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context and parse `argv` into it.
    pub fn from_argv<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ctx = Self::new();
        ctx.parse_parameters(argv);
        ctx
    }

    /// Parse a full argument vector (program name first) and replace the
    /// current map wholesale.
    pub fn parse_parameters<I, S>(&self, argv: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let map = ArgMap::parse(argv);
        *self.inner.write() = map;
    }

    /// Read `flag` as a boolean; see [`accessor::get_bool_arg`].
    pub fn get_bool_arg(&self, flag: &str, default: bool) -> bool {
        accessor::get_bool_arg(&self.inner.read(), flag, default)
    }

    /// Read `flag` as a string or integer, depending on `default`'s type.
    pub fn get_arg<D: accessor::ArgDefault>(&self, flag: &str, default: D) -> D::Output {
        self.inner.read().get_arg(flag, default)
    }

    /// Read `flag` as an integer; see [`accessor::get_int_arg`].
    pub fn get_int_arg(&self, flag: &str, default: i64) -> i64 {
        accessor::get_int_arg(&self.inner.read(), flag, default)
    }

    /// Whether `flag` was given as its own key (the `-no` form does not count).
    pub fn is_arg_set(&self, flag: &str) -> bool {
        self.inner.read().contains(flag)
    }

    /// Set `flag` to `value` unless it is already present.
    ///
    /// Returns `true` if the value was stored.
    pub fn soft_set_arg(&self, flag: &str, value: &str) -> bool {
        let mut map = self.inner.write();
        if map.contains(flag) {
            tracing::trace!("Soft-set of {} skipped, already given", flag);
            return false;
        }
        map.insert(flag, value);
        true
    }

    /// Boolean form of [`soft_set_arg`](Self::soft_set_arg), stored as `"1"`/`"0"`.
    pub fn soft_set_bool_arg(&self, flag: &str, value: bool) -> bool {
        self.soft_set_arg(flag, if value { "1" } else { "0" })
    }

    /// A clone of the current map.
    pub fn snapshot(&self) -> ArgMap {
        self.inner.read().clone()
    }
}
