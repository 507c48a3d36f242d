//! Argument map builder: raw tokens → canonical flag → last value.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::args::token::Token;

/// Mapping from canonical flag name (`-X`) to the last value seen for it.
///
/// Values stay strings until an accessor coerces them. `-X` and `-noX` are
/// stored under separate keys; negation is resolved at read time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArgMap {
    entries: BTreeMap<String, String>,
}

impl ArgMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from a full argument vector.
    ///
    /// The first element is the program name and is skipped.
    pub fn parse<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_args(argv.into_iter().skip(1))
    }

    /// Build a map from arguments that no longer carry the program name.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();

        for raw in args {
            let raw = raw.as_ref();
            match Token::classify(raw) {
                Token::Flag { name, value } => {
                    map.entries.insert(format!("-{name}"), value);
                }
                Token::Positional(_) => {
                    tracing::trace!("Ignoring non-flag argument {:?}", raw);
                }
            }
        }

        tracing::debug!(entries = map.entries.len(), "Parsed command-line arguments");
        map
    }

    /// Raw stored value for `flag`, if present in any form.
    pub fn get(&self, flag: &str) -> Option<&str> {
        self.entries.get(flag).map(String::as_str)
    }

    /// Whether `flag` was given as its own key.
    pub fn contains(&self, flag: &str) -> bool {
        self.entries.contains_key(flag)
    }

    /// Store `value` under `flag`, replacing any previous value.
    pub(crate) fn insert(&mut self, flag: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(flag.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
