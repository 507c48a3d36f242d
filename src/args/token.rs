//! Token classifier: raw arg → flag or positional.

/// A single classified command-line token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Dash-prefixed token with its dashes stripped.
    Flag {
        /// Bare name, without leading dashes and without the `=value` part.
        name: String,
        /// Inline value after the first `=`, or empty when there is none.
        value: String,
    },
    /// Anything that does not start with a dash.
    Positional(String),
}

impl Token {
    /// Classify one raw token.
    ///
    /// `-X` and `--X` classify identically. Only the first `=` splits, so
    /// `-X=a=b` has value `a=b`.
    pub fn classify(raw: &str) -> Self {
        let Some(rest) = raw.strip_prefix('-') else {
            return Token::Positional(raw.to_string());
        };
        let rest = rest.strip_prefix('-').unwrap_or(rest);

        let (name, value) = match rest.split_once('=') {
            Some((name, value)) => (name, value),
            None => (rest, ""),
        };

        Token::Flag {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    /// Map key for a flag token: the bare name with one dash put back.
    ///
    /// Returns `None` for positional tokens.
    pub fn key(&self) -> Option<String> {
        match self {
            Token::Flag { name, .. } => Some(format!("-{name}")),
            Token::Positional(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Token;

    fn flag(name: &str, value: &str) -> Token {
        Token::Flag {
            name: name.into(),
            value: value.into(),
        }
    }

    #[test]
    fn single_and_double_dash_classify_the_same() {
        assert_eq!(Token::classify("-LOC=1"), flag("LOC", "1"));
        assert_eq!(Token::classify("--LOC=1"), flag("LOC", "1"));
    }

    #[test]
    fn bare_flag_has_empty_value() {
        assert_eq!(Token::classify("-LOC"), flag("LOC", ""));
        assert_eq!(Token::classify("-LOC="), flag("LOC", ""));
    }

    #[test]
    fn splits_on_first_equals_only() {
        assert_eq!(Token::classify("-conf=a=b"), flag("conf", "a=b"));
    }

    #[test]
    fn only_two_dashes_are_stripped() {
        assert_eq!(Token::classify("---x"), flag("-x", ""));
        assert_eq!(Token::classify("---x").key().as_deref(), Some("--x"));
    }

    #[test]
    fn lone_dashes_produce_degenerate_key() {
        assert_eq!(Token::classify("-").key().as_deref(), Some("-"));
        assert_eq!(Token::classify("--").key().as_deref(), Some("-"));
        assert_eq!(Token::classify("--=5"), flag("", "5"));
    }

    #[test]
    fn non_dash_tokens_are_positional() {
        assert_eq!(Token::classify("file.txt"), Token::Positional("file.txt".into()));
        assert_eq!(Token::classify(""), Token::Positional(String::new()));
        assert!(Token::classify("x-y").key().is_none());
    }

    #[test]
    fn negated_form_is_not_folded() {
        assert_eq!(Token::classify("--noLOC").key().as_deref(), Some("-noLOC"));
    }
}
