//! Environment-variable substitution for tokens.
//!
//! Applied to every token independently, after tokenization, so token
//! boundaries survive substitution: a token that is nothing but an
//! unset variable becomes the empty string, it does not disappear.

use std::sync::OnceLock;

use regex::{Captures, Regex};

// Escaped dollars are parked on a sentinel byte so the pattern cannot
// see them; raw input lines never contain NUL.
const SENTINEL: char = '\u{0}';

fn var_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // The pattern is a literal; a failure here is a programming error.
        #[allow(clippy::expect_used)]
        let re = Regex::new(r"\$(\w+)|\$\{([^}]+)\}").expect("static pattern compiles");
        re
    })
}

/// Expand `$NAME` and `${NAME}` against the process environment.
///
/// Unset variables expand to the empty string; `\$` yields a literal
/// `$` with no substitution attempted on what follows.
pub fn expand(token: &str) -> String {
    expand_with(token, |name| std::env::var(name).ok())
}

/// Expansion with an injectable lookup, for callers that should not
/// depend on ambient process state.
pub fn expand_with<F>(token: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let masked = token.replace("\\$", &SENTINEL.to_string());
    let replaced = var_pattern().replace_all(&masked, |caps: &Captures<'_>| {
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();
        lookup(name).unwrap_or_default()
    });
    replaced.replace(SENTINEL, "$")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(name: &str) -> Option<String> {
        match name {
            "HOME" => Some("/home/demo".into()),
            "EMPTY" => Some(String::new()),
            _ => None,
        }
    }

    #[test]
    fn bare_and_braced_forms() {
        assert_eq!(expand_with("$HOME", env), "/home/demo");
        assert_eq!(expand_with("${HOME}", env), "/home/demo");
        assert_eq!(expand_with("${HOME}/sub", env), "/home/demo/sub");
    }

    #[test]
    fn unset_variables_become_empty() {
        assert_eq!(expand_with("$UNDEFINED_VAR", env), "");
        assert_eq!(expand_with("a${NOPE}b", env), "ab");
    }

    #[test]
    fn escaped_dollar_is_literal_and_blocks_substitution() {
        assert_eq!(expand_with(r"\$HOME", env), "$HOME");
        assert_eq!(expand_with(r"\$HOME and $HOME", env), "$HOME and /home/demo");
    }

    #[test]
    fn dollar_without_a_name_passes_through() {
        assert_eq!(expand_with("$", env), "$");
        assert_eq!(expand_with("100$ flat", env), "100$ flat");
    }

    #[test]
    fn multiple_substitutions_in_one_token() {
        assert_eq!(expand_with("$HOME:$HOME", env), "/home/demo:/home/demo");
    }
}
