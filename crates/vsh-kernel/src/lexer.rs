//! Shell-style tokenization of raw command lines.
//!
//! Splits a line into words with quoting rules:
//! - single quotes: everything literal until the closing quote
//! - double quotes: group a region; `\"`, `\\` and `\$` are escapes
//! - backslash outside quotes escapes the next character
//!
//! A `\$` sequence is kept as-is in the token so the expander can turn
//! it into a literal `$` without substituting. Unbalanced quotes and a
//! trailing backslash are [`ParseError`]s, not tokens.

use crate::error::ParseError;

/// Tokenize one raw line into words.
pub fn tokenize(line: &str) -> Result<Vec<String>, ParseError> {
    Lexer::new(line).run()
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn run(mut self) -> Result<Vec<String>, ParseError> {
        let mut words = Vec::new();
        loop {
            self.skip_whitespace();
            if self.pos >= self.input.len() {
                break;
            }
            words.push(self.next_word()?);
        }
        Ok(words)
    }

    fn current_char(&self) -> char {
        self.input[self.pos..].chars().next().unwrap_or('\0')
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.input.len() {
            let c = self.current_char();
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Read one word; adjacent quoted and unquoted runs fuse into a
    /// single token (`a"b c"d` is one word).
    fn next_word(&mut self) -> Result<String, ParseError> {
        let mut word = String::new();
        while self.pos < self.input.len() {
            let c = self.current_char();
            match c {
                c if c.is_whitespace() => break,
                '\'' => self.read_single_quoted(&mut word)?,
                '"' => self.read_double_quoted(&mut word)?,
                '\\' => {
                    self.pos += 1;
                    self.read_escape(&mut word)?;
                }
                _ => {
                    word.push(c);
                    self.pos += c.len_utf8();
                }
            }
        }
        Ok(word)
    }

    fn read_escape(&mut self, word: &mut String) -> Result<(), ParseError> {
        if self.pos >= self.input.len() {
            return Err(ParseError::TrailingEscape);
        }
        let c = self.current_char();
        if c == '$' {
            // Preserved for the expander.
            word.push('\\');
        }
        word.push(c);
        self.pos += c.len_utf8();
        Ok(())
    }

    fn read_single_quoted(&mut self, word: &mut String) -> Result<(), ParseError> {
        self.pos += 1; // opening '
        while self.pos < self.input.len() {
            let c = self.current_char();
            self.pos += c.len_utf8();
            if c == '\'' {
                return Ok(());
            }
            word.push(c);
        }
        Err(ParseError::UnbalancedQuote('\''))
    }

    fn read_double_quoted(&mut self, word: &mut String) -> Result<(), ParseError> {
        self.pos += 1; // opening "
        while self.pos < self.input.len() {
            let c = self.current_char();
            self.pos += c.len_utf8();
            match c {
                '"' => return Ok(()),
                '\\' if self.pos < self.input.len() => {
                    let escaped = self.current_char();
                    self.pos += escaped.len_utf8();
                    match escaped {
                        '$' => {
                            word.push('\\');
                            word.push('$');
                        }
                        '"' | '\\' => word.push(escaped),
                        other => {
                            word.push('\\');
                            word.push(other);
                        }
                    }
                }
                _ => word.push(c),
            }
        }
        Err(ParseError::UnbalancedQuote('"'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(tokenize("ls  a   b").unwrap(), vec!["ls", "a", "b"]);
    }

    #[test]
    fn empty_line_has_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   \t ").unwrap().is_empty());
    }

    #[test]
    fn single_quotes_are_literal() {
        assert_eq!(
            tokenize("echo 'a b' '$X'").unwrap(),
            vec!["echo", "a b", "$X"]
        );
    }

    #[test]
    fn double_quotes_group_and_escape() {
        assert_eq!(
            tokenize(r#"echo "a b" "say \"hi\"""#).unwrap(),
            vec!["echo", "a b", "say \"hi\""]
        );
    }

    #[test]
    fn adjacent_runs_fuse_into_one_word() {
        assert_eq!(tokenize(r#"a"b c"d"#).unwrap(), vec!["ab cd"]);
    }

    #[test]
    fn escaped_dollar_is_preserved_for_the_expander() {
        assert_eq!(tokenize(r"echo \$HOME").unwrap(), vec!["echo", r"\$HOME"]);
        assert_eq!(tokenize(r#"echo "\$HOME""#).unwrap(), vec!["echo", r"\$HOME"]);
    }

    #[test]
    fn backslash_escapes_whitespace_outside_quotes() {
        assert_eq!(tokenize(r"a\ b").unwrap(), vec!["a b"]);
    }

    #[test]
    fn unbalanced_quotes_are_parse_errors() {
        assert_eq!(
            tokenize("echo 'oops"),
            Err(ParseError::UnbalancedQuote('\''))
        );
        assert_eq!(
            tokenize("echo \"oops"),
            Err(ParseError::UnbalancedQuote('"'))
        );
    }

    #[test]
    fn trailing_backslash_is_a_parse_error() {
        assert_eq!(tokenize("echo x\\"), Err(ParseError::TrailingEscape));
    }
}
